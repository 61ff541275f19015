use std::marker::PhantomData;
use std::time::{Duration, Instant};

use tracing::error;
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};
use crate::{
    config::GalleryConfig,
    controllers::gallery::Gallery,
    input::gui::{
        app::{gui_app::GuiApp, ports::presenter::GuiPresenterPort},
        commands::ports::presenter_factory::GuiPresenterFactoryPort,
    },
};

/// Longest frame time fed to the exhibits after the loop was idle.
const MAX_FRAME_TIME: Duration = Duration::from_millis(100);

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: GalleryConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: GalleryConfig) -> Self {
        Self { presenter_factory, config, _phantom: PhantomData }
    }

    /// Opens the window and blocks until it is closed.
    pub fn execute(&self) {
        let event_loop = EventLoop::new().expect("Failed to create event loop");

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Algorithm Gallery")
                .with_inner_size(LogicalSize::new(1024.0, 640.0))
                .with_min_inner_size(LogicalSize::new(320.0, 240.0))
                .build(&event_loop)
                .expect("Failed to create window"),
        ));

        let presenter: P = self.presenter_factory.build(window);
        let gallery = Gallery::from_config(&self.config);
        let mut app = GuiApp::new(window, &event_loop, presenter, gallery);
        let mut redraw_pending = true;
        let mut last_tick = Instant::now();

        event_loop
            .run(|event, elwt| {
                match event {
                    Event::WindowEvent {
                        ref event,
                        window_id,
                    } if window_id == window.id() => {
                        let (egui_consumed, egui_repaint) = app.handle_window_event(window, event);

                        if egui_repaint || egui_consumed {
                            redraw_pending = true;
                        }

                        match event {
                            WindowEvent::CloseRequested => {
                                elwt.exit();
                            }
                            WindowEvent::RedrawRequested => {
                                redraw_pending = false;

                                let egui_output = app.update_ui(window);

                                app.egui_state.handle_platform_output(
                                    window,
                                    egui_output.platform_output.clone(),
                                );

                                if egui_output
                                    .viewport_output
                                    .values()
                                    .any(|v| v.repaint_delay.is_zero())
                                {
                                    redraw_pending = true;
                                }

                                if let Err(e) = app.render(egui_output) {
                                    error!("render error: {e}");
                                    elwt.exit();
                                }
                            }
                            WindowEvent::Resized(size) => {
                                app.resize(size.width, size.height);
                                redraw_pending = true;
                            }
                            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                                app.scale_factor = *scale_factor;
                                app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                                let size = window.inner_size();
                                app.resize(size.width, size.height);
                                redraw_pending = true;
                            }
                            _ => {}
                        }
                    }
                    Event::AboutToWait => {
                        let now = Instant::now();
                        let elapsed = now.duration_since(last_tick).min(MAX_FRAME_TIME);
                        last_tick = now;

                        if app.tick(elapsed) {
                            redraw_pending = true;
                        }

                        if redraw_pending {
                            window.request_redraw();
                        }

                        elwt.set_control_flow(if app.is_animating() {
                            ControlFlow::Poll
                        } else {
                            ControlFlow::Wait
                        });
                    }
                    _ => {}
                }
            })
            .expect("Event loop error");
    }
}
