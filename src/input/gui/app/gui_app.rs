use std::sync::Arc;
use std::time::Duration;
use egui::Context;
use egui_winit::State as EguiWinitState;
use crate::controllers::completion_board::CompletionBoard;
use crate::controllers::gallery::Gallery;
use crate::core::catalog::describe;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::exhibit_kinds::ExhibitKind;
use crate::core::flocking::params::{BOUNDARY_RADIUS_RANGE, POPULATION_RANGE};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::state::{GuiAppState, PanelCommand};
use crate::presenters::stage::raster::BACKGROUND;
use crate::presenters::stage::{TweenStage, Viewport, rasterize};
use winit::{
    event::WindowEvent,
    event_loop::EventLoop,
    window::Window,
};

/// Extra room around the fitted content so lifted elements stay in view.
const VIEW_MARGIN: f32 = 0.35;

pub struct GuiApp<T: GuiPresenterPort>
{
    width: u32,
    height: u32,
    pub scale_factor: f64,
    presenter: T,
    gallery: Gallery,
    stage: TweenStage,
    completion: Arc<CompletionBoard>,
    viewport: Option<Viewport>,
    ui_state: GuiAppState,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T>
{
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        mut gallery: Gallery,
    ) -> Self {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None,
        );

        let completion = Arc::new(CompletionBoard::default());
        gallery.set_completion_port(completion.clone());
        let ui_state = GuiAppState::from_gallery(&gallery);

        Self {
            width: size.width,
            height: size.height,
            scale_factor,
            presenter,
            gallery,
            stage: TweenStage::new(),
            completion,
            viewport: None,
            ui_state,
            egui_ctx,
            egui_state,
        }
    }

    /// Steps tweens and exhibits. Returns whether the picture changed.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        let applied = self.ui_state.apply(&mut self.gallery, &mut self.stage);
        let moved = self.stage.advance(elapsed);
        let report = self.gallery.advance(elapsed, &mut self.stage);

        applied || moved || report.state_changed
    }

    /// Whether the event loop should keep polling instead of waiting.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.gallery.any_running() || self.stage.active_tweens() > 0 || self.ui_state.has_pending()
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        let Ok(rect) = PixelRect::with_size(self.width, self.height) else {
            return Ok(());
        };

        if self.ui_state.reframe || self.viewport.is_none() {
            self.viewport = Viewport::fit(&self.stage, rect, VIEW_MARGIN);
            self.ui_state.reframe = self.viewport.is_none();
        }

        let frame = match self.viewport {
            Some(viewport) => rasterize(&self.stage, rect, viewport),
            None => {
                let mut frame = PixelBuffer::new(rect);
                frame.fill(BACKGROUND);
                frame
            }
        };

        self.presenter.render(&frame, egui_output, &self.egui_ctx)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return;
        }

        self.presenter.resize(width, height);
        self.ui_state.reframe = true;
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Gallery")
                .default_pos([10.0, 10.0])
                .default_size([300.0, 360.0])
                .show(ctx, |ui| {
                    ui.heading("Algorithm Gallery");
                    ui.separator();

                    let mut selected = self.ui_state.selected;
                    ui.horizontal(|ui| {
                        ui.label("Exhibit:");
                        egui::ComboBox::from_id_source("exhibit")
                            .selected_text(selected.display_name())
                            .show_ui(ui, |ui| {
                                for &kind in ExhibitKind::ALL {
                                    ui.selectable_value(&mut selected, kind, kind.display_name());
                                }
                            });
                    });
                    if selected != self.ui_state.selected {
                        self.ui_state.push(PanelCommand::Visit(selected));
                    }

                    ui.horizontal(|ui| {
                        if ui.button("Start").clicked() {
                            self.ui_state.push(PanelCommand::Start);
                        }
                        if ui.button("Stop").clicked() {
                            self.ui_state.push(PanelCommand::Stop);
                        }
                        if ui.button("Reset").clicked() {
                            self.ui_state.push(PanelCommand::Reset);
                        }
                    });

                    let mut speed = self.ui_state.speed;
                    ui.horizontal(|ui| {
                        ui.label("Speed:");
                        let response = ui.add(
                            egui::Slider::new(&mut speed, 0.25..=8.0)
                                .logarithmic(true)
                                .suffix("x"),
                        );
                        if response.changed() {
                            self.ui_state.push(PanelCommand::SetSpeed(speed));
                        }
                    });

                    if self.ui_state.selected == ExhibitKind::Flocking {
                        let mut population = self.ui_state.population;
                        ui.horizontal(|ui| {
                            ui.label("Boids:");
                            let slider = egui::Slider::new(&mut population, POPULATION_RANGE);
                            if ui.add(slider).changed() {
                                self.ui_state.push(PanelCommand::SetPopulation(population));
                            }
                        });

                        let mut radius = self.ui_state.boundary_radius;
                        ui.horizontal(|ui| {
                            ui.label("Boundary:");
                            let slider = egui::Slider::new(&mut radius, BOUNDARY_RADIUS_RANGE);
                            if ui.add(slider).changed() {
                                self.ui_state.push(PanelCommand::SetBoundaryRadius(radius));
                            }
                        });
                    }

                    ui.separator();
                    let info = describe(self.ui_state.selected);
                    ui.strong(info.name);
                    ui.label(format!(
                        "Time: {}  Space: {}",
                        info.time_complexity, info.space_complexity
                    ));
                    ui.label(info.description);
                    for rule in info.rules {
                        ui.label(format!("• {rule}"));
                    }
                    for (step, text) in info.how_it_works.iter().enumerate() {
                        ui.label(format!("{}. {text}", step + 1));
                    }

                    ui.separator();
                    let running = self
                        .gallery
                        .get(self.ui_state.selected)
                        .is_some_and(|exhibit| exhibit.as_visualizer().is_running());
                    ui.label(if running { "Running" } else { "Idle" });
                    if self.completion.is_completed(self.ui_state.selected) {
                        ui.colored_label(egui::Color32::LIGHT_GREEN, "Completed");
                    }
                });
        })
    }

    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }
}
