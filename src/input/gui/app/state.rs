use crate::controllers::gallery::Gallery;
use crate::core::exhibit_kinds::ExhibitKind;
use crate::core::ports::render_adapter::RenderAdapter;
use glam::Vec3;

/// A panel interaction, queued while egui runs and applied afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelCommand {
    /// Walks the visitor onto an exhibit's spot.
    Visit(ExhibitKind),
    Start,
    Stop,
    Reset,
    SetSpeed(f64),
    SetPopulation(usize),
    SetBoundaryRadius(f32),
}

pub struct GuiAppState {
    pub selected: ExhibitKind,
    pub speed: f64,
    pub population: usize,
    pub boundary_radius: f32,
    commands: Vec<PanelCommand>,
    /// Set whenever the element layout changed enough to refit the view.
    pub reframe: bool,
}

impl GuiAppState {
    #[must_use]
    pub fn from_gallery(gallery: &Gallery) -> Self {
        let flock = gallery.flock();

        Self {
            selected: ExhibitKind::default(),
            speed: gallery.speed(),
            population: flock.map_or(0, |flock| flock.population()),
            boundary_radius: flock.map_or(0.0, |flock| flock.boundary_radius()),
            commands: vec![PanelCommand::Visit(ExhibitKind::default())],
            reframe: true,
        }
    }

    pub fn push(&mut self, command: PanelCommand) {
        self.commands.push(command);
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.commands.is_empty()
    }

    /// Drains the queue against the gallery. Returns whether anything ran.
    pub fn apply(&mut self, gallery: &mut Gallery, adapter: &mut dyn RenderAdapter) -> bool {
        let commands = std::mem::take(&mut self.commands);
        let applied = !commands.is_empty();

        for command in commands {
            self.apply_one(command, gallery, adapter);
        }

        applied
    }

    fn apply_one(
        &mut self,
        command: PanelCommand,
        gallery: &mut Gallery,
        adapter: &mut dyn RenderAdapter,
    ) {
        match command {
            PanelCommand::Visit(kind) => {
                if let Some(spot) = gallery.spot(kind) {
                    self.selected = kind;
                    gallery.update_visitor(Vec3::new(spot.centre.x, 0.0, spot.centre.y), adapter);
                    self.reframe = true;
                }
            }
            PanelCommand::Start => {
                if let Some(exhibit) = gallery.get_mut(self.selected) {
                    let exhibit = exhibit.as_visualizer_mut();
                    if !exhibit.is_running() && !exhibit.start() {
                        exhibit.reset(adapter);
                        exhibit.start();
                    }
                }
            }
            PanelCommand::Stop => {
                if let Some(exhibit) = gallery.get_mut(self.selected) {
                    exhibit.as_visualizer_mut().stop(adapter);
                }
            }
            PanelCommand::Reset => {
                if let Some(exhibit) = gallery.get_mut(self.selected) {
                    exhibit.as_visualizer_mut().reset(adapter);
                    self.reframe = true;
                }
            }
            PanelCommand::SetSpeed(speed) => {
                gallery.set_speed(speed);
                self.speed = gallery.speed();
            }
            PanelCommand::SetPopulation(population) => {
                if let Some(flock) = gallery.flock_mut() {
                    flock.set_population(population, adapter);
                    self.population = flock.population();
                }
            }
            PanelCommand::SetBoundaryRadius(radius) => {
                if let Some(flock) = gallery.flock_mut() {
                    flock.set_boundary_radius(radius);
                    self.boundary_radius = flock.boundary_radius();
                }
            }
        }
    }
}
