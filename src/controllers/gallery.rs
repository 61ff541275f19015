use crate::config::GalleryConfig;
use crate::core::animator::AdvanceReport;
use crate::core::exhibit_kinds::ExhibitKind;
use crate::core::flocking::FlockExhibit;
use crate::core::lifecycle::Visualizer;
use crate::core::ports::completion::CompletionPort;
use crate::core::ports::render_adapter::RenderAdapter;
use crate::core::puzzle::PuzzleDriver;
use crate::core::puzzle::layout::TowerLayout;
use crate::core::sorting::layout::BarLayout;
use crate::core::sorting::sort_driver;
use crate::core::timing::{SPEED_RANGE, StepTiming};
use glam::{Vec2, Vec3};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Floor spot and bar anchor of every sort exhibit.
const SORT_STANDS: [(ExhibitKind, [f32; 2], [f32; 3]); 6] = [
    (ExhibitKind::BubbleSort, [5.0, 5.0], [5.0, -1.3, 2.0]),
    (ExhibitKind::InsertionSort, [-5.0, 5.0], [-5.0, -1.3, 2.0]),
    (ExhibitKind::SelectionSort, [5.0, -5.0], [5.0, -1.3, -8.0]),
    (ExhibitKind::QuickSort, [-5.0, -5.0], [-5.0, -1.3, -8.0]),
    (ExhibitKind::MergeSort, [0.0, 5.0], [0.0, -1.3, 2.0]),
    (ExhibitKind::HeapSort, [0.0, -5.0], [0.0, -1.3, -3.0]),
];

/// Square trigger area on the floor (x, z) in front of an exhibit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExhibitSpot {
    pub centre: Vec2,
    pub half_extent: f32,
}

impl ExhibitSpot {
    #[must_use]
    pub fn new(centre: Vec2, half_extent: f32) -> Self {
        Self {
            centre,
            half_extent,
        }
    }

    /// Strictly inside on both floor axes.
    #[must_use]
    pub fn contains(&self, visitor: Vec2) -> bool {
        let offset = (visitor - self.centre).abs();
        offset.x < self.half_extent && offset.y < self.half_extent
    }
}

/// One exhibit behind the shared lifecycle, keeping the concrete driver
/// reachable for exhibit-specific controls.
pub enum Exhibit {
    Sort(Box<dyn Visualizer>),
    Puzzle(PuzzleDriver),
    Flock(FlockExhibit),
}

impl Exhibit {
    #[must_use]
    pub fn as_visualizer(&self) -> &dyn Visualizer {
        match self {
            Self::Sort(driver) => &**driver,
            Self::Puzzle(driver) => driver,
            Self::Flock(exhibit) => exhibit,
        }
    }

    pub fn as_visualizer_mut(&mut self) -> &mut dyn Visualizer {
        match self {
            Self::Sort(driver) => &mut **driver,
            Self::Puzzle(driver) => driver,
            Self::Flock(exhibit) => exhibit,
        }
    }
}

struct Stand {
    spot: ExhibitSpot,
    exhibit: Exhibit,
}

/// Every exhibit of the gallery together with its trigger spot.
///
/// A visitor stepping onto a spot shows and starts that exhibit; stepping
/// off stops it and tears it down.
pub struct Gallery {
    stands: Vec<Stand>,
    base_timing: StepTiming,
    speed: f64,
}

impl Gallery {
    #[must_use]
    pub fn from_config(config: &GalleryConfig) -> Self {
        let base_timing = config.timing.base_timing();
        let speed = config.timing.speed;
        let timing = base_timing.scaled(speed);
        let half_extent = config.gallery.trigger_half_extent;
        let mut stands = Vec::with_capacity(ExhibitKind::ALL.len());

        for (kind, spot, anchor) in SORT_STANDS {
            let values = config
                .sequences
                .for_kind(kind)
                .map(<[i32]>::to_vec)
                .unwrap_or_default();
            let layout = BarLayout::at(Vec3::from_array(anchor));

            if let Some(driver) = sort_driver(kind, values, layout, timing) {
                stands.push(Stand {
                    spot: ExhibitSpot::new(Vec2::from_array(spot), half_extent),
                    exhibit: Exhibit::Sort(driver),
                });
            }
        }

        stands.push(Stand {
            spot: ExhibitSpot::new(config.gallery.puzzle_spot(), half_extent),
            exhibit: Exhibit::Puzzle(PuzzleDriver::new(
                config.puzzle.disk_count,
                TowerLayout::at(config.gallery.puzzle_anchor()),
                timing,
            )),
        });

        stands.push(Stand {
            spot: ExhibitSpot::new(config.gallery.flock_spot(), half_extent),
            exhibit: Exhibit::Flock(FlockExhibit::new(
                config.flock_params(),
                config.frame_limits(),
                config.gallery.flock_anchor(),
            )),
        });

        debug!(exhibits = stands.len(), "gallery assembled");

        Self {
            stands,
            base_timing,
            speed,
        }
    }

    pub fn kinds(&self) -> impl Iterator<Item = ExhibitKind> + '_ {
        self.stands
            .iter()
            .map(|stand| stand.exhibit.as_visualizer().kind())
    }

    #[must_use]
    pub fn get(&self, kind: ExhibitKind) -> Option<&Exhibit> {
        self.stands
            .iter()
            .map(|stand| &stand.exhibit)
            .find(|exhibit| exhibit.as_visualizer().kind() == kind)
    }

    pub fn get_mut(&mut self, kind: ExhibitKind) -> Option<&mut Exhibit> {
        self.stands
            .iter_mut()
            .map(|stand| &mut stand.exhibit)
            .find(|exhibit| exhibit.as_visualizer().kind() == kind)
    }

    #[must_use]
    pub fn spot(&self, kind: ExhibitKind) -> Option<ExhibitSpot> {
        self.stands
            .iter()
            .find(|stand| stand.exhibit.as_visualizer().kind() == kind)
            .map(|stand| stand.spot)
    }

    #[must_use]
    pub fn puzzle(&self) -> Option<&PuzzleDriver> {
        self.stands.iter().find_map(|stand| match &stand.exhibit {
            Exhibit::Puzzle(driver) => Some(driver),
            _ => None,
        })
    }

    #[must_use]
    pub fn flock(&self) -> Option<&FlockExhibit> {
        self.stands.iter().find_map(|stand| match &stand.exhibit {
            Exhibit::Flock(exhibit) => Some(exhibit),
            _ => None,
        })
    }

    pub fn flock_mut(&mut self) -> Option<&mut FlockExhibit> {
        self.stands.iter_mut().find_map(|stand| match &mut stand.exhibit {
            Exhibit::Flock(exhibit) => Some(exhibit),
            _ => None,
        })
    }

    /// Exhibits currently showing their elements.
    pub fn visible(&self) -> impl Iterator<Item = ExhibitKind> + '_ {
        self.stands
            .iter()
            .map(|stand| stand.exhibit.as_visualizer())
            .filter(|exhibit| exhibit.is_visible())
            .map(|exhibit| exhibit.kind())
    }

    /// Dispatches proximity for a visitor at `position`; only x and z count.
    pub fn update_visitor(&mut self, position: Vec3, adapter: &mut dyn RenderAdapter) {
        let floor = Vec2::new(position.x, position.z);

        for stand in &mut self.stands {
            let near = stand.spot.contains(floor);
            let exhibit = stand.exhibit.as_visualizer_mut();

            if near && !exhibit.is_visible() {
                info!(exhibit = %exhibit.kind(), "visitor arrived");
                exhibit.show(adapter);
                exhibit.start();
            } else if !near && exhibit.is_visible() {
                info!(exhibit = %exhibit.kind(), "visitor left");
                exhibit.stop(adapter);
                exhibit.hide(adapter);
            }
        }
    }

    /// Shows and starts one exhibit regardless of where the visitor is.
    /// Returns whether a run began.
    pub fn activate(&mut self, kind: ExhibitKind, adapter: &mut dyn RenderAdapter) -> bool {
        let Some(exhibit) = self.get_mut(kind) else {
            return false;
        };
        let exhibit = exhibit.as_visualizer_mut();

        exhibit.show(adapter);
        exhibit.start()
    }

    pub fn deactivate(&mut self, kind: ExhibitKind, adapter: &mut dyn RenderAdapter) {
        if let Some(exhibit) = self.get_mut(kind) {
            let exhibit = exhibit.as_visualizer_mut();
            exhibit.stop(adapter);
            exhibit.hide(adapter);
        }
    }

    #[must_use]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Rescales every stepwise exhibit's durations against the configured
    /// millisecond timing; replaces the configured speed rather than
    /// multiplying it. Speeds outside [`SPEED_RANGE`] are ignored.
    pub fn set_speed(&mut self, speed: f64) {
        if !SPEED_RANGE.contains(&speed) {
            return;
        }

        self.speed = speed;
        let timing = self.base_timing.scaled(speed);
        for stand in &mut self.stands {
            stand.exhibit.as_visualizer_mut().set_timing(timing);
        }
        debug!(speed, "gallery speed changed");
    }

    pub fn set_completion_port(&mut self, port: Arc<dyn CompletionPort>) {
        for stand in &mut self.stands {
            stand
                .exhibit
                .as_visualizer_mut()
                .set_completion_port(Arc::clone(&port));
        }
    }

    pub fn advance(&mut self, elapsed: Duration, adapter: &mut dyn RenderAdapter) -> AdvanceReport {
        self.stands
            .iter_mut()
            .map(|stand| stand.exhibit.as_visualizer_mut().advance(elapsed, adapter))
            .fold(AdvanceReport::default(), AdvanceReport::merge)
    }

    #[must_use]
    pub fn any_running(&self) -> bool {
        self.stands
            .iter()
            .any(|stand| stand.exhibit.as_visualizer().is_running())
    }
}
