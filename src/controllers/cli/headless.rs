use crate::config::{ConfigError, GalleryConfig};
use crate::controllers::completion_board::CompletionBoard;
use crate::controllers::gallery::Gallery;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::cancellation::{CancelToken, Cancelled, StopToken};
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::exhibit_kinds::ExhibitKind;
use crate::presenters::stage::{TweenStage, Viewport, rasterize};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

const FRAME_STEP: Duration = Duration::from_micros(16_667);
const MAX_FRAMES: usize = 200_000;
const FLOCK_FRAMES: usize = 300;
const SETTLE_FRAMES: usize = 600;
const VIEW_MARGIN: f32 = 0.1;

#[derive(Debug, Error)]
pub enum HeadlessError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    PixelRect(#[from] PixelRectError),

    #[error("failed to write snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Cancelled(#[from] Cancelled),

    #[error("{0} refused to start")]
    NotStarted(ExhibitKind),

    #[error("{exhibit} did not finish within {frames} frames")]
    Timeout { exhibit: ExhibitKind, frames: usize },

    #[error("{0} left nothing on stage to draw")]
    EmptyStage(ExhibitKind),
}

/// What one headless run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ExhibitOutcome {
    pub exhibit: ExhibitKind,
    /// Natural completion; the continuous flock never completes.
    pub completed: bool,
    pub frames: usize,
    /// Animation time covered by the run.
    pub simulated: Duration,
    pub snapshot: PathBuf,
}

/// Plays every exhibit on a software stage at a fixed frame step and saves
/// the final frame of each.
pub struct HeadlessController<P: FilePresenterPort> {
    presenter: P,
    config: GalleryConfig,
    rect: PixelRect,
    flock_frames: usize,
    stop: StopToken,
}

impl<P: FilePresenterPort> HeadlessController<P> {
    pub fn new(
        presenter: P,
        config: GalleryConfig,
        width: u32,
        height: u32,
    ) -> Result<Self, HeadlessError> {
        config.validate()?;
        let rect = PixelRect::with_size(width, height)?;

        Ok(Self {
            presenter,
            config,
            rect,
            flock_frames: FLOCK_FRAMES,
            stop: StopToken::new(),
        })
    }

    /// Frames the flock is simulated for before its snapshot is taken.
    #[must_use]
    pub fn with_flock_frames(mut self, frames: usize) -> Self {
        self.flock_frames = frames;
        self
    }

    /// Requesting a stop on this handle aborts the current and all later runs.
    #[must_use]
    pub fn stop_handle(&self) -> StopToken {
        self.stop.clone()
    }

    pub fn run_all(&self) -> Result<Vec<ExhibitOutcome>, HeadlessError> {
        ExhibitKind::ALL
            .iter()
            .map(|&kind| self.run(kind))
            .collect()
    }

    pub fn run(&self, exhibit: ExhibitKind) -> Result<ExhibitOutcome, HeadlessError> {
        let mut gallery = Gallery::from_config(&self.config);
        let board = Arc::new(CompletionBoard::default());
        gallery.set_completion_port(board.clone());
        let mut stage = TweenStage::new();

        if !gallery.activate(exhibit, &mut stage) {
            return Err(HeadlessError::NotStarted(exhibit));
        }

        info!(%exhibit, "headless run started");
        let start = Instant::now();
        let continuous = exhibit == ExhibitKind::Flocking;
        let mut frames = 0;

        loop {
            if let Err(cancelled) = self.stop.check() {
                gallery.deactivate(exhibit, &mut stage);
                return Err(cancelled.into());
            }

            if continuous && frames >= self.flock_frames {
                break;
            }
            if frames >= MAX_FRAMES {
                return Err(HeadlessError::Timeout { exhibit, frames });
            }

            stage.advance(FRAME_STEP);
            let report = gallery.advance(FRAME_STEP, &mut stage);
            frames += 1;

            if report.cancelled {
                return Err(Cancelled.into());
            }
            if report.completed {
                break;
            }
        }

        for _ in 0..SETTLE_FRAMES {
            if !stage.advance(FRAME_STEP) {
                break;
            }
        }

        let viewport = Viewport::fit(&stage, self.rect, VIEW_MARGIN)
            .ok_or(HeadlessError::EmptyStage(exhibit))?;
        let frame = rasterize(&stage, self.rect, viewport);
        let snapshot = self.presenter.present(exhibit, &frame)?;
        let completed = board.is_completed(exhibit);

        let frame_count = u32::try_from(frames).unwrap_or(u32::MAX);
        let simulated = FRAME_STEP.saturating_mul(frame_count);

        info!(
            %exhibit,
            completed,
            frames,
            simulated = ?simulated,
            wall = ?start.elapsed(),
            snapshot = %snapshot.display(),
            "headless run finished"
        );
        debug!(elements = stage.len(), "stage at snapshot");

        Ok(ExhibitOutcome {
            exhibit,
            completed,
            frames,
            simulated,
            snapshot,
        })
    }
}
