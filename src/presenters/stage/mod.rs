pub mod raster;
pub mod tween;
pub mod tween_stage;

pub use raster::{Viewport, rasterize};
pub use tween_stage::{StageElement, TweenStage};
