use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::exhibit_kinds::ExhibitKind;
use std::path::PathBuf;

/// Persists the final frame of an exhibit run.
pub trait FilePresenterPort {
    /// Returns where the frame ended up.
    fn present(&self, exhibit: ExhibitKind, frame: &PixelBuffer) -> std::io::Result<PathBuf>;
}
