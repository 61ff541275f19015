use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::exhibit_kinds::ExhibitKind;
use crate::storage::write_ppm::write_ppm;
use std::path::{Path, PathBuf};

/// Writes one `<slug>.ppm` per exhibit into a directory.
pub struct PpmFilePresenter {
    output_dir: PathBuf,
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new("output")
    }
}

impl PpmFilePresenter {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path_for(&self, exhibit: ExhibitKind) -> PathBuf {
        self.output_dir.join(format!("{}.ppm", exhibit.slug()))
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, exhibit: ExhibitKind, frame: &PixelBuffer) -> std::io::Result<PathBuf> {
        let path = self.path_for(exhibit);
        write_ppm(frame, &path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_rect::PixelRect;

    #[test]
    fn snapshots_are_named_after_the_exhibit() {
        let presenter = PpmFilePresenter::new("snapshots");

        assert_eq!(
            presenter.path_for(ExhibitKind::DiskTransfer),
            Path::new("snapshots").join("tower_of_hanoi.ppm")
        );
    }

    #[test]
    fn present_writes_the_frame() {
        let dir = std::env::temp_dir().join(format!("gallery_presenter_{}", std::process::id()));
        let presenter = PpmFilePresenter::new(&dir);
        let frame = PixelBuffer::new(PixelRect::with_size(3, 2).unwrap());

        let path = presenter.present(ExhibitKind::HeapSort, &frame).unwrap();

        assert_eq!(path, dir.join("heap_sort.ppm"));
        assert!(std::fs::metadata(&path).unwrap().len() > 18);
        std::fs::remove_dir_all(dir).unwrap();
    }
}
