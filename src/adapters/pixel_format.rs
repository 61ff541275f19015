//! Pixel format conversion for the window surface.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PixelFormatError {
    #[error("rgb source length {0} is not a multiple of 3")]
    RaggedSource(usize),
    #[error("rgba target holds {actual} bytes, {expected} needed")]
    TargetSize { expected: usize, actual: usize },
}

/// Expands packed RGB into opaque RGBA.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) -> Result<(), PixelFormatError> {
    if src.len() % 3 != 0 {
        return Err(PixelFormatError::RaggedSource(src.len()));
    }

    let expected = src.len() / 3 * 4;
    if dst.len() != expected {
        return Err(PixelFormatError::TargetSize {
            expected,
            actual: dst.len(),
        });
    }

    for (rgb, rgba) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        rgba[..3].copy_from_slice(rgb);
        rgba[3] = u8::MAX;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_colours_become_opaque() {
        let src = [0x1B, 0x1F, 0x2A, 0x4E, 0xCD, 0xC4];
        let mut dst = [0; 8];

        copy_rgb_to_rgba(&src, &mut dst).unwrap();

        assert_eq!(dst, [0x1B, 0x1F, 0x2A, 255, 0x4E, 0xCD, 0xC4, 255]);
    }

    #[test]
    fn empty_frames_are_fine() {
        assert_eq!(copy_rgb_to_rgba(&[], &mut []), Ok(()));
    }

    #[test]
    fn ragged_source_is_rejected() {
        let mut dst = [0; 4];

        assert_eq!(
            copy_rgb_to_rgba(&[1, 2, 3, 4], &mut dst),
            Err(PixelFormatError::RaggedSource(4))
        );
    }

    #[test]
    fn mismatched_target_is_rejected_untouched() {
        let mut dst = [7; 4];

        assert_eq!(
            copy_rgb_to_rgba(&[1, 2, 3, 4, 5, 6], &mut dst),
            Err(PixelFormatError::TargetSize {
                expected: 8,
                actual: 4
            })
        );
        assert_eq!(dst, [7; 4]);
    }
}
