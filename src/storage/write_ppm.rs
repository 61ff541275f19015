use crate::core::data::pixel_buffer::PixelBuffer;
use std::io::Write;
use std::path::Path;

/// Writes `buffer` as a binary PPM, creating missing parent directories.
pub fn write_ppm(buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let filepath = filepath.as_ref();
    if let Some(parent) = filepath.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = std::io::BufWriter::new(std::fs::File::create(filepath)?);
    let width = buffer.pixel_rect().width();
    let height = buffer.pixel_rect().height();

    // P6: binary RGB, then width, height and max colour value
    writeln!(file, "P6")?;
    writeln!(file, "{} {}", width, height)?;
    writeln!(file, "255")?;
    file.write_all(buffer.buffer())?;
    file.flush()?;

    Ok(())
}
