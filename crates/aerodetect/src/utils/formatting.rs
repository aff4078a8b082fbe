//! Formatting utilities for human-readable output.

use aerodetect_core::selection::{Selection, SelectionKind};

/// Format a byte count with binary units (e.g., "1.5 MB").
///
/// # Examples
///
/// ```ignore
/// use aerodetect::utils::formatting::format_file_size;
///
/// assert_eq!(format_file_size(512), "512 B");
/// assert_eq!(format_file_size(1536), "1.5 KB");
/// ```
pub fn format_file_size(bytes: usize) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

/// One-line description of the current selection shown under the picker.
pub fn selection_summary(selection: &Selection) -> String {
    let total: usize = selection.files().iter().map(|f| f.size()).sum();
    let size = format_file_size(total);

    match selection.kind() {
        SelectionKind::Video => match selection.video() {
            Some(video) => format!("Video selected: {} ({})", video.name, size),
            None => format!("Video selected ({})", size),
        },
        SelectionKind::Images => {
            let count = selection.images().count();
            match count {
                0 => format!("{} file(s) selected, no images ({})", selection.len(), size),
                1 => format!("1 image selected ({})", size),
                n => format!("{} images selected ({})", n, size),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aerodetect_core::media::SelectedFile;
    use aerodetect_core::selection::validate;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(1023), "1023 B");
        assert_eq!(format_file_size(1024), "1.0 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5.0 MB");
    }

    #[test]
    fn test_selection_summary() {
        let images = validate(vec![
            SelectedFile::new("a.png", "image/png", vec![0u8; 1024]),
            SelectedFile::new("b.png", "image/png", vec![0u8; 1024]),
        ])
        .unwrap();
        assert_eq!(selection_summary(&images), "2 images selected (2.0 KB)");

        let video = validate(vec![SelectedFile::new("clip.mp4", "video/mp4", vec![0u8; 10])]).unwrap();
        assert_eq!(selection_summary(&video), "Video selected: clip.mp4 (10 B)");

        let other = validate(vec![SelectedFile::new("a.txt", "text/plain", vec![0u8; 3])]).unwrap();
        assert_eq!(selection_summary(&other), "1 file(s) selected, no images (3 B)");
    }
}
