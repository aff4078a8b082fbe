//! Local previews of the current selection.
//!
//! Image previews arrive in whatever order their decodes finish, so the board
//! keeps them in arrival order and relies on each entry's position tag when
//! backend results are mapped back.

use crate::error::MediaError;
use crate::media::{to_data_url, SelectedFile};

/// One rendered still-image preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewImage {
    /// Position of the source file among the selection's images
    pub position: usize,
    /// Displayable source (data URL of the upload, later the result image)
    pub src: String,
    pub alt: String,
}

impl PreviewImage {
    pub fn new(position: usize, src: impl Into<String>) -> Self {
        Self {
            position,
            src: src.into(),
            alt: format!("Uploaded Image {}", position + 1),
        }
    }
}

/// Local player preview of the selected video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoPreview {
    /// Revocable object URL (or data URL off the web)
    pub object_url: String,
    pub name: String,
}

/// Preview container contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewBoard {
    images: Vec<PreviewImage>,
    video: Option<VideoPreview>,
}

impl PreviewBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Image previews in insertion (decode completion) order.
    pub fn images(&self) -> &[PreviewImage] {
        &self.images
    }

    pub fn video(&self) -> Option<&VideoPreview> {
        self.video.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty() && self.video.is_none()
    }

    /// Finds the preview tagged with `position`.
    pub fn image_at(&self, position: usize) -> Option<&PreviewImage> {
        self.images.iter().find(|img| img.position == position)
    }

    /// Appends a decoded image preview.
    ///
    /// A second insert for the same position replaces the first instead of
    /// creating a duplicate node.
    pub fn insert_image(&mut self, position: usize, src: String) {
        match self.images.iter_mut().find(|img| img.position == position) {
            Some(existing) => existing.src = src,
            None => self.images.push(PreviewImage::new(position, src)),
        }
    }

    /// Shows a video player preview, returning the previous object URL so the
    /// caller can revoke it.
    pub fn set_video(&mut self, preview: VideoPreview) -> Option<String> {
        self.video.replace(preview).map(|old| old.object_url)
    }

    /// Empties the container, returning the object URL that must be revoked.
    pub fn clear(&mut self) -> Option<String> {
        self.images.clear();
        self.video.take().map(|v| v.object_url)
    }

    /// Replaces each tagged preview's source with the result at its position.
    ///
    /// Entries without a matching preview, and `None` entries, are skipped.
    /// Returns how many previews were updated.
    pub fn apply_results(&mut self, results: &[Option<String>]) -> usize {
        let mut applied = 0;
        for (position, result) in results.iter().enumerate() {
            let Some(src) = result else { continue };
            if let Some(img) = self.images.iter_mut().find(|img| img.position == position) {
                img.src = src.clone();
                applied += 1;
            }
        }
        applied
    }
}

/// Decodes an image file into the data URL shown as its preview.
pub fn render_image_preview(file: &SelectedFile) -> Result<String, MediaError> {
    Ok(to_data_url(&file.mime, &file.bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_follow_position_not_insert_order() {
        let mut board = PreviewBoard::new();
        // Decodes finished out of order
        board.insert_image(2, "local-2".into());
        board.insert_image(0, "local-0".into());
        board.insert_image(1, "local-1".into());

        let applied = board.apply_results(&[
            Some("AAA".into()),
            Some("BBB".into()),
            Some("CCC".into()),
        ]);
        assert_eq!(applied, 3);
        assert_eq!(board.image_at(0).unwrap().src, "AAA");
        assert_eq!(board.image_at(1).unwrap().src, "BBB");
        assert_eq!(board.image_at(2).unwrap().src, "CCC");
        // Node order itself is untouched
        let order: Vec<_> = board.images().iter().map(|i| i.position).collect();
        assert_eq!(order, vec![2, 0, 1]);
    }

    #[test]
    fn test_short_and_sparse_results() {
        let mut board = PreviewBoard::new();
        board.insert_image(0, "local-0".into());
        board.insert_image(1, "local-1".into());

        let applied = board.apply_results(&[None, Some("BBB".into()), Some("extra".into())]);
        assert_eq!(applied, 1);
        assert_eq!(board.image_at(0).unwrap().src, "local-0");
        assert_eq!(board.image_at(1).unwrap().src, "BBB");
        assert!(board.image_at(2).is_none());
    }

    #[test]
    fn test_duplicate_insert_replaces() {
        let mut board = PreviewBoard::new();
        board.insert_image(0, "first".into());
        board.insert_image(0, "second".into());
        assert_eq!(board.images().len(), 1);
        assert_eq!(board.images()[0].src, "second");
        assert_eq!(board.images()[0].alt, "Uploaded Image 1");
    }

    #[test]
    fn test_clear_returns_object_url() {
        let mut board = PreviewBoard::new();
        assert_eq!(
            board.set_video(VideoPreview {
                object_url: "blob:one".into(),
                name: "a.mp4".into(),
            }),
            None
        );
        assert_eq!(
            board.set_video(VideoPreview {
                object_url: "blob:two".into(),
                name: "b.mp4".into(),
            }),
            Some("blob:one".to_string())
        );
        assert_eq!(board.clear(), Some("blob:two".to_string()));
        assert!(board.is_empty());
        assert_eq!(board.clear(), None);
    }

    #[test]
    fn test_render_image_preview() {
        let file = SelectedFile::new("a.png", "image/png", vec![0u8, 1, 2]);
        assert_eq!(
            render_image_preview(&file).unwrap(),
            "data:image/png;base64,AAEC"
        );
    }
}
