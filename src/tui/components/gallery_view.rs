//! Gallery panel: the current image reference and a thumbnail strip.

use super::text_truncate::truncate_to_width;
use crate::page::gallery::Gallery;

/// Shown in place of an image reference when the entry is blank.
pub const EMPTY_IMAGE_GLYPH: &str = "[ no image ]";

/// Renders the gallery as two rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct GalleryComponent;

impl GalleryComponent {
    /// Number of rows [`GalleryComponent::view`] produces.
    pub const HEIGHT: usize = 2;

    /// Renders the current image and the thumbnail strip.
    #[must_use]
    pub fn view(gallery: &Gallery, max_width: usize) -> String {
        let position = format!(
            "Image {}/{}  ",
            gallery.current_index().saturating_add(1),
            gallery.len()
        );
        let image = gallery.current_image().unwrap_or(EMPTY_IMAGE_GLYPH);
        let current = truncate_to_width(&format!("{position}{image}"), max_width);

        let strip: Vec<String> = gallery
            .thumbnails()
            .map(|thumbnail| {
                let number = thumbnail.index.saturating_add(1);
                if thumbnail.active {
                    format!("[{number}]")
                } else {
                    format!(" {number} ")
                }
            })
            .collect();
        let thumbnails = truncate_to_width(&format!("Thumbnails:{}", strip.concat()), max_width);

        format!("{current}\n{thumbnails}\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_current_image_in_strip() {
        let mut gallery = Gallery::initialize(None, "/static/images/");
        gallery.show_next();

        let output = GalleryComponent::view(&gallery, 80);

        assert_eq!(
            output,
            "Image 2/3  /static/images/course_2.jpg\nThumbnails: 1 [2] 3 \n"
        );
    }

    #[test]
    fn blank_entry_renders_empty_glyph() {
        let gallery = Gallery::initialize(Some(&[String::new()]), "/static/images/");

        let output = GalleryComponent::view(&gallery, 80);

        assert!(output.starts_with(&format!("Image 1/1  {EMPTY_IMAGE_GLYPH}\n")));
    }
}
