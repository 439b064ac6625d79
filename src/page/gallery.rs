//! Course image gallery: an ordered list of image references and a cursor.

use url::Url;

/// Prefix applied to bare image filenames.
pub const DEFAULT_ASSET_BASE: &str = "/static/images/";

/// Images shown when a course has no cover images.
pub const PLACEHOLDER_IMAGES: [&str; 3] = ["course_1.jpg", "course_2.jpg", "course_3.jpg"];

/// One thumbnail in the gallery strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thumbnail<'a> {
    /// Position in the gallery.
    pub index: usize,
    /// Resolved image reference; empty when the entry was blank.
    pub uri: &'a str,
    /// Whether this is the image currently shown.
    pub active: bool,
}

/// Gallery state.
///
/// `current_index` is always a valid position while the gallery holds
/// images. Navigation wraps in both directions.
///
/// # Example
///
/// ```
/// use coursescope::page::gallery::Gallery;
///
/// let mut gallery = Gallery::initialize(
///     Some(&["a.jpg".to_owned(), "https://cdn.example/b.png".to_owned()]),
///     "/static/images/",
/// );
/// assert_eq!(gallery.current_image(), Some("/static/images/a.jpg"));
/// gallery.show_previous();
/// assert_eq!(gallery.current_image(), Some("https://cdn.example/b.png"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    images: Vec<String>,
    current_index: usize,
}

impl Gallery {
    /// Builds a gallery from a caller-supplied list.
    ///
    /// An absent or empty list falls back to [`PLACEHOLDER_IMAGES`]. Bare
    /// filenames are prefixed with `asset_base`; absolute paths and URLs
    /// pass through unchanged.
    #[must_use]
    pub fn initialize(images: Option<&[String]>, asset_base: &str) -> Self {
        let resolved: Vec<String> = match images {
            Some(list) if !list.is_empty() => list
                .iter()
                .map(|entry| resolve_image(entry, asset_base))
                .collect(),
            _ => PLACEHOLDER_IMAGES
                .iter()
                .map(|name| resolve_image(name, asset_base))
                .collect(),
        };

        Self {
            images: resolved,
            current_index: 0,
        }
    }

    /// Returns every resolved image reference.
    #[must_use]
    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Number of images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns true when the gallery holds no images.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Index of the image currently shown.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    /// The image currently shown, or `None` for the empty-state glyph.
    #[must_use]
    pub fn current_image(&self) -> Option<&str> {
        self.images
            .get(self.current_index)
            .map(String::as_str)
            .filter(|uri| !uri.is_empty())
    }

    /// Shows the image at `index`; out-of-range indices are ignored.
    ///
    /// Returns whether the index was accepted.
    pub fn show(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            return false;
        }
        self.current_index = index;
        true
    }

    /// Advances to the next image, wrapping to the first.
    pub fn show_next(&mut self) {
        if self.images.is_empty() {
            return;
        }
        let next = self.current_index.saturating_add(1);
        self.current_index = if next >= self.images.len() { 0 } else { next };
    }

    /// Steps back to the previous image, wrapping to the last.
    pub fn show_previous(&mut self) {
        let Some(last) = self.images.len().checked_sub(1) else {
            return;
        };
        self.current_index = self.current_index.checked_sub(1).unwrap_or(last);
    }

    /// Iterates the thumbnail strip, marking the active entry.
    pub fn thumbnails(&self) -> impl Iterator<Item = Thumbnail<'_>> {
        self.images
            .iter()
            .enumerate()
            .map(|(index, uri)| Thumbnail {
                index,
                uri: uri.as_str(),
                active: index == self.current_index,
            })
    }
}

fn resolve_image(entry: &str, asset_base: &str) -> String {
    let trimmed = entry.trim();
    if trimmed.is_empty() || trimmed.starts_with('/') || Url::parse(trimmed).is_ok() {
        return trimmed.to_owned();
    }
    if asset_base.ends_with('/') {
        format!("{asset_base}{trimmed}")
    } else {
        format!("{asset_base}/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{DEFAULT_ASSET_BASE, Gallery};

    fn gallery_of(count: usize) -> Gallery {
        let images: Vec<String> = (0..count).map(|index| format!("img_{index}.jpg")).collect();
        Gallery::initialize(Some(&images), DEFAULT_ASSET_BASE)
    }

    #[rstest]
    #[case::none(None)]
    #[case::empty(Some(Vec::new()))]
    fn missing_images_fall_back_to_placeholders(#[case] images: Option<Vec<String>>) {
        let gallery = Gallery::initialize(images.as_deref(), DEFAULT_ASSET_BASE);

        assert_eq!(
            gallery.images(),
            [
                "/static/images/course_1.jpg",
                "/static/images/course_2.jpg",
                "/static/images/course_3.jpg",
            ]
        );
        assert_eq!(gallery.current_index(), 0);
    }

    #[rstest]
    #[case::bare("cover.png", "/static/images/cover.png")]
    #[case::absolute_path("/media/cover.png", "/media/cover.png")]
    #[case::https("https://cdn.example/cover.png", "https://cdn.example/cover.png")]
    #[case::data_uri("data:image/png;base64,AAAA", "data:image/png;base64,AAAA")]
    fn entries_are_normalised(#[case] entry: &str, #[case] expected: &str) {
        let gallery = Gallery::initialize(Some(&[entry.to_owned()]), DEFAULT_ASSET_BASE);

        assert_eq!(gallery.current_image(), Some(expected));
    }

    #[test]
    fn asset_base_without_trailing_slash_is_joined() {
        let gallery = Gallery::initialize(Some(&["a.jpg".to_owned()]), "/assets");

        assert_eq!(gallery.current_image(), Some("/assets/a.jpg"));
    }

    #[test]
    fn blank_entry_renders_empty_state() {
        let mut gallery =
            Gallery::initialize(Some(&["a.jpg".to_owned(), "  ".to_owned()]), DEFAULT_ASSET_BASE);

        assert!(gallery.show(1));
        assert_eq!(gallery.current_image(), None);
    }

    #[rstest]
    #[case(1)]
    #[case(3)]
    #[case(7)]
    fn next_n_times_returns_to_start(#[case] count: usize) {
        let mut gallery = gallery_of(count);
        assert!(gallery.show(count.saturating_sub(1)));
        let start = gallery.current_index();

        for _ in 0..count {
            gallery.show_next();
        }

        assert_eq!(gallery.current_index(), start);
    }

    #[test]
    fn previous_wraps_to_last() {
        let mut gallery = gallery_of(4);

        gallery.show_previous();

        assert_eq!(gallery.current_index(), 3);
    }

    #[rstest]
    #[case::past_end(3)]
    #[case::far_past_end(usize::MAX)]
    fn show_out_of_range_is_ignored(#[case] index: usize) {
        let mut gallery = gallery_of(3);
        assert!(gallery.show(1));

        assert!(!gallery.show(index));
        assert_eq!(gallery.current_index(), 1);
    }

    #[test]
    fn empty_gallery_navigation_is_noop() {
        let mut gallery = Gallery::default();

        gallery.show_next();
        gallery.show_previous();

        assert_eq!(gallery.current_index(), 0);
        assert_eq!(gallery.current_image(), None);
    }

    #[test]
    fn thumbnails_mark_active_entry() {
        let mut gallery = gallery_of(3);
        gallery.show_next();

        let active: Vec<usize> = gallery
            .thumbnails()
            .filter(|thumbnail| thumbnail.active)
            .map(|thumbnail| thumbnail.index)
            .collect();

        assert_eq!(active, vec![1]);
    }
}
