//! UI components for the course page TUI.
//!
//! Components are stateless renderers: each takes a borrowed view context
//! and returns the rows to draw.

mod breakdown;
mod gallery_view;
mod rating_form;
mod review_list;
pub mod stars;
mod text_truncate;

pub use breakdown::{BreakdownComponent, BreakdownViewContext};
pub use gallery_view::{EMPTY_IMAGE_GLYPH, GalleryComponent};
pub use rating_form::{RatingFormComponent, RatingFormViewContext};
pub use review_list::{
    CARD_HEIGHT, LOAD_MORE_LABEL, LOADING_MESSAGE, ReviewListComponent, ReviewListViewContext,
};
pub(crate) use text_truncate::truncate_to_width;
