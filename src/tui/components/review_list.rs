//! Review list component: review cards, placeholders and the load-more row.
//!
//! Each card takes [`CARD_HEIGHT`] rows so scrolling can be computed in
//! whole cards.

use super::stars::star_glyphs;
use super::text_truncate::{single_line, truncate_to_width};
use crate::api::models::{MAX_RATING, Review};
use crate::page::reviews::{EMPTY_REVIEWS_MESSAGE, ListView};

/// Rows used by one review card.
pub const CARD_HEIGHT: usize = 3;

/// Placeholder shown while the first page loads.
pub const LOADING_MESSAGE: &str = "Loading reviews...";

/// Label of the load-more row.
pub const LOAD_MORE_LABEL: &str = "[n] Load more reviews";

/// Context for rendering the review list view.
#[derive(Debug, Clone, Copy)]
pub struct ReviewListViewContext<'a> {
    /// Reviews fetched so far.
    pub reviews: &'a [Review],
    /// What the list area shows.
    pub view: &'a ListView,
    /// Index of the selected review.
    pub cursor_position: usize,
    /// Index of the first card shown.
    pub scroll_offset: usize,
    /// Rows available to the list, including the load-more row.
    pub visible_height: usize,
    /// Maximum row width in columns.
    pub max_width: usize,
    /// Whether another page can be requested.
    pub can_load_more: bool,
    /// Whether a request is in flight.
    pub loading: bool,
}

/// Component for displaying review cards.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewListComponent;

impl ReviewListComponent {
    /// Number of whole cards that fit in `visible_height` rows, at least one.
    #[must_use]
    pub fn visible_cards(visible_height: usize) -> usize {
        visible_height
            .saturating_sub(1)
            .checked_div(CARD_HEIGHT)
            .unwrap_or(0)
            .max(1)
    }

    /// Renders the list area as a string.
    #[must_use]
    pub fn view(ctx: &ReviewListViewContext<'_>) -> String {
        let placeholder = match ctx.view {
            ListView::Loading => Some(LOADING_MESSAGE),
            ListView::Empty => Some(EMPTY_REVIEWS_MESSAGE),
            ListView::Failed(message) => Some(message.as_str()),
            ListView::Reviews => None,
        };
        if let Some(text) = placeholder {
            return format!("  {}\n", truncate_to_width(text, ctx.max_width.saturating_sub(2)));
        }

        let mut output = String::new();
        for (index, review) in ctx
            .reviews
            .iter()
            .enumerate()
            .skip(ctx.scroll_offset)
            .take(Self::visible_cards(ctx.visible_height))
        {
            output.push_str(&format_card(review, index == ctx.cursor_position, ctx.max_width));
        }

        if ctx.loading {
            output.push_str("  Loading more...\n");
        } else if ctx.can_load_more {
            output.push_str(&format!("  {LOAD_MORE_LABEL}\n"));
        }
        output
    }
}

/// Formats a card: author line, content line and a third line that shows
/// the avatar reference for the selected card.
fn format_card(review: &Review, selected: bool, max_width: usize) -> String {
    let prefix = if selected { ">" } else { " " };
    let mut header = format!("{prefix} {}", review.display_name());
    if let Some(rating) = review.rating {
        header.push_str(&format!("  {} {rating}/{MAX_RATING}", star_glyphs(rating)));
    }
    if let Some(date) = review.created_date() {
        header.push_str(&format!("  {date}"));
    }

    let content_width = max_width.saturating_sub(4);
    let content = review
        .text()
        .map(|text| format!("    {}", single_line(text, content_width)))
        .unwrap_or_default();
    let footer = if selected {
        format!("    avatar: {}", review.avatar_url())
    } else {
        String::new()
    };

    format!(
        "{}\n{}\n{}\n",
        truncate_to_width(&header, max_width),
        content,
        truncate_to_width(&footer, max_width)
    )
}
