//! Review form: star rows, the text body and the last error.

use super::stars::styled_row;
use super::text_truncate::truncate_to_width;
use crate::page::form::{FormFocus, ReviewForm};
use crate::page::rating::RatingAxis;

/// Context for rendering the review form.
#[derive(Debug, Clone, Copy)]
pub struct RatingFormViewContext<'a> {
    /// Form state.
    pub form: &'a ReviewForm,
    /// Maximum row width in columns.
    pub max_width: usize,
}

/// Renders the open review form.
#[derive(Debug, Clone, Copy, Default)]
pub struct RatingFormComponent;

impl RatingFormComponent {
    /// Renders one row per rating axis, then the text body and any error.
    #[must_use]
    pub fn view(ctx: &RatingFormViewContext<'_>) -> String {
        let form = ctx.form;
        let mut output = String::from("Write a review\n");

        for axis in form.axes() {
            let focused = form.focus() == FormFocus::Stars(axis);
            let marker = if focused { ">" } else { " " };
            let stars = styled_row(form.ratings().star_row(axis));
            let caption = if axis == RatingAxis::Overall {
                format!("  {}", form.ratings().overall_caption())
            } else {
                String::new()
            };
            output.push_str(&format!("{marker} {:<14}{stars}{caption}\n", axis.label()));
        }

        let focused = form.focus() == FormFocus::Content;
        let marker = if focused { ">" } else { " " };
        let cursor = if focused { "_" } else { "" };
        let body = form.content().replace('\n', " / ");
        let text_width = ctx.max_width.saturating_sub(18);
        output.push_str(&format!(
            "{marker} {:<14}{}{cursor}\n",
            "Review",
            tail_to_width(&body, text_width)
        ));

        if let Some(error) = form.error() {
            output.push_str(&format!("  {}\n", truncate_to_width(error, ctx.max_width)));
        }
        if form.is_submitting() {
            output.push_str("  Submitting...\n");
        }
        output
    }
}

/// Keeps the end of `text` visible while typing.
fn tail_to_width(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    let skip = chars.len().saturating_sub(max_width);
    chars.into_iter().skip(skip).collect()
}
