//! Star glyph rendering for ratings and averages.

use crate::api::models::MAX_RATING;
use crate::page::rating::{StarRow, StarTone};

const FULL_STAR: char = '★';
const HALF_STAR: char = '⯪';
const EMPTY_STAR: char = '☆';
const ANSI_RESET: &str = "\x1b[0m";

/// Renders `filled` full stars padded with empty ones to five.
#[must_use]
pub fn star_glyphs(filled: u8) -> String {
    (1..=MAX_RATING)
        .map(|star| if star <= filled { FULL_STAR } else { EMPTY_STAR })
        .collect()
}

/// Renders an average as five stars with a half star when the fractional
/// part is at least one half.
#[must_use]
pub fn average_glyphs(average: f64) -> String {
    (1..=MAX_RATING)
        .map(|star| {
            if f64::from(star) <= average {
                FULL_STAR
            } else if f64::from(star.saturating_sub(1)) < average && average.fract() >= 0.5 {
                HALF_STAR
            } else {
                EMPTY_STAR
            }
        })
        .collect()
}

/// Renders an average with its stars and one-decimal value.
#[must_use]
pub fn average_label(average: f64) -> String {
    format!("{} {average:.1}", average_glyphs(average))
}

/// Renders an interactive star row in its tone's colour.
#[must_use]
pub fn styled_row(row: StarRow) -> String {
    let glyphs = star_glyphs(row.filled);
    match ansi_foreground(row.tone) {
        Some(colour) => format!("{colour}{glyphs}{ANSI_RESET}"),
        None => glyphs,
    }
}

/// Builds a truecolour foreground escape from the tone's `#rrggbb` colour.
fn ansi_foreground(tone: StarTone) -> Option<String> {
    let hex = tone.colour().strip_prefix('#')?;
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
    };
    let red = channel(0..2)?;
    let green = channel(2..4)?;
    let blue = channel(4..6)?;
    Some(format!("\x1b[38;2;{red};{green};{blue}m"))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, "☆☆☆☆☆")]
    #[case(3, "★★★☆☆")]
    #[case(5, "★★★★★")]
    fn star_glyphs_fill_from_the_left(#[case] filled: u8, #[case] expected: &str) {
        assert_eq!(star_glyphs(filled), expected);
    }

    #[rstest]
    #[case::whole(4.0, "★★★★☆")]
    #[case::below_half(3.2, "★★★☆☆")]
    #[case::half(3.5, "★★★⯪☆")]
    #[case::above_half(2.7, "★★⯪☆☆")]
    #[case::zero(0.0, "☆☆☆☆☆")]
    fn average_glyphs_use_half_star_from_one_half(#[case] average: f64, #[case] expected: &str) {
        assert_eq!(average_glyphs(average), expected);
    }

    #[test]
    fn average_label_shows_one_decimal() {
        assert_eq!(average_label(4.26), "★★★★☆ 4.3");
    }

    #[test]
    fn styled_row_colours_committed_stars() {
        let rendered = styled_row(StarRow {
            filled: 2,
            tone: StarTone::Committed,
        });

        assert_eq!(rendered, "\x1b[38;2;0;123;255m★★☆☆☆\x1b[0m");
    }
}
