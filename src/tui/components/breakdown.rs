//! Rating breakdown bars and aggregate statistics.
//!
//! Bar lengths only scale the server's counts for display; nothing here
//! computes an aggregate of its own.

use super::stars::average_label;
use crate::api::models::{MAX_RATING, RatingBreakdown, ReviewStatistics};

/// Width of a full bar in columns.
const BAR_WIDTH: u64 = 20;

/// Context for rendering the breakdown.
#[derive(Debug, Clone, Copy)]
pub struct BreakdownViewContext<'a> {
    /// Distribution reported with the first page.
    pub breakdown: &'a RatingBreakdown,
    /// Statistics reported with the first page, if any.
    pub statistics: Option<&'a ReviewStatistics>,
}

/// Renders the 5→1 distribution followed by sub-rating averages.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreakdownComponent;

impl BreakdownComponent {
    /// Renders the breakdown, one row per star value, highest first.
    #[must_use]
    pub fn view(ctx: &BreakdownViewContext<'_>) -> String {
        let mut output = String::new();
        if let Some(summary) = ctx.statistics.and_then(statistics_summary) {
            output.push_str(&summary);
            output.push('\n');
        }

        let total = ctx.breakdown.scale_total();
        for rating in (1..=MAX_RATING).rev() {
            let count = ctx.breakdown.count_for(rating);
            let filled = bar_length(count, total);
            let bar = format!(
                "{}{}",
                "█".repeat(filled),
                "░".repeat(usize::try_from(BAR_WIDTH).unwrap_or(0).saturating_sub(filled))
            );
            output.push_str(&format!("{rating}★ {bar} {count}\n"));
        }

        if let Some(line) = ctx.statistics.and_then(sub_rating_line) {
            output.push_str(&line);
            output.push('\n');
        }
        output
    }

    /// Number of rows [`BreakdownComponent::view`] produces.
    #[must_use]
    pub fn height(ctx: &BreakdownViewContext<'_>) -> usize {
        let summary = usize::from(ctx.statistics.and_then(statistics_summary).is_some());
        let sub_ratings = usize::from(ctx.statistics.and_then(sub_rating_line).is_some());
        usize::from(MAX_RATING)
            .saturating_add(summary)
            .saturating_add(sub_ratings)
    }
}

/// Scales `count` against `total` to a bar of at most [`BAR_WIDTH`].
fn bar_length(count: u64, total: u64) -> usize {
    count
        .checked_mul(BAR_WIDTH)
        .and_then(|scaled| scaled.checked_div(total))
        .and_then(|length| usize::try_from(length.min(BAR_WIDTH)).ok())
        .unwrap_or(0)
}

fn statistics_summary(statistics: &ReviewStatistics) -> Option<String> {
    let average = statistics.average_rating?;
    let mut line = format!("Average {}", average_label(average));
    if let Some(total) = statistics.total_reviews {
        line.push_str(&format!(" from {total} reviews"));
    }
    if let Some(rated) = statistics.rated_reviews {
        line.push_str(&format!(" ({rated} rated)"));
    }
    Some(line)
}

fn sub_rating_line(statistics: &ReviewStatistics) -> Option<String> {
    let parts: Vec<String> = [
        ("Learning gain", statistics.average_learning_gain),
        ("Workload", statistics.average_workload),
        ("Difficulty", statistics.average_difficulty),
    ]
    .into_iter()
    .filter_map(|(label, average)| average.map(|value| format!("{label} {}", average_label(value))))
    .collect();

    (!parts.is_empty()).then(|| parts.join("  "))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::api::models::RatingBucket;

    fn breakdown(counts: &[(u8, u64)]) -> RatingBreakdown {
        RatingBreakdown::new(
            counts
                .iter()
                .map(|&(rating, count)| RatingBucket { rating, count })
                .collect(),
        )
    }

    #[rstest]
    #[case::half(5, 10, 10)]
    #[case::all(4, 4, 20)]
    #[case::none(0, 10, 0)]
    #[case::empty_total(0, 0, 0)]
    fn bar_length_scales_to_width(#[case] count: u64, #[case] total: u64, #[case] expected: usize) {
        assert_eq!(bar_length(count, total), expected);
    }

    #[test]
    fn rows_run_from_five_to_one_with_counts() {
        let distribution = breakdown(&[(5, 3), (1, 1)]);
        let ctx = BreakdownViewContext {
            breakdown: &distribution,
            statistics: None,
        };

        let output = BreakdownComponent::view(&ctx);
        let rows: Vec<&str> = output.lines().collect();

        assert_eq!(rows.len(), BreakdownComponent::height(&ctx));
        assert!(rows.first().is_some_and(|row| row.starts_with("5★") && row.ends_with(" 3")));
        assert!(rows.last().is_some_and(|row| row.starts_with("1★") && row.ends_with(" 1")));
        assert!(rows.get(1).is_some_and(|row| row.ends_with(" 0")));
    }

    #[test]
    fn statistics_add_summary_and_sub_ratings() {
        let distribution = breakdown(&[(4, 2)]);
        let statistics = ReviewStatistics {
            average_rating: Some(4.0),
            total_reviews: Some(3),
            rated_reviews: Some(2),
            average_workload: Some(2.5),
            ..ReviewStatistics::default()
        };
        let ctx = BreakdownViewContext {
            breakdown: &distribution,
            statistics: Some(&statistics),
        };

        let output = BreakdownComponent::view(&ctx);

        assert!(output.starts_with("Average ★★★★☆ 4.0 from 3 reviews (2 rated)\n"));
        assert!(output.contains("Workload ★★⯪☆☆ 2.5"));
        assert!(!output.contains("Difficulty"));
        assert_eq!(output.lines().count(), BreakdownComponent::height(&ctx));
    }
}
