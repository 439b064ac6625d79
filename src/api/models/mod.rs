//! Data models representing courses, reviews and review submissions.
//!
//! Types prefixed with `Api` are deserialisation targets for the response
//! envelopes and convert into the public domain types. Ratings outside the
//! 1–5 range are dropped during conversion rather than trusted.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::pagination::PageInfo;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Avatar shown when a review carries no author avatar.
pub const DEFAULT_AVATAR_URL: &str = "/static/img/default-avatar.png";

/// Name shown when a review carries no author.
pub const ANONYMOUS_USERNAME: &str = "Anonymous";

/// Highest value on every rating scale.
pub const MAX_RATING: u8 = 5;

/// Author details attached to a review.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewAuthor {
    /// Login name.
    pub username: Option<String>,
    /// Avatar URL.
    pub avatar_url: Option<String>,
}

/// A single course review.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Review {
    /// Review identifier.
    pub id: u64,
    /// Star rating (1–5) if the reviewer gave one.
    pub rating: Option<u8>,
    /// Review text.
    pub content: Option<String>,
    /// Creation timestamp (ISO 8601, offset optional).
    pub created_at: Option<String>,
    /// Author, if the server included one.
    pub user: Option<ReviewAuthor>,
}

impl Review {
    /// Returns the author's display name, or [`ANONYMOUS_USERNAME`].
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|user| user.username.as_deref())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(ANONYMOUS_USERNAME)
    }

    /// Returns the author's avatar URL, or [`DEFAULT_AVATAR_URL`].
    #[must_use]
    pub fn avatar_url(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|user| user.avatar_url.as_deref())
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_AVATAR_URL)
    }

    /// Returns the non-blank review text.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.content
            .as_deref()
            .filter(|content| !content.trim().is_empty())
    }

    /// Returns the creation date rendered as `YYYY-MM-DD`.
    ///
    /// Falls back to the raw value when it is not a recognisable timestamp.
    #[must_use]
    pub fn created_date(&self) -> Option<String> {
        self.created_at.as_deref().map(format_review_date)
    }
}

fn format_review_date(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.date_naive().format("%Y-%m-%d").to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.date().format("%Y-%m-%d").to_string();
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return parsed.format("%Y-%m-%d").to_string();
    }
    raw.to_owned()
}

/// Number of reviews that gave one star value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingBucket {
    /// Star value (1–5).
    pub rating: u8,
    /// Number of reviews with that value.
    pub count: u64,
}

/// Server-computed distribution of star ratings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatingBreakdown {
    buckets: Vec<RatingBucket>,
}

impl RatingBreakdown {
    /// Wraps the buckets reported by the server.
    #[must_use]
    pub const fn new(buckets: Vec<RatingBucket>) -> Self {
        Self { buckets }
    }

    /// Returns the reported buckets in server order.
    #[must_use]
    pub fn buckets(&self) -> &[RatingBucket] {
        &self.buckets
    }

    /// Returns the count for `rating`, zero when the server omitted it.
    #[must_use]
    pub fn count_for(&self, rating: u8) -> u64 {
        self.buckets
            .iter()
            .find(|bucket| bucket.rating == rating)
            .map_or(0, |bucket| bucket.count)
    }

    /// Sum of all reported counts, used only to scale bar widths.
    #[must_use]
    pub fn scale_total(&self) -> u64 {
        self.buckets
            .iter()
            .fold(0_u64, |total, bucket| total.saturating_add(bucket.count))
    }
}

/// Server-computed review statistics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewStatistics {
    /// Mean overall rating.
    pub average_rating: Option<f64>,
    /// Number of reviews, rated or not.
    pub total_reviews: Option<u64>,
    /// Number of reviews carrying a rating.
    pub rated_reviews: Option<u64>,
    /// Mean learning-gain sub-rating.
    pub average_learning_gain: Option<f64>,
    /// Mean workload sub-rating.
    pub average_workload: Option<f64>,
    /// Mean difficulty sub-rating.
    pub average_difficulty: Option<f64>,
}

/// One fetched page of reviews with its aggregates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewPage {
    /// Reviews on this page.
    pub reviews: Vec<Review>,
    /// Rating distribution across the whole course.
    pub breakdown: RatingBreakdown,
    /// Aggregate statistics, when the server sent them.
    pub statistics: Option<ReviewStatistics>,
    /// Pagination state.
    pub page_info: PageInfo,
}

/// Course header information.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseSummary {
    /// Course identifier.
    pub id: u64,
    /// Course title.
    pub title: Option<String>,
    /// Course description.
    pub description: Option<String>,
    /// Cover image references (filenames or URLs).
    pub cover_images: Vec<String>,
    /// Server-computed mean rating (0.0 when unrated).
    pub average_rating: f64,
    /// Server-computed number of reviews.
    pub total_reviews: u64,
    /// Instructor name, if known.
    pub instructor: Option<String>,
}

/// Optional per-axis ratings sent with a review.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DetailedRatings {
    /// Learning-gain rating.
    pub learning_gain: Option<u8>,
    /// Workload rating.
    pub workload: Option<u8>,
    /// Difficulty rating.
    pub difficulty: Option<u8>,
}

/// Request body for creating a review.
///
/// Identity is never sent; the server derives it from the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewReview {
    /// Overall rating (1–5).
    pub rating: u8,
    /// Trimmed review text, `null` when empty.
    pub content: Option<String>,
    /// Sub-ratings; omitted entirely when detailed ratings are disabled.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub detailed: Option<DetailedRatings>,
}

/// Server acknowledgement of a created review.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionReceipt {
    /// Confirmation text from the server, if any.
    pub message: Option<String>,
}

/// Common `{success, message, data, pagination}` response wrapper.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiEnvelope {
    #[serde(default)]
    pub(crate) success: bool,
    #[serde(default)]
    pub(crate) message: Option<String>,
    #[serde(default)]
    pub(crate) data: Option<serde_json::Value>,
    #[serde(default)]
    pub(crate) pagination: Option<ApiPagination>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ApiPagination {
    #[serde(default)]
    pub(crate) page: Option<u32>,
    #[serde(default)]
    pub(crate) per_page: Option<u32>,
    #[serde(default)]
    pub(crate) total: Option<u64>,
    #[serde(default)]
    pub(crate) pages: Option<u32>,
    #[serde(default)]
    pub(crate) has_prev: bool,
    #[serde(default)]
    pub(crate) has_next: bool,
}

impl ApiPagination {
    pub(crate) fn into_page_info(self, requested_page: u32) -> PageInfo {
        PageInfo::new(self.page.unwrap_or(requested_page))
            .with_per_page(self.per_page)
            .with_total_items(self.total)
            .with_total_pages(self.pages)
            .with_has_next(self.has_next)
            .with_has_prev(self.has_prev)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiReviewsData {
    #[serde(default)]
    pub(crate) reviews: Vec<ApiReview>,
    #[serde(default)]
    pub(crate) rating_distribution: Vec<ApiRatingBucket>,
    #[serde(default)]
    pub(crate) statistics: Option<ApiStatistics>,
}

impl ApiReviewsData {
    pub(crate) fn into_page(
        self,
        requested_page: u32,
        pagination: Option<ApiPagination>,
    ) -> ReviewPage {
        ReviewPage {
            reviews: self.reviews.into_iter().map(Review::from).collect(),
            breakdown: RatingBreakdown::new(
                self.rating_distribution
                    .into_iter()
                    .filter_map(ApiRatingBucket::into_bucket)
                    .collect(),
            ),
            statistics: self.statistics.map(ReviewStatistics::from),
            page_info: pagination
                .unwrap_or_default()
                .into_page_info(requested_page),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiReview {
    pub(crate) id: u64,
    #[serde(default)]
    pub(crate) rating: Option<i64>,
    #[serde(default)]
    pub(crate) content: Option<String>,
    #[serde(default)]
    pub(crate) created_at: Option<String>,
    #[serde(default)]
    pub(crate) user: Option<ApiUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiUser {
    #[serde(default)]
    pub(crate) username: Option<String>,
    #[serde(default)]
    pub(crate) avatar_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiRatingBucket {
    pub(crate) rating: Option<i64>,
    #[serde(default)]
    pub(crate) count: u64,
}

impl ApiRatingBucket {
    fn into_bucket(self) -> Option<RatingBucket> {
        checked_rating(self.rating).map(|rating| RatingBucket {
            rating,
            count: self.count,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiStatistics {
    #[serde(default)]
    pub(crate) average_rating: Option<f64>,
    #[serde(default)]
    pub(crate) total_reviews: Option<u64>,
    #[serde(default)]
    pub(crate) rated_reviews: Option<u64>,
    #[serde(default)]
    pub(crate) average_learning_gain: Option<f64>,
    #[serde(default)]
    pub(crate) average_workload: Option<f64>,
    #[serde(default)]
    pub(crate) average_difficulty: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiCourse {
    pub(crate) id: u64,
    #[serde(default)]
    pub(crate) title: Option<String>,
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(default)]
    pub(crate) cover_images: Option<Vec<String>>,
    #[serde(default)]
    pub(crate) average_rating: Option<f64>,
    #[serde(default)]
    pub(crate) total_reviews: Option<u64>,
    #[serde(default)]
    pub(crate) instructor: Option<ApiInstructor>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiInstructor {
    #[serde(default)]
    pub(crate) name: Option<String>,
}

fn checked_rating(value: Option<i64>) -> Option<u8> {
    value
        .and_then(|raw| u8::try_from(raw).ok())
        .filter(|rating| (1..=MAX_RATING).contains(rating))
}

impl From<ApiReview> for Review {
    fn from(value: ApiReview) -> Self {
        Self {
            id: value.id,
            rating: checked_rating(value.rating),
            content: value.content,
            created_at: value.created_at,
            user: value.user.map(|user| ReviewAuthor {
                username: user.username,
                avatar_url: user.avatar_url,
            }),
        }
    }
}

impl From<ApiStatistics> for ReviewStatistics {
    fn from(value: ApiStatistics) -> Self {
        Self {
            average_rating: value.average_rating,
            total_reviews: value.total_reviews,
            rated_reviews: value.rated_reviews,
            average_learning_gain: value.average_learning_gain,
            average_workload: value.average_workload,
            average_difficulty: value.average_difficulty,
        }
    }
}

impl From<ApiCourse> for CourseSummary {
    fn from(value: ApiCourse) -> Self {
        Self {
            id: value.id,
            title: value.title,
            description: value.description,
            cover_images: value.cover_images.unwrap_or_default(),
            average_rating: value.average_rating.unwrap_or_default(),
            total_reviews: value.total_reviews.unwrap_or_default(),
            instructor: value.instructor.and_then(|instructor| instructor.name),
        }
    }
}
