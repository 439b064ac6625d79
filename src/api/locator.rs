//! Identity wrappers and endpoint construction for the course API.

use std::fmt;

use url::Url;

use super::error::ReviewApiError;

/// Default base URL for the course API.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api/v1";

/// Sort key used when no other key is configured.
pub const DEFAULT_SORT: &str = "newest";

/// Course identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CourseId(u64);

impl CourseId {
    /// Smallest valid identifier.
    pub const MIN: Self = Self(1);

    /// Validates that the identifier is positive.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewApiError::InvalidCourseId`] when `value` is zero.
    pub const fn new(value: u64) -> Result<Self, ReviewApiError> {
        if value == 0 {
            return Err(ReviewApiError::InvalidCourseId);
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Review ordering understood by the server.
///
/// The client treats the key as opaque and forwards it verbatim; the
/// well-known keys are only used for cycling in the terminal UI.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortKey(String);

impl SortKey {
    /// Sort keys offered by the review page.
    pub const KNOWN: [&'static str; 3] = [DEFAULT_SORT, "highest", "lowest"];

    /// Wraps a sort key, falling back to the default for blank input.
    #[must_use]
    pub fn new(value: impl AsRef<str>) -> Self {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Self::default();
        }
        Self(trimmed.to_owned())
    }

    /// Borrow the key value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the next well-known key, wrapping around.
    ///
    /// Unknown keys advance to the first well-known key.
    #[must_use]
    pub fn cycled(&self) -> Self {
        let next = Self::KNOWN
            .iter()
            .position(|known| *known == self.as_str())
            .and_then(|index| Self::KNOWN.get(index.saturating_add(1)))
            .unwrap_or(&DEFAULT_SORT);
        Self((*next).to_owned())
    }
}

impl Default for SortKey {
    fn default() -> Self {
        Self(DEFAULT_SORT.to_owned())
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One request for a page of reviews.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewQuery {
    /// Course whose reviews are requested.
    pub course_id: CourseId,
    /// 1-based page number.
    pub page: u32,
    /// Requested ordering.
    pub sort: SortKey,
}

/// Opaque session cookie forwarded with every request.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionCookie(String);

impl SessionCookie {
    /// Wraps a cookie header value, rejecting blank input.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewApiError::Configuration`] when `value` is blank.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ReviewApiError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ReviewApiError::Configuration {
                message: "session cookie must not be blank".to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the header value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for SessionCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionCookie(<redacted>)")
    }
}

/// Parsed API base URL with endpoint builders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase(Url);

impl ApiBase {
    /// Parses the base URL of the course API, e.g. `http://host/api/v1`.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewApiError::InvalidUrl`] when the value is not an
    /// absolute URL that can carry path segments.
    pub fn parse(value: &str) -> Result<Self, ReviewApiError> {
        let url =
            Url::parse(value.trim()).map_err(|error| ReviewApiError::InvalidUrl(error.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(ReviewApiError::InvalidUrl(format!(
                "{value} cannot carry a path"
            )));
        }
        Ok(Self(url))
    }

    /// Borrow the underlying URL.
    #[must_use]
    pub const fn as_url(&self) -> &Url {
        &self.0
    }

    /// URL of the course detail endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewApiError::InvalidUrl`] if the base cannot be extended.
    pub fn course_url(&self, course_id: CourseId) -> Result<Url, ReviewApiError> {
        self.with_segments(&["courses", &course_id.to_string()])
    }

    /// URL of the review collection endpoint, used for creation.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewApiError::InvalidUrl`] if the base cannot be extended.
    pub fn reviews_url(&self, course_id: CourseId) -> Result<Url, ReviewApiError> {
        self.with_segments(&["courses", &course_id.to_string(), "reviews"])
    }

    /// URL for one page of reviews including `page` and `sort` parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewApiError::InvalidUrl`] if the base cannot be extended.
    pub fn review_page_url(&self, query: &ReviewQuery) -> Result<Url, ReviewApiError> {
        let mut url = self.reviews_url(query.course_id)?;
        url.query_pairs_mut()
            .append_pair("page", &query.page.to_string())
            .append_pair("sort", query.sort.as_str());
        Ok(url)
    }

    fn with_segments(&self, segments: &[&str]) -> Result<Url, ReviewApiError> {
        let mut url = self.0.clone();
        url.set_query(None);
        url.path_segments_mut()
            .map_err(|()| ReviewApiError::InvalidUrl(format!("{} cannot carry a path", self.0)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
