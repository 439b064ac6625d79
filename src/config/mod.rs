//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.coursescope.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `COURSESCOPE_API_BASE`,
//!    `COURSESCOPE_COURSE_ID`, `COURSESCOPE_SESSION_COOKIE` or the shorter
//!    `COURSESCOPE_SESSION`
//! 4. **Command-line arguments** – `--course-id`/`-c`, `--api-base`/`-a`, ...
//!
//! # Configuration File
//!
//! ```toml
//! api_base = "https://courses.example/api/v1"
//! course_id = 42
//! sort = "highest"
//! session_cookie = "session=..."
//! detailed_ratings = true
//! ```

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::api::error::ReviewApiError;
use crate::api::locator::{
    ApiBase, CourseId, DEFAULT_API_BASE, DEFAULT_SORT, SessionCookie, SortKey,
};
use crate::page::PageSettings;
use crate::page::gallery::DEFAULT_ASSET_BASE;

/// Environment variable consulted when no session cookie is configured.
pub const SESSION_ENV_FALLBACK: &str = "COURSESCOPE_SESSION";

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Print the course header and first page of reviews, then exit.
    Summary,
    /// Interactive course review page.
    CourseTui,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use coursescope::CoursescopeConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = CoursescopeConfig::load().expect("failed to load configuration");
/// let course_id = config.require_course_id().expect("course id required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "COURSESCOPE",
    discovery(
        dotfile_name = ".coursescope.toml",
        config_file_name = "coursescope.toml",
        app_name = "coursescope"
    )
)]
pub struct CoursescopeConfig {
    /// Base URL of the course API, including the version prefix.
    ///
    /// Can be provided via:
    /// - CLI: `--api-base <URL>` or `-a <URL>`
    /// - Environment: `COURSESCOPE_API_BASE`
    /// - Config file: `api_base = "..."`
    #[ortho_config(cli_short = 'a')]
    pub api_base: String,

    /// Course whose reviews are shown.
    ///
    /// Can be provided via:
    /// - CLI: `--course-id <ID>` or `-c <ID>`
    /// - Environment: `COURSESCOPE_COURSE_ID`
    /// - Config file: `course_id = 42`
    #[ortho_config(cli_short = 'c')]
    pub course_id: Option<u64>,

    /// Initial review ordering, forwarded to the server verbatim.
    ///
    /// Can be provided via:
    /// - CLI: `--sort <KEY>` or `-s <KEY>`
    /// - Environment: `COURSESCOPE_SORT`
    /// - Config file: `sort = "highest"`
    #[ortho_config(cli_short = 's')]
    pub sort: String,

    /// Session cookie sent as the `Cookie` header on every request.
    ///
    /// Can be provided via:
    /// - CLI: `--session-cookie <VALUE>` or `-k <VALUE>`
    /// - Environment: `COURSESCOPE_SESSION_COOKIE` or `COURSESCOPE_SESSION`
    /// - Config file: `session_cookie = "..."`
    #[ortho_config(cli_short = 'k')]
    pub session_cookie: Option<String>,

    /// Prefix applied to bare cover image filenames.
    #[ortho_config()]
    pub asset_base: String,

    /// Captures and sends learning gain, workload and difficulty ratings.
    ///
    /// Can be provided via:
    /// - CLI: `--detailed-ratings` / `-d`
    /// - Config file: `detailed_ratings = true`
    #[ortho_config(cli_short = 'd')]
    pub detailed_ratings: bool,

    /// Launches the interactive course page.
    ///
    /// Can be provided via:
    /// - CLI: `--tui` / `-T`
    /// - Config file: `tui = true`
    #[ortho_config(cli_short = 'T')]
    pub tui: bool,

    /// Writes telemetry events to stderr as JSON lines.
    ///
    /// Can be provided via:
    /// - CLI: `--telemetry`
    /// - Config file: `telemetry = true`
    #[ortho_config()]
    pub telemetry: bool,
}

impl Default for CoursescopeConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            course_id: None,
            sort: DEFAULT_SORT.to_owned(),
            session_cookie: None,
            asset_base: DEFAULT_ASSET_BASE.to_owned(),
            detailed_ratings: false,
            tui: false,
            telemetry: false,
        }
    }
}

impl CoursescopeConfig {
    /// Returns the course id or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewApiError::Configuration`] when no course id is set and
    /// [`ReviewApiError::InvalidCourseId`] when it is zero.
    pub fn require_course_id(&self) -> Result<CourseId, ReviewApiError> {
        let value = self.course_id.ok_or_else(|| ReviewApiError::Configuration {
            message: "course id is required (use --course-id or -c)".to_owned(),
        })?;
        CourseId::new(value)
    }

    /// Resolves the session cookie from configuration or the
    /// `COURSESCOPE_SESSION` environment variable.
    ///
    /// Browsing reviews works anonymously, so an absent cookie is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewApiError::Configuration`] when a configured cookie is
    /// blank.
    pub fn resolve_session_cookie(&self) -> Result<Option<SessionCookie>, ReviewApiError> {
        self.session_cookie
            .clone()
            .or_else(|| env::var(SESSION_ENV_FALLBACK).ok())
            .map(SessionCookie::new)
            .transpose()
    }

    /// Parses the configured API base.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewApiError::InvalidUrl`] when `api_base` is not an
    /// absolute URL.
    pub fn api_base(&self) -> Result<ApiBase, ReviewApiError> {
        ApiBase::parse(&self.api_base)
    }

    /// Configured sort key.
    #[must_use]
    pub fn sort_key(&self) -> SortKey {
        SortKey::new(&self.sort)
    }

    /// Determines the operation mode based on provided configuration.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.tui {
            OperationMode::CourseTui
        } else {
            OperationMode::Summary
        }
    }

    /// Checks that the configuration is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewApiError::Configuration`] for a blank sort key or
    /// asset base and [`ReviewApiError::InvalidUrl`] for an unusable
    /// `api_base`.
    pub fn validate(&self) -> Result<(), ReviewApiError> {
        if self.sort.trim().is_empty() {
            return Err(ReviewApiError::Configuration {
                message: "sort key must not be blank".to_owned(),
            });
        }
        if self.asset_base.trim().is_empty() {
            return Err(ReviewApiError::Configuration {
                message: "asset base must not be blank".to_owned(),
            });
        }
        self.api_base().map(|_| ())
    }

    /// Builds the page settings for the configured course.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`CoursescopeConfig::require_course_id`].
    pub fn page_settings(&self) -> Result<PageSettings, ReviewApiError> {
        Ok(PageSettings {
            course_id: self.require_course_id()?,
            sort: self.sort_key(),
            asset_base: self.asset_base.trim().to_owned(),
            detailed_ratings: self.detailed_ratings,
        })
    }
}

#[cfg(test)]
mod tests;
