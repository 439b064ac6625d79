//! Tests for configuration consistency validation.

use rstest::rstest;

use crate::CoursescopeConfig;
use crate::api::error::ReviewApiError;

#[rstest]
fn defaults_validate() {
    assert!(CoursescopeConfig::default().validate().is_ok());
}

#[rstest]
fn rejects_blank_sort() {
    let config = CoursescopeConfig {
        sort: "  ".to_owned(),
        ..Default::default()
    };

    let result = config.validate();

    assert!(
        matches!(result, Err(ReviewApiError::Configuration { .. })),
        "should reject a blank sort key, got {result:?}"
    );
}

#[rstest]
#[case::relative("api/v1")]
#[case::garbage("not a url")]
fn rejects_unusable_api_base(#[case] api_base: &str) {
    let config = CoursescopeConfig {
        api_base: api_base.to_owned(),
        ..Default::default()
    };

    let result = config.validate();

    assert!(
        matches!(result, Err(ReviewApiError::InvalidUrl(_))),
        "should reject {api_base}, got {result:?}"
    );
}
