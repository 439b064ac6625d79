//! Support modules for the review list BDD tests.

pub(crate) mod harness;
pub(crate) mod state;

pub(crate) use harness::{course_json, review_page_json};
pub(crate) use state::{ReviewListState, StepResult, ensure_runtime_and_server, mount};
