//! Scenario state and runtime/server initialisation for the review list BDD
//! tests.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use coursescope::page::gallery::DEFAULT_ASSET_BASE;
use coursescope::{
    ApiBase, CourseId, CoursePage, HttpReviewGateway, NoopTelemetrySink, PageSettings, SortKey,
};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use tokio::runtime::Runtime;
use wiremock::{Mock, MockServer};

/// Error type for BDD test step failures.
pub(crate) type StepError = &'static str;

/// Result type for BDD test steps.
pub(crate) type StepResult = Result<(), StepError>;

/// Shared runtime wrapper that can be stored in an rstest-bdd Slot.
#[derive(Clone)]
pub(crate) struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    pub(crate) fn new(runtime: Runtime) -> Self {
        Self(Rc::new(RefCell::new(runtime)))
    }

    pub(crate) fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }
}

#[derive(ScenarioState, Default)]
pub(crate) struct ReviewListState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) gateway: Slot<Arc<HttpReviewGateway>>,
    pub(crate) page: Slot<CoursePage>,
}

/// Ensures the runtime and server are initialised in `ReviewListState`.
pub(crate) fn ensure_runtime_and_server(state: &ReviewListState) -> SharedRuntime {
    if state.runtime.with_ref(|_| ()).is_none() {
        let runtime = Runtime::new()
            .unwrap_or_else(|error| panic!("failed to create Tokio runtime: {error}"));
        state.runtime.set(SharedRuntime::new(runtime));
    }

    let shared_runtime = state
        .runtime
        .get()
        .unwrap_or_else(|| panic!("runtime not initialised after set"));

    if state.server.with_ref(|_| ()).is_none() {
        state.server.set(shared_runtime.block_on(MockServer::start()));
    }

    shared_runtime
}

/// Mounts `mock` on the scenario's server.
pub(crate) fn mount(state: &ReviewListState, mock: Mock) {
    let runtime = ensure_runtime_and_server(state);
    state
        .server
        .with_ref(|server| runtime.block_on(mock.mount(server)))
        .unwrap_or_else(|| panic!("mock server not initialised"));
}

impl ReviewListState {
    /// Builds the gateway and an idle page for course 42 on first use.
    pub(crate) fn ensure_page(&self) -> Result<SharedRuntime, StepError> {
        let runtime = ensure_runtime_and_server(self);
        if self.page.with_ref(|_| ()).is_some() {
            return Ok(runtime);
        }

        let server_uri = self
            .server
            .with_ref(MockServer::uri)
            .ok_or("mock server URL missing")?;
        let api_base = ApiBase::parse(&format!("{server_uri}/api/v1"))
            .map_err(|_| "mock server URL should parse")?;
        let gateway =
            HttpReviewGateway::new(api_base, None).map_err(|_| "gateway should build")?;
        self.gateway.set(Arc::new(gateway));

        let settings = PageSettings {
            course_id: CourseId::new(42).map_err(|_| "course id should be valid")?,
            sort: SortKey::default(),
            asset_base: DEFAULT_ASSET_BASE.to_owned(),
            detailed_ratings: false,
        };
        self.page
            .set(CoursePage::new(&settings, Arc::new(NoopTelemetrySink)));
        Ok(runtime)
    }

    /// Returns the gateway built by [`ReviewListState::ensure_page`].
    pub(crate) fn gateway(&self) -> Result<Arc<HttpReviewGateway>, StepError> {
        self.gateway.get().ok_or("gateway should be initialised")
    }
}
