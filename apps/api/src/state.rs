use crate::analysis::requester::AnalysisRequester;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds configuration only; no analysis data outlives a request.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Owns the completion service behind a trait object; tests swap in a fake.
    pub analyzer: AnalysisRequester,
}
