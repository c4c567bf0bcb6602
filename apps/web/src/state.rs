use std::sync::Arc;

use crate::config::Config;
use crate::generator_client::CurriculumGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable generator. Default: `HttpGenerator` against `GENERATOR_URL`.
    pub generator: Arc<dyn CurriculumGenerator>,
}
