//! No-op test engine for host testing and development
//!
//! Owns no tests and does no work. No external dependencies - always
//! works, so hosts and integration tests can exercise the discovery
//! plumbing without a real engine installed.

use std::sync::Arc;

use testrig_api::TestEngine;
use testrig_api::error::Result;
use testrig_registry::{EngineRegistrant, TEST_ENGINES};

/// No-op test engine
///
/// # Example
///
/// ```
/// use testrig_api::TestEngine;
/// use testrig_engines::NoopTestEngine;
///
/// let engine = NoopTestEngine::new();
/// assert_eq!(engine.engine_id(), "noop");
/// ```
pub struct NoopTestEngine;

impl NoopTestEngine {
    /// Create a new no-op engine
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoopTestEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEngine for NoopTestEngine {
    fn engine_id(&self) -> &str {
        "noop"
    }
}

fn noop_engine_factory() -> Result<Arc<dyn TestEngine>> {
    Ok(Arc::new(NoopTestEngine::new()))
}

#[linkme::distributed_slice(TEST_ENGINES)]
static NOOP_ENGINE: EngineRegistrant = EngineRegistrant {
    name: "noop",
    description: "No-op test engine that owns no tests (always installed)",
    factory: noop_engine_factory,
};
