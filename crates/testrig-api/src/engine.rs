//! Test engine capability port

use serde::{Deserialize, Serialize};

/// Pluggable Test Engine Interface
///
/// Defines the contract between the Testrig host and an installable test
/// engine. The host discovers implementations through the registry and
/// addresses them purely by identity; what an engine does with the tests
/// it owns (discovery, selection, execution) is negotiated between the
/// engine and the host elsewhere and is invisible to this crate.
///
/// Implementations must be thread-safe: the host hands the same engine
/// handle to every component that asks for it.
///
/// # Example
///
/// ```
/// use testrig_api::TestEngine;
///
/// struct SmokeEngine;
///
/// impl TestEngine for SmokeEngine {
///     fn engine_id(&self) -> &str {
///         "smoke"
///     }
/// }
///
/// let engine = SmokeEngine;
/// assert_eq!(engine.engine_id(), "smoke");
/// ```
pub trait TestEngine: Send + Sync {
    /// Get the unique identifier of this engine implementation
    ///
    /// Ids are expected to be unique across an installation; the host uses
    /// them to address a specific engine (e.g. "noop", "spectest").
    fn engine_id(&self) -> &str;
}

/// Metadata describing an installed engine registration
///
/// Produced by the registry without instantiating the engine. Useful for
/// CLI help and host diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineInfo {
    /// Unique engine id (e.g. "noop")
    pub id: String,
    /// Human-readable description
    pub description: String,
}
