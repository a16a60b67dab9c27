//! Engine registration entries
//!
//! Declares the distributed slice that engine crates register into. The
//! slice is the deployment-declared manifest of installed engines:
//! enumerating it is the discovery mechanism, and linking an engine crate
//! into the final binary is how an engine gets "installed".

use std::sync::Arc;

use testrig_api::TestEngine;
use testrig_api::error::Result;

/// Registry entry for test engines
///
/// Each engine implementation registers itself with this entry using
/// `#[linkme::distributed_slice(TEST_ENGINES)]`. The entry carries
/// metadata and a factory function to construct the engine instance.
///
/// Factories take no arguments: engine lookup is zero-configuration, so
/// anything an engine needs must come from its own crate. A factory that
/// cannot construct its engine returns [`testrig_api::Error`], which the
/// registry propagates to the caller unmodified.
pub struct EngineRegistrant {
    /// Unique engine id (e.g. "noop")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to construct the engine instance
    pub factory: fn() -> Result<Arc<dyn TestEngine>>,
}

// Auto-collection via linkme distributed slices - engine crates submit
// entries at link time. Slice order follows link order: stable within a
// build, not guaranteed across builds or platforms.
#[linkme::distributed_slice]
pub static TEST_ENGINES: [EngineRegistrant] = [..];
