//! Cached engine lookup
//!
//! [`EngineRegistry`] turns the registered engine entries into constructed
//! engine instances, exactly once per registry. The free functions at the
//! bottom expose a process-wide registry over the global [`TEST_ENGINES`]
//! slice for hosts that want the "lookup once, reuse everywhere" contract
//! without wiring a registry through their call graph.

use std::sync::{Arc, LazyLock};

use once_cell::sync::OnceCell;
use tracing::debug;

use testrig_api::error::{Error, Result};
use testrig_api::{EngineInfo, TestEngine};

use crate::registrant::{EngineRegistrant, TEST_ENGINES};

/// Process-lifetime cache over a set of engine registrations
///
/// Holds a view of a registrant slice and a once-initialized cache of the
/// engines constructed from it. The first successful call to
/// [`EngineRegistry::lookup_all_engines`] runs every registrant factory in
/// slice order and stores the result; every later call returns a borrow of
/// the same set. The cache never reverts and its contents never change for
/// the life of the registry.
///
/// Concurrent first callers are serialized: one of them runs discovery
/// while the rest block, then all of them observe the same fully formed
/// set. A factory failure propagates to the caller that triggered that
/// discovery attempt and leaves the cache unpopulated, so a later call
/// re-attempts discovery rather than observing a cached error.
///
/// Hosts normally use the process-wide [`lookup_all_engines`] function;
/// constructing an [`EngineRegistry`] directly is for composition roots
/// that want explicit ownership, and for tests, which can pass their own
/// registrant slice instead of sharing global state.
pub struct EngineRegistry {
    registrants: &'static [EngineRegistrant],
    engines: OnceCell<Vec<Arc<dyn TestEngine>>>,
}

impl EngineRegistry {
    /// Create a registry over the global [`TEST_ENGINES`] slice
    pub fn new() -> Self {
        Self::with_registrants(&TEST_ENGINES)
    }

    /// Create a registry over a caller-supplied registrant slice
    pub const fn with_registrants(registrants: &'static [EngineRegistrant]) -> Self {
        Self {
            registrants,
            engines: OnceCell::new(),
        }
    }

    /// Look up all installed test engines
    ///
    /// Runs discovery on first call and returns the cached set on every
    /// call after that. Zero installed engines is a valid outcome and
    /// yields an empty slice, not an error.
    pub fn lookup_all_engines(&self) -> Result<&[Arc<dyn TestEngine>]> {
        self.engines
            .get_or_try_init(|| discover(self.registrants))
            .map(Vec::as_slice)
    }

    /// Look up a single installed engine by id
    ///
    /// Triggers discovery if it has not run yet. Returns a clone of the
    /// cached handle, so repeated lookups of the same id yield the same
    /// underlying instance.
    pub fn lookup_engine(&self, engine_id: &str) -> Result<Arc<dyn TestEngine>> {
        let engines = self.lookup_all_engines()?;

        engines
            .iter()
            .find(|engine| engine.engine_id() == engine_id)
            .cloned()
            .ok_or_else(|| {
                let available = self
                    .registrants
                    .iter()
                    .map(|registrant| registrant.name.to_string())
                    .collect();
                Error::engine_not_found(engine_id, available)
            })
    }

    /// List metadata for all registered engines
    ///
    /// Reads the registrant entries directly; no engine is constructed and
    /// the discovery cache is not touched.
    pub fn engine_infos(&self) -> Vec<EngineInfo> {
        self.registrants
            .iter()
            .map(|registrant| EngineInfo {
                id: registrant.name.to_string(),
                description: registrant.description.to_string(),
            })
            .collect()
    }
}

impl Default for EngineRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Construct every registered engine, in registration order
fn discover(registrants: &[EngineRegistrant]) -> Result<Vec<Arc<dyn TestEngine>>> {
    debug!(registered = registrants.len(), "discovering test engines");

    let mut engines = Vec::with_capacity(registrants.len());
    for registrant in registrants {
        // Factory errors propagate verbatim: a broken engine installation
        // must fail the lookup, not shrink the result.
        let engine = (registrant.factory)()?;
        debug!(engine = registrant.name, "constructed test engine");
        engines.push(engine);
    }

    Ok(engines)
}

// ============================================================================
// Process-wide registry
// ============================================================================

static REGISTRY: LazyLock<EngineRegistry> = LazyLock::new(EngineRegistry::new);

/// Look up all installed test engines from the process-wide registry
///
/// The first call discovers and constructs every engine registered in
/// [`TEST_ENGINES`]; every later call returns the same cached set. See
/// [`EngineRegistry::lookup_all_engines`] for the full contract.
pub fn lookup_all_engines() -> Result<&'static [Arc<dyn TestEngine>]> {
    REGISTRY.lookup_all_engines()
}

/// Look up a single installed engine by id from the process-wide registry
pub fn lookup_engine(engine_id: &str) -> Result<Arc<dyn TestEngine>> {
    REGISTRY.lookup_engine(engine_id)
}

/// List metadata for all engines registered in the process-wide registry
pub fn list_engines() -> Vec<EngineInfo> {
    REGISTRY.engine_infos()
}
