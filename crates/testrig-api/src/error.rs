//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Testrig platform
#[derive(Error, Debug)]
pub enum Error {
    /// A declared engine implementation could not be constructed
    ///
    /// Raised by an engine factory when the implementation is
    /// misconfigured or a dependency it needs is missing. The registry
    /// propagates this verbatim: a broken engine installation must be
    /// visible to the host, not silently dropped from the result.
    #[error("Engine instantiation error: '{engine}': {message}")]
    EngineInstantiation {
        /// Registered name of the engine that failed to construct
        engine: String,
        /// Description of the instantiation failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// No engine is registered under the requested id
    #[error("Unknown test engine '{engine_id}'. Available engines: {available:?}")]
    EngineNotFound {
        /// The id that was looked up
        engine_id: String,
        /// Ids of all registered engines
        available: Vec<String>,
    },
}

// Error creation methods
impl Error {
    /// Create an engine instantiation error
    pub fn instantiation<E: Into<String>, M: Into<String>>(engine: E, message: M) -> Self {
        Self::EngineInstantiation {
            engine: engine.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create an engine instantiation error with source
    pub fn instantiation_with_source<E, M, S>(engine: E, message: M, source: S) -> Self
    where
        E: Into<String>,
        M: Into<String>,
        S: std::error::Error + Send + Sync + 'static,
    {
        Self::EngineInstantiation {
            engine: engine.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an engine not found error
    pub fn engine_not_found<S: Into<String>>(engine_id: S, available: Vec<String>) -> Self {
        Self::EngineNotFound {
            engine_id: engine_id.into(),
            available,
        }
    }
}
