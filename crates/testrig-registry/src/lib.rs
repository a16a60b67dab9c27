//! Engine Registry - Testrig Test Platform
//!
//! Discovery and caching of installed test engines. Engine implementations
//! register themselves at link time via the `linkme` crate; the registry
//! enumerates the registrations once per process and hands every caller the
//! same constructed engine set.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Engine Registration Flow                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Engine defines:    #[linkme::distributed_slice(ENGINES)]    │
//! │                        static ENTRY: EngineRegistrant = ...     │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static TEST_ENGINES: [Registrant]    │
//! │                              ↓                                  │
//! │  3. First lookup:      run every factory once, cache the set    │
//! │                              ↓                                  │
//! │  4. Later lookups:     return the cached set, no re-discovery   │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering an engine (in an engine crate)
//!
//! ```ignore
//! use testrig_registry::{EngineRegistrant, TEST_ENGINES};
//!
//! #[linkme::distributed_slice(TEST_ENGINES)]
//! static MY_ENGINE: EngineRegistrant = EngineRegistrant {
//!     name: "spectest",
//!     description: "Spec-style test engine",
//!     factory: || Ok(Arc::new(SpecTestEngine::new())),
//! };
//! ```
//!
//! ### Looking up installed engines (in the host)
//!
//! ```ignore
//! use testrig_registry::lookup_all_engines;
//!
//! let engines = lookup_all_engines()?;
//! for engine in engines {
//!     println!("installed: {}", engine.engine_id());
//! }
//! ```

pub mod registrant;
pub mod registry;

pub use registrant::{EngineRegistrant, TEST_ENGINES};
pub use registry::{EngineRegistry, list_engines, lookup_all_engines, lookup_engine};
