//! # Testrig - Bundled Engine Implementations
//!
//! Engine implementations that ship with the platform. Each engine
//! implements the [`testrig_api::TestEngine`] capability trait and
//! registers itself into the `TEST_ENGINES` slice declared by
//! `testrig-registry`; linking this crate is what "installs" them.
//!
//! | Engine | Id | Purpose |
//! |--------|----|---------|
//! | [`NoopTestEngine`] | `noop` | Always-installed engine that owns no tests |
//!
//! Third-party engine crates follow the same pattern: implement
//! `TestEngine`, then register an `EngineRegistrant` with
//! `#[linkme::distributed_slice(TEST_ENGINES)]`.

pub mod noop;

pub use noop::NoopTestEngine;
