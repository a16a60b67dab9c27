//! Api Layer - Testrig Test Platform
//!
//! This crate defines the capability contract between the Testrig host and
//! installable test engines, plus the core types shared by every layer.
//!
//! ## Contents
//!
//! - [`TestEngine`]: the capability interface every discoverable engine
//!   implements
//! - [`EngineInfo`]: serializable metadata describing an installed engine
//! - [`error::Error`] / [`error::Result`]: shared error types
//!
//! ## Dependencies
//!
//! This crate depends only on pure Rust libraries for errors and
//! serialization. It has no knowledge of how engines are discovered or
//! registered; that lives in `testrig-registry`.

pub mod engine;
pub mod error;

pub use engine::{EngineInfo, TestEngine};
pub use error::{Error, Result};
