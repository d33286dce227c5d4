//! # triage-core - Core Domain Types
//!
//! Foundation crate for triage. Provides the classification domain types,
//! error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Choice`] - A row's classification (GUI or Custom)
//! - [`MasterState`] - Derived on/off state of a master control
//! - [`MasterPolicy`] - What activating an already-satisfied master does
//! - [`MasterStyle`] - Checkbox (persisted derived state) vs Button (stateless)
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use triage_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all triage crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use types::{Choice, MasterPolicy, MasterState, MasterStyle};
