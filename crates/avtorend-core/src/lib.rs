//! # avtorend-core - Core Domain Types
//!
//! Foundation crate for the AvtoRend storefront. Provides the fleet domain
//! records, viewport classification, locale dictionaries, fallback data,
//! error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`VehicleRecord`] - A rentable vehicle as served by `/api/cars`
//! - [`CategoryRecord`] - A vehicle category as served by `/api/categories`
//! - [`CategoryFilter`] - `All` or a concrete category id
//! - [`Transmission`], [`CarStatus`] - Backend enums, parsed case-insensitively
//!
//! ### Viewport (`viewport`)
//! - [`detect()`] - Pure classification of [`EnvironmentSignals`] into a [`ViewportClass`]
//! - [`Breakpoint`], [`DeviceTier`] - Width buckets
//!
//! ### Localization (`locale`)
//! - [`LocaleDictionary`] - Dotted-key string table, flattened from nested JSON
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum with a `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use avtorend_core::prelude::*;
//! ```

pub mod error;
pub mod fallback;
pub mod locale;
pub mod logging;
pub mod prelude;
pub mod types;
pub mod viewport;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use fallback::fallback_categories;
pub use locale::LocaleDictionary;
pub use types::{CarStatus, CategoryFilter, CategoryRecord, Transmission, VehicleRecord};
pub use viewport::{
    capability_hints_from_env, detect, Breakpoint, CapabilityHints, DeviceTier,
    EnvironmentSignals, Orientation, ViewportClass,
};
