//! Deep link templates ranked by specificity.
//!
//! ```
//! use deeplink_rank::Registry;
//!
//! let mut registry: Registry<u32> = Registry::new();
//! registry
//!     .insert("scheme://host/one/{param}/three", 2)
//!     .insert("scheme://host/one/two/three", 1);
//!
//! let (data, m) = registry.find("scheme://host/one/two/three").unwrap();
//! assert_eq!(*data, 1);
//! assert!(m.captures().is_empty());
//! ```

#![forbid(unsafe_code)]

mod config;
mod matcher;
mod registry;
mod template;

pub mod rank;

pub use crate::config::PathConfig;
pub use crate::matcher::{Captures, MatchResult};
pub use crate::rank::{best_match, compare, compare_templates, sort_matches, Specificity};
pub use crate::registry::{Registry, RegistryError};
pub use crate::template::{Segment, SegmentKind, Template};

#[cfg(feature = "config-toml")]
pub use crate::config::ConfigError;
