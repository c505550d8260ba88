mod core;
mod error;
mod imp;

pub use self::error::RegistryError;

use crate::config::PathConfig;
use crate::template::Template;

/// Registered templates and their data, resolved by specificity.
#[derive(Debug)]
pub struct Registry<T> {
    templates: Vec<Template>,
    entries: Vec<T>,
    config: PathConfig,
}
