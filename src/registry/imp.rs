use super::core::{candidates, select};
use super::{Registry, RegistryError};

use crate::config::PathConfig;
use crate::matcher::MatchResult;
use crate::rank::compare;
use crate::template::Template;

impl<T> Registry<T> {
    pub fn new() -> Self {
        Self::with_config(PathConfig::new())
    }

    /// Templates with `<name>` segments can only be registered if `config` has `name`.
    pub fn with_config(config: PathConfig) -> Self {
        Self {
            templates: Vec::new(),
            entries: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &PathConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn clear(&mut self) {
        self.templates.clear();
        self.entries.clear();
    }

    pub fn templates(&self) -> impl Iterator<Item = (&Template, &T)> + '_ {
        self.templates.iter().zip(self.entries.iter())
    }

    /// The most specific template matching `uri`.
    pub fn find<'s, 'p>(&'s self, uri: &'p str) -> Option<(&'s T, MatchResult<'s, 'p>)> {
        let (id, m) = select(candidates(&self.templates, &self.config, uri))?;
        Some((&self.entries[id], m))
    }

    pub fn find_mut<'s, 'p>(&'s mut self, uri: &'p str) -> Option<(&'s mut T, MatchResult<'s, 'p>)> {
        let Self {
            templates,
            entries,
            config,
        } = self;
        let (id, m) = select(candidates(templates, config, uri))?;
        Some((&mut entries[id], m))
    }

    /// Every template matching `uri`, most specific first.
    pub fn find_all<'s, 'p>(&'s self, uri: &'p str) -> Vec<(&'s T, MatchResult<'s, 'p>)> {
        let mut all: Vec<(&T, MatchResult<'_, '_>)> =
            candidates(&self.templates, &self.config, uri)
                .into_iter()
                .map(|(id, m)| (&self.entries[id], m))
                .collect();
        all.sort_by(|(_, lhs), (_, rhs)| compare(lhs, rhs));
        all
    }

    pub fn contains(&self, uri: &str) -> bool {
        self.templates
            .iter()
            .any(|t| t.matches(uri, &self.config).is_some())
    }

    pub fn insert(&mut self, pattern: &str, data: T) -> &mut Self {
        if let Err(e) = self.insert_entry(pattern, data) {
            panic!("{}: pattern = {:?}", e, pattern);
        }
        self
    }

    pub fn try_insert(&mut self, pattern: &str, data: T) -> Result<&mut Self, RegistryError> {
        self.insert_entry(pattern, data)?;
        Ok(self)
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}
