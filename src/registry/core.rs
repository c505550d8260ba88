use super::{Registry, RegistryError};

use crate::config::PathConfig;
use crate::matcher::MatchResult;
use crate::rank::compare;
use crate::template::{Template, FRAGMENT, QUERY, SLASH};

use smallvec::SmallVec;

type Candidates<'s, 'p> = SmallVec<[(usize, MatchResult<'s, 'p>); 4]>;

impl<T> Registry<T> {
    pub(super) fn insert_entry(&mut self, pattern: &str, data: T) -> Result<(), RegistryError> {
        let template = Template::parse(pattern);

        for name in template.configurables() {
            let value = match self.config.get(name) {
                Some(v) => v,
                None => return Err(RegistryError::MissingConfiguration { name: name.into() }),
            };
            // empty pieces are dropped and separators split the uri before matching
            if value.is_empty() || value.contains(&[SLASH, QUERY, FRAGMENT][..]) {
                return Err(RegistryError::InvalidConfiguration {
                    name: name.into(),
                    value: value.into(),
                });
            }
        }

        if let Some(existing) = self.templates.iter().find(|t| t.collides_with(&template)) {
            return Err(RegistryError::Collision {
                existing: existing.as_str().into(),
            });
        }

        tracing::debug!(pattern, id = self.templates.len(), "template registered");

        self.templates.push(template);
        self.entries.push(data);
        Ok(())
    }
}

/// Every template matching `uri`, in registration order.
pub(super) fn candidates<'s, 'p>(
    templates: &'s [Template],
    config: &PathConfig,
    uri: &'p str,
) -> Candidates<'s, 'p> {
    templates
        .iter()
        .enumerate()
        .filter_map(|(id, t)| {
            let m = t.matches(uri, config)?;
            tracing::trace!(uri, id, template = t.as_str(), "candidate matched");
            Some((id, m))
        })
        .collect()
}

pub(super) fn select<'s, 'p>(candidates: Candidates<'s, 'p>) -> Option<(usize, MatchResult<'s, 'p>)> {
    let count = candidates.len();
    let best = candidates
        .into_iter()
        .min_by(|(_, lhs), (_, rhs)| compare(lhs, rhs))?;
    tracing::debug!(
        candidates = count,
        template = best.1.template().as_str(),
        "uri resolved"
    );
    Some(best)
}
