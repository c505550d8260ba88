//! Specificity ranking of matched templates.
//!
//! Two templates that both match a URI are compared position by position over
//! their path segments. The first position where the segment kinds differ decides:
//! `Literal` beats `Placeholder`, which beats `Configurable`. Later positions are
//! never consulted once a difference is found.
//!
//! If every shared position ties, the template with more segments ranks first.
//! Two literals with different text tie; picking between them is the matcher's job.
//!
//! [`Ordering::Less`] always means "ranks first", so a plain ascending sort puts
//! the best match at index 0.

use crate::matcher::MatchResult;
use crate::template::{Segment, Template};

use std::cmp::Ordering;
use std::fmt;

/// The ranking key of a template: the kinds of its path segments, in order.
#[derive(Clone, Copy)]
pub struct Specificity<'a> {
    segments: &'a [Segment],
}

impl<'a> Specificity<'a> {
    #[inline]
    pub(crate) fn new(segments: &'a [Segment]) -> Self {
        Self { segments }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl Ord for Specificity<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        let pairs = self.segments.iter().zip(other.segments.iter());
        for (lhs, rhs) in pairs {
            let lhs = lhs.kind().specificity();
            let rhs = rhs.kind().specificity();
            match lhs.cmp(&rhs) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        // shared prefix ties: longer first
        other.len().cmp(&self.len())
    }
}

impl PartialOrd for Specificity<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Specificity<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Specificity<'_> {}

impl fmt::Debug for Specificity<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.segments.iter().map(Segment::kind))
            .finish()
    }
}

/// Three-way comparison of two matches. `Less` means `a` is more specific.
pub fn compare(a: &MatchResult<'_, '_>, b: &MatchResult<'_, '_>) -> Ordering {
    compare_templates(a.template(), b.template())
}

pub fn compare_templates(a: &Template, b: &Template) -> Ordering {
    a.specificity().cmp(&b.specificity())
}

/// Stable sort, most specific first.
pub fn sort_matches(matches: &mut [MatchResult<'_, '_>]) {
    matches.sort_by(|a, b| compare(a, b))
}

/// The most specific match. Among equally specific matches the earliest wins.
pub fn best_match<'t, 'u, I>(matches: I) -> Option<MatchResult<'t, 'u>>
where
    I: IntoIterator<Item = MatchResult<'t, 'u>>,
{
    matches.into_iter().min_by(|a, b| compare(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmp(a: &str, b: &str) -> Ordering {
        compare_templates(&Template::parse(a), &Template::parse(b))
    }

    #[test]
    fn first_difference_wins() {
        assert_eq!(cmp("s://h/one/{p}/{q}", "s://h/{p}/two/three"), Ordering::Less);
        assert_eq!(cmp("s://h/{p}/two/three", "s://h/one/{p}/{q}"), Ordering::Greater);
        assert_eq!(cmp("s://h/one/<c>", "s://h/one/{p}"), Ordering::Greater);
    }

    #[test]
    fn longer_wins_after_tied_prefix() {
        assert_eq!(cmp("s://h/one/{p}", "s://h/one"), Ordering::Less);
        assert_eq!(cmp("s://h/one", "s://h/one/{p}"), Ordering::Greater);
        assert_eq!(cmp("s://h/<c>", "s://h"), Ordering::Less);
    }

    #[test]
    fn empty_paths_tie() {
        assert_eq!(cmp("s://h", "t://g/"), Ordering::Equal);
    }

    #[test]
    fn literal_text_is_ignored() {
        assert_eq!(cmp("s://h/one/{p}", "s://h/two/{q}"), Ordering::Equal);
    }

    #[test]
    fn scheme_and_host_are_ignored() {
        assert_eq!(cmp("{s}://{h}/one", "s://h/one"), Ordering::Equal);
    }
}
