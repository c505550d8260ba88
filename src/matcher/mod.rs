mod captures;

pub use self::captures::Captures;

use crate::config::PathConfig;
use crate::template::{path_parts, split_embedded, split_uri, Segment, SegmentKind, Template};

use smallvec::SmallVec;

/// A template that matched a concrete URI, with the values its placeholders bound.
///
/// Ranking looks only at the template; the captures never affect it.
#[derive(Debug, Clone)]
pub struct MatchResult<'t, 'u> {
    template: &'t Template,
    captures: Captures<'t, 'u>,
}

impl<'t, 'u> MatchResult<'t, 'u> {
    #[inline]
    pub fn template(&self) -> &'t Template {
        self.template
    }

    #[inline]
    pub fn captures(&self) -> &Captures<'t, 'u> {
        &self.captures
    }

    #[inline]
    pub fn into_captures(self) -> Captures<'t, 'u> {
        self.captures
    }
}

impl Template {
    /// Matches `uri` segment by segment.
    ///
    /// Scheme and host literals compare case-insensitively, path literals exactly.
    /// A scheme or host literal may embed `{name}` markers, which bind the
    /// shortest text that lets the rest of the piece match, possibly empty.
    /// A configurable segment matches only the value `config` holds for its name.
    pub fn matches<'t, 'u>(
        &'t self,
        uri: &'u str,
        config: &PathConfig,
    ) -> Option<MatchResult<'t, 'u>> {
        let (scheme, host, path) = split_uri(uri);
        let mut captures = Captures::new();

        if let Some(seg) = self.scheme() {
            if !match_segment(seg, scheme?, config, &mut captures, true) {
                return None;
            }
        }
        if let Some(seg) = self.host() {
            if !match_segment(seg, host?, config, &mut captures, true) {
                return None;
            }
        }

        let parts: SmallVec<[&'u str; 8]> = path_parts(path).collect();
        if parts.len() != self.segments().len() {
            return None;
        }
        for (seg, &part) in self.segments().iter().zip(parts.iter()) {
            if !match_segment(seg, part, config, &mut captures, false) {
                return None;
            }
        }

        Some(MatchResult {
            template: self,
            captures,
        })
    }
}

fn match_segment<'t, 'u>(
    seg: &'t Segment,
    value: &'u str,
    config: &PathConfig,
    captures: &mut Captures<'t, 'u>,
    authority: bool,
) -> bool {
    let eq = |lhs: &str, rhs: &str| {
        if authority {
            lhs.eq_ignore_ascii_case(rhs)
        } else {
            lhs == rhs
        }
    };

    match seg.kind() {
        SegmentKind::Literal if authority => match_embedded(seg.text(), value, captures),
        SegmentKind::Literal => eq(seg.text(), value),
        SegmentKind::Placeholder => match seg.name() {
            Some(name) if !value.is_empty() => {
                captures.push(name, value);
                true
            }
            _ => false,
        },
        SegmentKind::Configurable => seg
            .name()
            .and_then(|name| config.get(name))
            .map_or(false, |expected| eq(expected, value)),
    }
}

/// Matches authority text like `{host_prefix}airbnb.com` against `value`.
fn match_embedded<'t, 'u>(pattern: &'t str, value: &'u str, captures: &mut Captures<'t, 'u>) -> bool {
    let (prefix, name, rest) = match split_embedded(pattern) {
        Some(parts) => parts,
        None => return pattern.eq_ignore_ascii_case(value),
    };

    let value = match value.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => &value[prefix.len()..],
        _ => return false,
    };

    let ends = value
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(value.len()));
    for end in ends {
        let mark = captures.len();
        captures.push(name, &value[..end]);
        if match_embedded(rest, &value[end..], captures) {
            return true;
        }
        captures.truncate(mark);
    }
    false
}
