use std::fmt;

/// Kind of a template segment, ordered from most to least specific.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Fixed text, compared as-is.
    Literal,
    /// `{name}`: matches any single segment and binds it to `name`.
    Placeholder,
    /// `<name>`: matches whatever value the configuration supplies for `name`.
    Configurable,
}

impl SegmentKind {
    /// Lower is more specific.
    #[inline]
    pub fn specificity(self) -> u8 {
        match self {
            Self::Literal => 0,
            Self::Placeholder => 1,
            Self::Configurable => 2,
        }
    }
}

const LBRACE: char = '{';
const RBRACE: char = '}';
const LANGLE: char = '<';
const RANGLE: char = '>';

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    raw: Box<str>,
    kind: SegmentKind,
}

impl Segment {
    /// Classifies one piece of a template by its surface syntax.
    ///
    /// Anything that is not a complete `{..}` or `<..>` wrapper stays literal,
    /// so an unmatched bracket never makes classification fail.
    pub fn classify(raw: &str) -> Self {
        let kind = if is_wrapped(raw, LBRACE, RBRACE) {
            SegmentKind::Placeholder
        } else if is_wrapped(raw, LANGLE, RANGLE) {
            SegmentKind::Configurable
        } else {
            SegmentKind::Literal
        };
        Self {
            raw: raw.into(),
            kind,
        }
    }

    #[inline]
    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.raw
    }

    /// The inner name of a placeholder or configurable segment.
    pub fn name(&self) -> Option<&str> {
        match self.kind {
            SegmentKind::Literal => None,
            SegmentKind::Placeholder | SegmentKind::Configurable => {
                self.raw.get(1..self.raw.len() - 1)
            }
        }
    }

    #[inline]
    pub fn is_literal(&self) -> bool {
        self.kind == SegmentKind::Literal
    }

    /// Names of `{name}` markers embedded in literal text, as in `http{scheme}`.
    ///
    /// Only scheme and host pieces bind these when matching.
    pub fn embedded_placeholders(&self) -> impl Iterator<Item = &str> + '_ {
        let mut rest = match self.kind {
            SegmentKind::Literal => Some(&*self.raw),
            _ => None,
        };
        std::iter::from_fn(move || {
            let (_, name, tail) = split_embedded(rest?)?;
            rest = Some(tail);
            Some(name)
        })
    }
}

/// Splits `prefix{name}rest` at its first complete `{..}` marker.
pub(crate) fn split_embedded(text: &str) -> Option<(&str, &str, &str)> {
    let open = text.find(LBRACE)?;
    let close = open + text[open..].find(RBRACE)?;
    Some((&text[..open], &text[open + 1..close], &text[close + 1..]))
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

// `{}` and `<>` carry an empty name and are still wrapped.
#[inline]
fn is_wrapped(s: &str, open: char, close: char) -> bool {
    s.len() >= 2 && s.starts_with(open) && s.ends_with(close)
}
