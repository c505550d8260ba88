mod segment;

pub use self::segment::{Segment, SegmentKind};
pub(crate) use self::segment::split_embedded;

use crate::rank::Specificity;

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

pub(crate) const SCHEME_SEP: &str = "://";
pub(crate) const SLASH: char = '/';
pub(crate) const QUERY: char = '?';
pub(crate) const FRAGMENT: char = '#';

/// A registered deep link pattern such as `scheme://host/one/{id}/<cfg>`.
///
/// Built once by [`Template::parse`] and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Template {
    raw: Box<str>,
    scheme: Option<Segment>,
    host: Option<Segment>,
    segments: SmallVec<[Segment; 8]>,
}

impl Template {
    pub fn parse(pattern: &str) -> Self {
        let (scheme, host, path) = split_uri(pattern);
        let segments = path_parts(path).map(Segment::classify).collect();
        Self {
            raw: pattern.into(),
            scheme: scheme.map(Segment::classify),
            host: host.map(Segment::classify),
            segments,
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// `None` for a bare path template, which accepts any scheme.
    #[inline]
    pub fn scheme(&self) -> Option<&Segment> {
        self.scheme.as_ref()
    }

    /// `None` for a bare path template, which accepts any host.
    #[inline]
    pub fn host(&self) -> Option<&Segment> {
        self.host.as_ref()
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn specificity(&self) -> Specificity<'_> {
        Specificity::new(&self.segments)
    }

    /// Names bound by placeholders, scheme and host included.
    ///
    /// Markers embedded in a scheme or host piece, like `http{scheme}`, count too.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> + '_ {
        let embedded = self
            .scheme
            .iter()
            .chain(self.host.iter())
            .flat_map(|s| s.embedded_placeholders());
        self.all_segments()
            .filter(|s| s.kind() == SegmentKind::Placeholder)
            .filter_map(Segment::name)
            .chain(embedded)
    }

    /// Names that must be supplied by a [`PathConfig`](crate::PathConfig).
    pub fn configurables(&self) -> impl Iterator<Item = &str> + '_ {
        self.all_segments()
            .filter(|s| s.kind() == SegmentKind::Configurable)
            .filter_map(Segment::name)
    }

    /// Whether both templates accept exactly the same URIs.
    ///
    /// Placeholder names are ignored, embedded ones included; literals and
    /// configurable names must agree.
    pub fn collides_with(&self, other: &Self) -> bool {
        fn same(lhs: &Segment, rhs: &Segment, authority: bool) -> bool {
            match (lhs.kind(), rhs.kind()) {
                (SegmentKind::Placeholder, SegmentKind::Placeholder) => true,
                (SegmentKind::Literal, SegmentKind::Literal) if authority => {
                    same_authority_text(lhs.text(), rhs.text())
                }
                (l, r) => l == r && lhs.text() == rhs.text(),
            }
        }
        fn same_authority_text(mut lhs: &str, mut rhs: &str) -> bool {
            loop {
                match (split_embedded(lhs), split_embedded(rhs)) {
                    (None, None) => return lhs.eq_ignore_ascii_case(rhs),
                    (Some((lp, _, lt)), Some((rp, _, rt))) if lp.eq_ignore_ascii_case(rp) => {
                        lhs = lt;
                        rhs = rt;
                    }
                    _ => return false,
                }
            }
        }
        fn same_opt(lhs: Option<&Segment>, rhs: Option<&Segment>) -> bool {
            match (lhs, rhs) {
                (None, None) => true,
                (Some(l), Some(r)) => same(l, r, true),
                _ => false,
            }
        }

        self.segments.len() == other.segments.len()
            && same_opt(self.scheme(), other.scheme())
            && same_opt(self.host(), other.host())
            && self
                .segments
                .iter()
                .zip(other.segments.iter())
                .all(|(l, r)| same(l, r, false))
    }

    pub(crate) fn all_segments(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.scheme
            .iter()
            .chain(self.host.iter())
            .chain(self.segments.iter())
    }
}

impl PartialEq for Template {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Template {}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Template {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Template {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

/// Splits `scheme://host/path?query#fragment` into its scheme, host and path.
///
/// Query and fragment are cut off. Without `://` the whole input is a path.
pub(crate) fn split_uri(s: &str) -> (Option<&str>, Option<&str>, &str) {
    let end = s.find(&[QUERY, FRAGMENT][..]).unwrap_or(s.len());
    let s = &s[..end];

    match s.find(SCHEME_SEP) {
        None => (None, None, s),
        Some(pos) => {
            let scheme = &s[..pos];
            let rest = &s[pos + SCHEME_SEP.len()..];
            let (host, path) = match rest.find(SLASH) {
                Some(i) => (&rest[..i], &rest[i..]),
                None => (rest, ""),
            };
            (Some(scheme), Some(host), path)
        }
    }
}

#[inline]
pub(crate) fn path_parts(path: &str) -> impl Iterator<Item = &str> {
    path.split(SLASH).filter(|p| !p.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(t: &Template) -> Vec<SegmentKind> {
        t.segments().iter().map(Segment::kind).collect()
    }

    #[test]
    fn parse_full_template() {
        let t = Template::parse("scheme://host/one/{param}/<config>");
        assert_eq!(t.scheme().unwrap().text(), "scheme");
        assert_eq!(t.host().unwrap().text(), "host");
        assert_eq!(
            kinds(&t),
            [
                SegmentKind::Literal,
                SegmentKind::Placeholder,
                SegmentKind::Configurable
            ]
        );
        assert_eq!(t.placeholders().collect::<Vec<_>>(), ["param"]);
        assert_eq!(t.configurables().collect::<Vec<_>>(), ["config"]);
        assert_eq!(t.to_string(), "scheme://host/one/{param}/<config>");
    }

    #[test]
    fn parse_drops_empty_pieces() {
        let t = Template::parse("scheme://host//one///two/");
        let texts: Vec<&str> = t.segments().iter().map(Segment::text).collect();
        assert_eq!(texts, ["one", "two"]);
    }

    #[test]
    fn parse_empty_path() {
        assert!(Template::parse("scheme://host").segments().is_empty());
        assert!(Template::parse("scheme://host/").segments().is_empty());
        assert!(Template::parse("").segments().is_empty());
    }

    #[test]
    fn parse_bare_path() {
        let t = Template::parse("/users/{id}");
        assert!(t.scheme().is_none());
        assert!(t.host().is_none());
        assert_eq!(kinds(&t), [SegmentKind::Literal, SegmentKind::Placeholder]);
    }

    #[test]
    fn parse_ignores_query_and_fragment() {
        let t = Template::parse("app://airbnb/view_users?param={p}#top");
        let texts: Vec<&str> = t.segments().iter().map(Segment::text).collect();
        assert_eq!(texts, ["view_users"]);
    }

    #[test]
    fn parse_host_placeholder() {
        let t = Template::parse("https://{host}/guests");
        assert_eq!(t.host().unwrap().kind(), SegmentKind::Placeholder);
        assert_eq!(t.placeholders().collect::<Vec<_>>(), ["host"]);
    }

    #[test]
    fn parse_embedded_authority_placeholders() {
        let t = Template::parse("http{scheme}://{host_prefix}airbnb.com/guests");
        assert_eq!(t.scheme().unwrap().kind(), SegmentKind::Literal);
        assert_eq!(t.host().unwrap().kind(), SegmentKind::Literal);
        assert_eq!(
            t.placeholders().collect::<Vec<_>>(),
            ["scheme", "host_prefix"]
        );

        assert!(t.collides_with(&Template::parse("HTTP{s}://{p}airbnb.com/guests")));
        assert!(!t.collides_with(&Template::parse("http://{p}airbnb.com/guests")));
        assert!(!t.collides_with(&Template::parse("http{s}://{p}airbnb.de/guests")));
    }

    #[test]
    fn malformed_brackets_stay_literal() {
        let t: Template = "scheme://host/{open/close}/<half".parse().unwrap();
        assert!(t.segments().iter().all(Segment::is_literal));
    }

    #[test]
    fn collision() {
        let a = Template::parse("scheme://host/one/{a}/<c>");
        assert!(a.collides_with(&Template::parse("SCHEME://HOST/one/{b}/<c>")));
        assert!(!a.collides_with(&Template::parse("scheme://host/One/{b}/<c>")));
        assert!(!a.collides_with(&Template::parse("scheme://host/one/{b}/<d>")));
        assert!(!a.collides_with(&Template::parse("scheme://host/one/two/<c>")));
        assert!(!a.collides_with(&Template::parse("scheme://host/one/{b}")));
        assert!(!a.collides_with(&Template::parse("/one/{b}/<c>")));
    }
}
