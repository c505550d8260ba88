use std::ops::Deref;
use std::str::FromStr;

use smallvec::SmallVec;

/// Placeholder bindings: `(name, value)` pairs in template order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captures<'t, 'u> {
    buf: SmallVec<[(&'t str, &'u str); 8]>,
}

impl<'t, 'u> Captures<'t, 'u> {
    pub fn get(&self, name: &str) -> Option<&'u str> {
        self.buf
            .iter()
            .find_map(|&(k, v)| if name == k { Some(v) } else { None })
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }
}

impl<'t, 'u> Deref for Captures<'t, 'u> {
    type Target = [(&'t str, &'u str)];
    fn deref(&self) -> &Self::Target {
        &*self.buf
    }
}

impl<'t, 'u> Captures<'t, 'u> {
    pub(super) fn new() -> Self {
        Self {
            buf: SmallVec::new(),
        }
    }

    pub(super) fn push(&mut self, name: &'t str, value: &'u str) {
        self.buf.push((name, value))
    }

    pub(super) fn truncate(&mut self, len: usize) {
        self.buf.truncate(len)
    }
}
