use super::Segments;

use std::ops::Index;
use std::str::FromStr;
use std::sync::Arc;

use smallvec::SmallVec;

/// Captures of a successful match.
///
/// Index `0` holds the whole match and index `i + 1` the `i`-th segment, so
/// positional and named access read the same capture list.
#[derive(Debug, Clone)]
pub struct Params<'p> {
    buf: SmallVec<[Option<&'p str>; 8]>,
    segments: Arc<Segments>,
}

impl<'p> Params<'p> {
    pub fn get(&self, index: usize) -> Option<&'p str> {
        self.buf.get(index).copied().flatten()
    }

    pub fn name(&self, name: &str) -> Option<&'p str> {
        self.get(self.segments.group(name)?)
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.name(name).map(T::from_str)
    }

    /// Number of capture slots, whole match included.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// `(name, value)` pairs in segment order, duplicates included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &'p str)> + '_ {
        self.segments
            .iter()
            .enumerate()
            .filter_map(move |(i, name)| Some((name, self.get(i + 1)?)))
    }

    pub fn segments(&self) -> &Segments {
        &self.segments
    }
}

impl<'p> Params<'p> {
    pub(super) fn new(caps: &regex::Captures<'p>, segments: Arc<Segments>) -> Self {
        let buf = caps.iter().map(|m| m.map(|m| m.as_str())).collect();
        Self { buf, segments }
    }
}

impl Index<usize> for Params<'_> {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        match self.get(index) {
            Some(s) => s,
            None => panic!("no capture at index {}", index),
        }
    }
}

impl Index<&str> for Params<'_> {
    type Output = str;

    fn index(&self, name: &str) -> &str {
        match self.name(name) {
            Some(s) => s,
            None => panic!("no capture named {:?}", name),
        }
    }
}
