mod compiler;
mod error;
mod params;

pub use self::error::CompileError;
pub use self::params::Params;

use std::collections::HashMap;
use std::sync::Arc;

use regex::Regex;

/// A route pattern: either a path template or a pre-built expression.
///
/// Path templates recognize `{name}` segments (one path component, without
/// `.`, `/`, `?` or `#`) and `*` wildcards captured as `splat`. Everything
/// else is matched literally against the whole path.
#[derive(Debug, Clone, Copy)]
pub enum Pattern<'a> {
    Path(&'a str),
    Regex(&'a Arc<Regex>),
}

impl<'a> From<&'a str> for Pattern<'a> {
    fn from(s: &'a str) -> Self {
        Self::Path(s)
    }
}

impl<'a> From<&'a String> for Pattern<'a> {
    fn from(s: &'a String) -> Self {
        Self::Path(s)
    }
}

impl<'a> From<&'a Arc<Regex>> for Pattern<'a> {
    fn from(r: &'a Arc<Regex>) -> Self {
        Self::Regex(r)
    }
}

/// Segment names of a pattern, in order of appearance.
#[derive(Debug, Default)]
pub struct Segments {
    names: Vec<Box<str>>,
    groups: HashMap<Box<str>, usize>,
}

impl Segments {
    fn new(names: Vec<Box<str>>) -> Self {
        // a repeated name maps to its last occurrence
        let groups = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i + 1))
            .collect();
        Self { names, groups }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(|s| &**s)
    }

    /// Capture group backing the segment `name`.
    pub fn group(&self, name: &str) -> Option<usize> {
        self.groups.get(name).copied()
    }
}

#[derive(Debug, Clone)]
pub struct Matcher {
    regex: Arc<Regex>,
    segments: Arc<Segments>,
}

impl Matcher {
    pub fn find<'p>(&self, pathname: &'p str) -> Option<Params<'p>> {
        let caps = self.regex.captures(pathname)?;
        Some(Params::new(&caps, Arc::clone(&self.segments)))
    }

    pub fn is_match(&self, pathname: &str) -> bool {
        self.regex.is_match(pathname)
    }

    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }

    pub fn segments(&self) -> &Segments {
        &self.segments
    }
}

pub fn compile<'a>(pattern: impl Into<Pattern<'a>>) -> Result<Matcher, CompileError> {
    match pattern.into() {
        Pattern::Path(path) => {
            let (regex, segments) = compiler::compile_path(path)?;
            Ok(Matcher {
                regex: Arc::new(regex),
                segments: Arc::new(segments),
            })
        }
        Pattern::Regex(regex) => Ok(Matcher {
            regex: Arc::clone(regex),
            segments: Arc::new(Segments::default()),
        }),
    }
}
