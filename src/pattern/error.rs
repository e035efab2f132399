#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("invalid route pattern {pattern:?}: {source}")]
    Regex {
        pattern: Box<str>,
        #[source]
        source: regex::Error,
    },
}

impl CompileError {
    pub(super) fn regex(pattern: &str, source: regex::Error) -> Self {
        Self::Regex {
            pattern: pattern.into(),
            source,
        }
    }
}
