#[cfg(feature = "http")]
mod http;

use crate::cache::PatternCache;
use crate::pattern::{CompileError, Params, Pattern};

use std::ops::Deref;

use tracing::trace;

/// The parts of a request a route pattern is matched against.
pub trait RouteRequest {
    fn method(&self) -> &str;
    fn pathname(&self) -> &str;
}

/// Which request methods a route accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodFilter<'a> {
    Any,
    Exact(&'a str),
}

impl MethodFilter<'_> {
    pub const ALL: &'static str = "ALL";

    pub fn accepts(&self, method: &str) -> bool {
        match *self {
            Self::Any => true,
            Self::Exact(m) => m == method,
        }
    }
}

/// `"ALL"` accepts every method, anything else is compared exactly.
impl<'a> From<&'a str> for MethodFilter<'a> {
    fn from(s: &'a str) -> Self {
        if s == Self::ALL {
            Self::Any
        } else {
            Self::Exact(s)
        }
    }
}

/// A request that matched a route, with its captured params.
///
/// Derefs to the original request, which is borrowed and left untouched.
#[derive(Debug)]
pub struct MatchedRequest<'r, R: ?Sized> {
    req: &'r R,
    params: Params<'r>,
}

impl<'r, R: ?Sized> MatchedRequest<'r, R> {
    pub fn params(&self) -> &Params<'r> {
        &self.params
    }

    pub fn request(&self) -> &'r R {
        self.req
    }

    pub fn into_params(self) -> Params<'r> {
        self.params
    }
}

impl<R: ?Sized> Deref for MatchedRequest<'_, R> {
    type Target = R;
    fn deref(&self) -> &R {
        self.req
    }
}

impl PatternCache {
    /// Matches `req` against `pattern` if `method` accepts the request method.
    ///
    /// The pattern is neither compiled nor looked up when the method is rejected.
    pub fn match_route<'r, 'a, R>(
        &self,
        req: &'r R,
        method: impl Into<MethodFilter<'a>>,
        pattern: impl Into<Pattern<'a>>,
    ) -> Result<Option<MatchedRequest<'r, R>>, CompileError>
    where
        R: RouteRequest + ?Sized,
    {
        let method = method.into();
        if !method.accepts(req.method()) {
            trace!(method = req.method(), filter = ?method, "method rejected");
            return Ok(None);
        }

        let matcher = self.get_or_compile(pattern)?;
        let params = match matcher.find(req.pathname()) {
            Some(p) => p,
            None => return Ok(None),
        };
        Ok(Some(MatchedRequest { req, params }))
    }
}

/// [`PatternCache::match_route`] on the process-wide cache.
pub fn match_route<'r, 'a, R>(
    req: &'r R,
    method: impl Into<MethodFilter<'a>>,
    pattern: impl Into<Pattern<'a>>,
) -> Result<Option<MatchedRequest<'r, R>>, CompileError>
where
    R: RouteRequest + ?Sized,
{
    PatternCache::global().match_route(req, method, pattern)
}
