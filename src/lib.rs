//! Route pattern compilation and request matching.
//!
//! ```
//! use route_matcher::compile;
//!
//! let matcher = compile("/users/{id}/posts/{postId}").unwrap();
//! let params = matcher.find("/users/42/posts/7").unwrap();
//! assert_eq!(params.name("id"), Some("42"));
//! assert_eq!(&params[2], "7");
//! ```

#![deny(unsafe_code)]

mod cache;
mod pattern;
mod request;

pub use self::cache::PatternCache;
pub use self::pattern::{compile, CompileError, Matcher, Params, Pattern, Segments};
pub use self::request::{match_route, MatchedRequest, MethodFilter, RouteRequest};

pub use regex::Regex;
