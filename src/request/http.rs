use super::{MethodFilter, RouteRequest};

use ::http::{Method, Request};

impl<B> RouteRequest for Request<B> {
    fn method(&self) -> &str {
        Request::method(self).as_str()
    }

    fn pathname(&self) -> &str {
        self.uri().path()
    }
}

impl<'a> From<&'a Method> for MethodFilter<'a> {
    fn from(m: &'a Method) -> Self {
        Self::Exact(m.as_str())
    }
}
