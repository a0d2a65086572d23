//! Request URL composition

use std::fmt::{self, Display, Write};

/// A query parameter value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum QueryValue<'a> {
    /// Percent-encoded before embedding
    Text(&'a str),
    /// Embedded as bare decimal digits
    Int(i64),
}

impl Display for QueryValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Text(text) => f.write_str(&urlencoding::encode(text)),
            QueryValue::Int(value) => write!(f, "{}", value),
        }
    }
}

/// A fully composed request URL
///
/// Built as `base + path + positional + query`. Nothing is inserted between
/// the parts: a path such as `"nodes/"` carries its own separator, and a path
/// followed by a query block must end in `?` (e.g. `"champs/?"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Route {
    url: String,
}

impl Route {
    /// Start a route at `base` (expected to end in `/`) followed by `path`
    pub fn new(base: &str, path: &str) -> Self {
        let mut url = String::with_capacity(base.len() + path.len() + 32);
        url.push_str(base);
        url.push_str(path);
        Self { url }
    }

    /// Append a positional path parameter
    pub fn positional(mut self, param: impl Display) -> Self {
        // Writing to a String cannot fail
        let _ = write!(self.url, "{}", param);
        self
    }

    /// Append `key=value` pairs joined by `&`
    pub fn query(mut self, params: &[(&str, QueryValue<'_>)]) -> Self {
        for (i, (key, value)) in params.iter().enumerate() {
            if i > 0 {
                self.url.push('&');
            }
            let _ = write!(self.url, "{}={}", key, value);
        }
        self
    }

    /// The composed URL
    pub fn url(&self) -> &str {
        &self.url
    }
}
