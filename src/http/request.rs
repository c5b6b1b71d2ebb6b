use crate::http::headers::Headers;

/// A parsed HTTP request.
///
/// Produced once per connection by the parser and immutable afterwards.
/// Routing does not mutate it; the router wraps it in a
/// [`RoutedRequest`](crate::router::RoutedRequest) instead.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method token, upper-cased (e.g. "GET")
    pub method: String,
    /// The raw request-target exactly as sent (e.g. "/search?q=rust")
    pub url: String,
    /// Protocol version token, parsed but not enforced (e.g. "HTTP/1.0")
    pub version: String,
    /// Request headers, insertion-ordered, first occurrence wins
    pub headers: Headers,
    /// Request body; empty when no `Content-Length` was sent
    pub body: Vec<u8>,
}

/// Builder for constructing Request objects, mainly for tests and handlers
/// that need a synthetic request.
pub struct RequestBuilder {
    method: String,
    url: Option<String>,
    version: String,
    headers: Headers,
    body: Vec<u8>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: "GET".to_string(),
            url: None,
            version: "HTTP/1.0".to_string(),
            headers: Headers::new(),
            body: Vec::new(),
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into().to_uppercase();
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    pub fn build(self) -> Result<Request, &'static str> {
        Ok(Request {
            method: self.method,
            url: self.url.ok_or("url missing")?,
            version: self.version,
            headers: self.headers,
            body: self.body,
        })
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Request {
    /// Retrieves a header value by its exact name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// The declared `Content-Length`, or 0 when absent or unparseable.
    pub fn content_length(&self) -> usize {
        self.header("Content-Length")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }
}
