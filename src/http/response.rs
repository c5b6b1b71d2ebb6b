use crate::http::headers::Headers;

/// An HTTP response under construction.
///
/// `status` and `reason` are free-form tokens so handlers can emit any
/// status line. `body` distinguishes "no body set" (`None`) from an
/// explicitly empty body: the connection handler synthesizes a summary body
/// for non-200 responses that left it unset, and the serializer substitutes
/// an empty byte sequence otherwise.
#[derive(Debug, Clone)]
pub struct Response {
    /// Status code token (e.g. "200")
    pub status: String,
    /// Reason phrase (e.g. "OK")
    pub reason: String,
    /// Response headers; the serializer injects defaults in place
    pub headers: Headers,
    /// Response body, if one was set
    pub body: Option<Vec<u8>>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```ignore
/// let response = ResponseBuilder::new("200", "OK")
///     .header("Content-Type", "application/json")
///     .body(b"{}".to_vec())
///     .build();
/// ```
pub struct ResponseBuilder {
    status: String,
    reason: String,
    headers: Headers,
    body: Option<Vec<u8>>,
}

impl ResponseBuilder {
    pub fn new(status: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            reason: reason.into(),
            headers: Headers::new(),
            body: None,
        }
    }

    /// Adds or replaces a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.set(name, value);
        self
    }

    /// Sets the response body from raw bytes.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets the response body from UTF-8 text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.body = Some(text.into().into_bytes());
        self
    }

    pub fn build(self) -> Response {
        Response {
            status: self.status,
            reason: self.reason,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    /// Creates a 200 OK response with the given body.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        ResponseBuilder::new("200", "OK").body(body.into()).build()
    }

    /// Creates a 405 response. No body and no `Allow` header; the
    /// connection handler fills in a summary body before sending.
    pub fn method_not_allowed() -> Self {
        ResponseBuilder::new("405", "Method Not Allowed").build()
    }

    /// Sets the body from UTF-8 text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.body = Some(text.into().into_bytes());
    }
}
