use crate::http::response::{Response, ResponseBuilder};

/// Source of HTML bodies for the built-in error responses, keyed by a
/// logical resource name. Injected into the router so tests and embedders
/// can swap the pages out.
pub trait PageProvider: Send + Sync {
    fn load(&self, name: &str) -> Option<String>;
}

/// Pages compiled into the binary.
pub struct BuiltinPages;

impl PageProvider for BuiltinPages {
    fn load(&self, name: &str) -> Option<String> {
        match name {
            "pages/404.html" => Some(include_str!("../../resources/pages/404.html").to_string()),
            "pages/500.html" => Some(include_str!("../../resources/pages/500.html").to_string()),
            _ => None,
        }
    }
}

/// The default 404 response. Body comes from the provider; when the
/// provider has no page the body stays unset and the connection handler
/// synthesizes a summary instead.
pub fn not_found(pages: &dyn PageProvider) -> Response {
    let mut builder = ResponseBuilder::new("404", "NotFound");
    if let Some(content) = pages.load("pages/404.html") {
        builder = builder.text(content);
    }
    builder.build()
}

/// The default 500 response.
pub fn internal_error(pages: &dyn PageProvider) -> Response {
    let mut builder = ResponseBuilder::new("500", "InternalServerError");
    if let Some(content) = pages.load("pages/500.html") {
        builder = builder.text(content);
    }
    builder.build()
}
