//! Route table and request dispatch.
//!
//! Routes bind a URL regex and a method token to a handler. The table is
//! populated before the listener starts and only read afterwards, so it is
//! shared across connection tasks as a plain `Arc<Router>` with no locking.

use std::sync::Arc;

use regex::Regex;
use tracing::error;

use crate::http::pages::{self, BuiltinPages, PageProvider};
use crate::http::request::Request;
use crate::http::response::Response;

/// A route handler. Failure is converted into the built-in 500 response by
/// the router; it never reaches the client or aborts the connection.
pub type Handler = Arc<dyn Fn(&RoutedRequest) -> anyhow::Result<Response> + Send + Sync>;

/// Override for the no-pattern-match case, replacing the built-in 404.
pub type NotFoundHandler = Arc<dyn Fn(&Request) -> Response + Send + Sync>;

/// An immutable (pattern, method, handler) registration.
pub struct Route {
    pattern: Regex,
    method: String,
    handler: Handler,
}

impl Route {
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn method(&self) -> &str {
        &self.method
    }
}

/// A parsed request plus what routing derived from it: the extracted path
/// and the route that matched. Handlers receive this instead of a mutated
/// `Request`.
pub struct RoutedRequest<'a> {
    pub request: &'a Request,
    /// First capture group of the matched pattern, or the full URL when the
    /// pattern defines no group
    pub path: String,
    pub route: &'a Route,
}

pub struct Router {
    routes: Vec<Route>,
    not_found: Option<NotFoundHandler>,
    pages: Box<dyn PageProvider>,
}

impl Router {
    pub fn new() -> Self {
        Self::with_pages(Box::new(BuiltinPages))
    }

    /// A router whose built-in 404/500 bodies come from the given provider.
    pub fn with_pages(pages: Box<dyn PageProvider>) -> Self {
        Self {
            routes: Vec::new(),
            not_found: None,
            pages,
        }
    }

    /// Registers a route. The pattern is compiled here, once; a pattern that
    /// does not compile or a (pattern, method) pair that was already
    /// registered is a configuration error.
    pub fn route<F>(&mut self, pattern: &str, method: &str, handler: F) -> anyhow::Result<()>
    where
        F: Fn(&RoutedRequest) -> anyhow::Result<Response> + Send + Sync + 'static,
    {
        if self
            .routes
            .iter()
            .any(|r| r.pattern.as_str() == pattern && r.method == method)
        {
            anyhow::bail!("duplicate route registration: {method} {pattern}");
        }

        let compiled = Regex::new(pattern)?;
        self.routes.push(Route {
            pattern: compiled,
            method: method.to_string(),
            handler: Arc::new(handler),
        });
        Ok(())
    }

    /// Installs the not-found override invoked when no pattern matches.
    pub fn not_found<F>(&mut self, handler: F)
    where
        F: Fn(&Request) -> Response + Send + Sync + 'static,
    {
        self.not_found = Some(Arc::new(handler));
    }

    /// Selects and invokes exactly one handler for the request.
    ///
    /// The whole table is scanned in registration order on every call: the
    /// first route whose pattern matches the URL and whose method equals the
    /// request method wins. No pattern match yields the not-found override
    /// or the built-in 404; a pattern match without a method match yields a
    /// bare 405. Always returns a well-formed response.
    pub fn dispatch(&self, request: &Request) -> Response {
        let matching: Vec<&Route> = self
            .routes
            .iter()
            .filter(|r| r.pattern.is_match(&request.url))
            .collect();

        if matching.is_empty() {
            return match &self.not_found {
                Some(handler) => handler(request),
                None => pages::not_found(self.pages.as_ref()),
            };
        }

        let Some(route) = matching.into_iter().find(|r| r.method == request.method) else {
            return Response::method_not_allowed();
        };

        let path = route
            .pattern
            .captures(&request.url)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| request.url.clone());

        let routed = RoutedRequest {
            request,
            path,
            route,
        };

        match (route.handler)(&routed) {
            Ok(response) => response,
            Err(e) => {
                error!("handler error for {} {}: {e:#}", request.method, request.url);
                pages::internal_error(self.pages.as_ref())
            }
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
