use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncWrite};
use tracing::info;

use crate::http::parser::read_request;
use crate::http::writer::ResponseWriter;
use crate::router::Router;

/// Serves exactly one request on an accepted connection: parse, dispatch,
/// write, done. There is no keep-alive loop; the stream is closed when the
/// connection is dropped, whether the request succeeded or not.
pub struct Connection<S> {
    stream: S,
    router: Arc<Router>,
    read_timeout: Option<Duration>,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, router: Arc<Router>, read_timeout: Option<Duration>) -> Self {
        Self {
            stream,
            router,
            read_timeout,
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        // A parse failure (or deadline expiry) propagates here before any
        // response byte is written: the client sees only the close.
        let request = match self.read_timeout {
            Some(limit) => tokio::time::timeout(limit, read_request(&mut self.stream))
                .await
                .map_err(|_| anyhow::anyhow!("timed out reading request"))??,
            None => read_request(&mut self.stream).await?,
        };

        let mut response = self.router.dispatch(&request);

        info!("{} {}", response.status, request.url);

        // Built-in error responses may arrive bodyless; give the client a
        // summary rather than an empty page.
        if response.body.is_none() && response.status != "200" {
            response.set_text(format!(
                "{} {} <p> {}",
                response.status, request.url, response.reason
            ));
        }

        let mut writer = ResponseWriter::new(&mut response);
        writer.write_to_stream(&mut self.stream).await?;

        Ok(())
    }
}
