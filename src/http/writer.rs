use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.0";

/// Renders a response into HTTP/1.0 wire bytes.
///
/// Mutates the response in place before reading it: an unset body becomes an
/// empty byte sequence, `Content-Type` defaults to `text/html`, and
/// `Content-Length` is always recomputed from the actual body length — a
/// caller-supplied value is overwritten, never trusted. A response therefore
/// must not be reused across two serializations expecting untouched headers.
pub fn serialize_response(resp: &mut Response) -> Vec<u8> {
    if resp.body.is_none() {
        resp.body = Some(Vec::new());
    }
    let body_len = resp.body.as_ref().map(|b| b.len()).unwrap_or(0);

    if !resp.headers.contains("Content-Type") {
        resp.headers.set("Content-Type", "text/html");
    }
    resp.headers.set("Content-Length", body_len.to_string());

    let mut buf = Vec::new();

    // Status line
    let status_line = format!("{} {} {}\r\n", HTTP_VERSION, resp.status, resp.reason);
    buf.extend_from_slice(status_line.as_bytes());

    // Headers
    for (name, value) in resp.headers.iter() {
        buf.extend_from_slice(name.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(value.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    // Body, no trailing terminator
    if let Some(body) = &resp.body {
        buf.extend_from_slice(body);
    }

    buf
}

pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &mut Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        stream.flush().await?;
        Ok(())
    }
}
