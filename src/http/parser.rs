use tokio::io::{AsyncRead, AsyncReadExt};

use crate::http::headers::Headers;
use crate::http::line::read_line;
use crate::http::request::Request;

/// Connection-fatal parse failures. No response is sent for any of these;
/// the connection is simply dropped.
#[derive(Debug)]
pub enum ParseError {
    /// Request line did not split into exactly three space-separated tokens.
    InvalidRequestLine(String),
    /// Header line without a colon.
    InvalidHeader(String),
    /// `Content-Length` that is not a non-negative integer.
    InvalidContentLength(String),
    /// Stream ended before `Content-Length` bytes of body arrived.
    BodyTruncated,
    Io(std::io::Error),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidRequestLine(line) => {
                write!(f, "invalid http request line: {line}")
            }
            ParseError::InvalidHeader(line) => write!(f, "invalid http header line: {line}"),
            ParseError::InvalidContentLength(value) => {
                write!(f, "invalid Content-Length: {value}")
            }
            ParseError::BodyTruncated => write!(f, "stream ended before declared body length"),
            ParseError::Io(e) => write!(f, "i/o error while parsing request: {e}"),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<std::io::Error> for ParseError {
    fn from(e: std::io::Error) -> Self {
        ParseError::Io(e)
    }
}

/// Parses one HTTP request from the stream.
///
/// Reads the request line, the header section up to the blank line (or end
/// of stream), and, when a `Content-Length` header is present, exactly that
/// many body bytes. The method token is upper-cased; the request-target and
/// protocol version are kept verbatim and not validated further.
pub async fn read_request<R>(stream: &mut R) -> Result<Request, ParseError>
where
    R: AsyncRead + Unpin,
{
    // Request line
    let line = read_line(stream)
        .await?
        .ok_or_else(|| ParseError::InvalidRequestLine(String::new()))?;

    let tokens: Vec<&str> = line.split(' ').collect();
    if tokens.len() != 3 {
        return Err(ParseError::InvalidRequestLine(line.clone()));
    }
    let method = tokens[0].to_uppercase();
    let url = tokens[1].to_string();
    let version = tokens[2].to_string();

    // Headers, until the blank line or the stream ends
    let mut headers = Headers::new();
    while let Some(line) = read_line(stream).await? {
        if line.is_empty() {
            break;
        }

        let separator = line
            .find(':')
            .ok_or_else(|| ParseError::InvalidHeader(line.clone()))?;
        let name = &line[..separator];
        let value = line[separator + 1..].trim_start_matches(' ');

        // duplicate names: first occurrence wins
        headers.insert(name, value);
    }

    // Body, governed solely by Content-Length
    let mut body = Vec::new();
    if let Some(value) = headers.get("Content-Length") {
        let total: usize = value
            .parse()
            .map_err(|_| ParseError::InvalidContentLength(value.to_string()))?;

        if total > 0 {
            body = vec![0u8; total];
            stream.read_exact(&mut body).await.map_err(|e| {
                if e.kind() == std::io::ErrorKind::UnexpectedEof {
                    ParseError::BodyTruncated
                } else {
                    ParseError::Io(e)
                }
            })?;
        }
    }

    Ok(Request {
        method,
        url,
        version,
        headers,
        body,
    })
}
