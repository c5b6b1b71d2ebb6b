use tokio::io::{AsyncRead, AsyncReadExt};

/// Reads one logical text line from the stream.
///
/// Bytes are accumulated until a LF is seen; the LF is not included and a
/// CR is silently dropped wherever it appears. Every other byte is appended
/// as a single 8-bit character, so header text survives unmangled even when
/// it is not valid UTF-8. The read awaits quietly while no byte is
/// available; there is no line-length cap.
///
/// Returns `Ok(None)` when the stream ends before the first byte of a line.
/// A stream that ends mid-line yields `ErrorKind::UnexpectedEof`.
pub async fn read_line<R>(stream: &mut R) -> std::io::Result<Option<String>>
where
    R: AsyncRead + Unpin,
{
    let mut line = String::new();
    let mut saw_byte = false;

    loop {
        let byte = match stream.read_u8().await {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                if saw_byte {
                    return Err(e);
                }
                return Ok(None);
            }
            Err(e) => return Err(e),
        };
        saw_byte = true;

        match byte {
            b'\n' => return Ok(Some(line)),
            b'\r' => continue,
            other => line.push(other as char),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_crlf_terminated_line() {
        let mut input: &[u8] = b"GET / HTTP/1.0\r\nrest";
        let line = read_line(&mut input).await.unwrap();
        assert_eq!(line.as_deref(), Some("GET / HTTP/1.0"));
    }

    #[tokio::test]
    async fn reads_bare_lf_terminated_line() {
        let mut input: &[u8] = b"Host: example.com\n";
        let line = read_line(&mut input).await.unwrap();
        assert_eq!(line.as_deref(), Some("Host: example.com"));
    }

    #[tokio::test]
    async fn empty_line_is_empty_string() {
        let mut input: &[u8] = b"\r\n";
        let line = read_line(&mut input).await.unwrap();
        assert_eq!(line.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn eof_before_any_byte_is_none() {
        let mut input: &[u8] = b"";
        let line = read_line(&mut input).await.unwrap();
        assert_eq!(line, None);
    }

    #[tokio::test]
    async fn eof_mid_line_is_an_error() {
        let mut input: &[u8] = b"GET / HT";
        let err = read_line(&mut input).await.unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
    }

    #[tokio::test]
    async fn high_bytes_survive_as_8bit_chars() {
        let mut input: &[u8] = b"X-Raw: \xff\xfe\n";
        let line = read_line(&mut input).await.unwrap().unwrap();
        assert_eq!(line, "X-Raw: \u{ff}\u{fe}");
    }
}
