use outpost::http::request::RequestBuilder;

#[test]
fn test_request_header_retrieval() {
    let req = RequestBuilder::new()
        .url("/")
        .header("Host", "example.com")
        .header("Content-Type", "application/json")
        .build()
        .unwrap();

    assert_eq!(req.header("Host"), Some("example.com"));
    assert_eq!(req.header("Content-Type"), Some("application/json"));
    assert_eq!(req.header("Missing"), None);
}

#[test]
fn test_request_builder_uppercases_method() {
    let req = RequestBuilder::new()
        .method("post")
        .url("/api")
        .build()
        .unwrap();

    assert_eq!(req.method, "POST");
}

#[test]
fn test_request_builder_requires_url() {
    let result = RequestBuilder::new().method("GET").build();
    assert!(result.is_err());
}

#[test]
fn test_request_builder_default_version() {
    let req = RequestBuilder::new().url("/").build().unwrap();
    assert_eq!(req.version, "HTTP/1.0");
}

#[test]
fn test_request_content_length_parsing() {
    let req = RequestBuilder::new()
        .method("POST")
        .url("/api")
        .header("Content-Length", "42")
        .build()
        .unwrap();

    assert_eq!(req.content_length(), 42);
}

#[test]
fn test_request_content_length_missing() {
    let req = RequestBuilder::new().url("/").build().unwrap();
    assert_eq!(req.content_length(), 0);
}

#[test]
fn test_request_content_length_invalid() {
    let req = RequestBuilder::new()
        .method("POST")
        .url("/api")
        .header("Content-Length", "not-a-number")
        .build()
        .unwrap();

    assert_eq!(req.content_length(), 0);
}
