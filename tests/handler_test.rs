use winepref_page::{respond, HttpRequest};

#[test]
fn test_empty_get_returns_200_with_heading() {
    let request = HttpRequest {
        http_method: Some("GET".to_string()),
        path: Some("/".to_string()),
        ..Default::default()
    };

    let response = respond(&request);

    assert_eq!(response.status_code, 200);
    assert!(response.body.contains("<h1>Wine Preference App</h1>"));
}

#[test]
fn test_content_type_is_exactly_text_html() {
    let response = respond(&HttpRequest::default());

    assert_eq!(
        response.headers.get("Content-Type"),
        Some(&"text/html".to_string())
    );
    assert_eq!(response.headers.len(), 1);
}

#[test]
fn test_post_with_json_body_gets_identical_response() {
    let get = respond(&HttpRequest {
        http_method: Some("GET".to_string()),
        ..Default::default()
    });
    let post = respond(&HttpRequest {
        http_method: Some("POST".to_string()),
        path: Some("/api/preferences".to_string()),
        body: Some(r#"{"wine": "merlot", "rating": 5}"#.to_string()),
        ..Default::default()
    });

    assert_eq!(get, post);
}

#[test]
fn test_repeated_invocations_are_byte_identical() {
    let first = respond(&HttpRequest::default());
    let second = respond(&HttpRequest::default());

    assert_eq!(first.body.as_bytes(), second.body.as_bytes());
    assert_eq!(first, second);
}

#[test]
fn test_body_mentions_every_hosting_alternative() {
    let body = respond(&HttpRequest::default()).body;

    for expected in ["Wine Preference App", "Render", "PythonAnywhere", "Heroku"] {
        assert!(body.contains(expected), "missing substring: {}", expected);
    }
}

#[test]
fn test_request_headers_do_not_influence_response() {
    let mut headers = std::collections::HashMap::new();
    headers.insert("Accept".to_string(), "application/json".to_string());
    headers.insert("X-Forwarded-For".to_string(), "10.0.0.7".to_string());

    let with_headers = respond(&HttpRequest {
        headers: Some(headers),
        ..Default::default()
    });
    let without_headers = respond(&HttpRequest::default());

    assert_eq!(with_headers, without_headers);
}
