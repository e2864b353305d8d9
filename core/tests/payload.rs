//! Structural checks on the literal multipart payload.
//!
//! The body is never produced by an encoder, so these tests take it apart the
//! way a receiving server would and check what comes out.

use serde::Deserialize;
use slide_core::{SlideClient, CONTENT_TYPE, LESSON_ID};

#[derive(Debug, Deserialize, PartialEq, Eq)]
struct SlideCreateRequest {
    #[serde(rename = "type")]
    kind: String,
}

fn boundary() -> &'static str {
    CONTENT_TYPE
        .strip_prefix("multipart/form-data; boundary=")
        .expect("content type carries a boundary")
}

/// Split the body into (part headers, part content) pairs.
fn parts(body: &str) -> Vec<(Vec<&str>, &str)> {
    let delimiter = format!("--{}", boundary());
    let closing = format!("{delimiter}--");
    assert!(body.ends_with(&closing), "body must end with the closing delimiter");

    body[..body.len() - closing.len()]
        .split(delimiter.as_str())
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| {
            let chunk = chunk.strip_prefix('\n').expect("delimiter is followed by a newline");
            let (head, content) = chunk.split_once("\n\n").expect("blank line after part headers");
            (head.lines().collect(), content.strip_suffix('\n').unwrap_or(content))
        })
        .collect()
}

#[test]
fn body_has_exactly_one_slide_part() {
    let req = SlideClient::default().build_create_slide(LESSON_ID, "tok");
    let body = std::str::from_utf8(&req.body).unwrap();

    let parts = parts(body);
    assert_eq!(parts.len(), 1);

    let (headers, content) = &parts[0];
    assert_eq!(headers, &vec![r#"Content-Disposition: form-data; name="slide""#]);

    let slide: SlideCreateRequest = serde_json::from_str(content).unwrap();
    assert_eq!(
        slide,
        SlideCreateRequest {
            kind: "document".to_string()
        }
    );
}

#[test]
fn slide_value_is_compact_json() {
    let req = SlideClient::default().build_create_slide(LESSON_ID, "tok");
    let body = std::str::from_utf8(&req.body).unwrap();
    let (_, content) = parts(body).remove(0);

    let value: serde_json::Value = serde_json::from_str(content).unwrap();
    assert_eq!(serde_json::to_string(&value).unwrap(), content);
    assert_eq!(content, r#"{"type":"document"}"#);
}

#[test]
fn body_does_not_depend_on_token_or_lesson() {
    let client = SlideClient::new("http://127.0.0.1:9/api");
    let a = client.build_create_slide(1, "first");
    let b = client.build_create_slide(2, "second");
    assert_eq!(a.body, b.body);
    assert_ne!(a.url, b.url);
}
