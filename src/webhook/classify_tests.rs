//! Tests for response classification.

use std::time::{Duration, SystemTime};

use super::{BodyClass, ErrorKind, ExchangeError, HttpResponse, classify_response};
use crate::media::MessageKind;
use crate::message::ResponseItem;

/// 2024-03-05T06:07:08Z
fn now() -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(1_709_618_828)
}

fn response(
    status: u16,
    headers: &[(&'static str, &'static str)],
    body: impl Into<Vec<u8>>,
) -> HttpResponse {
    let mut map = http::HeaderMap::new();
    for (name, value) in headers {
        map.insert(*name, http::HeaderValue::from_static(*value));
    }
    HttpResponse::new(http::StatusCode::from_u16(status).unwrap(), map, body.into())
}

fn json(body: &str) -> HttpResponse {
    response(200, &[("content-type", "application/json")], body.to_string())
}

fn classify(resp: &HttpResponse) -> Result<Vec<ResponseItem>, ExchangeError> {
    classify_response(resp, now())
}

mod body_class {
    use super::*;

    #[test]
    fn json_types() {
        assert_eq!(BodyClass::of("application/json"), BodyClass::Json);
        assert_eq!(BodyClass::of("application/ld+json"), BodyClass::Json);
    }

    #[test]
    fn text_types() {
        assert_eq!(BodyClass::of("text/plain"), BodyClass::Text);
        assert_eq!(BodyClass::of("text/markdown"), BodyClass::Text);
    }

    #[test]
    fn everything_else_is_binary() {
        for essence in ["application/pdf", "image/png", "", "application/xml"] {
            assert_eq!(BodyClass::of(essence), BodyClass::Binary, "Failed for: {essence:?}");
        }
    }
}

mod status {
    use super::*;

    #[test]
    fn server_error_includes_status_reason_and_body() {
        let resp = response(500, &[("content-type", "text/plain")], "boom");

        let err = classify(&resp).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Http);
        let message = err.to_string();
        assert!(message.contains("500"), "message: {message}");
        assert!(message.contains("Internal Server Error"), "message: {message}");
        assert!(message.contains("boom"), "message: {message}");
    }

    #[test]
    fn empty_error_body_is_omitted() {
        let resp = response(404, &[], Vec::new());

        let err = classify(&resp).unwrap_err();

        assert_eq!(err.to_string(), "HTTP error 404 Not Found");
    }

    #[test]
    fn nonstandard_status_has_no_reason_phrase() {
        let resp = response(599, &[], "gateway hiccup");

        let err = classify(&resp).unwrap_err();

        assert_eq!(err.to_string(), "HTTP error 599: gateway hiccup");
    }

    #[test]
    fn non_2xx_fails_even_with_valid_json() {
        let resp = response(401, &[("content-type", "application/json")], r#"{"text":"hi"}"#);

        assert!(matches!(
            classify(&resp),
            Err(ExchangeError::Http { status, .. }) if status == http::StatusCode::UNAUTHORIZED
        ));
    }
}

mod json_shapes {
    use super::*;

    #[test]
    fn text_object_yields_single_text_item() {
        let items = classify(&json(r#"{"text":"hello **world**"}"#)).unwrap();

        assert_eq!(items, vec![ResponseItem::text("hello **world**")]);
    }

    #[test]
    fn responses_array_is_returned_in_order() {
        let body = r#"{"responses":[{"type":"text","content":"a"},{"type":"image","content":"QUJD","mimeType":"image/png"}]}"#;

        let items = classify(&json(body)).unwrap();

        assert_eq!(
            items,
            vec![
                ResponseItem::text("a"),
                ResponseItem::media(MessageKind::Image, "QUJD").with_mime_type("image/png"),
            ]
        );
    }

    #[test]
    fn bare_array_is_returned_in_order() {
        let body = r#"[{"type":"audio","content":"AAA=","fileName":"a.mp3"},{"type":"text","content":"b"}]"#;

        let items = classify(&json(body)).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].kind, MessageKind::Audio);
        assert_eq!(items[0].file_name.as_deref(), Some("a.mp3"));
        assert_eq!(items[1], ResponseItem::text("b"));
    }

    #[test]
    fn responses_takes_precedence_over_text() {
        let body = r#"{"text":"ignored","responses":[{"type":"text","content":"used"}]}"#;

        let items = classify(&json(body)).unwrap();

        assert_eq!(items, vec![ResponseItem::text("used")]);
    }

    #[test]
    fn non_array_responses_falls_back_to_text() {
        let items = classify(&json(r#"{"responses":"nope","text":"fallback"}"#)).unwrap();

        assert_eq!(items, vec![ResponseItem::text("fallback")]);
    }

    #[test]
    fn empty_responses_array_is_empty_reply() {
        assert!(classify(&json(r#"{"responses":[]}"#)).unwrap().is_empty());
        assert!(classify(&json("[]")).unwrap().is_empty());
    }

    #[test]
    fn unrecognized_object_is_malformed() {
        let err = classify(&json(r#"{"foo":1}"#)).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
        assert!(err.to_string().contains("'text'"));
        assert!(err.to_string().contains("'responses'"));
    }

    #[test]
    fn non_string_text_is_malformed() {
        let err = classify(&json(r#"{"text":42}"#)).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
    }

    #[test]
    fn json_scalars_are_malformed() {
        for body in ["42", "true", "null", r#""quoted""#] {
            let err = classify(&json(body)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedResponse, "Failed for: {body}");
        }
    }

    #[test]
    fn item_kind_ignores_case() {
        let body = r#"{"responses":[{"type":"text","content":"ok"},{"type":"Image","content":"QUJD"}]}"#;

        let items = classify(&json(body)).unwrap();

        assert_eq!(
            items,
            vec![
                ResponseItem::text("ok"),
                ResponseItem::media(MessageKind::Image, "QUJD"),
            ]
        );
    }

    #[test]
    fn item_without_content_keeps_its_siblings() {
        let body = r#"[{"type":"text","content":"ok"},{"type":"text"}]"#;

        let items = classify(&json(body)).unwrap();

        assert_eq!(items, vec![ResponseItem::text("ok"), ResponseItem::text("")]);
    }

    #[test]
    fn unknown_or_missing_item_kind_is_file() {
        let body = r#"[{"type":"sticker","content":"QUJD","mimeType":"image/webp"},{"content":"QUJD"}]"#;

        let items = classify(&json(body)).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].kind, MessageKind::File);
        assert_eq!(items[0].mime_type.as_deref(), Some("image/webp"));
        assert_eq!(items[1].kind, MessageKind::File);
    }

    #[test]
    fn string_elements_become_text_and_scalars_are_skipped() {
        let body = r#"["hi", 42, null, {"type":"text","content":"there"}]"#;

        let items = classify(&json(body)).unwrap();

        assert_eq!(items, vec![ResponseItem::text("hi"), ResponseItem::text("there")]);
    }

    #[test]
    fn json_in_text_content_type_is_parsed() {
        let resp = response(200, &[("content-type", "text/plain")], r#"{"text":"hi"}"#);

        assert_eq!(classify(&resp).unwrap(), vec![ResponseItem::text("hi")]);
    }

    #[test]
    fn content_type_parameters_are_ignored() {
        let resp = response(
            200,
            &[("content-type", "Application/JSON; charset=utf-8")],
            r#"{"text":"hi"}"#,
        );

        assert_eq!(classify(&resp).unwrap(), vec![ResponseItem::text("hi")]);
    }
}

mod plain_text {
    use super::*;

    #[test]
    fn non_json_text_becomes_text_item() {
        let resp = response(200, &[("content-type", "text/plain")], "just a string, not json");

        assert_eq!(
            classify(&resp).unwrap(),
            vec![ResponseItem::text("just a string, not json")]
        );
    }

    #[test]
    fn invalid_json_with_json_content_type_becomes_text_item() {
        let items = classify(&json("{not json")).unwrap();

        assert_eq!(items, vec![ResponseItem::text("{not json")]);
    }

    #[test]
    fn empty_or_whitespace_body_is_empty_reply() {
        assert!(classify(&json("")).unwrap().is_empty());

        let resp = response(200, &[("content-type", "text/plain")], "  \n\t ");
        assert!(classify(&resp).unwrap().is_empty());
    }
}

mod binary {
    use super::*;

    #[test]
    fn pdf_without_disposition_gets_synthesized_name() {
        let resp = response(200, &[("content-type", "application/pdf")], b"%PDF-1.4\n%".to_vec());

        let items = classify(&resp).unwrap();

        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item.kind, MessageKind::File);
        assert_eq!(item.content, "JVBERi0xLjQKJQ==");
        assert_eq!(item.mime_type.as_deref(), Some("application/pdf"));
        assert_eq!(
            item.file_name.as_deref(),
            Some("file-2024-03-05T06-07-08Z.pdf")
        );
    }

    #[test]
    fn empty_binary_body_is_empty_reply() {
        let resp = response(200, &[("content-type", "application/pdf")], Vec::new());

        assert!(classify(&resp).unwrap().is_empty());
    }

    #[test]
    fn disposition_filename_is_used() {
        let resp = response(
            200,
            &[
                ("content-type", "image/png"),
                ("content-disposition", r#"attachment; filename="chart%201.png""#),
            ],
            b"ABC".to_vec(),
        );

        let items = classify(&resp).unwrap();

        assert_eq!(
            items,
            vec![
                ResponseItem::media(MessageKind::Image, "QUJD")
                    .with_file_name("chart 1.png")
                    .with_mime_type("image/png")
            ]
        );
    }

    #[test]
    fn kind_follows_mime_prefix() {
        let cases = [
            ("audio/mpeg", MessageKind::Audio),
            ("video/mp4", MessageKind::Video),
            ("image/webp", MessageKind::Image),
            ("application/zip", MessageKind::File),
        ];

        for (mime, expected) in cases {
            let resp = response(200, &[("content-type", mime)], b"x".to_vec());
            let items = classify(&resp).unwrap();
            assert_eq!(items[0].kind, expected, "Failed for: {mime}");
        }
    }

    #[test]
    fn mime_type_drops_parameters() {
        let resp = response(200, &[("content-type", "audio/ogg; codecs=opus")], b"x".to_vec());

        let items = classify(&resp).unwrap();

        assert_eq!(items[0].mime_type.as_deref(), Some("audio/ogg"));
        assert_eq!(
            items[0].file_name.as_deref(),
            Some("file-2024-03-05T06-07-08Z.ogg")
        );
    }

    #[test]
    fn missing_content_type_is_octet_stream_file() {
        let resp = response(200, &[], b"raw".to_vec());

        let items = classify(&resp).unwrap();

        assert_eq!(items[0].kind, MessageKind::File);
        assert_eq!(items[0].mime_type.as_deref(), Some("application/octet-stream"));
        assert_eq!(
            items[0].file_name.as_deref(),
            Some("file-2024-03-05T06-07-08Z.bin")
        );
    }

    #[test]
    fn binary_body_is_not_parsed_as_json() {
        let resp = response(
            200,
            &[("content-type", "application/octet-stream")],
            r#"{"text":"hi"}"#,
        );

        let items = classify(&resp).unwrap();

        assert_eq!(items[0].kind, MessageKind::File);
    }
}
