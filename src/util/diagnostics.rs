use crate::{ApiKey, BodySnippetConfig};
use http::{HeaderMap, header::CONTENT_TYPE};

use super::redact::{redact_text, truncate_utf8};

pub(crate) fn request_id(headers: &HeaderMap) -> Option<Box<str>> {
    for name in ["x-request-id", "x-correlation-id", "cf-ray"] {
        if let Some(value) = headers.get(name).and_then(|v| v.to_str().ok()) {
            let value = value.trim();
            if !value.is_empty() {
                return Some(value.to_string().into_boxed_str());
            }
        }
    }
    None
}

/// Media type of the response without parameters, lowercased.
pub(crate) fn content_type(headers: &HeaderMap) -> Option<Box<str>> {
    let raw = headers.get(CONTENT_TYPE)?.to_str().ok()?;
    let essence = raw.split(';').next().unwrap_or_default().trim();
    if essence.is_empty() {
        return None;
    }
    Some(essence.to_ascii_lowercase().into_boxed_str())
}

pub(crate) fn is_json(content_type: Option<&str>) -> bool {
    content_type == Some("application/json")
}

pub(crate) fn body_snippet(
    body: &[u8],
    config: BodySnippetConfig,
    key: &ApiKey,
) -> Option<Box<str>> {
    if !config.enabled {
        return None;
    }

    let body = redact_text(String::from_utf8_lossy(body).into_owned(), key);
    Some(truncate_utf8(&body, config.max_bytes).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn content_type_drops_parameters() {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("Application/JSON; charset=utf-8"),
        );
        let ct = content_type(&headers);
        assert_eq!(ct.as_deref(), Some("application/json"));
        assert!(is_json(ct.as_deref()));
    }

    #[test]
    fn html_is_not_json() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/html"));
        assert!(!is_json(content_type(&headers).as_deref()));
        assert!(!is_json(None));
    }

    #[test]
    fn body_snippet_is_truncated_and_redacted() {
        let key = ApiKey::new("secret");
        let config = BodySnippetConfig {
            enabled: true,
            max_bytes: 12,
        };
        let snippet = body_snippet(b"secret token tail", config, &key).unwrap();
        assert_eq!(&*snippet, "<redacted> t");
    }

    #[test]
    fn key_cut_by_the_limit_does_not_leak() {
        let key = ApiKey::new("abcdef123456");
        let config = BodySnippetConfig {
            enabled: true,
            max_bytes: 10,
        };
        let snippet = body_snippet(b"key=abcdef123456", config, &key).unwrap();
        assert!(!snippet.contains("abcdef"), "{snippet}");
        assert_eq!(&*snippet, "key=<redac");
    }
}
