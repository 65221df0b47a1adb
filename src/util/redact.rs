use crate::ApiKey;

pub(crate) fn truncate_utf8(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes.min(s.len());
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

pub(crate) fn redact_text(text: String, key: &ApiKey) -> String {
    let secret = key.secret();
    if secret.is_empty() {
        return text;
    }
    text.replace(secret, "<redacted>")
}
