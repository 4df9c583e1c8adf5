//! URL and path utilities.
//!
//! Mirrors the browser's `encodeURI` / `decodeURI` rules so URLs built here
//! match what the file server receives from plain links.

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

/// Characters `encodeURI` escapes (non-ASCII is always escaped).
const URI: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Characters escaped inside a single path segment.
const SEGMENT: &AsciiSet = &URI.add(b'?').add(b'#');

/// Bytes `decodeURI` leaves escaped.
const URI_RESERVED: &[u8] = b";/?:@&=+$,#";

/// Characters escaped inside a query value.
const QUERY_VALUE: &AsciiSet = &SEGMENT.add(b'&').add(b'+').add(b'=');

/// Percent-encode a full URL the way `encodeURI` does.
pub fn encode_uri(url: &str) -> String {
    utf8_percent_encode(url, URI).to_string()
}

/// Percent-encode a file name for use as one or more path segments.
///
/// `/` is kept, since collapsed directory names may span segments.
pub fn encode_path_segment(name: &str) -> String {
    utf8_percent_encode(name, SEGMENT).to_string()
}

/// Percent-encode a query parameter value.
pub fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// Decode a URI the way `decodeURI` does.
///
/// Escapes of reserved characters (`%3F`, `%23`, `%2F`, ...) are kept, so
/// the result still parses the same way. Invalid UTF-8 is replaced.
pub fn decode_uri(uri: &str) -> String {
    let mut out = String::with_capacity(uri.len());
    let mut start = 0;
    let mut idx = 0;
    while let Some(pos) = uri[idx..].find('%') {
        let at = idx + pos;
        let reserved = uri
            .get(at + 1..at + 3)
            .and_then(|hex| u8::from_str_radix(hex, 16).ok())
            .is_some_and(|b| URI_RESERVED.contains(&b));
        if reserved {
            out.push_str(&decode_component(&uri[start..at]));
            out.push_str(&uri[at..at + 3]);
            start = at + 3;
            idx = at + 3;
        } else {
            idx = at + 1;
        }
    }
    out.push_str(&decode_component(&uri[start..]));
    out
}

/// Decode every escape, like `decodeURIComponent`; invalid UTF-8 is replaced.
pub fn decode_component(value: &str) -> String {
    percent_decode_str(value).decode_utf8_lossy().into_owned()
}

/// Join parts with `/` and collapse repeated separators.
pub fn path_join(parts: &[&str]) -> String {
    let joined = parts.join("/");
    let mut out = String::with_capacity(joined.len());
    let mut prev_slash = false;
    for c in joined.chars() {
        if c == '/' {
            if !prev_slash {
                out.push(c);
            }
            prev_slash = true;
        } else {
            out.push(c);
            prev_slash = false;
        }
    }
    out
}

/// Look up `name` in a query string (with or without the leading `?`).
///
/// `+` is read as a space, matching form encoding.
pub fn query_param(search: &str, name: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| decode_component(&value.replace('+', " ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_join() {
        assert_eq!(path_join(&["/", "/docs/", "/", "new"]), "/docs/new");
        assert_eq!(path_join(&["/docs", "README.md"]), "/docs/README.md");
        assert_eq!(path_join(&["/", ""]), "/");
    }

    #[test]
    fn test_encode_uri() {
        assert_eq!(
            encode_uri("http://host:8000/my app/v1.ipa"),
            "http://host:8000/my%20app/v1.ipa"
        );
        assert_eq!(encode_uri("http://h/a?b=c&d#e"), "http://h/a?b=c&d#e");
        assert_eq!(encode_uri("http://h/文件"), "http://h/%E6%96%87%E4%BB%B6");
    }

    #[test]
    fn test_encode_path_segment() {
        assert_eq!(encode_path_segment("what? #1.txt"), "what%3F%20%231.txt");
        assert_eq!(encode_path_segment("a/b"), "a/b");
    }

    #[test]
    fn test_encode_query_value() {
        assert_eq!(encode_query_value("a&b=c+d e"), "a%26b%3Dc%2Bd%20e");
        assert_eq!(query_param(&format!("?q={}", encode_query_value("a&b")), "q").as_deref(), Some("a&b"));
    }

    #[test]
    fn test_decode_uri() {
        assert_eq!(decode_uri("/my%20docs/%E6%96%87"), "/my docs/文");
        assert_eq!(decode_uri("/plain"), "/plain");
    }

    #[test]
    fn test_decode_uri_keeps_reserved_escapes() {
        assert_eq!(decode_uri("/what%3F/sub%20dir"), "/what%3F/sub dir");
        assert_eq!(decode_uri("/a%2Fb%23c%25d"), "/a%2Fb%23c%d");
        assert_eq!(decode_uri("/100%"), "/100%");
        assert_eq!(decode_uri("/%zz%3f"), "/%zz%3f");
    }

    #[test]
    fn test_decode_component() {
        assert_eq!(decode_component("what%3F%20%231"), "what? #1");
    }

    #[test]
    fn test_query_param() {
        assert_eq!(query_param("?search=a+b&raw=false", "search").as_deref(), Some("a b"));
        assert_eq!(query_param("search=x&raw=false", "raw").as_deref(), Some("false"));
        assert_eq!(query_param("?research=x", "search"), None);
        assert_eq!(query_param("", "search"), None);
        assert_eq!(query_param("?q=%E6%96%87", "q").as_deref(), Some("文"));
    }
}
