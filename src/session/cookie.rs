//! Pure cookie-string codec for the persisted session record.
//!
//! DESIGN
//! ======
//! `document.cookie` is the only storage surface, so everything that can be
//! computed without a browser lives here: attribute-string construction,
//! cookie-header parsing, and percent-encoding of values that would
//! otherwise collide with cookie separators (the user record is JSON).

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

/// Build the `Set-Cookie`-style assignment written to `document.cookie`.
///
/// Transport attributes follow the persisted-record contract: a fixed
/// max-age, `Path=/`, `Secure`, and `SameSite=Strict`.
pub fn set_cookie_string(name: &str, value: &str, max_age_secs: u64) -> String {
    format!(
        "{name}={}; Max-Age={max_age_secs}; Path=/; Secure; SameSite=Strict",
        encode_value(value)
    )
}

/// Build the assignment that removes a cookie (empty value, zero max-age).
pub fn clear_cookie_string(name: &str) -> String {
    format!("{name}=; Max-Age=0; Path=/; Secure; SameSite=Strict")
}

/// Find and decode `name` in a `document.cookie` string
/// (`"a=1; b=2; ..."`). Returns `None` when the cookie is absent or its
/// value fails to decode.
pub fn find_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key.trim() == name {
            decode_value(value.trim())
        } else {
            None
        }
    })
}

/// Percent-encode every byte outside the unreserved set, so JSON values
/// survive the cookie separator characters (`;`, `,`, `=`, whitespace).
pub fn encode_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Reverse [`encode_value`]. Returns `None` on malformed escapes or
/// non-UTF-8 payloads; the caller treats that as a corrupt record.
pub fn decode_value(value: &str) -> Option<String> {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes.get(i + 1..i + 3)?;
            let hex = std::str::from_utf8(hex).ok()?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}
