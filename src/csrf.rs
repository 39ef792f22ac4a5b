//! CSRF Token Lookup
//!
//! The server rejects state-changing requests unless the `csrftoken` cookie
//! value is echoed back in the `X-CSRFToken` header.

use wasm_bindgen::JsCast;

/// Cookie entry holding the CSRF secret
const COOKIE_NAME: &str = "csrftoken";

/// Extract the token from a raw cookie string
///
/// Entries are split on `;` and trimmed; the first entry named `csrftoken`
/// wins. Returns `None` when no such entry exists.
pub fn token_in(cookies: &str) -> Option<String> {
    cookies.split(';').find_map(|entry| {
        entry
            .trim()
            .strip_prefix(COOKIE_NAME)
            .and_then(|rest| rest.strip_prefix('='))
            .map(|value| value.to_string())
    })
}

/// Read the token from the live document cookie
///
/// Read fresh on every call, never cached.
pub fn token() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let html_doc = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
    let cookies = html_doc.cookie().ok()?;
    token_in(&cookies)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_token_among_other_cookies() {
        let cookies = "sessionid=abc123; csrftoken=XYZ; theme=dark";
        assert_eq!(token_in(cookies), Some("XYZ".to_string()));
    }

    #[test]
    fn entry_order_does_not_matter() {
        assert_eq!(token_in("csrftoken=XYZ; sessionid=abc123"), Some("XYZ".to_string()));
        assert_eq!(token_in("sessionid=abc123; theme=dark; csrftoken=XYZ"), Some("XYZ".to_string()));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(token_in("sessionid=s;   csrftoken=XYZ  "), Some("XYZ".to_string()));
    }

    #[test]
    fn first_matching_entry_wins() {
        assert_eq!(token_in("csrftoken=one; csrftoken=two"), Some("one".to_string()));
    }

    #[test]
    fn value_may_contain_equals_signs() {
        assert_eq!(token_in("csrftoken=a=b"), Some("a=b".to_string()));
    }

    #[test]
    fn absent_without_a_csrftoken_entry() {
        assert_eq!(token_in("sessionid=abc123; theme=dark"), None);
        assert_eq!(token_in(""), None);
    }

    #[test]
    fn similarly_named_cookie_is_not_the_token() {
        assert_eq!(token_in("csrftoken2=nope; theme=dark"), None);
    }
}
