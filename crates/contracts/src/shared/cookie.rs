//! Cookie string lookup.

/// Finds `name` in a `document.cookie` style string.
///
/// Entries are split on `;` and trimmed; the first entry starting with
/// `name=` wins and its value is percent-decoded. Returns `None` when the
/// cookie is missing or the store is empty.
///
/// A value that is not valid percent-encoding is returned as stored.
pub fn get_cookie(cookie_string: &str, name: &str) -> Option<String> {
    if cookie_string.is_empty() {
        return None;
    }

    let prefix = format!("{}=", name);
    cookie_string
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(prefix.as_str()))
        .map(|raw| match urlencoding::decode(raw) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const COOKIES: &str = "sessionid=abc123; csrftoken=tok%20en%3D1; theme=dark";

    #[test]
    fn test_get_existing_cookie() {
        assert_eq!(get_cookie(COOKIES, "csrftoken").as_deref(), Some("tok en=1"));
        assert_eq!(get_cookie(COOKIES, "sessionid").as_deref(), Some("abc123"));
        assert_eq!(get_cookie(COOKIES, "theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_missing_cookie() {
        assert_eq!(get_cookie(COOKIES, "missing"), None);
        assert_eq!(get_cookie("", "csrftoken"), None);
    }

    #[test]
    fn test_exact_prefix_match() {
        // "csrf" must not match "csrftoken=..."
        assert_eq!(get_cookie(COOKIES, "csrf"), None);
        assert_eq!(
            get_cookie("xcsrftoken=nope; csrftoken=yes", "csrftoken").as_deref(),
            Some("yes")
        );
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(get_cookie("a=1; a=2", "a").as_deref(), Some("1"));
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(get_cookie("a=; b=2", "a").as_deref(), Some(""));
    }
}
