use percent_encoding::percent_decode_str;

/// Looks up `name` in a `document.cookie` style string.
///
/// Only an exact `name=` prefix matches, so `csrftoken2` never shadows
/// `csrftoken`. The value is percent-decoded.
pub fn get_cookie(cookies: &str, name: &str) -> Option<String> {
    if cookies.is_empty() {
        return None;
    }

    let prefix = format!("{}=", name);
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(prefix.as_str()))
        .map(|value| percent_decode_str(value).decode_utf8_lossy().into_owned())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_missing_cookie() {
        assert_eq!(get_cookie("", "csrftoken"), None);
        assert_eq!(get_cookie("sessionid=abc", "csrftoken"), None);
    }

    #[test]
    fn test_exact_name_match() {
        let cookies = "csrftoken2=wrong; xcsrftoken=wrong; csrftoken=right";
        assert_eq!(get_cookie(cookies, "csrftoken").as_deref(), Some("right"));
    }

    #[test]
    fn test_first_match_wins() {
        let cookies = "csrftoken=first;csrftoken=second";
        assert_eq!(get_cookie(cookies, "csrftoken").as_deref(), Some("first"));
    }

    #[test]
    fn test_value_is_decoded() {
        let cookies = "theme=dark; csrftoken=a%20b%3Dc";
        assert_eq!(get_cookie(cookies, "csrftoken").as_deref(), Some("a b=c"));
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(get_cookie("csrftoken=", "csrftoken").as_deref(), Some(""));
    }
}
