//! Cookie lookup over the raw `document.cookie` string.

/// Read a cookie value by exact name.
///
/// Returns `None` when the name is absent or appears more than once. The
/// value is returned verbatim (no percent-decoding).
#[must_use]
pub fn cookie_value<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    if name.is_empty() {
        return None;
    }
    let needle = format!("; {name}=");
    let mut starts = Vec::new();
    let mut search_from = 0;
    // Matches are taken against "; " + cookies; a match at index 0 of that
    // virtual string is the first cookie.
    if cookies.starts_with(&needle[2..]) {
        starts.push(needle.len() - 2);
        search_from = needle.len() - 2;
    }
    while let Some(offset) = cookies[search_from..].find(&needle) {
        let value_start = search_from + offset + needle.len();
        starts.push(value_start);
        search_from = value_start;
    }
    match starts.as_slice() {
        [start] => {
            let rest = &cookies[*start..];
            Some(rest.split(';').next().unwrap_or(rest))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::cookie_value;

    #[test]
    fn reads_first_middle_and_last_cookie() {
        let cookies = "session=abc; csrf_token=t0k3n; theme=dark";
        assert_eq!(cookie_value(cookies, "session"), Some("abc"));
        assert_eq!(cookie_value(cookies, "csrf_token"), Some("t0k3n"));
        assert_eq!(cookie_value(cookies, "theme"), Some("dark"));
    }

    #[test]
    fn absent_name_is_none() {
        assert_eq!(cookie_value("a=1; b=2", "csrf_token"), None);
        assert_eq!(cookie_value("", "csrf_token"), None);
    }

    #[test]
    fn requires_exact_name_match() {
        let cookies = "my_csrf_token=wrong; csrf_tokenx=nope";
        assert_eq!(cookie_value(cookies, "csrf_token"), None);
        assert_eq!(cookie_value("xcsrf=1; csrf=2", "csrf"), Some("2"));
    }

    #[test]
    fn value_is_not_decoded() {
        assert_eq!(cookie_value("csrf_token=a%3Db=c", "csrf_token"), Some("a%3Db=c"));
        assert_eq!(cookie_value("csrf_token=", "csrf_token"), Some(""));
    }

    #[test]
    fn duplicate_names_are_ambiguous() {
        assert_eq!(cookie_value("csrf_token=a; csrf_token=b", "csrf_token"), None);
    }
}
