//! Reading the CSRF cookie the compare server hands out with its index page.

pub const CSRF_COOKIE: &str = "csrftoken";
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Find the token in a list of `Set-Cookie` header values.
pub fn token_from_set_cookie<'a>(headers: impl IntoIterator<Item = &'a str>) -> Option<String> {
    headers.into_iter().find_map(|header| {
        // Only the leading name=value pair is the cookie; the rest are attributes
        let pair = header.split(';').next()?;
        let (name, value) = pair.split_once('=')?;
        (name.trim() == CSRF_COOKIE && !value.trim().is_empty())
            .then(|| value.trim().to_string())
    })
}

/// Find the token in a `Cookie` request header (`a=1; csrftoken=abc`).
pub fn token_from_cookie_header(cookie: &str) -> Option<String> {
    cookie.split(';').find_map(|pair| {
        let (name, value) = pair.split_once('=')?;
        (name.trim() == CSRF_COOKIE && !value.is_empty()).then(|| value.trim().to_string())
    })
}
