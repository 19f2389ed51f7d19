/// Extract the token from an `Authorization: Bearer <token>` value.
///
/// The scheme is case-insensitive and must be followed by at least one
/// whitespace character. The token is the rest of the header and must be
/// non-empty with no embedded whitespace, so `Bearer a b` is rejected.
pub fn parse_bearer(header: &str) -> Option<&str> {
    const SCHEME: &str = "bearer";

    let scheme = header.get(..SCHEME.len())?;
    if !scheme.eq_ignore_ascii_case(SCHEME) {
        return None;
    }

    let rest = &header[SCHEME.len()..];
    let token = rest.trim_start();
    if token.len() == rest.len() || token.is_empty() {
        return None;
    }

    if token.chars().any(char::is_whitespace) {
        return None;
    }

    Some(token)
}
