//! Input sanitizers shared by the endpoint and the reconciler.
//!
//! These follow the host platform's rules closely enough that a login or
//! email accepted here is accepted by the user store: text fields lose
//! markup and runs of whitespace, logins are restricted to
//! `[A-Za-z0-9 _.\-@]`, and emails must be `local@label.label`.

/// Longest login the user store accepts
pub const MAX_LOGIN_LENGTH: usize = 60;

const MIN_EMAIL_LENGTH: usize = 6;
const FALLBACK_LOGIN: &str = "user";
const EMAIL_LOCAL_SPECIALS: &str = "!#$%&'*+/=?^_`{|}~.-";

/// Strip markup, control characters and redundant whitespace.
pub fn sanitize_text(input: &str) -> String {
    collapse_whitespace(&strip_tags(input))
}

/// Reduce a display name (or email local-part) to a valid login.
///
/// May return an empty string when nothing usable survives.
pub fn sanitize_login(input: &str) -> String {
    let filtered: String = strip_tags(input)
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '_' | '.' | '-' | '@'))
        .collect();

    truncate_login(&collapse_whitespace(&filtered), MAX_LOGIN_LENGTH)
}

/// Preferred login for a new account: the sanitized name, else the
/// sanitized email local-part, else a fixed fallback.
pub fn derive_login(name: &str, email: &str) -> String {
    let from_name = sanitize_login(name);
    if !from_name.is_empty() {
        return from_name;
    }

    let local_part = email.split_once('@').map_or(email, |(local, _)| local);
    let from_email = sanitize_login(local_part);
    if !from_email.is_empty() {
        return from_email;
    }

    FALLBACK_LOGIN.to_string()
}

/// Validate an email address and return its canonical form.
///
/// The local part is kept verbatim, the domain is lowercased. Returns `None`
/// for anything that is not syntactically an address.
pub fn normalize_email(input: &str) -> Option<String> {
    let email = input.trim();
    if email.len() < MIN_EMAIL_LENGTH {
        return None;
    }

    let (local, domain) = email.split_once('@')?;
    if local.is_empty()
        || !local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || EMAIL_LOCAL_SPECIALS.contains(c))
    {
        return None;
    }

    let domain = domain.to_ascii_lowercase();
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || !labels.iter().all(|label| is_valid_domain_label(label)) {
        return None;
    }

    Some(format!("{}@{}", local, domain))
}

pub(crate) fn truncate_login(login: &str, max_len: usize) -> String {
    login.chars().take(max_len).collect::<String>().trim_end().to_string()
}

fn is_valid_domain_label(label: &str) -> bool {
    !label.is_empty()
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Remove `<tag ...>` sequences. A `<` that cannot open a tag is kept.
fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_tag = false;

    while let Some(c) = chars.next() {
        if in_tag {
            if c == '>' {
                in_tag = false;
            }
            continue;
        }

        let opens_tag = c == '<'
            && chars
                .peek()
                .is_some_and(|next| next.is_ascii_alphabetic() || matches!(next, '/' | '!' | '?'));

        if opens_tag {
            in_tag = true;
        } else {
            out.push(c);
        }
    }

    out
}

fn collapse_whitespace(input: &str) -> String {
    input
        .split(|c: char| c.is_whitespace() || c.is_control())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
