//! Validation helpers for form input.
//!
//! The stores themselves enforce nothing (field validation is a caller
//! concern); these helpers exist for the UI layer sitting on top.

/// Minimal email shape check: one `@` with non-empty local part and a dotted
/// domain.
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    !local.is_empty()
        && !domain.is_empty()
        && !local.contains(char::is_whitespace)
        && !domain.contains(char::is_whitespace)
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Parse-based URL check; only absolute URLs pass.
pub fn is_valid_url(url: &str) -> bool {
    url::Url::parse(url).is_ok()
}

/// Check slug format: lowercase alphanumeric runs joined by `-` or `_`.
pub fn is_valid_slug(slug: &str) -> bool {
    if slug.is_empty() || slug.starts_with(['-', '_']) || slug.ends_with(['-', '_']) {
        return false;
    }
    let mut prev_separator = false;
    for c in slug.chars() {
        match c {
            'a'..='z' | '0'..='9' => prev_separator = false,
            '-' | '_' => {
                if prev_separator {
                    return false;
                }
                prev_separator = true;
            }
            _ => return false,
        }
    }
    true
}

/// Derive a slug from free text: lowercase, drop special characters, join
/// word runs with hyphens.
pub fn generate_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;
    for c in text.trim().to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else if c.is_whitespace() || c == '-' || c == '_' {
            pending_separator = true;
        }
    }
    slug
}

/// Result of a password strength check.
#[derive(Debug, Clone)]
pub struct PasswordCheck {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Validate password strength: length, upper, lower, digit, special.
pub fn validate_password(password: &str) -> PasswordCheck {
    let mut errors = Vec::new();

    if password.len() < 8 {
        errors.push("Au moins 8 caractères".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Une majuscule".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Une minuscule".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Un chiffre".to_string());
    }
    if !password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        errors.push("Un caractère spécial".to_string());
    }

    PasswordCheck {
        is_valid: errors.is_empty(),
        errors,
    }
}
