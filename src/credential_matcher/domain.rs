//! Domain extraction and matching utilities.

/// Names shorter than this never match on their own; short words like
/// "my" or "app" appear in far too many domains.
pub const MIN_NAME_WORD_LEN: usize = 4;

/// Web domains shorter than this are not compared against field values.
const MIN_WEB_DOMAIN_LEN: usize = 4;

/// Derive the domain a stored field value points at.
///
/// Strips everything up to and including the last "www.", then everything up
/// to and including the last "://", then cuts at the first "/".
/// E.g., "https://www.google.com/path" -> "google.com"
/// E.g., "github.com/login" -> "github.com"
pub fn candidate_domain(value: &str) -> &str {
    let rest = value.rsplit_once("www.").map_or(value, |(_, after)| after);
    let rest = rest.rsplit_once("://").map_or(rest, |(_, after)| after);
    rest.split_once('/').map_or(rest, |(host, _)| host)
}

/// Check if a stored field value points at the requested web domain.
///
/// The web domain must look like a domain (at least 4 characters, containing
/// a dot) and end with the candidate domain of the value, ignoring case.
/// An empty candidate is a suffix of every such domain.
pub fn field_points_at_domain(web_domain: &str, field_value: &str) -> bool {
    if web_domain.chars().count() < MIN_WEB_DOMAIN_LEN || !web_domain.contains('.') {
        return false;
    }

    web_domain
        .to_lowercase()
        .ends_with(&candidate_domain(field_value).to_lowercase())
}

/// Find the first word of a credential name that occurs in the web domain.
///
/// Words are whitespace separated and must be at least [`MIN_NAME_WORD_LEN`]
/// characters long. Comparison ignores case.
pub fn name_word_in_domain<'a>(web_domain: &str, credential_name: &'a str) -> Option<&'a str> {
    let domain = web_domain.to_lowercase();
    credential_name
        .split_whitespace()
        .filter(|word| word.chars().count() >= MIN_NAME_WORD_LEN)
        .find(|word| domain.contains(&word.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_domain() {
        assert_eq!(candidate_domain("https://www.google.com/path"), "google.com");
        assert_eq!(candidate_domain("http://example.com"), "example.com");
        assert_eq!(candidate_domain("www.example.com"), "example.com");
        assert_eq!(candidate_domain("github.com/login?next=/"), "github.com");
        assert_eq!(candidate_domain("android://com.example.app"), "com.example.app");
        assert_eq!(candidate_domain("alice"), "alice");
        assert_eq!(candidate_domain("https://"), "");
        assert_eq!(candidate_domain(""), "");

        // The last occurrence is stripped.
        assert_eq!(candidate_domain("www.www.example.com"), "example.com");
        assert_eq!(candidate_domain("https://proxy.net/https://bank.de/login"), "bank.de");
    }

    #[test]
    fn test_field_points_at_domain() {
        assert!(field_points_at_domain("accounts.google.com", "https://www.google.com/path"));
        assert!(field_points_at_domain("google.com", "google.com"));
        assert!(field_points_at_domain("ACCOUNTS.Google.com", "https://GOOGLE.COM"));
        assert!(field_points_at_domain("a.co", "a.co"));

        assert!(!field_points_at_domain("accounts.google.com", "https://www.github.com"));
        assert!(!field_points_at_domain("google.com", "accounts.google.com"));
        assert!(!field_points_at_domain("x.y", "x.y"));
        assert!(!field_points_at_domain("localhost", "localhost"));
        assert!(field_points_at_domain("google.com", ""));
        assert!(field_points_at_domain("google.com", "https://www./"));
        assert!(!field_points_at_domain("intranet", ""));
    }

    #[test]
    fn test_name_word_in_domain() {
        assert_eq!(name_word_in_domain("accounts.google.com", "Google"), Some("Google"));
        assert_eq!(name_word_in_domain("www.stackoverflow.com", "Stack Overflow"), Some("Stack"));
        assert_eq!(name_word_in_domain("mail.example.org", "My  Example   Mail"), Some("Example"));

        // Words shorter than four characters are ignored.
        assert_eq!(name_word_in_domain("myapp.com", "My App"), None);
        assert_eq!(name_word_in_domain("gmx.net", "GMX"), None);

        assert_eq!(name_word_in_domain("google.com", ""), None);
        assert_eq!(name_word_in_domain("", "Google"), None);
    }
}
