//! Email and URL format validators

use std::borrow::Cow;
use std::sync::LazyLock;

use url::Host;

use crate::foundation::Validate;

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
    .unwrap()
});

/// Longest local part (before `@`) accepted by [`Email`].
const MAX_LOCAL_PART: usize = 64;

/// Longest URL accepted by [`Url`].
const MAX_URL_LENGTH: usize = 2083;

/// Schemes accepted by [`Url`]. Inputs without a scheme are read as `http`.
const URL_PROTOCOLS: [&str; 3] = ["http", "https", "ftp"];

// ============================================================================
// EMAIL
// ============================================================================

/// Validates email address format.
///
/// The domain must contain at least one dot; the local part may not start
/// or end with a dot, contain `..`, or exceed 64 characters.
///
/// # Examples
///
/// ```
/// use formcheck_rules::validators::email;
/// use formcheck_rules::foundation::Validate;
///
/// assert!(email().is_valid("jane.doe@example.com"));
/// assert!(!email().is_valid("jane@localhost"));
/// assert!(!email().is_valid("jane..doe@example.com"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Email;

impl Validate for Email {
    type Input = str;

    fn is_valid(&self, input: &str) -> bool {
        let Some((local, _)) = input.rsplit_once('@') else {
            return false;
        };
        local.len() <= MAX_LOCAL_PART
            && !local.starts_with('.')
            && !local.ends_with('.')
            && !local.contains("..")
            && EMAIL_REGEX.is_match(input)
    }
}

/// Creates an [`Email`] validator.
#[must_use]
pub const fn email() -> Email {
    Email
}

crate::validator! {
    /// Validates that an email address belongs to one of a set of domains.
    ///
    /// Domains compare exactly against everything after the last `@`.
    #[derive(PartialEq, Eq)]
    pub EmailDomain { domains: Vec<String> } for str;
    rule(self, input) {
        input
            .rsplit_once('@')
            .is_some_and(|(_, domain)| self.domains.iter().any(|allowed| allowed == domain))
    }
    fn email_domain(domains: Vec<String>);
}

// ============================================================================
// URL
// ============================================================================

/// Validates URL format.
///
/// Accepts `http`, `https` and `ftp` URLs; a missing scheme is read as
/// `http`, so `example.com/path` is valid. Hosts must be IP addresses or
/// domain names with a top-level domain (`localhost` is rejected).
///
/// # Examples
///
/// ```
/// use formcheck_rules::validators::url;
/// use formcheck_rules::foundation::Validate;
///
/// assert!(url().is_valid("https://example.com/path?q=1"));
/// assert!(url().is_valid("example.com"));
/// assert!(!url().is_valid("not a url"));
/// assert!(!url().is_valid("http://localhost:8080"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Url;

impl Validate for Url {
    type Input = str;

    fn is_valid(&self, input: &str) -> bool {
        if input.is_empty() || input.len() > MAX_URL_LENGTH || input.chars().any(char::is_whitespace)
        {
            return false;
        }

        let candidate: Cow<'_, str> = if input.contains("://") {
            Cow::Borrowed(input)
        } else {
            Cow::Owned(format!("http://{input}"))
        };

        let Ok(parsed) = url::Url::parse(&candidate) else {
            return false;
        };

        if !URL_PROTOCOLS.contains(&parsed.scheme()) {
            return false;
        }

        match parsed.host() {
            Some(Host::Domain(domain)) => has_top_level_domain(domain),
            Some(Host::Ipv4(_) | Host::Ipv6(_)) => true,
            None => false,
        }
    }
}

/// Creates a [`Url`] validator.
#[must_use]
pub const fn url() -> Url {
    Url
}

fn has_top_level_domain(domain: &str) -> bool {
    let domain = domain.strip_suffix('.').unwrap_or(domain);
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return false;
    }
    labels.last().is_some_and(|tld| {
        tld.starts_with("xn--")
            || (tld.len() >= 2 && tld.chars().all(char::is_alphabetic))
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("user@example.com", true)]
    #[case("first.last+tag@sub.example.co.uk", true)]
    #[case("invalid", false)]
    #[case("@example.com", false)]
    #[case("user@", false)]
    #[case("user@example", false)]
    #[case(".user@example.com", false)]
    #[case("user.@example.com", false)]
    #[case("us..er@example.com", false)]
    #[case("user@-example.com", false)]
    fn test_email(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(email().is_valid(input), expected);
    }

    #[test]
    fn test_email_local_part_limit() {
        let long = format!("{}@example.com", "a".repeat(65));
        assert!(!email().is_valid(&long));
        let ok = format!("{}@example.com", "a".repeat(64));
        assert!(email().is_valid(&ok));
    }

    #[test]
    fn test_email_domain() {
        let validator = email_domain(vec!["gmail.com".to_string(), "yahoo.com".to_string()]);
        assert!(validator.is_valid("jane@gmail.com"));
        assert!(validator.is_valid("jane@yahoo.com"));
        assert!(!validator.is_valid("jane@gmail.co"));
        assert!(!validator.is_valid("jane@notgmail.com"));
        assert!(!validator.is_valid("gmail.com"));
    }

    #[rstest]
    #[case("http://example.com", true)]
    #[case("https://example.com/path", true)]
    #[case("ftp://files.example.org", true)]
    #[case("www.example.com", true)]
    #[case("http://192.168.0.1:8080/", true)]
    #[case("invalid", false)]
    #[case("ws://example.com", false)]
    #[case("http://localhost", false)]
    #[case("http://exa mple.com", false)]
    #[case("", false)]
    fn test_url(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(url().is_valid(input), expected);
    }
}
