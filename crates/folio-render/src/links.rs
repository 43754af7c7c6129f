//! Link inspection: host classification and scheme checks.
//!
//! URLs in the catalogue are either absolute (`https://host/path`) or
//! relative to the page (`img/cover.png`). Absolute URLs go through the
//! WHATWG parser so the scheme and host seen here are the ones a browser
//! would see. Only a handful of schemes are allowed into `href`/`src`.

use url::{ParseError, Url};

use crate::{Error, Result};

/// Schemes accepted for absolute URLs.
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Hosting pattern used when none are configured.
pub const DEFAULT_HOSTING_PATTERN: &str = "github.io";

/// Label for links to a recognised static host.
pub const LIVE_DEMO: &str = "Live Demo";

/// Label for any other project link.
pub const PROJECT_LINK: &str = "Project Link";

/// Decides how a project link is labelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkClassifier {
    hosting_patterns: Vec<String>,
}

impl LinkClassifier {
    /// Create a classifier from host patterns (e.g. `github.io`).
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            hosting_patterns: patterns
                .into_iter()
                .map(|p| p.into().trim_start_matches('.').to_ascii_lowercase())
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    /// Whether the URL's host is, or is a subdomain of, a hosting pattern.
    pub fn is_hosted_demo(&self, url: &str) -> bool {
        let Some(host) = host_of(url) else {
            return false;
        };
        self.hosting_patterns
            .iter()
            .any(|p| host == *p || host.ends_with(&format!(".{p}")))
    }

    /// `"Live Demo"` for hosted demos, `"Project Link"` otherwise.
    pub fn label_for(&self, url: &str) -> &'static str {
        if self.is_hosted_demo(url) {
            LIVE_DEMO
        } else {
            PROJECT_LINK
        }
    }
}

impl Default for LinkClassifier {
    fn default() -> Self {
        Self::new([DEFAULT_HOSTING_PATTERN])
    }
}

/// Parse `url` as an absolute URL.
///
/// `Ok(None)` means the string is relative (no scheme). Tabs, newlines and
/// leading control characters are stripped before parsing, as browsers do.
pub fn parse_absolute(url: &str) -> std::result::Result<Option<Url>, ParseError> {
    match Url::parse(url) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(ParseError::RelativeUrlWithoutBase) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Host of an absolute URL, lowercased and percent-decoded.
pub fn host_of(url: &str) -> Option<String> {
    let parsed = parse_absolute(url).ok()??;
    parsed.host_str().map(str::to_ascii_lowercase)
}

/// Accept relative URLs and absolute ones with an allowed scheme.
///
/// `field` names the project field in the error.
pub fn check_url<'a>(field: &str, url: &'a str) -> Result<&'a str> {
    match parse_absolute(url) {
        Ok(None) => Ok(url),
        Ok(Some(parsed)) if ALLOWED_SCHEMES.contains(&parsed.scheme()) => Ok(url),
        Ok(Some(_)) => Err(Error::UnsafeUrl {
            field: field.to_string(),
            url: url.to_string(),
        }),
        Err(e) => Err(Error::InvalidUrl {
            field: field.to_string(),
            url: url.to_string(),
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_github_pages_is_live_demo() {
        let links = LinkClassifier::default();
        assert_eq!(links.label_for("https://foo.github.io/bar"), LIVE_DEMO);
        assert_eq!(links.label_for("https://FOO.GitHub.io"), LIVE_DEMO);
    }

    #[test]
    fn test_other_hosts_are_project_links() {
        let links = LinkClassifier::default();
        assert_eq!(links.label_for("https://example.com"), PROJECT_LINK);
        assert_eq!(links.label_for("https://example.com/github.io"), PROJECT_LINK);
        assert_eq!(links.label_for("https://notgithub.io"), PROJECT_LINK);
        assert_eq!(links.label_for("demo/index.html"), PROJECT_LINK);
    }

    #[test]
    fn test_custom_patterns() {
        let links = LinkClassifier::new([".netlify.app", "github.io"]);
        assert_eq!(links.label_for("https://site.netlify.app/"), LIVE_DEMO);
        assert_eq!(links.label_for("https://me.github.io"), LIVE_DEMO);

        let none = LinkClassifier::new(Vec::<String>::new());
        assert_eq!(none.label_for("https://me.github.io"), PROJECT_LINK);
    }

    #[test]
    fn test_host_of() {
        assert_eq!(host_of("https://foo.github.io/bar").unwrap(), "foo.github.io");
        assert_eq!(host_of("http://user@Example.com:8080/x?y").unwrap(), "example.com");
        assert_eq!(host_of("https://example.com#top").unwrap(), "example.com");
        assert!(host_of("relative/path").is_none());
        assert!(host_of("mailto:me@example.com").is_none());
    }

    #[test]
    fn test_host_matches_browser_parsing() {
        let links = LinkClassifier::default();
        assert_eq!(links.label_for("https://foo.github.io\\@example.com/"), LIVE_DEMO);
        assert_eq!(links.label_for("https://foo.github%2Eio/"), LIVE_DEMO);
        assert_eq!(links.label_for("https://foo.github.io\\bar"), LIVE_DEMO);
    }

    #[test]
    fn test_parse_absolute() {
        assert_eq!(parse_absolute("HTTPS://x").unwrap().unwrap().scheme(), "https");
        assert!(parse_absolute("img/a:b.png").unwrap().is_none());
        assert!(parse_absolute("/abs/path").unwrap().is_none());
        assert!(parse_absolute("?q=a:b").unwrap().is_none());
        assert!(parse_absolute("https://exa mple.com").is_err());
    }

    #[test]
    fn test_check_url() {
        assert!(check_url("link", "https://example.com").is_ok());
        assert!(check_url("link", "mailto:me@example.com").is_ok());
        assert!(check_url("img", "img/cover.png").is_ok());

        let err = check_url("link", "javascript:alert(1)").unwrap_err();
        assert!(err.to_string().contains("javascript:alert(1)"));
        assert!(err.to_string().contains("link"));
    }

    #[test]
    fn test_check_url_sees_through_obfuscated_schemes() {
        for url in [
            "java\tscript:alert(1)",
            "java\nscript:alert(1)",
            "\u{1}javascript:alert(1)",
            " JavaScript:alert(1)",
            "data:text/html,<b>x</b>",
        ] {
            let err = check_url("project link", url).unwrap_err();
            assert!(
                matches!(err, Error::UnsafeUrl { .. }),
                "{url:?} should be refused"
            );
        }
    }

    #[test]
    fn test_check_url_rejects_unparseable_absolute_urls() {
        let err = check_url("image", "https://exa mple.com/a.png").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { ref field, .. } if field == "image"));
    }
}
