use std::sync::LazyLock;
use std::time::{Duration, Instant};

use regex::Regex;
use tracing::debug;

static HTML_COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP {status}")]
    Status { status: reqwest::StatusCode },
}

/// Anything that can hand back the markdown behind a documentation URL.
pub trait DocSource {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// HTTP fetcher for DocC markdown pages.
pub struct DocFetcher {
    client: reqwest::Client,
}

impl DocFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl DocSource for DocFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let start = Instant::now();
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status });
        }

        let body = response.text().await?;
        debug!(
            "Fetched {} ({} bytes in {}ms)",
            url,
            body.len(),
            start.elapsed().as_millis()
        );
        Ok(body)
    }
}

/// URL of a documentation page. A page whose endpoint is the framework
/// itself lives at the framework root.
pub fn doc_url(base_url: &str, framework: &str, endpoint: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if framework == endpoint {
        format!("{}/{}.md", base, framework)
    } else {
        format!("{}/{}/{}.md", base, framework, endpoint)
    }
}

/// Drop the HTML comments DocC prepends (the JSON metadata block).
pub fn cleanup_markdown(text: &str) -> String {
    HTML_COMMENT_RE.replace_all(text, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framework_page_url() {
        assert_eq!(
            doc_url("https://example.com/documentation/", "Swift", "Int"),
            "https://example.com/documentation/Swift/Int.md"
        );
        assert_eq!(
            doc_url("https://example.com/documentation", "Observation", "Observation"),
            "https://example.com/documentation/Observation.md"
        );
    }

    #[test]
    fn strips_metadata_comment() {
        let md = std::fs::read_to_string("tests/fixtures/view_styles.md").unwrap();
        let cleaned = cleanup_markdown(&md);
        assert!(cleaned.starts_with("# View styles"));
        assert!(!cleaned.contains("documentType"));
    }

    #[test]
    fn strips_every_comment() {
        assert_eq!(cleanup_markdown("<!-- a -->\nText <!--\nb\n--> end\n"), "Text  end");
    }

    #[test]
    fn status_error_message() {
        let err = FetchError::Status { status: reqwest::StatusCode::NOT_FOUND };
        assert_eq!(err.to_string(), "HTTP 404 Not Found");
    }
}
