// Title fetcher: issues a blocking GET for the page and pulls the text of
// the first <title> element out of the raw body.

use anyhow::{bail, Context, Result};
use regex::Regex;
use reqwest::blocking::Client;

const TITLE_PATTERN: &str = r"(?i)<title[^>]*>([^<]+)</title>";

/// Fetches a URL and extracts the page title from the response body.
/// Holds a shared blocking client; construction does no I/O.
#[derive(Clone)]
pub struct TitleFetcher {
    http_client: Client,
}

impl TitleFetcher {
    pub fn new(http_client: Client) -> Self {
        Self { http_client }
    }

    /// GET the page and return the first `<title>` element's text.
    ///
    /// The response status is not inspected: an error page that carries a
    /// title still yields that title. Fails if the request cannot be
    /// completed, the body cannot be read, or no title element matches.
    pub fn fetch(&self, url: &str) -> Result<String> {
        let res = self
            .http_client
            .get(url)
            .send()
            .with_context(|| format!("Failed to fetch {}", url))?;
        let body = res.text().context("Failed to read page body")?;
        extract_title(&body)
    }
}

/// Applies the fixed title pattern and returns the first capture verbatim:
/// no trimming, no HTML-entity decoding.
fn extract_title(html: &str) -> Result<String> {
    let re = Regex::new(TITLE_PATTERN).unwrap();
    match re.captures(html) {
        Some(caps) => Ok(caps[1].to_string()),
        None => bail!("can't retrieve page title"),
    }
}

#[cfg(test)]
mod tests {
    use super::extract_title;

    #[test]
    fn matches_regardless_of_case_and_attributes() {
        let html = r#"<html><head><TITLE class="x">Hello</TITLE></head></html>"#;
        assert_eq!(extract_title(html).unwrap(), "Hello");
    }

    #[test]
    fn returns_first_title_when_several_are_present() {
        let html = "<title>first</title><title>second</title>";
        assert_eq!(extract_title(html).unwrap(), "first");
    }

    #[test]
    fn keeps_inner_whitespace_and_entities_verbatim() {
        let html = "<title>  Fish &amp; Chips\n</title>";
        assert_eq!(extract_title(html).unwrap(), "  Fish &amp; Chips\n");
    }

    #[test]
    fn fails_when_no_title_element_exists() {
        let err = extract_title("<html><body>no title here</body></html>").unwrap_err();
        assert_eq!(err.to_string(), "can't retrieve page title");
    }

    #[test]
    fn fails_on_empty_title() {
        assert!(extract_title("<title></title>").is_err());
    }
}
