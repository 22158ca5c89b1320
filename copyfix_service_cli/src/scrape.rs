use crate::{BoxError, SiteCopy};
use regex::Regex;
use reqwest::Client;
use scraper::{Html, Node};
use std::time::Duration;

const SCRAPE_ERROR_PREFIX: &str = "Error scraping site:";

/// Marker check for the in-band scrape failure string.
pub fn is_scrape_error(text: &str) -> bool {
    text.starts_with(SCRAPE_ERROR_PREFIX)
}

/// Visible page text in the two renderings the pipeline needs: a
/// whitespace-flattened form for the model prompt and a line-per-text-node
/// form for the component guesser and the copy checks. Both are capped at
/// the same character budget. A failed fetch puts the error string in both
/// fields.
pub struct ScrapedText {
    pub flat: String,
    pub lines: String,
}

impl ScrapedText {
    pub fn is_error(&self) -> bool {
        is_scrape_error(&self.flat)
    }
}

pub struct Scraper {
    client: Client,
    max_text_length: usize,
}

impl Scraper {
    pub fn new(max_text_length: usize) -> Result<Self, BoxError> {
        Ok(Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .build()?,
            max_text_length,
        })
    }

    /// Fetches the page and returns its visible text, capped at
    /// `max_text_length` characters. Failures come back in-band as
    /// "Error scraping site: ..." rather than as an `Err`.
    pub async fn fetch_text(&self, url: &str) -> ScrapedText {
        match self.try_fetch(url).await {
            Ok(text) => text,
            Err(e) => {
                let message = format!("{} {}", SCRAPE_ERROR_PREFIX, e);
                ScrapedText {
                    lines: message.clone(),
                    flat: message,
                }
            }
        }
    }

    async fn try_fetch(&self, url: &str) -> Result<ScrapedText, BoxError> {
        let body = self.client.get(url).send().await?.text().await?;
        let doc = Html::parse_document(&body);
        Ok(ScrapedText {
            flat: visible_text(&doc).chars().take(self.max_text_length).collect(),
            lines: visible_lines(&doc).chars().take(self.max_text_length).collect(),
        })
    }
}

/// The document's visible text nodes: everything outside of
/// script/style/noscript, trimmed, empty nodes dropped.
fn visible_parts(doc: &Html) -> Vec<&str> {
    let mut parts: Vec<&str> = Vec::new();
    for node in doc.tree.root().descendants() {
        if let Node::Text(text) = node.value() {
            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .map_or(false, |el| matches!(el.name(), "script" | "style" | "noscript"))
            });
            if hidden {
                continue;
            }
            let trimmed = text.text.trim();
            if !trimmed.is_empty() {
                parts.push(trimmed);
            }
        }
    }
    parts
}

/// Visible text joined with single spaces, the form embedded in prompts.
pub fn visible_text(doc: &Html) -> String {
    visible_parts(doc).join(" ")
}

/// Visible text with one line per text node, the form the guesser and the
/// copy checks split on.
pub fn visible_lines(doc: &Html) -> String {
    visible_parts(doc).join("\n")
}

/// Guesses the existing headline, subheadline and call-to-action from the
/// line-separated scraped text: the first two lines longer than 20
/// characters, plus the first line containing a CTA keyword.
pub fn guess_components(text: &str) -> SiteCopy {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| line.chars().count() > 20)
        .collect();
    let cta = Regex::new(r"(?i)(contact|get started|book|schedule|learn more|order now)").unwrap();
    SiteCopy {
        headline: lines.first().copied().unwrap_or("Not found").to_string(),
        subheadline: lines.get(1).copied().unwrap_or("Not found").to_string(),
        call_to_action: lines
            .iter()
            .copied()
            .find(|line| cta.is_match(line))
            .unwrap_or("Not found")
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    #[test]
    fn visible_text_joins_text_nodes_with_spaces() {
        let doc = Html::parse_document(
            "<html><body><h1>Welcome</h1><p>We build things.</p></body></html>",
        );
        assert_eq!(visible_text(&doc), "Welcome We build things.");
    }

    #[test]
    fn visible_lines_keeps_blocks_on_separate_lines() {
        let doc = Html::parse_document(
            "<html><body><h1>Welcome</h1><p>We build things.</p></body></html>",
        );
        assert_eq!(visible_lines(&doc), "Welcome\nWe build things.");
    }

    #[test]
    fn visible_text_drops_script_and_style() {
        let doc = Html::parse_document(
            "<html><head><style>body { color: red; }</style></head>\
             <body><script>alert(1)</script><noscript>enable js</noscript>\
             <p>Hello</p></body></html>",
        );
        assert_eq!(visible_text(&doc), "Hello");
    }

    #[test]
    fn guess_components_picks_first_long_lines_and_cta() {
        let text = "Acme Web Design Studio for growing brands\n\
                    short\n\
                    We craft sites that convert visitors\n\
                    Contact us today to get a free quote";
        let copy = guess_components(text);
        assert_eq!(copy.headline, "Acme Web Design Studio for growing brands");
        assert_eq!(copy.subheadline, "We craft sites that convert visitors");
        assert_eq!(copy.call_to_action, "Contact us today to get a free quote");
    }

    #[test]
    fn guess_components_works_on_scraped_lines() {
        let doc = Html::parse_document(
            "<html><body><h1>Acme Web Design Studio for growing brands</h1>\
             <p>We craft sites that convert visitors and customers</p>\
             <p>Contact us today to get a free quote</p></body></html>",
        );
        let copy = guess_components(&visible_lines(&doc));
        assert_eq!(copy.headline, "Acme Web Design Studio for growing brands");
        assert_eq!(copy.subheadline, "We craft sites that convert visitors and customers");
        assert_eq!(copy.call_to_action, "Contact us today to get a free quote");
    }

    #[test]
    fn guess_components_defaults_to_not_found() {
        let copy = guess_components("tiny");
        assert_eq!(copy.headline, "Not found");
        assert_eq!(copy.subheadline, "Not found");
        assert_eq!(copy.call_to_action, "Not found");
    }

    #[test]
    fn guess_components_counts_characters_not_bytes() {
        // 19 characters but 21 bytes: must not qualify as a long line.
        let text = "Qualität über alles\nThis is the real headline of the page";
        let copy = guess_components(text);
        assert_eq!(copy.headline, "This is the real headline of the page");
    }

    /// Serves one canned HTTP response on a loopback socket.
    async fn serve_once(body: String) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 2048];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn fetch_text_extracts_both_renderings() {
        let url = serve_once(
            "<html><body><h1>Welcome</h1><p>We build things.</p></body></html>".to_string(),
        )
        .await;
        let scraper = Scraper::new(3000).unwrap();
        let text = scraper.fetch_text(&url).await;
        assert_eq!(text.flat, "Welcome We build things.");
        assert_eq!(text.lines, "Welcome\nWe build things.");
    }

    #[tokio::test]
    async fn fetch_text_caps_length() {
        let page = format!("<html><body><p>{}</p></body></html>", "word ".repeat(2000));
        let url = serve_once(page).await;
        let scraper = Scraper::new(3000).unwrap();
        let text = scraper.fetch_text(&url).await;
        assert_eq!(text.flat.chars().count(), 3000);
        assert_eq!(text.lines.chars().count(), 3000);
    }

    #[tokio::test]
    async fn fetch_text_returns_error_marker_instead_of_panicking() {
        let scraper = Scraper::new(3000).unwrap();
        let text = scraper.fetch_text("not a url").await;
        assert!(text.is_error(), "unexpected: {}", text.flat);
        assert!(is_scrape_error(&text.lines));

        // nothing listens on this port
        let text = scraper.fetch_text("http://127.0.0.1:9/").await;
        assert!(text.is_error(), "unexpected: {}", text.flat);
    }
}
