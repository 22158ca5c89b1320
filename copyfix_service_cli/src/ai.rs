use crate::{BoxError, GeneratedCopy};
use regex::Regex;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::json;

const API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
const MODEL: &str = "mistralai/mistral-7b-instruct:free";
const NOT_FOUND: &str = "(Not found in AI response.)";

pub struct CopyGenerator {
    client: reqwest::Client,
    api_key: String,
}

impl CopyGenerator {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
        }
    }

    /// Rewrites the page copy in the given tone. The model is asked for a
    /// fixed labeled format; fields it fails to label come back as
    /// placeholders.
    pub async fn improve_copy(&self, text: &str, tone: &str) -> Result<GeneratedCopy, BoxError> {
        let prompt = rewrite_prompt(text, tone);
        let content = self
            .chat(json!([{ "role": "user", "content": prompt }]))
            .await?;
        Ok(parse_copy(&content))
    }

    /// Asks for 10 broader messaging tips as a numbered list.
    pub async fn improvement_tips(&self, text: &str, tone: &str) -> Result<Vec<String>, BoxError> {
        let prompt = tips_prompt(text, tone);
        let content = self
            .chat(json!([
                {
                    "role": "system",
                    "content": "You are a marketing expert that helps businesses improve website copy."
                },
                { "role": "user", "content": prompt }
            ]))
            .await?;
        Ok(parse_tips(&content))
    }

    async fn chat(&self, messages: serde_json::Value) -> Result<String, BoxError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "HTTP-Referer",
            HeaderValue::from_static("https://websitecopyfixer.app"),
        );
        headers.insert("X-Title", HeaderValue::from_static("Website Copy Fixer"));

        let payload = json!({
            "model": MODEL,
            "messages": messages,
        });

        let response = self
            .client
            .post(API_URL)
            .headers(headers)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let data = response.json::<serde_json::Value>().await?;
        if !status.is_success() {
            return Err(format!("Error from OpenRouter: {}", data).into());
        }

        let content = data["choices"][0]["message"]["content"]
            .as_str()
            .ok_or("Error from OpenRouter: response had no message content")?;
        Ok(content.to_string())
    }
}

fn rewrite_prompt(text: &str, tone: &str) -> String {
    format!(
        "You are a website copy expert. Analyze the business website content below and rewrite:\n\
         \n\
         1. A clearer, more persuasive Headline (in a **{}** tone).\n\
         2. A benefit-driven Subheadline.\n\
         3. A motivating Call-to-Action.\n\
         4. Then, suggest 3-5 ways to improve the site's messaging.\n\
         \n\
         Website Content:\n\
         \"\"\"\n\
         {}\n\
         \"\"\"\n\
         \n\
         Return your response in this format:\n\
         \n\
         Headline: ...\n\
         Subheadline: ...\n\
         Call-to-Action: ...\n\
         Suggestions:\n\
         - ...\n\
         - ...\n\
         - ...",
        tone.to_lowercase(),
        text
    )
}

fn tips_prompt(text: &str, tone: &str) -> String {
    format!(
        "You are a website copy expert. The following is the content of a business homepage. \
         Please generate 10 specific, advanced suggestions to improve the site's messaging. \
         Each tip should be unique, detailed, and written for a {} tone. Be practical and \
         include specific ideas, but avoid repeating headlines, subheadlines, or CTA fixes. \
         Format as a numbered list:\n\n{}",
        tone, text
    )
}

/// Slices the labeled fields out of the free-text model response.
pub fn parse_copy(content: &str) -> GeneratedCopy {
    GeneratedCopy {
        headline: extract_section(content, "Headline:"),
        subheadline: extract_section(content, "Subheadline:"),
        call_to_action: extract_section(content, "Call-to-Action:"),
        suggestions: extract_suggestions(content),
    }
}

/// Returns the text between `label` and the next line break, or the fixed
/// placeholder when the label is absent.
pub fn extract_section(text: &str, label: &str) -> String {
    match text.find(label) {
        Some(pos) => {
            let rest = &text[pos + label.len()..];
            match rest.find('\n') {
                Some(end) => rest[..end].trim().to_string(),
                None => rest.trim().to_string(),
            }
        }
        None => NOT_FOUND.to_string(),
    }
}

/// Collects the dash-bulleted lines after the last "Suggestions:" label.
pub fn extract_suggestions(text: &str) -> Vec<String> {
    match text.rfind("Suggestions:") {
        Some(pos) => text[pos + "Suggestions:".len()..]
            .trim()
            .lines()
            .map(|line| line.trim_matches(|c| c == '-' || c == ' ').trim().to_string())
            .filter(|line| !line.is_empty())
            .collect(),
        None => Vec::new(),
    }
}

/// The model usually opens the tips response with a lead-in like "Here are
/// 10 suggestions to improve ...". Pulls that line out so numbering starts
/// at the first actual tip.
pub fn split_tips_intro(mut tips: Vec<String>) -> (Option<String>, Vec<String>) {
    let has_intro = tips
        .first()
        .map_or(false, |tip| tip.to_lowercase().contains("suggestions to improve"));
    if has_intro {
        let intro = tips.remove(0);
        (Some(intro), tips)
    } else {
        (None, tips)
    }
}

/// Keeps each non-blank line of the tips response, minus its "1." / "2)"
/// numbering.
pub fn parse_tips(content: &str) -> Vec<String> {
    let numbering = Regex::new(r"^\s*\d+[.)]\s*").unwrap();
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| numbering.replace(line, "").to_string())
        .collect()
}
