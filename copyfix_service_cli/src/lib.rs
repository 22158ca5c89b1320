pub mod ai;
pub mod heuristics;
pub mod scrape;
pub mod utils;

use serde::{Deserialize, Serialize};

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The fixed tone presets offered to the user, formatted as
/// "Label – description". Only the label before the en-dash is ever fed
/// into a prompt.
pub const TONE_OPTIONS: [&str; 7] = [
    "Professional – For B2B, finance, legal, or formal corporate audiences",
    "Confident – For tech and agencies — assertive, clear, and powerful",
    "Conversational – For friendly coaches and approachable service businesses",
    "Authoritative – For medical, consulting, and trust-heavy industries",
    "Persuasive – For sales pages, opt-ins, and funnels",
    "Luxury / Premium – For upscale brands: real estate, fashion, interior design",
    "Modern & Clean – For design-forward startups and minimal studios",
];

/// Strips the descriptive suffix from a tone option, leaving the bare label.
pub fn tone_label(option: &str) -> &str {
    option.split('–').next().unwrap_or(option).trim()
}

/// Finds the canonical tone label matching user input, if any. Accepts
/// either the bare label or a full "Label – description" option.
pub fn find_tone(input: &str) -> Option<&'static str> {
    let wanted = tone_label(input);
    TONE_OPTIONS
        .iter()
        .map(|option| tone_label(option))
        .find(|label| label.eq_ignore_ascii_case(wanted))
}

/// Copy rewritten by the model. Fields hold whatever text followed the
/// matching label in the response, or a placeholder when the label was
/// missing.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GeneratedCopy {
    pub headline: String,
    pub subheadline: String,
    pub call_to_action: String,
    pub suggestions: Vec<String>,
}

impl GeneratedCopy {
    /// The downloadable plain-text block.
    pub fn improved_block(&self) -> String {
        format!(
            "Headline: {}\nSubheadline: {}\nCall-to-Action: {}",
            self.headline, self.subheadline, self.call_to_action
        )
    }
}

/// Best-effort guess at the components of the existing page copy.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SiteCopy {
    pub headline: String,
    pub subheadline: String,
    pub call_to_action: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_label_strips_description() {
        assert_eq!(
            tone_label("Professional – For B2B, finance, legal, or formal corporate audiences"),
            "Professional"
        );
        assert_eq!(
            tone_label(
                "Luxury / Premium – For upscale brands: real estate, fashion, interior design"
            ),
            "Luxury / Premium"
        );
    }

    #[test]
    fn tone_label_without_dash_passes_through() {
        assert_eq!(tone_label("Persuasive"), "Persuasive");
    }

    #[test]
    fn every_option_yields_a_short_label() {
        for option in TONE_OPTIONS {
            let label = tone_label(option);
            assert!(!label.is_empty());
            assert!(!label.contains("For "), "label leaked its description: {label}");
        }
    }

    #[test]
    fn find_tone_accepts_label_and_full_option() {
        assert_eq!(find_tone("Confident"), Some("Confident"));
        assert_eq!(find_tone("confident"), Some("Confident"));
        assert_eq!(
            find_tone("Persuasive – For sales pages, opt-ins, and funnels"),
            Some("Persuasive")
        );
        assert_eq!(find_tone("Sarcastic"), None);
    }

    #[test]
    fn improved_block_is_three_labeled_lines() {
        let copy = GeneratedCopy {
            headline: "Build Better".into(),
            subheadline: "Fast results".into(),
            call_to_action: "Start now".into(),
            suggestions: vec![],
        };
        assert_eq!(
            copy.improved_block(),
            "Headline: Build Better\nSubheadline: Fast results\nCall-to-Action: Start now"
        );
    }
}
