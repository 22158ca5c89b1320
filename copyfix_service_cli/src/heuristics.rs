use regex::Regex;

/// Case-insensitive presence check, matching against the lowercased text.
fn has(text: &str, pattern: &str) -> bool {
    Regex::new(pattern).unwrap().is_match(&text.to_lowercase())
}

/// Runs the fixed copywriting checks over the scraped text and returns the
/// first three warnings that fire, in table order.
pub fn copy_mistakes(text: &str) -> Vec<&'static str> {
    let checks: [(&'static str, fn(&str) -> bool); 12] = [
        (
            "⚠️ Very little copy found — add more text to explain what you do.",
            |t| t.chars().count() < 200,
        ),
        (
            "⚠️ Avoid long paragraphs — break content into shorter chunks or bullets.",
            |t| t.split('\n').any(|p| p.split_whitespace().count() > 40),
        ),
        (
            "⚠️ No clear CTA found — add a button like “Book Now” or “Start Free Trial”.",
            |t| !has(t, r"(book|contact|get started|schedule|learn more|order now|call now)"),
        ),
        (
            "⚠️ Lacks direct connection — speak to the reader using 'you' or 'we'.",
            |t| !has(t, r"\b(we|you|your|our)\b"),
        ),
        (
            "⚠️ Passive voice — try to make your sentences more direct and active.",
            |t| has(t, r"\b(is|was|were|be|been|being)\b\s+\w+ed"),
        ),
        (
            "⚠️ Missing social proof — add logos, testimonials, or partner names.",
            |t| !has(t, r"(trusted by|clients|testimonials|partners|case studies|reviews)"),
        ),
        (
            "⚠️ No mention of credentials or experience — add credibility markers.",
            |t| !has(t, r"(years|experience|certified|award|licensed)"),
        ),
        (
            "⚠️ No subheadline detected — clarify your offer beneath your main headline.",
            |t| t.split('\n').count() < 3,
        ),
        (
            "⚠️ No clear value proposition — highlight what makes you different.",
            |t| !has(t, r"(benefit|difference|why|value|solution)"),
        ),
        (
            "⚠️ Generic opening — skip 'welcome to our website' and get to the point.",
            |t| t.to_lowercase().contains("welcome to our website"),
        ),
        (
            "⚠️ Generic services — be specific about what you actually offer.",
            |t| {
                has(t, r"(services|solutions)")
                    && !has(
                        t,
                        r"(consulting|design|copywriting|marketing|cleaning|coaching|therapy|web|branding)",
                    )
            },
        ),
        (
            "⚠️ No location mentioned — add a city or region if you’re targeting locals.",
            |t| {
                !has(
                    t,
                    r"\b(new york|miami|chicago|los angeles|san francisco|houston|atlanta|boston|seattle|dallas|toronto|london)\b",
                )
            },
        ),
    ];

    checks
        .iter()
        .filter(|(_, check)| check(text))
        .map(|(message, _)| *message)
        .take(3)
        .collect()
}
