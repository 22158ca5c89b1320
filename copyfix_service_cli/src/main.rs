use clap::Parser;
use copyfix_service_cli::{
    ai::{split_tips_intro, CopyGenerator},
    find_tone, heuristics,
    scrape::{guess_components, Scraper},
    utils, BoxError, TONE_OPTIONS,
};
use dotenv::dotenv;
use std::env;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// URL of the business website to analyze
    #[arg(short, long)]
    url: String,

    /// Tone for the rewritten copy (one of the fixed presets)
    #[arg(short, long, default_value = "Professional")]
    tone: String,

    /// Maximum characters of page text to analyze
    #[arg(short, long, default_value_t = 3000)]
    max_text_length: usize,

    /// Skip the extra messaging-tips call
    #[arg(short, long)]
    skip_tips: bool,
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    dotenv().ok();
    let api_key = env::var("OPENROUTER_API_KEY")
        .expect("OPENROUTER_API_KEY environment variable not set");

    let args = Args::parse();

    let tone = match find_tone(&args.tone) {
        Some(tone) => tone,
        None => {
            eprintln!("❌ Unknown tone '{}'. Available tones:", args.tone);
            for option in TONE_OPTIONS {
                eprintln!("   {}", option);
            }
            std::process::exit(1);
        }
    };

    // 1) Fetch the page text
    let scraper = Scraper::new(args.max_text_length)?;
    let text = scraper.fetch_text(&args.url).await;
    if text.is_error() {
        eprintln!("❌ {}", text.flat);
        std::process::exit(1);
    }

    // 2) Guess the current copy and flag common mistakes
    let original = guess_components(&text.lines);
    let mistakes = heuristics::copy_mistakes(&text.lines);

    // 3) Ask the model for the rewrite
    let generator = CopyGenerator::new(api_key);
    let improved = generator.improve_copy(&text.flat, tone).await?;

    println!("🔴 Original copy (guessed)");
    println!("   Headline: {}", original.headline);
    println!("   Subheadline: {}", original.subheadline);
    println!("   Call-to-Action: {}", original.call_to_action);
    println!();
    println!("✅ Improved copy ({} tone)", tone);
    println!("   Headline: {}", improved.headline);
    println!("   Subheadline: {}", improved.subheadline);
    println!("   Call-to-Action: {}", improved.call_to_action);
    if !improved.suggestions.is_empty() {
        println!();
        println!("💡 Suggestions");
        for (i, suggestion) in improved.suggestions.iter().enumerate() {
            println!("   {}. {}", i + 1, suggestion);
        }
    }
    for mistake in &mistakes {
        println!("🚩 {}", mistake);
    }

    // 4) Optional second call for broader messaging tips
    let tips = if args.skip_tips {
        Vec::new()
    } else {
        match generator.improvement_tips(&text.flat, tone).await {
            Ok(tips) => tips,
            Err(e) => vec![format!("⚠️ Could not generate suggestions: {}", e)],
        }
    };
    let (intro, tips) = split_tips_intro(tips);
    if let Some(intro) = intro {
        println!("💬 {}", intro);
    }
    for (i, tip) in tips.iter().enumerate() {
        println!("   {}. {}", i + 1, tip);
    }

    // 5) Save the results
    utils::save_text(&improved.improved_block(), "improved_website_copy.txt")?;
    let report = serde_json::json!({
        "url": args.url,
        "tone": tone,
        "original": original,
        "improved": improved,
        "mistakes": mistakes,
        "tips": tips,
    });
    utils::save_json(&report, "copy_report.json")?;

    Ok(())
}
