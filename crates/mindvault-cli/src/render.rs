//! Terminal output helpers.

use console::style;
use mindvault_agent::FeedbackResult;

/// Print feedback, structured if it parses, raw otherwise.
pub fn print_feedback(raw: &str) {
    match FeedbackResult::parse(raw) {
        Some(feedback) => {
            println!();
            println!("{}  {}", style("Mood:").bold(), feedback.mood);
            println!(
                "{}  {}/10",
                style("Clarity:").bold(),
                feedback.clarity_score
            );
            println!("{}  {}", style("Summary:").bold(), feedback.summary);
            println!("{}  {}", style("Insight:").bold(), feedback.insight);
            println!(
                "{}  {}",
                style("Tomorrow:").bold(),
                feedback.suggested_action
            );
        }
        None => {
            // The model is asked for JSON but not forced to produce it
            println!("\n{}", raw);
        }
    }
}

/// Print a generated answer.
pub fn print_answer(text: &str) {
    println!("\n{}", text);
}

/// Print a success note.
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}
