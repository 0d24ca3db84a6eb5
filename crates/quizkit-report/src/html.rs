//! HTML results page generator.
//!
//! Produces a self-contained HTML file with all CSS inlined.

use anyhow::Result;
use std::path::Path;

use quizkit_core::model::BankSummary;
use quizkit_core::session::AnsweredRecord;
use quizkit_core::summary::QuizSummary;

/// Links shown under "Continue Learning".
const RESOURCES: &[(&str, &str, &str)] = &[
    (
        "Child Welfare Information Gateway",
        "childwelfare.gov",
        "https://www.childwelfare.gov",
    ),
    (
        "Centers for Disease Control and Prevention",
        "cdc.gov/violenceprevention",
        "https://www.cdc.gov/violenceprevention/childabuseandneglect/",
    ),
    (
        "Prevent Child Abuse America",
        "preventchildabuse.org",
        "https://preventchildabuse.org",
    ),
];

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate the results page for a completed quiz.
pub fn generate_html(summary: &QuizSummary, bank: &BankSummary) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>Quiz Results — {}</title>\n",
        html_escape(&bank.name)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>Quiz Results</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">Question bank: <strong>{}</strong> | {} of {} questions | {} | {}s</p>\n",
        html_escape(&bank.name),
        summary.requested_count,
        bank.question_count,
        summary.completed_at.format("%Y-%m-%d %H:%M:%S UTC"),
        summary.elapsed_secs()
    ));
    html.push_str("</header>\n");

    // Score card
    let color = summary.band.color();
    html.push_str(&format!(
        "<section class=\"score-card\" style=\"background-color: {color}15; border-color: {color};\">\n"
    ));
    html.push_str(&format!(
        "<h2 style=\"color: {color};\">Your Score: {}/{} ({:.0}%)</h2>\n",
        summary.score, summary.requested_count, summary.percentage
    ));
    html.push_str(&format!(
        "<p>{}</p>\n",
        html_escape(summary.band.message())
    ));
    let missed = summary.missed().count();
    if missed > 0 {
        html.push_str(&format!(
            "<p class=\"missed\">{missed} question(s) missed, marked ✗ below.</p>\n"
        ));
    }
    html.push_str("</section>\n");

    // Review
    html.push_str("<section class=\"review\">\n");
    html.push_str("<h2>Review Your Answers</h2>\n");
    for (i, record) in summary.answered_log.iter().enumerate() {
        html.push_str(&review_item(i + 1, record));
    }
    html.push_str("</section>\n");

    // Resources
    html.push_str("<section class=\"resources\">\n");
    html.push_str("<h2>Continue Learning</h2>\n<ul>\n");
    for (name, label, url) in RESOURCES {
        html.push_str(&format!(
            "<li><strong>{name}</strong> — <a href=\"{url}\">{label}</a></li>\n"
        ));
    }
    html.push_str("</ul>\n</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(&html_escape(
        &serde_json::to_string_pretty(summary).unwrap_or_default(),
    ));
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("</body>\n</html>");
    html
}

fn review_item(number: usize, record: &AnsweredRecord) -> String {
    let mut item = String::new();
    item.push_str(&format!(
        "<details class=\"{}\">\n<summary>Question {number}: {}</summary>\n",
        if record.is_correct { "correct" } else { "incorrect" },
        html_escape(&record.question_prompt)
    ));
    if record.is_correct {
        item.push_str(&format!(
            "<p><span class=\"correct-answer\">✓ You answered correctly:</span> {}</p>\n",
            html_escape(&record.user_answer)
        ));
    } else {
        item.push_str(&format!(
            "<p><span class=\"incorrect-answer\">✗ Your answer:</span> {}</p>\n",
            html_escape(&record.user_answer)
        ));
        item.push_str(&format!(
            "<p><span class=\"correct-answer\">✓ Correct answer:</span> {}</p>\n",
            html_escape(&record.correct_answer)
        ));
    }
    if !record.explanation.is_empty() {
        item.push_str(&format!(
            "<p><strong>Explanation:</strong> {}</p>\n",
            html_escape(&record.explanation)
        ));
    }
    item.push_str("</details>\n");
    item
}

/// Write the results page to a file.
pub fn write_html_report(summary: &QuizSummary, bank: &BankSummary, path: &Path) -> Result<()> {
    let html = generate_html(summary, bank);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

const CSS: &str = r#"
* { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; line-height: 1.6; color: #333; max-width: 900px; margin: 0 auto; padding: 20px; background: #fafafa; }
header { margin-bottom: 30px; border-bottom: 2px solid #e0e0e0; padding-bottom: 15px; }
h1 { font-size: 1.8em; color: #1a1a2e; }
h2 { font-size: 1.4em; margin: 20px 0 10px; color: #16213e; }
.meta { color: #666; font-size: 0.9em; }
.score-card { border: 2px solid; border-radius: 10px; padding: 20px; text-align: center; margin: 20px 0; }
.score-card h2 { margin-top: 0; }
.missed { color: #c0392b; }
.review details { background: white; border: 1px solid #e0e0e0; border-radius: 6px; margin: 8px 0; padding: 10px 14px; }
.review summary { cursor: pointer; font-weight: 600; }
.review p { margin: 6px 0; }
.correct-answer { color: #27ae60; font-weight: 600; }
.incorrect-answer { color: #c0392b; font-weight: 600; }
.resources ul { margin-left: 20px; }
.resources a { color: #2980b9; }
.raw-data { margin-top: 30px; }
.raw-data pre { background: #f5f5f5; padding: 15px; border-radius: 4px; overflow-x: auto; font-size: 0.85em; }
"#;
