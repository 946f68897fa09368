use std::io::IsTerminal;

use owo_colors::OwoColorize;

use crate::scoring::{Qualification, ScoreBreakdown, ScoringConfig};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format the itemized breakdown plus the qualification verdict.
/// One line per contributing question, then the total against the threshold.
pub fn format_breakdown(
    breakdown: &ScoreBreakdown,
    config: &ScoringConfig,
    qualification: Qualification,
    tag: &str,
    use_colors: bool,
) -> String {
    let mut lines = Vec::new();

    if breakdown.items.is_empty() {
        lines.push("No scoring answers contributed points.".to_string());
    }

    for item in &breakdown.items {
        if use_colors {
            lines.push(format!(
                "{:<30} {}",
                item.question,
                format!("+{}", item.points).green()
            ));
        } else {
            lines.push(format!("{:<30} +{}", item.question, item.points));
        }
    }

    let verdict = format!(
        "Score: {} (threshold {}) -> {} [{}]",
        breakdown.total, config.threshold, qualification, tag
    );
    if use_colors {
        let colored = match qualification {
            Qualification::Qualified => verdict.green().bold().to_string(),
            Qualification::Unqualified => verdict.yellow().to_string(),
        };
        lines.push(colored);
    } else {
        lines.push(verdict);
    }

    lines.join("\n")
}
