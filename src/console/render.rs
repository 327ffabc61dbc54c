use anyhow::Error;
use colored::*;

use crate::agents::AgentError;
use crate::dispatcher::DispatchError;
use crate::llm::LlmError;
use crate::types::{AdvisorResponse, AdvisorScores, ChallengeResult};

pub fn display_welcome() {
    println!("{}", "💼 Business Advisor Crew".bright_blue().bold());
    println!(
        "{}",
        "Your challenge is sent to each advisor in parallel; every advisor answers with advice and scores."
            .blue()
    );
}

pub fn display_loading(advisors: usize) {
    println!(
        "{}",
        format!("🔄 Consulting {} advisors. This may take a few minutes...", advisors)
            .blue()
            .italic()
    );
}

pub fn display_result(result: &ChallengeResult) {
    println!("\n{} {}", "🗒️  Challenge:".bright_yellow().bold(), result.challenge.white());
    println!("\n{}\n", "===== ADVISOR RESPONSES =====".bright_green().bold());

    for response in &result.advisor_responses {
        display_advisor(response);
    }

    let pretty = serde_json::to_string_pretty(result).unwrap_or_else(|_| format!("{:?}", result));
    println!("{}", "🧾 JSON Output:".bright_green().bold());
    println!("{}\n", pretty);
}

fn display_advisor(response: &AdvisorResponse) {
    println!(
        "{} {}",
        "🧑‍💼 Advisor:".cyan().bold(),
        response.advisor_id.bright_white().bold()
    );
    println!("{}", "┌─────────────────────────────────────────────────────────────".cyan());
    for line in response.response.lines() {
        println!("{} {}", "│".cyan(), line.white());
    }
    println!("{}", "├─────────────────────────────────────────────────────────────".cyan());
    println!("{} {}", "│ 📊 Scores:".cyan(), format_scores(&response.scores));
    println!("{}", "└─────────────────────────────────────────────────────────────\n".cyan());
}

fn format_scores(scores: &AdvisorScores) -> String {
    format!(
        "Capital: {}, Market: {}, Model: {}",
        score_colored(scores.capital),
        score_colored(scores.market),
        score_colored(scores.model)
    )
}

fn score_colored(score: f64) -> ColoredString {
    let text = format!("{:.1}", score);
    if score >= 7.0 {
        text.bright_green().bold()
    } else if score >= 4.0 {
        text.bright_yellow()
    } else {
        text.bright_red()
    }
}

pub fn display_error(error: &Error) {
    println!("{} {}", "❌ Error:".bright_red().bold(), error.to_string().red());

    let llm_error = error.downcast_ref::<DispatchError>().and_then(|e| match e {
        DispatchError::Advisor { source: AgentError::Llm(llm), .. } => Some(llm),
        _ => None,
    });

    let tip = match llm_error {
        Some(LlmError::ServerBusy { .. }) => "💡 Tip: Try again in a few minutes when server load is lower.",
        Some(LlmError::NetworkError { .. }) => "💡 Tip: Check your internet connection and firewall settings.",
        Some(LlmError::Timeout { .. }) => "💡 Tip: Raise LLM_TIMEOUT_SECS or try again later.",
        Some(LlmError::ApiError { status: 401, .. }) => "💡 Tip: Check your LLM_API_KEY environment variable.",
        Some(LlmError::ApiError { status: 404, .. }) => "💡 Tip: Check LLM_BASE_URL and the configured model names.",
        Some(LlmError::ApiError { status: 429, .. }) => "💡 Tip: You've hit the rate limit. Wait before trying again.",
        Some(_) => "💡 Tip: Check the provider's API documentation for more details.",
        None => "Please check your configuration and try again.",
    };
    println!("{}\n", tip.red());
}

pub fn display_cancelled() {
    println!("\n{}", "⚠️ Request cancelled by user".bright_yellow().bold());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_formatting_uses_one_decimal() {
        colored::control::set_override(false);
        let scores = AdvisorScores { capital: 7.5, market: 5.0, model: 10.0 };
        assert_eq!(format_scores(&scores), "Capital: 7.5, Market: 5.0, Model: 10.0");
    }
}
