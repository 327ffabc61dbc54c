use crate::advisors::AdvisorProfile;
use crate::types::AdvisorTask;

impl AdvisorTask {
    /// Render the shared task template for one advisor and challenge.
    pub fn render(profile: &AdvisorProfile, challenge: &str) -> Self {
        let description = format!(
            r#"Analyze the following business challenge from your perspective as a {role}:

"{challenge}"

Provide your expert advice and recommendations.

At the end of your response, include numerical scores (from 1.0 to 10.0)
for the following aspects:
- Capital: Score reflecting capital requirements or financial impact
- Market: Score reflecting market opportunity or competitive advantage
- Model: Score reflecting business model innovation or structural changes

Format your scores section at the end like this:
"Scores: Capital: X.X, Market: X.X, Model: X.X""#,
            role = profile.role,
            challenge = challenge,
        );

        let expected_output = format!(
            "Detailed analysis of the challenge from a {} perspective, \
             with specific recommendations and clearly formatted scores.",
            profile.role.to_lowercase()
        );

        Self {
            role: profile.role.to_string(),
            description,
            expected_output,
        }
    }

    /// Full user-message text sent to the advisor.
    pub fn prompt(&self) -> String {
        format!("{}\n\nExpected output: {}", self.description, self.expected_output)
    }
}
