//! The fixed advisor roster and the role → id lookup.

pub const FINANCIAL_EXPERT: &str = "financial_expert";
pub const MARKET_STRATEGIST: &str = "market_strategist";
pub const BUSINESS_MODEL_INNOVATOR: &str = "business_model_innovator";
pub const UNKNOWN_ADVISOR: &str = "unknown_advisor";

/// Ids of the configured advisors, in roster order.
pub const ADVISOR_IDS: [&str; 3] = [FINANCIAL_EXPERT, MARKET_STRATEGIST, BUSINESS_MODEL_INNOVATOR];

/// Static description of one advisor persona.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisorProfile {
    pub role: &'static str,
    pub goal: &'static str,
    pub backstory: &'static str,
}

impl AdvisorProfile {
    pub fn advisor_id(&self) -> &'static str {
        advisor_id_for(self.role)
    }

    /// System prompt establishing the persona.
    pub fn system_prompt(&self) -> String {
        format!(
            "You are the {}.\nYour goal: {}\n\n{}",
            self.role, self.goal, self.backstory
        )
    }
}

pub fn roster() -> Vec<AdvisorProfile> {
    vec![
        AdvisorProfile {
            role: "Financial Expert",
            goal: "Analyze business challenges from a financial perspective and provide capital allocation advice",
            backstory: "You are a seasoned financial expert with decades of experience in investment \
                banking and corporate finance. You excel at analyzing the financial implications of \
                business strategies and providing guidance on capital allocation, funding approaches, \
                and financial risk management.",
        },
        AdvisorProfile {
            role: "Market Strategist",
            goal: "Analyze market dynamics and provide strategic positioning advice",
            backstory: "You are an experienced market strategist who has helped numerous companies \
                navigate competitive landscapes and identify growth opportunities. You excel at \
                analyzing market trends, customer behavior, and competitive positioning to provide \
                actionable market strategies.",
        },
        AdvisorProfile {
            role: "Business Model Innovator",
            goal: "Provide innovative business model recommendations to address challenges",
            backstory: "You are a forward-thinking business model innovator who has helped transform \
                companies across various industries. You specialize in identifying opportunities for \
                value creation through innovative business models, revenue streams, and \
                organizational structures.",
        },
    ]
}

/// Stable machine-readable id for a role name. Unrecognized roles map to
/// [`UNKNOWN_ADVISOR`] rather than failing.
pub fn advisor_id_for(role: &str) -> &'static str {
    match role {
        "Financial Expert" => FINANCIAL_EXPERT,
        "Market Strategist" => MARKET_STRATEGIST,
        "Business Model Innovator" => BUSINESS_MODEL_INNOVATOR,
        _ => UNKNOWN_ADVISOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_ids_follow_fixed_order() {
        let ids: Vec<_> = roster().iter().map(AdvisorProfile::advisor_id).collect();
        assert_eq!(ids, ADVISOR_IDS);
    }

    #[test]
    fn unknown_role_maps_to_sentinel() {
        assert_eq!(advisor_id_for("Chief Vibes Officer"), UNKNOWN_ADVISOR);
        assert_eq!(advisor_id_for("financial expert"), UNKNOWN_ADVISOR);
        assert_eq!(advisor_id_for(""), UNKNOWN_ADVISOR);
    }

    #[test]
    fn system_prompt_carries_role_and_goal() {
        let profile = &roster()[1];
        let prompt = profile.system_prompt();
        assert!(prompt.contains("Market Strategist"));
        assert!(prompt.contains(profile.goal));
    }
}
