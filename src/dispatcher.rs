use std::sync::Arc;

use futures::future::try_join_all;
use thiserror::Error;
use tracing::{info, warn};

use crate::advisors::roster;
use crate::agents::{AdvisorAgent, Agent, AgentError};
use crate::config::Config;
use crate::llm::{LlmClient, LlmError};
use crate::normalizer::normalize;
use crate::types::{AdvisorTask, ChallengeResult};

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Challenge text cannot be empty")]
    EmptyChallenge,

    #[error("No advisors configured")]
    NoAdvisors,

    #[error("{role} failed: {source}")]
    Advisor {
        role: String,
        #[source]
        source: AgentError,
    },
}

/// Fans a challenge out to every advisor and joins their answers.
pub struct Dispatcher {
    agents: Vec<AdvisorAgent>,
}

impl Dispatcher {
    pub fn new(agents: Vec<AdvisorAgent>) -> Self {
        Self { agents }
    }

    /// One client per roster entry, each on its own (possibly overridden) model.
    pub fn from_config(config: &Config) -> Result<Self, LlmError> {
        let base = LlmClient::new(config.clone())?;
        let agents = roster()
            .into_iter()
            .map(|profile| {
                let client = base.with_model(config.model_for(profile.advisor_id()));
                info!("{} uses model {}", profile.role, config.model_for(profile.advisor_id()));
                AdvisorAgent::new(profile, Arc::new(client))
            })
            .collect();
        Ok(Self::new(agents))
    }

    pub fn advisor_count(&self) -> usize {
        self.agents.len()
    }

    /// Run the challenge through all advisors concurrently.
    ///
    /// Results come back in roster order. Any advisor failure fails the whole
    /// call; partial results are never returned.
    pub async fn consult(&self, challenge: &str) -> Result<ChallengeResult, DispatchError> {
        if challenge.trim().is_empty() {
            return Err(DispatchError::EmptyChallenge);
        }
        if self.agents.is_empty() {
            return Err(DispatchError::NoAdvisors);
        }

        info!("Dispatching challenge to {} advisors", self.agents.len());

        let invocations = self.agents.iter().map(|agent| {
            let task = AdvisorTask::render(agent.profile(), challenge);
            async move {
                let role = agent.profile().role;
                match agent.execute(&task).await {
                    Ok(output) => {
                        info!("{} responded", role);
                        Ok(output)
                    }
                    Err(source) => {
                        warn!("{} failed: {}", role, source);
                        Err(DispatchError::Advisor { role: role.to_string(), source })
                    }
                }
            }
        });

        let outputs = try_join_all(invocations).await?;

        Ok(ChallengeResult {
            challenge: challenge.to_string(),
            advisor_responses: outputs.iter().map(normalize).collect(),
        })
    }
}
