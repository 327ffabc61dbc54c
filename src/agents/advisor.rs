use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::advisors::AdvisorProfile;
use crate::llm::{ChatBackend, ChatMessage};
use crate::types::{AdvisorTask, RawAdvisorOutput};

use super::{Agent, AgentError};

/// One advisor persona bound to the chat backend that answers for it.
#[derive(Clone)]
pub struct AdvisorAgent {
    profile: AdvisorProfile,
    backend: Arc<dyn ChatBackend>,
}

impl AdvisorAgent {
    pub fn new(profile: AdvisorProfile, backend: Arc<dyn ChatBackend>) -> Self {
        Self { profile, backend }
    }

    pub fn profile(&self) -> &AdvisorProfile {
        &self.profile
    }
}

#[async_trait]
impl Agent for AdvisorAgent {
    type Input = AdvisorTask;
    type Output = RawAdvisorOutput;

    async fn execute(&self, task: &Self::Input) -> Result<Self::Output, AgentError> {
        let messages = vec![
            ChatMessage::system(self.profile.system_prompt()),
            ChatMessage::user(task.prompt()),
        ];

        info!(
            "{}: sending task to model {}",
            self.profile.role,
            self.backend.model()
        );
        let text = self.backend.complete(messages).await?;
        debug!("{}: received {} bytes", self.profile.role, text.len());

        Ok(RawAdvisorOutput {
            role: task.role.clone(),
            text,
        })
    }
}
