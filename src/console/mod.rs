use anyhow::Error;
use tokio::select;

use crate::dispatcher::Dispatcher;
use crate::types::ChallengeResult;

mod render;

/// How a console run ended. Failures have already been printed.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Completed(ChallengeResult),
    Cancelled,
    Failed,
}

/// One-shot console front end: run a challenge and print the advice.
pub struct Console {
    dispatcher: Dispatcher,
}

impl Console {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub fn display_welcome() {
        render::display_welcome();
    }

    pub fn display_loading(advisors: usize) {
        render::display_loading(advisors);
    }

    pub fn display_result(result: &ChallengeResult) {
        render::display_result(result);
    }

    pub fn display_error(error: &Error) {
        render::display_error(error);
    }

    pub fn display_cancelled() {
        render::display_cancelled();
    }

    /// Run the challenge through the crew. Ctrl+C abandons the in-flight request.
    pub async fn run(&self, challenge: &str) -> Outcome {
        Self::display_welcome();
        Self::display_loading(self.dispatcher.advisor_count());

        select! {
            _ = tokio::signal::ctrl_c() => {
                Self::display_cancelled();
                Outcome::Cancelled
            }
            result = self.dispatcher.consult(challenge) => {
                match result {
                    Ok(result) => {
                        Self::display_result(&result);
                        Outcome::Completed(result)
                    }
                    Err(e) => {
                        Self::display_error(&Error::new(e));
                        Outcome::Failed
                    }
                }
            }
        }
    }
}
