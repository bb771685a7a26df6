use calc_agent_core::{Agent, AgentBuilder, ChatError};
use calc_agent_model::ModelProvider;
use calc_agent_schema::ValidationError;

use crate::tools::CalculatorTool;

const SYSTEM_PROMPT: &str = "You are a math assistant. Use the calculator \
                             tool to perform calculations.";

/// A session builder.
///
/// See [`Session`].
pub struct SessionBuilder {
    agent_builder: AgentBuilder,
}

impl SessionBuilder {
    /// Creates a session builder with a specified model provider.
    pub fn with_model_provider<M: ModelProvider + 'static>(
        provider: M,
    ) -> Self {
        let agent_builder = AgentBuilder::with_model_provider(provider)
            .with_system_prompt(SYSTEM_PROMPT);
        Self { agent_builder }
    }

    /// Overrides the default system prompt.
    #[inline]
    pub fn with_system_prompt<S: Into<String>>(mut self, prompt: S) -> Self {
        self.agent_builder = self.agent_builder.with_system_prompt(prompt);
        self
    }

    /// Builds a new session.
    pub fn build(self) -> Result<Session, ValidationError> {
        let agent = self
            .agent_builder
            .with_tool(CalculatorTool::new())
            .build()?;
        Ok(Session { agent })
    }
}

/// A chat session with the calculator agent.
///
/// The session holds a fully configured agent that you can use directly,
/// and it is basically a wrapper around [`Agent`]. Each message is an
/// independent exchange; the agent keeps no memory between them.
pub struct Session {
    agent: Agent,
}

impl Session {
    /// Sends one message and returns the model's final answer.
    #[inline]
    pub async fn send(&self, message: &str) -> Result<String, ChatError> {
        self.agent.chat(message).await
    }
}
