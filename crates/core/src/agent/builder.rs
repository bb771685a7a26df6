use calc_agent_model::ModelProvider;
use calc_agent_schema::ValidationError;

use super::{Agent, DEFAULT_SYSTEM_PROMPT};
use crate::model_client::ModelClient;
use crate::tool::{AnyTool, Executor as ToolExecutor, Tool, ToolObject};

/// [`Agent`] builder.
pub struct AgentBuilder {
    model_client: ModelClient,
    system_prompt: String,
    tools: Vec<Box<dyn ToolObject>>,
}

impl AgentBuilder {
    /// Creates a new builder with the specified model provider.
    #[inline]
    pub fn with_model_provider<P: ModelProvider + 'static>(
        provider: P,
    ) -> Self {
        Self {
            model_client: ModelClient::new(provider),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_owned(),
            tools: vec![],
        }
    }

    /// Sets the system prompt for the agent.
    #[inline]
    pub fn with_system_prompt<S: Into<String>>(mut self, prompt: S) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    /// Registers a tool.
    #[inline]
    pub fn with_tool<T: Tool>(mut self, tool: T) -> Self {
        let tool = Box::new(AnyTool(tool));
        self.tools.push(tool);
        self
    }

    /// Builds the agent.
    ///
    /// Fails when a registered tool's descriptor is malformed or when
    /// two tools share a name. Both are startup defects, not runtime
    /// conditions.
    pub fn build(self) -> Result<Agent, ValidationError> {
        let Self {
            model_client,
            system_prompt,
            tools,
        } = self;
        Ok(Agent {
            model_client,
            tool_executor: ToolExecutor::with_tools(tools)?,
            system_prompt,
        })
    }
}
