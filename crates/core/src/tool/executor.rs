use std::collections::HashMap;
use std::fmt;

use calc_agent_model::{ModelTool, ToolCallRequest, ToolCallResult};
use calc_agent_schema::{Issue, ValidationError, validate_descriptor};
use serde_json::{Value, json};

use crate::tool::{Error, ToolObject, ToolResult};

/// An executor that handles tool call requests from the model.
pub(crate) struct Executor {
    tools: HashMap<String, Box<dyn ToolObject>>,
    definitions: Vec<ModelTool>,
}

impl fmt::Debug for Executor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Executor")
            .field("tools", &self.tools.keys().collect::<Vec<_>>())
            .field("definitions", &self.definitions)
            .finish()
    }
}

impl Executor {
    /// Builds an executor, checking every tool's descriptor identity
    /// and name uniqueness up front. Both failures are startup
    /// defects.
    pub fn with_tools(
        tools: Vec<Box<dyn ToolObject>>,
    ) -> Result<Self, ValidationError> {
        let mut tool_map = HashMap::with_capacity(tools.len());
        let mut definitions = Vec::with_capacity(tools.len());
        for tool in tools {
            validate_descriptor(tool.name(), tool.description())?;
            definitions.push(ModelTool {
                name: tool.name().to_owned(),
                description: tool.description().to_owned(),
                parameters: tool.input_schema().to_parameters(),
            });

            let name = tool.name().to_owned();
            if tool_map.insert(name.clone(), tool).is_some() {
                return Err(ValidationError::new(
                    "validation failed in tool descriptor",
                    vec![Issue::new("name", format!("duplicate tool: {name}"))],
                ));
            }
        }
        Ok(Self {
            tools: tool_map,
            definitions,
        })
    }

    #[inline]
    pub fn definitions(&self) -> &[ModelTool] {
        &self.definitions
    }

    /// Handles one tool call request, always producing a paired result.
    ///
    /// Failures are contained here: a failing call becomes a result
    /// message carrying a serialized error object, so one bad call can
    /// not abort the conversation. A request naming an unknown tool
    /// gets an explicit error result for the same reason, since the
    /// provider requires every request to be answered.
    pub async fn dispatch(&self, req: &ToolCallRequest) -> ToolCallResult {
        let content = match self.run(req).await {
            Ok(content) => content,
            Err(err) => {
                warn!("tool call {} failed: {}", req.id, err.reason());
                json!({ "error": err.reason() }).to_string()
            }
        };
        ToolCallResult {
            id: req.id.clone(),
            content,
        }
    }

    async fn run(&self, req: &ToolCallRequest) -> ToolResult {
        let Some(tool) = self.tools.get(&req.name) else {
            return Err(Error::unknown_tool()
                .with_reason(format!("unknown tool: {}", req.name)));
        };
        let arguments: Value =
            serde_json::from_str(&req.arguments).map_err(|err| {
                Error::invalid_input()
                    .with_reason(format!("malformed argument payload: {err}"))
            })?;
        trace!(
            "running tool {} ({}) with args: {arguments:?}",
            req.name, req.id
        );
        tool.execute(arguments).await
    }
}
