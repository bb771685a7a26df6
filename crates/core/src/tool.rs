//! Tool call supports.

mod error;
mod executor;

use std::future::ready;
use std::pin::Pin;

use calc_agent_schema::{ObjectSchema, validate_as};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub use error::{Error, ErrorKind};
pub(crate) use executor::Executor;

/// The result of a tool call.
pub type ToolResult = Result<String, Error>;

/// A tool that can be called by the model.
///
/// Implementations of this trait should be stateless, and may not maintain
/// any internal state.
///
/// A tool declares the shape of its input and output as
/// [`ObjectSchema`]s. The dispatch layer validates untyped arguments
/// against the input schema before the tool ever sees them, and
/// re-validates the produced output against the output schema before it
/// is serialized back to the model. A tool therefore never returns a
/// value that violates its own declared contract, even to a remote,
/// untyped caller.
pub trait Tool: Send + Sync + 'static {
    /// The type of input that the tool accepts.
    type Input: DeserializeOwned;

    /// The type of output that the tool produces.
    type Output: Serialize + Send;

    /// Returns the name of the tool.
    fn name(&self) -> &str;

    /// Returns the description of the tool.
    fn description(&self) -> &str;

    /// Returns the declared shape of the tool's input.
    fn input_schema(&self) -> &ObjectSchema;

    /// Returns the declared shape of the tool's output.
    fn output_schema(&self) -> &ObjectSchema;

    /// Executes the tool with the given input.
    ///
    /// This method must return a future that is fully independent of `self`,
    /// and the future should be cancellation safe.
    fn execute(
        &self,
        input: Self::Input,
    ) -> impl Future<Output = Result<Self::Output, Error>> + Send + 'static;
}

pub(crate) trait ToolObject: Send + Sync + 'static {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn input_schema(&self) -> &ObjectSchema;

    fn execute(
        &self,
        arguments: Value,
    ) -> Pin<Box<dyn Future<Output = ToolResult> + Send>>;
}

pub(crate) struct AnyTool<T: Tool>(pub T);

impl<T: Tool> ToolObject for AnyTool<T> {
    #[inline]
    fn name(&self) -> &str {
        self.0.name()
    }

    #[inline]
    fn description(&self) -> &str {
        self.0.description()
    }

    #[inline]
    fn input_schema(&self) -> &ObjectSchema {
        self.0.input_schema()
    }

    fn execute(
        &self,
        arguments: Value,
    ) -> Pin<Box<dyn Future<Output = ToolResult> + Send>> {
        let context = format!("{} input", self.0.name());
        let input: T::Input =
            match validate_as(self.0.input_schema(), &arguments, &context) {
                Ok(input) => input,
                Err(err) => {
                    return Box::pin(ready(ToolResult::Err(
                        Error::invalid_input().with_reason(err.to_string()),
                    )));
                }
            };

        let output_schema = self.0.output_schema().clone();
        let output_context = format!("{} output", self.0.name());
        let fut = self.0.execute(input);
        Box::pin(async move {
            let output = fut.await?;
            let value = serde_json::to_value(&output).map_err(|err| {
                Error::execution_error().with_reason(format!("{err}"))
            })?;
            // Failing the declared output contract is a bug in the tool
            // itself, not in the caller.
            output_schema.validate(&value, &output_context).map_err(
                |err| Error::execution_error().with_reason(err.to_string()),
            )?;
            Ok(value.to_string())
        })
    }
}
