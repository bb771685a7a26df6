use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::future::ready;

use calc_agent_core::tool::{Error as ToolError, Tool};
use calc_agent_schema::{Field, ObjectSchema};
use serde::{Deserialize, Serialize};

/// One of the four supported arithmetic operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// `a + b`.
    Add,
    /// `a - b`.
    Subtract,
    /// `a * b`.
    Multiply,
    /// `a / b`, defined for a non-zero divisor.
    Divide,
}

impl Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        };
        write!(f, "{name}")
    }
}

/// What the calculator accepts.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct CalculatorInput {
    /// The operation to perform.
    pub operation: Operation,
    /// First operand.
    pub a: f64,
    /// Second operand.
    pub b: f64,
}

/// What the calculator returns.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CalculatorOutput {
    /// The computed value.
    pub result: f64,
    /// A stable, human-readable sentence describing the computation.
    pub explanation: String,
}

/// Division by zero was requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DivisionByZero;

impl Display for DivisionByZero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "division by zero is not allowed")
    }
}

impl StdError for DivisionByZero {}

/// Applies `operation` to the operands.
pub fn evaluate(
    operation: Operation,
    a: f64,
    b: f64,
) -> Result<f64, DivisionByZero> {
    match operation {
        Operation::Add => Ok(a + b),
        Operation::Subtract => Ok(a - b),
        Operation::Multiply => Ok(a * b),
        Operation::Divide => {
            if b == 0.0 {
                return Err(DivisionByZero);
            }
            Ok(a / b)
        }
    }
}

/// A tool performing the four basic arithmetic operations.
pub struct CalculatorTool {
    input_schema: ObjectSchema,
    output_schema: ObjectSchema,
}

impl CalculatorTool {
    /// Creates a new calculator tool.
    pub fn new() -> Self {
        Self {
            input_schema: ObjectSchema::builder()
                .field(
                    "operation",
                    Field::enumeration([
                        "add", "subtract", "multiply", "divide",
                    ])
                    .describe("The operation to perform"),
                )
                .field("a", Field::number().describe("First operand"))
                .field("b", Field::number().describe("Second operand"))
                .build(),
            output_schema: ObjectSchema::builder()
                .field("result", Field::number())
                .field("explanation", Field::text().min_len(1))
                .build(),
        }
    }
}

impl Default for CalculatorTool {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for CalculatorTool {
    type Input = CalculatorInput;
    type Output = CalculatorOutput;

    fn name(&self) -> &str {
        "calculator"
    }

    fn description(&self) -> &str {
        "Performs basic arithmetic operations on two numbers."
    }

    fn input_schema(&self) -> &ObjectSchema {
        &self.input_schema
    }

    fn output_schema(&self) -> &ObjectSchema {
        &self.output_schema
    }

    fn execute(
        &self,
        input: Self::Input,
    ) -> impl Future<Output = Result<Self::Output, ToolError>> + Send + 'static
    {
        let CalculatorInput { operation, a, b } = input;
        let output = evaluate(operation, a, b)
            .map(|result| CalculatorOutput {
                result,
                explanation: format!(
                    "The operation {a} {operation} {b} resulted in {result}."
                ),
            })
            .map_err(|err| {
                ToolError::execution_error().with_reason(format!("{err}"))
            });
        ready(output)
    }
}

#[cfg(test)]
mod tests {
    use calc_agent_schema::validate_as;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_evaluate() {
        assert_eq!(evaluate(Operation::Add, 2.0, 3.0), Ok(5.0));
        assert_eq!(evaluate(Operation::Subtract, 2.0, 3.0), Ok(-1.0));
        assert_eq!(evaluate(Operation::Multiply, 15.0, 23.0), Ok(345.0));
        assert_eq!(evaluate(Operation::Divide, 10.0, 4.0), Ok(2.5));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            evaluate(Operation::Divide, 10.0, 0.0),
            Err(DivisionByZero)
        );
    }

    #[tokio::test]
    async fn test_explanation_mentions_everything() {
        let tool = CalculatorTool::new();
        let output = tool
            .execute(CalculatorInput {
                operation: Operation::Multiply,
                a: 15.0,
                b: 23.0,
            })
            .await
            .unwrap();
        assert_eq!(output.result, 345.0);
        assert!(output.explanation.contains("15"));
        assert!(output.explanation.contains("multiply"));
        assert!(output.explanation.contains("23"));
        assert!(output.explanation.contains("345"));
    }

    #[tokio::test]
    async fn test_divide_by_zero_produces_no_output() {
        let tool = CalculatorTool::new();
        let err = tool
            .execute(CalculatorInput {
                operation: Operation::Divide,
                a: 10.0,
                b: 0.0,
            })
            .await
            .unwrap_err();
        assert!(err.reason().contains("division by zero"));
    }

    #[test]
    fn test_input_schema_narrows_untyped_arguments() {
        let tool = CalculatorTool::new();
        let input: CalculatorInput = validate_as(
            tool.input_schema(),
            &json!({ "operation": "divide", "a": 10, "b": 4 }),
            "calculator input",
        )
        .unwrap();
        assert_eq!(input.operation, Operation::Divide);

        let err = validate_as::<CalculatorInput>(
            tool.input_schema(),
            &json!({ "operation": "modulo", "a": 10, "b": 4 }),
            "calculator input",
        )
        .unwrap_err();
        assert_eq!(err.issues()[0].path, "operation");
    }

    #[test]
    fn test_output_satisfies_declared_schema() {
        let tool = CalculatorTool::new();
        let output = CalculatorOutput {
            result: 345.0,
            explanation: "The operation 15 multiply 23 resulted in 345."
                .to_owned(),
        };
        let value = serde_json::to_value(&output).unwrap();
        tool.output_schema()
            .validate(&value, "calculator output")
            .unwrap();
    }
}
