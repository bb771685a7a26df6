//! The built-in tools that models can use.

mod calculator;

pub use calculator::{
    CalculatorInput, CalculatorOutput, CalculatorTool, DivisionByZero,
    Operation, evaluate,
};
