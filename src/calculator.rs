//! Sample business logic: a four-operation calculator.
//!
//! Stands in for real work behind the [`Processor`] seam.

use std::str::FromStr;

use thiserror::Error;

use crate::config::ValidatedConfig;
use crate::error::ProcessingError;
use crate::executor::Processor;
use crate::input::ApplicationInput;

#[derive(Debug, Error, PartialEq)]
pub enum CalculationError {
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Division by zero")]
    DivisionByZero,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl FromStr for Operation {
    type Err = CalculationError;

    /// Case-insensitive operation name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ADD" => Ok(Operation::Add),
            "SUBTRACT" => Ok(Operation::Subtract),
            "MULTIPLY" => Ok(Operation::Multiply),
            "DIVIDE" => Ok(Operation::Divide),
            _ => Err(CalculationError::UnknownOperation(s.to_string())),
        }
    }
}

/// A calculation to perform.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationRequest {
    pub operand_a: f64,
    pub operand_b: f64,
    /// ADD, SUBTRACT, MULTIPLY or DIVIDE, in any case.
    pub operation: String,
}

impl CalculationRequest {
    pub fn new(operand_a: f64, operand_b: f64, operation: impl Into<String>) -> Self {
        Self {
            operand_a,
            operand_b,
            operation: operation.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalculationResult {
    pub result: f64,
    /// The operation as it was requested.
    pub operation: String,
}

pub fn calculate(request: &CalculationRequest) -> Result<CalculationResult, CalculationError> {
    let a = request.operand_a;
    let b = request.operand_b;
    let result = match request.operation.parse::<Operation>()? {
        Operation::Add => a + b,
        Operation::Subtract => a - b,
        Operation::Multiply => a * b,
        Operation::Divide => {
            if b == 0.0 {
                return Err(CalculationError::DivisionByZero);
            }
            a / b
        }
    };

    Ok(CalculationResult {
        result,
        operation: request.operation.clone(),
    })
}

/// Default processor for the binary: adds 10 and 5 and logs the result.
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleCalculation;

impl Processor for SampleCalculation {
    fn process(&self, _config: &ValidatedConfig, _input: &ApplicationInput) -> Result<(), ProcessingError> {
        let request = CalculationRequest::new(10.0, 5.0, "ADD");
        let result = calculate(&request)?;
        tracing::info!(
            operation = %result.operation,
            result = result.result,
            "Sample calculation finished"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operations() {
        let cases = [("ADD", 15.0), ("subtract", 5.0), ("Multiply", 50.0), ("DIVIDE", 2.0)];
        for (operation, expected) in cases {
            let result = calculate(&CalculationRequest::new(10.0, 5.0, operation)).unwrap();
            assert_eq!(result.result, expected, "{operation}");
            assert_eq!(result.operation, operation);
        }
    }

    #[test]
    fn test_division_by_zero() {
        let err = calculate(&CalculationRequest::new(1.0, 0.0, "DIVIDE")).unwrap_err();
        assert_eq!(err, CalculationError::DivisionByZero);
    }

    #[test]
    fn test_unknown_operation() {
        let err = calculate(&CalculationRequest::new(1.0, 2.0, "MODULO")).unwrap_err();
        assert_eq!(err.to_string(), "Unknown operation: MODULO");
    }
}
