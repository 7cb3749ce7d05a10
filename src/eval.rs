//! Pipeline evaluator: fold the chain over the parsed input, keeping a
//! human-readable line per step.
//!
//! The evaluator is a pure function of (type, raw input, chain) and holds
//! no state across calls; every evaluation re-runs the full fold from the
//! initial value. Chains are short and operations cheap, so recomputation
//! buys simplicity.

use crate::chain::Chain;
use crate::error::EvalError;
use crate::input::validate;
use crate::registry::Registry;
use crate::value::InputType;
use serde::Serialize;
use std::fmt;

/// Ordered record of the value after each applied operation, starting with
/// the initial value. Produced fresh on every evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionTrace {
    pub lines: Vec<String>,
}

impl fmt::Display for ExecutionTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n\n"))
    }
}

/// Evaluate the chain against the raw input.
///
/// An empty chain is a trivial success describing the raw input verbatim —
/// no parse is attempted, so malformed structured input only surfaces once
/// the user actually selects a transformation. A non-empty chain first
/// validates the input, then folds left-to-right; the first failing
/// operation stops the fold and the partial trace is discarded, so callers
/// see a complete trace or an error, never a mixture.
pub fn evaluate(
    registry: &Registry,
    ty: InputType,
    raw: &str,
    chain: &Chain,
) -> Result<ExecutionTrace, EvalError> {
    if chain.is_empty() {
        return Ok(ExecutionTrace { lines: vec![format!("Initial input: {raw}")] });
    }

    let result = validate(raw, ty);
    let mut value = match (result.is_valid, result.parsed) {
        (true, Some(parsed)) => parsed,
        _ => {
            let message = result
                .message
                .unwrap_or_else(|| "Invalid input. Please check your input.".to_string());
            return Err(EvalError::Parse { message });
        }
    };

    let mut lines = vec![format!("Initial input: {}", value.render())];

    for (index, id) in chain.ids().iter().enumerate() {
        let op = registry
            .get(ty, id)
            .ok_or_else(|| EvalError::UnknownOperation { ty, id: id.clone() })?;

        value = (op.compute)(value).map_err(|err| EvalError::Compute {
            step: index + 1,
            name: op.display_name.to_string(),
            message: err.message,
        })?;

        lines.push(format!(
            "Step {} - {}: {}",
            index + 1,
            op.display_name,
            value.render()
        ));
    }

    Ok(ExecutionTrace { lines })
}
