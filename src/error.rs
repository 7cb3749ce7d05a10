//! Error values crossing the core boundary.
//!
//! Everything the presentation layer may need to show is returned as a
//! value; nothing user-facing is raised through `anyhow`. The `anyhow`
//! alias in `lib.rs` is reserved for internal defects (registry
//! construction, CLI plumbing).

use crate::value::InputType;
use serde::Serialize;
use thiserror::Error;

/// Which phase of the pipeline an error belongs to.
///
/// `Internal` marks registry/chain desync (unknown ids or types). Those are
/// defects by construction, not something a user can cause or fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Parse,
    Nesting,
    Compute,
    Internal,
}

/// Failure of a single operation's transformation against the actual
/// runtime value, e.g. `.toUpperCase()` reaching a list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ComputeError {
    pub message: String,
}

impl ComputeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    /// Standard wording for an operation applied to the wrong value kind.
    pub fn kind_mismatch(expected: &str, got: &str) -> Self {
        Self::new(format!("expects {expected}, got {got}"))
    }
}

/// Outcome of a rejected `Chain::toggle`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToggleError {
    /// The candidate's `allowed_predecessors` does not admit the current
    /// last element. Candidate is named by display name, the predecessor by
    /// id, matching the interactive tool's wording.
    #[error("{candidate} cannot be nested after {last}")]
    Nesting { candidate: String, last: String },

    /// The id is not registered for this input type. The chain only ever
    /// holds registry-validated ids, so this indicates a defect.
    #[error("unknown operation {id:?} for input type {ty}")]
    UnknownOperation { ty: InputType, id: String },
}

impl ToggleError {
    pub fn stage(&self) -> Stage {
        match self {
            Self::Nesting { .. } => Stage::Nesting,
            Self::UnknownOperation { .. } => Stage::Internal,
        }
    }
}

/// Failure of a full evaluation pass. Replaces any previous trace; a new
/// successful evaluation supersedes it in turn.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Raw input did not match the declared input type.
    #[error("{message}")]
    Parse { message: String },

    /// An operation failed mid-fold. `step` is 1-based.
    #[error("Error applying {name}: {message}")]
    Compute {
        step: usize,
        name: String,
        message: String,
    },

    /// Chain references an id the registry does not know. Defect-class.
    #[error("unknown operation {id:?} for input type {ty}")]
    UnknownOperation { ty: InputType, id: String },
}

impl EvalError {
    pub fn stage(&self) -> Stage {
        match self {
            Self::Parse { .. } => Stage::Parse,
            Self::Compute { .. } => Stage::Compute,
            Self::UnknownOperation { .. } => Stage::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn compute_error_rendering_names_step_and_operation() {
        let err = EvalError::Compute {
            step: 2,
            name: ".sort()".into(),
            message: "cannot sort a list that mixes value kinds".into(),
        };
        assert_eq!(
            err.to_string(),
            "Error applying .sort(): cannot sort a list that mixes value kinds"
        );
        assert_eq!(err.stage(), Stage::Compute);
    }

    #[test]
    fn nesting_error_wording() {
        let err = ToggleError::Nesting {
            candidate: ".toUpperCase()".into(),
            last: "trim".into(),
        };
        assert_eq!(err.to_string(), ".toUpperCase() cannot be nested after trim");
        assert_eq!(err.stage(), Stage::Nesting);
    }
}
