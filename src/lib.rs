//! Core of the interactive method-chain explorer.
//!
//! A user declares an input type (text / list / mapping), types raw input,
//! and toggles transformation operations into an ordered chain; the core
//! validates the input, enforces nesting compatibility between adjacent
//! operations, and re-evaluates the whole chain into a step-by-step trace
//! on every change. The presentation layer (out of scope here, stood in
//! for by the CLI) owns all state and calls four boundary functions:
//!
//! - [`Registry::operations_for`] to list selectable operations
//! - [`input::validate`] on every raw-input or type change
//! - [`Chain::toggle`] on every operation click
//! - [`eval::evaluate`] after every state change

pub mod chain;
pub mod error;
pub mod eval;
pub mod input;
pub mod registry;
pub mod value;

pub type Result<T> = anyhow::Result<T>;

pub use chain::Chain;
pub use error::{ComputeError, EvalError, Stage, ToggleError};
pub use eval::{ExecutionTrace, evaluate};
pub use input::{InputGuide, ValidationResult, guide_for, shape_matches, validate};
pub use registry::{Category, Operation, Registry, TypeOps};
pub use value::{InputType, TypedValue};
