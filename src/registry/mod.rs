//! Operation registry: static catalog tables + validated, indexed lookup.
//!
//! This module is intentionally separate from validation and evaluation.
//! It owns:
//! - the `Operation` record (id, display name, docs, compute, nesting rule)
//! - the per-type catalog (`catalog.rs`) and compute functions (`ops.rs`)
//! - `Registry`, the checked structure the rest of the crate queries
//!
//! The registry is fixed at startup. `Registry::new` validates the tables
//! (unique ids per type, predecessors that actually exist) and builds a
//! direct `(InputType, id)` index so lookups never iterate categories.

mod catalog;
mod ops;

use crate::error::ComputeError;
use crate::value::{InputType, TypedValue};
use anyhow::bail;
use std::collections::BTreeMap;

/// Immutable catalog entry. Created at process start, never mutated.
#[derive(Debug, Clone, Copy)]
pub struct Operation {
    /// Unique within its input type.
    pub id: &'static str,
    /// Label rendered in traces and operation listings.
    pub display_name: &'static str,
    pub category: &'static str,
    /// Static documentation, never executed.
    pub description: &'static str,
    /// Static practical-use snippet, never executed.
    pub example: &'static str,
    pub compute: fn(TypedValue) -> Result<TypedValue, ComputeError>,
    /// Ids that may immediately precede this operation in a chain. The
    /// first chain position is always admissible; an empty list therefore
    /// means "first position only".
    pub allowed_predecessors: &'static [&'static str],
}

/// One presentation category in declaration order.
#[derive(Debug, Clone)]
pub struct Category {
    pub name: &'static str,
    pub operations: Vec<&'static Operation>,
}

/// Operations registered for a single input type.
#[derive(Debug, Clone)]
pub struct TypeOps {
    /// Category groups in declaration order, for listing.
    pub categories: Vec<Category>,
    /// Direct id index, for chain building and evaluation.
    index: BTreeMap<&'static str, &'static Operation>,
}

impl TypeOps {
    pub fn get(&self, id: &str) -> Option<&'static Operation> {
        self.index.get(id).copied()
    }
}

/// Validated registry over the static catalog.
#[derive(Debug, Clone)]
pub struct Registry {
    by_type: BTreeMap<InputType, TypeOps>,
}

impl Registry {
    /// Build and check the registry:
    /// - ids unique within an input type
    /// - every `allowed_predecessors` entry names an id of the same type
    ///
    /// A failure here is a defect in the catalog tables, not user input.
    pub fn new() -> crate::Result<Self> {
        let mut by_type = BTreeMap::new();

        for &(ty, category_table) in catalog::CATALOG {
            let mut index = BTreeMap::new();
            let mut categories = Vec::new();

            for &(name, operations) in category_table {
                let mut group = Vec::new();
                for op in operations {
                    if index.insert(op.id, op).is_some() {
                        bail!("duplicate operation id {:?} for input type {}", op.id, ty);
                    }
                    group.push(op);
                }
                categories.push(Category { name, operations: group });
            }

            for op in index.values() {
                for &pred in op.allowed_predecessors {
                    if !index.contains_key(pred) {
                        bail!(
                            "operation {:?} ({}) allows unknown predecessor {:?}",
                            op.id,
                            ty,
                            pred
                        );
                    }
                }
            }

            by_type.insert(ty, TypeOps { categories, index });
        }

        Ok(Self { by_type })
    }

    /// Ordered category view for a type, used to populate selectable
    /// operations. Errors if the type has no registered catalog; with the
    /// built-in tables that indicates an internal inconsistency.
    pub fn operations_for(&self, ty: InputType) -> crate::Result<&TypeOps> {
        match self.by_type.get(&ty) {
            Some(ops) => Ok(ops),
            None => bail!("input type not registered: {}", ty),
        }
    }

    /// Direct `(InputType, id)` lookup.
    pub fn get(&self, ty: InputType, id: &str) -> Option<&'static Operation> {
        self.by_type.get(&ty).and_then(|ops| ops.get(id))
    }
}
