//! Ordered selection of operations, with toggle/truncate semantics.
//!
//! A chain is never mutated in place: `toggle` returns a fresh chain, so
//! callers can compare before/after by value. Invariant: every adjacent
//! pair `(prev, next)` satisfies `prev ∈ next.allowed_predecessors`, except
//! that position 0 is always admissible.

use crate::error::ToggleError;
use crate::registry::Registry;
use crate::value::InputType;
use serde::Serialize;

/// Ordered operation ids selected by the user.
///
/// Switching input type must reset the selection to `Chain::new()`;
/// operations are not polymorphic across types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Chain(Vec<String>);

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn ids(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|item| item == id)
    }

    /// Select or deselect an operation.
    ///
    /// - Already selected: the id and everything after it are removed —
    ///   later steps depend on earlier output, so deselecting a step
    ///   discards everything downstream of it.
    /// - Not selected: the candidate is appended if the chain is empty or
    ///   the current last id is among its `allowed_predecessors`; otherwise
    ///   a `Nesting` error is returned and the caller keeps the old chain.
    ///
    /// An id unknown to the registry is a defect (`UnknownOperation`): the
    /// chain only ever holds registry-validated ids.
    pub fn toggle(
        &self,
        registry: &Registry,
        ty: InputType,
        id: &str,
    ) -> Result<Self, ToggleError> {
        if let Some(pos) = self.0.iter().position(|item| item == id) {
            return Ok(Self(self.0[..pos].to_vec()));
        }

        let op = registry
            .get(ty, id)
            .ok_or_else(|| ToggleError::UnknownOperation { ty, id: id.to_string() })?;

        if let Some(last) = self.0.last() {
            if !op.allowed_predecessors.contains(&last.as_str()) {
                return Err(ToggleError::Nesting {
                    candidate: op.display_name.to_string(),
                    last: last.clone(),
                });
            }
        }

        let mut next = self.0.clone();
        next.push(id.to_string());
        Ok(Self(next))
    }
}

impl FromIterator<String> for Chain {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn registry() -> Registry {
        Registry::new().unwrap()
    }

    fn chain_of(ids: &[&str]) -> Chain {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn toggle_appends_when_compatible() {
        let registry = registry();
        let chain = Chain::new()
            .toggle(&registry, InputType::Text, "toUpperCase")
            .unwrap();
        assert_eq!(chain, chain_of(&["toUpperCase"]));

        // toLowerCase allows toUpperCase as predecessor.
        let chain = chain
            .toggle(&registry, InputType::Text, "toLowerCase")
            .unwrap();
        assert_eq!(chain, chain_of(&["toUpperCase", "toLowerCase"]));
    }

    #[test]
    fn symmetric_pair_nests_both_ways() {
        // The mutual nesting rule is per-operation: upper after lower and
        // lower after upper are both admitted.
        let registry = registry();
        let chain = chain_of(&["trim", "toLowerCase"]);
        let chain = chain
            .toggle(&registry, InputType::Text, "toUpperCase")
            .unwrap();
        assert_eq!(chain, chain_of(&["trim", "toLowerCase", "toUpperCase"]));
    }

    #[test]
    fn toggling_a_selected_id_truncates_instead_of_appending() {
        // toUpperCase is already at position 0; even though toLowerCase
        // would admit it, truncation wins and the chain empties.
        let registry = registry();
        let chain = chain_of(&["toUpperCase", "toLowerCase"]);
        let chain = chain
            .toggle(&registry, InputType::Text, "toUpperCase")
            .unwrap();
        assert_eq!(chain, Chain::new());
    }

    #[test]
    fn truncates_at_first_occurrence() {
        let registry = registry();
        let chain = chain_of(&["unique", "sort", "reverse"]);
        let toggled = chain.toggle(&registry, InputType::List, "sort").unwrap();
        assert_eq!(toggled, chain_of(&["unique"]));
        // The pre-toggle chain is untouched.
        assert_eq!(chain, chain_of(&["unique", "sort", "reverse"]));
    }

    #[test]
    fn incompatible_candidate_is_rejected_with_both_names() {
        let registry = registry();
        // toUpperCase does not admit "split" as predecessor.
        let chain = chain_of(&["trim", "split"]);
        let err = chain
            .toggle(&registry, InputType::Text, "toUpperCase")
            .unwrap_err();
        assert_eq!(
            err,
            ToggleError::Nesting {
                candidate: ".toUpperCase()".into(),
                last: "split".into(),
            }
        );
    }

    #[test]
    fn first_position_ignores_predecessor_constraints() {
        let registry = registry();
        // "join" lists predecessors but is still admissible first.
        let chain = Chain::new().toggle(&registry, InputType::List, "join").unwrap();
        assert_eq!(chain, chain_of(&["join"]));
    }

    #[test]
    fn unknown_id_is_a_defect_error() {
        let registry = registry();
        let err = Chain::new()
            .toggle(&registry, InputType::List, "explode")
            .unwrap_err();
        assert_eq!(
            err,
            ToggleError::UnknownOperation { ty: InputType::List, id: "explode".into() }
        );
    }
}
