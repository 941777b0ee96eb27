//! Reducer ohne Randbedingungen und ohne eigene Attribute.

use super::Reducer;
use std::any::Any;

/// Bezeichner in der Registry und im `method`-Attribut.
pub const IDENTIFIER: &str = "unconstrained";

/// Freie Reduktion; nutzt die Standard-Implementierung für Attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnconstrainedReducer;

impl Reducer for UnconstrainedReducer {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_box(&self) -> Box<dyn Reducer> {
        Box::new(*self)
    }

    fn eq_dyn(&self, other: &dyn Reducer) -> bool {
        other.as_any().is::<Self>()
    }
}
