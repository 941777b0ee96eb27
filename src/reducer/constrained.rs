//! Reducer mit Stetigkeits-Vorgaben an Start- und Endpunkt.

use super::{AttributeSink, AttributeSource, Reducer};
use crate::core::StorageError;
use std::any::Any;

/// Bezeichner in der Registry und im `method`-Attribut.
pub const IDENTIFIER: &str = "constrained";

const ATTR_CONTINUITY_0: &str = "continuity-0";
const ATTR_CONTINUITY_1: &str = "continuity-1";

/// Reduktion, die am Kurvenanfang und -ende eine Stetigkeitsklasse einhält.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConstrainedReducer {
    /// Stetigkeitsklasse am Startpunkt (t = 0)
    pub continuity_at_0: i32,
    /// Stetigkeitsklasse am Endpunkt (t = 1)
    pub continuity_at_1: i32,
}

impl ConstrainedReducer {
    /// Erstellt den Reducer mit beiden Stetigkeitsklassen.
    pub fn new(continuity_at_0: i32, continuity_at_1: i32) -> Self {
        Self {
            continuity_at_0,
            continuity_at_1,
        }
    }
}

impl Reducer for ConstrainedReducer {
    fn write_attributes(&self, sink: &mut AttributeSink) {
        sink.write_int(ATTR_CONTINUITY_0, self.continuity_at_0.into());
        sink.write_int(ATTR_CONTINUITY_1, self.continuity_at_1.into());
    }

    fn read_attributes(&mut self, source: &AttributeSource<'_>) -> Result<(), StorageError> {
        // Erst beide lesen, dann zuweisen: bei Fehler bleibt die Instanz unverändert
        let at_0 = source.parse_int::<i32>(ATTR_CONTINUITY_0)?;
        let at_1 = source.parse_int::<i32>(ATTR_CONTINUITY_1)?;
        self.continuity_at_0 = at_0;
        self.continuity_at_1 = at_1;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_box(&self) -> Box<dyn Reducer> {
        Box::new(*self)
    }

    fn eq_dyn(&self, other: &dyn Reducer) -> bool {
        other.as_any().downcast_ref::<Self>() == Some(self)
    }
}
