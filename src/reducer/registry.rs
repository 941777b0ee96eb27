//! Registry aller bekannten Reducer: stabiler Bezeichner → Factory.
//!
//! Wird einmal beim Start aufgebaut. Lookups sind lineare Suchen, es gibt
//! nur eine Handvoll Algorithmen.

use super::{constrained, unconstrained, ConstrainedReducer, UnconstrainedReducer};
use super::{DefaultFactory, Reducer, ReducerFactory};
use crate::core::StorageError;

/// Eintrag der Registry.
pub struct ReducerRecord {
    /// Stabiler Bezeichner (wird als `method` gespeichert)
    pub identifier: String,
    /// Anzeigename für Menüs
    pub label: String,
    /// Factory für Instanzen dieses Algorithmus
    pub factory: Box<dyn ReducerFactory>,
}

impl std::fmt::Debug for ReducerRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReducerRecord")
            .field("identifier", &self.identifier)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Geordnete Liste registrierter Reducer.
#[derive(Debug, Default)]
pub struct ReducerRegistry {
    records: Vec<ReducerRecord>,
}

impl ReducerRegistry {
    /// Erstellt eine leere Registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt eine Registry mit den mitgelieferten Reducern.
    pub fn with_builtin_reducers() -> Self {
        let mut registry = Self::new();
        registry.register(
            constrained::IDENTIFIER,
            "Mit Randbedingungen",
            Box::new(DefaultFactory::<ConstrainedReducer>::new()),
        );
        registry.register(
            unconstrained::IDENTIFIER,
            "Ohne Randbedingungen",
            Box::new(DefaultFactory::<UnconstrainedReducer>::new()),
        );
        registry
    }

    /// Registriert einen Reducer.
    ///
    /// Bezeichner müssen eindeutig sein; doppelte Registrierung ist ein
    /// Konfigurationsfehler beim Aufbau der Registry.
    pub fn register(
        &mut self,
        identifier: impl Into<String>,
        label: impl Into<String>,
        factory: Box<dyn ReducerFactory>,
    ) {
        let identifier = identifier.into();
        debug_assert!(
            self.records.iter().all(|r| r.identifier != identifier),
            "Reducer '{identifier}' doppelt registriert"
        );
        self.records.push(ReducerRecord {
            identifier,
            label: label.into(),
            factory,
        });
    }

    /// Alle Einträge in Registrierungs-Reihenfolge
    pub fn records(&self) -> &[ReducerRecord] {
        &self.records
    }

    /// Anzahl registrierter Reducer
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Ist die Registry leer?
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sucht den Eintrag mit exakt diesem Bezeichner.
    pub fn find_by_identifier(&self, identifier: &str) -> Result<&ReducerRecord, StorageError> {
        self.records
            .iter()
            .find(|r| r.identifier == identifier)
            .ok_or_else(|| StorageError::UnknownReducer(identifier.to_string()))
    }

    /// Sucht den Eintrag, dessen Factory `reducer` erzeugt haben kann.
    ///
    /// Schlägt nur fehl, wenn die Instanz an der Registry vorbei erzeugt
    /// wurde. Das ist ein Programmierfehler, das Dokument ist dann nicht speicherbar.
    pub fn find_by_instance(&self, reducer: &dyn Reducer) -> Result<&ReducerRecord, StorageError> {
        self.records
            .iter()
            .find(|r| r.factory.can_produce(reducer))
            .ok_or_else(|| {
                log::error!("Reducer-Instanz ohne registrierte Factory: {reducer:?}");
                StorageError::UnregisteredReducer(format!("{reducer:?}"))
            })
    }

    /// Erzeugt eine Standard-Instanz des Reducers `identifier`.
    pub fn produce(&self, identifier: &str) -> Result<Box<dyn Reducer>, StorageError> {
        Ok(self.find_by_identifier(identifier)?.factory.produce())
    }
}
