//! Trait-basiertes Reducer-System für erweiterbare Reduktions-Algorithmen.
//!
//! Jeder Algorithmus implementiert den `Reducer`-Trait und wird mit einer
//! `ReducerFactory` unter einem stabilen Bezeichner in der
//! `ReducerRegistry` registriert. Der Dokument-Codec kennt nur diese
//! Schnittstelle; algorithmus-spezifische Felder schreibt und liest jeder
//! Reducer selbst als Attribute seines `reduced-curve`-Elements.

mod attributes;
/// Reducer mit Stetigkeits-Vorgaben an beiden Kurvenenden.
pub mod constrained;
/// Registry: Bezeichner → Factory.
pub mod registry;
/// Reducer ohne eigene Attribute.
pub mod unconstrained;

pub use attributes::{AttributeSink, AttributeSource};
pub use constrained::ConstrainedReducer;
pub use registry::{ReducerRecord, ReducerRegistry};
pub use unconstrained::UnconstrainedReducer;

use crate::core::StorageError;
use std::any::Any;
use std::fmt::Debug;
use std::marker::PhantomData;

/// Schnittstelle für alle Reduktions-Algorithmen (aus Sicht der Speicherung).
///
/// Die Mathematik der Reduktion ist nicht Teil dieser Schnittstelle.
pub trait Reducer: Debug + 'static {
    /// Schreibt algorithmus-spezifische Attribute in das aktuelle Element.
    ///
    /// Darf nur Attribute hinzufügen, keine Kind-Elemente.
    fn write_attributes(&self, _sink: &mut AttributeSink) {}

    /// Liest die eigenen Attribute zurück.
    ///
    /// Fehlt ein Pflicht-Attribut oder ist es nicht parsebar, muss ein
    /// `StorageError::Format` zurückgegeben werden.
    fn read_attributes(&mut self, _source: &AttributeSource<'_>) -> Result<(), StorageError> {
        Ok(())
    }

    /// Zugriff auf den konkreten Typ (für `ReducerFactory::can_produce`).
    fn as_any(&self) -> &dyn Any;

    /// Kopiert die Instanz samt Konfiguration.
    fn clone_box(&self) -> Box<dyn Reducer>;

    /// Vergleicht Typ und Konfiguration mit einer anderen Instanz.
    fn eq_dyn(&self, other: &dyn Reducer) -> bool;
}

/// Erzeugt Reducer-Instanzen eines Algorithmus.
pub trait ReducerFactory {
    /// Erzeugt eine Instanz mit Standard-Konfiguration.
    fn produce(&self) -> Box<dyn Reducer>;

    /// Hätte diese Factory `reducer` erzeugen können?
    fn can_produce(&self, reducer: &dyn Reducer) -> bool;
}

/// Factory für jeden Reducer-Typ mit `Default`-Konstruktor.
pub struct DefaultFactory<R> {
    _marker: PhantomData<fn() -> R>,
}

impl<R> DefaultFactory<R> {
    /// Erstellt die Factory.
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<R> Default for DefaultFactory<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Reducer + Default> ReducerFactory for DefaultFactory<R> {
    fn produce(&self) -> Box<dyn Reducer> {
        Box::new(R::default())
    }

    fn can_produce(&self, reducer: &dyn Reducer) -> bool {
        reducer.as_any().is::<R>()
    }
}
