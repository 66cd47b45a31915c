//! Core database trait for model storage
//!
//! A database is the per-run store the parsing stages write into and the
//! view stage reads from. It owns the identifier counter and indexes elements
//! both by name (for resolving references) and in registration order (for
//! serialization).

use super::ModelId;

/// Core trait for model databases
pub trait Database {
    /// Registry record for one element
    type Element;

    /// Relationship record
    type Relationship;

    /// Allocate the next identifier from the shared counter
    fn next_id(&mut self) -> ModelId;

    /// Look up a registered element by name
    fn get_element(&self, name: &str) -> Option<&Self::Element>;

    /// Look up a registered element by identifier
    fn get_element_by_id(&self, id: ModelId) -> Option<&Self::Element>;

    /// Iterate over elements in registration order
    fn elements(&self) -> impl Iterator<Item = &Self::Element>;

    /// Iterate over relationships in registration order
    fn relationships(&self) -> impl Iterator<Item = &Self::Relationship>;

    /// Remove everything and restart the identifier counter
    fn clear(&mut self);

    fn element_count(&self) -> usize;

    fn relationship_count(&self) -> usize;
}
