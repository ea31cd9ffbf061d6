use crate::domain::objects::QuantumObject;
use crate::utils::error::{DepotError, Result};

/// Ordered, exclusively-owning store of quantum objects.
#[derive(Debug, Default)]
pub struct Inventory {
    objects: Vec<Box<dyn QuantumObject>>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an object. Ids are unique per inventory; a clash leaves the
    /// store untouched.
    pub fn add(&mut self, object: Box<dyn QuantumObject>) -> Result<()> {
        if self.contains(object.id()) {
            tracing::warn!("Rejected duplicate object id {}", object.id());
            return Err(DepotError::DuplicateIdError {
                id: object.id().to_string(),
            });
        }

        tracing::info!("➕ Stored {}", object.describe_status());
        self.objects.push(object);
        Ok(())
    }

    pub fn find_by_id(&self, id: &str) -> Option<&dyn QuantumObject> {
        self.objects
            .iter()
            .find(|object| object.id() == id)
            .map(|object| object.as_ref())
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut (dyn QuantumObject + 'static)> {
        self.objects
            .iter_mut()
            .find(|object| object.id() == id)
            .map(|object| object.as_mut())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Borrowing iterator in insertion order. Clone it or call again to restart.
    pub fn list_all(&self) -> impl Iterator<Item = &dyn QuantumObject> + Clone + '_ {
        self.objects.iter().map(|object| object.as_ref())
    }

    /// Objects exposing the emergency cooling capability.
    pub fn coolable_count(&self) -> usize {
        self.objects
            .iter()
            .filter(|object| object.kind().is_coolable())
            .count()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
