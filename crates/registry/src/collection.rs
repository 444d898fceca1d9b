//! Insertion-ordered entity list with linear-scan lookups.

use stockroom_core::{DomainError, DomainResult, NamedEntity};

/// An ordered list of entities.
///
/// Ids are not required to be unique; id-based operations act on the first
/// match in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: NamedEntity> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Position of the first item with `id`.
    pub fn position(&self, id: T::Id) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn get_mut(&mut self, id: T::Id) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Replace the item at `index`, returning the previous occupant.
    pub fn replace(&mut self, index: usize, item: T) -> DomainResult<T> {
        let len = self.items.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or_else(|| DomainError::out_of_bounds(index, len))?;
        Ok(std::mem::replace(slot, item))
    }

    /// Remove the item at `index`. Callers obtain `index` from [`Self::position`].
    pub(crate) fn remove_at(&mut self, index: usize) -> T {
        self.items.remove(index)
    }

    /// Every item whose name contains `query`, ignoring case.
    ///
    /// An empty query matches everything.
    pub fn search_name(&self, query: &str) -> Vec<&T> {
        let needle = query.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.name_contains(&needle))
            .collect()
    }

    /// Highest id present.
    pub fn max_id(&self) -> Option<T::Id>
    where
        T::Id: Ord,
    {
        self.items.iter().map(|item| item.id()).max()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
