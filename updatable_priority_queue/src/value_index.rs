use indexmap::map::IndexMap;
use std::borrow::Borrow;
use std::hash::{BuildHasher, Hash};

/// Wrapper over the value to priority map.
/// It centralizes the lookups that must succeed whenever both indexes agree.
#[derive(Clone, Debug)]
pub(crate) struct ValueIndex<TValue, TPriority, S>
where
    TValue: Hash + Eq,
    S: BuildHasher,
{
    map: IndexMap<TValue, TPriority, S>,
}

impl<TValue, TPriority, S> ValueIndex<TValue, TPriority, S>
where
    TValue: Hash + Eq,
    S: BuildHasher,
{
    #[inline(always)]
    pub(crate) fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            map: IndexMap::with_capacity_and_hasher(capacity, hasher),
        }
    }

    #[inline(always)]
    pub(crate) fn reserve(&mut self, additional: usize) {
        self.map.reserve(additional)
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    #[inline(always)]
    pub(crate) fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[inline(always)]
    pub(crate) fn clear(&mut self) {
        self.map.clear()
    }

    #[inline(always)]
    pub(crate) fn contains<Q>(&self, value: &Q) -> bool
    where
        TValue: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(value)
    }

    #[inline(always)]
    pub(crate) fn get<Q>(&self, value: &Q) -> Option<&TPriority>
    where
        TValue: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(value)
    }

    #[inline(always)]
    pub(crate) fn get_entry<Q>(&self, value: &Q) -> Option<(&TValue, &TPriority)>
    where
        TValue: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map
            .get_full(value)
            .map(|(_, value, priority)| (value, priority))
    }

    #[inline(always)]
    pub(crate) fn insert(&mut self, value: TValue, priority: TPriority) {
        let previous = self.map.insert(value, priority);
        debug_assert!(previous.is_none(), "Inserted values are checked for absence");
    }

    #[inline(always)]
    pub(crate) fn set_priority<Q>(&mut self, value: &Q, priority: TPriority)
    where
        TValue: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        *self
            .map
            .get_mut(value)
            .expect("Both indexes track the same elements") = priority;
    }

    #[inline(always)]
    pub(crate) fn remove_entry<Q>(&mut self, value: &Q) -> (TValue, TPriority)
    where
        TValue: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map
            .swap_remove_entry(value)
            .expect("Both indexes track the same elements")
    }

    #[cfg(test)]
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&TValue, &TPriority)> {
        self.map.iter()
    }
}
