//! [AttributePool]: ordered, deduplicated attribute storage.

use std::{collections::HashMap, hash::Hash, ops::Index};

use objgen_common::ArrayIndex;

use crate::{Error, Result};

/// An append-only list of unique values, indexed in first-seen order.
///
/// Inserting a value equal to one already pooled returns the existing index; indices never
/// change once assigned. Lookup goes through a hash index, so insertion is O(1) amortized.
#[derive(Debug, Clone)]
pub struct AttributePool<T, Idx: ArrayIndex = u32> {
    values: Vec<T>,
    lookup: HashMap<T, Idx>,
}

impl<T, Idx: ArrayIndex> Default for AttributePool<T, Idx> {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            lookup: HashMap::new(),
        }
    }
}

impl<T: Clone + Eq + Hash, Idx: ArrayIndex> AttributePool<T, Idx> {
    /// An empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the index of `value`, appending it first if it isn't already pooled.
    ///
    /// # Errors
    ///
    /// [Error::IndexOverflow] if `value` is new and the pool already holds as many values as
    /// `Idx` can address.
    pub fn insert(&mut self, value: T) -> Result<Idx> {
        if let Some(&idx) = self.lookup.get(&value) {
            return Ok(idx);
        }
        let pos = self.values.len();
        let idx = Idx::from_position(pos).ok_or(Error::IndexOverflow(pos))?;
        self.values.push(value.clone());
        self.lookup.insert(value, idx);
        Ok(idx)
    }

    /// Index of `value`, if it has been pooled.
    #[inline]
    pub fn index_of(&self, value: &T) -> Option<Idx> {
        self.lookup.get(value).copied()
    }

    /// Whether `value` has been pooled.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.lookup.contains_key(value)
    }
}

impl<T, Idx: ArrayIndex> AttributePool<T, Idx> {
    /// The value at `idx`, if any.
    #[inline]
    pub fn get(&self, idx: Idx) -> Option<&T> {
        self.values.get(idx.position())
    }

    /// Number of unique values.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing has been pooled.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values in index order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Pooled values, indexable by their pool index.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }
}

impl<T, Idx: ArrayIndex> Index<Idx> for AttributePool<T, Idx> {
    type Output = T;

    #[inline]
    fn index(&self, idx: Idx) -> &Self::Output {
        &self.values[idx.position()]
    }
}

impl<'pool, T, Idx: ArrayIndex> IntoIterator for &'pool AttributePool<T, Idx> {
    type Item = &'pool T;
    type IntoIter = std::slice::Iter<'pool, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, Vector2};

    #[test]
    fn first_seen_order() {
        let mut pool = AttributePool::<Vector2, u32>::new();
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(1.0, 0.0);
        assert_eq!(pool.insert(b).unwrap(), 0);
        assert_eq!(pool.insert(a).unwrap(), 1);
        assert_eq!(pool.insert(b).unwrap(), 0);
        assert_eq!(pool.as_slice(), &[b, a]);
        assert_eq!(pool.index_of(&a), Some(1));
        assert_eq!(pool[1], a);
        assert!(pool.get(2).is_none());
    }

    #[test]
    fn overflow() {
        let mut pool = AttributePool::<u16, u8>::new();
        for v in 0..256u16 {
            assert_eq!(pool.insert(v).unwrap(), v as u8);
        }
        // already pooled; no new index needed
        assert_eq!(pool.insert(255).unwrap(), 255);
        let err = pool.insert(256).unwrap_err();
        assert!(matches!(err, Error::IndexOverflow(256)));
        assert_eq!(err.kind(), ErrorKind::IndexOverflow);
        assert_eq!(pool.len(), 256);
    }
}
