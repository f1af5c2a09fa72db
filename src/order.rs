use crate::error::{OrResult, OrderError};
use crate::links::{ChromId, LinkIndex};
use std::collections::HashSet;

/// Chromosomes laid out around the circle; slot `i` is position `i`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Order {
    slots: Vec<ChromId>,
}

impl Order {
    pub fn new(slots: Vec<ChromId>) -> Self {
        Self { slots }
    }

    /// Resolves names against the index. Unknown or repeated names are rejected.
    pub fn from_names<S: AsRef<str>>(names: &[S], index: &LinkIndex) -> OrResult<Self> {
        let mut seen = HashSet::with_capacity(names.len());
        let mut slots = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            let id = index.id(name).ok_or_else(|| {
                OrderError::Validation(format!("Unknown chromosome '{}' in order", name))
            })?;
            if !seen.insert(id) {
                return Err(OrderError::Validation(format!(
                    "Chromosome '{}' appears twice in order",
                    name
                )));
            }
            slots.push(id);
        }
        Ok(Self { slots })
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[ChromId] {
        &self.slots
    }

    #[inline(always)]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
    }

    pub fn reversed(&self) -> Self {
        let mut slots = self.slots.clone();
        slots.reverse();
        Self { slots }
    }

    pub fn names<'a>(&self, index: &'a LinkIndex) -> Vec<&'a str> {
        self.slots.iter().map(|&c| index.name(c)).collect()
    }

    /// Comma-delimited labels, the form circos expects for `chromosomes_order`.
    pub fn to_delimited(&self, index: &LinkIndex) -> String {
        self.names(index).join(",")
    }
}
