//! # Compact Binary Pass-through
//!
//! Shape-preserving encode/decode of one solid or a list of solids. The
//! bridge only checks class tags; record layout belongs to the kernel.

use crate::bridge::Bridge;
use crate::error::BridgeError;
use crate::kernel::SolidKernel;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A single value or a list of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn len(&self) -> usize {
        match self {
            OneOrMany::One(_) => 1,
            OneOrMany::Many(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            OneOrMany::One(item) => std::slice::from_ref(item).iter(),
            OneOrMany::Many(items) => items.iter(),
        }
    }

    /// Borrows every element, keeping the shape.
    pub fn as_refs(&self) -> OneOrMany<&T> {
        match self {
            OneOrMany::One(item) => OneOrMany::One(item),
            OneOrMany::Many(items) => OneOrMany::Many(items.iter().collect()),
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> OneOrMany<U> {
        match self {
            OneOrMany::One(item) => OneOrMany::One(f(item)),
            OneOrMany::Many(items) => OneOrMany::Many(items.into_iter().map(f).collect()),
        }
    }

    /// Like [`Self::map`], stopping at the first error.
    pub fn try_map<U, E>(self, mut f: impl FnMut(T) -> Result<U, E>) -> Result<OneOrMany<U>, E> {
        Ok(match self {
            OneOrMany::One(item) => OneOrMany::One(f(item)?),
            OneOrMany::Many(items) => {
                OneOrMany::Many(items.into_iter().map(f).collect::<Result<_, _>>()?)
            }
        })
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }
}

impl<K: SolidKernel> Bridge<K> {
    /// Encodes one or many solids, keeping shape and order.
    pub fn serialize(&self, solids: OneOrMany<&K::Solid>) -> OneOrMany<K::Record> {
        debug!(count = solids.len(), "serializing solids");
        solids.map(|solid| self.kernel().encode(solid))
    }

    /// Decodes one or many records, keeping shape and order.
    ///
    /// Every class tag is checked before anything is decoded.
    ///
    /// # Errors
    ///
    /// - [`BridgeError::UnsupportedResultType`] for the first record whose
    ///   class is not the kernel's solid class
    /// - [`BridgeError::Kernel`] for malformed records
    pub fn deserialize(
        &self,
        records: &OneOrMany<K::Record>,
    ) -> Result<OneOrMany<K::Solid>, BridgeError> {
        let kernel = self.kernel();
        if let Some((index, record)) = records
            .iter()
            .enumerate()
            .find(|(_, record)| kernel.record_class(record) != kernel.solid_class())
        {
            return Err(BridgeError::UnsupportedResultType {
                index,
                class: kernel.record_class(record).to_owned(),
            });
        }

        debug!(count = records.len(), "deserializing records");
        records
            .as_refs()
            .try_map(|record| kernel.decode(record).map_err(BridgeError::kernel))
    }
}
