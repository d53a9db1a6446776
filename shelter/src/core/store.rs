//! In-memory record store.

use crate::core::error::{ADD_NAME_REASON, LOOKUP_NAME_REASON, ShelterError};
use crate::core::record::{Record, validate_fee, validate_name};

/// Ordered collection of records for the lifetime of a session.
///
/// Records are kept in insertion order. Names need not be unique; lookups
/// return the first match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store by adding each seed record in order.
    ///
    /// Seed records go through [`RecordStore::add_animal`], so a seed that
    /// would be rejected at the prompt is rejected here too.
    pub fn from_seed<'a, I>(seed: I) -> Result<Self, ShelterError>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut store = Self::new();
        for record in seed {
            store.add_animal(&record.name, record.fee)?;
        }
        Ok(store)
    }

    /// Append a record after validating the name (first) and fee.
    ///
    /// The stored name is trimmed; the fee is stored as given. On error the
    /// store is left untouched.
    pub fn add_animal(&mut self, name: &str, fee: f64) -> Result<(), ShelterError> {
        let name = validate_name(name, ADD_NAME_REASON)?;
        let fee = validate_fee(fee)?;
        self.records.push(Record {
            name: name.to_string(),
            fee,
        });
        Ok(())
    }

    /// Fee of the first record whose name equals the trimmed query.
    ///
    /// Matching is exact and case-sensitive.
    pub fn adoption_fee(&self, animal_name: &str) -> Result<f64, ShelterError> {
        let wanted = validate_name(animal_name, LOOKUP_NAME_REASON)?;
        self.records
            .iter()
            .find(|record| record.name == wanted)
            .map(|record| record.fee)
            .ok_or(ShelterError::NotFound)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
