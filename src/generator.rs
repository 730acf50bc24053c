//! Triple generation facade
//!
//! The public entry point: resolves a record's concrete type, obtains its
//! mapper from the type-keyed cache (building it on first use), and runs it.

use crate::adapter::{AdapterError, NodeAdapter, XsdNodeAdapter};
use crate::mapper::RecordMapper;
use crate::plan::{MappingPlan, SchemaError};
use crate::record::RdfRecord;
use crate::term::Triple;
use rustc_hash::FxHashMap;
use std::any::TypeId;
use std::sync::{Arc, RwLock};
use thiserror::Error;
use tracing::debug;

/// Errors surfaced by [`TripleGenerator::generate`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// The record type's field metadata is defective
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A node could not be built from the record's data
    #[error(transparent)]
    Adapter(#[from] AdapterError),
}

pub type MappingResult<T> = Result<T, MappingError>;

/// Maps typed records to RDF triples, compiling and caching one mapper per
/// concrete record type.
///
/// The cache is the only shared mutable state: lookups take a read lock,
/// and a first use of a type builds its plan outside any lock before
/// inserting. Entries live for the generator's lifetime; there is no
/// eviction, so memory grows with the number of distinct record types, not
/// with call volume.
pub struct TripleGenerator {
    adapter: Box<dyn NodeAdapter>,
    mappers: RwLock<FxHashMap<TypeId, Arc<RecordMapper>>>,
}

impl TripleGenerator {
    /// Generator backed by the default XSD node adapter
    pub fn new() -> Self {
        Self::with_adapter(XsdNodeAdapter::new())
    }

    /// Generator backed by a caller-supplied node adapter
    pub fn with_adapter(adapter: impl NodeAdapter + 'static) -> Self {
        Self {
            adapter: Box::new(adapter),
            mappers: RwLock::new(FxHashMap::default()),
        }
    }

    /// Produce the triples for one record.
    ///
    /// Schema and adapter failures come back unchanged; this layer adds no
    /// failure modes of its own.
    pub fn generate(&self, record: &dyn RdfRecord) -> MappingResult<Vec<Triple>> {
        let mapper = self.mapper_for(record)?;
        Ok(mapper.run(record, self.adapter.as_ref())?)
    }

    /// Produce the triples for a batch of records, in input order.
    ///
    /// The first failing record aborts the batch; no triples are returned
    /// for it or anything after it.
    pub fn generate_all<'a>(
        &self,
        records: impl IntoIterator<Item = &'a dyn RdfRecord>,
    ) -> MappingResult<Vec<Triple>> {
        let mut triples = Vec::new();
        for record in records {
            triples.extend(self.generate(record)?);
        }
        Ok(triples)
    }

    /// Number of record types with a cached mapper
    pub fn cached_types(&self) -> usize {
        self.mappers.read().unwrap().len()
    }

    fn mapper_for(&self, record: &dyn RdfRecord) -> MappingResult<Arc<RecordMapper>> {
        let key = record.as_any().type_id();

        if let Some(mapper) = self.mappers.read().unwrap().get(&key) {
            return Ok(Arc::clone(mapper));
        }

        // First use of this type. Extract outside the lock so unrelated
        // types' first uses don't serialize behind this build. Extraction
        // failures are not cached: re-extraction is deterministic, so a bad
        // type fails the same way on every call.
        let plan = MappingPlan::extract(record.type_name(), record.fields())?;
        debug!(
            type_name = plan.type_name,
            objects = plan.objects.len(),
            "compiled mapping plan"
        );
        let mapper = Arc::new(RecordMapper::new(plan));

        // Two threads can race here with equal plans; whichever insert wins
        // is the mapper every caller uses from now on.
        let mut mappers = self.mappers.write().unwrap();
        let winner = mappers.entry(key).or_insert(mapper);
        Ok(Arc::clone(winner))
    }
}

impl Default for TripleGenerator {
    fn default() -> Self {
        Self::new()
    }
}
