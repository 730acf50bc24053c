//! Triplegen
//!
//! Attribute-driven mapping of typed records to RDF triples.
//!
//! A record type declares, per field, the role the field plays: exactly one
//! subject field (its value, appended to a namespace prefix, names the
//! subject) and any number of object fields (each carrying the predicate
//! IRI of the triple it contributes). From that metadata the engine derives
//! an immutable per-type [`MappingPlan`] on first use, caches it keyed by
//! type identity, and runs it against instances to produce triples. Every
//! node is built through a pluggable [`NodeAdapter`], so the set of
//! primitive-to-literal conversions belongs to the embedding application.
//!
//! # Example
//!
//! ```rust
//! use triplegen::{rdf_record, TripleGenerator};
//!
//! struct Person {
//!     id: String,
//!     name: String,
//! }
//!
//! rdf_record! {
//!     Person {
//!         subject id, prefix = "http://example.org/person/";
//!         object name, predicate = "http://example.org/hasName";
//!     }
//! }
//!
//! let generator = TripleGenerator::new();
//! let ada = Person { id: "42".into(), name: "Ada".into() };
//!
//! let triples = generator.generate(&ada).unwrap();
//! assert_eq!(triples.len(), 1);
//! assert_eq!(
//!     triples[0].subject.to_string(),
//!     "<http://example.org/person/42>"
//! );
//! assert_eq!(triples[0].object.as_literal().unwrap().value(), "Ada");
//! ```
//!
//! Triple emission order is the declaration order of the object fields, and
//! a call either returns the full triple set or a typed error; partial
//! output is never produced. Storage, querying and serialization of the
//! resulting triples are downstream concerns.

mod adapter;
mod generator;
mod mapper;
mod plan;
mod record;
mod term;
mod value;
pub mod vocab;

pub use adapter::{AdapterError, AdapterResult, LiteralConversion, NodeAdapter, XsdNodeAdapter};

pub use generator::{MappingError, MappingResult, TripleGenerator};

pub use mapper::RecordMapper;

pub use plan::{MappingPlan, ObjectSpec, SchemaError, SchemaResult, SubjectSpec};

pub use record::{FieldRole, FieldSpec, RdfRecord};

pub use term::{Literal, NamedNode, Node, TermError, TermResult, Triple};

pub use value::{Value, ValueKind};
