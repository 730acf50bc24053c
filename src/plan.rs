//! Mapping plan extraction
//!
//! Derives the per-type translation plan from declared field metadata.
//! Extraction is a pure function of the metadata: calling it twice over the
//! same field table yields equal plans.

use crate::record::{FieldRole, FieldSpec};
use thiserror::Error;

/// Schema errors, raised at plan extraction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// No field declares the subject role
    #[error("type {0} declares no subject field")]
    MissingSubject(&'static str),

    /// More than one field declares the subject role
    #[error("type {0} declares more than one subject field")]
    MultipleSubjects(&'static str),
}

pub type SchemaResult<T> = Result<T, SchemaError>;

/// Subject half of a plan: which field names the subject, and the prefix
/// its IRI is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectSpec {
    /// Index into the record's declared fields
    pub index: usize,
    /// Namespace prefix the subject IRI starts with
    pub prefix: &'static str,
}

/// One object contribution: a predicate IRI plus the field it reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectSpec {
    /// Index into the record's declared fields
    pub index: usize,
    /// Predicate IRI, used as-is
    pub predicate: &'static str,
}

/// Immutable per-type description of how to build triples for an instance.
///
/// Built once per type, never mutated afterwards, safe for unlimited
/// concurrent reads. Object order is the type's declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingPlan {
    /// Name of the type the plan was extracted from
    pub type_name: &'static str,
    /// Subject field and prefix
    pub subject: SubjectSpec,
    /// Object fields, in declaration order
    pub objects: Vec<ObjectSpec>,
}

impl MappingPlan {
    /// Derive the plan for a type from its declared field metadata.
    ///
    /// Exactly one field must carry the subject role; anything else is a
    /// schema defect reported against `type_name`.
    pub fn extract(type_name: &'static str, fields: &'static [FieldSpec]) -> SchemaResult<Self> {
        let mut subject: Option<SubjectSpec> = None;
        let mut objects = Vec::new();

        for (index, field) in fields.iter().enumerate() {
            match field.role {
                FieldRole::Subject { prefix } => {
                    if subject.replace(SubjectSpec { index, prefix }).is_some() {
                        return Err(SchemaError::MultipleSubjects(type_name));
                    }
                }
                FieldRole::Object { predicate } => {
                    objects.push(ObjectSpec { index, predicate });
                }
            }
        }

        let subject = subject.ok_or(SchemaError::MissingSubject(type_name))?;

        Ok(Self {
            type_name,
            subject,
            objects,
        })
    }
}
