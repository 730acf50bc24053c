//! Record metadata
//!
//! A type that wants to be published as RDF declares, per field, the role
//! the field plays: exactly one field names the subject (its value is
//! appended to a namespace prefix), and each remaining mapped field
//! contributes one triple under a declared predicate IRI.
//!
//! The [`rdf_record!`] macro writes the [`RdfRecord`] impl from a
//! declarative field listing; hand-written impls are equally valid.

use crate::value::Value;
use std::any::Any;

/// Role a field plays in triple generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    /// The field's lexical value, appended to `prefix`, names the subject.
    Subject { prefix: &'static str },
    /// The field's value becomes the object of a triple with `predicate`.
    Object { predicate: &'static str },
}

/// One field's declared metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name, as declared on the type
    pub name: &'static str,
    /// Declared role
    pub role: FieldRole,
}

/// A record type that can be projected into RDF triples.
///
/// `fields` and `values` must agree: same length, same declaration order.
/// The engine reads `fields` once per type to derive the mapping plan and
/// `values` once per call to execute it.
pub trait RdfRecord: Any {
    /// Static per-field role metadata, in declaration order.
    fn fields(&self) -> &'static [FieldSpec];

    /// The instance's field values, in the same order as [`fields`].
    ///
    /// [`fields`]: RdfRecord::fields
    fn values(&self) -> Vec<Value>;

    /// Concrete type name, used in schema error reports.
    fn type_name(&self) -> &'static str;

    /// Upcast for type-identity resolution.
    fn as_any(&self) -> &dyn Any;
}

/// Implements [`RdfRecord`] from a declarative field listing.
///
/// One `subject` line carries the namespace prefix the subject IRI is built
/// from; each `object` line carries the predicate IRI for that field.
/// Declaration order here is the order triples are emitted in.
///
/// ```
/// use triplegen::{rdf_record, TripleGenerator};
///
/// struct Person {
///     id: String,
///     name: String,
/// }
///
/// rdf_record! {
///     Person {
///         subject id, prefix = "http://example.org/person/";
///         object name, predicate = "http://example.org/hasName";
///     }
/// }
///
/// let person = Person { id: "42".into(), name: "Ada".into() };
/// let triples = TripleGenerator::new().generate(&person).unwrap();
/// assert_eq!(triples.len(), 1);
/// assert_eq!(
///     triples[0].subject.to_string(),
///     "<http://example.org/person/42>"
/// );
/// ```
#[macro_export]
macro_rules! rdf_record {
    ($ty:ty { $( $role:ident $field:ident, $key:ident = $iri:literal ; )+ }) => {
        impl $crate::RdfRecord for $ty {
            fn fields(&self) -> &'static [$crate::FieldSpec] {
                const FIELDS: &[$crate::FieldSpec] = &[
                    $( $crate::rdf_record!(@spec $role $field, $key = $iri), )+
                ];
                FIELDS
            }

            fn values(&self) -> ::std::vec::Vec<$crate::Value> {
                ::std::vec![
                    $( $crate::Value::from(self.$field.clone()), )+
                ]
            }

            fn type_name(&self) -> &'static str {
                ::std::any::type_name::<$ty>()
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }
    };
    (@spec subject $field:ident, prefix = $iri:literal) => {
        $crate::FieldSpec {
            name: ::core::stringify!($field),
            role: $crate::FieldRole::Subject { prefix: $iri },
        }
    };
    (@spec object $field:ident, predicate = $iri:literal) => {
        $crate::FieldSpec {
            name: ::core::stringify!($field),
            role: $crate::FieldRole::Object { predicate: $iri },
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueKind;

    struct Sensor {
        serial: String,
        reading: i64,
        online: bool,
    }

    rdf_record! {
        Sensor {
            subject serial, prefix = "http://example.org/sensor/";
            object reading, predicate = "http://example.org/hasReading";
            object online, predicate = "http://example.org/isOnline";
        }
    }

    #[test]
    fn test_macro_declares_fields_in_order() {
        let sensor = Sensor {
            serial: "s-1".into(),
            reading: 12,
            online: true,
        };

        let fields = sensor.fields();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].name, "serial");
        assert_eq!(
            fields[0].role,
            FieldRole::Subject {
                prefix: "http://example.org/sensor/"
            }
        );
        assert_eq!(fields[1].name, "reading");
        assert_eq!(
            fields[1].role,
            FieldRole::Object {
                predicate: "http://example.org/hasReading"
            }
        );
        assert_eq!(fields[2].name, "online");
    }

    #[test]
    fn test_macro_yields_values_in_order() {
        let sensor = Sensor {
            serial: "s-1".into(),
            reading: 12,
            online: true,
        };

        let values = sensor.values();
        assert_eq!(values.len(), 3);
        assert_eq!(values[0], Value::from("s-1"));
        assert_eq!(values[1].kind(), ValueKind::Integer);
        assert_eq!(values[2], Value::from(true));
    }

    #[test]
    fn test_type_name_names_the_type() {
        let sensor = Sensor {
            serial: "s-1".into(),
            reading: 0,
            online: false,
        };
        assert!(sensor.type_name().ends_with("Sensor"));
    }
}
