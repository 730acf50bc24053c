//! Node adapter
//!
//! Converts primitive field values into typed literal nodes and IRI strings
//! into URI nodes. The engine obtains every node it emits through this
//! contract; the conversion table is registered by the embedding
//! application, never hardcoded in the engine.

use crate::term::{Literal, NamedNode, Node};
use crate::value::{Value, ValueKind};
use crate::vocab;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Adapter errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdapterError {
    /// No literal conversion registered for the value's kind
    #[error("no literal conversion registered for {0} values")]
    UnsupportedType(ValueKind),

    /// String is not a syntactically valid URI
    #[error("invalid URI: {0}")]
    InvalidUri(String),
}

pub type AdapterResult<T> = Result<T, AdapterError>;

/// Builds the nodes the mapping engine emits.
pub trait NodeAdapter: Send + Sync {
    /// Convert a primitive value into a typed literal node.
    fn literal_node(&self, value: &Value) -> AdapterResult<Node>;

    /// Construct a URI node from an already-fully-formed IRI string.
    fn uri_node(&self, uri: &str) -> AdapterResult<Node>;
}

/// Conversion from a value into a literal node, registered per [`ValueKind`].
pub type LiteralConversion = fn(&Value) -> AdapterResult<Literal>;

/// Default adapter: literals tagged with their canonical XSD datatype.
///
/// Registers string, integer, unsigned-long and boolean conversions out of
/// the box. Further kinds are registered by the embedding application:
///
/// ```
/// use triplegen::{ValueKind, XsdNodeAdapter};
///
/// let mut adapter = XsdNodeAdapter::new();
/// adapter.register(ValueKind::Float, XsdNodeAdapter::double_literal);
/// ```
pub struct XsdNodeAdapter {
    conversions: FxHashMap<ValueKind, LiteralConversion>,
}

impl XsdNodeAdapter {
    /// Create an adapter with the default conversion table
    pub fn new() -> Self {
        let mut adapter = Self {
            conversions: FxHashMap::default(),
        };
        adapter.register(ValueKind::String, Self::string_literal);
        adapter.register(ValueKind::Integer, Self::integer_literal);
        adapter.register(ValueKind::UnsignedLong, Self::unsigned_long_literal);
        adapter.register(ValueKind::Boolean, Self::boolean_literal);
        adapter
    }

    /// Register or replace the conversion for a value kind
    pub fn register(&mut self, kind: ValueKind, conversion: LiteralConversion) {
        self.conversions.insert(kind, conversion);
    }

    /// Literal tagged xsd:string
    pub fn string_literal(value: &Value) -> AdapterResult<Literal> {
        typed_literal(value, vocab::XSD_STRING)
    }

    /// Literal tagged xsd:integer
    pub fn integer_literal(value: &Value) -> AdapterResult<Literal> {
        typed_literal(value, vocab::XSD_INTEGER)
    }

    /// Literal tagged xsd:unsignedLong
    pub fn unsigned_long_literal(value: &Value) -> AdapterResult<Literal> {
        typed_literal(value, vocab::XSD_UNSIGNED_LONG)
    }

    /// Literal tagged xsd:boolean
    pub fn boolean_literal(value: &Value) -> AdapterResult<Literal> {
        typed_literal(value, vocab::XSD_BOOLEAN)
    }

    /// Literal tagged xsd:double, for callers that register float fields
    pub fn double_literal(value: &Value) -> AdapterResult<Literal> {
        typed_literal(value, vocab::XSD_DOUBLE)
    }
}

impl Default for XsdNodeAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeAdapter for XsdNodeAdapter {
    fn literal_node(&self, value: &Value) -> AdapterResult<Node> {
        let conversion = self
            .conversions
            .get(&value.kind())
            .ok_or(AdapterError::UnsupportedType(value.kind()))?;
        Ok(Node::Literal(conversion(value)?))
    }

    fn uri_node(&self, uri: &str) -> AdapterResult<Node> {
        let node =
            NamedNode::new(uri).map_err(|_| AdapterError::InvalidUri(uri.to_string()))?;
        Ok(Node::Uri(node))
    }
}

fn typed_literal(value: &Value, datatype: &str) -> AdapterResult<Literal> {
    let datatype =
        NamedNode::new(datatype).map_err(|_| AdapterError::InvalidUri(datatype.to_string()))?;
    Ok(Literal::new_typed_literal(value.lexical(), datatype))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_datatypes() {
        let adapter = XsdNodeAdapter::new();

        let cases = [
            (Value::from("Ada"), vocab::XSD_STRING, "Ada"),
            (Value::from(-3i64), vocab::XSD_INTEGER, "-3"),
            (Value::from(42u64), vocab::XSD_UNSIGNED_LONG, "42"),
            (Value::from(true), vocab::XSD_BOOLEAN, "true"),
        ];

        for (value, datatype, lexical) in cases {
            let node = adapter.literal_node(&value).unwrap();
            let lit = node.as_literal().unwrap();
            assert_eq!(lit.value(), lexical);
            assert_eq!(lit.datatype().as_str(), datatype);
        }
    }

    #[test]
    fn test_unregistered_kind_is_unsupported() {
        let adapter = XsdNodeAdapter::new();
        let err = adapter.literal_node(&Value::from(1.5f64)).unwrap_err();
        assert_eq!(err, AdapterError::UnsupportedType(ValueKind::Float));
    }

    #[test]
    fn test_register_extends_the_table() {
        let mut adapter = XsdNodeAdapter::new();
        adapter.register(ValueKind::Float, XsdNodeAdapter::double_literal);

        let node = adapter.literal_node(&Value::from(1.5f64)).unwrap();
        let lit = node.as_literal().unwrap();
        assert_eq!(lit.value(), "1.5");
        assert_eq!(lit.datatype().as_str(), vocab::XSD_DOUBLE);
    }

    #[test]
    fn test_uri_node() {
        let adapter = XsdNodeAdapter::new();
        let node = adapter.uri_node("http://example.org/person/42").unwrap();
        assert!(node.is_uri());
        assert_eq!(node.as_uri().unwrap().as_str(), "http://example.org/person/42");
    }

    #[test]
    fn test_invalid_uri() {
        let adapter = XsdNodeAdapter::new();
        let err = adapter.uri_node("no scheme, no luck").unwrap_err();
        assert_eq!(err, AdapterError::InvalidUri("no scheme, no luck".to_string()));
    }
}
