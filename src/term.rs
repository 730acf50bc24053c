//! RDF term definitions
//!
//! Wrapper types around the oxrdf library for the node values the mapping
//! engine emits. Every node reaches the caller through the node adapter;
//! nothing in the engine builds one of these inline.

use oxrdf::{Literal as OxLiteral, NamedNode as OxNamedNode};
use std::fmt;
use thiserror::Error;

/// Term errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TermError {
    /// Invalid IRI
    #[error("Invalid IRI: {0}")]
    InvalidIri(String),
}

pub type TermResult<T> = Result<T, TermError>;

/// Named node (IRI)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamedNode(OxNamedNode);

impl NamedNode {
    /// Create a new named node from an IRI string
    pub fn new(iri: &str) -> TermResult<Self> {
        OxNamedNode::new(iri)
            .map(Self)
            .map_err(|e| TermError::InvalidIri(e.to_string()))
    }

    /// Get the IRI string
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Get the inner oxrdf NamedNode
    pub fn inner(&self) -> &OxNamedNode {
        &self.0
    }
}

impl fmt::Display for NamedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.as_str())
    }
}

impl From<OxNamedNode> for NamedNode {
    fn from(node: OxNamedNode) -> Self {
        Self(node)
    }
}

impl From<NamedNode> for OxNamedNode {
    fn from(node: NamedNode) -> Self {
        node.0
    }
}

/// RDF literal value with a datatype tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal(OxLiteral);

impl Literal {
    /// Create a typed literal
    pub fn new_typed_literal(value: impl Into<String>, datatype: NamedNode) -> Self {
        Self(OxLiteral::new_typed_literal(value, datatype.0))
    }

    /// Get the lexical value
    pub fn value(&self) -> &str {
        self.0.value()
    }

    /// Get the datatype
    pub fn datatype(&self) -> NamedNode {
        NamedNode(self.0.datatype().into_owned())
    }

    /// Get the inner oxrdf Literal
    pub fn inner(&self) -> &OxLiteral {
        &self.0
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"^^{}", self.value(), self.datatype())
    }
}

impl From<OxLiteral> for Literal {
    fn from(lit: OxLiteral) -> Self {
        Self(lit)
    }
}

impl From<Literal> for OxLiteral {
    fn from(lit: Literal) -> Self {
        lit.0
    }
}

/// A node the mapper emits: a URI (identifier) node or a typed literal node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    /// URI node
    Uri(NamedNode),
    /// Typed literal node
    Literal(Literal),
}

impl Node {
    /// Check if this is a URI node
    pub fn is_uri(&self) -> bool {
        matches!(self, Node::Uri(_))
    }

    /// Check if this is a literal node
    pub fn is_literal(&self) -> bool {
        matches!(self, Node::Literal(_))
    }

    /// Get the named node if this is a URI node
    pub fn as_uri(&self) -> Option<&NamedNode> {
        match self {
            Node::Uri(n) => Some(n),
            Node::Literal(_) => None,
        }
    }

    /// Get the literal if this is a literal node
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Node::Uri(_) => None,
            Node::Literal(l) => Some(l),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Uri(n) => write!(f, "{}", n),
            Node::Literal(l) => write!(f, "{}", l),
        }
    }
}

impl From<NamedNode> for Node {
    fn from(node: NamedNode) -> Self {
        Node::Uri(node)
    }
}

impl From<Literal> for Node {
    fn from(lit: Literal) -> Self {
        Node::Literal(lit)
    }
}

/// RDF triple (subject-predicate-object)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    /// Subject
    pub subject: Node,
    /// Predicate
    pub predicate: Node,
    /// Object
    pub object: Node,
}

impl Triple {
    /// Create a new triple
    pub fn new(subject: Node, predicate: Node, object: Node) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}
