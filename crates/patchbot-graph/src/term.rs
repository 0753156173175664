//! Graph terms and triples

use std::borrow::Cow;
use std::fmt;

/// A node or value in the description graph.
///
/// Literals keep only their lexical value; datatype and language tags are
/// not needed by any metadata query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    /// Named node, identified by an absolute IRI
    Iri(Cow<'static, str>),
    /// Anonymous node, identified by a parser-generated id
    Blank(Cow<'static, str>),
    /// Literal value
    Literal(Cow<'static, str>),
}

impl Term {
    /// Named node from a static IRI, usable in `static` items.
    pub const fn from_static(iri: &'static str) -> Self {
        Self::Iri(Cow::Borrowed(iri))
    }

    pub fn iri(iri: impl Into<String>) -> Self {
        Self::Iri(Cow::Owned(iri.into()))
    }

    pub fn blank(id: impl Into<String>) -> Self {
        Self::Blank(Cow::Owned(id.into()))
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(Cow::Owned(value.into()))
    }

    /// The IRI, blank node id or literal value.
    pub fn value(&self) -> &str {
        match self {
            Self::Iri(v) | Self::Blank(v) | Self::Literal(v) => v,
        }
    }

    /// Whether the term can be the subject of other triples.
    pub fn is_node(&self) -> bool {
        matches!(self, Self::Iri(_) | Self::Blank(_))
    }

    fn from_oxrdf(term: oxrdf::Term) -> Option<Self> {
        match term {
            oxrdf::Term::NamedNode(node) => Some(Self::iri(node.as_str())),
            oxrdf::Term::BlankNode(node) => Some(Self::blank(node.as_str())),
            oxrdf::Term::Literal(literal) => Some(Self::literal(literal.value())),
            #[allow(unreachable_patterns)]
            _ => None,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(v) => write!(f, "<{v}>"),
            Self::Blank(v) => write!(f, "_:{v}"),
            Self::Literal(v) => write!(f, "{v:?}"),
        }
    }
}

/// A subject/predicate/object statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    pub subject: Term,
    pub predicate: Term,
    pub object: Term,
}

impl Triple {
    pub fn new(subject: Term, predicate: Term, object: Term) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }

    /// Convert a parsed triple. Quoted-triple objects are dropped.
    pub(crate) fn from_oxrdf(triple: oxrdf::Triple) -> Option<Self> {
        Some(Self {
            subject: Term::from_oxrdf(oxrdf::Term::from(triple.subject))?,
            predicate: Term::iri(triple.predicate.as_str()),
            object: Term::from_oxrdf(triple.object)?,
        })
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}
