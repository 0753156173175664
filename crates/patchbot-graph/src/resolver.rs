//! Field query primitives over a [`TripleStore`]

use std::collections::BTreeSet;

use crate::store::{Pattern, TripleStore};

/// Read-only query helper shared by every metadata extractor.
///
/// When several objects match a query, the first one in store order wins.
/// Descriptions are expected to declare each single-valued field once.
#[derive(Debug, Clone, Copy)]
pub struct FieldResolver<'a> {
    store: &'a TripleStore,
}

impl<'a> FieldResolver<'a> {
    pub fn new(store: &'a TripleStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &'a TripleStore {
        self.store
    }

    /// Value of `(subject, predicate, ?)`, trimmed.
    pub fn field(&self, subject: Pattern<'_>, predicate: Pattern<'_>) -> Option<String> {
        self.store
            .triples(subject, predicate, Pattern::Any)
            .next()
            .map(|triple| triple.object.value().trim().to_string())
    }

    /// Value stored on a linked node: finds `(?, predicate, node)` on any
    /// subject, then returns the first `(node, child, ?)`.
    ///
    /// The link is not restricted to one subject because some descriptions
    /// attach shared nodes (developer, GUI) to a separate resource.
    pub fn nested_field(&self, predicate: Pattern<'_>, child: Pattern<'_>) -> Option<String> {
        self.store
            .triples(Pattern::Any, predicate, Pattern::Any)
            .filter(|link| link.object.is_node())
            .find_map(|link| {
                self.store
                    .triples(Pattern::One(&link.object), child, Pattern::Any)
                    .next()
                    .map(|triple| triple.object.value().trim().to_string())
            })
    }

    /// All values of `(subject, predicate, ?)`. With a namespace, values
    /// outside it are dropped and the namespace is stripped from the rest.
    pub fn typed_field(
        &self,
        subject: Pattern<'_>,
        predicate: Pattern<'_>,
        namespace: Option<&str>,
    ) -> BTreeSet<String> {
        self.store
            .triples(subject, predicate, Pattern::Any)
            .filter_map(|triple| {
                let value = triple.object.value();
                match namespace {
                    Some(ns) => value.strip_prefix(ns).map(str::to_string),
                    None => Some(value.to_string()),
                }
            })
            .collect()
    }
}
