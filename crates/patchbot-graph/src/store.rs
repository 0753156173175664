//! In-memory triple store with wildcard pattern queries

use std::collections::HashSet;

use crate::term::{Term, Triple};

/// One position of a triple query.
#[derive(Debug, Clone, Copy)]
pub enum Pattern<'a> {
    /// Unbound: matches any term
    Any,
    /// Matches exactly this term
    One(&'a Term),
    /// Matches any term in the set
    OneOf(&'a [Term]),
}

impl Pattern<'_> {
    pub fn matches(&self, term: &Term) -> bool {
        match self {
            Self::Any => true,
            Self::One(expected) => *expected == term,
            Self::OneOf(set) => set.contains(term),
        }
    }
}

impl<'a> From<&'a Term> for Pattern<'a> {
    fn from(term: &'a Term) -> Self {
        Self::One(term)
    }
}

impl<'a> From<&'a [Term]> for Pattern<'a> {
    fn from(terms: &'a [Term]) -> Self {
        Self::OneOf(terms)
    }
}

/// Append-only set of triples.
///
/// Iteration follows insertion order, so queries over a store built from
/// the same files always see matches in the same order.
#[derive(Debug, Clone, Default)]
pub struct TripleStore {
    triples: Vec<Triple>,
    seen: HashSet<Triple>,
}

impl TripleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a triple. Returns false if it was already present.
    pub fn insert(&mut self, triple: Triple) -> bool {
        if self.seen.contains(&triple) {
            return false;
        }
        self.seen.insert(triple.clone());
        self.triples.push(triple);
        true
    }

    /// Add every triple, returning how many were new.
    pub fn extend(&mut self, triples: impl IntoIterator<Item = Triple>) -> usize {
        let mut added = 0;
        for triple in triples {
            if self.insert(triple) {
                added += 1;
            }
        }
        added
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        self.seen.contains(triple)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// All triples matching the three patterns.
    pub fn triples<'s, 'p>(
        &'s self,
        subject: Pattern<'p>,
        predicate: Pattern<'p>,
        object: Pattern<'p>,
    ) -> impl Iterator<Item = &'s Triple> + use<'s, 'p> {
        self.triples.iter().filter(move |triple| {
            subject.matches(&triple.subject)
                && predicate.matches(&triple.predicate)
                && object.matches(&triple.object)
        })
    }

    /// Distinct subjects declared with `rdf:type` `class`, in discovery order.
    pub fn subjects_of_type(&self, class: &Term) -> Vec<&Term> {
        let mut subjects: Vec<&Term> = Vec::new();
        for triple in self.triples(
            Pattern::Any,
            Pattern::One(&crate::vocab::rdf::TYPE),
            Pattern::One(class),
        ) {
            if !subjects.contains(&&triple.subject) {
                subjects.push(&triple.subject);
            }
        }
        subjects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{doap, lv2, rdf};

    fn sample() -> TripleStore {
        let mut store = TripleStore::new();
        store.insert(Triple::new(
            Term::iri("urn:a"),
            rdf::TYPE.clone(),
            lv2::PLUGIN.clone(),
        ));
        store.insert(Triple::new(
            Term::iri("urn:a"),
            doap::NAME.clone(),
            Term::literal("A"),
        ));
        store.insert(Triple::new(
            Term::iri("urn:b"),
            rdf::TYPE.clone(),
            lv2::PLUGIN.clone(),
        ));
        store
    }

    #[test]
    fn test_insert_deduplicates() {
        let mut store = sample();
        let again = Triple::new(Term::iri("urn:a"), doap::NAME.clone(), Term::literal("A"));
        assert!(!store.insert(again));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_extend_counts_new_triples_only() {
        let mut store = sample();
        let added = store.extend(vec![
            Triple::new(Term::iri("urn:a"), doap::NAME.clone(), Term::literal("A")),
            Triple::new(Term::iri("urn:c"), doap::NAME.clone(), Term::literal("C")),
        ]);
        assert_eq!(added, 1);
    }

    #[test]
    fn test_wildcard_query() {
        let store = sample();
        let count = store
            .triples(Pattern::Any, Pattern::One(&rdf::TYPE), Pattern::Any)
            .count();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_one_of_query() {
        let store = sample();
        let subjects = [Term::iri("urn:b"), Term::iri("urn:z")];
        let count = store
            .triples(Pattern::OneOf(&subjects), Pattern::Any, Pattern::Any)
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_subjects_of_type_in_discovery_order() {
        let store = sample();
        let subjects = store.subjects_of_type(&lv2::PLUGIN);
        assert_eq!(subjects, vec![&Term::iri("urn:a"), &Term::iri("urn:b")]);
    }
}
