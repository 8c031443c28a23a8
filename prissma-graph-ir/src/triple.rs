//! Triple value types
//!
//! A [`Triple`] is three strings; whether they are in prefixed or normalized
//! encoding is a property of where the triple is stored, not of the type.
//! [`TripleKey`] is the structural composite key derived from a normalized
//! triple, and [`TriplePattern`] is a triple with wildcard positions.

use serde::{Deserialize, Serialize};

/// A subject/predicate/object statement.
///
/// Prefixed encoding: `prefix:local`, `<abs-iri>`, `"literal"`, or `_:blank`;
/// objects of stored statements carry a trailing `.` as the Turtle statement
/// terminator. Normalized encoding: expanded IRIs and unwrapped literals.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    /// Subject term
    pub subject: String,
    /// Predicate term
    pub predicate: String,
    /// Object term
    pub object: String,
}

impl Triple {
    /// Create a triple from its three terms
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    /// Derive the structural index key for this triple.
    ///
    /// Only meaningful on the normalized encoding; the key of a prefixed
    /// triple would drift with formatting.
    pub fn key(&self) -> TripleKey {
        TripleKey {
            subject: self.subject.clone(),
            predicate: self.predicate.clone(),
            object: self.object.clone(),
        }
    }
}

impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)
    }
}

/// Structural composite key over a normalized triple.
///
/// Replaces concatenated-string keys: no separator collisions, no trailing
/// punctuation variants, one lookup per triple.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TripleKey {
    subject: String,
    predicate: String,
    object: String,
}

/// A triple with optional positions; `None` is a wildcard.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriplePattern {
    /// Subject term, or `None` to match any subject
    pub subject: Option<String>,
    /// Predicate term, or `None` to match any predicate
    pub predicate: Option<String>,
    /// Object term, or `None` to match any object
    pub object: Option<String>,
}

impl TriplePattern {
    /// Create a pattern from optional terms
    pub fn new(
        subject: Option<impl Into<String>>,
        predicate: Option<impl Into<String>>,
        object: Option<impl Into<String>>,
    ) -> Self {
        Self {
            subject: subject.map(Into::into),
            predicate: predicate.map(Into::into),
            object: object.map(Into::into),
        }
    }

    /// The match-everything pattern
    pub fn any() -> Self {
        Self::default()
    }

    /// Pattern binding only the subject position
    pub fn with_subject(subject: impl Into<String>) -> Self {
        Self {
            subject: Some(subject.into()),
            ..Self::default()
        }
    }

    /// Pattern binding only the predicate position
    pub fn with_predicate(predicate: impl Into<String>) -> Self {
        Self {
            predicate: Some(predicate.into()),
            ..Self::default()
        }
    }

    /// Check whether a triple matches this pattern
    pub fn matches(&self, triple: &Triple) -> bool {
        self.subject
            .as_deref()
            .map_or(true, |s| s == triple.subject)
            && self
                .predicate
                .as_deref()
                .map_or(true, |p| p == triple.predicate)
            && self.object.as_deref().map_or(true, |o| o == triple.object)
    }
}

impl From<Triple> for TriplePattern {
    fn from(t: Triple) -> Self {
        Self {
            subject: Some(t.subject),
            predicate: Some(t.predicate),
            object: Some(t.object),
        }
    }
}
