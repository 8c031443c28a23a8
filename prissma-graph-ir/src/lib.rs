//! Dual-representation RDF graph model for access-policy documents
//!
//! A policy document needs two things at once: positional edits that preserve
//! the serialized statement order, and pattern queries over the same triple
//! set. This crate provides both from a single source of truth:
//!
//! - [`Triple`] / [`TriplePattern`]: a subject/predicate/object statement in
//!   either prefixed ("Turtle") or normalized (absolute-IRI, unwrapped
//!   literal) encoding.
//! - [`normalize`]: best-effort conversion between the two encodings. An
//!   unknown prefix is non-fatal; the term passes through unresolved.
//! - [`DocumentGraph`]: an ordered slot vector (insertion order =
//!   serialization order, removal blanks a slot without moving its
//!   neighbours) plus a derived [`TripleKey`] index for pattern matching.
//! - [`GraphSink`]: the event seam a Turtle parser drives to fill a graph.

mod normalize;
mod sink;
mod store;
mod triple;

pub use normalize::{expand_term, normalize, normalize_object, normalize_pattern, to_prefixed};
pub use sink::{GraphCollector, GraphSink};
pub use store::{DocumentGraph, StoredTriple};
pub use triple::{Triple, TripleKey, TriplePattern};
