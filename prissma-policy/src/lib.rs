//! Access-condition compiler and policy model for PRISSMA/S4AC access control
//!
//! This crate maintains the in-memory model of one access-control policy and
//! compiles between its two representations:
//!
//! - a structured, UI-friendly description of an access condition ("user is
//!   X", "device battery vendor is Y", "time between T1 and T2", "within R
//!   km of a point"), and
//! - SPARQL ASK query text / Turtle context graphs understood by the runtime
//!   enforcement engine.
//!
//! # Core Types
//!
//! - [`AccessConditionModel`]: one condition's dimensions (user, device,
//!   environment, time, outdoor) with `bool`-returning commit gates
//! - [`generate_ask_query`] / [`generate_context_graph`]: the compiler
//! - [`parse_access_condition`]: the decompiler
//! - [`PolicyModel`]: a full policy document (privileges, targets, one or
//!   many conditions) over an indexed graph that stays the single
//!   persistable artifact
//! - [`PolicyBackend`]: the async persistence seam, implemented by a
//!   collaborator
//!
//! # Error Semantics
//!
//! Expected conditions never raise: an unknown keyword is skipped with a
//! warning, an invalid dimension fails its commit gate, an incomplete
//! outdoor dimension is silently omitted. [`PolicyError`] covers structural
//! corruption (zero or several policy roots) and collaborator failures only.
//! Parsing a fetched document builds a temporary graph and swaps it in on
//! success, so a parse failure leaves the previous state intact.

mod backend;
mod compile;
mod decompile;
mod error;
mod model;
mod policy;

pub use backend::PolicyBackend;
pub use compile::{generate_ask_query, generate_context_graph};
pub use decompile::parse_access_condition;
pub use error::{PolicyError, Result};
pub use model::{
    AccessConditionModel, KeywordDimension, KeywordValue, OutdoorDimension, TimeDimension,
    TimeLayout,
};
pub use policy::{AccessCondition, AcsType, PolicyModel, Privilege};
