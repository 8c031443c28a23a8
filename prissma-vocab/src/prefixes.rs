//! Prefix table: bidirectional map between short prefixes and namespace IRIs
//!
//! The table is owned by a policy document for its lifetime and is mutated
//! only at construction or parse time. Iteration order is deterministic
//! (BTreeMap), so serialized `@prefix` / `PREFIX` headers are stable.

use std::collections::BTreeMap;

/// Default namespace for freshly created policy documents.
///
/// Parsed documents override this with their own base from `@prefix : <...>`.
pub const DEFAULT_BASE: &str = "http://ns.inria.fr/prissma/policies#";

/// Bidirectional prefix ⇄ namespace map.
///
/// Forward lookup (`prefix -> namespace`) is a direct map access; reverse
/// lookup scans the table, which is fine at vocabulary scale (~15 entries).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixTable {
    map: BTreeMap<String, String>,
}

impl PrefixTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    /// Create a table seeded with the access-control vocabulary prefixes
    /// and the given policy-document base namespace bound to `:`.
    pub fn with_base(base: impl Into<String>) -> Self {
        let mut table = Self::new();
        table.insert("", base);
        table.insert("rdf", crate::rdf::NS);
        table.insert("rdfs", crate::rdfs::NS);
        table.insert("xsd", crate::xsd::NS);
        table.insert("foaf", crate::foaf::NS);
        table.insert("prissma", crate::prissma::NS);
        table.insert("s4ac", crate::s4ac::NS);
        table.insert("geo", crate::geo::NS);
        table.insert("ao", crate::ao::NS);
        table.insert("tl", crate::tl::NS);
        table.insert("time", crate::time::NS);
        table.insert("hard", crate::hard::NS);
        table.insert("soft", crate::soft::NS);
        table.insert("common", crate::common::NS);
        table
    }

    /// Add or replace a prefix binding
    pub fn insert(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.map.insert(prefix.into(), namespace.into());
    }

    /// Get the namespace bound to a prefix
    pub fn namespace(&self, prefix: &str) -> Option<&str> {
        self.map.get(prefix).map(String::as_str)
    }

    /// Find the prefix bound to a namespace IRI (reverse scan)
    pub fn prefix_for(&self, namespace: &str) -> Option<&str> {
        self.map
            .iter()
            .find(|(_, ns)| ns.as_str() == namespace)
            .map(|(p, _)| p.as_str())
    }

    /// Expand a `prefix:local` name to an absolute IRI.
    ///
    /// Returns `None` when there is no `:` or the prefix is unknown; the
    /// caller decides whether that is a pass-through or an error.
    pub fn expand(&self, prefixed: &str) -> Option<String> {
        let (prefix, local) = prefixed.split_once(':')?;
        let ns = self.map.get(prefix)?;
        Some(format!("{}{}", ns, local))
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over bindings in deterministic (lexicographic) order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(p, ns)| (p.as_str(), ns.as_str()))
    }

    /// Render the table as a Turtle `@prefix` header block
    pub fn turtle_header(&self) -> String {
        let mut out = String::new();
        for (prefix, ns) in self.iter() {
            out.push_str(&format!("@prefix {}: <{}> .\n", prefix, ns));
        }
        out
    }

    /// Render the table as a SPARQL `PREFIX` header block
    pub fn sparql_header(&self) -> String {
        let mut out = String::new();
        for (prefix, ns) in self.iter() {
            out.push_str(&format!("PREFIX {}: <{}>\n", prefix, ns));
        }
        out
    }
}

impl Default for PrefixTable {
    fn default() -> Self {
        Self::with_base(DEFAULT_BASE)
    }
}
