//! DocumentGraph: ordered statement store with a derived pattern index
//!
//! One `Vec` of slots is the single source of truth. Each occupied slot holds
//! a statement in both encodings; the key index maps a normalized
//! [`TripleKey`] to the slot position. Removal blanks a slot instead of
//! splicing, so the positions of every other statement - and therefore the
//! serialized document layout - never move under edits.

use crate::normalize::{normalize, normalize_pattern};
use crate::{GraphSink, Triple, TripleKey, TriplePattern};
use prissma_vocab::prefixes::PrefixTable;
use rustc_hash::FxHashMap;

/// A statement held in both encodings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredTriple {
    /// Prefixed form, object carrying its `.` statement terminator
    pub prefixed: Triple,
    /// Normalized form (expanded IRIs, unwrapped literals)
    pub normalized: Triple,
}

/// Indexed, order-preserving graph for one policy document.
///
/// All operations are synchronous and single-threaded; the UI edits one
/// document at a time.
#[derive(Clone, Debug)]
pub struct DocumentGraph {
    /// Statements in insertion order; `None` is a blanked (removed) slot
    slots: Vec<Option<StoredTriple>>,
    /// Normalized key -> slot position
    index: FxHashMap<TripleKey, usize>,
    /// Prefix table owned by this document for its lifetime
    prefixes: PrefixTable,
}

impl DocumentGraph {
    /// Create an empty graph with the default access-control prefix table
    pub fn new() -> Self {
        Self::with_prefixes(PrefixTable::default())
    }

    /// Create an empty graph with an explicit prefix table
    pub fn with_prefixes(prefixes: PrefixTable) -> Self {
        Self {
            slots: Vec::new(),
            index: FxHashMap::default(),
            prefixes,
        }
    }

    /// The document's prefix table
    pub fn prefixes(&self) -> &PrefixTable {
        &self.prefixes
    }

    /// Append a statement given in prefixed encoding.
    ///
    /// A `.` terminator is appended to the object if missing. Insertion
    /// order is preserved; later adds never reorder earlier statements.
    pub fn add(&mut self, triple: Triple) {
        let mut prefixed = triple;
        if !prefixed.object.ends_with('.') {
            prefixed.object.push('.');
        }
        let normalized = normalize(&prefixed, &self.prefixes);
        let position = self.slots.len();
        self.index.insert(normalized.key(), position);
        self.slots.push(Some(StoredTriple {
            prefixed,
            normalized,
        }));
    }

    /// Blank every statement matching the pattern; returns how many.
    ///
    /// The pattern may be in prefixed or absolute encoding; it is normalized
    /// before matching. Positions of all other statements are unaffected. A
    /// pattern matching nothing is a no-op.
    pub fn remove(&mut self, pattern: &TriplePattern) -> usize {
        let pattern = normalize_pattern(pattern, &self.prefixes);
        let mut removed = 0;
        for slot in &mut self.slots {
            let matched = slot
                .as_ref()
                .map_or(false, |st| pattern.matches(&st.normalized));
            if matched {
                if let Some(st) = slot.take() {
                    self.index.remove(&st.normalized.key());
                    removed += 1;
                }
            }
        }
        removed
    }

    /// Replace the first statement matching `old` with `new`, in place.
    ///
    /// The edited statement keeps its slot, so document order is preserved;
    /// the index is re-keyed from the old normalized key to the new one.
    /// Returns `false` when nothing matched.
    pub fn update(&mut self, old: &TriplePattern, new: Triple) -> bool {
        let old = normalize_pattern(old, &self.prefixes);

        let mut prefixed = new;
        if !prefixed.object.ends_with('.') {
            prefixed.object.push('.');
        }
        let normalized = normalize(&prefixed, &self.prefixes);

        for (position, slot) in self.slots.iter_mut().enumerate() {
            if let Some(st) = slot {
                if old.matches(&st.normalized) {
                    self.index.remove(&st.normalized.key());
                    self.index.insert(normalized.key(), position);
                    *st = StoredTriple {
                        prefixed,
                        normalized,
                    };
                    return true;
                }
            }
        }
        false
    }

    /// All statements matching the pattern, in normalized encoding and
    /// document order
    pub fn matches(&self, pattern: &TriplePattern) -> Vec<&Triple> {
        let pattern = normalize_pattern(pattern, &self.prefixes);
        self.slots
            .iter()
            .filter_map(|slot| slot.as_ref())
            .map(|st| &st.normalized)
            .filter(|t| pattern.matches(t))
            .collect()
    }

    /// First statement matching the pattern, in normalized encoding
    pub fn get(&self, pattern: &TriplePattern) -> Option<&Triple> {
        let pattern = normalize_pattern(pattern, &self.prefixes);
        self.slots
            .iter()
            .filter_map(|slot| slot.as_ref())
            .map(|st| &st.normalized)
            .find(|t| pattern.matches(t))
    }

    /// Slot position of a normalized key
    pub fn position(&self, key: &TripleKey) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// The statement at a slot position, if not blanked
    pub fn stored(&self, position: usize) -> Option<&StoredTriple> {
        self.slots.get(position).and_then(Option::as_ref)
    }

    /// Number of slots, blanked ones included (= serialized line count)
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check whether the graph holds no statements at all
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of live (non-blanked) statements
    pub fn triple_count(&self) -> usize {
        self.index.len()
    }

    /// Rebuild the key index by re-walking the slots in order.
    ///
    /// Used after a full re-parse, where incremental tracking is not to be
    /// trusted.
    pub fn rebuild_index(&mut self) {
        self.index.clear();
        for (position, slot) in self.slots.iter().enumerate() {
            if let Some(st) = slot {
                self.index.insert(st.normalized.key(), position);
            }
        }
    }

    /// Serialize to Turtle: `@prefix` header, then one statement per line in
    /// insertion order. Blanked slots serialize as empty lines so the layout
    /// of the surviving statements is untouched.
    pub fn to_turtle(&self) -> String {
        let mut out = self.prefixes.turtle_header();
        out.push('\n');
        for slot in &self.slots {
            match slot {
                Some(st) => {
                    out.push_str(&st.prefixed.to_string());
                    out.push('\n');
                }
                None => out.push('\n'),
            }
        }
        out
    }
}

impl Default for DocumentGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphSink for DocumentGraph {
    fn on_prefix(&mut self, prefix: &str, namespace: &str) {
        self.prefixes.insert(prefix, namespace);
    }

    fn on_triple(&mut self, triple: Triple) {
        self.add(triple);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy_triple() -> Triple {
        Triple::new(":Pol1", "rdf:type", "s4ac:AccessPolicy")
    }

    #[test]
    fn test_add_appends_terminator_and_indexes() {
        let mut graph = DocumentGraph::new();
        graph.add(policy_triple());

        assert_eq!(graph.len(), 1);
        assert_eq!(graph.triple_count(), 1);

        let stored = graph.stored(0).unwrap();
        assert_eq!(stored.prefixed.object, "s4ac:AccessPolicy.");
        assert_eq!(
            stored.normalized.object,
            "http://ns.inria.fr/s4ac/v2#AccessPolicy"
        );
        assert_eq!(graph.position(&stored.normalized.key()), Some(0));
    }

    #[test]
    fn test_serialization_contains_statement() {
        let mut graph = DocumentGraph::new();
        graph.add(policy_triple());

        let text = graph.to_turtle();
        assert!(text.contains(":Pol1 rdf:type s4ac:AccessPolicy.\n"));
        assert!(text.contains("@prefix s4ac: <http://ns.inria.fr/s4ac/v2#> .\n"));
    }

    #[test]
    fn test_remove_blanks_without_moving_neighbours() {
        let mut graph = DocumentGraph::new();
        graph.add(Triple::new(":p", "rdfs:label", "\"one\""));
        graph.add(Triple::new(":p", "rdfs:label", "\"two\""));
        graph.add(Triple::new(":p", "rdfs:label", "\"three\""));

        let removed = graph.remove(&TriplePattern::new(
            None::<String>,
            None::<String>,
            Some("\"two\""),
        ));
        assert_eq!(removed, 1);

        // Slot count is unchanged; neighbours keep position and content
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.stored(0).unwrap().normalized.object, "one");
        assert!(graph.stored(1).is_none());
        assert_eq!(graph.stored(2).unwrap().normalized.object, "three");

        let all = graph.matches(&TriplePattern::any());
        assert_eq!(all.len(), 2);
        assert!(all.iter().all(|t| t.object != "two"));

        // Blanked slot serializes as an empty line
        let text = graph.to_turtle();
        assert!(text.contains("\"one\".\n\n:p rdfs:label \"three\"."));
    }

    #[test]
    fn test_remove_no_match_is_noop() {
        let mut graph = DocumentGraph::new();
        graph.add(policy_triple());

        let removed = graph.remove(&TriplePattern::with_subject(":Nothing"));
        assert_eq!(removed, 0);
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.triple_count(), 1);
        let stored = graph.stored(0).unwrap();
        assert_eq!(graph.position(&stored.normalized.key()), Some(0));
    }

    #[test]
    fn test_update_keeps_slot_position() {
        let mut graph = DocumentGraph::new();
        graph.add(Triple::new(":acs", "rdf:type", "s4ac:ConjunctiveAccessConditionSet"));
        graph.add(Triple::new(":acs", "s4ac:hasAccessCondition", ":AC-1"));

        let updated = graph.update(
            &TriplePattern::new(
                Some(":acs"),
                Some("rdf:type"),
                Some("s4ac:ConjunctiveAccessConditionSet"),
            ),
            Triple::new(":acs", "rdf:type", "s4ac:DisjunctiveAccessConditionSet"),
        );
        assert!(updated);

        // The edited statement did not move to the end
        let stored = graph.stored(0).unwrap();
        assert_eq!(stored.prefixed.object, "s4ac:DisjunctiveAccessConditionSet.");
        assert_eq!(
            graph.stored(1).unwrap().prefixed.object,
            ":AC-1."
        );

        // Index points the new key at the old position; old key is gone
        assert_eq!(graph.position(&stored.normalized.key()), Some(0));
        let old_key = Triple::new(
            "http://ns.inria.fr/prissma/policies#acs",
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#type",
            "http://ns.inria.fr/s4ac/v2#ConjunctiveAccessConditionSet",
        )
        .key();
        assert_eq!(graph.position(&old_key), None);
    }

    #[test]
    fn test_update_no_match_returns_false() {
        let mut graph = DocumentGraph::new();
        graph.add(policy_triple());
        assert!(!graph.update(
            &TriplePattern::with_subject(":Nothing"),
            Triple::new(":x", "rdf:type", ":Y"),
        ));
    }

    #[test]
    fn test_match_accepts_prefixed_and_absolute_patterns() {
        let mut graph = DocumentGraph::new();
        graph.add(policy_triple());

        let by_prefixed = graph.matches(&TriplePattern::with_predicate("rdf:type"));
        assert_eq!(by_prefixed.len(), 1);

        let by_absolute = graph.matches(&TriplePattern::with_predicate(
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#type",
        ));
        assert_eq!(by_absolute.len(), 1);
        // Results come back in absolute form
        assert_eq!(
            by_absolute[0].subject,
            "http://ns.inria.fr/prissma/policies#Pol1"
        );
    }

    #[test]
    fn test_rebuild_index() {
        let mut graph = DocumentGraph::new();
        graph.add(Triple::new(":a", "rdfs:label", "\"a\""));
        graph.add(Triple::new(":b", "rdfs:label", "\"b\""));
        graph.remove(&TriplePattern::with_subject(":a"));

        graph.rebuild_index();
        assert_eq!(graph.triple_count(), 1);
        let stored = graph.stored(1).unwrap();
        assert_eq!(graph.position(&stored.normalized.key()), Some(1));
    }

    #[test]
    fn test_sink_fills_graph_in_document_order() {
        let mut graph = DocumentGraph::with_prefixes(PrefixTable::new());
        graph.on_prefix("ex", "http://example.org/");
        graph.on_triple(Triple::new("ex:a", "ex:p", "ex:b"));
        graph.on_triple(Triple::new("ex:b", "ex:p", "ex:c"));

        assert_eq!(graph.triple_count(), 2);
        assert_eq!(graph.stored(0).unwrap().normalized.subject, "http://example.org/a");
        assert_eq!(graph.stored(1).unwrap().normalized.subject, "http://example.org/b");
    }
}
