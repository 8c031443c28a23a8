//! Prefixed ⇄ absolute term conversion
//!
//! Normalization is best-effort: an unknown prefix logs a warning and the
//! term passes through unresolved. Callers must tolerate an un-resolvable
//! term rather than fail the whole edit.

use crate::{Triple, TriplePattern};
use prissma_vocab::prefixes::PrefixTable;
use tracing::warn;

/// Expand a subject/predicate-position term to its absolute form.
///
/// `<iri>` loses its brackets; `_:blank` passes through; anything else is
/// resolved as a `prefix:local` name against the table.
pub fn expand_term(term: &str, prefixes: &PrefixTable) -> String {
    if let Some(inner) = term.strip_prefix('<').and_then(|t| t.strip_suffix('>')) {
        return inner.to_string();
    }
    if term.starts_with("_:") {
        return term.to_string();
    }
    // Already-absolute terms (pattern queries pass them) are left untouched
    if term.contains("://") {
        return term.to_string();
    }
    match prefixes.expand(term) {
        Some(iri) => iri,
        None => {
            warn!(term, "unresolvable prefixed name, passing through");
            term.to_string()
        }
    }
}

/// Expand an object-position term to its absolute form.
///
/// One trailing `.`/`,`/`;` is stripped first - an artifact of statement
/// slicing upstream. Triple-quoted literals are unwrapped before
/// single-quoted forms; remaining terms resolve like subjects.
pub fn normalize_object(object: &str, prefixes: &PrefixTable) -> String {
    let trimmed = strip_trailing_separator(object);

    if let Some(inner) = trimmed
        .strip_prefix("\"\"\"")
        .and_then(|t| t.strip_suffix("\"\"\""))
    {
        return inner.to_string();
    }
    if let Some(stripped) = trimmed.strip_prefix('"') {
        // Typed literal: `"value"^^xsd:dateTime` keys on the value alone
        if let Some(idx) = stripped.rfind("\"^^") {
            return stripped[..idx].to_string();
        }
        if let Some(inner) = stripped.strip_suffix('"') {
            return inner.to_string();
        }
    }
    if let Some(inner) = trimmed.strip_prefix('\'').and_then(|t| t.strip_suffix('\'')) {
        return inner.to_string();
    }
    expand_term(trimmed, prefixes)
}

/// Convert a prefixed triple to its normalized form
pub fn normalize(triple: &Triple, prefixes: &PrefixTable) -> Triple {
    Triple {
        subject: expand_term(&triple.subject, prefixes),
        predicate: expand_term(&triple.predicate, prefixes),
        object: normalize_object(&triple.object, prefixes),
    }
}

/// Convert the bound positions of a pattern to their normalized form
pub fn normalize_pattern(pattern: &TriplePattern, prefixes: &PrefixTable) -> TriplePattern {
    TriplePattern {
        subject: pattern.subject.as_deref().map(|s| expand_term(s, prefixes)),
        predicate: pattern
            .predicate
            .as_deref()
            .map(|p| expand_term(p, prefixes)),
        object: pattern
            .object
            .as_deref()
            .map(|o| normalize_object(o, prefixes)),
    }
}

/// Compact an absolute IRI back to a prefixed name.
///
/// The longest matching namespace wins; an IRI outside every known namespace
/// is wrapped in `<>` unless it is a blank-node identifier.
pub fn to_prefixed(iri: &str, prefixes: &PrefixTable) -> String {
    let mut best: Option<(&str, &str)> = None;
    for (prefix, ns) in prefixes.iter() {
        if iri.starts_with(ns) && best.map_or(true, |(_, b)| ns.len() > b.len()) {
            best = Some((prefix, ns));
        }
    }
    if let Some((prefix, ns)) = best {
        return format!("{}:{}", prefix, &iri[ns.len()..]);
    }
    if iri.starts_with("_:") {
        iri.to_string()
    } else {
        format!("<{}>", iri)
    }
}

fn strip_trailing_separator(term: &str) -> &str {
    term.strip_suffix(['.', ',', ';']).unwrap_or(term)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> PrefixTable {
        PrefixTable::default()
    }

    #[test]
    fn test_expand_prefixed_name() {
        assert_eq!(
            expand_term("foaf:name", &table()),
            "http://xmlns.com/foaf/0.1/name"
        );
    }

    #[test]
    fn test_expand_bracketed_iri() {
        assert_eq!(
            expand_term("<http://example.org/x>", &table()),
            "http://example.org/x"
        );
    }

    #[test]
    fn test_expand_unknown_prefix_passes_through() {
        assert_eq!(expand_term("nope:thing", &table()), "nope:thing");
    }

    #[test]
    fn test_blank_node_passes_through() {
        assert_eq!(expand_term("_:consumer", &table()), "_:consumer");
    }

    #[test]
    fn test_absolute_iri_passes_through() {
        assert_eq!(
            expand_term("http://example.org/x", &table()),
            "http://example.org/x"
        );
    }

    #[test]
    fn test_object_trailing_separator_stripped() {
        let t = table();
        assert_eq!(normalize_object("\"Alice\".", &t), "Alice");
        assert_eq!(normalize_object("\"Alice\",", &t), "Alice");
        assert_eq!(normalize_object("\"Alice\";", &t), "Alice");
        // Only one separator is stripped
        assert_eq!(normalize_object("\"v\"..", &t), "\"v\".");
    }

    #[test]
    fn test_object_triple_quoted_before_single() {
        let t = table();
        assert_eq!(
            normalize_object("\"\"\"ASK { \"inner\" }\"\"\".", &t),
            "ASK { \"inner\" }"
        );
        assert_eq!(normalize_object("'single'", &t), "single");
    }

    #[test]
    fn test_object_typed_literal_keys_on_value() {
        assert_eq!(
            normalize_object("\"2015-06-01T09:00:00Z\"^^xsd:dateTime.", &table()),
            "2015-06-01T09:00:00Z"
        );
        assert_eq!(normalize_object("\"3600S\"^^xsd:duration.", &table()), "3600S");
    }

    #[test]
    fn test_object_decimal_inside_quotes_survives() {
        assert_eq!(normalize_object("\"48.85\".", &table()), "48.85");
    }

    #[test]
    fn test_object_prefixed_name() {
        assert_eq!(
            normalize_object("s4ac:AccessPolicy.", &table()),
            "http://ns.inria.fr/s4ac/v2#AccessPolicy"
        );
    }

    #[test]
    fn test_to_prefixed_round_trip() {
        let t = table();
        assert_eq!(
            to_prefixed("http://xmlns.com/foaf/0.1/name", &t),
            "foaf:name"
        );
        assert_eq!(
            to_prefixed("http://ns.inria.fr/prissma/policies#Pol1", &t),
            ":Pol1"
        );
        assert_eq!(
            to_prefixed("http://unknown.example/x", &t),
            "<http://unknown.example/x>"
        );
        assert_eq!(to_prefixed("_:poi", &t), "_:poi");
    }
}
