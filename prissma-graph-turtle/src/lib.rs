//! Turtle parsing adapter for the policy graph model
//!
//! This crate is the consumed collaborator contract of the policy core: it
//! never tokenizes Turtle itself. Parsing is delegated to `oxttl`; this
//! adapter replays the parsed document into a [`GraphSink`] - prefixes
//! first, then each statement compacted back to prefixed encoding in
//! document order - and returns the resolved [`PrefixTable`].
//!
//! # Example
//!
//! ```
//! use prissma_graph_ir::DocumentGraph;
//! use prissma_graph_turtle::parse;
//! use prissma_vocab::prefixes::PrefixTable;
//!
//! let turtle = r#"
//!     @prefix foaf: <http://xmlns.com/foaf/0.1/> .
//!     _:consumer foaf:name "Alice" .
//! "#;
//!
//! let mut graph = DocumentGraph::with_prefixes(PrefixTable::new());
//! let prefixes = parse(turtle, None, &mut graph).unwrap();
//! assert_eq!(prefixes.namespace("foaf"), Some("http://xmlns.com/foaf/0.1/"));
//! assert_eq!(graph.triple_count(), 1);
//! ```

mod error;

pub use error::{Result, TurtleError};

use oxrdf::{Literal, Subject, Term};
use oxttl::TurtleParser;
use prissma_graph_ir::{to_prefixed, GraphSink, Triple};
use prissma_vocab::prefixes::PrefixTable;
use prissma_vocab::xsd;

/// Parse a Turtle document into a sink.
///
/// Triples reach the sink in document order, after every prefix event, so
/// insertion order in the sink mirrors the statement order of the source
/// text. Returns the prefix table resolved while parsing.
///
/// Parsing is all-or-nothing from the caller's point of view: on a syntax
/// error nothing has been emitted, so a previously valid graph passed as the
/// sink must instead be a temporary that the caller swaps in on success.
pub fn parse(
    text: &str,
    base_iri: Option<&str>,
    sink: &mut impl GraphSink,
) -> Result<PrefixTable> {
    let mut parser = TurtleParser::new();
    if let Some(base) = base_iri {
        parser = parser
            .with_base_iri(base)
            .map_err(|e| TurtleError::invalid_base_iri(e.to_string()))?;
    }

    let mut reader = parser.for_slice(text.as_bytes());
    let mut parsed = Vec::new();
    for triple in &mut reader {
        parsed.push(triple.map_err(|e| TurtleError::syntax(e.to_string()))?);
    }

    let mut prefixes = PrefixTable::new();
    for (prefix, namespace) in reader.prefixes() {
        prefixes.insert(prefix, namespace);
    }

    for (prefix, namespace) in prefixes.iter() {
        sink.on_prefix(prefix, namespace);
    }
    for triple in &parsed {
        sink.on_triple(compact_triple(triple, &prefixes));
    }

    Ok(prefixes)
}

/// Convert a parsed triple back to prefixed encoding for the sink.
fn compact_triple(triple: &oxrdf::Triple, prefixes: &PrefixTable) -> Triple {
    let subject = match &triple.subject {
        Subject::NamedNode(n) => to_prefixed(n.as_str(), prefixes),
        Subject::BlankNode(b) => format!("_:{}", b.as_str()),
    };
    let predicate = to_prefixed(triple.predicate.as_str(), prefixes);
    let object = match &triple.object {
        Term::NamedNode(n) => to_prefixed(n.as_str(), prefixes),
        Term::BlankNode(b) => format!("_:{}", b.as_str()),
        Term::Literal(lit) => format_literal(lit, prefixes),
    };
    Triple::new(subject, predicate, object)
}

/// Render a literal in prefixed Turtle encoding.
///
/// Multi-line or quote-bearing values use the triple-quoted form (the shape
/// `s4ac:hasQueryAsk` literals take); non-string datatypes keep their
/// `^^prefix:local` annotation.
fn format_literal(lit: &Literal, prefixes: &PrefixTable) -> String {
    let value = lit.value();
    if value.contains('\n') || value.contains('"') {
        return format!("\"\"\"{}\"\"\"", value);
    }
    let datatype = lit.datatype();
    if datatype.as_str() == xsd::STRING || lit.language().is_some() {
        format!("\"{}\"", value)
    } else {
        format!("\"{}\"^^{}", value, to_prefixed(datatype.as_str(), prefixes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prissma_graph_ir::GraphCollector;

    #[test]
    fn test_parse_simple() {
        let turtle = r#"
            @prefix ex: <http://example.org/> .
            ex:alice ex:name "Alice" .
        "#;

        let mut sink = GraphCollector::new();
        let prefixes = parse(turtle, None, &mut sink).unwrap();

        assert_eq!(prefixes.namespace("ex"), Some("http://example.org/"));
        assert_eq!(sink.triples.len(), 1);
        assert_eq!(sink.triples[0], Triple::new("ex:alice", "ex:name", "\"Alice\""));
    }

    #[test]
    fn test_parse_preserves_document_order() {
        let turtle = r#"
            @prefix ex: <http://example.org/> .
            ex:b ex:p ex:one .
            ex:a ex:p ex:two .
            ex:c ex:p ex:three .
        "#;

        let mut sink = GraphCollector::new();
        parse(turtle, None, &mut sink).unwrap();

        let subjects: Vec<_> = sink.triples.iter().map(|t| t.subject.as_str()).collect();
        assert_eq!(subjects, vec!["ex:b", "ex:a", "ex:c"]);
    }

    #[test]
    fn test_parse_blank_nodes_and_types() {
        let turtle = r#"
            @prefix prissma: <http://ns.inria.fr/prissma/v2#> .
            @prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
            _:context rdf:type prissma:Context .
            _:context prissma:user _:consumer .
        "#;

        let mut sink = GraphCollector::new();
        parse(turtle, None, &mut sink).unwrap();

        assert_eq!(
            sink.triples[0],
            Triple::new("_:context", "rdf:type", "prissma:Context")
        );
        assert_eq!(
            sink.triples[1],
            Triple::new("_:context", "prissma:user", "_:consumer")
        );
    }

    #[test]
    fn test_parse_typed_literal_keeps_annotation() {
        let turtle = r#"
            @prefix tl: <http://purl.org/NET/c4dm/timeline.owl#> .
            @prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
            _:time tl:start "2015-06-01T09:00:00Z"^^xsd:dateTime .
        "#;

        let mut sink = GraphCollector::new();
        parse(turtle, None, &mut sink).unwrap();

        assert_eq!(
            sink.triples[0].object,
            "\"2015-06-01T09:00:00Z\"^^xsd:dateTime"
        );
    }

    #[test]
    fn test_parse_triple_quoted_literal() {
        let turtle = "@prefix s4ac: <http://ns.inria.fr/s4ac/v2#> .\n\
                      @prefix ex: <http://example.org/> .\n\
                      ex:AC-1 s4ac:hasQueryAsk \"\"\"ASK {\n?context a ex:Thing.\n}\"\"\" .\n";

        let mut sink = GraphCollector::new();
        parse(turtle, None, &mut sink).unwrap();

        assert!(sink.triples[0].object.starts_with("\"\"\"ASK {"));
        assert!(sink.triples[0].object.ends_with("}\"\"\""));
    }

    #[test]
    fn test_parse_syntax_error() {
        let mut sink = GraphCollector::new();
        let result = parse("this is not turtle at all {", None, &mut sink);
        assert!(matches!(result, Err(TurtleError::Syntax(_))));
        assert!(sink.triples.is_empty());
    }

    #[test]
    fn test_parse_unprefixed_iri_is_bracketed() {
        let turtle = r#"
            @prefix ex: <http://example.org/> .
            ex:a ex:p <http://outside.example/thing> .
        "#;

        let mut sink = GraphCollector::new();
        parse(turtle, None, &mut sink).unwrap();
        assert_eq!(sink.triples[0].object, "<http://outside.example/thing>");
    }
}
