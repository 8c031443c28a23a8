//! Access condition decompiler: SPARQL ASK / Turtle context -> structured model
//!
//! The inverse of [`crate::compile`]. ASK text is rewritten to Turtle (query
//! variables become blank nodes - the collaborator parser does not know
//! SPARQL), parsed into a temporary graph, and the dimensions are read back:
//! flat properties for the user dimension, interval arithmetic for time,
//! mandatory POI fields for outdoor, and a recursive descent over the
//! blank-node tree for the device and environment dimensions.

use crate::model::{
    AccessConditionModel, KeywordDimension, KeywordValue, OutdoorDimension, TimeDimension,
    TimeLayout, ISO_LAYOUT,
};
use crate::{PolicyError, Result};
use chrono::{Duration, NaiveDateTime};
use prissma_graph_ir::{DocumentGraph, Triple, TriplePattern};
use prissma_vocab::keywords::{self, Dimension};
use prissma_vocab::prefixes::PrefixTable;
use prissma_vocab::{ao, geo, prissma, rdf, tl};
use std::collections::HashSet;
use tracing::warn;

/// Parse ASK query text or a Turtle context document into a model.
///
/// Unknown keywords and incomplete optional dimensions are skipped with a
/// warning; only unparseable text is an error.
pub fn parse_access_condition(text: &str, layout: &TimeLayout) -> Result<AccessConditionModel> {
    let graph = parse_condition_graph(text)?;

    let mut model = AccessConditionModel::default();
    extract_user(&graph, &mut model);
    extract_time(&graph, &mut model, layout);
    extract_outdoor(&graph, &mut model);
    model.environment =
        extract_keyword_tree(&graph, Dimension::Environment, prissma::ENVIRONMENT, &[ao::TIME]);
    model.device = extract_keyword_tree(&graph, Dimension::Device, prissma::DEVICE, &[]);
    Ok(model)
}

/// Parse the condition text into a temporary graph.
///
/// ASK form: slice the body between the outer braces, rewrite `?var` to
/// `_:var`, and supply the preamble's prefixes. Context form: parse as-is,
/// prefixes come from its own `@prefix` lines.
fn parse_condition_graph(text: &str) -> Result<DocumentGraph> {
    let mut graph = DocumentGraph::with_prefixes(PrefixTable::new());
    if text.contains("ASK") {
        let open = text
            .find('{')
            .ok_or_else(|| PolicyError::malformed_ask("missing opening brace"))?;
        let close = text
            .rfind('}')
            .filter(|close| *close > open)
            .ok_or_else(|| PolicyError::malformed_ask("missing closing brace"))?;
        let body = text[open + 1..close].replace('?', "_:");
        let doc = format!("{}\n{}", PrefixTable::default().turtle_header(), body);
        prissma_graph_turtle::parse(&doc, None, &mut graph)?;
    } else {
        prissma_graph_turtle::parse(text, None, &mut graph)?;
    }
    Ok(graph)
}

/// Read the model value for a triple: literals are re-quoted, URIs stay bare.
///
/// The prefixed encoding still carries the quoting the normalized form
/// dropped, so it decides which of the two the value was.
fn model_value(graph: &DocumentGraph, triple: &Triple) -> String {
    let was_literal = graph
        .position(&triple.key())
        .and_then(|position| graph.stored(position))
        .map_or(false, |st| st.prefixed.object.starts_with('"'));
    if was_literal {
        format!("\"{}\"", triple.object)
    } else {
        triple.object.clone()
    }
}

fn extract_user(graph: &DocumentGraph, model: &mut AccessConditionModel) {
    let Some(user_triple) = graph.get(&TriplePattern::with_predicate(prissma::USER)) else {
        return;
    };
    let consumer = user_triple.object.clone();

    let mut committed = Vec::new();
    for triple in graph.matches(&TriplePattern::with_subject(consumer)) {
        if triple.predicate == rdf::TYPE {
            continue;
        }
        match keywords::lookup(Dimension::User, &triple.predicate) {
            Some(def) => committed.push(KeywordValue::from_def(def, model_value(graph, triple))),
            None => warn!(predicate = %triple.predicate, "unknown user keyword, skipping"),
        }
    }
    if !committed.is_empty() {
        model.user = Some(KeywordDimension {
            keywords: committed,
        });
    }
}

fn extract_time(graph: &DocumentGraph, model: &mut AccessConditionModel, layout: &TimeLayout) {
    let Some(time_triple) = graph.get(&TriplePattern::with_predicate(ao::TIME)) else {
        return;
    };
    let time_node = time_triple.object.clone();

    let Some(start) = graph.get(&TriplePattern::new(
        Some(time_node.clone()),
        Some(tl::START),
        None::<String>,
    )) else {
        warn!("time interval without tl:start, dropping dimension");
        return;
    };
    let Some(duration) = graph.get(&TriplePattern::new(
        Some(time_node),
        Some(tl::DURATION),
        None::<String>,
    )) else {
        warn!("time interval without tl:duration, dropping dimension");
        return;
    };

    let start_at = match NaiveDateTime::parse_from_str(&start.object, ISO_LAYOUT) {
        Ok(at) => at,
        Err(_) => {
            warn!(value = %start.object, "unparseable tl:start, dropping time dimension");
            return;
        }
    };
    let seconds: i64 = match duration.object.trim_end_matches('S').parse() {
        Ok(seconds) => seconds,
        Err(_) => {
            warn!(value = %duration.object, "unparseable tl:duration, dropping time dimension");
            return;
        }
    };
    let end_at = start_at + Duration::seconds(seconds);

    model.time = Some(TimeDimension {
        date_from: start_at.format(&layout.date_format).to_string(),
        date_to: end_at.format(&layout.date_format).to_string(),
        time_from: start_at.format(&layout.time_format).to_string(),
        time_to: end_at.format(&layout.time_format).to_string(),
    });
}

fn extract_outdoor(graph: &DocumentGraph, model: &mut AccessConditionModel) {
    let Some(poi_triple) = graph.get(&TriplePattern::with_predicate(prissma::CURRENT_POI)) else {
        return;
    };
    let poi = poi_triple.object.clone();

    let field = |predicate: &str| {
        graph
            .get(&TriplePattern::new(
                Some(poi.clone()),
                Some(predicate),
                None::<String>,
            ))
            .map(|t| t.object.clone())
    };
    match (field(geo::LAT), field(geo::LON), field(prissma::RADIUS)) {
        (Some(lat), Some(lon), Some(radius)) => {
            model.outdoor = Some(OutdoorDimension { lat, lon, radius });
        }
        // lat/lon/radius are all mandatory
        _ => warn!("incomplete outdoor dimension, dropping"),
    }
}

/// A leaf assertion found under a dimension anchor
struct Leaf<'g> {
    triple: &'g Triple,
    parent_type: Option<String>,
}

/// Decompile a tree dimension (device or environment).
///
/// Returns `None` when the anchor is absent or no leaf resolves against the
/// vocabulary.
fn extract_keyword_tree(
    graph: &DocumentGraph,
    dimension: Dimension,
    anchor_predicate: &str,
    skip_predicates: &[&str],
) -> Option<KeywordDimension> {
    let anchor_triple = graph.get(&TriplePattern::with_predicate(anchor_predicate))?;
    let anchor = anchor_triple.object.clone();

    let mut visited = HashSet::new();
    visited.insert(anchor.clone());
    let mut leaves = Vec::new();
    collect_leaves(graph, &anchor, None, skip_predicates, &mut visited, &mut leaves);

    let mut committed = Vec::new();
    for leaf in leaves {
        match keywords::lookup_scoped(dimension, &leaf.triple.predicate, leaf.parent_type.as_deref())
        {
            Some(def) => {
                committed.push(KeywordValue::from_def(def, model_value(graph, leaf.triple)));
            }
            None => {
                warn!(predicate = %leaf.triple.predicate, ?dimension, "unknown keyword, skipping");
            }
        }
    }
    if committed.is_empty() {
        None
    } else {
        Some(KeywordDimension {
            keywords: committed,
        })
    }
}

/// Recursive descent from `node`, collecting leaf assertions.
///
/// An edge whose object has outgoing edges is an intermediate: recurse with
/// the object's `rdf:type` as the new parent type. An edge to a literal or
/// plain IRI is a leaf. `parent_type` is `None` at the anchor itself, so
/// anchor-direct properties match vocabulary entries without a parent.
fn collect_leaves<'g>(
    graph: &'g DocumentGraph,
    node: &str,
    parent_type: Option<String>,
    skip_predicates: &[&str],
    visited: &mut HashSet<String>,
    out: &mut Vec<Leaf<'g>>,
) {
    for triple in graph.matches(&TriplePattern::with_subject(node)) {
        if triple.predicate == rdf::TYPE || skip_predicates.contains(&triple.predicate.as_str()) {
            continue;
        }

        let children = graph.matches(&TriplePattern::with_subject(triple.object.clone()));
        let is_intermediate = children.iter().any(|c| c.predicate != rdf::TYPE);
        if is_intermediate {
            if !visited.insert(triple.object.clone()) {
                warn!(node = %triple.object, "cycle in condition graph, stopping descent");
                continue;
            }
            let child_type = children
                .iter()
                .find(|c| c.predicate == rdf::TYPE)
                .map(|c| c.object.clone());
            collect_leaves(graph, &triple.object, child_type, skip_predicates, visited, out);
        } else if !triple.object.starts_with("_:") {
            out.push(Leaf {
                triple,
                parent_type: parent_type.clone(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::{generate_ask_query, generate_context_graph};
    use prissma_vocab::keywords::{lookup, lookup_scoped};
    use prissma_vocab::{common, foaf, hard};

    fn layout() -> TimeLayout {
        TimeLayout::default()
    }

    fn full_model() -> AccessConditionModel {
        let mut model = AccessConditionModel::default();

        let name = lookup(Dimension::User, foaf::NAME).unwrap();
        let age = lookup(Dimension::User, foaf::AGE).unwrap();
        assert!(model.set_user(vec![
            KeywordValue::from_def(name, "\"Alice\""),
            KeywordValue::from_def(age, "\"30\""),
        ]));

        assert!(model.set_time(
            TimeDimension {
                date_from: "01/06/2015".to_string(),
                date_to: "01/06/2015".to_string(),
                time_from: "09:00".to_string(),
                time_to: "18:00".to_string(),
            },
            &layout(),
        ));

        assert!(model.set_outdoor(OutdoorDimension {
            lat: "48.85".to_string(),
            lon: "2.35".to_string(),
            radius: "500".to_string(),
        }));

        let category = lookup(Dimension::Environment, prissma::POI_CATEGORY).unwrap();
        let motion = lookup(Dimension::Environment, prissma::MOTION).unwrap();
        assert!(model.set_environment(vec![
            KeywordValue::from_def(category, "\"museum\""),
            KeywordValue::from_def(motion, "\"walking\""),
        ]));

        let vendor =
            lookup_scoped(Dimension::Device, common::VENDOR, Some(hard::BATTERY_CLASS)).unwrap();
        assert!(model.set_device(vec![KeywordValue::from_def(vendor, "\"Samsung\"")]));

        model
    }

    #[test]
    fn test_round_trip_full_model() {
        let model = full_model();
        let query = generate_ask_query(&model, &layout()).unwrap();
        let back = parse_access_condition(&query, &layout()).unwrap();
        assert_eq!(model, back);
    }

    #[test]
    fn test_round_trip_context_graph() {
        let model = full_model();
        let doc = generate_context_graph(&model, &layout()).unwrap();
        let back = parse_access_condition(&doc, &layout()).unwrap();
        assert_eq!(model, back);
    }

    #[test]
    fn test_round_trip_uri_valued_keyword() {
        let mut model = AccessConditionModel::default();
        let knows = lookup(Dimension::User, foaf::KNOWS).unwrap();
        assert!(model.set_user(vec![KeywordValue::from_def(
            knows,
            "http://example.org/bob",
        )]));

        let query = generate_ask_query(&model, &layout()).unwrap();
        let back = parse_access_condition(&query, &layout()).unwrap();
        assert_eq!(model, back);
    }

    #[test]
    fn test_scoped_disambiguation_in_decompile() {
        // battery model vs display model share common:model; the parent type
        // recovered from the walk picks the right entry
        let mut model = AccessConditionModel::default();
        let batt_model =
            lookup_scoped(Dimension::Device, common::MODEL, Some(hard::BATTERY_CLASS)).unwrap();
        assert!(model.set_device(vec![KeywordValue::from_def(batt_model, "\"EB-BG900\"")]));

        let query = generate_ask_query(&model, &layout()).unwrap();
        let back = parse_access_condition(&query, &layout()).unwrap();
        let keywords = &back.device.unwrap().keywords;
        assert_eq!(keywords.len(), 1);
        assert_eq!(keywords[0].label, "battery model");
    }

    #[test]
    fn test_unknown_keyword_is_skipped() {
        let text = r#"
            @prefix prissma: <http://ns.inria.fr/prissma/v2#> .
            @prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
            @prefix foaf: <http://xmlns.com/foaf/0.1/> .
            @prefix ex: <http://example.org/> .
            _:context rdf:type prissma:Context .
            _:context prissma:user _:consumer .
            _:consumer rdf:type foaf:Person .
            _:consumer foaf:name "Alice" .
            _:consumer ex:shoeSize "43" .
        "#;
        let model = parse_access_condition(text, &layout()).unwrap();
        let keywords = &model.user.unwrap().keywords;
        assert_eq!(keywords.len(), 1);
        assert_eq!(keywords[0].label, "name");
    }

    #[test]
    fn test_incomplete_outdoor_is_dropped() {
        let text = r#"
            @prefix prissma: <http://ns.inria.fr/prissma/v2#> .
            @prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
            @prefix geo: <http://www.w3.org/2003/01/geo/wgs84_pos#> .
            _:context rdf:type prissma:Context .
            _:context prissma:environment _:env .
            _:env prissma:currentPOI _:poi .
            _:poi rdf:type prissma:POI .
            _:poi geo:lat "48.85" .
            _:poi geo:lon "2.35" .
        "#;
        let model = parse_access_condition(text, &layout()).unwrap();
        assert!(model.outdoor.is_none());
    }

    #[test]
    fn test_missing_dimensions_stay_absent() {
        let mut model = AccessConditionModel::default();
        let name = lookup(Dimension::User, foaf::NAME).unwrap();
        assert!(model.set_user(vec![KeywordValue::from_def(name, "\"Alice\"")]));

        let query = generate_ask_query(&model, &layout()).unwrap();
        let back = parse_access_condition(&query, &layout()).unwrap();
        assert!(back.device.is_none());
        assert!(back.environment.is_none());
        assert!(back.time.is_none());
        assert!(back.outdoor.is_none());
    }

    #[test]
    fn test_malformed_ask_is_hard_error() {
        let result = parse_access_condition("ASK with no braces", &layout());
        assert!(matches!(
            result,
            Err(PolicyError::MalformedAskQuery { .. })
        ));
    }
}
