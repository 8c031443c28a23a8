//! Access condition compiler: structured model -> SPARQL ASK / Turtle context
//!
//! Clauses are emitted in a fixed dimension order (user, time, outdoor,
//! environment, device) and, within a dimension, in keyword list order.
//! Anchor clauses are idempotent: a model with both time and outdoor
//! dimensions still produces exactly one `?env` anchor. Deduplication only
//! suppresses exact textual repeats of intermediate prepend clauses, never a
//! leaf clause.

use crate::model::{AccessConditionModel, KeywordValue, TimeLayout};
use crate::Result;
use prissma_vocab::prefixes::PrefixTable;

const ENV_ANCHOR: &str = "?context prissma:environment ?env.\n?env rdf:type prissma:Environment.\n";
const POI_ANCHOR: &str = "?env prissma:currentPOI ?poi.\n?poi rdf:type prissma:POI.\n";
const USER_ANCHOR: &str = "?context prissma:user ?consumer.\n?consumer rdf:type foaf:Person.\n";
const DEV_ANCHOR: &str = "?context prissma:device ?dev.\n?dev rdf:type prissma:Device.\n";

/// Compile a model to SPARQL ASK query text.
///
/// The preamble carries the default prefix table; the group pattern opens
/// with the context root and closes after the last dimension.
pub fn generate_ask_query(model: &AccessConditionModel, layout: &TimeLayout) -> Result<String> {
    let body = build_body(model, layout)?;
    let mut query = PrefixTable::default().sparql_header();
    query.push_str("ASK {\n");
    query.push_str(&body);
    query.push('}');
    Ok(query)
}

/// Compile a model to a standalone Turtle context document.
///
/// Same clauses as the ASK form with query variables rendered as blank
/// nodes; this is the inverse of the decompiler's context-form input.
pub fn generate_context_graph(model: &AccessConditionModel, layout: &TimeLayout) -> Result<String> {
    let body = build_body(model, layout)?;
    let mut doc = PrefixTable::default().turtle_header();
    doc.push('\n');
    doc.push_str(&body.replace('?', "_:"));
    Ok(doc)
}

/// Emit the group-pattern body shared by both output forms.
fn build_body(model: &AccessConditionModel, layout: &TimeLayout) -> Result<String> {
    let mut body = String::from("?context rdf:type prissma:Context.\n");

    if let Some(user) = &model.user {
        body.push_str(USER_ANCHOR);
        for kw in &user.keywords {
            body.push_str(&format!(
                "?consumer {}:{} {}.\n",
                kw.prefix,
                kw.local_name,
                value_term(&kw.value)
            ));
        }
    }

    if let Some(time) = &model.time {
        let (start, duration) = time.interval(layout)?;
        push_once(&mut body, ENV_ANCHOR);
        body.push_str("?env ao:time ?time.\n?time rdf:type time:Interval.\n");
        body.push_str(&format!("?time tl:start \"{}\"^^xsd:dateTime.\n", start));
        body.push_str(&format!(
            "?time tl:duration \"{}S\"^^xsd:duration.\n",
            duration
        ));
    }

    if let Some(outdoor) = &model.outdoor {
        push_once(&mut body, ENV_ANCHOR);
        push_once(&mut body, POI_ANCHOR);
        body.push_str(&format!("?poi geo:lat \"{}\".\n", outdoor.lat));
        body.push_str(&format!("?poi geo:lon \"{}\".\n", outdoor.lon));
        body.push_str(&format!("?poi prissma:radius \"{}\".\n", outdoor.radius));
    }

    if let Some(environment) = &model.environment {
        push_once(&mut body, ENV_ANCHOR);
        for kw in &environment.keywords {
            push_keyword_chain(&mut body, "?env", kw);
        }
    }

    if let Some(device) = &model.device {
        // Device is visited once per condition, but the anchor is guarded
        // like the others so dimension order stays a local concern
        push_once(&mut body, DEV_ANCHOR);
        for kw in &device.keywords {
            push_keyword_chain(&mut body, "?dev", kw);
        }
    }

    Ok(body)
}

/// Append an anchor block unless its first clause is already present
fn push_once(body: &mut String, anchor: &str) {
    let first_clause = anchor.lines().next().unwrap_or(anchor);
    if !body.contains(first_clause) {
        body.push_str(anchor);
    }
}

/// Emit a keyword's prepend chain and leaf clause.
///
/// Intermediate clauses are emitted only when the exact clause text is not
/// already in the body - the POI/environment anchors may have produced them
/// first. The leaf clause always lands, attached to the subject of the last
/// prepend clause (the anchor when there is none).
fn push_keyword_chain(body: &mut String, anchor: &str, kw: &KeywordValue) {
    let mut parent = anchor.to_string();
    if let Some(prepend) = &kw.prepend {
        for clause in prepend.split('.') {
            let clause = clause.trim();
            if clause.is_empty() {
                continue;
            }
            let clause = clause.replace(" a ", " rdf:type ");
            if let Some(subject) = clause.split_whitespace().next() {
                parent = subject.to_string();
            }
            let line = format!("{}.\n", clause);
            if !body.contains(&line) {
                body.push_str(&line);
            }
        }
    }
    body.push_str(&format!(
        "{} {}:{} {}.\n",
        parent,
        kw.prefix,
        kw.local_name,
        value_term(&kw.value)
    ));
}

/// Render a keyword value: a quoted literal stays verbatim, an absolute URI
/// is bracketed, anything else (a prefixed name) passes through
fn value_term(value: &str) -> String {
    if value.contains('"') {
        value.to_string()
    } else if value.starts_with("http://") || value.starts_with("https://") {
        format!("<{}>", value)
    } else {
        value.to_string()
    }
}
