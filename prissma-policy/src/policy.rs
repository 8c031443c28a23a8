//! Policy document model
//!
//! Composes one [`DocumentGraph`] with the structured view of a policy:
//! privileges, targets, and a set of access conditions. Every edit - a
//! privilege toggle, a target add/remove, a condition-set type change - is
//! routed through the graph's `add`/`remove`/`update`, so the indexed graph
//! stays the single persistable artifact.

use crate::compile::generate_ask_query;
use crate::decompile::parse_access_condition;
use crate::model::{AccessConditionModel, TimeLayout};
use crate::{PolicyError, Result};
use prissma_graph_ir::{to_prefixed, DocumentGraph, Triple, TriplePattern};
use prissma_vocab::prefixes::PrefixTable;
use prissma_vocab::{rdf, rdfs, s4ac};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::warn;

/// An access privilege a policy can grant
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Privilege {
    /// s4ac:Create
    Create,
    /// s4ac:Read
    Read,
    /// s4ac:Update
    Update,
    /// s4ac:Delete
    Delete,
}

impl Privilege {
    /// Every privilege, in vocabulary order
    pub const ALL: [Privilege; 4] = [
        Privilege::Create,
        Privilege::Read,
        Privilege::Update,
        Privilege::Delete,
    ];

    /// Absolute IRI of the privilege
    pub fn uri(self) -> &'static str {
        match self {
            Privilege::Create => s4ac::CREATE,
            Privilege::Read => s4ac::READ,
            Privilege::Update => s4ac::UPDATE,
            Privilege::Delete => s4ac::DELETE,
        }
    }

    /// Local name of the privilege
    pub fn local_name(self) -> &'static str {
        match self {
            Privilege::Create => "Create",
            Privilege::Read => "Read",
            Privilege::Update => "Update",
            Privilege::Delete => "Delete",
        }
    }

    /// Prefixed form for graph statements
    pub fn prefixed(self) -> String {
        format!("s4ac:{}", self.local_name())
    }

    /// Resolve a privilege from its absolute IRI
    pub fn from_uri(uri: &str) -> Option<Self> {
        Privilege::ALL.into_iter().find(|p| p.uri() == uri)
    }
}

/// Combination semantics of a policy's access conditions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcsType {
    /// All conditions must hold
    Conjunctive,
    /// Any condition suffices
    Disjunctive,
}

impl AcsType {
    /// Absolute IRI of the condition-set class
    pub fn uri(self) -> &'static str {
        match self {
            AcsType::Conjunctive => s4ac::CONJUNCTIVE_ACS,
            AcsType::Disjunctive => s4ac::DISJUNCTIVE_ACS,
        }
    }

    /// Prefixed form for graph statements
    pub fn prefixed(self) -> String {
        match self {
            AcsType::Conjunctive => "s4ac:ConjunctiveAccessConditionSet".to_string(),
            AcsType::Disjunctive => "s4ac:DisjunctiveAccessConditionSet".to_string(),
        }
    }

    /// Resolve a condition-set type from its absolute IRI
    pub fn from_uri(uri: &str) -> Option<Self> {
        [AcsType::Conjunctive, AcsType::Disjunctive]
            .into_iter()
            .find(|t| t.uri() == uri)
    }
}

/// One access condition of a policy
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccessCondition {
    /// Prefixed URI of the condition node (`:AC-<n>`)
    pub uri: String,
    /// Human-readable label
    pub label: String,
    /// Structured description, compiled to ASK text on every change
    pub model: AccessConditionModel,
}

/// A full policy document: graph plus structured view.
///
/// Created fresh from the wizard ([`PolicyModel::new`]) or by parsing a
/// fetched Turtle document ([`PolicyModel::parse`]); persisted by handing
/// [`PolicyModel::to_turtle`] to the backend collaborator.
#[derive(Clone, Debug)]
pub struct PolicyModel {
    graph: DocumentGraph,
    policy_uri: String,
    label: String,
    acs_uri: String,
    acs_type: AcsType,
    targets: Vec<String>,
    privileges: BTreeSet<Privilege>,
    conditions: Vec<AccessCondition>,
    next_condition_id: usize,
    layout: TimeLayout,
}

impl PolicyModel {
    /// Create a fresh policy with synthesized URIs and skeleton statements.
    ///
    /// The policy node is `:<slug(name)>`, its condition set
    /// `:<slug(name)>-ACS`; conditions are numbered `:AC-<n>` as they are
    /// added.
    pub fn new(name: &str) -> Self {
        let slug = slug(name);
        let policy_uri = format!(":{}", slug);
        let acs_uri = format!(":{}-ACS", slug);

        let mut graph = DocumentGraph::new();
        graph.add(Triple::new(&policy_uri, "rdf:type", "s4ac:AccessPolicy"));
        graph.add(Triple::new(&policy_uri, "rdfs:label", format!("\"{}\"", name)));
        graph.add(Triple::new(
            &policy_uri,
            "s4ac:hasAccessConditionSet",
            &acs_uri,
        ));
        graph.add(Triple::new(
            &acs_uri,
            "rdf:type",
            AcsType::Conjunctive.prefixed(),
        ));

        Self {
            graph,
            policy_uri,
            label: name.to_string(),
            acs_uri,
            acs_type: AcsType::Conjunctive,
            targets: Vec::new(),
            privileges: BTreeSet::new(),
            conditions: Vec::new(),
            next_condition_id: 0,
            layout: TimeLayout::default(),
        }
    }

    /// Parse a fetched Turtle policy document.
    ///
    /// The document is parsed into a temporary graph first; on any failure
    /// the caller's previously committed model is untouched. Exactly one
    /// `s4ac:AccessPolicy` root is required.
    pub fn parse(text: &str, layout: TimeLayout) -> Result<Self> {
        let mut graph = DocumentGraph::with_prefixes(PrefixTable::new());
        prissma_graph_turtle::parse(text, None, &mut graph)?;
        // Incremental tracking is not to be trusted across a full re-parse
        graph.rebuild_index();

        let roots: Vec<String> = graph
            .matches(&TriplePattern::new(
                None::<String>,
                Some(rdf::TYPE),
                Some(s4ac::ACCESS_POLICY),
            ))
            .iter()
            .map(|t| t.subject.clone())
            .collect();
        let policy_abs = match roots.as_slice() {
            [] => return Err(PolicyError::MissingPolicyRoot),
            [one] => one.clone(),
            many => {
                return Err(PolicyError::MultiplePolicyRoots { found: many.len() });
            }
        };

        let label = graph
            .get(&TriplePattern::new(
                Some(policy_abs.clone()),
                Some(rdfs::LABEL),
                None::<String>,
            ))
            .map(|t| t.object.clone())
            .unwrap_or_default();

        let targets: Vec<String> = graph
            .matches(&TriplePattern::new(
                Some(policy_abs.clone()),
                Some(s4ac::APPLIES_TO),
                None::<String>,
            ))
            .iter()
            .map(|t| t.object.clone())
            .collect();

        let mut privileges = BTreeSet::new();
        for triple in graph.matches(&TriplePattern::new(
            Some(policy_abs.clone()),
            Some(s4ac::HAS_ACCESS_PRIVILEGE),
            None::<String>,
        )) {
            match Privilege::from_uri(&triple.object) {
                Some(privilege) => {
                    privileges.insert(privilege);
                }
                None => warn!(uri = %triple.object, "unknown access privilege, skipping"),
            }
        }

        let acs_link = graph
            .get(&TriplePattern::new(
                Some(policy_abs.clone()),
                Some(s4ac::HAS_ACCESS_CONDITION_SET),
                None::<String>,
            ))
            .map(|t| t.object.clone());
        let (acs_abs, acs_type) = match acs_link {
            Some(acs) => {
                let acs_type = graph
                    .get(&TriplePattern::new(
                        Some(acs.clone()),
                        Some(rdf::TYPE),
                        None::<String>,
                    ))
                    .and_then(|t| AcsType::from_uri(&t.object))
                    .unwrap_or_else(|| {
                        warn!("condition set without a recognized type, assuming conjunctive");
                        AcsType::Conjunctive
                    });
                (acs, acs_type)
            }
            None => {
                warn!("policy without an access condition set");
                (format!("{}-ACS", policy_abs), AcsType::Conjunctive)
            }
        };

        let mut conditions = Vec::new();
        for link in graph.matches(&TriplePattern::new(
            Some(acs_abs.clone()),
            Some(s4ac::HAS_ACCESS_CONDITION),
            None::<String>,
        )) {
            let condition_abs = link.object.clone();
            let condition_label = graph
                .get(&TriplePattern::new(
                    Some(condition_abs.clone()),
                    Some(rdfs::LABEL),
                    None::<String>,
                ))
                .map(|t| t.object.clone())
                .unwrap_or_default();
            let Some(ask) = graph.get(&TriplePattern::new(
                Some(condition_abs.clone()),
                Some(s4ac::HAS_QUERY_ASK),
                None::<String>,
            )) else {
                warn!(condition = %condition_abs, "condition without hasQueryAsk, skipping");
                continue;
            };
            let model = parse_access_condition(&ask.object, &layout)?;
            conditions.push(AccessCondition {
                uri: to_prefixed(&condition_abs, graph.prefixes()),
                label: condition_label,
                model,
            });
        }

        let policy_uri = to_prefixed(&policy_abs, graph.prefixes());
        let acs_uri = to_prefixed(&acs_abs, graph.prefixes());
        let next_condition_id = conditions
            .iter()
            .filter_map(|c| c.uri.rsplit("AC-").next()?.parse::<usize>().ok())
            .max()
            .unwrap_or(0);

        Ok(Self {
            graph,
            policy_uri,
            label,
            acs_uri,
            acs_type,
            targets,
            privileges,
            conditions,
            next_condition_id,
            layout,
        })
    }

    /// Prefixed URI of the policy node
    pub fn policy_uri(&self) -> &str {
        &self.policy_uri
    }

    /// Policy label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Target graph/dataset URIs (absolute)
    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    /// Granted privileges
    pub fn privileges(&self) -> &BTreeSet<Privilege> {
        &self.privileges
    }

    /// Condition-set combination semantics
    pub fn acs_type(&self) -> AcsType {
        self.acs_type
    }

    /// Access conditions in document order
    pub fn conditions(&self) -> &[AccessCondition] {
        &self.conditions
    }

    /// The underlying indexed graph
    pub fn graph(&self) -> &DocumentGraph {
        &self.graph
    }

    /// The configured date/time layout
    pub fn layout(&self) -> &TimeLayout {
        &self.layout
    }

    /// Add a target (absolute URI); `false` when already present
    pub fn add_target(&mut self, target: &str) -> bool {
        if self.targets.iter().any(|t| t == target) {
            return false;
        }
        let object = to_prefixed(target, self.graph.prefixes());
        self.graph.add(Triple::new(
            self.policy_uri.clone(),
            "s4ac:appliesTo",
            object,
        ));
        self.targets.push(target.to_string());
        true
    }

    /// Remove a target; `false` when absent
    pub fn remove_target(&mut self, target: &str) -> bool {
        let removed = self.graph.remove(&TriplePattern::new(
            Some(self.policy_uri.clone()),
            Some("s4ac:appliesTo"),
            Some(target),
        ));
        self.targets.retain(|t| t != target);
        removed > 0
    }

    /// Grant a privilege; `false` when already granted
    pub fn grant(&mut self, privilege: Privilege) -> bool {
        if !self.privileges.insert(privilege) {
            return false;
        }
        self.graph.add(Triple::new(
            self.policy_uri.clone(),
            "s4ac:hasAccessPrivilege",
            privilege.prefixed(),
        ));
        true
    }

    /// Revoke a privilege; `false` when not granted
    pub fn revoke(&mut self, privilege: Privilege) -> bool {
        if !self.privileges.remove(&privilege) {
            return false;
        }
        self.graph.remove(&TriplePattern::new(
            Some(self.policy_uri.clone()),
            Some("s4ac:hasAccessPrivilege"),
            Some(privilege.prefixed()),
        ));
        true
    }

    /// Switch conjunctive/disjunctive semantics.
    ///
    /// The condition set's `rdf:type` statement is updated in place, so the
    /// document layout does not change.
    pub fn set_acs_type(&mut self, acs_type: AcsType) -> bool {
        if acs_type == self.acs_type {
            return false;
        }
        let updated = self.graph.update(
            &TriplePattern::new(
                Some(self.acs_uri.clone()),
                Some("rdf:type"),
                Some(self.acs_type.prefixed()),
            ),
            Triple::new(self.acs_uri.clone(), "rdf:type", acs_type.prefixed()),
        );
        if updated {
            self.acs_type = acs_type;
        }
        updated
    }

    /// Add an access condition; returns its synthesized `:AC-<n>` URI.
    ///
    /// The model is compiled to ASK text and attached as a triple-quoted
    /// `s4ac:hasQueryAsk` literal.
    pub fn add_condition(&mut self, label: &str, model: AccessConditionModel) -> Result<String> {
        let ask = generate_ask_query(&model, &self.layout)?;
        self.next_condition_id += 1;
        let uri = format!(":AC-{}", self.next_condition_id);

        self.graph.add(Triple::new(
            self.acs_uri.clone(),
            "s4ac:hasAccessCondition",
            uri.clone(),
        ));
        self.graph
            .add(Triple::new(uri.clone(), "rdf:type", "s4ac:AccessCondition"));
        self.graph.add(Triple::new(
            uri.clone(),
            "rdfs:label",
            format!("\"{}\"", label),
        ));
        self.graph.add(Triple::new(
            uri.clone(),
            "s4ac:hasQueryAsk",
            format!("\"\"\"{}\"\"\"", ask),
        ));

        self.conditions.push(AccessCondition {
            uri: uri.clone(),
            label: label.to_string(),
            model,
        });
        Ok(uri)
    }

    /// Recompile a condition's model and update its ASK statement in place
    pub fn update_condition(&mut self, uri: &str, model: AccessConditionModel) -> Result<bool> {
        let ask = generate_ask_query(&model, &self.layout)?;
        let updated = self.graph.update(
            &TriplePattern::new(Some(uri), Some("s4ac:hasQueryAsk"), None::<String>),
            Triple::new(uri, "s4ac:hasQueryAsk", format!("\"\"\"{}\"\"\"", ask)),
        );
        if updated {
            if let Some(condition) = self.conditions.iter_mut().find(|c| c.uri == uri) {
                condition.model = model;
            }
        }
        Ok(updated)
    }

    /// Remove a condition and its statements; `false` when absent
    pub fn remove_condition(&mut self, uri: &str) -> bool {
        let link = self.graph.remove(&TriplePattern::new(
            Some(self.acs_uri.clone()),
            Some("s4ac:hasAccessCondition"),
            Some(uri),
        ));
        let body = self.graph.remove(&TriplePattern::with_subject(uri));
        self.conditions.retain(|c| c.uri != uri);
        link + body > 0
    }

    /// Serialize the policy document.
    ///
    /// Exactly the indexed graph's text: original statement order, blanked
    /// slots as empty lines. This is what the persistence collaborator
    /// receives.
    pub fn to_turtle(&self) -> String {
        self.graph.to_turtle()
    }
}

/// Synthesize a URI-safe slug from a policy name
fn slug(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{KeywordValue, OutdoorDimension, TimeDimension};
    use prissma_vocab::foaf;
    use prissma_vocab::keywords::{lookup, Dimension};

    fn condition_model() -> AccessConditionModel {
        let mut model = AccessConditionModel::default();
        let name = lookup(Dimension::User, foaf::NAME).unwrap();
        assert!(model.set_user(vec![KeywordValue::from_def(name, "\"Alice\"")]));
        model
    }

    #[test]
    fn test_new_policy_skeleton() {
        let policy = PolicyModel::new("Pol1");
        assert_eq!(policy.policy_uri(), ":Pol1");
        assert_eq!(policy.acs_type(), AcsType::Conjunctive);

        let text = policy.to_turtle();
        assert!(text.contains(":Pol1 rdf:type s4ac:AccessPolicy.\n"));
        assert!(text.contains(":Pol1 rdfs:label \"Pol1\".\n"));
        assert!(text.contains(":Pol1 s4ac:hasAccessConditionSet :Pol1-ACS.\n"));
        assert!(text.contains(":Pol1-ACS rdf:type s4ac:ConjunctiveAccessConditionSet.\n"));
    }

    #[test]
    fn test_slug_synthesis() {
        let policy = PolicyModel::new("My Staff Policy!");
        assert_eq!(policy.policy_uri(), ":My-Staff-Policy");
    }

    #[test]
    fn test_target_and_privilege_edits_route_through_graph() {
        let mut policy = PolicyModel::new("Pol1");

        assert!(policy.add_target("http://example.org/dataset/private"));
        assert!(!policy.add_target("http://example.org/dataset/private"));
        assert!(policy.grant(Privilege::Read));
        assert!(policy.grant(Privilege::Update));
        assert!(!policy.grant(Privilege::Read));

        let text = policy.to_turtle();
        assert!(text.contains(":Pol1 s4ac:appliesTo <http://example.org/dataset/private>.\n"));
        assert!(text.contains(":Pol1 s4ac:hasAccessPrivilege s4ac:Read.\n"));
        assert!(text.contains(":Pol1 s4ac:hasAccessPrivilege s4ac:Update.\n"));

        assert!(policy.revoke(Privilege::Update));
        assert!(!policy.revoke(Privilege::Delete));
        let text = policy.to_turtle();
        assert!(!text.contains("s4ac:Update.\n"));
        // The revoked statement left an empty line, not a reshuffled document
        assert!(text.contains(":Pol1 s4ac:hasAccessPrivilege s4ac:Read.\n\n"));
    }

    #[test]
    fn test_set_acs_type_updates_in_place() {
        let mut policy = PolicyModel::new("Pol1");
        let before = policy.to_turtle();
        let type_line_at = before.find(":Pol1-ACS rdf:type").unwrap();

        assert!(policy.set_acs_type(AcsType::Disjunctive));
        assert!(!policy.set_acs_type(AcsType::Disjunctive));

        let after = policy.to_turtle();
        assert_eq!(
            after.find(":Pol1-ACS rdf:type"),
            Some(type_line_at),
            "type statement moved"
        );
        assert!(after.contains(":Pol1-ACS rdf:type s4ac:DisjunctiveAccessConditionSet.\n"));
    }

    #[test]
    fn test_add_condition_attaches_ask_text() {
        let mut policy = PolicyModel::new("Pol1");
        let uri = policy.add_condition("user is Alice", condition_model()).unwrap();
        assert_eq!(uri, ":AC-1");

        let text = policy.to_turtle();
        assert!(text.contains(":Pol1-ACS s4ac:hasAccessCondition :AC-1.\n"));
        assert!(text.contains(":AC-1 rdf:type s4ac:AccessCondition.\n"));
        assert!(text.contains(":AC-1 s4ac:hasQueryAsk \"\"\"PREFIX"));
        assert!(text.contains("?consumer foaf:name \"Alice\".\n"));
    }

    #[test]
    fn test_update_condition_preserves_document_order() {
        let mut policy = PolicyModel::new("Pol1");
        policy.add_condition("cond", condition_model()).unwrap();
        policy.grant(Privilege::Read);

        let before = policy.to_turtle();
        let ask_at = before.find(":AC-1 s4ac:hasQueryAsk").unwrap();

        let mut updated_model = AccessConditionModel::default();
        assert!(updated_model.set_outdoor(OutdoorDimension {
            lat: "48.85".to_string(),
            lon: "2.35".to_string(),
            radius: "500".to_string(),
        }));
        assert!(policy.update_condition(":AC-1", updated_model).unwrap());

        let after = policy.to_turtle();
        assert_eq!(after.find(":AC-1 s4ac:hasQueryAsk"), Some(ask_at));
        assert!(after.contains("?poi geo:lat \"48.85\".\n"));
        assert!(!after.contains("foaf:name \"Alice\""));
    }

    #[test]
    fn test_remove_condition() {
        let mut policy = PolicyModel::new("Pol1");
        policy.add_condition("one", condition_model()).unwrap();
        let uri = policy.add_condition("two", condition_model()).unwrap();

        assert!(policy.remove_condition(&uri));
        assert!(!policy.remove_condition(":AC-99"));
        assert_eq!(policy.conditions().len(), 1);

        let text = policy.to_turtle();
        assert!(!text.contains(":AC-2"));
        assert!(text.contains(":AC-1 rdf:type s4ac:AccessCondition.\n"));
    }

    #[test]
    fn test_policy_round_trip() {
        let mut policy = PolicyModel::new("Staff policy");
        policy.add_target("http://example.org/dataset/private");
        policy.grant(Privilege::Read);
        policy.grant(Privilege::Delete);
        policy.set_acs_type(AcsType::Disjunctive);

        let mut model = condition_model();
        assert!(model.set_time(
            TimeDimension {
                date_from: "01/06/2015".to_string(),
                date_to: "01/06/2015".to_string(),
                time_from: "09:00".to_string(),
                time_to: "18:00".to_string(),
            },
            &TimeLayout::default(),
        ));
        policy.add_condition("office hours", model.clone()).unwrap();

        let text = policy.to_turtle();
        let parsed = PolicyModel::parse(&text, TimeLayout::default()).unwrap();

        assert_eq!(parsed.policy_uri(), ":Staff-policy");
        assert_eq!(parsed.label(), "Staff policy");
        assert_eq!(parsed.targets(), &["http://example.org/dataset/private".to_string()]);
        assert!(parsed.privileges().contains(&Privilege::Read));
        assert!(parsed.privileges().contains(&Privilege::Delete));
        assert_eq!(parsed.privileges().len(), 2);
        assert_eq!(parsed.acs_type(), AcsType::Disjunctive);

        assert_eq!(parsed.conditions().len(), 1);
        let condition = &parsed.conditions()[0];
        assert_eq!(condition.uri, ":AC-1");
        assert_eq!(condition.label, "office hours");
        assert_eq!(condition.model, model);
    }

    #[test]
    fn test_parsed_policy_numbering_continues() {
        let mut policy = PolicyModel::new("Pol1");
        policy.add_condition("one", condition_model()).unwrap();
        policy.add_condition("two", condition_model()).unwrap();

        let mut parsed = PolicyModel::parse(&policy.to_turtle(), TimeLayout::default()).unwrap();
        let uri = parsed.add_condition("three", condition_model()).unwrap();
        assert_eq!(uri, ":AC-3");
    }

    #[test]
    fn test_parse_rejects_zero_or_many_roots() {
        let no_root = "@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .\n\
                       @prefix ex: <http://example.org/> .\n\
                       ex:thing rdfs:label \"not a policy\" .\n";
        assert!(matches!(
            PolicyModel::parse(no_root, TimeLayout::default()),
            Err(PolicyError::MissingPolicyRoot)
        ));

        let two_roots = "@prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .\n\
                         @prefix s4ac: <http://ns.inria.fr/s4ac/v2#> .\n\
                         @prefix ex: <http://example.org/> .\n\
                         ex:a rdf:type s4ac:AccessPolicy .\n\
                         ex:b rdf:type s4ac:AccessPolicy .\n";
        assert!(matches!(
            PolicyModel::parse(two_roots, TimeLayout::default()),
            Err(PolicyError::MultiplePolicyRoots { found: 2 })
        ));
    }

    #[test]
    fn test_parse_failure_is_an_error_not_a_partial_model() {
        let result = PolicyModel::parse("not turtle {{{", TimeLayout::default());
        assert!(result.is_err());
    }
}
