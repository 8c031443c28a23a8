//! Dimension keyword vocabulary
//!
//! Static read-only tables, one per autocomplete dimension (user, device,
//! environment). Each entry maps an ontology property IRI to its human label,
//! prefix/local name, and - for device/environment - the graph-pattern path
//! ("prepend chain") from the dimension's anchor variable down to the parent
//! node of the leaf property. The underlying ontologies model composite
//! structures (a device's battery, its installed software's default browser)
//! as nested blank nodes; the UI flattens that tree into one suggestion per
//! leaf property.
//!
//! Lookup misses are non-fatal: callers skip the keyword and log.

/// One keyword vocabulary entry.
///
/// `prepend` is the chain of Turtle clauses from the dimension anchor
/// (`?dev` / `?env`) to the parent of the leaf property; `None` means the
/// property attaches directly to the anchor. `parent_type` is the `rdf:type`
/// IRI of the leaf's parent node and disambiguates entries that share a leaf
/// predicate under different parents (e.g. `common:model` of a battery vs.
/// of a display).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordDef {
    /// Absolute IRI of the leaf property
    pub uri: &'static str,
    /// Human-readable label shown in the autocomplete widget
    pub label: &'static str,
    /// Prefix of the leaf property
    pub prefix: &'static str,
    /// Local name of the leaf property
    pub local_name: &'static str,
    /// Graph-pattern path from the anchor to the leaf's parent, in Turtle
    /// syntax with explicit anchor placeholders
    pub prepend: Option<&'static str>,
    /// `rdf:type` IRI of the leaf's parent node (`None` = the anchor itself)
    pub parent_type: Option<&'static str>,
}

/// The three keyword dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// User dimension, anchored at `?consumer`
    User,
    /// Device dimension, anchored at `?dev`
    Device,
    /// Environment dimension, anchored at `?env`
    Environment,
}

/// User dimension: FOAF properties attaching directly to `?consumer`
pub const USER_KEYWORDS: &[KeywordDef] = &[
    KeywordDef {
        uri: crate::foaf::NAME,
        label: "name",
        prefix: "foaf",
        local_name: "name",
        prepend: None,
        parent_type: None,
    },
    KeywordDef {
        uri: crate::foaf::GIVEN_NAME,
        label: "given name",
        prefix: "foaf",
        local_name: "givenName",
        prepend: None,
        parent_type: None,
    },
    KeywordDef {
        uri: crate::foaf::FAMILY_NAME,
        label: "family name",
        prefix: "foaf",
        local_name: "familyName",
        prepend: None,
        parent_type: None,
    },
    KeywordDef {
        uri: crate::foaf::AGE,
        label: "age",
        prefix: "foaf",
        local_name: "age",
        prepend: None,
        parent_type: None,
    },
    KeywordDef {
        uri: crate::foaf::GENDER,
        label: "gender",
        prefix: "foaf",
        local_name: "gender",
        prepend: None,
        parent_type: None,
    },
    KeywordDef {
        uri: crate::foaf::MBOX,
        label: "e-mail",
        prefix: "foaf",
        local_name: "mbox",
        prepend: None,
        parent_type: None,
    },
    KeywordDef {
        uri: crate::foaf::TOPIC_INTEREST,
        label: "interest",
        prefix: "foaf",
        local_name: "topic_interest",
        prepend: None,
        parent_type: None,
    },
    KeywordDef {
        uri: crate::foaf::WORKPLACE_HOMEPAGE,
        label: "workplace homepage",
        prefix: "foaf",
        local_name: "workplaceHomepage",
        prepend: None,
        parent_type: None,
    },
    KeywordDef {
        uri: crate::foaf::SCHOOL_HOMEPAGE,
        label: "school homepage",
        prefix: "foaf",
        local_name: "schoolHomepage",
        prepend: None,
        parent_type: None,
    },
    KeywordDef {
        uri: crate::foaf::KNOWS,
        label: "knows",
        prefix: "foaf",
        local_name: "knows",
        prepend: None,
        parent_type: None,
    },
];

/// Device dimension: Delivery Context properties reached from `?dev`
pub const DEVICE_KEYWORDS: &[KeywordDef] = &[
    KeywordDef {
        uri: crate::hard::RESOLUTION_WIDTH,
        label: "display resolution width",
        prefix: "hard",
        local_name: "resolutionWidth",
        prepend: Some("?dev hard:display ?display. ?display a hard:Display"),
        parent_type: Some(crate::hard::DISPLAY_CLASS),
    },
    KeywordDef {
        uri: crate::hard::RESOLUTION_HEIGHT,
        label: "display resolution height",
        prefix: "hard",
        local_name: "resolutionHeight",
        prepend: Some("?dev hard:display ?display. ?display a hard:Display"),
        parent_type: Some(crate::hard::DISPLAY_CLASS),
    },
    KeywordDef {
        uri: crate::common::MODEL,
        label: "display model",
        prefix: "common",
        local_name: "model",
        prepend: Some("?dev hard:display ?display. ?display a hard:Display"),
        parent_type: Some(crate::hard::DISPLAY_CLASS),
    },
    KeywordDef {
        uri: crate::common::VENDOR,
        label: "battery vendor",
        prefix: "common",
        local_name: "vendor",
        prepend: Some("?dev hard:battery ?battery. ?battery a hard:Battery"),
        parent_type: Some(crate::hard::BATTERY_CLASS),
    },
    KeywordDef {
        uri: crate::common::MODEL,
        label: "battery model",
        prefix: "common",
        local_name: "model",
        prepend: Some("?dev hard:battery ?battery. ?battery a hard:Battery"),
        parent_type: Some(crate::hard::BATTERY_CLASS),
    },
    KeywordDef {
        uri: crate::common::VENDOR,
        label: "operating system vendor",
        prefix: "common",
        local_name: "vendor",
        prepend: Some("?dev soft:operatingSystem ?os. ?os a soft:OperatingSystem"),
        parent_type: Some(crate::soft::OPERATING_SYSTEM_CLASS),
    },
    KeywordDef {
        uri: crate::common::VERSION,
        label: "operating system version",
        prefix: "common",
        local_name: "version",
        prepend: Some("?dev soft:operatingSystem ?os. ?os a soft:OperatingSystem"),
        parent_type: Some(crate::soft::OPERATING_SYSTEM_CLASS),
    },
    KeywordDef {
        uri: crate::common::NAME,
        label: "default browser name",
        prefix: "common",
        local_name: "name",
        prepend: Some(
            "?dev soft:installedSoftware ?sw. ?sw a soft:SoftwareAssets. \
             ?sw soft:defaultBrowser ?browser. ?browser a soft:Browser",
        ),
        parent_type: Some(crate::soft::BROWSER_CLASS),
    },
];

/// Environment dimension: PRISSMA properties reached from `?env`
pub const ENVIRONMENT_KEYWORDS: &[KeywordDef] = &[
    KeywordDef {
        uri: crate::prissma::POI_CATEGORY,
        label: "POI category",
        prefix: "prissma",
        local_name: "poiCategory",
        prepend: Some("?env prissma:currentPOI ?poi. ?poi a prissma:POI"),
        parent_type: Some(crate::prissma::POI),
    },
    KeywordDef {
        uri: crate::rdfs::LABEL,
        label: "POI label",
        prefix: "rdfs",
        local_name: "label",
        prepend: Some("?env prissma:currentPOI ?poi. ?poi a prissma:POI"),
        parent_type: Some(crate::prissma::POI),
    },
    KeywordDef {
        uri: crate::prissma::MOTION,
        label: "motion",
        prefix: "prissma",
        local_name: "motion",
        prepend: None,
        parent_type: None,
    },
    KeywordDef {
        uri: crate::foaf::NAME,
        label: "nearby person name",
        prefix: "foaf",
        local_name: "name",
        prepend: Some("?env prissma:nearbyEntity ?person. ?person a foaf:Person"),
        parent_type: Some(crate::foaf::PERSON),
    },
];

/// Get the keyword table for a dimension
pub fn keywords(dimension: Dimension) -> &'static [KeywordDef] {
    match dimension {
        Dimension::User => USER_KEYWORDS,
        Dimension::Device => DEVICE_KEYWORDS,
        Dimension::Environment => ENVIRONMENT_KEYWORDS,
    }
}

/// Look up the first keyword entry for a property IRI.
///
/// Sufficient when the property is unique within the dimension; use
/// [`lookup_scoped`] when the same property appears under several parents.
pub fn lookup(dimension: Dimension, uri: &str) -> Option<&'static KeywordDef> {
    keywords(dimension).iter().find(|k| k.uri == uri)
}

/// Look up a keyword entry by `(property IRI, parent rdf:type)` compound key.
///
/// When `parent_type` is `None` the entry must attach directly to the anchor.
/// Falls back to a unique IRI-only match so callers without type information
/// still resolve unambiguous properties.
pub fn lookup_scoped(
    dimension: Dimension,
    uri: &str,
    parent_type: Option<&str>,
) -> Option<&'static KeywordDef> {
    let table = keywords(dimension);
    if let Some(def) = table
        .iter()
        .find(|k| k.uri == uri && k.parent_type == parent_type)
    {
        return Some(def);
    }

    // Unique-match fallback
    let mut matches = table.iter().filter(|k| k.uri == uri);
    let first = matches.next()?;
    if matches.next().is_none() {
        Some(first)
    } else {
        None
    }
}
