//! RDF Vocabulary Constants for PRISSMA/S4AC Access Policies
//!
//! This crate provides a centralized location for the vocabulary IRIs,
//! prefix table, and dimension keyword tables used throughout the policy
//! model and access-condition compiler.
//!
//! # Organization
//!
//! Constants are organized by vocabulary:
//! - `rdf` / `rdfs` / `xsd` - W3C core vocabularies
//! - `foaf` - FOAF vocabulary (user dimension)
//! - `prissma` - PRISSMA context vocabulary (anchors, POI, environment)
//! - `s4ac` - S4AC access-control vocabulary (policies, privileges, ASK queries)
//! - `geo` - WGS84 geo positioning (outdoor dimension)
//! - `ao` / `tl` / `time` - Association/Timeline/OWL-Time (time dimension)
//! - `hard` / `soft` / `common` - W3C Delivery Context (device dimension)
//!
//! The [`prefixes::PrefixTable`] maps short prefixes to the namespaces above;
//! [`keywords`] holds the static per-dimension keyword vocabulary.

pub mod keywords;
pub mod prefixes;

/// RDF vocabulary constants
pub mod rdf {
    /// rdf namespace IRI
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    /// rdf:type IRI
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

/// RDFS vocabulary constants
pub mod rdfs {
    /// rdfs namespace IRI
    pub const NS: &str = "http://www.w3.org/2000/01/rdf-schema#";

    /// rdfs:label IRI
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
}

/// XSD vocabulary constants
pub mod xsd {
    /// xsd namespace IRI
    pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";

    /// xsd:string IRI
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// xsd:dateTime IRI
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";

    /// xsd:duration IRI
    pub const DURATION: &str = "http://www.w3.org/2001/XMLSchema#duration";
}

/// FOAF vocabulary constants (user dimension)
pub mod foaf {
    /// foaf namespace IRI
    pub const NS: &str = "http://xmlns.com/foaf/0.1/";

    /// foaf:Person IRI
    pub const PERSON: &str = "http://xmlns.com/foaf/0.1/Person";

    /// foaf:name IRI
    pub const NAME: &str = "http://xmlns.com/foaf/0.1/name";

    /// foaf:givenName IRI
    pub const GIVEN_NAME: &str = "http://xmlns.com/foaf/0.1/givenName";

    /// foaf:familyName IRI
    pub const FAMILY_NAME: &str = "http://xmlns.com/foaf/0.1/familyName";

    /// foaf:age IRI
    pub const AGE: &str = "http://xmlns.com/foaf/0.1/age";

    /// foaf:gender IRI
    pub const GENDER: &str = "http://xmlns.com/foaf/0.1/gender";

    /// foaf:mbox IRI
    pub const MBOX: &str = "http://xmlns.com/foaf/0.1/mbox";

    /// foaf:topic_interest IRI
    pub const TOPIC_INTEREST: &str = "http://xmlns.com/foaf/0.1/topic_interest";

    /// foaf:workplaceHomepage IRI
    pub const WORKPLACE_HOMEPAGE: &str = "http://xmlns.com/foaf/0.1/workplaceHomepage";

    /// foaf:schoolHomepage IRI
    pub const SCHOOL_HOMEPAGE: &str = "http://xmlns.com/foaf/0.1/schoolHomepage";

    /// foaf:knows IRI
    pub const KNOWS: &str = "http://xmlns.com/foaf/0.1/knows";
}

/// PRISSMA context vocabulary constants
pub mod prissma {
    /// prissma namespace IRI
    pub const NS: &str = "http://ns.inria.fr/prissma/v2#";

    /// prissma:Context IRI
    pub const CONTEXT: &str = "http://ns.inria.fr/prissma/v2#Context";

    /// prissma:user IRI
    pub const USER: &str = "http://ns.inria.fr/prissma/v2#user";

    /// prissma:device IRI
    pub const DEVICE: &str = "http://ns.inria.fr/prissma/v2#device";

    /// prissma:Device IRI
    pub const DEVICE_CLASS: &str = "http://ns.inria.fr/prissma/v2#Device";

    /// prissma:environment IRI
    pub const ENVIRONMENT: &str = "http://ns.inria.fr/prissma/v2#environment";

    /// prissma:Environment IRI
    pub const ENVIRONMENT_CLASS: &str = "http://ns.inria.fr/prissma/v2#Environment";

    /// prissma:currentPOI IRI
    pub const CURRENT_POI: &str = "http://ns.inria.fr/prissma/v2#currentPOI";

    /// prissma:POI IRI
    pub const POI: &str = "http://ns.inria.fr/prissma/v2#POI";

    /// prissma:radius IRI
    pub const RADIUS: &str = "http://ns.inria.fr/prissma/v2#radius";

    /// prissma:poiCategory IRI
    pub const POI_CATEGORY: &str = "http://ns.inria.fr/prissma/v2#poiCategory";

    /// prissma:motion IRI
    pub const MOTION: &str = "http://ns.inria.fr/prissma/v2#motion";

    /// prissma:nearbyEntity IRI
    pub const NEARBY_ENTITY: &str = "http://ns.inria.fr/prissma/v2#nearbyEntity";
}

/// S4AC access-control vocabulary constants
pub mod s4ac {
    /// s4ac namespace IRI
    pub const NS: &str = "http://ns.inria.fr/s4ac/v2#";

    /// s4ac:AccessPolicy IRI
    pub const ACCESS_POLICY: &str = "http://ns.inria.fr/s4ac/v2#AccessPolicy";

    /// s4ac:AccessCondition IRI
    pub const ACCESS_CONDITION: &str = "http://ns.inria.fr/s4ac/v2#AccessCondition";

    /// s4ac:ConjunctiveAccessConditionSet IRI
    pub const CONJUNCTIVE_ACS: &str = "http://ns.inria.fr/s4ac/v2#ConjunctiveAccessConditionSet";

    /// s4ac:DisjunctiveAccessConditionSet IRI
    pub const DISJUNCTIVE_ACS: &str = "http://ns.inria.fr/s4ac/v2#DisjunctiveAccessConditionSet";

    /// s4ac:appliesTo IRI
    pub const APPLIES_TO: &str = "http://ns.inria.fr/s4ac/v2#appliesTo";

    /// s4ac:hasAccessConditionSet IRI
    pub const HAS_ACCESS_CONDITION_SET: &str = "http://ns.inria.fr/s4ac/v2#hasAccessConditionSet";

    /// s4ac:hasAccessCondition IRI
    pub const HAS_ACCESS_CONDITION: &str = "http://ns.inria.fr/s4ac/v2#hasAccessCondition";

    /// s4ac:hasAccessPrivilege IRI
    pub const HAS_ACCESS_PRIVILEGE: &str = "http://ns.inria.fr/s4ac/v2#hasAccessPrivilege";

    /// s4ac:hasQueryAsk IRI
    pub const HAS_QUERY_ASK: &str = "http://ns.inria.fr/s4ac/v2#hasQueryAsk";

    /// s4ac:Create IRI
    pub const CREATE: &str = "http://ns.inria.fr/s4ac/v2#Create";

    /// s4ac:Read IRI
    pub const READ: &str = "http://ns.inria.fr/s4ac/v2#Read";

    /// s4ac:Update IRI
    pub const UPDATE: &str = "http://ns.inria.fr/s4ac/v2#Update";

    /// s4ac:Delete IRI
    pub const DELETE: &str = "http://ns.inria.fr/s4ac/v2#Delete";
}

/// WGS84 geo vocabulary constants (outdoor dimension)
pub mod geo {
    /// geo namespace IRI
    pub const NS: &str = "http://www.w3.org/2003/01/geo/wgs84_pos#";

    /// geo:lat IRI
    pub const LAT: &str = "http://www.w3.org/2003/01/geo/wgs84_pos#lat";

    /// geo:lon IRI
    pub const LON: &str = "http://www.w3.org/2003/01/geo/wgs84_pos#lon";
}

/// Association Ontology constants (time dimension attachment)
pub mod ao {
    /// ao namespace IRI
    pub const NS: &str = "http://purl.org/ontology/ao/core#";

    /// ao:time IRI
    pub const TIME: &str = "http://purl.org/ontology/ao/core#time";
}

/// Timeline ontology constants (time dimension interval)
pub mod tl {
    /// tl namespace IRI
    pub const NS: &str = "http://purl.org/NET/c4dm/timeline.owl#";

    /// tl:start IRI
    pub const START: &str = "http://purl.org/NET/c4dm/timeline.owl#start";

    /// tl:duration IRI
    pub const DURATION: &str = "http://purl.org/NET/c4dm/timeline.owl#duration";
}

/// OWL-Time vocabulary constants
pub mod time {
    /// time namespace IRI
    pub const NS: &str = "http://www.w3.org/2006/time#";

    /// time:Interval IRI
    pub const INTERVAL: &str = "http://www.w3.org/2006/time#Interval";
}

/// Delivery Context hardware vocabulary constants (device dimension)
pub mod hard {
    /// hard namespace IRI
    pub const NS: &str = "http://www.w3.org/2007/uwa/context/hardware.owl#";

    /// hard:display IRI
    pub const DISPLAY: &str = "http://www.w3.org/2007/uwa/context/hardware.owl#display";

    /// hard:Display IRI
    pub const DISPLAY_CLASS: &str = "http://www.w3.org/2007/uwa/context/hardware.owl#Display";

    /// hard:resolutionWidth IRI
    pub const RESOLUTION_WIDTH: &str =
        "http://www.w3.org/2007/uwa/context/hardware.owl#resolutionWidth";

    /// hard:resolutionHeight IRI
    pub const RESOLUTION_HEIGHT: &str =
        "http://www.w3.org/2007/uwa/context/hardware.owl#resolutionHeight";

    /// hard:battery IRI
    pub const BATTERY: &str = "http://www.w3.org/2007/uwa/context/hardware.owl#battery";

    /// hard:Battery IRI
    pub const BATTERY_CLASS: &str = "http://www.w3.org/2007/uwa/context/hardware.owl#Battery";
}

/// Delivery Context software vocabulary constants (device dimension)
pub mod soft {
    /// soft namespace IRI
    pub const NS: &str = "http://www.w3.org/2007/uwa/context/software.owl#";

    /// soft:operatingSystem IRI
    pub const OPERATING_SYSTEM: &str =
        "http://www.w3.org/2007/uwa/context/software.owl#operatingSystem";

    /// soft:OperatingSystem IRI
    pub const OPERATING_SYSTEM_CLASS: &str =
        "http://www.w3.org/2007/uwa/context/software.owl#OperatingSystem";

    /// soft:installedSoftware IRI
    pub const INSTALLED_SOFTWARE: &str =
        "http://www.w3.org/2007/uwa/context/software.owl#installedSoftware";

    /// soft:SoftwareAssets IRI
    pub const SOFTWARE_ASSETS: &str =
        "http://www.w3.org/2007/uwa/context/software.owl#SoftwareAssets";

    /// soft:defaultBrowser IRI
    pub const DEFAULT_BROWSER: &str =
        "http://www.w3.org/2007/uwa/context/software.owl#defaultBrowser";

    /// soft:Browser IRI
    pub const BROWSER_CLASS: &str = "http://www.w3.org/2007/uwa/context/software.owl#Browser";
}

/// Delivery Context common vocabulary constants (shared leaf properties)
pub mod common {
    /// common namespace IRI
    pub const NS: &str = "http://www.w3.org/2007/uwa/context/common.owl#";

    /// common:vendor IRI
    pub const VENDOR: &str = "http://www.w3.org/2007/uwa/context/common.owl#vendor";

    /// common:model IRI
    pub const MODEL: &str = "http://www.w3.org/2007/uwa/context/common.owl#model";

    /// common:version IRI
    pub const VERSION: &str = "http://www.w3.org/2007/uwa/context/common.owl#version";

    /// common:name IRI
    pub const NAME: &str = "http://www.w3.org/2007/uwa/context/common.owl#name";
}
