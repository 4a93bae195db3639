use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A reference from a shell to one of its submodels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    pub submodel_id: String,
}

/// Minimal Asset Administration Shell representation.
///
/// The authorization layer treats the metamodel as opaque payload; only the
/// identifier is ever inspected, to build access-check targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shell {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_short: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub submodel_refs: Vec<Reference>,
}

/// Minimal Submodel representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submodel {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_short: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub elements: Vec<SubmodelElement>,
}

/// A typed element of a submodel, addressed by its idShort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmodelElement {
    pub id_short: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl Shell {
    pub fn new(id: impl ToString) -> Self {
        Self {
            id: id.to_string(),
            id_short: None,
            submodel_refs: vec![],
        }
    }
}

impl Submodel {
    pub fn new(id: impl ToString) -> Self {
        Self {
            id: id.to_string(),
            id_short: None,
            elements: vec![],
        }
    }
}
