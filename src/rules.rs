use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// The literal that matches any concrete value in a target pattern.
pub const WILDCARD: &str = "*";

/// Operation categories that access rules can bind to.
///
/// The set is closed: an unknown action string in a rules file is a parse
/// error, which aborts startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Read,
    Create,
    Update,
    Delete,
    Execute,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Read => "READ",
            Action::Create => "CREATE",
            Action::Update => "UPDATE",
            Action::Delete => "DELETE",
            Action::Execute => "EXECUTE",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Describes which object(s) an access check or rule applies to.
///
/// The variant tag is the `type` field in rule files. The same type doubles as
/// the concrete per-call target description built by the authorizers: in a rule,
/// a field that is absent or `"*"` matches any value; in a concrete target,
/// fields are fully specified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TargetInformation {
    /// An Asset Administration Shell, identified by its id.
    #[serde(rename = "shell")]
    Shell {
        #[serde(default, rename = "aasId", skip_serializing_if = "Option::is_none")]
        aas_id: Option<String>,
    },

    /// A Submodel, optionally narrowed to a single element by idShort path.
    #[serde(rename = "submodel")]
    Submodel {
        #[serde(
            default,
            rename = "submodelId",
            skip_serializing_if = "Option::is_none"
        )]
        submodel_id: Option<String>,

        #[serde(
            default,
            rename = "idShortPath",
            skip_serializing_if = "Option::is_none"
        )]
        id_short_path: Option<String>,
    },

    /// A file addressed by its path.
    #[serde(rename = "path")]
    File {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        path: Option<String>,
    },
}

impl TargetInformation {
    pub fn shell(aas_id: impl ToString) -> Self {
        Self::Shell {
            aas_id: Some(aas_id.to_string()),
        }
    }

    /// A shell target with no id, used for operations spanning all shells.
    /// Only rules that omit or wildcard the id match it.
    pub fn any_shell() -> Self {
        Self::Shell { aas_id: None }
    }

    pub fn submodel(submodel_id: impl ToString) -> Self {
        Self::Submodel {
            submodel_id: Some(submodel_id.to_string()),
            id_short_path: None,
        }
    }

    pub fn any_submodel() -> Self {
        Self::Submodel {
            submodel_id: None,
            id_short_path: None,
        }
    }

    pub fn element(submodel_id: impl ToString, id_short_path: impl ToString) -> Self {
        Self::Submodel {
            submodel_id: Some(submodel_id.to_string()),
            id_short_path: Some(id_short_path.to_string()),
        }
    }

    pub fn file(path: impl ToString) -> Self {
        Self::File {
            path: Some(path.to_string()),
        }
    }

    /// Returns true if this pattern matches the given concrete target.
    ///
    /// Patterns and targets of different kinds never match. For each field the
    /// pattern specifies, the value must either be the wildcard or equal the
    /// concrete value; a concrete target missing a non-wildcard pattern field
    /// does not match.
    pub fn matches(&self, target: &TargetInformation) -> bool {
        match (self, target) {
            (Self::Shell { aas_id: pattern }, Self::Shell { aas_id }) => {
                field_matches(pattern, aas_id)
            }
            (
                Self::Submodel {
                    submodel_id: id_pattern,
                    id_short_path: path_pattern,
                },
                Self::Submodel {
                    submodel_id,
                    id_short_path,
                },
            ) => field_matches(id_pattern, submodel_id) && field_matches(path_pattern, id_short_path),
            (Self::File { path: pattern }, Self::File { path }) => field_matches(pattern, path),
            _ => false,
        }
    }
}

fn field_matches(pattern: &Option<String>, value: &Option<String>) -> bool {
    match pattern {
        None => true,
        Some(p) if p == WILDCARD => true,
        Some(p) => matches!(value, Some(v) if v == p),
    }
}

impl fmt::Display for TargetInformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn field(value: &Option<String>) -> &str {
            value.as_deref().unwrap_or(WILDCARD)
        }
        match self {
            Self::Shell { aas_id } => write!(f, "shell '{}'", field(aas_id)),
            Self::Submodel {
                submodel_id,
                id_short_path: None,
            } => write!(f, "submodel '{}'", field(submodel_id)),
            Self::Submodel {
                submodel_id,
                id_short_path: Some(path),
            } => write!(f, "submodel '{}' element '{path}'", field(submodel_id)),
            Self::File { path } => write!(f, "file '{}'", field(path)),
        }
    }
}

/// A single access-control statement binding a role to an action and a target
/// pattern. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Role name, matched exactly against the caller's resolved roles.
    pub role: String,

    /// The action this rule permits.
    pub action: Action,

    /// The objects this rule applies to. Absent means any target.
    #[serde(
        default,
        rename = "targetInformation",
        skip_serializing_if = "Option::is_none"
    )]
    pub target: Option<TargetInformation>,
}

/// An immutable set of access rules.
///
/// Loaded once at startup and shared read-only for the process lifetime, so
/// lookups need no synchronization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Loads rules from a JSON file.
    ///
    /// Any problem (missing file, malformed JSON, unknown action or target
    /// type) is an error; callers must treat it as fatal rather than proceed
    /// with a partial rule set.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("read rules file: {}", path.display()))?;
        let rules: Vec<Rule> = serde_json::from_str(&data)
            .with_context(|| format!("parse rules file: {}", path.display()))?;
        Ok(Self::new(rules))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Checks whether any rule permits the role to perform the action on the
    /// target.
    ///
    /// The match is existential: rule order carries no meaning, and there is no
    /// deny-rule concept. Absence of a permitting rule is the only deny
    /// condition.
    pub fn is_permitted(&self, role: &str, action: Action, target: &TargetInformation) -> bool {
        for rule in self.rules.iter() {
            if rule.role != role {
                continue;
            }
            if rule.action != action {
                continue;
            }
            if let Some(ref pattern) = rule.target {
                if !pattern.matches(target) {
                    continue;
                }
            }
            return true;
        }
        false
    }
}
