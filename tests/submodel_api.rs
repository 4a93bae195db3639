use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use std::{env, fs};

use once_cell::sync::Lazy;
use serde_json::{json, Value};

use aas_authz::api::types::{Submodel, SubmodelElement};
use aas_authz::api::{ApiError, SubmodelApi};
use aas_authz::config::AuthzConfig;
use aas_authz::decorator::factory::DecoratorFactory;
use aas_authz::resolver::factory::AuthzFactory;
use aas_authz::subject::{StaticSubjectProvider, SubjectInfo, SubjectProvider};

static TEST_DIR: Lazy<PathBuf> = Lazy::new(|| {
    let dir = env::temp_dir().join(format!("aas-authz-sm-tests-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
});

/// In-memory submodel bound to a fixed id.
struct MemorySubmodelApi {
    id: String,
    elements: RwLock<Vec<SubmodelElement>>,
}

impl MemorySubmodelApi {
    fn new(id: &str, elements: Vec<SubmodelElement>) -> Self {
        Self {
            id: id.to_string(),
            elements: RwLock::new(elements),
        }
    }
}

impl SubmodelApi for MemorySubmodelApi {
    fn submodel_id(&self) -> &str {
        &self.id
    }

    fn get_submodel(&self) -> Result<Submodel, ApiError> {
        Ok(Submodel {
            id: self.id.clone(),
            id_short: None,
            elements: self.elements.read().unwrap().clone(),
        })
    }

    fn get_element(&self, id_short_path: &str) -> Result<SubmodelElement, ApiError> {
        self.elements
            .read()
            .unwrap()
            .iter()
            .find(|e| e.id_short == id_short_path)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(id_short_path.to_string()))
    }

    fn set_element_value(&self, id_short_path: &str, value: Value) -> Result<(), ApiError> {
        let mut elements = self.elements.write().unwrap();
        match elements.iter_mut().find(|e| e.id_short == id_short_path) {
            Some(element) => {
                element.value = Some(value);
                Ok(())
            }
            None => Err(ApiError::NotFound(id_short_path.to_string())),
        }
    }

    fn add_element(&self, element: SubmodelElement) -> Result<(), ApiError> {
        self.elements.write().unwrap().push(element);
        Ok(())
    }

    fn delete_element(&self, id_short_path: &str) -> Result<(), ApiError> {
        let mut elements = self.elements.write().unwrap();
        let before = elements.len();
        elements.retain(|e| e.id_short != id_short_path);
        if elements.len() == before {
            return Err(ApiError::NotFound(id_short_path.to_string()));
        }
        Ok(())
    }

    fn invoke_operation(&self, id_short_path: &str, _args: Vec<Value>) -> Result<Value, ApiError> {
        self.get_element(id_short_path)?;
        Ok(json!({"status": "done"}))
    }
}

fn decorated(rules: &str, subject: SubjectInfo) -> Arc<dyn SubmodelApi> {
    let path = TEST_DIR.join(format!("{}.json", subject.name));
    fs::write(&path, rules).unwrap();

    let mut cfg = AuthzConfig {
        enabled: true,
        rules_path: path.to_string_lossy().into_owned(),
        ..Default::default()
    };
    cfg.complete().unwrap();

    let subjects: Arc<dyn SubjectProvider> = Arc::new(StaticSubjectProvider::new(subject));
    let factory = DecoratorFactory::new(&cfg, AuthzFactory::new(), subjects).unwrap();

    let inner = Arc::new(MemorySubmodelApi::new(
        "sm1",
        vec![
            SubmodelElement {
                id_short: "temp.value".to_string(),
                value: Some(json!(21.5)),
            },
            SubmodelElement {
                id_short: "pump.start".to_string(),
                value: None,
            },
        ],
    ));
    factory.decorate_submodel_api(inner)
}

#[test]
fn test_element_read_and_write_scopes() {
    let rules = r#"[
        {"role": "viewer", "action": "READ",
         "targetInformation": {"type": "submodel", "submodelId": "sm1"}},
        {"role": "maintainer", "action": "UPDATE",
         "targetInformation": {"type": "submodel", "submodelId": "sm1", "idShortPath": "temp.value"}}
    ]"#;

    let api = decorated(rules, SubjectInfo::new("viewer").with_roles(["viewer"]));
    assert_eq!(api.get_submodel().unwrap().id, "sm1");
    assert_eq!(
        api.get_element("temp.value").unwrap().value,
        Some(json!(21.5))
    );
    // Viewer cannot write
    assert!(api
        .set_element_value("temp.value", json!(25.0))
        .unwrap_err()
        .is_not_authorized());

    let api = decorated(
        rules,
        SubjectInfo::new("maintainer").with_roles(["maintainer"]),
    );
    api.set_element_value("temp.value", json!(25.0)).unwrap();
    // The update rule is scoped to one element
    assert!(api
        .set_element_value("pump.start", json!(1))
        .unwrap_err()
        .is_not_authorized());
    // And grants no read
    assert!(api.get_submodel().unwrap_err().is_not_authorized());
}

#[test]
fn test_invoke_requires_execute() {
    let rules = r#"[
        {"role": "operator", "action": "EXECUTE",
         "targetInformation": {"type": "submodel", "submodelId": "sm1", "idShortPath": "pump.start"}}
    ]"#;

    let api = decorated(rules, SubjectInfo::new("operator").with_roles(["operator"]));
    let result = api.invoke_operation("pump.start", vec![]).unwrap();
    assert_eq!(result, json!({"status": "done"}));

    // EXECUTE on one element does not extend to others or to reads
    assert!(api
        .invoke_operation("temp.value", vec![])
        .unwrap_err()
        .is_not_authorized());
    assert!(api.get_element("pump.start").unwrap_err().is_not_authorized());
}

#[test]
fn test_create_and_delete_elements() {
    let rules = r#"[
        {"role": "editor", "action": "CREATE",
         "targetInformation": {"type": "submodel", "submodelId": "sm1", "idShortPath": "*"}},
        {"role": "editor", "action": "DELETE",
         "targetInformation": {"type": "submodel", "submodelId": "sm1", "idShortPath": "*"}}
    ]"#;

    let api = decorated(rules, SubjectInfo::new("editor").with_roles(["editor"]));
    api.add_element(SubmodelElement {
        id_short: "pressure.value".to_string(),
        value: Some(json!(1.0)),
    })
    .unwrap();
    api.delete_element("pressure.value").unwrap();

    // Deleting a missing element is NotFound, not NotAuthorized
    let err = api.delete_element("pressure.value").unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)), "got: {err}");
}
