//! Integration tests for evoprompt-core through its public API.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use evoprompt_core::application::ApplicationError;
use evoprompt_core::domain::DomainError;
use evoprompt_core::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::Value;

/// Read-only files keyed by path.
struct Files(BTreeMap<PathBuf, String>);

impl Files {
    fn new(files: &[(&str, &str)]) -> Self {
        Self(
            files
                .iter()
                .map(|(p, c)| (PathBuf::from(p), c.to_string()))
                .collect(),
        )
    }
}

impl Filesystem for Files {
    fn is_file(&self, path: &Path) -> bool {
        self.0.contains_key(path)
    }

    fn read_to_string(&self, path: &Path) -> EvopromptResult<String> {
        self.0.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "missing".into(),
            }
            .into()
        })
    }

    fn list_files(&self, dir: &Path, extension: &str) -> EvopromptResult<Vec<PathBuf>> {
        Ok(self
            .0
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .filter(|p| p.extension().is_some_and(|e| e == extension))
            .cloned()
            .collect())
    }
}

/// Checks the schema's top-level `required` list and nothing else.
struct RequiredOnly;

impl SchemaEngine for RequiredOnly {
    fn validate(&self, schema: &Value, instance: &Value) -> Result<(), DomainError> {
        let required = schema["required"].as_array().cloned().unwrap_or_default();
        for key in required.iter().filter_map(Value::as_str) {
            if instance.get(key).is_none() {
                return Err(DomainError::violation(
                    "",
                    format!("\"{key}\" is a required property"),
                ));
            }
        }
        Ok(())
    }
}

const SCHEMA: &str = r#"{"required": ["metadata", "subject"]}"#;

fn files() -> Files {
    Files::new(&[
        ("schemas/cold-email/1.0.0.json", SCHEMA),
        ("examples/ok.json", r#"{"metadata":{"domain":"cold_email"},"subject":"Hi"}"#),
        ("examples/no_subject.json", r#"{"metadata":{"domain":"cold_email"}}"#),
    ])
}

fn validator() -> ValidationService {
    ValidationService::new(
        Box::new(files()),
        Box::new(RequiredOnly),
        SchemaLocator::default(),
    )
}

#[test]
fn end_to_end_validation() {
    let ok = validator().validate_file(Path::new("examples/ok.json")).unwrap();
    assert!(ok.is_valid());
    assert_eq!(ok.domain(), Some("cold_email"));

    let bad = validator()
        .validate_file(Path::new("examples/no_subject.json"))
        .unwrap();
    assert!(!bad.is_valid());
    assert_eq!(bad.domain(), Some("cold_email"));
    assert!(bad.error().unwrap().contains("subject"));
}

#[test]
fn entangled_run_carries_both_results() {
    let service = EntangleService::new(validator(), GenerationService::new(Box::new(files())));
    let run = service.run(Path::new("examples/no_subject.json")).unwrap();

    assert!(!run.validation.is_valid());
    assert_eq!(run.generation.input(), "examples/no_subject.json");
    assert_eq!(run.generation.output(), "Generated data");
}

#[test]
fn catalog_sees_schemas_and_examples() {
    let catalog = CatalogService::new(Box::new(files()), SchemaLocator::default(), "examples");

    let present: Vec<_> = catalog
        .list_schemas()
        .into_iter()
        .filter(|e| e.present)
        .map(|e| e.domain)
        .collect();
    assert_eq!(present, vec![SchemaDomain::ColdEmail]);
    assert_eq!(catalog.list_examples().unwrap().len(), 2);
}

#[test]
fn quantum_measurement_is_reproducible_with_a_seed() {
    let mixer = PromptMixer::default();
    let first = mixer.measure(2, &mut StdRng::seed_from_u64(42)).unwrap();
    let second = mixer.measure(2, &mut StdRng::seed_from_u64(42)).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.superposed.len(), 2);
}
