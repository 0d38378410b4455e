#![allow(non_snake_case)]

use super::*;
use tempfile::TempDir;
use zodgen_core::{GenerateOptions, NullableMode};

const DOCUMENT: &str = r#"{
    "openapi": "3.1.0",
    "components": {
        "schemas": {
            "User": {
                "type": "object",
                "required": ["name"],
                "properties": {
                    "name": { "type": "string", "minLength": 2 },
                    "age": { "type": "integer" }
                }
            }
        }
    },
    "paths": {
        "/users": {
            "get": {
                "operationId": "listUsers",
                "parameters": [{ "name": "limit", "in": "query", "schema": { "type": "string" } }]
            }
        }
    }
}"#;

fn settings(dir: &TempDir, output: &str) -> Settings {
    let input = dir.path().join("openapi.json");
    std::fs::write(&input, DOCUMENT).unwrap();

    Settings {
        input,
        output: dir.path().join(output),
        options: GenerateOptions::default(),
        banners: false,
    }
}

// run tests

#[test]
fn run___writes_module_and_reports_counts() {
    let dir = TempDir::new().unwrap();
    let settings = settings(&dir, "out.ts");

    let summary = run(&settings).unwrap();

    let written = std::fs::read_to_string(&settings.output).unwrap();
    assert_eq!(summary.statements, 2);
    assert_eq!(summary.bytes, written.len());
    assert!(written.starts_with("import { z } from \"zod\";\n\n"));
    assert!(written.contains("export const schemaUser = z.object({"));
    assert!(written.contains("    name: z.string().min(2),"));
    assert!(written.contains("    age: z.number().nullish()"));
    assert!(written.contains("export const queryListUsers = z.object({"));
}

#[test]
fn run___creates_missing_parent_directories() {
    let dir = TempDir::new().unwrap();
    let settings = settings(&dir, "src/gen/deep/openapi.ts");

    run(&settings).unwrap();

    assert!(settings.output.is_file());
}

#[test]
fn run___optional_mode___uses_optional_modifier() {
    let dir = TempDir::new().unwrap();
    let mut settings = settings(&dir, "out.ts");
    settings.options = settings.options.with_nullable_mode(NullableMode::Optional);

    run(&settings).unwrap();

    let written = std::fs::read_to_string(&settings.output).unwrap();
    assert!(written.contains("age: z.number().optional()"));
    assert!(!written.contains("nullish"));
}

#[test]
fn run___banners___mark_sections() {
    let dir = TempDir::new().unwrap();
    let mut settings = settings(&dir, "out.ts");
    settings.banners = true;

    run(&settings).unwrap();

    let written = std::fs::read_to_string(&settings.output).unwrap();
    assert!(written.contains("/* COMPONENTS */\nexport const schemaUser"));
    assert!(written.contains("/* QUERIES */\nexport const queryListUsers"));
    assert!(!written.contains("/* PATHS */"));
}

#[test]
fn run___missing_reference___writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("broken.json");
    std::fs::write(
        &input,
        r##"{ "openapi": "3.0.0", "components": { "schemas": { "A": { "$ref": "#/components/schemas/B" } } } }"##,
    )
    .unwrap();
    let settings = Settings {
        input,
        output: dir.path().join("out.ts"),
        options: GenerateOptions::default(),
        banners: true,
    };

    let err = run(&settings).unwrap_err();

    assert!(format!("{err:#}").contains("schema for reference #/components/schemas/B not found"));
    assert!(!settings.output.exists());
}

#[test]
fn run___missing_input___fails_with_path_in_message() {
    let dir = TempDir::new().unwrap();
    let settings = Settings {
        input: dir.path().join("missing.yaml"),
        output: dir.path().join("out.ts"),
        options: GenerateOptions::default(),
        banners: true,
    };

    let err = run(&settings).unwrap_err();

    assert!(err.to_string().contains("missing.yaml"));
}

// check tests

#[test]
fn check___valid_document___reports_counts() {
    let dir = TempDir::new().unwrap();
    let settings = settings(&dir, "unused.ts");

    let report = check(&settings.input).unwrap();

    assert_eq!(
        report,
        CheckReport {
            openapi: "3.1.0".into(),
            schemas: 1,
            paths: 1,
            operations: 1,
        }
    );
}

#[test]
fn check___cyclic_document___fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("cycle.yaml");
    std::fs::write(
        &input,
        r##"
openapi: 3.0.0
components:
  schemas:
    Node:
      type: object
      properties:
        next:
          $ref: "#/components/schemas/Node"
"##,
    )
    .unwrap();

    let err = check(&input).unwrap_err();

    assert!(format!("{err:#}").contains("cyclic reference: Node -> Node"));
}
