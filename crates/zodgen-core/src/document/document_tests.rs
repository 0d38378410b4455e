#![allow(non_snake_case)]

use super::*;
use serde_json::json;

fn petstore() -> Document {
    serde_json::from_value(json!({
        "openapi": "3.1.0",
        "components": {
            "schemas": {
                "Pet": { "type": "object" },
                "PetType": { "type": "string", "enum": ["dog", "cat"] }
            }
        },
        "paths": {
            "/pets/{petId}": {
                "parameters": [
                    { "name": "petId", "in": "path", "required": true, "schema": { "type": "integer" } }
                ],
                "delete": { "operationId": "pets_delete" },
                "get": {
                    "operationId": "pets_get",
                    "parameters": [
                        { "name": "verbose", "in": "query", "schema": { "type": "boolean" } },
                        { "$ref": "#/components/parameters/Trace" }
                    ]
                }
            }
        }
    }))
    .unwrap()
}

#[test]
fn Document___schemas___finds_named_schema() {
    let doc = petstore();
    let schemas = doc.schemas().unwrap();

    assert!(schemas.contains_key("Pet"));
    assert!(!schemas.contains_key("Missing"));
    assert_eq!(doc.openapi.as_deref(), Some("3.1.0"));
}

#[test]
fn Document___without_components___has_no_schemas() {
    let doc: Document = serde_json::from_value(json!({ "paths": {} })).unwrap();

    assert!(doc.schemas().is_none());
}

#[test]
fn PathItem___operations___follow_fixed_method_order() {
    let doc = petstore();
    let item = &doc.paths["/pets/{petId}"];

    let methods: Vec<Method> = item.operations().map(|(m, _)| m).collect();

    assert_eq!(methods, vec![Method::Get, Method::Delete]);
}

#[test]
fn Operation___parameters___distinguish_references() {
    let doc = petstore();
    let get = doc.paths["/pets/{petId}"].get.as_ref().unwrap();

    assert_eq!(get.operation_id.as_deref(), Some("pets_get"));
    assert!(matches!(get.parameters[0], ParameterOrReference::Parameter(_)));
    assert!(matches!(get.parameters[1], ParameterOrReference::Reference(_)));
}

#[test]
fn Parameter___required___defaults_to_false() {
    let doc = petstore();
    let get = doc.paths["/pets/{petId}"].get.as_ref().unwrap();

    let ParameterOrReference::Parameter(verbose) = &get.parameters[0] else {
        panic!("expected an inline parameter");
    };

    assert!(!verbose.required);
    assert_eq!(verbose.location, ParameterLocation::Query);
}

#[test]
fn PathItem___shared_parameters___are_parsed() {
    let doc = petstore();

    assert_eq!(doc.paths["/pets/{petId}"].parameters.len(), 1);
}

#[test]
fn Method___display___is_lowercase() {
    assert_eq!(Method::Patch.to_string(), "patch");
}
