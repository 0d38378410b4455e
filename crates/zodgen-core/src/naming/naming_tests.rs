#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// to_identifier tests

#[test_case("hello world", "helloWorld" ; "space separated")]
#[test_case("HelloWorld", "helloWorld" ; "pascal case")]
#[test_case("hello-world", "helloWorld" ; "kebab case")]
#[test_case("hello_world", "helloWorld" ; "snake case")]
#[test_case("schema_Pet", "schemaPet" ; "prefixed pascal")]
#[test_case("schema_PetType", "schemaPetType" ; "prefixed multi word")]
#[test_case("path_pets_get", "pathPetsGet" ; "prefixed snake")]
#[test_case("foo__bar", "fooBar" ; "separator run")]
#[test_case("a _-b", "aB" ; "mixed separator run")]
fn to_identifier___converts(input: &str, expected: &str) {
    assert_eq!(to_identifier(input), expected);
}

#[test]
fn to_identifier___uppercase_run___splits_every_letter() {
    assert_eq!(to_identifier("schema_ID"), "schemaID");
    assert_eq!(to_identifier("ID"), "iD");
}

#[test]
fn to_identifier___lowercases_word_tails() {
    assert_eq!(to_identifier("SHOUTING_words"), "sHOUTINGWords");
    assert_eq!(to_identifier("one_TWO"), "oneTWO");
}

#[test]
fn to_identifier___leading_separator___capitalizes_first_word() {
    assert_eq!(to_identifier("_leading"), "Leading");
}

#[test]
fn to_identifier___trailing_separator___is_dropped() {
    assert_eq!(to_identifier("trailing_"), "trailing");
}

#[test]
fn to_identifier___empty___returns_empty() {
    assert_eq!(to_identifier(""), "");
}

// to_valid_identifier tests

#[test_case("123abc", "_123abc" ; "digit leading")]
#[test_case("hello-world", "hello_world" ; "dash replaced")]
#[test_case("", "_" ; "empty")]
#[test_case("#tag", "_tag" ; "illegal leading replaced")]
#[test_case("$scope", "$scope" ; "dollar leading kept")]
#[test_case("a.b c", "a_b_c" ; "interior illegal replaced")]
#[test_case("petStore", "petStore" ; "already valid")]
fn to_valid_identifier___sanitizes(input: &str, expected: &str) {
    assert_eq!(to_valid_identifier(input), expected);
}

#[test_case("class")]
#[test_case("default")]
#[test_case("enum")]
#[test_case("null")]
#[test_case("yield")]
fn to_valid_identifier___reserved_keyword___gets_underscore_prefix(keyword: &str) {
    assert_eq!(to_valid_identifier(keyword), format!("_{keyword}"));
}

#[test]
fn to_valid_identifier___non_ascii___is_replaced() {
    assert_eq!(to_valid_identifier("café"), "caf_");
}

// statement_identifier tests

#[test]
fn statement_identifier___combines_prefix_and_name() {
    assert_eq!(statement_identifier(SCHEMA_PREFIX, "Pet"), "schemaPet");
    assert_eq!(statement_identifier(PATH_PREFIX, "pets_get"), "pathPetsGet");
    assert_eq!(statement_identifier(QUERY_PREFIX, "listPets"), "queryListPets");
}

#[test]
fn statement_identifier___illegal_source_characters___are_sanitized() {
    assert_eq!(statement_identifier(SCHEMA_PREFIX, "Pet.v2"), "schemaPet_v2");
}

// schema_name_from_ref tests

#[test]
fn schema_name_from_ref___component_pointer___returns_last_segment() {
    assert_eq!(schema_name_from_ref("#/components/schemas/Pet"), "Pet");
    assert_eq!(schema_name_from_ref("#/components/schemas/Order"), "Order");
}

#[test]
fn schema_name_from_ref___foreign_pointer___still_returns_last_segment() {
    assert_eq!(schema_name_from_ref("#/parameters/Param"), "Param");
}

// is_bare_property_name tests

#[test_case("name", true)]
#[test_case("_private", true)]
#[test_case("$ref", true)]
#[test_case("x1", true)]
#[test_case("1x", false)]
#[test_case("content-type", false)]
#[test_case("", false)]
fn is_bare_property_name___classifies(input: &str, expected: bool) {
    assert_eq!(is_bare_property_name(input), expected);
}

#[test]
fn sanitize_words___replaces_path_punctuation() {
    assert_eq!(sanitize_words("/pets/{petId}"), "_pets__petId_");
}
