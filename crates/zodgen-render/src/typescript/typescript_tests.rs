#![allow(non_snake_case)]

use super::*;
use serde_json::json;
use test_case::test_case;
use zodgen_core::Section;

fn string_call(modifiers: Vec<Modifier>) -> Expr {
    Expr::Call(Call {
        base: Base::String,
        modifiers,
    })
}

fn property(name: &str, value: Expr) -> Property {
    Property {
        name: name.to_string(),
        value,
        comment: None,
    }
}

// expression tests

#[test_case(Base::String, "z.string()")]
#[test_case(Base::Number, "z.number()")]
#[test_case(Base::Boolean, "z.boolean()")]
#[test_case(Base::Null, "z.null()")]
#[test_case(Base::Unknown, "z.unknown()")]
fn TypeScriptPrinter___primitive_base___prints_builder_call(base: Base, expected: &str) {
    let printer = TypeScriptPrinter::new();

    assert_eq!(printer.expression(&Expr::call(base)), expected);
}

#[test]
fn TypeScriptPrinter___identifier___prints_verbatim() {
    let printer = TypeScriptPrinter::new();

    let text = printer.expression(&Expr::Identifier("z.string().refine(isSlug)".into()));

    assert_eq!(text, "z.string().refine(isSlug)");
}

#[test]
fn TypeScriptPrinter___modifier_chain___prints_in_order() {
    let printer = TypeScriptPrinter::new();
    let expr = string_call(vec![
        Modifier::bare("email"),
        Modifier::literal("min", Literal::Number(2.into())),
        Modifier::bare("nullish"),
    ]);

    assert_eq!(printer.expression(&expr), "z.string().email().min(2).nullish()");
}

#[test]
fn TypeScriptPrinter___enum___quotes_and_escapes_values() {
    let printer = TypeScriptPrinter::new();
    let expr = Expr::call(Base::Enum(vec!["dog".into(), "say \"hi\"".into()]));

    assert_eq!(printer.expression(&expr), r#"z.enum(["dog", "say \"hi\""])"#);
}

#[test]
fn TypeScriptPrinter___union___prints_branch_list() {
    let printer = TypeScriptPrinter::new();
    let expr = Expr::call(Base::Union(vec![
        Expr::call(Base::String),
        Expr::Identifier("schemaPet".into()),
    ]));

    assert_eq!(printer.expression(&expr), "z.union([z.string(), schemaPet])");
}

#[test]
fn TypeScriptPrinter___array___wraps_item() {
    let printer = TypeScriptPrinter::new();
    let expr = Expr::call(Base::Array(Box::new(Expr::call(Base::Number))));

    assert_eq!(printer.expression(&expr), "z.array(z.number())");
}

#[test]
fn TypeScriptPrinter___named_base___chains_onto_identifier() {
    let printer = TypeScriptPrinter::new();
    let expr = Expr::Call(Call {
        base: Base::Named("schemaPet".into()),
        modifiers: vec![Modifier::bare("optional")],
    });

    assert_eq!(printer.expression(&expr), "schemaPet.optional()");
}

#[test]
fn TypeScriptPrinter___empty_object___prints_braces() {
    let printer = TypeScriptPrinter::new();

    assert_eq!(
        printer.expression(&Expr::call(Base::Object(vec![]))),
        "z.object({})"
    );
}

#[test]
fn TypeScriptPrinter___object___indents_members_without_trailing_comma() {
    let printer = TypeScriptPrinter::new();
    let expr = Expr::call(Base::Object(vec![
        property("id", Expr::call(Base::Number)),
        property("name", Expr::call(Base::String)),
    ]));

    assert_eq!(
        printer.expression(&expr),
        "z.object({\n    id: z.number(),\n    name: z.string()\n})"
    );
}

#[test]
fn TypeScriptPrinter___nested_object___indents_each_level() {
    let printer = TypeScriptPrinter::new();
    let inner = Expr::call(Base::Object(vec![property("city", Expr::call(Base::String))]));
    let expr = Expr::call(Base::Object(vec![property("address", inner)]));

    assert_eq!(
        printer.expression(&expr),
        "z.object({\n    address: z.object({\n        city: z.string()\n    })\n})"
    );
}

#[test_case("x-rate-limit", r#""x-rate-limit""# ; "dashes")]
#[test_case("2fa", r#""2fa""# ; "leading digit")]
#[test_case("$meta", "$meta" ; "dollar")]
#[test_case("_id", "_id" ; "underscore")]
fn TypeScriptPrinter___property_key___quoted_only_when_needed(name: &str, key: &str) {
    let printer = TypeScriptPrinter::new();
    let expr = Expr::call(Base::Object(vec![property(name, Expr::call(Base::String))]));

    let text = printer.expression(&expr);

    assert!(text.contains(&format!("    {key}: z.string()")), "{text}");
}

#[test]
fn TypeScriptPrinter___member_comment___precedes_member_on_one_line() {
    let printer = TypeScriptPrinter::new();
    let mut member = property("name", Expr::call(Base::String));
    member.comment = Some("User\nname".into());
    let expr = Expr::call(Base::Object(vec![member]));

    assert_eq!(
        printer.expression(&expr),
        "z.object({\n    // Username\n    name: z.string()\n})"
    );
}

#[test]
fn TypeScriptPrinter___literals___print_as_source() {
    let printer = TypeScriptPrinter::new();
    let default = Literal::from_json(&json!([null, true, -1.5, "a\"b"]));
    let expr = string_call(vec![Modifier::literal("default", default)]);

    assert_eq!(
        printer.expression(&expr),
        r#"z.string().default([null, true, -1.5, "a\"b"])"#
    );
}

#[test]
fn TypeScriptPrinter___object_literal___prints_multiline() {
    let printer = TypeScriptPrinter::new();
    let default = Literal::from_json(&json!({ "page": 1, "sort-by": "name" }));
    let expr = Expr::call(Base::Object(vec![property(
        "query",
        string_call(vec![Modifier::literal("default", default)]),
    )]));

    assert_eq!(
        printer.expression(&expr),
        "z.object({\n    query: z.string().default({\n        page: 1,\n        \"sort-by\": \"name\"\n    })\n})"
    );
}

#[test]
fn TypeScriptPrinter___empty_object_literal___prints_braces() {
    let printer = TypeScriptPrinter::new();
    let expr = string_call(vec![Modifier::literal("default", Literal::Object(vec![]))]);

    assert_eq!(printer.expression(&expr), "z.string().default({})");
}

#[test]
fn TypeScriptPrinter___merge_argument___prints_expression() {
    let printer = TypeScriptPrinter::new();
    let expr = Expr::Call(Call {
        base: Base::Object(vec![]),
        modifiers: vec![Modifier::expr("merge", Expr::Identifier("schemaBase".into()))],
    });

    assert_eq!(printer.expression(&expr), "z.object({}).merge(schemaBase)");
}

// statement tests

#[test]
fn TypeScriptPrinter___statement___exports_const() {
    let printer = TypeScriptPrinter::new();
    let statement = Statement::new("schemaName", Expr::call(Base::String));

    assert_eq!(
        printer.statement(&statement),
        "export const schemaName = z.string();"
    );
}

#[test]
fn TypeScriptPrinter___statement_with_section___prints_banner_then_comment() {
    let printer = TypeScriptPrinter::new();
    let mut statement = Statement::new("schemaPet", Expr::call(Base::String))
        .with_comment(Some("A pet".into()));
    statement.section = Some(Section::Components);

    assert_eq!(
        printer.statement(&statement),
        "/* COMPONENTS */\n// A pet\nexport const schemaPet = z.string();"
    );
}

#[test]
fn TypeScriptPrinter___without_banners___omits_section_marker() {
    let printer = TypeScriptPrinter::without_banners();
    let mut statement = Statement::new("queryX", Expr::call(Base::String));
    statement.section = Some(Section::Queries);

    assert_eq!(printer.statement(&statement), "export const queryX = z.string();");
}

#[test_case("a\nb" ; "line feed")]
#[test_case("a\r\nb" ; "carriage return")]
#[test_case("a\u{2028}b" ; "line separator")]
#[test_case("a\u{2029}b" ; "paragraph separator")]
fn single_line_comment___line_terminator___is_removed(text: &str) {
    assert_eq!(single_line_comment(text), "// ab");
}

#[test]
fn TypeScriptPrinter___comment_with_line_separator___keeps_text_inside_comment() {
    let printer = TypeScriptPrinter::new();
    let statement = Statement::new("schemaX", Expr::call(Base::String))
        .with_comment(Some("x\u{2028}export const y = 1;".into()));

    assert_eq!(
        printer.statement(&statement),
        "// xexport const y = 1;\nexport const schemaX = z.string();"
    );
}

#[test]
fn multi_line_comment___escapes_terminator() {
    assert_eq!(multi_line_comment("a */ b"), "/* a *\\/ b */");
}

// Render tests

#[test]
fn Render___no_statements___prints_only_import() {
    let printer = TypeScriptPrinter::new();

    assert_eq!(printer.render(&[]), "import { z } from \"zod\";\n");
}

#[test]
fn Render___statements___are_separated_by_blank_line() {
    let printer = TypeScriptPrinter::without_banners();
    let statements = vec![
        Statement::new("schemaA", Expr::call(Base::String)),
        Statement::new("schemaB", Expr::call(Base::Number)),
    ];

    assert_eq!(
        printer.render(&statements),
        "import { z } from \"zod\";\n\nexport const schemaA = z.string();\n\nexport const schemaB = z.number();\n"
    );
}

#[test]
fn Render___file_extension___is_ts() {
    assert_eq!(TypeScriptPrinter::new().file_extension(), "ts");
}
