//! TypeScript printer for zod modules
//!
//! Output layout:
//!
//! ```text
//! import { z } from "zod";
//!
//! /* COMPONENTS */
//! // A pet
//! export const schemaPet = z.object({
//!     id: z.number().int(),
//!     "x-tag": z.string().nullish()
//! });
//! ```

use crate::Render;
use serde_json::Value;
use zodgen_core::naming::is_bare_property_name;
use zodgen_core::{Arg, Base, Call, Expr, Literal, Modifier, Property, Statement};

/// First line of every generated module
pub const IMPORT_HEADER: &str = r#"import { z } from "zod";"#;

/// Namespace object the builder calls hang off
const NAMESPACE: &str = "z";

/// Spaces per nesting level of object literals
const INDENT: usize = 4;

/// Prints statements as an ES module exporting one zod schema per statement
#[derive(Debug, Clone)]
pub struct TypeScriptPrinter {
    /// Whether section banners are printed
    banners: bool,
}

impl Default for TypeScriptPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeScriptPrinter {
    /// Create a printer with 4-space indentation and section banners
    pub fn new() -> Self {
        Self { banners: true }
    }

    /// Create a printer that omits section banners
    pub fn without_banners() -> Self {
        Self { banners: false }
    }

    /// Print a single statement, including its banner and comment
    pub fn statement(&self, statement: &Statement) -> String {
        let mut out = String::new();

        if self.banners {
            if let Some(section) = statement.section {
                out.push_str(&multi_line_comment(section.title()));
                out.push('\n');
            }
        }

        if let Some(comment) = &statement.comment {
            out.push_str(&single_line_comment(comment));
            out.push('\n');
        }

        out.push_str("export const ");
        out.push_str(&statement.identifier);
        out.push_str(" = ");
        out.push_str(&self.expression(&statement.expression));
        out.push(';');
        out
    }

    /// Print an expression at the top nesting level
    pub fn expression(&self, expr: &Expr) -> String {
        let mut out = String::new();
        self.write_expr(&mut out, expr, 0);
        out
    }

    fn write_expr(&self, out: &mut String, expr: &Expr, depth: usize) {
        match expr {
            Expr::Identifier(name) => out.push_str(name),
            Expr::Call(call) => self.write_call(out, call, depth),
        }
    }

    fn write_call(&self, out: &mut String, call: &Call, depth: usize) {
        self.write_base(out, &call.base, depth);
        for modifier in &call.modifiers {
            self.write_modifier(out, modifier, depth);
        }
    }

    fn write_base(&self, out: &mut String, base: &Base, depth: usize) {
        if let Base::Named(name) = base {
            out.push_str(name);
            return;
        }

        out.push_str(NAMESPACE);
        out.push('.');
        out.push_str(base.name());
        out.push('(');
        match base {
            Base::Enum(values) => {
                let quoted: Vec<String> = values.iter().map(|v| string_literal(v)).collect();
                out.push('[');
                out.push_str(&quoted.join(", "));
                out.push(']');
            }
            Base::Array(item) => self.write_expr(out, item, depth),
            Base::Object(properties) => self.write_object(out, properties, depth),
            Base::Union(branches) => {
                out.push('[');
                for (index, branch) in branches.iter().enumerate() {
                    if index > 0 {
                        out.push_str(", ");
                    }
                    self.write_expr(out, branch, depth);
                }
                out.push(']');
            }
            Base::String | Base::Number | Base::Boolean | Base::Null | Base::Unknown => {}
            Base::Named(_) => {}
        }
        out.push(')');
    }

    fn write_modifier(&self, out: &mut String, modifier: &Modifier, depth: usize) {
        out.push('.');
        out.push_str(modifier.name);
        out.push('(');
        for (index, arg) in modifier.args.iter().enumerate() {
            if index > 0 {
                out.push_str(", ");
            }
            match arg {
                Arg::Literal(literal) => self.write_literal(out, literal, depth),
                Arg::Expr(expr) => self.write_expr(out, expr, depth),
            }
        }
        out.push(')');
    }

    fn write_object(&self, out: &mut String, properties: &[Property], depth: usize) {
        if properties.is_empty() {
            out.push_str("{}");
            return;
        }

        let inner = self.padding(depth + 1);
        out.push_str("{\n");
        for (index, property) in properties.iter().enumerate() {
            if index > 0 {
                out.push_str(",\n");
            }
            if let Some(comment) = &property.comment {
                out.push_str(&inner);
                out.push_str(&single_line_comment(comment));
                out.push('\n');
            }
            out.push_str(&inner);
            out.push_str(&property_key(&property.name));
            out.push_str(": ");
            self.write_expr(out, &property.value, depth + 1);
        }
        out.push('\n');
        out.push_str(&self.padding(depth));
        out.push('}');
    }

    fn write_literal(&self, out: &mut String, literal: &Literal, depth: usize) {
        match literal {
            Literal::Null => out.push_str("null"),
            Literal::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Literal::Number(n) => out.push_str(&n.to_string()),
            Literal::String(s) => out.push_str(&string_literal(s)),
            Literal::Array(items) => {
                out.push('[');
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        out.push_str(", ");
                    }
                    self.write_literal(out, item, depth);
                }
                out.push(']');
            }
            Literal::Object(entries) if entries.is_empty() => out.push_str("{}"),
            Literal::Object(entries) => {
                let inner = self.padding(depth + 1);
                out.push_str("{\n");
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        out.push_str(",\n");
                    }
                    out.push_str(&inner);
                    out.push_str(&property_key(key));
                    out.push_str(": ");
                    self.write_literal(out, value, depth + 1);
                }
                out.push('\n');
                out.push_str(&self.padding(depth));
                out.push('}');
            }
        }
    }

    fn padding(&self, depth: usize) -> String {
        " ".repeat(INDENT * depth)
    }
}

impl Render for TypeScriptPrinter {
    fn render(&self, statements: &[Statement]) -> String {
        let mut out = String::from(IMPORT_HEADER);
        for statement in statements {
            out.push_str("\n\n");
            out.push_str(&self.statement(statement));
        }
        out.push('\n');
        out
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }
}

/// Double-quoted, escaped string literal
fn string_literal(text: &str) -> String {
    Value::String(text.to_string()).to_string()
}

/// Object key, quoted unless it is a bare identifier
fn property_key(name: &str) -> String {
    if is_bare_property_name(name) {
        name.to_string()
    } else {
        string_literal(name)
    }
}

/// `// text` with every JavaScript line terminator removed
fn single_line_comment(text: &str) -> String {
    let flat: String = text
        .chars()
        .filter(|c| !matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}'))
        .collect();
    format!("// {flat}")
}

/// `/* text */` with nested terminators escaped
fn multi_line_comment(text: &str) -> String {
    format!("/* {} */", text.replace("*/", "*\\/"))
}

#[cfg(test)]
#[path = "typescript/typescript_tests.rs"]
mod typescript_tests;
