//! Composable pieces of Java source.
//!
//! A [`Fragment`] is a flat list of text, type references and layout
//! instructions. Emitters build fragments and return them; callers splice
//! them together with [`Fragment::append`]. Nothing is rendered until the
//! enclosing [`JavaFile`](super::JavaFile) knows its imports, so type
//! references stay symbolic until then.

use std::fmt;
use std::fmt::Write as _;

use super::class_name::{ClassName, TypeName};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    Text(String),
    Type(ClassName),
    Newline,
    Indent,
    Unindent,
}

/// A piece of Java source code.
///
/// ## Examples
///
/// ```
/// use registrar_gen::java::{ClassName, Fragment};
///
/// let list = ClassName::parse("java.util.List").unwrap();
/// let code = Fragment::new()
///     .ty(&list)
///     .text(" names = ")
///     .literal("a \"quoted\" name")
///     .text(";")
///     .newline();
///
/// assert_eq!(code.to_string(), "List names = \"a \\\"quoted\\\" name\";\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    parts: Vec<Part>,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends raw text. Embedded newlines become line breaks.
    pub fn text(mut self, text: impl AsRef<str>) -> Self {
        for (i, line) in text.as_ref().split('\n').enumerate() {
            if i > 0 {
                self.parts.push(Part::Newline);
            }
            if !line.is_empty() {
                self.parts.push(Part::Text(line.to_string()));
            }
        }
        self
    }

    /// Appends a class reference, rendered as a simple name when imported.
    pub fn ty(mut self, class: &ClassName) -> Self {
        self.parts.push(Part::Type(class.clone()));
        self
    }

    /// Appends a primitive keyword or class reference.
    pub fn type_name(self, name: &TypeName) -> Self {
        match name {
            TypeName::Primitive(keyword) => self.text(keyword),
            TypeName::Class(class) => self.ty(class),
        }
    }

    /// Appends `<Class>.class`.
    pub fn class_literal(self, class: &ClassName) -> Self {
        self.ty(class).text(".class")
    }

    /// Appends a double-quoted Java string literal.
    pub fn literal(self, value: &str) -> Self {
        self.text(java_string_literal(value))
    }

    pub fn newline(mut self) -> Self {
        self.parts.push(Part::Newline);
        self
    }

    /// Increases the indentation of subsequent lines by one level.
    pub fn indent(mut self) -> Self {
        self.parts.push(Part::Indent);
        self
    }

    pub fn unindent(mut self) -> Self {
        self.parts.push(Part::Unindent);
        self
    }

    pub fn append(mut self, other: Fragment) -> Self {
        self.parts.extend(other.parts);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Renders `items` as a call argument list, one argument per line at
    /// continuation indent (two levels). Empty input renders nothing, so
    /// `text("f(").append(args(..)).text(")")` yields `f()`.
    pub fn args(items: impl IntoIterator<Item = Fragment>) -> Self {
        let mut out = Fragment::new();
        for (i, item) in items.into_iter().enumerate() {
            if i == 0 {
                out = out.indent().indent();
            } else {
                out = out.text(",");
            }
            out = out.newline().append(item);
        }
        if !out.is_empty() {
            out = out.unindent().unindent();
        }
        out
    }

    /// Joins `items` on one line with `separator`.
    pub fn join(items: impl IntoIterator<Item = Fragment>, separator: &str) -> Self {
        let mut out = Fragment::new();
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                out = out.text(separator);
            }
            out = out.append(item);
        }
        out
    }

    /// Joins `blocks` with an empty line between consecutive non-empty blocks.
    pub fn join_blocks(blocks: impl IntoIterator<Item = Fragment>) -> Self {
        let mut out = Fragment::new();
        for block in blocks.into_iter().filter(|b| !b.is_empty()) {
            if !out.is_empty() {
                out = out.newline();
            }
            out = out.append(block);
        }
        out
    }

    /// Every class referenced by this fragment, in order of appearance.
    pub fn types(&self) -> impl Iterator<Item = &ClassName> {
        self.parts.iter().filter_map(|part| match part {
            Part::Type(class) => Some(class),
            _ => None,
        })
    }

    /// Renders the fragment, resolving each class reference with `resolve`.
    ///
    /// Indentation is written lazily at the first text of a line, so empty
    /// lines never carry trailing whitespace.
    pub fn render<F>(&self, indent_unit: &str, mut resolve: F) -> String
    where
        F: FnMut(&ClassName) -> String,
    {
        let mut out = String::new();
        let mut level = 0usize;
        let mut line_start = true;

        for part in &self.parts {
            let text = match part {
                Part::Text(text) => text.clone(),
                Part::Type(class) => resolve(class),
                Part::Newline => {
                    out.push('\n');
                    line_start = true;
                    continue;
                }
                Part::Indent => {
                    level += 1;
                    continue;
                }
                Part::Unindent => {
                    level = level.saturating_sub(1);
                    continue;
                }
            };
            if line_start {
                for _ in 0..level {
                    out.push_str(indent_unit);
                }
                line_start = false;
            }
            out.push_str(&text);
        }

        out
    }
}

/// Renders with nested simple names and four-space indentation.
impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render("    ", ClassName::nested_path))
    }
}

/// Quotes and escapes `value` as a Java string literal.
pub fn java_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(name: &str) -> ClassName {
        ClassName::parse(name).unwrap()
    }

    #[test]
    fn literal_escapes_quotes_backslashes_and_controls() {
        assert_eq!(java_string_literal("plain"), "\"plain\"");
        assert_eq!(java_string_literal("a\"b"), "\"a\\\"b\"");
        assert_eq!(java_string_literal("c:\\dir"), "\"c:\\\\dir\"");
        assert_eq!(java_string_literal("line\nnext\t!"), "\"line\\nnext\\t!\"");
        assert_eq!(java_string_literal("\u{1}"), "\"\\u0001\"");
    }

    #[test]
    fn args_renders_one_argument_per_line() {
        let code = Fragment::new()
            .text("call(")
            .append(Fragment::args([
                Fragment::new().literal("a"),
                Fragment::new().literal("b"),
            ]))
            .text(");");

        assert_eq!(code.to_string(), "call(\n        \"a\",\n        \"b\");");
    }

    #[test]
    fn args_of_nothing_renders_nothing() {
        let code = Fragment::new()
            .text("call(")
            .append(Fragment::args(Vec::new()))
            .text(")");
        assert_eq!(code.to_string(), "call()");
    }

    #[test]
    fn nested_args_accumulate_continuation_indent() {
        let inner = Fragment::new()
            .text("inner(")
            .append(Fragment::args([Fragment::new().text("x")]))
            .text(")");
        let code = Fragment::new()
            .text("outer(")
            .append(Fragment::args([inner]))
            .text(")");

        assert_eq!(code.to_string(), "outer(\n        inner(\n                x))");
    }

    #[test]
    fn blank_lines_have_no_trailing_whitespace() {
        let code = Fragment::new()
            .indent()
            .text("a;")
            .newline()
            .newline()
            .text("b;")
            .unindent();
        assert_eq!(code.to_string(), "    a;\n\n    b;");
    }

    #[test]
    fn join_blocks_skips_empty_blocks() {
        let code = Fragment::join_blocks([
            Fragment::new().text("a;").newline(),
            Fragment::new(),
            Fragment::new().text("b;").newline(),
        ]);
        assert_eq!(code.to_string(), "a;\n\nb;\n");
    }

    #[test]
    fn types_are_reported_in_order() {
        let code = Fragment::new()
            .ty(&class("a.First"))
            .text(" ")
            .class_literal(&class("b.Second"));
        let names: Vec<String> = code.types().map(ClassName::canonical).collect();
        assert_eq!(names, vec!["a.First", "b.Second"]);
    }

    #[test]
    fn render_uses_resolver_for_types() {
        let code = Fragment::new().class_literal(&class("com.example.Outer$Inner"));
        assert_eq!(
            code.render("  ", ClassName::canonical),
            "com.example.Outer.Inner.class"
        );
        assert_eq!(code.to_string(), "Outer.Inner.class");
    }
}
