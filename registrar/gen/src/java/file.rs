//! Compilation unit assembly: package clause, imports and body.

use std::collections::{BTreeMap, BTreeSet};

use super::class_name::ClassName;
use super::fragment::Fragment;

/// Decides, for every class referenced in a file, whether it is written by
/// simple name (with or without an import) or fully qualified.
///
/// The first class to claim a simple name wins it. Classes in `java.lang`
/// and in the file's own package claim a name without an import. The file's
/// own type claims its simple name before anything else.
#[derive(Debug, Clone)]
pub struct ImportTable {
    claimed: BTreeMap<String, ClassName>,
    imports: BTreeSet<String>,
}

impl ImportTable {
    pub fn build<'a>(
        package: &str,
        own_simple_name: &str,
        types: impl IntoIterator<Item = &'a ClassName>,
    ) -> Self {
        let mut claimed = BTreeMap::new();
        let mut imports = BTreeSet::new();
        claimed.insert(
            own_simple_name.to_string(),
            ClassName::top(package, own_simple_name),
        );

        for class in types {
            let top = class.top_level();
            let simple = top.simple_name().to_string();
            if claimed.contains_key(&simple) {
                continue;
            }
            if !top.is_java_lang() && !top.package().is_empty() && top.package() != package {
                imports.insert(top.canonical());
            }
            claimed.insert(simple, top);
        }

        Self { claimed, imports }
    }

    /// How `class` is spelled in this file.
    pub fn name_of(&self, class: &ClassName) -> String {
        let top = class.top_level();
        match self.claimed.get(top.simple_name()) {
            Some(owner) if *owner == top => class.nested_path(),
            _ => class.canonical(),
        }
    }

    /// Import statements' targets, sorted.
    pub fn imports(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().map(String::as_str)
    }
}

/// A single `.java` compilation unit.
///
/// ## Examples
///
/// ```
/// use registrar_gen::java::{ClassName, Fragment, JavaFile};
///
/// let list = ClassName::parse("java.util.List").unwrap();
/// let body = Fragment::new()
///     .text("class Names {")
///     .newline()
///     .indent()
///     .ty(&list)
///     .text(" names;")
///     .newline()
///     .unindent()
///     .text("}")
///     .newline();
///
/// let file = JavaFile::new("com.example", "Names", body);
/// assert_eq!(
///     file.render("    "),
///     "package com.example;\n\nimport java.util.List;\n\nclass Names {\n    List names;\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct JavaFile {
    package: String,
    type_name: String,
    body: Fragment,
}

impl JavaFile {
    pub fn new(package: impl Into<String>, type_name: impl Into<String>, body: Fragment) -> Self {
        Self {
            package: package.into(),
            type_name: type_name.into(),
            body,
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Renders the complete source file.
    pub fn render(&self, indent_unit: &str) -> String {
        let table = ImportTable::build(&self.package, &self.type_name, self.body.types());

        let mut out = String::new();
        if !self.package.is_empty() {
            out.push_str(&format!("package {};\n\n", self.package));
        }

        let mut has_imports = false;
        for import in table.imports() {
            out.push_str(&format!("import {};\n", import));
            has_imports = true;
        }
        if has_imports {
            out.push('\n');
        }

        out.push_str(&self.body.render(indent_unit, |class| table.name_of(class)));
        if !out.ends_with('\n') {
            out.push('\n');
        }
        out
    }
}
