//! Java type references.

use std::fmt;

use crate::errors::GeneratorError;

/// Primitive type keywords accepted by [`TypeName::parse`].
///
/// `void` is absent: a declared variable always has a value type.
const PRIMITIVES: [&str; 8] = [
    "boolean", "byte", "char", "short", "int", "long", "float", "double",
];

/// Reserved words and literals that can never be used as identifiers.
const RESERVED: [&str; 54] = [
    "_", "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
    "const", "continue", "default", "do", "double", "else", "enum", "extends", "false", "final",
    "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
    "interface", "long", "native", "new", "null", "package", "private", "protected", "public",
    "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this", "throw",
    "throws", "transient", "true", "try", "void", "volatile", "while",
];

/// A fully-qualified reference to a (possibly nested) Java class.
///
/// ## Examples
///
/// ```
/// use registrar_gen::java::ClassName;
///
/// let name = ClassName::parse("com.example.Outer$Inner").unwrap();
/// assert_eq!(name.package(), "com.example");
/// assert_eq!(name.simple_name(), "Inner");
/// assert_eq!(name.nested_path(), "Outer.Inner");
/// assert_eq!(name.canonical(), "com.example.Outer.Inner");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassName {
    package: String,
    names: Vec<String>,
}

impl ClassName {
    /// Parses a binary or canonical class name.
    ///
    /// The package ends before the first segment that starts with an
    /// uppercase letter. If no segment does, the last segment is taken as the
    /// class name. Nested classes may be separated by `$` or `.`.
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::InvalidClassName` for empty names, empty
    /// segments, or segments that are not Java identifiers.
    pub fn parse(name: &str) -> Result<Self, GeneratorError> {
        let invalid = |reason: &str| GeneratorError::InvalidClassName {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(invalid("class name is empty"));
        }

        let segments: Vec<&str> = trimmed.split('.').collect();
        for segment in &segments {
            if segment.is_empty() {
                return Err(invalid("empty segment"));
            }
        }

        let first_type = segments
            .iter()
            .position(|s| s.chars().next().is_some_and(char::is_uppercase))
            .unwrap_or(segments.len() - 1);

        let package = segments[..first_type].join(".");
        let mut names = Vec::new();
        for segment in &segments[first_type..] {
            for part in segment.split('$') {
                if !is_identifier(part) {
                    return Err(invalid(&format!("'{}' is not a Java identifier", part)));
                }
                names.push(part.to_string());
            }
        }
        for part in &segments[..first_type] {
            if !is_identifier(part) {
                return Err(invalid(&format!("'{}' is not a valid package segment", part)));
            }
        }

        Ok(Self { package, names })
    }

    /// Creates a top-level class reference without validation.
    pub(crate) fn top(package: &str, simple_name: &str) -> Self {
        Self {
            package: package.to_string(),
            names: vec![simple_name.to_string()],
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// Innermost class name.
    pub fn simple_name(&self) -> &str {
        self.names.last().map(String::as_str).unwrap_or_default()
    }

    /// The outermost enclosing class (the one an import statement names).
    pub fn top_level(&self) -> ClassName {
        Self {
            package: self.package.clone(),
            names: self.names.iter().take(1).cloned().collect(),
        }
    }

    /// `Outer.Inner`, i.e. the name as written after an import of `Outer`.
    pub fn nested_path(&self) -> String {
        self.names.join(".")
    }

    /// `com.example.Outer.Inner`
    pub fn canonical(&self) -> String {
        if self.package.is_empty() {
            self.nested_path()
        } else {
            format!("{}.{}", self.package, self.nested_path())
        }
    }

    /// Types in `java.lang` are visible without an import.
    pub fn is_java_lang(&self) -> bool {
        self.package == "java.lang"
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

/// A Java type that may appear in a declaration: a primitive or a class.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeName {
    Primitive(String),
    Class(ClassName),
}

impl TypeName {
    /// Parses a primitive keyword or a class name.
    pub fn parse(name: &str) -> Result<Self, GeneratorError> {
        let trimmed = name.trim();
        if PRIMITIVES.contains(&trimmed) {
            Ok(TypeName::Primitive(trimmed.to_string()))
        } else {
            ClassName::parse(trimmed).map(TypeName::Class)
        }
    }
}

/// Returns `true` when `s` can name a Java field, method, class or package segment.
///
/// ```
/// use registrar_gen::java::is_identifier;
///
/// assert!(is_identifier("getConfig"));
/// assert!(!is_identifier("create(); x"));
/// assert!(!is_identifier("class"));
/// assert!(!is_identifier(""));
/// ```
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$') && !RESERVED.contains(&s)
}

/// Checks a field or method name that is spliced into generated code.
///
/// ## Errors
///
/// Returns `GeneratorError::InvalidIdentifier` naming `role` when `name` is
/// not a Java identifier.
pub fn check_member_name(name: &str, role: &str) -> Result<(), GeneratorError> {
    if is_identifier(name) {
        Ok(())
    } else {
        Err(GeneratorError::InvalidIdentifier {
            name: name.to_string(),
            role: role.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_top_level_class() {
        let name = ClassName::parse("com.example.core.CoreModule").unwrap();
        assert_eq!(name.package(), "com.example.core");
        assert_eq!(name.simple_name(), "CoreModule");
        assert_eq!(name.top_level(), name);
    }

    #[test]
    fn parses_dotted_nested_class() {
        let name = ClassName::parse("com.example.Outer.Inner").unwrap();
        assert_eq!(name.package(), "com.example");
        assert_eq!(name.nested_path(), "Outer.Inner");
        assert_eq!(name.top_level().canonical(), "com.example.Outer");
    }

    #[test]
    fn dollar_and_dot_nesting_are_equivalent() {
        assert_eq!(
            ClassName::parse("a.b.Outer$Inner").unwrap(),
            ClassName::parse("a.b.Outer.Inner").unwrap()
        );
    }

    #[test]
    fn lowercase_class_falls_back_to_last_segment() {
        let name = ClassName::parse("com.example.widget").unwrap();
        assert_eq!(name.package(), "com.example");
        assert_eq!(name.simple_name(), "widget");
    }

    #[test]
    fn default_package_class() {
        let name = ClassName::parse("Widget").unwrap();
        assert_eq!(name.package(), "");
        assert_eq!(name.canonical(), "Widget");
    }

    #[test]
    fn rejects_malformed_names() {
        for bad in ["", "  ", "com..Foo", "com.example.", "com.example.1Foo", "a.Foo$", "a.Foo<T>"] {
            assert!(
                matches!(ClassName::parse(bad), Err(GeneratorError::InvalidClassName { .. })),
                "expected '{}' to be rejected",
                bad
            );
        }
    }

    #[test]
    fn type_name_recognizes_primitives() {
        assert_eq!(
            TypeName::parse("int").unwrap(),
            TypeName::Primitive("int".to_string())
        );
        assert!(matches!(
            TypeName::parse("java.lang.Integer").unwrap(),
            TypeName::Class(_)
        ));
    }

    #[test]
    fn void_is_not_a_value_type() {
        assert!(matches!(
            TypeName::parse("void"),
            Err(GeneratorError::InvalidClassName { .. })
        ));
    }

    #[test]
    fn keywords_are_not_identifiers() {
        for keyword in ["class", "new", "null", "true", "_"] {
            assert!(!is_identifier(keyword), "{} accepted", keyword);
        }
        assert!(is_identifier("classes"));
        assert!(is_identifier("$value"));
        assert!(ClassName::parse("com.new.Widget").is_err());
    }

    #[test]
    fn member_name_check_reports_role() {
        assert!(check_member_name("create", "factory method").is_ok());

        let err = check_member_name("create(); System.exit(0", "factory method").unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidIdentifier { .. }));
        assert!(err.to_string().contains("factory method"));
    }
}
