//! Type expressions as they appear in a catalog.
//!
//! Grammar: `('*' | '[]')* (<package-path> '.')? <Ident>`.
//!
//! A type name never contains `.`, so the package path is everything before
//! the last `.`. That keeps versioned paths such as
//! `google.golang.org/api/compute/v0.alpha.Address` unambiguous. An expression
//! without a `.` names a built-in type (`string`, `error`, `int64`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::conventions::STRING_TYPE;
use crate::core::{Error, Result};

/// Coarse classification of a type, enough for the signature checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Pointer,
    Slice,
    /// The built-in `string` type.
    String,
    /// Any other named type, built-in or declared.
    Named,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeRef {
    Pointer(Box<TypeRef>),
    Slice(Box<TypeRef>),
    Named { package: String, name: String },
}

impl TypeRef {
    pub fn named(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Named {
            package: package.into(),
            name: name.into(),
        }
    }

    pub fn builtin(name: impl Into<String>) -> Self {
        Self::named("", name)
    }

    pub fn pointer_to(elem: TypeRef) -> Self {
        Self::Pointer(Box::new(elem))
    }

    pub fn slice_of(elem: TypeRef) -> Self {
        Self::Slice(Box::new(elem))
    }

    pub fn parse(expr: &str) -> Result<Self> {
        parse_expr(expr, expr.trim())
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Pointer(_) => TypeKind::Pointer,
            Self::Slice(_) => TypeKind::Slice,
            Self::Named { package, name } if package.is_empty() && name == STRING_TYPE => {
                TypeKind::String
            }
            Self::Named { .. } => TypeKind::Named,
        }
    }

    /// Element type one level down, for pointers and slices.
    pub fn elem(&self) -> Option<&TypeRef> {
        match self {
            Self::Pointer(elem) | Self::Slice(elem) => Some(elem),
            Self::Named { .. } => None,
        }
    }

    /// Bare type name. Pointers and slices are unnamed.
    pub fn name(&self) -> &str {
        match self {
            Self::Named { name, .. } => name,
            _ => "",
        }
    }

    /// Package path of a named type. Empty for built-ins, pointers and slices.
    pub fn package(&self) -> &str {
        match self {
            Self::Named { package, .. } => package,
            _ => "",
        }
    }

    /// The named type reached by stripping every pointer level.
    pub fn deref_all(&self) -> &TypeRef {
        let mut current = self;
        while let Self::Pointer(elem) = current {
            current = elem;
        }
        current
    }
}

fn parse_expr(full: &str, s: &str) -> Result<TypeRef> {
    if let Some(rest) = s.strip_prefix('*') {
        return Ok(TypeRef::pointer_to(parse_expr(full, rest)?));
    }
    if let Some(rest) = s.strip_prefix("[]") {
        return Ok(TypeRef::slice_of(parse_expr(full, rest)?));
    }
    if s.is_empty() {
        return Err(Error::invalid_type_expr(full, "missing type name"));
    }

    let (package, name) = match s.rfind('.') {
        Some(dot) => (&s[..dot], &s[dot + 1..]),
        None => ("", s),
    };
    if !is_identifier(name) {
        return Err(Error::invalid_type_expr(
            full,
            format!("{name:?} is not a valid type name"),
        ));
    }
    if s.contains('.') && !is_package_path(package) {
        return Err(Error::invalid_type_expr(
            full,
            format!("{package:?} is not a valid package path"),
        ));
    }
    Ok(TypeRef::named(package, name))
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

fn is_package_path(s: &str) -> bool {
    !s.is_empty()
        && !s.starts_with('/')
        && !s.ends_with('/')
        && s
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '.' | '/' | '-' | '_' | '~'))
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pointer(elem) => write!(f, "*{elem}"),
            Self::Slice(elem) => write!(f, "[]{elem}"),
            Self::Named { package, name } if package.is_empty() => f.write_str(name),
            Self::Named { package, name } => write!(f, "{package}.{name}"),
        }
    }
}

impl FromStr for TypeRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TypeRef {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<TypeRef> for String {
    fn from(value: TypeRef) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_builtin() {
        let ty = TypeRef::parse("string").unwrap();
        assert_eq!(ty, TypeRef::builtin("string"));
        assert_eq!(ty.kind(), TypeKind::String);
        assert_eq!(ty.package(), "");
    }

    #[test]
    fn test_parse_versioned_package_splits_on_last_dot() {
        let ty = TypeRef::parse("*google.golang.org/api/compute/v0.alpha.Address").unwrap();
        assert_eq!(ty.kind(), TypeKind::Pointer);
        let elem = ty.elem().unwrap();
        assert_eq!(elem.package(), "google.golang.org/api/compute/v0.alpha");
        assert_eq!(elem.name(), "Address");
    }

    #[test]
    fn test_parse_slice_of_pointers() {
        let ty = TypeRef::parse("[]*google.golang.org/api/compute/v1.Rule").unwrap();
        assert_eq!(ty.kind(), TypeKind::Slice);
        assert_eq!(ty.elem().unwrap().kind(), TypeKind::Pointer);
        assert_eq!(ty.name(), "");
    }

    #[test]
    fn test_named_string_in_package_is_not_builtin_string() {
        let ty = TypeRef::parse("example.com/pkg.string").unwrap();
        assert_eq!(ty.kind(), TypeKind::Named);
    }

    #[test]
    fn test_parse_rejects_malformed_expressions() {
        for expr in ["", "*", "[]", "example.com/pkg.", ".Rule", "a b", "*9Rule", "/x.Rule"] {
            assert!(TypeRef::parse(expr).is_err(), "{expr:?} should not parse");
        }
    }

    #[test]
    fn test_deref_all_strips_every_pointer() {
        let ty = TypeRef::parse("**example.com/pkg.Thing").unwrap();
        assert_eq!(ty.deref_all(), &TypeRef::named("example.com/pkg", "Thing"));
    }

    #[test]
    fn test_deserialize_from_string() {
        let ty: TypeRef = serde_yaml::from_str("\"*example.com/pkg.Thing\"").unwrap();
        assert_eq!(ty, TypeRef::pointer_to(TypeRef::named("example.com/pkg", "Thing")));
        assert!(serde_yaml::from_str::<TypeRef>("\"*\"").is_err());
    }

    fn arb_type_ref() -> impl Strategy<Value = TypeRef> {
        let leaf = (
            prop_oneof![
                Just(String::new()),
                "[a-z]{1,8}(\\.[a-z]{2,4})?(/[a-z0-9]{1,6}){0,3}",
            ],
            "[A-Za-z_][A-Za-z0-9_]{0,10}",
        )
            .prop_map(|(package, name)| TypeRef::named(package, name));
        leaf.prop_recursive(4, 8, 1, |inner| {
            prop_oneof![
                inner.clone().prop_map(TypeRef::pointer_to),
                inner.prop_map(TypeRef::slice_of),
            ]
        })
    }

    proptest! {
        #[test]
        fn prop_display_parses_back(ty in arb_type_ref()) {
            prop_assert_eq!(TypeRef::parse(&ty.to_string()).unwrap(), ty);
        }
    }
}
