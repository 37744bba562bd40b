use crate::analyzers::namespace::normalize_package;
use crate::core::Result;
use crate::introspect::TypeRef;

/// One parameter type reduced to its pointer and slice modifiers, package
/// and bare name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arg {
    pointer_depth: usize,
    modifiers: String,
    package: String,
    type_name: String,
}

impl Arg {
    /// Unwrap pointer and slice layers down to the named element type.
    /// `pointer_depth` counts the leading pointers only.
    pub fn new(ty: &TypeRef) -> Self {
        let mut modifiers = String::new();
        let mut current = ty;
        loop {
            match current {
                TypeRef::Pointer(elem) => {
                    modifiers.push('*');
                    current = elem;
                }
                TypeRef::Slice(elem) => {
                    modifiers.push_str("[]");
                    current = elem;
                }
                TypeRef::Named { .. } => break,
            }
        }
        Self {
            pointer_depth: modifiers.chars().take_while(|&c| c == '*').count(),
            modifiers,
            package: current.package().to_string(),
            type_name: current.name().to_string(),
        }
    }

    pub fn pointer_depth(&self) -> usize {
        self.pointer_depth
    }

    /// Pointer and slice markers in source order, e.g. `*[]*`.
    pub fn modifiers(&self) -> &str {
        &self.modifiers
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Emitted type text, e.g. `*ga.Address` or `[]*beta.Rule`. Fails on a
    /// package outside the known API versions.
    pub fn render(&self) -> Result<String> {
        let qualifier = normalize_package(&self.package)?;
        Ok(format!("{}{}{}", self.modifiers, qualifier, self.type_name))
    }
}
