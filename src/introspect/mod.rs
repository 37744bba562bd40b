//! Type introspection over an externally defined API surface.
//!
//! The analyzer never sees the API types themselves, only a description of
//! their methods and fields. [`TypeIntrospector`] is the lookup capability the
//! classifier needs; [`TypeCatalog`] answers it from a YAML or JSON catalog.

pub mod catalog;
pub mod type_ref;

pub use catalog::{Catalog, FieldDecl, MethodDecl, ServiceDecl, TypeCatalog, TypeDecl};
pub use type_ref::{TypeKind, TypeRef};

/// A method as seen through a type: receiver first, then declared params.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    pub name: String,
    /// Parameter types. Index 0 is the receiver.
    pub params: Vec<TypeRef>,
    pub results: Vec<TypeRef>,
}

impl MethodSignature {
    pub fn num_in(&self) -> usize {
        self.params.len()
    }

    pub fn num_out(&self) -> usize {
        self.results.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSignature {
    pub name: String,
    pub ty: TypeRef,
}

/// Minimal reflective lookups used during method classification.
pub trait TypeIntrospector: Sync {
    /// Find a method by name on `ty`. Pointer types expose the methods of
    /// the type they point to.
    fn method_by_name(&self, ty: &TypeRef, name: &str) -> Option<MethodSignature>;

    /// Find a field by name on a named struct type. Pointers have no fields.
    fn field_by_name(&self, ty: &TypeRef, name: &str) -> Option<FieldSignature>;
}
