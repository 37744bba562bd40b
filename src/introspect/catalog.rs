use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

use super::{FieldSignature, MethodSignature, TypeIntrospector, TypeRef};
use crate::core::{ApiVersion, Error, KeyType, Result};

/// Serialized form of a catalog file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub services: Vec<ServiceDecl>,
    #[serde(default)]
    pub types: Vec<TypeDecl>,
}

/// A service whose methods get wrapper code generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceDecl {
    /// Name of the service struct, e.g. `GlobalForwardingRules`.
    pub service: String,
    /// Name of the object the service deals with, e.g. `ForwardingRule`.
    pub object: String,
    /// Plural resource noun in the API URL, e.g. `forwardingRules`.
    #[serde(default)]
    pub resource: String,
    #[serde(default)]
    pub version: ApiVersion,
    pub key_type: KeyType,
    /// Type on which the service methods are declared.
    pub service_type: TypeRef,
    /// Non-standard methods to generate wrappers for.
    #[serde(default)]
    pub methods: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeDecl {
    #[serde(default)]
    pub package: String,
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
    #[serde(default)]
    pub methods: Vec<MethodDecl>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodDecl {
    pub name: String,
    /// Declared parameters, receiver excluded.
    #[serde(default)]
    pub params: Vec<TypeRef>,
    #[serde(default)]
    pub results: Vec<TypeRef>,
}

/// Catalog indexed by `(package, name)` for lookups.
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    types: HashMap<(String, String), TypeDecl>,
    services: Vec<ServiceDecl>,
}

impl TypeCatalog {
    pub fn new(catalog: Catalog) -> Result<Self> {
        let mut types = HashMap::with_capacity(catalog.types.len());
        for decl in catalog.types {
            let key = (decl.package.clone(), decl.name.clone());
            if types.contains_key(&key) {
                return Err(Error::Catalog(format!(
                    "type {} declared more than once",
                    TypeRef::named(&decl.package, &decl.name)
                )));
            }
            types.insert(key, decl);
        }
        debug!(
            types = types.len(),
            services = catalog.services.len(),
            "indexed catalog"
        );
        Ok(Self {
            types,
            services: catalog.services,
        })
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        Self::new(serde_yaml::from_str(contents)?)
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        Self::new(serde_json::from_str(contents)?)
    }

    /// Load a catalog file. `.json` files are read as JSON, anything else as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::file_system("Failed to read catalog", path, e))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_yaml_str(&contents)
        }
    }

    pub fn services(&self) -> &[ServiceDecl] {
        &self.services
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    fn declaration(&self, ty: &TypeRef) -> Option<&TypeDecl> {
        match ty {
            TypeRef::Named { package, name } => {
                self.types.get(&(package.clone(), name.clone()))
            }
            _ => None,
        }
    }
}

impl TypeIntrospector for TypeCatalog {
    fn method_by_name(&self, ty: &TypeRef, name: &str) -> Option<MethodSignature> {
        let decl = self.declaration(ty.deref_all())?;
        let method = decl.methods.iter().find(|m| m.name == name)?;
        let params = std::iter::once(ty.clone())
            .chain(method.params.iter().cloned())
            .collect();
        Some(MethodSignature {
            name: method.name.clone(),
            params,
            results: method.results.clone(),
        })
    }

    fn field_by_name(&self, ty: &TypeRef, name: &str) -> Option<FieldSignature> {
        let decl = self.declaration(ty)?;
        decl.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| FieldSignature {
                name: f.name.clone(),
                ty: f.ty.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const CATALOG: &str = indoc! {r#"
        services:
          - service: Addresses
            object: Address
            resource: addresses
            key_type: regional
            service_type: "*google.golang.org/api/compute/v1.AddressesService"
            methods: [Move]
        types:
          - package: google.golang.org/api/compute/v1
            name: AddressesService
            methods:
              - name: Move
                params: [string, string, string]
                results: ["*google.golang.org/api/compute/v1.AddressesMoveCall"]
          - package: google.golang.org/api/compute/v1
            name: AddressList
            fields:
              - name: Items
                type: "[]*google.golang.org/api/compute/v1.Address"
    "#};

    #[test]
    fn test_method_lookup_prepends_receiver() {
        let catalog = TypeCatalog::from_yaml_str(CATALOG).unwrap();
        let receiver = TypeRef::parse("*google.golang.org/api/compute/v1.AddressesService").unwrap();
        let method = catalog.method_by_name(&receiver, "Move").unwrap();
        assert_eq!(method.num_in(), 4);
        assert_eq!(method.params[0], receiver);
        assert_eq!(method.num_out(), 1);
        assert!(catalog.method_by_name(&receiver, "Missing").is_none());
    }

    #[test]
    fn test_field_lookup_requires_named_type() {
        let catalog = TypeCatalog::from_yaml_str(CATALOG).unwrap();
        let list = TypeRef::named("google.golang.org/api/compute/v1", "AddressList");
        assert!(catalog.field_by_name(&list, "Items").is_some());
        assert!(catalog
            .field_by_name(&TypeRef::pointer_to(list), "Items")
            .is_none());
    }

    #[test]
    fn test_services_are_parsed_with_defaults() {
        let catalog = TypeCatalog::from_yaml_str(CATALOG).unwrap();
        let service = &catalog.services()[0];
        assert_eq!(service.version, ApiVersion::Ga);
        assert_eq!(service.key_type, KeyType::Regional);
        assert_eq!(service.methods, vec!["Move".to_string()]);
    }

    #[test]
    fn test_duplicate_type_is_rejected() {
        let contents = indoc! {r#"
            types:
              - { package: example.com/pkg, name: Thing }
              - { package: example.com/pkg, name: Thing }
        "#};
        let err = TypeCatalog::from_yaml_str(contents).unwrap_err();
        assert!(err.to_string().contains("example.com/pkg.Thing"));
    }

    #[test]
    fn test_load_json_by_extension() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, r#"{"types": [{"package": "example.com/pkg", "name": "Thing"}]}"#).unwrap();
        let catalog = TypeCatalog::load(&path).unwrap();
        assert_eq!(catalog.type_count(), 1);
    }

    #[test]
    fn test_load_missing_file_is_file_system_error() {
        let err = TypeCatalog::load(Path::new("/nonexistent/catalog.yaml")).unwrap_err();
        assert!(matches!(err, Error::FileSystem { .. }));
    }
}
