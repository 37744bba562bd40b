use tracing::{info, info_span};

use crate::analyzers::method::Method;
use crate::core::conventions::MOCK_PREFIX;
use crate::core::{ApiVersion, Error, KeyType, Result};
use crate::introspect::{ServiceDecl, TypeIntrospector, TypeRef};
use crate::observability::set_current_method;

/// A service whose methods get wrapper, interface and mock code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInfo {
    /// Name of the object type the service deals with, e.g. `ForwardingRule`.
    pub object: String,
    /// Name of the service struct, e.g. `GlobalForwardingRules`.
    pub service: String,
    /// Plural resource noun in the API URL, e.g. `forwardingRules`.
    pub resource: String,
    pub version: ApiVersion,
    pub key_type: KeyType,
    /// Type the service methods are declared on.
    pub service_type: TypeRef,
    pub additional_methods: Vec<String>,
}

impl ServiceInfo {
    pub fn version(&self) -> ApiVersion {
        self.version
    }

    /// Name of the generated wrapper type, prefixed by the version title for
    /// non-GA services.
    pub fn wrap_type(&self) -> String {
        match self.version {
            ApiVersion::Ga => self.service.clone(),
            ApiVersion::Alpha | ApiVersion::Beta => {
                format!("{}{}", self.version.title(), self.service)
            }
        }
    }

    pub fn mock_wrap_type(&self) -> String {
        format!("{}{}", MOCK_PREFIX, self.wrap_type())
    }

    /// Object type qualified by its version alias, e.g. `beta.Address`.
    pub fn fq_object_type(&self) -> String {
        format!("{}.{}", self.version, self.object)
    }

    /// Look up and classify every additional method. A name missing from
    /// the service type is an error.
    pub fn methods<'a>(&'a self, types: &dyn TypeIntrospector) -> Result<Vec<Method<'a>>> {
        let _span = info_span!("service", service = %self.service).entered();
        let mut methods = Vec::with_capacity(self.additional_methods.len());
        for name in &self.additional_methods {
            let _method = set_current_method(format!("{}.{}", self.service, name));
            let signature = types
                .method_by_name(&self.service_type, name)
                .ok_or_else(|| Error::MethodNotFound {
                    method: name.clone(),
                    type_name: self.service_type.deref_all().name().to_string(),
                })?;
            methods.push(Method::new(self, signature, types)?);
        }
        info!(count = methods.len(), "classified service methods");
        Ok(methods)
    }
}

impl From<ServiceDecl> for ServiceInfo {
    fn from(decl: ServiceDecl) -> Self {
        Self {
            object: decl.object,
            service: decl.service,
            resource: decl.resource,
            version: decl.version,
            key_type: decl.key_type,
            service_type: decl.service_type,
            additional_methods: decl.methods,
        }
    }
}
