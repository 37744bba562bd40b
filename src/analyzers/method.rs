use crate::analyzers::arg::Arg;
use crate::analyzers::classifier::classify;
use crate::analyzers::service::ServiceInfo;
use crate::core::{Error, MethodKind, Result};
use crate::introspect::{MethodSignature, TypeIntrospector};

/// A service method, classified once at construction.
#[derive(Debug, Clone)]
pub struct Method<'a> {
    service: &'a ServiceInfo,
    signature: MethodSignature,
    kind: MethodKind,
    return_type: String,
    item_type: Option<String>,
}

impl<'a> Method<'a> {
    /// Classify `signature` and check that its residual argument types can be
    /// emitted. Any shape the generator does not understand is an error.
    pub fn new(
        service: &'a ServiceInfo,
        signature: MethodSignature,
        types: &dyn TypeIntrospector,
    ) -> Result<Self> {
        let classification = classify(
            &service.service,
            &signature,
            service.key_type.args_skip(),
            types,
        )?;
        let method = Self {
            service,
            signature,
            kind: classification.kind,
            return_type: classification.return_type,
            item_type: classification.item_type,
        };
        method.args(method.args_skip(), false, &[])?;
        Ok(method)
    }

    pub fn service(&self) -> &'a ServiceInfo {
        self.service
    }

    pub fn name(&self) -> &str {
        &self.signature.name
    }

    pub fn signature(&self) -> &MethodSignature {
        &self.signature
    }

    pub fn kind(&self) -> MethodKind {
        self.kind
    }

    pub fn is_operation(&self) -> bool {
        self.kind == MethodKind::Operation
    }

    pub fn is_get(&self) -> bool {
        self.kind == MethodKind::Get
    }

    pub fn is_paged(&self) -> bool {
        self.kind == MethodKind::Paged
    }

    /// Bare name of the type returned by the call builder's `Do()`.
    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    /// Element type of a paged result.
    pub fn item_type(&self) -> Option<&str> {
        self.item_type.as_deref()
    }

    /// Number of leading parameters consumed by the resource key.
    pub fn args_skip(&self) -> usize {
        self.service.key_type.args_skip()
    }

    /// Descriptors for every parameter, receiver and key region included.
    pub fn arg_descriptors(&self) -> Vec<Arg> {
        self.signature.params.iter().map(Arg::new).collect()
    }

    /// Emitted argument list: `prefix` followed by the parameters from
    /// position `skip` on. With `name_args` each one is `argN <type>`, N
    /// counting from zero after the skipped region.
    pub fn args(&self, skip: usize, name_args: bool, prefix: &[&str]) -> Result<Vec<String>> {
        let descriptors = self.arg_descriptors();
        let mut args: Vec<String> = prefix.iter().map(|p| p.to_string()).collect();
        for (i, arg) in descriptors.iter().enumerate().skip(skip) {
            let rendered = arg.render().map_err(|e| match e {
                Error::UnknownNamespace { package } => Error::UnhandledArgPackage {
                    service: self.service.service.clone(),
                    method: self.name().to_string(),
                    index: i - skip,
                    package,
                },
                other => other,
            })?;
            if name_args {
                args.push(format!("arg{} {}", i - skip, rendered));
            } else {
                args.push(rendered);
            }
        }
        Ok(args)
    }
}
