//! Shape-based method classification.
//!
//! No method declares whether it is long running, a plain get or paginated.
//! The kind is inferred from the signature:
//!
//! 1. **Arity**: at least `skip` parameters (receiver included).
//! 2. **Key region**: parameters `1..skip` are plain strings (project, zone,
//!    region, resource name).
//! 3. **Return**: exactly one `*xxxCall` call builder.
//! 4. **Execute**: the call builder has a `Do()` returning `(*T, error)`.
//! 5. **Kind**: `T == Operation` wins, then a `Pages()` method on the call
//!    builder means paged (with `T.Items` of type `[]*Item`), otherwise get.
//!
//! Every violated precondition is a fatal error.

use tracing::debug;

use crate::core::conventions::{
    CALL_SUFFIX, ERROR_TYPE, EXECUTE_METHOD, ITEMS_FIELD, OPERATION_TYPE, PAGES_METHOD,
};
use crate::core::{Error, MethodKind, Result};
use crate::introspect::{MethodSignature, TypeIntrospector, TypeKind, TypeRef};

/// Outcome of classifying one method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub kind: MethodKind,
    /// Bare name of the type returned by `Do()`.
    pub return_type: String,
    /// Element type of the paged list. Only set for [`MethodKind::Paged`].
    pub item_type: Option<String>,
}

/// Names used in error messages.
struct Site<'a> {
    service: &'a str,
    method: &'a str,
}

impl Site<'_> {
    fn service(&self) -> String {
        self.service.to_string()
    }

    fn method(&self) -> String {
        self.method.to_string()
    }
}

/// Classify `signature`, a method of `service` whose first `skip` parameters
/// address the resource.
pub fn classify(
    service: &str,
    signature: &MethodSignature,
    skip: usize,
    types: &dyn TypeIntrospector,
) -> Result<Classification> {
    let site = Site {
        service,
        method: &signature.name,
    };

    check_key_region(&site, signature, skip)?;
    let call_type = call_builder_type(&site, signature)?;
    let call_name = call_type.name().to_string();

    let execute = types
        .method_by_name(call_type, EXECUTE_METHOD)
        .ok_or_else(|| Error::MissingExecute {
            service: site.service(),
            method: site.method(),
            call_type: call_name.clone(),
        })?;
    let has_pages = types.method_by_name(call_type, PAGES_METHOD).is_some();

    let result = execute_result(&site, &execute, &call_name)?;
    let return_type = result.name().to_string();

    let classification = if return_type == OPERATION_TYPE {
        Classification {
            kind: MethodKind::Operation,
            return_type,
            item_type: None,
        }
    } else if has_pages {
        let item_type = paged_item_type(&site, result, types)?;
        Classification {
            kind: MethodKind::Paged,
            return_type,
            item_type: Some(item_type),
        }
    } else {
        Classification {
            kind: MethodKind::Get,
            return_type,
            item_type: None,
        }
    };

    debug!(
        service,
        method = %signature.name,
        kind = %classification.kind,
        return_type = %classification.return_type,
        "classified method"
    );
    Ok(classification)
}

fn check_key_region(site: &Site<'_>, signature: &MethodSignature, skip: usize) -> Result<()> {
    if signature.num_in() < skip {
        return Err(Error::Arity {
            service: site.service(),
            method: site.method(),
            arity: signature.num_in(),
            required: skip,
        });
    }
    for (index, param) in signature.params.iter().enumerate().take(skip).skip(1) {
        if param.kind() != TypeKind::String {
            return Err(Error::SkippedArgNotString {
                service: site.service(),
                method: site.method(),
                index,
                found: param.to_string(),
            });
        }
    }
    Ok(())
}

/// The `xxxCall` type behind the method's single `*xxxCall` result.
fn call_builder_type<'s>(site: &Site<'_>, signature: &'s MethodSignature) -> Result<&'s TypeRef> {
    match signature.results.as_slice() {
        [TypeRef::Pointer(elem)] if elem.name().ends_with(CALL_SUFFIX) => Ok(&**elem),
        _ => Err(Error::UnsupportedReturn {
            service: site.service(),
            method: site.method(),
        }),
    }
}

/// Validate `Do() (*T, error)` and return `T`.
fn execute_result<'e>(
    site: &Site<'_>,
    execute: &'e MethodSignature,
    call_name: &str,
) -> Result<&'e TypeRef> {
    let [out0, out1] = execute.results.as_slice() else {
        return Err(Error::UnhandledExecuteArity {
            service: site.service(),
            method: site.method(),
            call_type: call_name.to_string(),
            arity: execute.num_out(),
        });
    };
    let TypeRef::Pointer(result) = out0 else {
        return Err(Error::ExecuteResultNotPointer {
            service: site.service(),
            method: site.method(),
            call_type: call_name.to_string(),
            found: out0.to_string(),
        });
    };
    if out1.name() != ERROR_TYPE {
        return Err(Error::ExecuteErrorNotError {
            service: site.service(),
            method: site.method(),
            call_type: call_name.to_string(),
        });
    }
    Ok(&**result)
}

/// `Pages()` hands out the list type; the objects are in its `Items []*T`.
fn paged_item_type(
    site: &Site<'_>,
    list_type: &TypeRef,
    types: &dyn TypeIntrospector,
) -> Result<String> {
    let list_name = list_type.name().to_string();
    let items = types
        .field_by_name(list_type, ITEMS_FIELD)
        .ok_or_else(|| Error::MissingItemsField {
            service: site.service(),
            method: site.method(),
            list_type: list_name.clone(),
        })?;

    match &items.ty {
        TypeRef::Slice(elem) => match elem.as_ref() {
            TypeRef::Pointer(item) if !item.name().is_empty() => Ok(item.name().to_string()),
            _ => Err(not_pointer_slice(site, list_name)),
        },
        _ => Err(not_pointer_slice(site, list_name)),
    }
}

fn not_pointer_slice(site: &Site<'_>, list_type: String) -> Error {
    Error::ItemsNotPointerSlice {
        service: site.service(),
        method: site.method(),
        list_type,
    }
}
