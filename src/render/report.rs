use serde::{Deserialize, Serialize};

use crate::analyzers::Method;
use crate::core::{KeyType, MethodKind, Result};

/// Everything the emitters need for one method, flattened for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodReport {
    pub service: String,
    pub method: String,
    pub version: String,
    pub key_type: KeyType,
    pub kind: MethodKind,
    pub return_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    pub call_args: String,
    pub mock_hook: String,
    pub fcn_args: String,
    pub interface_func: String,
}

impl MethodReport {
    pub fn from_method(method: &Method<'_>) -> Result<Self> {
        let service = method.service();
        Ok(Self {
            service: service.service.clone(),
            method: method.name().to_string(),
            version: service.version().to_string(),
            key_type: service.key_type,
            kind: method.kind(),
            return_type: method.return_type().to_string(),
            item_type: method.item_type().map(str::to_string),
            call_args: method.call_args(),
            mock_hook: method.mock_hook()?,
            fcn_args: method.fcn_args()?,
            interface_func: method.interface_func()?,
        })
    }
}
