//! Text fragments handed to the code emitters.
//!
//! Everything here is a projection of an already classified [`Method`]: no
//! classification is redone and repeated calls return identical text.

pub mod report;

pub use report::MethodReport;

use crate::analyzers::Method;
use crate::core::conventions::{CONTEXT_TYPE, FILTER_TYPE, HOOK_SUFFIX, KEY_TYPE};
use crate::core::{MethodKind, Result};

impl Method<'_> {
    /// Comma separated `argN` list used when calling the method, with a
    /// leading `", "`. Empty when the method has no residual arguments.
    pub fn call_args(&self) -> String {
        let skip = self.args_skip();
        let args: Vec<String> = (skip..self.signature().num_in())
            .map(|i| format!("arg{}", i - skip))
            .collect();
        if args.is_empty() {
            return String::new();
        }
        format!(", {}", args.join(", "))
    }

    /// Name of the hook function in the mock.
    pub fn mock_hook_name(&self) -> String {
        format!("{}{}", self.name(), HOOK_SUFFIX)
    }

    /// Definition of the mock hook field, e.g.
    /// `GetHook func(*MockAddresses, context.Context, *meta.Key) (*ga.Address, error)`.
    pub fn mock_hook(&self) -> Result<String> {
        let mock_type = format!("*{}", self.service().mock_wrap_type());
        let mut args = self.args(
            self.args_skip(),
            false,
            &[mock_type.as_str(), CONTEXT_TYPE, KEY_TYPE],
        )?;
        if self.is_paged() {
            args.push(FILTER_TYPE.to_string());
        }
        Ok(format!(
            "{} func({}) {}",
            self.mock_hook_name(),
            args.join(", "),
            self.return_signature()
        ))
    }

    /// Signature of the synthesized wrapper method.
    pub fn fcn_args(&self) -> Result<String> {
        let ctx = format!("ctx {CONTEXT_TYPE}");
        let key = format!("key {KEY_TYPE}");
        let mut args = self.args(self.args_skip(), true, &[ctx.as_str(), key.as_str()])?;
        if self.is_paged() {
            args.push(format!("fl {FILTER_TYPE}"));
        }
        Ok(format!(
            "{}({}) {}",
            self.name(),
            args.join(", "),
            self.return_signature()
        ))
    }

    /// Declaration of the method in the service interface.
    pub fn interface_func(&self) -> Result<String> {
        let mut args = self.args(self.args_skip(), false, &[CONTEXT_TYPE, KEY_TYPE])?;
        if self.is_paged() {
            args.push(FILTER_TYPE.to_string());
        }
        Ok(format!(
            "{}({}) {}",
            self.name(),
            args.join(", "),
            self.return_signature()
        ))
    }

    fn return_signature(&self) -> String {
        let version = self.service().version();
        match self.kind() {
            MethodKind::Operation => "error".to_string(),
            MethodKind::Get => format!("(*{}.{}, error)", version, self.return_type()),
            MethodKind::Paged => format!(
                "([]*{}.{}, error)",
                version,
                self.item_type().unwrap_or_default()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::analyzers::{Method, ServiceInfo};
    use crate::core::{ApiVersion, KeyType};
    use crate::introspect::{TypeCatalog, TypeIntrospector, TypeRef};
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn catalog() -> TypeCatalog {
        TypeCatalog::from_yaml_str(indoc! {r#"
            types:
              - package: google.golang.org/api/compute/v0.beta
                name: RulesService
                methods:
                  - name: SetLabels
                    params: [string, string, "*google.golang.org/api/compute/v0.beta.Labels"]
                    results: ["*google.golang.org/api/compute/v0.beta.RulesSetLabelsCall"]
                  - name: GetHealth
                    params: [string, string]
                    results: ["*google.golang.org/api/compute/v0.beta.RulesGetHealthCall"]
                  - name: ListUsable
                    params: [string, string]
                    results: ["*google.golang.org/api/compute/v0.beta.RulesListUsableCall"]
              - package: google.golang.org/api/compute/v0.beta
                name: RulesSetLabelsCall
                methods:
                  - { name: Do, results: ["*google.golang.org/api/compute/v0.beta.Operation", error] }
              - package: google.golang.org/api/compute/v0.beta
                name: RulesGetHealthCall
                methods:
                  - { name: Do, results: ["*google.golang.org/api/compute/v0.beta.RuleHealth", error] }
              - package: google.golang.org/api/compute/v0.beta
                name: RulesListUsableCall
                methods:
                  - { name: Do, results: ["*google.golang.org/api/compute/v0.beta.UsableRuleList", error] }
                  - { name: Pages }
              - package: google.golang.org/api/compute/v0.beta
                name: UsableRuleList
                fields:
                  - { name: Items, type: "[]*google.golang.org/api/compute/v0.beta.UsableRule" }
        "#})
        .unwrap()
    }

    fn service() -> ServiceInfo {
        ServiceInfo {
            object: "Rule".into(),
            service: "Rules".into(),
            resource: "rules".into(),
            version: ApiVersion::Beta,
            key_type: KeyType::Global,
            service_type: TypeRef::parse("*google.golang.org/api/compute/v0.beta.RulesService")
                .unwrap(),
            additional_methods: vec![],
        }
    }

    fn method<'a>(service: &'a ServiceInfo, types: &TypeCatalog, name: &str) -> Method<'a> {
        let signature = types.method_by_name(&service.service_type, name).unwrap();
        Method::new(service, signature, types).unwrap()
    }

    #[test]
    fn test_operation_fragments() {
        let types = catalog();
        let service = service();
        let m = method(&service, &types, "SetLabels");
        assert_eq!(m.call_args(), ", arg0");
        assert_eq!(
            m.mock_hook().unwrap(),
            "SetLabelsHook func(*MockBetaRules, context.Context, *meta.Key, *beta.Labels) error"
        );
        assert_eq!(
            m.fcn_args().unwrap(),
            "SetLabels(ctx context.Context, key *meta.Key, arg0 *beta.Labels) error"
        );
        assert_eq!(
            m.interface_func().unwrap(),
            "SetLabels(context.Context, *meta.Key, *beta.Labels) error"
        );
    }

    #[test]
    fn test_get_fragments() {
        let types = catalog();
        let service = service();
        let m = method(&service, &types, "GetHealth");
        assert_eq!(m.call_args(), "");
        assert_eq!(
            m.fcn_args().unwrap(),
            "GetHealth(ctx context.Context, key *meta.Key) (*beta.RuleHealth, error)"
        );
        assert_eq!(
            m.mock_hook().unwrap(),
            "GetHealthHook func(*MockBetaRules, context.Context, *meta.Key) (*beta.RuleHealth, error)"
        );
    }

    #[test]
    fn test_paged_fragments_append_filter() {
        let types = catalog();
        let service = service();
        let m = method(&service, &types, "ListUsable");
        assert_eq!(
            m.fcn_args().unwrap(),
            "ListUsable(ctx context.Context, key *meta.Key, fl *filter.F) ([]*beta.UsableRule, error)"
        );
        assert_eq!(
            m.interface_func().unwrap(),
            "ListUsable(context.Context, *meta.Key, *filter.F) ([]*beta.UsableRule, error)"
        );
        assert_eq!(
            m.mock_hook().unwrap(),
            "ListUsableHook func(*MockBetaRules, context.Context, *meta.Key, *filter.F) ([]*beta.UsableRule, error)"
        );
    }

    #[test]
    fn test_rendering_is_repeatable() {
        let types = catalog();
        let service = service();
        for name in ["SetLabels", "GetHealth", "ListUsable"] {
            let m = method(&service, &types, name);
            assert_eq!(m.call_args(), m.call_args());
            assert_eq!(m.mock_hook().unwrap(), m.mock_hook().unwrap());
            assert_eq!(m.fcn_args().unwrap(), m.fcn_args().unwrap());
            assert_eq!(m.interface_func().unwrap(), m.interface_func().unwrap());
        }
    }
}
