// Shared catalog fixtures for callmeta integration tests
#![allow(dead_code)]

use callmeta::TypeCatalog;
use indoc::indoc;
use std::path::PathBuf;

/// A small slice of the compute API: a regional GA service with an
/// operation, a get and a paged method, and a global beta service whose
/// types come from a vendored package path.
pub const COMPUTE_CATALOG: &str = indoc! {r#"
    services:
      - service: ForwardingRules
        object: ForwardingRule
        resource: forwardingRules
        version: ga
        key_type: regional
        service_type: "*google.golang.org/api/compute/v1.ForwardingRulesService"
        methods: [SetTarget, GetHealth, ListUsable]
      - service: BackendServices
        object: BackendService
        resource: backendServices
        version: beta
        key_type: global
        service_type: "*k8s.io/kubernetes/vendor/google.golang.org/api/compute/v0.beta.BackendServicesService"
        methods: [SetSecurityPolicy]

    types:
      - package: google.golang.org/api/compute/v1
        name: ForwardingRulesService
        methods:
          - name: SetTarget
            params: [string, string, string, "*google.golang.org/api/compute/v1.TargetReference"]
            results: ["*google.golang.org/api/compute/v1.ForwardingRulesSetTargetCall"]
          - name: GetHealth
            params: [string, string, string, "*google.golang.org/api/compute/v1.ResourceGroupReference"]
            results: ["*google.golang.org/api/compute/v1.ForwardingRulesGetHealthCall"]
          - name: ListUsable
            params: [string, string, string]
            results: ["*google.golang.org/api/compute/v1.ForwardingRulesListUsableCall"]
      - package: google.golang.org/api/compute/v1
        name: ForwardingRulesSetTargetCall
        methods:
          - name: Do
            results: ["*google.golang.org/api/compute/v1.Operation", error]
      - package: google.golang.org/api/compute/v1
        name: ForwardingRulesGetHealthCall
        methods:
          - name: Do
            results: ["*google.golang.org/api/compute/v1.ForwardingRuleHealth", error]
      - package: google.golang.org/api/compute/v1
        name: ForwardingRulesListUsableCall
        methods:
          - name: Do
            results: ["*google.golang.org/api/compute/v1.ForwardingRuleList", error]
          - name: Pages
            params: [context.Context, func]
            results: [error]
      - package: google.golang.org/api/compute/v1
        name: ForwardingRuleList
        fields:
          - { name: Id, type: string }
          - { name: Items, type: "[]*google.golang.org/api/compute/v1.ForwardingRule" }
          - { name: NextPageToken, type: string }

      - package: k8s.io/kubernetes/vendor/google.golang.org/api/compute/v0.beta
        name: BackendServicesService
        methods:
          - name: SetSecurityPolicy
            params: [string, string, "*k8s.io/kubernetes/vendor/google.golang.org/api/compute/v0.beta.SecurityPolicyReference"]
            results: ["*k8s.io/kubernetes/vendor/google.golang.org/api/compute/v0.beta.BackendServicesSetSecurityPolicyCall"]
      - package: k8s.io/kubernetes/vendor/google.golang.org/api/compute/v0.beta
        name: BackendServicesSetSecurityPolicyCall
        methods:
          - name: Do
            results: ["*k8s.io/kubernetes/vendor/google.golang.org/api/compute/v0.beta.Operation", error]
"#};

pub fn compute_catalog() -> TypeCatalog {
    TypeCatalog::from_yaml_str(COMPUTE_CATALOG).expect("fixture catalog parses")
}

/// Write `contents` to `name` inside a fresh temporary directory.
pub fn write_catalog(contents: &str, name: &str) -> (tempfile::TempDir, PathBuf) {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write catalog");
    (temp_dir, path)
}
