//! The flat aggregates bound to templates.
//!
//! Every production template receives the full [`CodeGenerationContext`] —
//! not a per-kind slice — so one template can reference another artifact's
//! identity (the controller template names the command class, the exchange
//! template names the query builder, and so on) without the renderer knowing
//! anything about template internals. Test templates receive
//! [`TestsGenerationContext`], which embeds the production context under
//! `codeOutput` for the same reason.

use serde::Serialize;

use super::{ClassContext, ControllerMethodContext, MethodContext};

/// Every derived production identity plus the extracted method signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeGenerationContext {
    pub root_package_dot_path: String,
    pub controller_interface: ClassContext,
    pub controller_interface_method: ControllerMethodContext,
    pub controller: ClassContext,
    pub command: ClassContext,
    pub result: ClassContext,
    pub service_interface: ClassContext,
    pub service_implementation: ClassContext,
    pub service_method: MethodContext,
    pub pql_exchange_request: ClassContext,
    pub pql_exchange_response: ClassContext,
    pub pql_exchange: ClassContext,
    pub pql_query_builder: ClassContext,
    pub pql_result_mapper: ClassContext,
    pub command_adapter: ClassContext,
    pub result_adapter: ClassContext,
    pub request_validator: ClassContext,
}

/// Every derived test identity, mirroring the production sub-packages under
/// the test root, plus the full production context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestsGenerationContext {
    pub root_package_dot_path: String,
    pub controller_test: ClassContext,
    pub service_implementation_test: ClassContext,
    pub pql_query_builder_test: ClassContext,
    pub pql_result_mapper_test: ClassContext,
    pub command_adapter_test: ClassContext,
    pub result_adapter_test: ClassContext,
    pub request_validator_test: ClassContext,
    pub tests_data_factory: ClassContext,
    pub code_output: CodeGenerationContext,
}
