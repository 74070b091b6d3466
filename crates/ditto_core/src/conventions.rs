//! The naming/location convention engine.
//!
//! One rule table maps every [`ArtifactKind`] to a name base, a class-name
//! suffix and a dotted sub-package. Derivation walks that table exactly once
//! and produces the two generation contexts plus the scaffold of destination
//! paths; the renderer consults the same table through the scaffold, so the
//! conventions live in a single place.
//!
//! Derivation is pure: identical inputs always produce identical contexts
//! and destinations.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::artifact::{ArtifactKind, OutputTree};
use crate::context::{
    ClassContext, CodeGenerationContext, FileLocation, InputContext, MethodContext, Scaffold,
    TestsGenerationContext,
};

const CONTROLLER_CLASS_SUFFIX: &str = "Controller";
const JAVA_FILE_EXTENSION: &str = ".java";

/// Which extracted simple name a kind's class name builds on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameBase {
    /// The controller interface's simple name, with a trailing `Controller`
    /// stripped.
    Controller,
    /// The qualifying method's input type simple name, unchanged.
    Command,
}

/// One row of the convention table.
#[derive(Debug, Clone, Copy)]
pub struct ArtifactRule {
    pub kind: ArtifactKind,
    pub base: NameBase,
    pub suffix: &'static str,
    /// Dotted sub-package under the root package; empty means the root
    /// package itself.
    pub sub_package: &'static str,
}

const fn rule(
    kind: ArtifactKind,
    base: NameBase,
    suffix: &'static str,
    sub_package: &'static str,
) -> ArtifactRule {
    ArtifactRule {
        kind,
        base,
        suffix,
        sub_package,
    }
}

/// The standard layered-architecture table. Test kinds append `Test` to the
/// corresponding production name; the test data factory builds on the
/// controller name and lives at the root package.
const STANDARD_RULES: [ArtifactRule; 21] = [
    rule(ArtifactKind::Controller, NameBase::Controller, "Controller", "webexchange"),
    rule(ArtifactKind::Command, NameBase::Command, "Command", "domain.model"),
    rule(ArtifactKind::Result, NameBase::Command, "Result", "domain.model"),
    rule(ArtifactKind::ServiceInterface, NameBase::Controller, "Service", "domain.service"),
    rule(ArtifactKind::ServiceImpl, NameBase::Controller, "ServiceImpl", "domain.service"),
    rule(ArtifactKind::PqlExchangeRequest, NameBase::Command, "PqlExchangeRequest", "pql"),
    rule(ArtifactKind::PqlExchangeResponse, NameBase::Command, "PqlExchangeResponse", "pql"),
    rule(ArtifactKind::PqlExchange, NameBase::Command, "PqlExchange", "pql"),
    rule(ArtifactKind::PqlQueryBuilder, NameBase::Command, "PqlQueryBuilder", "pql"),
    rule(ArtifactKind::PqlResultMapper, NameBase::Command, "PqlResultMapper", "pql"),
    rule(ArtifactKind::CommandAdapter, NameBase::Command, "CommandAdapter", "webexchange.adapter"),
    rule(ArtifactKind::ResultAdapter, NameBase::Command, "ResultAdapter", "webexchange.adapter"),
    rule(ArtifactKind::RequestValidator, NameBase::Command, "Validator", "webexchange.validation"),
    rule(ArtifactKind::ControllerTest, NameBase::Controller, "ControllerTest", "webexchange"),
    rule(ArtifactKind::ServiceImplTest, NameBase::Controller, "ServiceImplTest", "domain.service"),
    rule(ArtifactKind::PqlQueryBuilderTest, NameBase::Command, "PqlQueryBuilderTest", "pql"),
    rule(ArtifactKind::PqlResultMapperTest, NameBase::Command, "PqlResultMapperTest", "pql"),
    rule(ArtifactKind::CommandAdapterTest, NameBase::Command, "CommandAdapterTest", "webexchange.adapter"),
    rule(ArtifactKind::ResultAdapterTest, NameBase::Command, "ResultAdapterTest", "webexchange.adapter"),
    rule(ArtifactKind::RequestValidatorTest, NameBase::Command, "ValidatorTest", "webexchange.validation"),
    rule(ArtifactKind::TestDataFactory, NameBase::Controller, "ControllerTestDataFactory", ""),
];

/// The immutable convention table handed into derivation.
///
/// [`Conventions::standard`] is the table above; [`Conventions::with_rule`]
/// swaps a single row for projects with different naming rules.
#[derive(Debug, Clone)]
pub struct Conventions {
    rules: [ArtifactRule; 21],
}

impl Conventions {
    pub fn standard() -> Self {
        Self {
            rules: STANDARD_RULES,
        }
    }

    /// Replace the row for `rule.kind`.
    pub fn with_rule(mut self, rule: ArtifactRule) -> Self {
        self.rules[rule.kind as usize] = rule;
        self
    }

    pub fn rule(&self, kind: ArtifactKind) -> &ArtifactRule {
        &self.rules[kind as usize]
    }
}

impl Default for Conventions {
    fn default() -> Self {
        Self::standard()
    }
}

/// Output tree roots and the target root package, as resolved by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub root_package: String,
    pub code_output_root: PathBuf,
    pub tests_output_root: PathBuf,
}

/// Everything derivation produces in one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Derivation {
    pub code: CodeGenerationContext,
    pub tests: TestsGenerationContext,
    pub scaffold: Scaffold,
}

/// Base class name for controller-derived artifacts.
///
/// Truncates at the *last* occurrence of `Controller` anywhere in the name,
/// not just a trailing suffix — `OrderControllerService` becomes `Order` and
/// `ControllerXService` becomes the empty string. Inherited behavior, kept
/// as-is.
pub fn controller_base_name(interface_simple_name: &str) -> &str {
    match interface_simple_name.rfind(CONTROLLER_CLASS_SUFFIX) {
        Some(idx) => &interface_simple_name[..idx],
        None => interface_simple_name,
    }
}

/// Derive every artifact identity and destination from the extracted
/// signature. Pure; cannot fail on a valid [`InputContext`].
pub fn derive(input: &InputContext, layout: &OutputLayout, conventions: &Conventions) -> Derivation {
    let controller_base = controller_base_name(input.controller_interface.class_name()).to_string();
    let command_base = input.method.input_type().class_name().to_string();

    let mut classes: BTreeMap<ArtifactKind, ClassContext> = BTreeMap::new();
    let mut destinations: BTreeMap<ArtifactKind, FileLocation> = BTreeMap::new();

    for kind in ArtifactKind::ALL {
        let rule = conventions.rule(kind);
        let base = match rule.base {
            NameBase::Controller => &controller_base,
            NameBase::Command => &command_base,
        };
        let class_name = format!("{base}{}", rule.suffix);
        let package = join_package(&layout.root_package, rule.sub_package);
        let output_root = match kind.tree() {
            OutputTree::Code => &layout.code_output_root,
            OutputTree::Tests => &layout.tests_output_root,
        };
        let parent_dir = append_package_path(output_root, rule.sub_package);

        destinations.insert(
            kind,
            FileLocation::new(parent_dir, format!("{class_name}{JAVA_FILE_EXTENSION}")),
        );
        classes.insert(kind, ClassContext::new(package, class_name));
    }

    let command = classes[&ArtifactKind::Command].clone();
    let result = classes[&ArtifactKind::Result].clone();
    let service_method = MethodContext {
        name: input.method.name().to_string(),
        input_type: command.clone(),
        output_type: result.clone(),
    };

    let code = CodeGenerationContext {
        root_package_dot_path: layout.root_package.clone(),
        controller_interface: input.controller_interface.clone(),
        controller_interface_method: input.method.clone(),
        controller: classes[&ArtifactKind::Controller].clone(),
        command,
        result,
        service_interface: classes[&ArtifactKind::ServiceInterface].clone(),
        service_implementation: classes[&ArtifactKind::ServiceImpl].clone(),
        service_method,
        pql_exchange_request: classes[&ArtifactKind::PqlExchangeRequest].clone(),
        pql_exchange_response: classes[&ArtifactKind::PqlExchangeResponse].clone(),
        pql_exchange: classes[&ArtifactKind::PqlExchange].clone(),
        pql_query_builder: classes[&ArtifactKind::PqlQueryBuilder].clone(),
        pql_result_mapper: classes[&ArtifactKind::PqlResultMapper].clone(),
        command_adapter: classes[&ArtifactKind::CommandAdapter].clone(),
        result_adapter: classes[&ArtifactKind::ResultAdapter].clone(),
        request_validator: classes[&ArtifactKind::RequestValidator].clone(),
    };

    let tests = TestsGenerationContext {
        root_package_dot_path: layout.root_package.clone(),
        controller_test: classes[&ArtifactKind::ControllerTest].clone(),
        service_implementation_test: classes[&ArtifactKind::ServiceImplTest].clone(),
        pql_query_builder_test: classes[&ArtifactKind::PqlQueryBuilderTest].clone(),
        pql_result_mapper_test: classes[&ArtifactKind::PqlResultMapperTest].clone(),
        command_adapter_test: classes[&ArtifactKind::CommandAdapterTest].clone(),
        result_adapter_test: classes[&ArtifactKind::ResultAdapterTest].clone(),
        request_validator_test: classes[&ArtifactKind::RequestValidatorTest].clone(),
        tests_data_factory: classes[&ArtifactKind::TestDataFactory].clone(),
        code_output: code.clone(),
    };

    Derivation {
        code,
        tests,
        scaffold: Scaffold::new(destinations),
    }
}

fn join_package(root: &str, sub_package: &str) -> String {
    if sub_package.is_empty() {
        root.to_string()
    } else {
        format!("{root}.{sub_package}")
    }
}

fn append_package_path(root: &Path, sub_package: &str) -> PathBuf {
    if sub_package.is_empty() {
        root.to_path_buf()
    } else {
        sub_package
            .split('.')
            .fold(root.to_path_buf(), |path, segment| path.join(segment))
    }
}
