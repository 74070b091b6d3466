//! The closed set of file roles the generator produces.

/// Which source tree an artifact belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputTree {
    Code,
    Tests,
}

/// Every file role the generator can produce: thirteen production kinds and
/// eight test kinds. `TestDataFactory` has no production counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ArtifactKind {
    Controller,
    Command,
    Result,
    ServiceInterface,
    ServiceImpl,
    PqlExchangeRequest,
    PqlExchangeResponse,
    PqlExchange,
    PqlQueryBuilder,
    PqlResultMapper,
    CommandAdapter,
    ResultAdapter,
    RequestValidator,
    ControllerTest,
    ServiceImplTest,
    PqlQueryBuilderTest,
    PqlResultMapperTest,
    CommandAdapterTest,
    ResultAdapterTest,
    RequestValidatorTest,
    TestDataFactory,
}

impl ArtifactKind {
    /// All kinds, production first, in rendering order.
    pub const ALL: [Self; 21] = [
        Self::Controller,
        Self::Command,
        Self::Result,
        Self::ServiceInterface,
        Self::ServiceImpl,
        Self::PqlExchangeRequest,
        Self::PqlExchangeResponse,
        Self::PqlExchange,
        Self::PqlQueryBuilder,
        Self::PqlResultMapper,
        Self::CommandAdapter,
        Self::ResultAdapter,
        Self::RequestValidator,
        Self::ControllerTest,
        Self::ServiceImplTest,
        Self::PqlQueryBuilderTest,
        Self::PqlResultMapperTest,
        Self::CommandAdapterTest,
        Self::ResultAdapterTest,
        Self::RequestValidatorTest,
        Self::TestDataFactory,
    ];

    pub const fn tree(self) -> OutputTree {
        match self {
            Self::Controller
            | Self::Command
            | Self::Result
            | Self::ServiceInterface
            | Self::ServiceImpl
            | Self::PqlExchangeRequest
            | Self::PqlExchangeResponse
            | Self::PqlExchange
            | Self::PqlQueryBuilder
            | Self::PqlResultMapper
            | Self::CommandAdapter
            | Self::ResultAdapter
            | Self::RequestValidator => OutputTree::Code,
            Self::ControllerTest
            | Self::ServiceImplTest
            | Self::PqlQueryBuilderTest
            | Self::PqlResultMapperTest
            | Self::CommandAdapterTest
            | Self::ResultAdapterTest
            | Self::RequestValidatorTest
            | Self::TestDataFactory => OutputTree::Tests,
        }
    }

    /// The fixed template file name for this kind under the template root.
    pub const fn template_file_name(self) -> &'static str {
        match self {
            Self::Controller => "controller.ditto",
            Self::Command => "command.ditto",
            Self::Result => "result.ditto",
            Self::ServiceInterface => "service_interface.ditto",
            Self::ServiceImpl => "service_implementation.ditto",
            Self::PqlExchangeRequest => "pql_exchange_request.ditto",
            Self::PqlExchangeResponse => "pql_exchange_response.ditto",
            Self::PqlExchange => "pql_exchange.ditto",
            Self::PqlQueryBuilder => "pql_query_builder.ditto",
            Self::PqlResultMapper => "pql_result_mapper.ditto",
            Self::CommandAdapter => "command_adapter.ditto",
            Self::ResultAdapter => "result_adapter.ditto",
            Self::RequestValidator => "request_validator.ditto",
            Self::ControllerTest => "controller_test.ditto",
            Self::ServiceImplTest => "service_implementation_test.ditto",
            Self::PqlQueryBuilderTest => "pql_query_builder_test.ditto",
            Self::PqlResultMapperTest => "pql_result_mapper_test.ditto",
            Self::CommandAdapterTest => "command_adapter_test.ditto",
            Self::ResultAdapterTest => "result_adapter_test.ditto",
            Self::RequestValidatorTest => "request_validator_test.ditto",
            Self::TestDataFactory => "test_data_factory.ditto",
        }
    }

    /// Sub-folder of the template root this kind's template is read from.
    pub const fn template_subfolder(self) -> &'static str {
        match self.tree() {
            OutputTree::Code => "code",
            OutputTree::Tests => "tests",
        }
    }
}
