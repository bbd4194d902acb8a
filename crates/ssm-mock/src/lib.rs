//! Deterministic SSM test double.
//!
//! [`MockSsmClient`] implements [`SsmApi`] from fixture tables instead of a
//! live endpoint, so orchestration code can be driven through success,
//! partial-failure and pagination paths in tests. Every call is a pure
//! function of its request and the client's [`Fixtures`]; nothing is
//! remembered between calls.
//!
//! ```rust
//! use ssm_api::SsmApi;
//! use ssm_api::sessions::StartSessionInput;
//! use ssm_mock::{MockSsmClient, fixtures};
//!
//! let ssm = MockSsmClient::new();
//! let session = ssm
//!     .start_session(&StartSessionInput::new(fixtures::READY_TARGET))
//!     .unwrap();
//! assert_eq!(session.session_id.as_deref(), Some(fixtures::READY_SESSION_ID));
//! ```

#![forbid(unsafe_code)]
#![warn(rustdoc::bare_urls)]

use std::sync::Arc;

use ssm_api::commands::{
    Command, GetCommandInvocationInput, GetCommandInvocationOutput, SendCommandInput,
    SendCommandOutput,
};
use ssm_api::inventory::{DescribeInstanceInformationInput, DescribeInstanceInformationOutput};
use ssm_api::sessions::{
    StartSessionInput, StartSessionOutput, TerminateSessionInput, TerminateSessionOutput,
};
use ssm_api::{PartialOutputError, SsmApi, SsmError};

pub mod config;
pub mod filter;
pub mod fixtures;

pub use self::config::MockSsmConfig;
pub use self::fixtures::{CannedFailure, FixtureTable, Fixtures, InventoryFixture, Outcome};

/// In-process [`SsmApi`] implementation backed by fixture tables.
///
/// Cloning is cheap; clones share the same fixtures.
#[derive(Debug, Clone, Default)]
pub struct MockSsmClient {
    fixtures: Arc<Fixtures>,
    config: MockSsmConfig,
}

impl MockSsmClient {
    /// Client with the default fixtures and lenient matching
    pub fn new() -> Self {
        Self::default()
    }

    /// Client with the default fixtures, configured from the environment
    pub fn from_env() -> Self {
        Self::default().with_config(MockSsmConfig::from_env())
    }

    pub fn with_config(mut self, config: MockSsmConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_fixtures(mut self, fixtures: Fixtures) -> Self {
        self.fixtures = Arc::new(fixtures);
        self
    }

    pub fn fixtures(&self) -> &Fixtures {
        &self.fixtures
    }

    pub fn config(&self) -> MockSsmConfig {
        self.config
    }

    /// Resolve an identifier that has no fixture
    fn unmatched(&self, operation: &'static str, key: &str) -> Result<(), SsmError> {
        if self.config.strict_fixtures {
            tracing::warn!(
                target: "ssm_mock::fixtures",
                operation,
                key,
                "rejecting identifier with no fixture"
            );
            return Err(SsmError::UnknownFixture {
                operation,
                key: key.to_string(),
            });
        }
        tracing::debug!(
            target: "ssm_mock::fixtures",
            operation,
            key,
            "no fixture registered; answering with an empty success"
        );
        Ok(())
    }
}

impl SsmApi for MockSsmClient {
    fn start_session(&self, input: &StartSessionInput) -> Result<StartSessionOutput, SsmError> {
        match self.fixtures.sessions.get(&input.target) {
            Some(Outcome::Success(session_id)) => {
                tracing::debug!(
                    target: "ssm_mock::sessions",
                    target_id = %input.target,
                    session_id = %session_id,
                    "session started"
                );
                Ok(StartSessionOutput {
                    session_id: Some(session_id.clone()),
                })
            }
            Some(Outcome::Failure(failure)) => {
                tracing::debug!(
                    target: "ssm_mock::sessions",
                    target_id = %input.target,
                    code = ?failure.code,
                    "simulated start_session failure"
                );
                Err(failure.to_error())
            }
            None => {
                self.unmatched("start_session", &input.target)?;
                Ok(StartSessionOutput::default())
            }
        }
    }

    fn terminate_session(
        &self,
        input: &TerminateSessionInput,
    ) -> Result<TerminateSessionOutput, PartialOutputError<TerminateSessionOutput>> {
        let output = TerminateSessionOutput {
            session_id: Some(input.session_id.clone()),
        };

        match self.fixtures.termination_failures.get(&input.session_id) {
            Some(failure) => {
                tracing::debug!(
                    target: "ssm_mock::sessions",
                    session_id = %input.session_id,
                    code = ?failure.code,
                    "simulated terminate_session failure"
                );
                Err(PartialOutputError {
                    output,
                    error: failure.to_error(),
                })
            }
            None => {
                tracing::debug!(
                    target: "ssm_mock::sessions",
                    session_id = %input.session_id,
                    "session terminated"
                );
                Ok(output)
            }
        }
    }

    fn get_command_invocation(
        &self,
        input: &GetCommandInvocationInput,
    ) -> Result<GetCommandInvocationOutput, SsmError> {
        let status_details = match self.fixtures.command_statuses.get(&input.command_id) {
            Some(Outcome::Success(status)) => Some(*status),
            Some(Outcome::Failure(failure)) => {
                tracing::debug!(
                    target: "ssm_mock::commands",
                    command_id = %input.command_id,
                    code = ?failure.code,
                    "simulated get_command_invocation failure"
                );
                return Err(failure.to_error());
            }
            None => {
                self.unmatched("get_command_invocation", &input.command_id)?;
                None
            }
        };

        tracing::debug!(
            target: "ssm_mock::commands",
            command_id = %input.command_id,
            instance_id = %input.instance_id,
            status = ?status_details,
            "command invocation looked up"
        );
        Ok(GetCommandInvocationOutput {
            command_id: Some(input.command_id.clone()),
            instance_id: Some(input.instance_id.clone()),
            status_details,
        })
    }

    fn send_command(&self, input: &SendCommandInput) -> Result<SendCommandOutput, SsmError> {
        if input.has_conflicting_selectors() {
            return Err(SsmError::Validation(
                "cannot specify instance IDs and SSM targets in same SendCommandInput".to_string(),
            ));
        }

        tracing::debug!(
            target: "ssm_mock::commands",
            document = %input.document_name,
            instances = input.instance_ids.len(),
            targets = input.targets.len(),
            "command submitted"
        );
        Ok(SendCommandOutput {
            command: Some(Command {
                command_id: self.fixtures.sent_command_id.clone(),
                document_name: input.document_name.clone(),
                instance_ids: input.instance_ids.clone(),
                targets: input.targets.clone(),
                parameters: input.parameters.clone(),
                comment: input.comment.clone(),
            }),
        })
    }

    fn describe_instance_information(
        &self,
        input: &DescribeInstanceInformationInput,
    ) -> Result<DescribeInstanceInformationOutput, SsmError> {
        let inventory = &self.fixtures.inventory;
        let (page, records, next_token) = match input.continuation_token() {
            None => (
                1,
                &inventory.first_page,
                Some(inventory.first_page_token.clone()),
            ),
            Some(_) => (2, &inventory.continuation_page, None),
        };

        let instance_information_list = filter::filter_instances(records, &input.filters)?;
        tracing::debug!(
            target: "ssm_mock::inventory",
            page,
            filters = input.filters.len(),
            total = records.len(),
            matched = instance_information_list.len(),
            "inventory page served"
        );
        Ok(DescribeInstanceInformationOutput {
            instance_information_list,
            next_token,
        })
    }
}
