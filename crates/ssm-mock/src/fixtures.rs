//! Fixture tables
//!
//! Every canned response the mock can give lives here as data. The default
//! [`Fixtures`] are seeded with the identifiers below; dependent tests rely
//! on these literals, so changing one is a breaking change.

use std::collections::BTreeMap;

use ssm_api::commands::CommandInvocationStatus;
use ssm_api::inventory::InstanceInformation;
use ssm_api::{ErrorCode, SsmError};

/// Target with a working agent; sessions start normally
pub const READY_TARGET: &str = "i-123";
/// Session id handed out for [`READY_TARGET`]
pub const READY_SESSION_ID: &str = "ready-instance-id";
/// Target whose instance role lacks permissions
pub const NOT_CONNECTED_TARGET: &str = "i-456";
/// Target that fails for a reason other than [`ErrorCode::TargetNotConnected`]
pub const FAILING_TARGET: &str = "i-789";
/// Target whose session starts but fails to terminate
pub const TERMINATE_ERROR_TARGET: &str = "i-000";
/// Session id handed out for [`TERMINATE_ERROR_TARGET`]
pub const TERMINATE_ERROR_SESSION_ID: &str = "session-term-error";

pub const NOT_CONNECTED_MESSAGE: &str =
    "bad instance role permissions make this fail on ssm-managed instances";
pub const FAILING_TARGET_MESSAGE: &str =
    "This represents any error other than TargetNotConnected.";
pub const TERMINATE_ERROR_MESSAGE: &str = "this tends to occur when you hit rate limits";

pub const SUCCESS_COMMAND_ID: &str = "success-id";
pub const FAILED_COMMAND_ID: &str = "failed-id";
pub const MIXED_COMMAND_ID: &str = "mixed-id";
pub const PENDING_COMMAND_ID: &str = "pending-id";
pub const BAD_COMMAND_ID: &str = "bad-id";

/// Command id assigned to every submitted command. Not unique.
pub const SENT_COMMAND_ID: &str = "1234561234561234561234561235456";

/// Continuation token returned with the first inventory page
pub const FIRST_PAGE_TOKEN: &str = "eyJNYXJrZXIiOiBudWxsLCAiYm90b190cnVuY2F0ZV9hbW91bnQiOiAxfQ==";

/// Canned failure
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CannedFailure {
    /// `None` for an unclassified failure
    pub code: Option<ErrorCode>,
    pub message: String,
}

impl CannedFailure {
    pub fn service(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: message.into(),
        }
    }

    pub fn unclassified(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn to_error(&self) -> SsmError {
        match self.code {
            Some(code) => SsmError::service(code, self.message.clone()),
            None => SsmError::Unclassified(self.message.clone()),
        }
    }
}

/// What a fixture key resolves to
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    Failure(CannedFailure),
}

/// Identifier → outcome lookup. Keys are matched by exact equality.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FixtureTable<T> {
    entries: BTreeMap<String, Outcome<T>>,
}

impl<T> Default for FixtureTable<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<T> FixtureTable<T> {
    /// Register an outcome, replacing any previous one for `key`
    pub fn insert(&mut self, key: impl Into<String>, outcome: Outcome<T>) {
        self.entries.insert(key.into(), outcome);
    }

    pub fn get(&self, key: &str) -> Option<&Outcome<T>> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<T, K: Into<String>> FromIterator<(K, Outcome<T>)> for FixtureTable<T> {
    fn from_iter<I: IntoIterator<Item = (K, Outcome<T>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// The two inventory pages. A request without a continuation token gets
/// `first_page`; any token selects `continuation_page`, which ends the listing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InventoryFixture {
    pub first_page: Vec<InstanceInformation>,
    pub first_page_token: String,
    pub continuation_page: Vec<InstanceInformation>,
}

impl Default for InventoryFixture {
    fn default() -> Self {
        Self {
            first_page: vec![
                instance("i-23456", "Linux", "Offline", true),
                instance("i-45678", "Linux", "Online", true),
                instance("i-78901", "Windows", "Offline", true),
                instance("i-98765", "Linux", "Online", false),
            ],
            first_page_token: FIRST_PAGE_TOKEN.to_string(),
            continuation_page: vec![
                instance("i-12345", "Linux", "Online", true),
                instance("i-34567", "Linux", "Online", true),
                instance("i-67890", "Windows", "Online", true),
            ],
        }
    }
}

/// Build an inventory record
pub fn instance(
    instance_id: &str,
    platform_type: &str,
    ping_status: &str,
    is_latest_version: bool,
) -> InstanceInformation {
    InstanceInformation {
        instance_id: Some(instance_id.to_string()),
        platform_type: Some(platform_type.to_string()),
        ping_status: Some(ping_status.to_string()),
        is_latest_version: Some(is_latest_version),
    }
}

/// All fixture tables consulted by [`crate::MockSsmClient`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Fixtures {
    /// Session target → session id to hand out
    pub sessions: FixtureTable<String>,
    /// Session ids whose termination fails. Unlisted ids terminate cleanly.
    pub termination_failures: BTreeMap<String, CannedFailure>,
    /// Command id → invocation status
    pub command_statuses: FixtureTable<CommandInvocationStatus>,
    pub inventory: InventoryFixture,
    /// Command id assigned by `send_command`
    pub sent_command_id: String,
}

impl Default for Fixtures {
    fn default() -> Self {
        let sessions = FixtureTable::from_iter([
            (READY_TARGET, Outcome::Success(READY_SESSION_ID.to_string())),
            (
                NOT_CONNECTED_TARGET,
                Outcome::Failure(CannedFailure::service(
                    ErrorCode::TargetNotConnected,
                    NOT_CONNECTED_MESSAGE,
                )),
            ),
            (
                FAILING_TARGET,
                Outcome::Failure(CannedFailure::unclassified(FAILING_TARGET_MESSAGE)),
            ),
            (
                TERMINATE_ERROR_TARGET,
                Outcome::Success(TERMINATE_ERROR_SESSION_ID.to_string()),
            ),
        ]);

        let termination_failures = BTreeMap::from([(
            TERMINATE_ERROR_SESSION_ID.to_string(),
            CannedFailure::service(ErrorCode::DoesNotExistException, TERMINATE_ERROR_MESSAGE),
        )]);

        let command_statuses = FixtureTable::from_iter([
            (SUCCESS_COMMAND_ID, Outcome::Success(CommandInvocationStatus::Success)),
            (FAILED_COMMAND_ID, Outcome::Success(CommandInvocationStatus::Failed)),
            (MIXED_COMMAND_ID, Outcome::Success(CommandInvocationStatus::Failed)),
            (PENDING_COMMAND_ID, Outcome::Success(CommandInvocationStatus::Pending)),
            (
                BAD_COMMAND_ID,
                Outcome::Failure(CannedFailure::service(
                    ErrorCode::InvalidCommandId,
                    "InvalidCommandId",
                )),
            ),
        ]);

        Self {
            sessions,
            termination_failures,
            command_statuses,
            inventory: InventoryFixture::default(),
            sent_command_id: SENT_COMMAND_ID.to_string(),
        }
    }
}

impl Fixtures {
    /// Tables with no entries and empty inventory pages
    pub fn empty() -> Self {
        Self {
            sessions: FixtureTable::default(),
            termination_failures: BTreeMap::new(),
            command_statuses: FixtureTable::default(),
            inventory: InventoryFixture {
                first_page: Vec::new(),
                first_page_token: FIRST_PAGE_TOKEN.to_string(),
                continuation_page: Vec::new(),
            },
            sent_command_id: SENT_COMMAND_ID.to_string(),
        }
    }

    pub fn with_session(mut self, target: impl Into<String>, outcome: Outcome<String>) -> Self {
        self.sessions.insert(target, outcome);
        self
    }

    pub fn with_termination_failure(
        mut self,
        session_id: impl Into<String>,
        failure: CannedFailure,
    ) -> Self {
        self.termination_failures.insert(session_id.into(), failure);
        self
    }

    pub fn with_command_status(
        mut self,
        command_id: impl Into<String>,
        outcome: Outcome<CommandInvocationStatus>,
    ) -> Self {
        self.command_statuses.insert(command_id, outcome);
        self
    }

    pub fn with_inventory(mut self, inventory: InventoryFixture) -> Self {
        self.inventory = inventory;
        self
    }

    pub fn with_sent_command_id(mut self, command_id: impl Into<String>) -> Self {
        self.sent_command_id = command_id.into();
        self
    }
}
