//! Mock client configuration

/// Environment variable that switches on strict fixture matching
pub const STRICT_FIXTURES_ENV: &str = "SSM_MOCK_STRICT_FIXTURES";

/// Knobs for [`crate::MockSsmClient`].
///
/// By default an identifier with no fixture is answered with an empty
/// success (no session id, no command status). With `strict_fixtures` set,
/// `start_session` and `get_command_invocation` reject such identifiers with
/// [`ssm_api::SsmError::UnknownFixture`] instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MockSsmConfig {
    pub strict_fixtures: bool,
}

impl MockSsmConfig {
    /// Defaults, overridden by `SSM_MOCK_STRICT_FIXTURES` when set
    pub fn from_env() -> Self {
        let strict_fixtures = std::env::var(STRICT_FIXTURES_ENV)
            .ok()
            .is_some_and(|raw| parse_flag(&raw));
        Self { strict_fixtures }
    }

    pub fn with_strict_fixtures(mut self, strict: bool) -> Self {
        self.strict_fixtures = strict;
        self
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
