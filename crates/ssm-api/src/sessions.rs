//! Interactive session requests and responses

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Request to open an interactive session on a managed instance
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartSessionInput {
    /// Instance the session should be opened on
    pub target: String,
    /// Session document to run, when not the default shell
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_name: Option<String>,
    /// Document parameters
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub parameters: BTreeMap<String, Vec<String>>,
    /// Free-form reason recorded with the session
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl StartSessionInput {
    /// Session on `target` with the default document
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartSessionOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TerminateSessionInput {
    pub session_id: String,
}

impl TerminateSessionInput {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TerminateSessionOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_session_input_uses_wire_names() {
        let mut input = StartSessionInput::new("i-123");
        input
            .parameters
            .insert("portNumber".to_string(), vec!["22".to_string()]);
        let value = serde_json::to_value(&input).expect("encode input");
        assert_eq!(value["Target"], "i-123");
        assert_eq!(value["Parameters"]["portNumber"][0], "22");
        assert!(value.get("DocumentName").is_none());
        assert!(value.get("Reason").is_none());
    }

    #[test]
    fn empty_output_decodes_without_session_id() {
        let decoded: StartSessionOutput = serde_json::from_str("{}").expect("decode output");
        assert_eq!(decoded, StartSessionOutput::default());

        let decoded: TerminateSessionOutput =
            serde_json::from_str(r#"{"SessionId":"s-1"}"#).expect("decode output");
        assert_eq!(decoded.session_id.as_deref(), Some("s-1"));
    }
}
