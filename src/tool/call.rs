// ABOUTME: Tool-call envelopes: the request an invocation carries and the
// ABOUTME: result the executor produces for it.

use std::time::Duration;

use serde_json::Value;

use super::{CallStatus, Payload};
use crate::error::ToolError;

/// One requested tool call within an invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolCallRequest {
    /// Unique within the owning invocation.
    pub call_id: String,
    pub tool_name: String,
    pub input: Payload,
}

impl ToolCallRequest {
    pub fn new(call_id: impl Into<String>, tool_name: impl Into<String>, input: Payload) -> Self {
        Self {
            call_id: call_id.into(),
            tool_name: tool_name.into(),
            input,
        }
    }

    /// Build a request from raw JSON input, validating its shape.
    pub fn from_json(
        call_id: impl Into<String>,
        tool_name: impl Into<String>,
        input: Value,
    ) -> Result<Self, ToolError> {
        Ok(Self::new(call_id, tool_name, Payload::try_from(input)?))
    }
}

/// Outcome of one tool call, produced exactly once per request.
#[derive(Debug, Clone)]
pub struct ToolCallResult {
    pub call_id: String,
    pub tool_name: String,
    pub status: CallStatus,
    /// Tool output on success, otherwise a description of the failure.
    pub output: String,
    pub duration: Duration,
}

impl ToolCallResult {
    pub fn is_success(&self) -> bool {
        self.status == CallStatus::Success
    }

    pub fn is_rejected(&self) -> bool {
        self.status == CallStatus::Rejected
    }
}
