// ABOUTME: Invocation - one agent turn and the ordered tool calls it requested.
// ABOUTME: Construction enforces call-id uniqueness.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::InvocationError;
use crate::tool::ToolCallRequest;

/// One top-level agent turn.
#[derive(Debug, Clone)]
pub struct Invocation {
    id: String,
    started_at: DateTime<Utc>,
    requests: Vec<ToolCallRequest>,
}

impl Invocation {
    /// Create an invocation. Fails if two requests share a call id.
    pub fn new(requests: Vec<ToolCallRequest>) -> Result<Self, InvocationError> {
        let mut seen = HashSet::with_capacity(requests.len());
        for request in &requests {
            if !seen.insert(request.call_id.as_str()) {
                return Err(InvocationError::DuplicateCallId(request.call_id.clone()));
            }
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            started_at: Utc::now(),
            requests,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn requests(&self) -> &[ToolCallRequest] {
        &self.requests
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub(crate) fn into_parts(self) -> (String, Vec<ToolCallRequest>) {
        (self.id, self.requests)
    }
}
