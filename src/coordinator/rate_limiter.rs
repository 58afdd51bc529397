// ABOUTME: Per-invocation call ceiling for tools, enforced from BeforeToolCall.
// ABOUTME: Counts reset at every invocation boundary and are never persisted.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::HookError;
use crate::hook::{HookProvider, HookRegistry};

/// Admission control for tool calls within one invocation.
///
/// Each configured tool may be called at most `limit` times per invocation.
/// Tools without a configured limit are never counted. The counter for a
/// tool is incremented and compared under a single lock, so concurrent
/// calls cannot both pass a check meant to reject one of them.
pub struct RateLimiter {
    limits: HashMap<String, u32>,
    counts: Mutex<HashMap<String, u32>>,
}

impl RateLimiter {
    /// Create a rate limiter from a tool-name → ceiling map.
    pub fn new(limits: HashMap<String, u32>) -> Self {
        Self {
            limits,
            counts: Mutex::new(HashMap::new()),
        }
    }

    /// The configured ceiling for a tool, if any.
    pub fn limit(&self, tool_name: &str) -> Option<u32> {
        self.limits.get(tool_name).copied()
    }

    /// Calls counted so far for a tool in the current invocation.
    pub fn count(&self, tool_name: &str) -> u32 {
        self.counts.lock().get(tool_name).copied().unwrap_or(0)
    }

    /// Forget all counts.
    pub fn reset(&self) {
        self.counts.lock().clear();
    }

    /// Count one call and reject it if the tool is over its ceiling.
    pub fn check(&self, tool_name: &str) -> Result<(), HookError> {
        let Some(&limit) = self.limits.get(tool_name) else {
            return Ok(());
        };

        let mut counts = self.counts.lock();
        let count = counts.entry(tool_name.to_string()).or_insert(0);
        *count += 1;

        if *count > limit {
            tracing::warn!(tool = %tool_name, count = *count, limit, "Rate limit exceeded");
            return Err(HookError::RateLimitExceeded {
                tool_name: tool_name.to_string(),
                count: *count,
                limit,
            });
        }
        Ok(())
    }
}

impl HookProvider for RateLimiter {
    fn register_hooks(self: Arc<Self>, registry: &HookRegistry) {
        let limiter = self.clone();
        registry.on_before_invocation(move |_, _| {
            limiter.reset();
            Ok(())
        });

        let limiter = self.clone();
        registry.on_before_tool_call(move |call| limiter.check(&call.tool_name));

        registry.on_after_invocation(move |_, _| {
            self.reset();
            Ok(())
        });
    }
}
