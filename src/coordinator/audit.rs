// ABOUTME: Audit logger - timestamps tool call start/end and logs durations.
// ABOUTME: Holds one start entry per in-flight call, consumed when the call ends.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::hook::{CallContext, HookProvider, HookRegistry};
use crate::tool::CallStatus;

type CallKey = (String, String);

fn key(call: &CallContext) -> CallKey {
    (call.invocation_id.clone(), call.call_id.clone())
}

/// Logs every tool call with its duration.
///
/// The tool input is only logged at DEBUG level.
#[derive(Default)]
pub struct AuditLogger {
    starts: Mutex<HashMap<CallKey, Instant>>,
}

impl AuditLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the start of a call.
    pub fn start(&self, call: &CallContext) {
        self.starts.lock().insert(key(call), Instant::now());

        tracing::info!(
            invocation_id = %call.invocation_id,
            call_id = %call.call_id,
            "[TOOL START] {}",
            call.tool_name
        );
        tracing::debug!(call_id = %call.call_id, input = ?call.input, "Tool input");
    }

    /// Record the end of a call and return its duration.
    ///
    /// A call with no recorded start reports a zero duration.
    pub fn finish(&self, call: &CallContext, status: CallStatus) -> Duration {
        let started = self.starts.lock().remove(&key(call));
        let duration = started.map(|s| s.elapsed()).unwrap_or(Duration::ZERO);

        tracing::info!(
            invocation_id = %call.invocation_id,
            call_id = %call.call_id,
            "[TOOL END] {} status={} duration={:.2}s",
            call.tool_name,
            status,
            duration.as_secs_f64()
        );
        duration
    }

    /// Drop start entries left behind by calls of a finished invocation.
    pub fn discard(&self, invocation_id: &str) -> usize {
        let mut starts = self.starts.lock();
        let before = starts.len();
        starts.retain(|(inv, _), _| inv != invocation_id);
        let dropped = before - starts.len();
        if dropped > 0 {
            tracing::debug!(invocation_id, dropped, "Discarded unfinished audit entries");
        }
        dropped
    }

    /// Number of calls currently in flight.
    pub fn in_flight(&self) -> usize {
        self.starts.lock().len()
    }
}

impl HookProvider for AuditLogger {
    fn register_hooks(self: Arc<Self>, registry: &HookRegistry) {
        let audit = self.clone();
        registry.on_before_tool_call(move |call| {
            audit.start(call);
            Ok(())
        });

        let audit = self.clone();
        registry.on_after_tool_call(move |call, status, _| {
            audit.finish(call, status);
            Ok(())
        });

        registry.on_after_invocation(move |invocation_id, _| {
            self.discard(invocation_id);
            Ok(())
        });
    }
}
