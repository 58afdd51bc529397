// ABOUTME: Concurrent tool executor - spawns one task per call, wraps each in
// ABOUTME: BeforeToolCall/AfterToolCall hooks, and assembles results in request order.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::FutureExt;
use tokio::sync::Mutex;

use super::Invocation;
use crate::error::{HookError, InvocationError, ToolError};
use crate::hook::{CallContext, HookEvent, HookRegistry};
use crate::tool::{CallStatus, Registry, ToolCallResult};

/// Runs the tool calls of an invocation in parallel.
///
/// # Ordering
///
/// - `BeforeInvocation` fires once, before any call starts.
/// - Each call runs `BeforeToolCall → execute → AfterToolCall` in order;
///   calls are unordered relative to each other.
/// - Results come back in request order, not completion order.
/// - `AfterInvocation` fires once, after every call has finished.
///
/// # Failures
///
/// A call rejected by a `BeforeToolCall` subscriber is not executed and does
/// not fire `AfterToolCall`. A failing or panicking tool body produces an
/// error result, still fires `AfterToolCall`, and never affects sibling calls. Only a `BeforeInvocation` fault or an
/// invalid invocation makes [`execute`](Self::execute) return `Err`.
///
/// The executor runs one invocation at a time, so per-invocation subscriber
/// state (rate-limit counters) is never shared between two invocations.
/// Calls already spawned keep running if the `execute` future is dropped.
pub struct ToolExecutor {
    tools: Registry,
    hooks: Arc<HookRegistry>,
    turn: Mutex<()>,
}

impl ToolExecutor {
    /// Create an executor over a tool registry and a hook registry.
    pub fn new(tools: Registry, hooks: Arc<HookRegistry>) -> Self {
        Self {
            tools,
            hooks,
            turn: Mutex::new(()),
        }
    }

    pub fn tools(&self) -> &Registry {
        &self.tools
    }

    pub fn hooks(&self) -> &Arc<HookRegistry> {
        &self.hooks
    }

    /// Execute every call of an invocation and return one result per request.
    pub async fn execute(
        &self,
        invocation: Invocation,
    ) -> Result<Vec<ToolCallResult>, InvocationError> {
        let _turn = self.turn.lock().await;
        let (invocation_id, requests) = invocation.into_parts();

        tracing::debug!(%invocation_id, calls = requests.len(), "Invocation started");
        self.hooks.publish(&HookEvent::BeforeInvocation {
            invocation_id: invocation_id.clone(),
            call_count: requests.len(),
        })?;

        let mut labels = Vec::with_capacity(requests.len());
        let mut tasks = Vec::with_capacity(requests.len());
        for request in requests {
            labels.push((request.call_id.clone(), request.tool_name.clone()));
            let call = CallContext {
                invocation_id: invocation_id.clone(),
                call_id: request.call_id,
                tool_name: request.tool_name,
                input: request.input,
            };
            tasks.push(tokio::spawn(run_call(
                self.tools.clone(),
                self.hooks.clone(),
                call,
            )));
        }

        let joined = futures::future::join_all(tasks).await;
        let results: Vec<ToolCallResult> = labels
            .into_iter()
            .zip(joined)
            .map(|((call_id, tool_name), joined)| match joined {
                Ok(result) => result,
                Err(e) => {
                    tracing::error!(%call_id, tool = %tool_name, error = %e, "Tool call task failed");
                    ToolCallResult {
                        call_id,
                        tool_name,
                        status: CallStatus::Error,
                        output: format!("Tool call aborted: {}", e),
                        duration: Duration::ZERO,
                    }
                }
            })
            .collect();

        let statuses: Vec<CallStatus> = results.iter().map(|r| r.status).collect();
        if let Err(e) = self.hooks.publish(&HookEvent::AfterInvocation {
            invocation_id: invocation_id.clone(),
            statuses,
        }) {
            tracing::warn!(%invocation_id, error = %e, "AfterInvocation hook failed");
        }

        tracing::debug!(%invocation_id, calls = results.len(), "Invocation finished");
        Ok(results)
    }
}

/// Run one call through its hook sequence.
async fn run_call(tools: Registry, hooks: Arc<HookRegistry>, call: CallContext) -> ToolCallResult {
    let started = Instant::now();

    if let Err(fault) = hooks.publish(&HookEvent::BeforeToolCall { call: call.clone() }) {
        let status = match fault {
            HookError::RateLimitExceeded { .. } => CallStatus::Rejected,
            HookError::Callback(_) => CallStatus::Error,
        };
        tracing::warn!(
            call_id = %call.call_id,
            tool = %call.tool_name,
            %status,
            error = %fault,
            "Tool call not started"
        );
        return ToolCallResult {
            call_id: call.call_id,
            tool_name: call.tool_name,
            status,
            output: fault.to_string(),
            duration: started.elapsed(),
        };
    }

    let (status, output) = match tools.get(&call.tool_name).await {
        Some(tool) => {
            let body = AssertUnwindSafe(tool.execute(call.input.clone().into_value()));
            match body.catch_unwind().await {
                Ok(Ok(result)) if result.is_error => (CallStatus::Error, result.content),
                Ok(Ok(result)) => (CallStatus::Success, result.content),
                Ok(Err(e)) => (CallStatus::Error, ToolError::Execution(e).to_string()),
                Err(panic) => {
                    let message = panic_message(panic.as_ref());
                    tracing::error!(
                        call_id = %call.call_id,
                        tool = %call.tool_name,
                        panic = message,
                        "Tool panicked"
                    );
                    (CallStatus::Error, format!("Tool panicked: {}", message))
                }
            }
        }
        None => (
            CallStatus::Error,
            ToolError::NotFound(call.tool_name.clone()).to_string(),
        ),
    };
    let duration = started.elapsed();

    let result = ToolCallResult {
        call_id: call.call_id.clone(),
        tool_name: call.tool_name.clone(),
        status,
        output: output.clone(),
        duration,
    };

    if let Err(e) = hooks.publish(&HookEvent::AfterToolCall {
        call,
        status,
        output,
    }) {
        tracing::warn!(call_id = %result.call_id, error = %e, "AfterToolCall hook failed");
    }

    result
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "non-string panic payload"
    }
}
