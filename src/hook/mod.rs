// ABOUTME: Hook system for the tool-call lifecycle of an invocation.
// ABOUTME: Provides events, callback dispatch keyed by event kind, and providers.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::HookError;
use crate::tool::{CallStatus, Payload};

/// Lifecycle points a callback can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    BeforeInvocation,
    BeforeToolCall,
    AfterToolCall,
    AfterInvocation,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::BeforeInvocation => write!(f, "BeforeInvocation"),
            EventKind::BeforeToolCall => write!(f, "BeforeToolCall"),
            EventKind::AfterToolCall => write!(f, "AfterToolCall"),
            EventKind::AfterInvocation => write!(f, "AfterInvocation"),
        }
    }
}

/// Identifies one tool call as seen by hooks.
#[derive(Debug, Clone)]
pub struct CallContext {
    pub invocation_id: String,
    pub call_id: String,
    pub tool_name: String,
    pub input: Payload,
}

/// Events delivered to hook callbacks.
#[derive(Debug, Clone)]
pub enum HookEvent {
    /// Fired once per invocation, before any call starts.
    BeforeInvocation {
        invocation_id: String,
        call_count: usize,
    },

    /// Fired before a tool body runs. A fault here prevents execution.
    BeforeToolCall { call: CallContext },

    /// Fired after a started call completes, successfully or not.
    AfterToolCall {
        call: CallContext,
        status: CallStatus,
        output: String,
    },

    /// Fired once per invocation, after all results are assembled.
    AfterInvocation {
        invocation_id: String,
        /// Final status of every call, in request order.
        statuses: Vec<CallStatus>,
    },
}

impl HookEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            HookEvent::BeforeInvocation { .. } => EventKind::BeforeInvocation,
            HookEvent::BeforeToolCall { .. } => EventKind::BeforeToolCall,
            HookEvent::AfterToolCall { .. } => EventKind::AfterToolCall,
            HookEvent::AfterInvocation { .. } => EventKind::AfterInvocation,
        }
    }
}

/// A registered callback.
///
/// Callbacks run synchronously on the publishing task and must not block.
pub type HookCallback = Arc<dyn Fn(&HookEvent) -> Result<(), HookError> + Send + Sync>;

/// Something that subscribes a set of callbacks to a registry.
pub trait HookProvider: Send + Sync {
    fn register_hooks(self: Arc<Self>, registry: &HookRegistry);
}

/// Registry for managing and publishing hook events.
pub struct HookRegistry {
    callbacks: RwLock<HashMap<EventKind, Vec<HookCallback>>>,
}

impl HookRegistry {
    /// Create a new empty hook registry.
    pub fn new() -> Self {
        Self {
            callbacks: RwLock::new(HashMap::new()),
        }
    }

    /// Append a callback to the list for `kind`.
    pub fn register<F>(&self, kind: EventKind, callback: F)
    where
        F: Fn(&HookEvent) -> Result<(), HookError> + Send + Sync + 'static,
    {
        self.register_arc(kind, Arc::new(callback));
    }

    /// Append an already shared callback to the list for `kind`.
    pub fn register_arc(&self, kind: EventKind, callback: HookCallback) {
        self.callbacks.write().entry(kind).or_default().push(callback);
    }

    /// Subscribe every callback of a provider.
    pub fn add_provider<P: HookProvider + 'static>(&self, provider: Arc<P>) {
        provider.register_hooks(self);
    }

    /// Publish an event to every callback registered for its kind.
    ///
    /// Callbacks run in registration order. The first fault stops the
    /// remaining callbacks and is returned to the publisher.
    pub fn publish(&self, event: &HookEvent) -> Result<(), HookError> {
        // Snapshot so callbacks may register without deadlocking.
        let callbacks: Vec<HookCallback> = match self.callbacks.read().get(&event.kind()) {
            Some(list) => list.clone(),
            None => return Ok(()),
        };

        for callback in &callbacks {
            callback(event)?;
        }
        Ok(())
    }

    /// Number of callbacks registered for `kind`.
    pub fn len(&self, kind: EventKind) -> usize {
        self.callbacks.read().get(&kind).map_or(0, Vec::len)
    }

    /// Check if no callbacks are registered at all.
    pub fn is_empty(&self) -> bool {
        self.callbacks.read().values().all(Vec::is_empty)
    }

    /// Register a callback that only handles BeforeInvocation events.
    ///
    /// The callback receives (invocation_id, call_count).
    pub fn on_before_invocation<F>(&self, f: F)
    where
        F: Fn(&str, usize) -> Result<(), HookError> + Send + Sync + 'static,
    {
        self.register(EventKind::BeforeInvocation, move |event| match event {
            HookEvent::BeforeInvocation {
                invocation_id,
                call_count,
            } => f(invocation_id, *call_count),
            _ => Ok(()),
        });
    }

    /// Register a callback that only handles BeforeToolCall events.
    pub fn on_before_tool_call<F>(&self, f: F)
    where
        F: Fn(&CallContext) -> Result<(), HookError> + Send + Sync + 'static,
    {
        self.register(EventKind::BeforeToolCall, move |event| match event {
            HookEvent::BeforeToolCall { call } => f(call),
            _ => Ok(()),
        });
    }

    /// Register a callback that only handles AfterToolCall events.
    ///
    /// The callback receives (call, status, output).
    pub fn on_after_tool_call<F>(&self, f: F)
    where
        F: Fn(&CallContext, CallStatus, &str) -> Result<(), HookError> + Send + Sync + 'static,
    {
        self.register(EventKind::AfterToolCall, move |event| match event {
            HookEvent::AfterToolCall {
                call,
                status,
                output,
            } => f(call, *status, output),
            _ => Ok(()),
        });
    }

    /// Register a callback that only handles AfterInvocation events.
    ///
    /// The callback receives (invocation_id, statuses).
    pub fn on_after_invocation<F>(&self, f: F)
    where
        F: Fn(&str, &[CallStatus]) -> Result<(), HookError> + Send + Sync + 'static,
    {
        self.register(EventKind::AfterInvocation, move |event| match event {
            HookEvent::AfterInvocation {
                invocation_id,
                statuses,
            } => f(invocation_id, statuses),
            _ => Ok(()),
        });
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    fn call(tool_name: &str) -> CallContext {
        CallContext {
            invocation_id: "inv-1".into(),
            call_id: format!("call-{}", tool_name),
            tool_name: tool_name.into(),
            input: Payload::new(),
        }
    }

    fn recorder() -> (Arc<Mutex<Vec<String>>>, impl Fn(&str) -> HookCallback) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let make = move |label: &str| -> HookCallback {
            let sink = sink.clone();
            let label = label.to_string();
            Arc::new(move |event: &HookEvent| -> Result<(), HookError> {
                sink.lock().unwrap().push(format!("{}:{}", label, event.kind()));
                Ok(())
            })
        };
        (events, make)
    }

    #[test]
    fn test_publish_in_registration_order() {
        let registry = HookRegistry::new();
        let (events, make) = recorder();
        registry.register_arc(EventKind::BeforeToolCall, make("first"));
        registry.register_arc(EventKind::BeforeToolCall, make("second"));
        registry.register_arc(EventKind::BeforeToolCall, make("third"));

        registry
            .publish(&HookEvent::BeforeToolCall { call: call("search") })
            .unwrap();

        let logged = events.lock().unwrap();
        assert_eq!(
            *logged,
            vec![
                "first:BeforeToolCall",
                "second:BeforeToolCall",
                "third:BeforeToolCall"
            ]
        );
    }

    #[test]
    fn test_publish_only_reaches_matching_kind() {
        let registry = HookRegistry::new();
        let (events, make) = recorder();
        registry.register_arc(EventKind::AfterToolCall, make("after"));

        registry
            .publish(&HookEvent::BeforeInvocation {
                invocation_id: "inv-1".into(),
                call_count: 2,
            })
            .unwrap();
        assert!(events.lock().unwrap().is_empty());

        registry
            .publish(&HookEvent::AfterToolCall {
                call: call("search"),
                status: CallStatus::Success,
                output: "ok".into(),
            })
            .unwrap();
        assert_eq!(events.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_fault_aborts_remaining_callbacks() {
        let registry = HookRegistry::new();
        let (events, make) = recorder();
        registry.register_arc(EventKind::BeforeToolCall, make("before-fault"));
        registry.on_before_tool_call(|call| {
            Err(HookError::RateLimitExceeded {
                tool_name: call.tool_name.clone(),
                count: 2,
                limit: 1,
            })
        });
        registry.register_arc(EventKind::BeforeToolCall, make("after-fault"));

        let result = registry.publish(&HookEvent::BeforeToolCall { call: call("search") });

        match result {
            Err(HookError::RateLimitExceeded {
                tool_name,
                count,
                limit,
            }) => {
                assert_eq!(tool_name, "search");
                assert_eq!(count, 2);
                assert_eq!(limit, 1);
            }
            other => panic!("Expected RateLimitExceeded, got {:?}", other),
        }

        let logged = events.lock().unwrap();
        assert_eq!(*logged, vec!["before-fault:BeforeToolCall"]);
    }

    #[test]
    fn test_publish_without_callbacks_is_ok() {
        let registry = HookRegistry::new();
        assert!(registry.is_empty());
        assert!(registry
            .publish(&HookEvent::AfterInvocation {
                invocation_id: "inv-1".into(),
                statuses: vec![],
            })
            .is_ok());
    }

    #[test]
    fn test_convenience_registrars_unwrap_variants() {
        let registry = HookRegistry::new();
        let seen = Arc::new(Mutex::new(Vec::<String>::new()));

        let s = seen.clone();
        registry.on_before_invocation(move |id, count| {
            s.lock().unwrap().push(format!("start:{}:{}", id, count));
            Ok(())
        });
        let s = seen.clone();
        registry.on_after_tool_call(move |call, status, output| {
            s.lock()
                .unwrap()
                .push(format!("end:{}:{}:{}", call.tool_name, status, output));
            Ok(())
        });
        let s = seen.clone();
        registry.on_after_invocation(move |id, statuses| {
            s.lock().unwrap().push(format!("done:{}:{}", id, statuses.len()));
            Ok(())
        });

        assert_eq!(registry.len(EventKind::BeforeInvocation), 1);
        assert_eq!(registry.len(EventKind::BeforeToolCall), 0);

        registry
            .publish(&HookEvent::BeforeInvocation {
                invocation_id: "inv-9".into(),
                call_count: 3,
            })
            .unwrap();
        registry
            .publish(&HookEvent::AfterToolCall {
                call: call("list_notes"),
                status: CallStatus::Error,
                output: "boom".into(),
            })
            .unwrap();
        registry
            .publish(&HookEvent::AfterInvocation {
                invocation_id: "inv-9".into(),
                statuses: vec![CallStatus::Success, CallStatus::Rejected],
            })
            .unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec!["start:inv-9:3", "end:list_notes:error:boom", "done:inv-9:2"]
        );
    }

    #[test]
    fn test_callback_may_register_during_publish() {
        let registry = Arc::new(HookRegistry::new());
        let inner = registry.clone();
        registry.on_before_invocation(move |_, _| {
            inner.on_before_invocation(|_, _| Ok(()));
            Ok(())
        });

        registry
            .publish(&HookEvent::BeforeInvocation {
                invocation_id: "inv-1".into(),
                call_count: 0,
            })
            .unwrap();

        // The new callback lands for the next publish only.
        assert_eq!(registry.len(EventKind::BeforeInvocation), 2);
    }

    #[test]
    fn test_provider_registers_its_callbacks() {
        struct Counter {
            hits: Mutex<usize>,
        }

        impl HookProvider for Counter {
            fn register_hooks(self: Arc<Self>, registry: &HookRegistry) {
                registry.on_before_tool_call(move |_| {
                    *self.hits.lock().unwrap() += 1;
                    Ok(())
                });
            }
        }

        let registry = HookRegistry::new();
        let counter = Arc::new(Counter {
            hits: Mutex::new(0),
        });
        registry.add_provider(counter.clone());

        registry
            .publish(&HookEvent::BeforeToolCall { call: call("a") })
            .unwrap();
        registry
            .publish(&HookEvent::BeforeToolCall { call: call("b") })
            .unwrap();

        assert_eq!(*counter.hits.lock().unwrap(), 2);
    }
}
