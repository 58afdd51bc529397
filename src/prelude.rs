// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use quill::prelude::*;` to get started quickly.

pub use crate::config::Config;
pub use crate::coordinator::{AuditLogger, RateLimiter};
pub use crate::error::{
    ConfigError, HookError, InvocationError, OutputError, PersistenceError, QuillError, ToolError,
};
pub use crate::executor::{Invocation, ToolExecutor};
pub use crate::hook::{CallContext, EventKind, HookEvent, HookProvider, HookRegistry};
pub use crate::notes::{Note, NoteStore};
pub use crate::report::{ReportRequest, ReportSynthesizer};
pub use crate::research::{Confidence, Finding, ResearchOutput, Source};
pub use crate::session::Session;
pub use crate::telemetry::{init_tracing, parse_filter};
pub use crate::tool::{
    CallStatus, Payload, Registry, Tool, ToolCallRequest, ToolCallResult, ToolDefinition,
    ToolResult,
};
pub use crate::tools::{GenerateReportTool, ListNotesTool, SaveNoteTool};
