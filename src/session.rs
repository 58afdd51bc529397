// ABOUTME: Session - assembles config, hooks, subscribers, tools and executor
// ABOUTME: into the per-agent context that runs invocations.

use std::sync::Arc;

use crate::config::Config;
use crate::coordinator::{AuditLogger, RateLimiter};
use crate::error::InvocationError;
use crate::executor::{Invocation, ToolExecutor};
use crate::hook::HookRegistry;
use crate::notes::NoteStore;
use crate::report::ReportSynthesizer;
use crate::tool::{Registry, Tool, ToolCallRequest, ToolCallResult, ToolDefinition};
use crate::tools::{GenerateReportTool, ListNotesTool, SaveNoteTool};

/// Everything one agent needs to run tool calls.
///
/// Hook callbacks, rate-limit counters and audit entries belong to this
/// session; nothing is shared through globals.
pub struct Session {
    config: Config,
    executor: ToolExecutor,
    rate_limiter: Arc<RateLimiter>,
    audit: Arc<AuditLogger>,
    notes: NoteStore,
    reports: ReportSynthesizer,
}

impl Session {
    /// Build a session with the built-in note and report tools registered.
    pub async fn new(config: Config) -> Self {
        let hooks = Arc::new(HookRegistry::new());

        // The limiter runs first so a rejected call never opens an audit entry.
        let rate_limiter = Arc::new(RateLimiter::new(config.rate_limits.clone()));
        let audit = Arc::new(AuditLogger::new());
        hooks.add_provider(rate_limiter.clone());
        hooks.add_provider(audit.clone());

        let notes = NoteStore::new(&config.notes_dir);
        let reports = ReportSynthesizer::new(&config.reports_dir, notes.clone());

        let tools = Registry::new();
        tools.register(SaveNoteTool::new(notes.clone())).await;
        tools.register(ListNotesTool::new(notes.clone())).await;
        tools.register(GenerateReportTool::new(reports.clone())).await;

        tracing::debug!(
            notes_dir = %config.notes_dir.display(),
            reports_dir = %config.reports_dir.display(),
            limits = config.rate_limits.len(),
            "Session created"
        );

        Self {
            config,
            executor: ToolExecutor::new(tools, hooks),
            rate_limiter,
            audit,
            notes,
            reports,
        }
    }

    /// Register an additional tool, e.g. a web search client.
    pub async fn register_tool<T: Tool + 'static>(&self, tool: T) {
        self.executor.tools().register(tool).await;
    }

    /// Run one invocation: the ordered tool calls of a single agent turn.
    pub async fn invoke(
        &self,
        requests: Vec<ToolCallRequest>,
    ) -> Result<Vec<ToolCallResult>, InvocationError> {
        let invocation = Invocation::new(requests)?;
        self.executor.execute(invocation).await
    }

    /// Tool definitions to offer the model.
    pub async fn tool_definitions(&self) -> Vec<ToolDefinition> {
        self.executor.tools().to_definitions().await
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn hooks(&self) -> &HookRegistry {
        self.executor.hooks()
    }

    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.rate_limiter
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    pub fn notes(&self) -> &NoteStore {
        &self.notes
    }

    pub fn reports(&self) -> &ReportSynthesizer {
        &self.reports
    }
}
