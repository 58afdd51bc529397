// ABOUTME: Coordinator module - lifecycle subscribers that govern tool execution.
// ABOUTME: Contains the per-invocation rate limiter and the audit logger.

mod audit;
mod rate_limiter;

pub use audit::AuditLogger;
pub use rate_limiter::RateLimiter;
