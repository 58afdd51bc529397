// ABOUTME: Executor module - runs an invocation's tool calls concurrently.
// ABOUTME: Fires lifecycle hooks around each call and keeps request order.

mod executor;
mod invocation;

pub use executor::ToolExecutor;
pub use invocation::Invocation;
