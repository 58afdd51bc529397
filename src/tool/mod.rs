// ABOUTME: Tool module - defines tools, registry, call envelopes, and payloads.
// ABOUTME: Core abstraction for agent capabilities.

mod call;
mod payload;
mod registry;
mod result;
mod traits;

pub use call::*;
pub use payload::*;
pub use registry::*;
pub use result::*;
pub use traits::*;

#[cfg(test)]
mod registry_test;
