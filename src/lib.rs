// ABOUTME: Root module for quill - tool-call coordination for research agents.
// ABOUTME: Re-exports all public types from submodules.

mod artifact;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod executor;
pub mod hook;
pub mod notes;
pub mod prelude;
pub mod report;
pub mod research;
pub mod session;
pub mod stamp;
pub mod telemetry;
pub mod tool;
pub mod tools;

pub use error::QuillError;
