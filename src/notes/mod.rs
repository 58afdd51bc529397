// ABOUTME: Note store module - durable, append-only research notes.
// ABOUTME: One JSON file per note, listed in creation order with tag filtering.

mod note;
mod store;

pub use note::{Note, PREVIEW_CHARS, render_listing};
pub use store::NoteStore;
