// ABOUTME: File-backed NoteStore - create-only writes, ordered listing, tag filter.
// ABOUTME: Ids come from a shared monotonic clock so concurrent saves never collide.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::Note;
use crate::artifact::write_new;
use crate::error::PersistenceError;
use crate::stamp::StampClock;

/// ISO-8601 UTC rendering of a note's creation time.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

/// Durable note storage rooted at one directory.
///
/// Clones share the id clock, so every handle onto the same store issues
/// distinct ids. A file that already exists (written by another process) is
/// never overwritten; the next id is tried instead. Records appear in the
/// directory only once fully written.
#[derive(Debug, Clone)]
pub struct NoteStore {
    dir: PathBuf,
    clock: Arc<StampClock>,
}

impl NoteStore {
    /// Open a store rooted at `dir`. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            clock: Arc::new(StampClock::new()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Save a note and return its id.
    pub fn save(
        &self,
        topic: &str,
        content: &str,
        tags: Vec<String>,
    ) -> Result<String, PersistenceError> {
        fs::create_dir_all(&self.dir).map_err(|e| PersistenceError::io(&self.dir, e))?;

        loop {
            let (id, stamp) = self.clock.next_id();
            let note = Note {
                id: id.clone(),
                topic: topic.to_string(),
                content: content.to_string(),
                tags: tags.clone(),
                timestamp: stamp.format(TIMESTAMP_FORMAT).to_string(),
            };
            let json = serde_json::to_string_pretty(&note)?;

            if !write_new(&self.dir, &self.note_path(&id), json.as_bytes())? {
                tracing::debug!(%id, "Note id taken, retrying");
                continue;
            }

            tracing::debug!(%id, topic, tags = note.tags.len(), "Note saved");
            return Ok(id);
        }
    }

    /// Load a single note by id.
    pub fn get(&self, id: &str) -> Result<Option<Note>, PersistenceError> {
        let path = self.note_path(id);
        match fs::read_to_string(&path) {
            Ok(contents) => parse(&path, &contents).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PersistenceError::io(path, e)),
        }
    }

    /// List notes in creation order, optionally restricted to one tag.
    ///
    /// A store that was never written to is empty. Any record that cannot
    /// be read or parsed fails the whole listing.
    pub fn list(&self, tag_filter: Option<&str>) -> Result<Vec<Note>, PersistenceError> {
        match fs::metadata(&self.dir) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                return Err(PersistenceError::io(
                    &self.dir,
                    std::io::Error::new(ErrorKind::NotADirectory, "note store is not a directory"),
                ));
            }
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(PersistenceError::io(&self.dir, e)),
        }

        let pattern = format!(
            "{}/*.json",
            glob::Pattern::escape(&self.dir.to_string_lossy())
        );
        let mut paths = Vec::new();
        for entry in glob::glob(&pattern)? {
            match entry {
                Ok(path) => paths.push(path),
                Err(e) => {
                    let path = e.path().to_path_buf();
                    return Err(PersistenceError::io(path, e.into_error()));
                }
            }
        }
        // Ids sort in creation order.
        paths.sort();

        let mut notes = Vec::with_capacity(paths.len());
        for path in paths {
            let contents =
                fs::read_to_string(&path).map_err(|e| PersistenceError::io(&path, e))?;
            let note = parse(&path, &contents)?;
            if tag_filter.is_none_or(|tag| note.has_tag(tag)) {
                notes.push(note);
            }
        }
        Ok(notes)
    }

    fn note_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }
}

fn parse(path: &Path, contents: &str) -> Result<Note, PersistenceError> {
    serde_json::from_str(contents).map_err(|source| PersistenceError::Corrupt {
        path: path.to_path_buf(),
        source,
    })
}
