//! Flat-file task store.
//!
//! # Responsibility
//! - Hold the ordered in-memory task sequence for one session.
//! - Load and save the whole sequence against one JSON backing file.
//!
//! # Invariants
//! - Record identity is the current zero-based position; deleting index `i`
//!   shifts every later record one position left.
//! - `save` always serializes the full sequence; there are no partial writes.
//! - A failed `load` leaves the current in-memory sequence untouched, so the
//!   caller can keep running with it.

use crate::model::task::{Priority, Task};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for persistence and index-addressed operations.
#[derive(Debug)]
pub enum StoreError {
    /// Backing file could not be read or written.
    Io(io::Error),
    /// Backing file contents do not match the task-list schema.
    Decode(serde_json::Error),
    /// Requested index is outside the current sequence bounds.
    IndexOutOfRange { index: usize, len: usize },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "backing file access failed: {err}"),
            Self::Decode(err) => write!(f, "backing file is not a valid task list: {err}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "task index {index} is out of range for {len} task(s)")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Decode(err) => Some(err),
            Self::IndexOutOfRange { .. } => None,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}

/// Ordered task collection bound to one backing file.
///
/// The store is the single mutation owner: the session constructs it once,
/// loads it once, and drives every change through it. Each of `create`,
/// `toggle_done`, `delete` and `clear` persists the full sequence before
/// returning, so the file trails memory by at most one failed write.
pub struct TaskStore {
    tasks: Vec<Task>,
    path: PathBuf,
}

impl TaskStore {
    /// Creates an empty store bound to `path`. No file access happens here.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            tasks: Vec::new(),
            path: path.into(),
        }
    }

    /// Replaces the in-memory sequence with the backing file's contents.
    ///
    /// A missing file is a clean first run: the sequence becomes empty and
    /// `Ok(())` is returned.
    ///
    /// # Errors
    /// - `StoreError::Io` when the file exists but cannot be read.
    /// - `StoreError::Decode` when the contents are not a task list.
    ///
    /// Both error cases leave the current sequence untouched.
    pub fn load(&mut self) -> StoreResult<()> {
        let started_at = Instant::now();

        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!(
                    "event=store_load module=store status=ok file={} count=0 note=missing_file",
                    self.path.display()
                );
                self.tasks.clear();
                return Ok(());
            }
            Err(err) => {
                error!(
                    "event=store_load module=store status=error file={} error={err}",
                    self.path.display()
                );
                return Err(err.into());
            }
        };

        let tasks: Vec<Task> = match serde_json::from_slice(&raw) {
            Ok(tasks) => tasks,
            Err(err) => {
                error!(
                    "event=store_load module=store status=error file={} error={err}",
                    self.path.display()
                );
                return Err(err.into());
            }
        };

        info!(
            "event=store_load module=store status=ok file={} count={} duration_ms={}",
            self.path.display(),
            tasks.len(),
            started_at.elapsed().as_millis()
        );
        self.tasks = tasks;
        Ok(())
    }

    /// Serializes the full sequence as indented JSON and rewrites the
    /// backing file.
    ///
    /// # Errors
    /// - `StoreError::Io` when the file cannot be written. The write is not
    ///   retried; the in-memory sequence stays authoritative and the file
    ///   may now be stale.
    pub fn save(&self) -> StoreResult<()> {
        let started_at = Instant::now();
        let encoded = serde_json::to_string_pretty(&self.tasks)?;

        match fs::write(&self.path, encoded) {
            Ok(()) => {
                info!(
                    "event=store_save module=store status=ok file={} count={} duration_ms={}",
                    self.path.display(),
                    self.tasks.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_save module=store status=error file={} error={err}",
                    self.path.display()
                );
                Err(err.into())
            }
        }
    }

    /// Appends a new not-done task and persists the sequence.
    ///
    /// Returns the appended record's index. Insertion order is creation
    /// order, so this is always the last position.
    ///
    /// # Contract
    /// - `due_date` has already passed boundary validation (`""` or a real
    ///   `YYYY-MM-DD` date).
    ///
    /// # Errors
    /// - `StoreError::Io` when persisting fails; the record stays appended
    ///   in memory.
    pub fn create(
        &mut self,
        name: impl Into<String>,
        priority: Priority,
        due_date: impl Into<String>,
    ) -> StoreResult<usize> {
        self.tasks.push(Task::new(name, priority, due_date));
        self.save()?;
        Ok(self.tasks.len() - 1)
    }

    /// Returns the record at `index`.
    ///
    /// # Errors
    /// - `StoreError::IndexOutOfRange` when `index >= len`; no side effects.
    pub fn get(&self, index: usize) -> StoreResult<&Task> {
        self.tasks.get(index).ok_or(StoreError::IndexOutOfRange {
            index,
            len: self.tasks.len(),
        })
    }

    /// Flips the completion flag at `index` and persists the sequence.
    ///
    /// # Errors
    /// - `StoreError::IndexOutOfRange`: no mutation, no file write.
    /// - `StoreError::Io`: the flag is already flipped in memory; the file
    ///   may now be stale.
    pub fn toggle_done(&mut self, index: usize) -> StoreResult<()> {
        let len = self.tasks.len();
        let task = self
            .tasks
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange { index, len })?;
        task.done = !task.done;
        self.save()
    }

    /// Removes the record at `index`, shifting later records left, persists
    /// the sequence, and returns the removed record.
    ///
    /// # Errors
    /// - `StoreError::IndexOutOfRange`: no mutation, no file write.
    /// - `StoreError::Io`: the record is already removed from memory; the
    ///   file may now be stale.
    pub fn delete(&mut self, index: usize) -> StoreResult<Task> {
        if index >= self.tasks.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: self.tasks.len(),
            });
        }
        let removed = self.tasks.remove(index);
        self.save()?;
        Ok(removed)
    }

    /// Empties the sequence and persists it. Idempotent.
    ///
    /// # Errors
    /// - `StoreError::Io` when persisting fails.
    pub fn clear(&mut self) -> StoreResult<()> {
        self.tasks.clear();
        self.save()
    }

    /// Current records in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Backing file this store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
