//! Bounded undo/redo history
//!
//! Two flavours of history share the [`History`] trait:
//!
//! - [`SnapshotHistory`] stores whole-buffer snapshots. Undo swaps the
//!   current text for the most recent snapshot.
//! - [`CharHistory`] stores single characters typed or deleted at the end
//!   of the buffer, and a snapshot for any other kind of edit.
//!
//! Both keep their undo and redo stacks in a [`BoundedStack`], which drops
//! the oldest entry once the configured depth is reached.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Default number of entries kept on each stack
pub const DEFAULT_HISTORY_DEPTH: usize = 6;

/// Which history flavour the session uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryMode {
    /// Whole-buffer snapshots
    #[default]
    Snapshot,
    /// Individual characters at the end of the buffer
    Character,
}

/// A LIFO stack with a fixed capacity.
///
/// Pushing onto a full stack evicts the oldest entry first.
#[derive(Debug, Clone)]
pub struct BoundedStack<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    /// Create an empty stack holding at most `capacity` entries.
    ///
    /// A capacity of zero is bumped to one so the stack can always hold the
    /// most recent entry.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push an entry, returning the evicted oldest entry if the stack was full
    pub fn push(&mut self, entry: T) -> Option<T> {
        let evicted = if self.entries.len() >= self.capacity {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(entry);
        evicted
    }

    pub fn pop(&mut self) -> Option<T> {
        self.entries.pop_back()
    }

    pub fn peek(&self) -> Option<&T> {
        self.entries.back()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate from oldest to most recent
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }
}

/// Undo/redo bookkeeping for a single text buffer.
///
/// `record_edit` is called once per edit with the text before and after
/// it. `undo` and `redo` rewrite `buffer` in place and return whether
/// anything changed.
pub trait History: std::fmt::Debug {
    /// Remember an edit that turned `before` into `after`
    fn record_edit(&mut self, before: &str, after: &str);

    /// Step back one entry. No-op on an empty undo stack.
    fn undo(&mut self, buffer: &mut String) -> bool;

    /// Step forward one entry. No-op on an empty redo stack.
    fn redo(&mut self, buffer: &mut String) -> bool;

    /// Drop every redo entry
    fn clear_redo(&mut self);

    /// Drop both stacks
    fn clear(&mut self);

    fn undo_len(&self) -> usize;

    fn redo_len(&self) -> usize;

    /// Maximum entries per stack
    fn capacity(&self) -> usize;

    fn mode(&self) -> HistoryMode;

    fn can_undo(&self) -> bool {
        self.undo_len() > 0
    }

    fn can_redo(&self) -> bool {
        self.redo_len() > 0
    }
}

/// Build a boxed history of the requested flavour
pub fn new_history(mode: HistoryMode, depth: usize) -> Box<dyn History> {
    match mode {
        HistoryMode::Snapshot => Box::new(SnapshotHistory::new(depth)),
        HistoryMode::Character => Box::new(CharHistory::new(depth)),
    }
}

/// History made of whole-buffer snapshots
#[derive(Debug, Clone)]
pub struct SnapshotHistory {
    undo_stack: BoundedStack<String>,
    redo_stack: BoundedStack<String>,
}

impl SnapshotHistory {
    pub fn new(depth: usize) -> Self {
        Self {
            undo_stack: BoundedStack::new(depth),
            redo_stack: BoundedStack::new(depth),
        }
    }
}

impl Default for SnapshotHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_DEPTH)
    }
}

impl History for SnapshotHistory {
    fn record_edit(&mut self, before: &str, _after: &str) {
        // Identical consecutive snapshots would make undo look like a no-op
        if self.undo_stack.peek().map(String::as_str) == Some(before) {
            return;
        }
        if self.undo_stack.push(before.to_string()).is_some() {
            tracing::trace!("Undo stack full, dropped oldest snapshot");
        }
    }

    fn undo(&mut self, buffer: &mut String) -> bool {
        let Some(previous) = self.undo_stack.pop() else {
            return false;
        };
        let current = std::mem::replace(buffer, previous);
        self.redo_stack.push(current);
        tracing::debug!(
            "Undo: undo_len={}, redo_len={}",
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        true
    }

    fn redo(&mut self, buffer: &mut String) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        let current = std::mem::replace(buffer, next);
        self.undo_stack.push(current);
        tracing::debug!(
            "Redo: undo_len={}, redo_len={}",
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        true
    }

    fn clear_redo(&mut self) {
        self.redo_stack.clear();
    }

    fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    fn capacity(&self) -> usize {
        self.undo_stack.capacity()
    }

    fn mode(&self) -> HistoryMode {
        HistoryMode::Snapshot
    }
}

/// One step of character history
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharStep {
    /// A character was appended to the end of the buffer
    Append(char),
    /// The trailing character was removed
    Remove(char),
    /// Any other edit: the whole text on the far side of the step
    Snapshot(String),
}

impl CharStep {
    /// Classify the edit that turned `before` into `after`
    fn between(before: &str, after: &str) -> Self {
        if let Some(added) = after.strip_prefix(before) {
            let mut chars = added.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                return CharStep::Append(c);
            }
        }
        if let Some(removed) = before.strip_prefix(after) {
            let mut chars = removed.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                return CharStep::Remove(c);
            }
        }
        CharStep::Snapshot(before.to_string())
    }

    /// Whether `buffer` ends the way this step left it
    fn can_undo(&self, buffer: &str) -> bool {
        match self {
            CharStep::Append(c) => buffer.ends_with(*c),
            CharStep::Remove(_) | CharStep::Snapshot(_) => true,
        }
    }

    /// Whether `buffer` ends the way undoing this step left it
    fn can_redo(&self, buffer: &str) -> bool {
        match self {
            CharStep::Remove(c) => buffer.ends_with(*c),
            CharStep::Append(_) | CharStep::Snapshot(_) => true,
        }
    }

    /// Undo the step in `buffer`, returning the step that redoes it
    fn undo(self, buffer: &mut String) -> Self {
        match self {
            CharStep::Append(c) => {
                buffer.pop();
                CharStep::Append(c)
            }
            CharStep::Remove(c) => {
                buffer.push(c);
                CharStep::Remove(c)
            }
            CharStep::Snapshot(text) => CharStep::Snapshot(std::mem::replace(buffer, text)),
        }
    }

    /// Redo the step in `buffer`, returning the step that undoes it
    fn redo(self, buffer: &mut String) -> Self {
        match self {
            CharStep::Append(c) => {
                buffer.push(c);
                CharStep::Append(c)
            }
            CharStep::Remove(c) => {
                buffer.pop();
                CharStep::Remove(c)
            }
            CharStep::Snapshot(text) => CharStep::Snapshot(std::mem::replace(buffer, text)),
        }
    }
}

/// History made of trailing characters.
///
/// Typing or deleting a single character at the end of the buffer is
/// stored as that character. Every other edit falls back to a snapshot of
/// the text before it, so undo only ever reverts what was recorded.
#[derive(Debug, Clone)]
pub struct CharHistory {
    undo_stack: BoundedStack<CharStep>,
    redo_stack: BoundedStack<CharStep>,
}

impl CharHistory {
    pub fn new(depth: usize) -> Self {
        Self {
            undo_stack: BoundedStack::new(depth),
            redo_stack: BoundedStack::new(depth),
        }
    }
}

impl Default for CharHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_DEPTH)
    }
}

impl History for CharHistory {
    fn record_edit(&mut self, before: &str, after: &str) {
        if before == after {
            return;
        }
        let step = CharStep::between(before, after);
        tracing::trace!("Recorded {:?}", step);
        self.undo_stack.push(step);
    }

    fn undo(&mut self, buffer: &mut String) -> bool {
        match self.undo_stack.peek() {
            Some(step) if step.can_undo(buffer) => {}
            Some(step) => {
                tracing::debug!("Buffer no longer matches {:?}, undo skipped", step);
                return false;
            }
            None => return false,
        }
        let Some(step) = self.undo_stack.pop() else {
            return false;
        };
        let redo = step.undo(buffer);
        tracing::debug!("Undo {:?}", redo);
        self.redo_stack.push(redo);
        true
    }

    fn redo(&mut self, buffer: &mut String) -> bool {
        match self.redo_stack.peek() {
            Some(step) if step.can_redo(buffer) => {}
            Some(step) => {
                tracing::debug!("Buffer no longer matches {:?}, redo skipped", step);
                return false;
            }
            None => return false,
        }
        let Some(step) = self.redo_stack.pop() else {
            return false;
        };
        let undo = step.redo(buffer);
        tracing::debug!("Redo {:?}", undo);
        self.undo_stack.push(undo);
        true
    }

    fn clear_redo(&mut self) {
        self.redo_stack.clear();
    }

    fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    fn capacity(&self) -> usize {
        self.undo_stack.capacity()
    }

    fn mode(&self) -> HistoryMode {
        HistoryMode::Character
    }
}
