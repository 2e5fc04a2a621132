//! # Commit Queue
//!
//! Owner notifications are never delivered from inside a mutating call.
//! Mutations enqueue the updated document; [`CommitQueue::flush`] hands them
//! to the listener once the caller decides the mutation phase is over.
//!
//! ```text
//! apply_node_changes ──▶ queue ──(commit)──▶ on_change(&Document)
//! ```

use flowcanvas_model::Document;
use std::collections::VecDeque;
use tracing::debug;

/// Callback receiving each committed document
pub type ChangeListener = Box<dyn FnMut(&Document)>;

/// A document waiting to be delivered
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Session version the document was produced at
    pub version: u64,
    pub document: Document,
}

#[derive(Debug, Default)]
pub struct CommitQueue {
    pending: VecDeque<Notification>,
}

impl CommitQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, version: u64, document: Document) {
        debug!(version, queued = self.pending.len() + 1, "Scheduled change notification");
        self.pending.push_back(Notification { version, document });
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Deliver every queued notification in order, returning how many ran
    pub fn flush(&mut self, listener: &mut dyn FnMut(&Document)) -> usize {
        let mut delivered = 0;
        while let Some(notification) = self.pending.pop_front() {
            listener(&notification.document);
            delivered += 1;
        }
        delivered
    }

    /// Hand the queued notifications to the caller instead of a listener
    pub fn drain(&mut self) -> Vec<Notification> {
        self.pending.drain(..).collect()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
