//! Notification queue
//!
//! Bounded FIFO; pushing onto a full queue drops the oldest entry.

use std::collections::VecDeque;
use serde::{Deserialize, Serialize};

pub type NotificationId = u64;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub message: String,
    pub level: NotificationLevel,
    pub created_ms: f64,
    /// Lifetime in ms; `None` stays until dismissed
    pub ttl_ms: Option<f64>,
    pub read: bool,
}

impl Notification {
    #[inline]
    pub fn is_expired(&self, now_ms: f64) -> bool {
        self.ttl_ms.is_some_and(|ttl| now_ms - self.created_ms >= ttl)
    }
}

pub struct NotificationCenter {
    queue: VecDeque<Notification>,
    capacity: usize,
    /// Lifetime applied by `push` (0 = sticky)
    default_ttl_ms: f64,
    next_id: NotificationId,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(20, 6000.0)
    }
}

impl NotificationCenter {
    pub fn new(capacity: usize, default_ttl_ms: f64) -> Self {
        Self {
            queue: VecDeque::new(),
            capacity: capacity.max(1),
            default_ttl_ms,
            next_id: 1,
        }
    }

    /// Queue a notification with the default lifetime
    pub fn push(
        &mut self,
        level: NotificationLevel,
        title: impl Into<String>,
        message: impl Into<String>,
        now_ms: f64,
    ) -> NotificationId {
        let ttl = (self.default_ttl_ms > 0.0).then_some(self.default_ttl_ms);
        self.push_with_ttl(level, title, message, now_ms, ttl)
    }

    pub fn push_with_ttl(
        &mut self,
        level: NotificationLevel,
        title: impl Into<String>,
        message: impl Into<String>,
        now_ms: f64,
        ttl_ms: Option<f64>,
    ) -> NotificationId {
        let id = self.next_id;
        self.next_id += 1;

        while self.queue.len() >= self.capacity {
            self.queue.pop_front();
        }
        self.queue.push_back(Notification {
            id,
            title: title.into(),
            message: message.into(),
            level,
            created_ms: now_ms,
            ttl_ms,
            read: false,
        });
        id
    }

    /// Remove one notification; returns whether it existed
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.queue.len();
        self.queue.retain(|n| n.id != id);
        self.queue.len() != before
    }

    pub fn mark_read(&mut self, id: NotificationId) {
        if let Some(n) = self.queue.iter_mut().find(|n| n.id == id) {
            n.read = true;
        }
    }

    pub fn mark_all_read(&mut self) {
        for n in &mut self.queue {
            n.read = true;
        }
    }

    pub fn unread_count(&self) -> usize {
        self.queue.iter().filter(|n| !n.read).count()
    }

    /// Drop expired notifications, returning how many were removed
    pub fn expire(&mut self, now_ms: f64) -> usize {
        let before = self.queue.len();
        self.queue.retain(|n| !n.is_expired(now_ms));
        before - self.queue.len()
    }

    /// Newest first, at most `n`
    pub fn latest(&self, n: usize) -> Vec<&Notification> {
        self.queue.iter().rev().take(n).collect()
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.queue.iter().find(|n| n.id == id)
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
