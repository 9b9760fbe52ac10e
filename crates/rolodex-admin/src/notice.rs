//! Transient user notices.
//!
//! Operations report success and failure here instead of talking to a
//! toast widget directly. The UI drains the log after each event and
//! displays whatever accumulated.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
	Success,
	Error,
}

/// One user-visible message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
	pub level: NoticeLevel,
	pub message: String,
}

impl Notice {
	/// Builds a success notice.
	pub fn success(message: impl Into<String>) -> Self {
		Self {
			level: NoticeLevel::Success,
			message: message.into(),
		}
	}

	/// Builds an error notice.
	pub fn error(message: impl Into<String>) -> Self {
		Self {
			level: NoticeLevel::Error,
			message: message.into(),
		}
	}
}

/// Shared, append-only queue of pending notices.
#[derive(Default)]
pub struct NoticeLog {
	entries: Mutex<Vec<Notice>>,
}

impl NoticeLog {
	/// Creates an empty log.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a notice.
	pub fn push(&self, notice: Notice) {
		self.entries.lock().push(notice);
	}

	/// Appends a success notice.
	pub fn success(&self, message: impl Into<String>) {
		self.push(Notice::success(message));
	}

	/// Appends an error notice.
	pub fn error(&self, message: impl Into<String>) {
		self.push(Notice::error(message));
	}

	/// Takes every pending notice, oldest first.
	pub fn drain(&self) -> Vec<Notice> {
		std::mem::take(&mut *self.entries.lock())
	}

	/// Returns `true` when nothing is pending.
	pub fn is_empty(&self) -> bool {
		self.entries.lock().is_empty()
	}
}
