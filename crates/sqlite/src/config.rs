// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	path::{Path, PathBuf},
	time::Duration,
};

/// Where the database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbPath {
	File(PathBuf),
	Memory,
}

impl DbPath {
	pub fn display(&self) -> String {
		match self {
			DbPath::File(path) => path.display().to_string(),
			DbPath::Memory => ":memory:".to_string(),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JournalMode {
	Delete,
	Truncate,
	Persist,
	Memory,
	Wal,
	Off,
}

impl JournalMode {
	pub fn as_str(&self) -> &'static str {
		match self {
			JournalMode::Delete => "DELETE",
			JournalMode::Truncate => "TRUNCATE",
			JournalMode::Persist => "PERSIST",
			JournalMode::Memory => "MEMORY",
			JournalMode::Wal => "WAL",
			JournalMode::Off => "OFF",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SynchronousMode {
	Off,
	Normal,
	Full,
	Extra,
}

impl SynchronousMode {
	pub fn as_str(&self) -> &'static str {
		match self {
			SynchronousMode::Off => "OFF",
			SynchronousMode::Normal => "NORMAL",
			SynchronousMode::Full => "FULL",
			SynchronousMode::Extra => "EXTRA",
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenFlags {
	pub read_write: bool,
	pub create: bool,
	pub full_mutex: bool,
	pub no_mutex: bool,
	pub uri: bool,
}

impl Default for OpenFlags {
	fn default() -> Self {
		Self {
			read_write: true,
			create: true,
			full_mutex: true,
			no_mutex: false,
			uri: false,
		}
	}
}

/// Connection settings for [`Sqlite`](crate::Sqlite).
#[derive(Debug, Clone)]
pub struct SqliteConfig {
	pub path: DbPath,
	pub flags: OpenFlags,
	pub journal_mode: JournalMode,
	pub synchronous_mode: SynchronousMode,
	pub foreign_keys: bool,
	pub busy_timeout: Duration,
}

impl SqliteConfig {
	pub fn new(path: impl AsRef<Path>) -> Self {
		Self {
			path: DbPath::File(path.as_ref().to_path_buf()),
			flags: OpenFlags::default(),
			journal_mode: JournalMode::Wal,
			synchronous_mode: SynchronousMode::Normal,
			foreign_keys: true,
			busy_timeout: Duration::from_secs(5),
		}
	}

	pub fn in_memory() -> Self {
		Self {
			path: DbPath::Memory,
			flags: OpenFlags::default(),
			journal_mode: JournalMode::Memory,
			synchronous_mode: SynchronousMode::Off,
			foreign_keys: true,
			busy_timeout: Duration::from_secs(5),
		}
	}

	pub fn flags(mut self, flags: OpenFlags) -> Self {
		self.flags = flags;
		self
	}

	pub fn journal_mode(mut self, mode: JournalMode) -> Self {
		self.journal_mode = mode;
		self
	}

	pub fn synchronous_mode(mut self, mode: SynchronousMode) -> Self {
		self.synchronous_mode = mode;
		self
	}

	pub fn foreign_keys(mut self, enabled: bool) -> Self {
		self.foreign_keys = enabled;
		self
	}

	pub fn busy_timeout(mut self, timeout: Duration) -> Self {
		self.busy_timeout = timeout;
		self
	}
}

impl Default for SqliteConfig {
	fn default() -> Self {
		Self::in_memory()
	}
}
