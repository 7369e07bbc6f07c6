// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fs;

use palcraft_type::{Result, diagnostic::store::open_failed, error};
use rusqlite::Connection;

use crate::{DbPath, OpenFlags, SqliteConfig};

pub(crate) fn convert_flags(flags: &OpenFlags) -> rusqlite::OpenFlags {
	let mut rusqlite_flags = rusqlite::OpenFlags::empty();

	if flags.read_write {
		rusqlite_flags |= rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE;
	} else {
		rusqlite_flags |= rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY;
	}

	if flags.create {
		rusqlite_flags |= rusqlite::OpenFlags::SQLITE_OPEN_CREATE;
	}

	if flags.full_mutex {
		rusqlite_flags |= rusqlite::OpenFlags::SQLITE_OPEN_FULL_MUTEX;
	}

	if flags.no_mutex {
		rusqlite_flags |= rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX;
	}

	if flags.uri {
		rusqlite_flags |= rusqlite::OpenFlags::SQLITE_OPEN_URI;
	}

	rusqlite_flags
}

/// Open a connection and apply the configured pragmas.
pub(crate) fn connect(config: &SqliteConfig) -> Result<Connection> {
	let location = config.path.display();
	let fail = |e: &dyn std::fmt::Display| error!(open_failed(&location, e.to_string()));

	let conn = match &config.path {
		DbPath::File(path) => {
			if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
				fs::create_dir_all(dir).map_err(|e| fail(&e))?;
			}
			Connection::open_with_flags(path, convert_flags(&config.flags)).map_err(|e| fail(&e))?
		}
		DbPath::Memory => Connection::open_in_memory_with_flags(convert_flags(&config.flags)).map_err(|e| fail(&e))?,
	};

	conn.busy_timeout(config.busy_timeout).map_err(|e| fail(&e))?;
	conn.pragma_update(None, "journal_mode", config.journal_mode.as_str()).map_err(|e| fail(&e))?;
	conn.pragma_update(None, "synchronous", config.synchronous_mode.as_str()).map_err(|e| fail(&e))?;
	conn.pragma_update(None, "foreign_keys", config.foreign_keys).map_err(|e| fail(&e))?;

	Ok(conn)
}
