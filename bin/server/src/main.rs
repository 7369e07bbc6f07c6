// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod config;

use std::process::ExitCode;

use config::ServerConfig;
use palcraft_crafting::schema;
use palcraft_engine::Engine;
use palcraft_sqlite::Sqlite;
use palcraft_sub_server_http::{AppState, HttpSubsystem};
use palcraft_sub_tracing::TracingSubsystemFactory;
use palcraft_type::{Result, diagnostic::internal::internal, error};
use tokio::runtime::{Builder, Runtime};

fn runtime() -> Result<Runtime> {
	Builder::new_multi_thread()
		.enable_all()
		.thread_name("palcraft")
		.build()
		.map_err(|e| error!(internal(format!("failed to build runtime: {}", e))))
}

fn run(config: ServerConfig) -> Result<()> {
	let filter = config.log_filter.clone();
	let format = config.log_format;
	let subscriber = TracingSubsystemFactory::with_configurator(move |builder| {
		builder.with_filter(filter).with_format(format)
	})
	.create();
	subscriber.start()?;

	let runtime = runtime()?;

	let storage = Sqlite::new(config.sqlite())?;
	tracing::info!("opened database at {}", storage.path().display());

	schema::bootstrap(&storage)?;
	if config.seed && schema::seed(&storage)? {
		tracing::info!("seeded crafting data");
	}

	let state = AppState::new(Engine::new(storage));
	let mut http = HttpSubsystem::new(config.http, state, runtime.handle().clone());
	http.start()?;

	if let Err(e) = runtime.block_on(tokio::signal::ctrl_c()) {
		tracing::error!("failed to listen for shutdown signal: {}", e);
	}

	tracing::info!("shutting down");
	http.shutdown()
}

fn main() -> ExitCode {
	let result = ServerConfig::from_env().and_then(run);
	match result {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			eprintln!("{}", err);
			ExitCode::FAILURE
		}
	}
}
