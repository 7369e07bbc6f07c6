// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Lifecycle of the HTTP server: bind, serve, and graceful shutdown.

use std::{
	net::SocketAddr,
	sync::{
		Arc,
		atomic::{AtomicBool, Ordering},
	},
};

use palcraft_type::{
	Result,
	diagnostic::subsystem::{address_unavailable, bind_failed},
	error,
};
use parking_lot::RwLock;
use tokio::{net::TcpListener, runtime::Handle, sync::oneshot};

use crate::{config::HttpConfig, routes::router, state::AppState};

/// HTTP server subsystem.
///
/// `start` and `shutdown` block the calling thread on the given runtime, so
/// they must not be called from inside that runtime's async context.
pub struct HttpSubsystem {
	config: HttpConfig,
	/// Actual bound address (available after start).
	actual_addr: RwLock<Option<SocketAddr>>,
	state: AppState,
	running: Arc<AtomicBool>,
	shutdown_tx: Option<oneshot::Sender<()>>,
	shutdown_complete_rx: Option<oneshot::Receiver<()>>,
	runtime: Handle,
}

impl HttpSubsystem {
	pub fn new(config: HttpConfig, state: AppState, runtime: Handle) -> Self {
		Self {
			config,
			actual_addr: RwLock::new(None),
			state,
			running: Arc::new(AtomicBool::new(false)),
			shutdown_tx: None,
			shutdown_complete_rx: None,
			runtime,
		}
	}

	pub fn bind_addr(&self) -> &str {
		&self.config.bind_addr
	}

	/// Get the actual bound address (available after start).
	pub fn local_addr(&self) -> Option<SocketAddr> {
		*self.actual_addr.read()
	}

	pub fn port(&self) -> Option<u16> {
		self.local_addr().map(|a| a.port())
	}

	pub fn is_running(&self) -> bool {
		self.running.load(Ordering::SeqCst)
	}

	pub fn start(&mut self) -> Result<()> {
		// Idempotent: if already started, return success
		if self.shutdown_tx.is_some() {
			return Ok(());
		}

		let addr = self.config.bind_addr.clone();
		let listener = self.runtime.block_on(TcpListener::bind(&addr)).map_err(|e| error!(bind_failed(&addr, e)))?;

		let actual_addr = listener.local_addr().map_err(|e| error!(address_unavailable(e)))?;
		*self.actual_addr.write() = Some(actual_addr);
		tracing::info!("HTTP server bound to {}", actual_addr);

		let (shutdown_tx, shutdown_rx) = oneshot::channel();
		let (complete_tx, complete_rx) = oneshot::channel();

		let app = router(self.state.clone(), &self.config);
		let running = self.running.clone();
		running.store(true, Ordering::SeqCst);

		self.runtime.spawn(async move {
			let server = axum::serve(listener, app).with_graceful_shutdown(async {
				shutdown_rx.await.ok();
				tracing::info!("HTTP server received shutdown signal");
			});

			if let Err(e) = server.await {
				tracing::error!("HTTP server error: {}", e);
			}

			running.store(false, Ordering::SeqCst);
			let _ = complete_tx.send(());
			tracing::info!("HTTP server stopped");
		});

		self.shutdown_tx = Some(shutdown_tx);
		self.shutdown_complete_rx = Some(complete_rx);
		Ok(())
	}

	/// Stop accepting connections and wait for in-flight requests to finish.
	pub fn shutdown(&mut self) -> Result<()> {
		if let Some(tx) = self.shutdown_tx.take() {
			let _ = tx.send(());
		}
		if let Some(rx) = self.shutdown_complete_rx.take() {
			let _ = self.runtime.block_on(rx);
		}
		Ok(())
	}
}

impl Drop for HttpSubsystem {
	fn drop(&mut self) {
		if let Some(tx) = self.shutdown_tx.take() {
			let _ = tx.send(());
		}
	}
}
