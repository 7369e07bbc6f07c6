// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::Write;

use crate::Diagnostic;

pub struct DefaultRenderer;

impl DefaultRenderer {
	pub fn render_string(d: &Diagnostic) -> String {
		let mut output = String::new();
		Self::render(&mut output, d);
		output
	}

	fn render(output: &mut String, d: &Diagnostic) {
		let _ = write!(output, "error[{}]: {}", d.code, d.message);

		if let Some(statement) = &d.statement {
			let _ = write!(output, "\n  --> {}", statement);
		}

		if let Some(label) = &d.label {
			let _ = write!(output, "\n   = {}", label);
		}

		if let Some(help) = &d.help {
			let _ = write!(output, "\nhelp: {}", help);
		}

		for note in &d.notes {
			let _ = write!(output, "\nnote: {}", note);
		}

		if let Some(cause) = &d.cause {
			output.push_str("\ncaused by:\n");
			Self::render(output, cause);
		}
	}
}
