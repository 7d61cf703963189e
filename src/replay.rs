//! Replaying scope traces.
//!
//! A trace is a recording of the calls a parser makes into the scope
//! handler while it walks one file:
//!
//! ```json
//! {
//!   "sourceType": "module",
//!   "events": [
//!     { "op": "enter", "flags": "PROGRAM | VAR" },
//!     { "op": "export", "name": "x", "at": { "line": 1, "column": 9, "index": 9 } },
//!     { "op": "declare", "name": "x", "binding": "lexical", "at": { "line": 2, "column": 4, "index": 18 } },
//!     { "op": "exit" }
//!   ]
//! }
//! ```
//!
//! Replaying a trace runs the events against a fresh [`ScopeHandler`].
//! Redeclarations become diagnostics and replay continues with the next
//! event; exports still pending at the end are reported after them.

use anyhow::{Context, Result, bail};
use jsscope_common::{Diagnostic, Position, SourceType};
use jsscope_scope::{BindingFlags, ScopeFlags, ScopeHandler, ScopeOptions};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::path::Path;
use tracing::{debug, info_span};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeTrace {
    #[serde(default)]
    pub source_type: SourceType,
    pub events: Vec<TraceEvent>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum TraceEvent {
    Enter {
        flags: ScopeFlags,
    },
    Exit,
    Declare {
        name: String,
        binding: BindingKind,
        #[serde(default)]
        at: Position,
    },
    Export {
        name: String,
        #[serde(default)]
        at: Position,
    },
}

/// The declaration forms a parser reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BindingKind {
    Var,
    Lexical,
    CatchParam,
    Function,
    Class,
    Type,
}

impl BindingKind {
    pub fn flags(self) -> BindingFlags {
        match self {
            BindingKind::Var => BindingFlags::VAR,
            BindingKind::Lexical => BindingFlags::LEXICAL,
            BindingKind::CatchParam => BindingFlags::CATCH_PARAM,
            BindingKind::Function => BindingFlags::FUNCTION,
            BindingKind::Class => BindingFlags::CLASS,
            BindingKind::Type => BindingFlags::TYPE,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReplayOutcome {
    pub diagnostics: Vec<Diagnostic>,
    /// Scopes still open after the last event.
    pub final_depth: usize,
}

impl ReplayOutcome {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

pub fn parse_trace(text: &str) -> Result<ScopeTrace> {
    serde_json::from_str(text).context("invalid scope trace")
}

pub fn load_trace(path: &Path) -> Result<ScopeTrace> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_trace(&text).with_context(|| format!("in {}", path.display()))
}

/// Run `trace` against a fresh handler, reporting against `file`.
///
/// Fails only when the trace itself is malformed: an `exit` with no open
/// scope, or a declaration or export before any scope was entered.
pub fn replay(trace: &ScopeTrace, file: &str) -> Result<ReplayOutcome> {
    let _span = info_span!("replay", file, events = trace.events.len()).entered();

    let mut handler = ScopeHandler::with_options(ScopeOptions {
        source_type: trace.source_type,
    });
    let mut outcome = ReplayOutcome::default();

    for (i, event) in trace.events.iter().enumerate() {
        match event {
            TraceEvent::Enter { flags } => handler.enter(*flags),
            TraceEvent::Exit => {
                if handler.is_empty() {
                    bail!("event {i}: exit with no open scope");
                }
                handler.exit();
            }
            TraceEvent::Declare { name, binding, at } => {
                if handler.is_empty() {
                    bail!("event {i}: declaration of '{name}' outside any scope");
                }
                if let Err(err) = handler.declare_name(name, binding.flags(), *at) {
                    debug!(event = i, %err, "redeclaration");
                    outcome.diagnostics.push(err.to_diagnostic(file));
                }
            }
            TraceEvent::Export { name, at } => {
                if handler.is_empty() {
                    bail!("event {i}: export of '{name}' outside any scope");
                }
                handler.register_potential_export(name, *at);
            }
        }
    }

    outcome
        .diagnostics
        .extend(handler.undefined_export_diagnostics(file));
    outcome.final_depth = handler.depth();
    Ok(outcome)
}

/// Render diagnostics one per line as `file(start): error JS<code>: message`.
pub fn render_text(diagnostics: &[Diagnostic]) -> String {
    let mut out = String::new();
    for diag in diagnostics {
        let _ = writeln!(
            out,
            "{}({}): error JS{}: {}",
            diag.file, diag.start, diag.code, diag.message_text
        );
    }
    out
}
