use anyhow::Result;
use clap::Parser;
use jsscope::SourceType;
use jsscope::replay::{load_trace, render_text, replay};
use std::path::PathBuf;

/// Exit status when the trace replayed cleanly.
const EXIT_SUCCESS: i32 = 0;
/// Exit status when redeclarations or undefined exports were reported.
const EXIT_DIAGNOSTICS: i32 = 1;

#[derive(Parser, Debug)]
#[command(
    name = "jsscope-replay",
    version,
    about = "Replay a recorded scope trace and report redeclarations"
)]
struct Args {
    /// Scope trace (JSON) to replay
    trace: PathBuf,

    /// Treat the trace as module code regardless of its `sourceType`
    #[arg(long, conflicts_with = "script")]
    module: bool,

    /// Treat the trace as script code regardless of its `sourceType`
    #[arg(long)]
    script: bool,

    /// Print diagnostics as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Initialize tracing if JSSCOPE_LOG or RUST_LOG is set (zero cost otherwise).
    jsscope::tracing_config::init_tracing();

    let args = Args::parse();
    let mut trace = load_trace(&args.trace)?;
    if args.module {
        trace.source_type = SourceType::Module;
    } else if args.script {
        trace.source_type = SourceType::Script;
    }

    let file = args.trace.display().to_string();
    let outcome = replay(&trace, &file)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome.diagnostics)?);
    } else {
        print!("{}", render_text(&outcome.diagnostics));
    }

    std::process::exit(if outcome.has_errors() {
        EXIT_DIAGNOSTICS
    } else {
        EXIT_SUCCESS
    });
}
