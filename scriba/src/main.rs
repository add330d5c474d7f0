//! transcribe - single-shot media transcription CLI.
//!
//! Exit code 0 with an `ok: true` document on success, exit code 1 with an
//! `ok: false` document on any failure. Every path emits exactly one JSON
//! document on stdout; logs go to stderr.

use clap::Parser;
use scriba::cli::{Cli, Config};
use scriba::{job, output};
use std::io;
use tracing_subscriber::EnvFilter;

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    let (non_blocking, _guard) = tracing_appender::non_blocking(io::stderr());

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Outer catch-all: no path may exit without writing a JSON document.
    let outcome = std::panic::catch_unwind(|| {
        let config = Config::try_from(Cli::parse())?;
        job::run(config)
    });

    let stdout = io::stdout().lock();

    match outcome {
        Ok(Ok(transcript)) => match output::write_success(stdout, &transcript) {
            Ok(()) => 0,
            Err(e) => {
                tracing::error!(error = %e, "failed to write result");
                1
            }
        },
        Ok(Err(report)) => {
            tracing::error!(error = %report, "transcription failed");
            let _ = output::write_error(stdout, &format!("{report:#}"));
            1
        }
        Err(panic) => {
            let _ = output::write_error(stdout, &panic_message(panic));
            1
        }
    }
}

fn panic_message(panic: Box<dyn std::any::Any + Send>) -> String {
    if let Some(msg) = panic.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unexpected internal fault".to_string()
    }
}
