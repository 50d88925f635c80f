//! # scratch CLI entry point
//!
//! Parses flags, wires one store, one application scope and one workflow,
//! then reads commands from stdin until `quit` or end of input.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use scratch_cli::args::Cli;
use scratch_cli::render;
use scratch_cli::repl::{Command, Reply, Session, HELP};
use scratch_state::CardStateStore;
use scratch_workflow::{ActivationWorkflow, ApplicationScope};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.with_target(false).init();
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let oracle = cli.build_oracle().context("building version oracle")?;
    let config = cli.workflow_config().context("reading workflow configuration")?;
    let scope = ApplicationScope::current()?;
    tracing::info!(oracle = %oracle, reveal_delay = ?config.reveal_delay, "scratch starting");

    let store = CardStateStore::new();
    let workflow = ActivationWorkflow::new(store.clone(), oracle, scope.clone()).with_config(config);

    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let renderer = render::spawn_renderer(store.stream(), events_rx);
    let mut session = Session::new(workflow, events_tx);

    println!("{HELP}");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };
        match session.execute(command) {
            Reply::Text(text) => println!("{text}"),
            Reply::Silent => {}
            Reply::Quit => break,
        }
    }

    if !scope.is_closed() {
        scope.shutdown();
    }
    drop(session);
    renderer.abort();
    Ok(())
}
