//! Application entry: runtime, gate startup and the shell loop.

use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, info_span, warn, Instrument};
use px_app::{AppAccessGate, ToggleBiometricError};
use px_core::{config::AppConfig, session::UserRef};
use px_infra::InMemorySessionProvider;

use super::wiring::{wire_dependencies, AppDeps};
use crate::shell::{describe, render_status, ConsoleThemeApplier, ShellCommand, HELP};

/// Runs the gate and the console shell on a single-threaded runtime until
/// `quit` or end of input.
pub fn run_app(config: AppConfig, user: Option<String>) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;

    runtime.block_on(run_shell(config, user).instrument(info_span!("proxplore.run")))
}

async fn run_shell(config: AppConfig, user: Option<String>) -> anyhow::Result<()> {
    let AppDeps { gate, session } = wire_dependencies(&config, Arc::new(ConsoleThemeApplier));

    match user {
        Some(name) => session.sign_in(UserRef::new(name)),
        None => session.sign_out(),
    }

    let renderer = spawn_renderer(&gate);
    let listener = gate.spawn_session_listener();
    let startup = {
        let gate = Arc::clone(&gate);
        tokio::spawn(async move {
            gate.initialize().await;
        })
    };

    println!("{HELP}");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        let command = match ShellCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        if !handle_command(&gate, &session, command).await {
            break;
        }
    }

    info!("shell closed");
    gate.cancel_pending();
    startup.abort();
    listener.abort();
    renderer.abort();
    Ok(())
}

/// Returns `false` when the shell should exit.
async fn handle_command(
    gate: &Arc<AppAccessGate>,
    session: &InMemorySessionProvider,
    command: ShellCommand,
) -> bool {
    match command {
        ShellCommand::Login(name) => session.sign_in(UserRef::new(name)),
        ShellCommand::Logout => session.sign_out(),
        ShellCommand::Unlock => {
            let gate = Arc::clone(gate);
            tokio::spawn(async move {
                gate.authenticate().await;
            });
        }
        ShellCommand::Theme => {
            gate.toggle_theme().await;
        }
        ShellCommand::Biometric(enabled) => match gate.toggle_biometric(enabled).await {
            Ok(enabled) => println!("biometric lock {}", if enabled { "on" } else { "off" }),
            Err(ToggleBiometricError::Superseded) => {}
            Err(err) => {
                warn!(error = %err, "biometric toggle failed");
                println!("{err}");
            }
        },
        ShellCommand::Status => println!("{}", render_status(&gate.snapshot())),
        ShellCommand::Help => println!("{HELP}"),
        ShellCommand::Quit => return false,
    }
    true
}

/// Prints the screen whenever the access decision changes.
fn spawn_renderer(gate: &AppAccessGate) -> tokio::task::JoinHandle<()> {
    let mut rx = gate.subscribe();
    tokio::spawn(async move {
        let mut shown = None;
        loop {
            let line = describe(&rx.borrow_and_update());
            if shown.as_ref() != Some(&line) {
                println!("{line}");
                shown = Some(line);
            }
            if rx.changed().await.is_err() {
                break;
            }
        }
    })
}
