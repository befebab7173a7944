//! `adc exec`

use super::find_by_name;
use adc_core::{AdcError, AdcResult, CredentialStore};
use signal_hook::SigId;
use signal_hook::consts::{SIGINT, SIGTERM};
use std::process::ExitStatus;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::process::Command;
use tracing::debug;

/// Keeps `adc` alive on SIGINT/SIGTERM while the child runs
///
/// Ctrl-C reaches the whole process group, so the child sees it too and
/// decides how to exit; we only wait and report its status.
struct InterruptGuard {
    interrupted: Arc<AtomicBool>,
    ids: Vec<SigId>,
}

impl InterruptGuard {
    fn install() -> AdcResult<Self> {
        let interrupted = Arc::new(AtomicBool::new(false));
        let mut ids = Vec::new();
        for signal in [SIGINT, SIGTERM] {
            let id = signal_hook::flag::register(signal, Arc::clone(&interrupted)).map_err(|e| {
                AdcError::io(format!("Failed to install signal handler: {}", e))
            })?;
            ids.push(id);
        }
        Ok(Self { interrupted, ids })
    }

    fn interrupted(&self) -> bool {
        self.interrupted.load(Ordering::Relaxed)
    }
}

impl Drop for InterruptGuard {
    fn drop(&mut self) {
        for id in self.ids.drain(..) {
            signal_hook::low_level::unregister(id);
        }
    }
}

/// Run a command with the override variable pointing at a credential
///
/// Returns the exit code to propagate: the child's own code, or
/// `128 + signal` when it was killed by a signal.
pub async fn run(store: &CredentialStore, name: &str, command: &[String]) -> AdcResult<u8> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| AdcError::invalid_input("No command given to exec"))?;
    let record = find_by_name(store, name)?;
    let var = &store.config().env_var;

    debug!(
        "Running {} with {}={}",
        program,
        var,
        record.source_path().display()
    );
    let guard = InterruptGuard::install()?;
    let status = Command::new(program)
        .args(args)
        .env(var, record.source_path())
        .status()
        .await
        .map_err(|e| AdcError::io_with_path(format!("Failed to run command: {}", e), program))?;
    if guard.interrupted() {
        debug!("Interrupted while waiting; {} exited with {}", program, status);
    }

    Ok(exit_code(status))
}

fn exit_code(status: ExitStatus) -> u8 {
    if let Some(code) = status.code() {
        return u8::try_from(code).unwrap_or(1);
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return u8::try_from(128 + signal).unwrap_or(1);
        }
    }
    1
}
