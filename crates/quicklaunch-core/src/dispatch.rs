//! Fire-and-forget launching of activated items.

use crate::{Error, Result};
use std::process::{Command as StdCommand, Stdio};
use tokio::process::Command;
use tokio::runtime::Handle;
use tracing::{debug, error, info, warn};

/// Starts a command without waiting for it to finish.
pub trait ProcessLauncher: Send + Sync {
    /// Begin running `exec_command`. Must return as soon as the request is issued.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Launch`] when the process could not be started.
    fn launch(&self, exec_command: &str) -> Result<()>;
}

/// Runs commands through `<shell> -c`, detached from the launcher's terminal.
///
/// Children are reaped on a task of the given runtime so exit failures get logged.
#[derive(Debug, Clone)]
pub struct ShellLauncher {
    shell: String,
    runtime: Handle,
}

impl ShellLauncher {
    #[must_use]
    pub fn new(shell: impl Into<String>, runtime: Handle) -> Self {
        Self {
            shell: shell.into(),
            runtime,
        }
    }
}

impl ProcessLauncher for ShellLauncher {
    fn launch(&self, exec_command: &str) -> Result<()> {
        let _guard = self.runtime.enter();

        let mut command = StdCommand::new(&self.shell);
        command
            .arg("-c")
            .arg(exec_command)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            command.process_group(0);
        }

        let mut child = Command::from(command)
            .spawn()
            .map_err(|e| Error::Launch(format!("{}: {e}", self.shell)))?;

        let exec = exec_command.to_string();
        self.runtime.spawn(async move {
            match child.wait().await {
                Ok(status) if status.success() => debug!("'{exec}' exited cleanly"),
                Ok(status) => warn!("'{exec}' exited with {status}"),
                Err(e) => warn!("Failed to wait for '{exec}': {e}"),
            }
        });

        Ok(())
    }
}

/// Hands activated commands to a [`ProcessLauncher`].
///
/// Launch failures are logged here and go no further.
pub struct CommandDispatcher {
    launcher: Box<dyn ProcessLauncher>,
}

impl CommandDispatcher {
    #[must_use]
    pub fn new(launcher: Box<dyn ProcessLauncher>) -> Self {
        Self { launcher }
    }

    /// Issue a launch request. Returns whether the launcher accepted it.
    pub fn dispatch(&self, exec_command: &str) -> bool {
        info!("Launching: {exec_command}");
        match self.launcher.launch(exec_command) {
            Ok(()) => true,
            Err(e) => {
                error!("Launch of '{exec_command}' failed: {e}");
                false
            }
        }
    }
}

impl std::fmt::Debug for CommandDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandDispatcher").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct Recording(Arc<Mutex<Vec<String>>>);

    impl ProcessLauncher for Recording {
        fn launch(&self, exec_command: &str) -> Result<()> {
            self.0.lock().unwrap().push(exec_command.to_string());
            Ok(())
        }
    }

    struct Failing;

    impl ProcessLauncher for Failing {
        fn launch(&self, _: &str) -> Result<()> {
            Err(Error::Launch("no such program".to_string()))
        }
    }

    #[test]
    fn test_dispatch_forwards_command() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let dispatcher = CommandDispatcher::new(Box::new(Recording(log.clone())));
        assert!(dispatcher.dispatch("firefox"));
        assert!(dispatcher.dispatch("firefox"));
        assert_eq!(*log.lock().unwrap(), vec!["firefox", "firefox"]);
    }

    #[test]
    fn test_dispatch_swallows_failure() {
        let dispatcher = CommandDispatcher::new(Box::new(Failing));
        assert!(!dispatcher.dispatch("missing"));
        // Still usable afterwards
        assert!(!dispatcher.dispatch("missing"));
    }

    #[tokio::test]
    async fn test_shell_launcher_runs_command() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("launched");
        let launcher = ShellLauncher::new("sh", Handle::current());

        launcher
            .launch(&format!("touch '{}'", marker.display()))
            .unwrap();

        for _ in 0..100 {
            if marker.exists() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        }
        assert!(marker.exists());
    }

    #[tokio::test]
    async fn test_shell_launcher_missing_shell_errors() {
        let launcher = ShellLauncher::new("/nonexistent/shell", Handle::current());
        let result = launcher.launch("true");
        assert!(matches!(result, Err(Error::Launch(_))));
    }

    #[tokio::test]
    async fn test_shell_launcher_failing_command_is_not_an_error() {
        let launcher = ShellLauncher::new("sh", Handle::current());
        assert!(launcher.launch("exit 3").is_ok());
    }
}
