//! Shell command execution and orchestration.
//!
//! Commands run through `sh -c` with their standard streams detached,
//! except when stdout is being captured. The orchestrator runs every
//! synchronous command strictly in list order, then launches all
//! asynchronous commands at once (one thread each) and joins them all
//! before returning.

use std::os::unix::process::ExitStatusExt;
use std::process::{Command, Stdio};
use std::thread;

use crate::config::CommandTemplate;
use crate::error::{Result, ThemeError};
use crate::output::Printer;

/// How a shell command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    /// Exited normally with this code.
    Exited(i32),
    /// Terminated by this signal.
    Signaled(i32),
}

impl CommandStatus {
    pub fn success(&self) -> bool {
        matches!(self, CommandStatus::Exited(0))
    }

    fn from_exit(status: std::process::ExitStatus) -> Self {
        match status.code() {
            Some(code) => CommandStatus::Exited(code),
            None => CommandStatus::Signaled(status.signal().unwrap_or(0)),
        }
    }
}

/// Capability to run one shell command line.
pub trait CommandRunner {
    /// Run `command` with stdin, stdout, and stderr detached.
    fn run(&self, command: &str) -> Result<CommandStatus>;

    /// Run `command` capturing stdout; stderr stays on the terminal.
    fn run_captured(&self, command: &str) -> Result<(CommandStatus, String)>;
}

/// Runs commands through `sh -c`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> Result<CommandStatus> {
        let status = Command::new("sh")
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;
        Ok(CommandStatus::from_exit(status))
    }

    fn run_captured(&self, command: &str) -> Result<(CommandStatus, String)> {
        let output = Command::new("sh")
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()?;

        let status = CommandStatus::from_exit(output.status);
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        Ok((status, stdout))
    }
}

/// Run a command list with the sync-then-async schedule.
///
/// Synchronous commands run first, in order, each awaited before the
/// next starts; a fatal failure among them returns before any
/// asynchronous command is launched. Asynchronous commands then all
/// start concurrently with no ordering among them, and the call returns
/// only after every one has been joined.
///
/// A non-zero exit is fatal unless the command sets `ignore_error`, in
/// which case it is logged and treated as success. A signal death is
/// always fatal. On the synchronous path fatal means an `Err` return;
/// an asynchronous worker reports the failure and exits the process,
/// abandoning its still-running siblings.
pub fn run_commands<R>(runner: &R, commands: &[CommandTemplate], printer: &Printer) -> Result<()>
where
    R: CommandRunner + Sync,
{
    let (sync_commands, async_commands): (Vec<&CommandTemplate>, Vec<&CommandTemplate>) =
        commands.iter().partition(|command| !command.asynchronous);

    for command in &sync_commands {
        let status = runner.run(&command.command)?;
        check_status(command, status, printer)?;
    }

    thread::scope(|scope| -> Result<()> {
        let mut workers = Vec::with_capacity(async_commands.len());
        for (i, &command) in async_commands.iter().enumerate() {
            let handle = thread::Builder::new()
                .name(format!("command-{i}"))
                .spawn_scoped(scope, move || run_async_command(runner, command, printer))?;
            workers.push(handle);
        }
        for worker in workers {
            let _ = worker.join();
        }
        Ok(())
    })
}

fn run_async_command<R: CommandRunner>(runner: &R, command: &CommandTemplate, printer: &Printer) {
    let result = runner
        .run(&command.command)
        .and_then(|status| check_status(command, status, printer));

    // A fatal failure must take the whole process down, not just this
    // worker; the exit code is what scripts observe.
    if let Err(e) = result {
        eprintln!("{:?}", miette::Report::new(e));
        std::process::exit(1);
    }
}

fn check_status(command: &CommandTemplate, status: CommandStatus, printer: &Printer) -> Result<()> {
    match status {
        CommandStatus::Exited(0) => Ok(()),
        CommandStatus::Exited(code) if command.ignore_error => {
            printer.warning(
                "Ignored",
                &format!("`{}` failed with exit status {}", command.command, code),
            );
            Ok(())
        }
        CommandStatus::Exited(code) => Err(ThemeError::CommandFailed {
            command: command.command.clone(),
            status: code,
        }),
        CommandStatus::Signaled(signal) => Err(ThemeError::CommandSignaled {
            command: command.command.clone(),
            signal,
        }),
    }
}

/// Quote a string as one `sh` word.
pub fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}
