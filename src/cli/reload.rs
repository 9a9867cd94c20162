use crate::config::Config;
use crate::error::Result;
use crate::exec::{run_commands, ShellRunner};
use crate::output::{plural, Printer};

pub fn run(printer: &Printer) -> Result<()> {
    let config = Config::load()?.resolve(None)?;

    let count = config.reload_commands.len();
    printer.status("Reloading", &plural(count, "command", "commands"));
    run_commands(&ShellRunner, &config.reload_commands, printer)?;

    printer.success("Finished", "theme reloaded");
    Ok(())
}
