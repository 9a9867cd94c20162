use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::compose::compose;
use crate::config::{CommandTemplate, Config, ResolvedConfig};
use crate::error::{Result, ThemeError};
use crate::exec::{run_commands, shell_quote, CommandRunner, ShellRunner};
use crate::extract::extract_colors;
use crate::output::{display_path, plural, Printer};
use crate::palette::ThemeMode;
use crate::quantize::quantize;
use crate::render::write_artifacts;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Image to derive the palette from
    pub image: PathBuf,

    /// Compose a light palette instead of a dark one
    #[arg(long)]
    pub light: bool,
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let image = fs::canonicalize(&args.image).map_err(|e| ThemeError::Io {
        path: args.image.clone(),
        message: format!("Failed to resolve image path: {}", e),
    })?;
    let image = image.to_string_lossy().into_owned();

    let config = Config::load()?.resolve(Some(&image))?;
    let mode = if args.light {
        ThemeMode::Light
    } else {
        ThemeMode::Dark
    };

    generate_theme(&ShellRunner, &config, &image, mode, printer)
}

/// Runs the full pipeline: quantize the image, compose the palette, write
/// the artifacts, then hand the configured commands to the runner.
fn generate_theme<R>(
    runner: &R,
    config: &ResolvedConfig,
    image: &str,
    mode: ThemeMode,
    printer: &Printer,
) -> Result<()>
where
    R: CommandRunner + Sync,
{
    for dir in [
        &config.cache_path,
        &config.theme_path,
        &config.icon_theme_path,
    ] {
        fs::create_dir_all(dir).map_err(|e| ThemeError::Io {
            path: dir.clone(),
            message: format!("Failed to create directory: {}", e),
        })?;
    }

    printer.status("Quantizing", &display_path(Path::new(image)));
    let listing = quantize(runner, image)?;
    let raw = extract_colors(&listing);
    printer.info("Extracted", &plural(raw.len(), "color", "colors"));
    let palette = compose(&raw, mode)?;

    printer.status("Writing", &display_path(&config.cache_path));
    write_artifacts(&config.cache_path, &palette, image)?;

    if !config.generating_commands.is_empty() {
        let count = config.generating_commands.len();
        printer.status("Running", &plural(count, "command", "commands"));
        run_commands(runner, &config.generating_commands, printer)?;
    }

    if config.send_notification {
        notify(runner, printer)?;
    }

    printer.success("Finished", &format!("theme in {}", display_path(&config.cache_path)));
    Ok(())
}

fn notify<R>(runner: &R, printer: &Printer) -> Result<()>
where
    R: CommandRunner + Sync,
{
    let command = CommandTemplate {
        command: format!(
            "notify-send {} {}",
            shell_quote("theming"),
            shell_quote("Theme generation finished")
        ),
        asynchronous: false,
        ignore_error: true,
        restart: false,
        initial: false,
    };
    run_commands(runner, std::slice::from_ref(&command), printer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::CommandStatus;
    use crate::render::ARTIFACT_FILES;
    use std::sync::Mutex;
    use tempfile::tempdir;

    struct FakeShell {
        listing: String,
        calls: Mutex<Vec<String>>,
    }

    impl FakeShell {
        fn new(listing: String) -> Self {
            Self {
                listing,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl CommandRunner for FakeShell {
        fn run(&self, command: &str) -> Result<CommandStatus> {
            self.calls.lock().unwrap().push(command.to_string());
            Ok(CommandStatus::Exited(0))
        }

        fn run_captured(&self, command: &str) -> Result<(CommandStatus, String)> {
            self.calls.lock().unwrap().push(command.to_string());
            Ok((CommandStatus::Exited(0), self.listing.clone()))
        }
    }

    fn listing(colors: u8) -> String {
        let mut text = String::from("# ImageMagick pixel enumeration: 16,1,255,srgb\n");
        for i in 0..colors {
            text.push_str(&format!(
                "{},0: ({},{},{})  #{:02x}{:02x}{:02x}  srgb({},{},{})\n",
                i,
                16 + i,
                32 + i,
                48 + i,
                16 + i,
                32 + i,
                48 + i,
                16 + i,
                32 + i,
                48 + i
            ));
        }
        text
    }

    fn command(text: &str) -> CommandTemplate {
        CommandTemplate {
            command: text.to_string(),
            asynchronous: false,
            ignore_error: false,
            restart: false,
            initial: false,
        }
    }

    fn config_in(dir: &Path) -> ResolvedConfig {
        ResolvedConfig {
            cache_path: dir.join("cache"),
            theme_path: dir.join("themes"),
            icon_theme_path: dir.join("icons"),
            send_notification: false,
            generating_commands: Vec::new(),
            reload_commands: Vec::new(),
        }
    }

    #[test]
    fn test_generate_writes_artifacts_and_runs_commands() {
        let dir = tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.generating_commands = vec![command("first"), command("second")];
        let runner = FakeShell::new(listing(16));

        generate_theme(
            &runner,
            &config,
            "/pics/wall.png",
            ThemeMode::Dark,
            &Printer::new(),
        )
        .unwrap();

        for name in ARTIFACT_FILES {
            assert!(config.cache_path.join(name).is_file());
        }
        assert!(config.theme_path.is_dir());
        assert!(config.icon_theme_path.is_dir());

        let calls = runner.calls();
        assert!(calls[0].starts_with("magick "));
        assert_eq!(&calls[1..], &["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn test_generate_sends_notification() {
        let dir = tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.send_notification = true;
        let runner = FakeShell::new(listing(16));

        generate_theme(
            &runner,
            &config,
            "/pics/wall.png",
            ThemeMode::Dark,
            &Printer::new(),
        )
        .unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 2);
        assert!(calls[1].starts_with("notify-send "));
    }

    #[test]
    fn test_generate_fails_without_enough_colors() {
        let dir = tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.generating_commands = vec![command("never run")];
        let runner = FakeShell::new(listing(3));

        let result = generate_theme(
            &runner,
            &config,
            "/pics/wall.png",
            ThemeMode::Dark,
            &Printer::new(),
        );

        assert!(matches!(
            result,
            Err(ThemeError::NotEnoughColors { found: 3, need: 16 })
        ));
        assert!(!config.cache_path.join("colors").exists());
        assert_eq!(runner.calls().len(), 1);
    }
}
