//! The external quantizer.
//!
//! Color quantization is delegated to ImageMagick: the image is shrunk,
//! reduced to 16 unique colors, and dumped in the `txt:` pixel listing
//! format, which the extractor then scans for hex tokens.

use crate::error::{Result, ThemeError};
use crate::exec::{shell_quote, CommandRunner, CommandStatus};

/// Ask ImageMagick for the representative colors of `image`.
///
/// Returns the raw `txt:-` listing. A failing quantizer is fatal; its
/// stderr passes through to the terminal for context.
pub fn quantize<R: CommandRunner>(runner: &R, image: &str) -> Result<String> {
    let command = format!(
        "magick {} -resize 25% -colors 16 -unique-colors txt:-",
        shell_quote(image)
    );

    let (status, output) = runner.run_captured(&command)?;
    match status {
        CommandStatus::Exited(0) => Ok(output),
        CommandStatus::Exited(code) => Err(ThemeError::CommandFailed {
            command,
            status: code,
        }),
        CommandStatus::Signaled(signal) => Err(ThemeError::CommandSignaled { command, signal }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeQuantizer {
        status: CommandStatus,
        output: &'static str,
    }

    impl CommandRunner for FakeQuantizer {
        fn run(&self, _command: &str) -> Result<CommandStatus> {
            Ok(self.status)
        }

        fn run_captured(&self, command: &str) -> Result<(CommandStatus, String)> {
            assert!(command.starts_with("magick '"));
            assert!(command.ends_with("-unique-colors txt:-"));
            Ok((self.status, self.output.to_string()))
        }
    }

    #[test]
    fn test_quantize_returns_listing() {
        let runner = FakeQuantizer {
            status: CommandStatus::Exited(0),
            output: "# ImageMagick pixel enumeration: 16,1,255,srgb\n0,0: (16,32,48) #102030 srgb(16,32,48)\n",
        };

        let listing = quantize(&runner, "/pics/wall.png").unwrap();
        assert!(listing.contains("#102030"));
    }

    #[test]
    fn test_quantize_failure_is_fatal() {
        let runner = FakeQuantizer {
            status: CommandStatus::Exited(1),
            output: "",
        };

        let err = quantize(&runner, "/pics/wall.png").unwrap_err();
        assert!(matches!(err, ThemeError::CommandFailed { status: 1, .. }));
    }

    #[test]
    fn test_image_path_is_quoted() {
        struct CapturePath;

        impl CommandRunner for CapturePath {
            fn run(&self, _command: &str) -> Result<CommandStatus> {
                Ok(CommandStatus::Exited(0))
            }

            fn run_captured(&self, command: &str) -> Result<(CommandStatus, String)> {
                assert!(command.contains("'/pics/my wall.png'"));
                Ok((CommandStatus::Exited(0), String::new()))
            }
        }

        quantize(&CapturePath, "/pics/my wall.png").unwrap();
    }
}
