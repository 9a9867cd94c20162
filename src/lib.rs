//! theming - Terminal and desktop themes from an image
//!
//! A library for deriving a 16-color palette from an image, rendering it
//! into terminal and desktop config artifacts, and running the commands
//! that put the theme into effect.

pub mod cli;
pub mod color;
pub mod compose;
pub mod config;
pub mod error;
pub mod exec;
pub mod extract;
pub mod output;
pub mod palette;
pub mod quantize;
pub mod render;

pub use color::{Hls, Rgb};
pub use compose::compose;
pub use config::{CommandTemplate, Config, ResolvedConfig};
pub use error::{Result, ThemeError};
pub use exec::{run_commands, CommandRunner, CommandStatus, ShellRunner};
pub use extract::extract_colors;
pub use crate::palette::{Palette, ThemeMode};
pub use quantize::quantize;
pub use render::{
    render_json, render_oomox, render_plain, render_xresources, write_artifacts, ARTIFACT_FILES,
};
