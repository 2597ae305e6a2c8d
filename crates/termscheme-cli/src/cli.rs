//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use termscheme::export::ExportFormat;
use termscheme::{BuiltinScheme, ColorMode};

#[derive(Debug, Parser)]
#[command(name = "termscheme")]
#[command(about = "Convert, preview and live-switch light/dark terminal color schemes")]
#[command(version)]
pub struct Cli {
    /// Log more (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a scheme file to another format
    Convert {
        /// Scheme file (.itermcolors, .xrdb, .js or .yaml)
        input: PathBuf,

        /// Output format: hterm, xrdb, kitty, xresources, vscode or yaml
        #[arg(long, short = 't', value_name = "FORMAT")]
        to: ExportFormat,

        /// Scheme name used in generated headers (defaults to the file name)
        #[arg(long, short = 'n')]
        name: Option<String>,
    },

    /// Generate an hterm script that follows the system light/dark setting
    Dynamic {
        /// Scheme file used in dark mode
        #[arg(long, value_name = "INPUT")]
        dark: PathBuf,

        /// Scheme file used in light mode
        #[arg(long, value_name = "INPUT")]
        light: PathBuf,

        /// Scheme name; also names the window.toggle<Name>Theme function
        #[arg(long, short = 'n')]
        name: String,

        /// Write the script here instead of stdout
        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show a scheme's colors in this terminal
    Preview {
        /// Scheme file (.itermcolors, .xrdb, .js or .yaml)
        input: PathBuf,

        /// Emit OSC sequences that recolor the running terminal instead
        #[arg(long)]
        osc: bool,
    },

    /// Recolor the running terminal for the current system preference
    Apply {
        #[command(flatten)]
        scheme: SchemeArgs,

        /// Apply this member regardless of the system setting
        #[arg(long, value_name = "light|dark")]
        mode: Option<ColorMode>,
    },

    /// Keep the running terminal in sync with the system preference
    Watch {
        #[command(flatten)]
        scheme: SchemeArgs,

        /// How often the system setting is checked
        #[arg(long, value_name = "N", default_value_t = 1000)]
        interval_ms: u64,
    },

    /// List the built-in schemes
    List,
}

/// Where the light/dark pair comes from; the built-in `moul` pair when
/// nothing is given.
#[derive(Debug, Clone, Default, Args)]
pub struct SchemeArgs {
    /// Built-in pair (see `termscheme list`)
    #[arg(long, short = 'b', value_name = "NAME", conflicts_with_all = ["dark", "light", "pair"])]
    pub builtin: Option<BuiltinScheme>,

    /// Scheme file for dark mode
    #[arg(long, value_name = "FILE", requires = "light", conflicts_with = "pair")]
    pub dark: Option<PathBuf>,

    /// Scheme file for light mode
    #[arg(long, value_name = "FILE", requires = "dark", conflicts_with = "pair")]
    pub light: Option<PathBuf>,

    /// YAML file with `light` and `dark` members
    #[arg(long, value_name = "FILE")]
    pub pair: Option<PathBuf>,
}
