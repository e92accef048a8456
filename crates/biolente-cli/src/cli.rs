use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Biolente Contributors",
    version,
    about = "Biolente CLI - Inspect and change the colour palette and accessibility preferences of the Biolente molecule viewer.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Use this preferences file instead of the one in the user's config directory.
    #[arg(long, global = true, value_name = "PATH")]
    pub prefs_file: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S defaults.palette=tritanopia
    #[arg(short = 'S', long = "set", global = true, value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List, preview and select molecule colour palettes.
    Palette(PaletteArgs),
    /// Show or toggle high-contrast mode.
    Contrast(ContrastArgs),
    /// Show or step the interface font size.
    Font(FontArgs),
    /// Locate or reset the stored preferences.
    Prefs(PrefsArgs),
    /// Report how uploaded files would be handled, judged by their extension.
    Classify(ClassifyArgs),
}

#[derive(Args, Debug)]
pub struct PaletteArgs {
    #[command(subcommand)]
    pub command: PaletteCommands,
}

#[derive(Subcommand, Debug)]
pub enum PaletteCommands {
    /// List every palette; the active one is marked with '*'.
    List,
    /// Print the colour scheme of a palette (the active one by default).
    Show {
        /// Palette id, e.g. 'cpk' or 'tritanopia'.
        palette: Option<String>,
        /// Show the high-contrast scheme that overrides the palette.
        #[arg(long)]
        high_contrast: bool,
        /// Print CSS custom properties instead of a table.
        #[arg(long)]
        css: bool,
    },
    /// Make a palette the active one.
    Set {
        /// Palette id, e.g. 'cpk' or 'tritanopia'.
        #[arg(required = true)]
        palette: String,
    },
    /// Set the base colour of the monochromatic palette.
    MonoBase {
        /// Colour in '#RRGGBB' form.
        #[arg(required = true, value_name = "#RRGGBB")]
        color: String,
    },
}

#[derive(Args, Debug)]
pub struct ContrastArgs {
    #[command(subcommand)]
    pub command: ContrastCommands,
}

#[derive(Subcommand, Debug)]
pub enum ContrastCommands {
    /// Turn high contrast on if it is off, and off if it is on.
    Toggle,
    /// Print whether high contrast is on.
    Show,
}

#[derive(Args, Debug)]
pub struct FontArgs {
    #[command(subcommand)]
    pub command: FontCommands,
}

#[derive(Subcommand, Debug)]
pub enum FontCommands {
    /// Enlarge the font by 10%, up to 150%.
    Increase,
    /// Shrink the font by 10%, down to 80%.
    Decrease,
    /// Print the current font size.
    Show,
}

#[derive(Args, Debug)]
pub struct PrefsArgs {
    #[command(subcommand)]
    pub command: PrefsCommands,
}

#[derive(Subcommand, Debug)]
pub enum PrefsCommands {
    /// Show the absolute path to the preferences file.
    Path,
    /// Remove every stored preference so the defaults apply again.
    Reset,
}

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// File names to classify. Their content is never read.
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}
