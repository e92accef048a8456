use crate::cli::{PaletteArgs, PaletteCommands};
use crate::config::AppConfig;
use crate::display;
use crate::error::{CliError, Result};
use biolente::core::color::{Palette, resolver};
use biolente::core::prefs::PreferencesRepository;
use biolente::engine::palette_store::PaletteStore;
use std::io::Write;
use std::str::FromStr;
use tracing::info;

pub fn run(args: PaletteArgs, config: &AppConfig) -> Result<()> {
    let mut store = super::open_store(config)?;
    let mut stdout = std::io::stdout().lock();
    execute(args.command, &mut store, &mut stdout)
}

pub fn execute<P: PreferencesRepository>(
    command: PaletteCommands,
    store: &mut PaletteStore<P>,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        PaletteCommands::List => {
            write!(out, "{}", display::palette_listing(store.active_palette()))?;
        }
        PaletteCommands::Show {
            palette,
            high_contrast,
            css,
        } => {
            let (palette, high_contrast) = match palette {
                Some(id) => (
                    Palette::from_str(&id).map_err(|e| CliError::Argument(e.to_string()))?,
                    high_contrast,
                ),
                None => (
                    store.active_palette(),
                    high_contrast || store.is_high_contrast(),
                ),
            };
            let scheme = resolver::resolve(palette, high_contrast, store.monochromatic_base());
            if css {
                write!(out, "{}", display::scheme_css(&scheme, high_contrast))?;
            } else {
                let title = if high_contrast {
                    "High contrast".to_string()
                } else {
                    palette.label().to_string()
                };
                writeln!(out, "{}", title)?;
                write!(out, "{}", display::scheme_table(&scheme))?;
            }
        }
        PaletteCommands::Set { palette } => {
            store.change_palette_id(&palette)?;
            info!("Active palette is now '{}'.", store.active_palette());
            writeln!(out, "Active palette: {}", store.active_palette().label())?;
            if store.is_high_contrast() {
                writeln!(
                    out,
                    "Note: high contrast is on and overrides the palette until it is turned off."
                )?;
            }
        }
        PaletteCommands::MonoBase { color } => {
            let base = store.change_monochromatic_base(&color)?;
            writeln!(out, "Monochromatic base: {}", base)?;
        }
    }
    Ok(())
}
