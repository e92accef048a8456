use crate::cli::{FontArgs, FontCommands};
use crate::config::AppConfig;
use crate::error::Result;
use biolente::core::prefs::PreferencesRepository;
use biolente::engine::config::{FONT_SIZE_MAX, FONT_SIZE_MIN};
use biolente::engine::palette_store::PaletteStore;
use std::io::Write;

pub fn run(args: FontArgs, config: &AppConfig) -> Result<()> {
    let mut store = super::open_store(config)?;
    let mut stdout = std::io::stdout().lock();
    execute(args.command, &mut store, &mut stdout)
}

pub fn execute<P: PreferencesRepository>(
    command: FontCommands,
    store: &mut PaletteStore<P>,
    out: &mut impl Write,
) -> Result<()> {
    let percent = match command {
        FontCommands::Increase => store.adjust_font_size(true)?,
        FontCommands::Decrease => store.adjust_font_size(false)?,
        FontCommands::Show => store.font_size_percent(),
    };
    write!(out, "Font size: {}%", percent)?;
    if percent == FONT_SIZE_MIN || percent == FONT_SIZE_MAX {
        write!(out, " (limit)")?;
    }
    writeln!(out)?;
    Ok(())
}
