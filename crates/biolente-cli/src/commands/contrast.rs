use crate::cli::{ContrastArgs, ContrastCommands};
use crate::config::AppConfig;
use crate::error::Result;
use biolente::core::prefs::PreferencesRepository;
use biolente::engine::palette_store::PaletteStore;
use std::io::Write;

pub fn run(args: ContrastArgs, config: &AppConfig) -> Result<()> {
    let mut store = super::open_store(config)?;
    let mut stdout = std::io::stdout().lock();
    execute(args.command, &mut store, &mut stdout)
}

pub fn execute<P: PreferencesRepository>(
    command: ContrastCommands,
    store: &mut PaletteStore<P>,
    out: &mut impl Write,
) -> Result<()> {
    let high_contrast = match command {
        ContrastCommands::Toggle => store.toggle_high_contrast()?,
        ContrastCommands::Show => store.is_high_contrast(),
    };
    writeln!(
        out,
        "High contrast: {}",
        if high_contrast { "on" } else { "off" }
    )?;
    Ok(())
}
