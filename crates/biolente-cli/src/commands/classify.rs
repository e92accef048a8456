use crate::cli::ClassifyArgs;
use crate::display;
use crate::error::{CliError, Result};
use biolente::core::models::structure::FileKind;
use std::io::Write;
use std::path::PathBuf;
use tracing::warn;

pub fn run(args: ClassifyArgs) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    execute(&args.files, &mut stdout)
}

/// Prints how each file would be imported. Fails after printing if any is unsupported.
pub fn execute(files: &[PathBuf], out: &mut impl Write) -> Result<()> {
    let mut unsupported = 0usize;
    for file in files {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.display().to_string());
        let kind = FileKind::sniff(&name);
        if kind.is_none() {
            warn!("'{}' has no supported extension.", name);
            unsupported += 1;
        }
        writeln!(out, "{}", display::classification(&name, kind))?;
    }

    if unsupported > 0 {
        return Err(CliError::Argument(format!(
            "{} of {} file(s) are not supported. Supported: .pdb .sdf .mol .xyz .cif and .jpg .jpeg .png .gif .bmp .webp .svg",
            unsupported,
            files.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::output;

    #[test]
    fn classifies_structures_and_images() {
        let files = vec![PathBuf::from("data/atp.PDB"), PathBuf::from("gel.webp")];
        let mut buffer = Vec::new();

        execute(&files, &mut buffer).unwrap();

        assert_eq!(
            output(buffer),
            "atp.PDB: molecular structure (pdb)\ngel.webp: image (image/webp)\n"
        );
    }

    #[test]
    fn unsupported_files_are_listed_then_reported() {
        let files = vec![PathBuf::from("a.mol"), PathBuf::from("notes.txt")];
        let mut buffer = Vec::new();

        let result = execute(&files, &mut buffer);

        assert!(matches!(result, Err(CliError::Argument(_))));
        assert_eq!(
            output(buffer),
            "a.mol: molecular structure (mol)\nnotes.txt: unsupported\n"
        );
    }
}
