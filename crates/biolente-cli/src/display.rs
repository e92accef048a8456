use biolente::core::color::{ColorScheme, Palette};
use biolente::core::models::structure::FileKind;
use std::fmt::Write;

/// One line per palette: marker, id, label and, for the colour-vision palettes, the note.
pub fn palette_listing(active: Palette) -> String {
    let mut out = String::new();
    for palette in Palette::ALL {
        let marker = if palette == active { '*' } else { ' ' };
        let _ = write!(out, "{} {:<14} {}", marker, palette.id(), palette.label());
        if let Some(note) = palette.accessibility_note() {
            let _ = write!(out, " ({})", note);
        }
        out.push('\n');
    }
    out
}

/// Slot name, legend label and hex value, one slot per line.
pub fn scheme_table(scheme: &ColorScheme) -> String {
    let mut out = String::new();
    for (slot, color) in scheme.slots() {
        let _ = writeln!(
            out,
            "{:<11} {:<2} {}",
            slot.name(),
            slot.legend_label().unwrap_or("-"),
            color
        );
    }
    out
}

/// The custom properties a stylesheet reads, as CSS declarations.
pub fn scheme_css(scheme: &ColorScheme, high_contrast: bool) -> String {
    let mut out = String::new();
    for (property, color) in scheme.css_custom_properties(high_contrast) {
        let _ = writeln!(out, "{}: {};", property, color);
    }
    out
}

pub fn classification(file_name: &str, kind: Option<FileKind>) -> String {
    match kind {
        Some(kind) => format!("{}: {}", file_name, kind),
        None => format!("{}: unsupported", file_name),
    }
}
