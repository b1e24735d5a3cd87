//! Hangul font installation.
//!
//! egui's bundled fonts carry no Hangul glyphs, so every Korean label renders
//! as boxes unless a font is configured.

use anyhow::{Context, Result};
use egui::{FontData, FontDefinitions, FontFamily};
use std::path::Path;

const HANGUL_FONT_NAME: &str = "hangul";

/// Font definitions with `bytes` placed ahead of egui's defaults.
pub fn definitions_with_hangul(bytes: Vec<u8>) -> FontDefinitions {
    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(HANGUL_FONT_NAME.to_owned(), FontData::from_owned(bytes));

    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .insert(0, HANGUL_FONT_NAME.to_owned());
    }
    fonts
}

/// egui parses installed fonts lazily on the next frame and panics on bad
/// data, so the bytes are checked here before they reach the context.
pub fn install_hangul_font(ctx: &egui::Context, path: &Path) -> Result<()> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read font file {}", path.display()))?;
    ab_glyph::FontRef::try_from_slice(&bytes)
        .with_context(|| format!("Not a TTF/OTF font file: {}", path.display()))?;
    ctx.set_fonts(definitions_with_hangul(bytes));
    log::info!("Installed Hangul font from {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_hangul_font_takes_priority() {
        let fonts = definitions_with_hangul(vec![0u8; 4]);
        assert!(fonts.font_data.contains_key(HANGUL_FONT_NAME));
        for family in [FontFamily::Proportional, FontFamily::Monospace] {
            assert_eq!(
                fonts.families[&family].first().map(String::as_str),
                Some(HANGUL_FONT_NAME)
            );
        }
    }

    #[test]
    fn test_missing_font_file_is_an_error() {
        let ctx = egui::Context::default();
        let err = install_hangul_font(&ctx, Path::new("/nonexistent/font.ttf")).unwrap_err();
        assert!(err.to_string().contains("Failed to read font file"));
    }

    #[test]
    fn test_invalid_font_bytes_keep_default_fonts() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"this is not a font").unwrap();

        let ctx = egui::Context::default();
        let err = install_hangul_font(&ctx, file.path()).unwrap_err();
        assert!(err.to_string().contains("Not a TTF/OTF font file"));

        // The next frame still lays out text with egui's own fonts
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.label("캘린더");
            });
        });
    }
}
