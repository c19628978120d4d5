//! Maps the user's config file onto engine options.

use notemark_config::{Config, PrintConfig};
use notemark_engine::{DirImageStore, EngineOptions, PrintSettings, RenderFlags, Rgb};
use std::path::Path;

/// Command-line flags can only switch features on top of the config: `--raw`
/// turns markdown off, `--chapters` turns numbering on.
pub fn engine_options(config: &Config, raw: bool, chapters: bool) -> EngineOptions {
    EngineOptions {
        flags: RenderFlags {
            markdown_enabled: config.markdown_enabled && !raw,
            chapter_numbering_enabled: config.chapter_numbering_enabled || chapters,
        },
        max_document_chars: config.max_document_chars,
    }
}

pub fn print_settings(print: &PrintConfig) -> PrintSettings {
    let defaults = PrintSettings::default();
    let link_color = Rgb::from_hex(&print.link_color).unwrap_or_else(|| {
        log::warn!(
            "ignoring link_color {:?}; expected #rrggbb",
            print.link_color
        );
        defaults.link_color
    });
    PrintSettings {
        page_width: print.page_width,
        page_height: print.page_height,
        margin: print.margin,
        font_size: print.font_size,
        max_column_width: print.max_column_width,
        page_numbers: print.page_numbers,
        link_color,
    }
}

pub fn image_store(config: &Config, note_root: &Path) -> DirImageStore {
    match &config.images_dir {
        Some(dir) => DirImageStore::new(dir.clone()),
        None => DirImageStore::new(note_root.to_path_buf()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_layer_over_config() {
        let config = Config::default();
        let options = engine_options(&config, true, true);
        assert!(!options.flags.markdown_enabled);
        assert!(options.flags.chapter_numbering_enabled);
        assert_eq!(options.max_document_chars, 1_000_000);

        let options = engine_options(&config, false, false);
        assert!(options.flags.markdown_enabled);
        assert!(!options.flags.chapter_numbering_enabled);
    }

    #[test]
    fn print_config_maps_to_settings() {
        let print = PrintConfig {
            margin: 36.0,
            page_numbers: true,
            link_color: "#ff0000".to_string(),
            ..PrintConfig::default()
        };
        let settings = print_settings(&print);
        assert_eq!(settings.margin, 36.0);
        assert!(settings.page_numbers);
        assert_eq!(settings.link_color, Rgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn bad_link_color_falls_back() {
        let print = PrintConfig {
            link_color: "blue".to_string(),
            ..PrintConfig::default()
        };
        assert_eq!(print_settings(&print).link_color, PrintSettings::default().link_color);
    }

    #[test]
    fn default_print_config_matches_engine_defaults() {
        assert_eq!(print_settings(&PrintConfig::default()), PrintSettings::default());
    }
}
