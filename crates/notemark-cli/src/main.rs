mod settings;
mod view;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use notemark_config::Config;
use notemark_engine::{DirImageStore, DocumentSnapshot, PrintRenderer, io, read_note};
use relative_path::RelativePathBuf;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "notemark", version, about = "View and print markdown notes")]
struct Cli {
    /// Show notes as plain text, without markdown rendering
    #[arg(long, global = true)]
    raw: bool,

    /// Prefix headings with chapter numbers (1., 1.1., ...)
    #[arg(long, global = true)]
    chapters: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Browse a note in the terminal; space ticks checklist items
    View { file: PathBuf },
    /// Write a note out as a PDF
    Export {
        file: PathBuf,
        /// Output path; defaults to the note's path with a .pdf extension
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// A note addressed the way the engine's io layer expects it.
#[derive(Debug, Clone)]
struct NoteLocation {
    root: PathBuf,
    file: RelativePathBuf,
}

impl NoteLocation {
    fn from_path(path: &Path) -> Result<Self> {
        let Some(name) = path.file_name() else {
            bail!("'{}' does not name a file", path.display());
        };
        let root = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Ok(Self {
            root,
            file: RelativePathBuf::from(name.to_string_lossy().into_owned()),
        })
    }

    fn path(&self) -> PathBuf {
        self.file.to_path(&self.root)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The viewer owns the terminal, so it stays quiet unless RUST_LOG asks otherwise
    let level = match cli.command {
        Command::View { .. } => log::LevelFilter::Off,
        Command::Export { .. } => log::LevelFilter::Info,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .parse_default_env()
        .init();

    let config = Config::load_or_default().with_context(|| {
        format!(
            "Failed to load config file at {}",
            Config::config_path().display()
        )
    })?;
    let options = settings::engine_options(&config, cli.raw, cli.chapters);

    match cli.command {
        Command::View { file } => {
            let location = NoteLocation::from_path(&file)?;
            io::validate_notes_dir(&location.root)?;
            let images = settings::image_store(&config, &location.root);
            view::run(location, options, settings::print_settings(&config.print), images)
        }
        Command::Export { file, output } => {
            let location = NoteLocation::from_path(&file)?;
            io::validate_notes_dir(&location.root)?;
            let output = output.unwrap_or_else(|| location.path().with_extension("pdf"));
            export(&location, &output, &config, options)
        }
    }
}

fn export(
    location: &NoteLocation,
    output: &Path,
    config: &Config,
    options: notemark_engine::EngineOptions,
) -> Result<()> {
    let text = read_note(&location.file, &location.root)
        .with_context(|| format!("Failed to read {}", location.path().display()))?;
    let snapshot = DocumentSnapshot::prepare(&text, &options)?;
    let images: DirImageStore = settings::image_store(config, &location.root);
    let document = PrintRenderer::new(settings::print_settings(&config.print)).render(&snapshot, &images);

    std::fs::write(output, document.to_pdf())
        .with_context(|| format!("Failed to write {}", output.display()))?;
    log::info!(
        "wrote {} ({} page{})",
        output.display(),
        document.pages.len(),
        if document.pages.len() == 1 { "" } else { "s" }
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_file_name_lives_in_current_dir() {
        let location = NoteLocation::from_path(Path::new("todo.md")).unwrap();
        assert_eq!(location.root, PathBuf::from("."));
        assert_eq!(location.file.as_str(), "todo.md");
    }

    #[test]
    fn nested_path_splits_at_parent() {
        let location = NoteLocation::from_path(Path::new("/notes/work/plan.md")).unwrap();
        assert_eq!(location.root, PathBuf::from("/notes/work"));
        assert_eq!(location.path(), PathBuf::from("/notes/work/plan.md"));
    }

    #[test]
    fn cli_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["notemark", "export", "a.md", "--chapters", "-o", "b.pdf"])
            .unwrap();
        assert!(cli.chapters);
        assert!(!cli.raw);
        match cli.command {
            Command::Export { file, output } => {
                assert_eq!(file, PathBuf::from("a.md"));
                assert_eq!(output, Some(PathBuf::from("b.pdf")));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn export_writes_pdf() {
        let dir = tempfile::TempDir::new().unwrap();
        let note = dir.path().join("n.md");
        std::fs::write(&note, "# Title\n\n- [ ] task\n").unwrap();
        let out = dir.path().join("n.pdf");

        let location = NoteLocation::from_path(&note).unwrap();
        let config = Config::default();
        let options = settings::engine_options(&config, false, false);
        export(&location, &out, &config, options).unwrap();

        let bytes = std::fs::read(&out).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
