//! Terminal viewer for a single note.

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use notemark_engine::{
    DirImageStore, DocumentSnapshot, Element, ElementKind, EngineOptions, ImageSource,
    InteractiveRenderer, InteractiveView, LinkHandler, Marker, Note, PrintDocument, PrintSettings,
    RenderWorker, Span as NoteSpan, parsing::inline::plain_text, read_note, write_note,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::{
    io::{Stdout, stdout},
    sync::Arc,
    time::Duration,
};

use crate::NoteLocation;

const TICK: Duration = Duration::from_millis(200);
const PRINT_WAIT: Duration = Duration::from_secs(5);

/// Records what a followed link asked for.
#[derive(Debug, Default)]
struct Navigation {
    anchor: Option<String>,
    url: Option<String>,
}

impl LinkHandler for Navigation {
    fn navigate_to_anchor(&mut self, anchor_id: &str) {
        self.anchor = Some(anchor_id.to_string());
    }

    fn open_url(&mut self, url: &str) {
        self.url = Some(url.to_string());
    }
}

struct App {
    location: NoteLocation,
    note: Note,
    options: EngineOptions,
    images: Arc<DirImageStore>,
    view: InteractiveView,
    selected: usize,
    status: String,
    worker: RenderWorker,
    latest_print: Option<(u64, PrintDocument)>,
}

impl App {
    fn new(
        location: NoteLocation,
        options: EngineOptions,
        settings: PrintSettings,
        images: DirImageStore,
    ) -> Result<Self> {
        let text = read_note(&location.file, &location.root)?;
        let images = Arc::new(images);
        let mut app = Self {
            location,
            note: Note::new(text),
            options,
            worker: RenderWorker::spawn(settings, images.clone()),
            images,
            view: InteractiveView::Elements(vec![]),
            selected: 0,
            status: String::new(),
            latest_print: None,
        };
        app.refresh();
        Ok(app)
    }

    /// Re-renders after the note text changed.
    fn refresh(&mut self) {
        match DocumentSnapshot::prepare(self.note.text(), &self.options) {
            Ok(snapshot) => {
                let snapshot = Arc::new(snapshot);
                self.view = InteractiveRenderer.render(&snapshot, self.images.as_ref());
                self.worker.submit(snapshot);
            }
            Err(e) => {
                self.view = InteractiveView::Raw(String::new());
                self.status = e.to_string();
            }
        }
        let count = self.view.elements().len();
        self.selected = self.selected.min(count.saturating_sub(1));
    }

    fn next(&mut self) {
        let count = self.view.elements().len();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    fn previous(&mut self) {
        let count = self.view.elements().len();
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
        }
    }

    fn selected_element(&self) -> Option<&Element> {
        self.view.elements().get(self.selected)
    }

    fn toggle_selected(&mut self) -> Result<()> {
        let Some(toggle) = self.selected_element().and_then(Element::toggle) else {
            return Ok(());
        };
        let text = self.note.apply_toggle(toggle)?;
        write_note(&self.location.file, &self.location.root, text)?;
        self.status = format!("saved {}", self.location.file);
        self.refresh();
        Ok(())
    }

    fn follow_selected(&mut self) {
        let Some(target) = self
            .selected_element()
            .and_then(|e| e.links().into_iter().next())
        else {
            return;
        };
        let mut nav = Navigation::default();
        self.view.follow(&target, &mut nav);
        if let Some(anchor) = nav.anchor {
            match self.view.find_anchor(&anchor) {
                Some((index, line)) => {
                    self.selected = index;
                    self.status = format!("#{anchor} (line {})", line + 1);
                }
                None => self.status = format!("no heading for #{anchor}"),
            }
        }
        if let Some(url) = nav.url {
            self.status = match open_url(&url) {
                Ok(()) => format!("opened {url}"),
                Err(e) => format!("could not open {url}: {e}"),
            };
        }
    }

    fn poll_print(&mut self) {
        if let Some(latest) = self.worker.poll_latest() {
            self.latest_print = Some(latest);
        }
    }

    /// Writes the print render of the current text next to the note.
    fn export_pdf(&mut self) -> Result<()> {
        let generation = self.worker.generation();
        if current_print(self.latest_print.as_ref(), generation).is_none()
            && let Some(latest) = self.worker.wait_latest(PRINT_WAIT)
        {
            self.latest_print = Some(latest);
        }
        let Some(document) = current_print(self.latest_print.as_ref(), generation) else {
            self.status = "print render not ready".to_string();
            return Ok(());
        };
        let output = self.location.path().with_extension("pdf");
        std::fs::write(&output, document.to_pdf())?;
        self.status = format!("wrote {}", output.display());
        Ok(())
    }
}

/// The print result, but only if it was rendered from the newest submission.
fn current_print(latest: Option<&(u64, PrintDocument)>, generation: u64) -> Option<&PrintDocument> {
    match latest {
        Some((g, document)) if *g == generation => Some(document),
        _ => None,
    }
}

/// Opens a URL in the system's default browser
fn open_url(url: &str) -> std::io::Result<()> {
    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", url])
            .spawn()?;
    }

    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    Ok(())
}

pub fn run(
    location: NoteLocation,
    options: EngineOptions,
    settings: PrintSettings,
    images: DirImageStore,
) -> Result<()> {
    let mut app = App::new(location, options, settings, images)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.poll_print();
        terminal.draw(|f| ui(f, app))?;

        if !event::poll(TICK)? {
            continue;
        }
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            let outcome = match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => {
                    app.next();
                    Ok(())
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    app.previous();
                    Ok(())
                }
                KeyCode::Char(' ') => app.toggle_selected(),
                KeyCode::Enter => {
                    app.follow_selected();
                    Ok(())
                }
                KeyCode::Char('p') => app.export_pdf(),
                _ => Ok(()),
            };
            if let Err(e) = outcome {
                app.status = format!("error: {e}");
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(2)].as_ref())
        .split(f.area());

    let (lines, selected_row) = view_lines(&app.view, app.selected);
    let height = chunks[0].height.saturating_sub(2) as usize;
    let scroll = selected_row.saturating_sub(height / 2);

    let content = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(app.location.file.to_string()),
        )
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));
    f.render_widget(content, chunks[0]);

    let help = Line::from(vec![
        Span::raw("q: Quit | ↑/k ↓/j: Move | Space: Tick | Enter: Follow link | p: PDF  "),
        Span::styled(app.status.clone(), Style::default().fg(Color::Yellow)),
    ]);
    f.render_widget(Paragraph::new(vec![help]), chunks[1]);
}

/// All display lines, plus the row where the selected element starts.
fn view_lines(view: &InteractiveView, selected: usize) -> (Vec<Line<'static>>, usize) {
    let elements = match view {
        InteractiveView::Raw(text) => {
            return (text.lines().map(|l| Line::raw(l.to_string())).collect(), 0);
        }
        InteractiveView::Elements(elements) => elements,
    };
    let mut lines = vec![];
    let mut selected_row = 0;
    for (i, element) in elements.iter().enumerate() {
        let mut rendered = element_lines(element);
        if i == selected {
            selected_row = lines.len();
            for line in &mut rendered {
                line.style = Style::default().bg(Color::DarkGray);
            }
        }
        lines.extend(rendered);
    }
    (lines, selected_row)
}

fn element_lines(element: &Element) -> Vec<Line<'static>> {
    match &element.kind {
        ElementKind::Heading {
            level,
            label,
            spans,
            ..
        } => {
            let style = Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(heading_color(*level));
            let mut out = vec![];
            if let Some(label) = label {
                out.push(Span::styled(format!("{label} "), style));
            }
            styled_spans(spans, style, &mut out);
            vec![Line::from(out)]
        }
        ElementKind::ListItem {
            indent_level,
            marker,
            spans,
        } => {
            let done = matches!(marker, Marker::Checkbox { checked: true, .. });
            let marker = match marker {
                Marker::Label(label) => label.clone(),
                Marker::Checkbox { checked: true, .. } => "☑".to_string(),
                Marker::Checkbox { checked: false, .. } => "☐".to_string(),
            };
            let mut out = vec![Span::raw(format!("{}{marker} ", "  ".repeat(*indent_level)))];
            let style = if done {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            styled_spans(spans, style, &mut out);
            vec![Line::from(out)]
        }
        ElementKind::Quote { spans } => {
            let style = Style::default().add_modifier(Modifier::ITALIC);
            let mut out = vec![Span::styled("│ ", Style::default().fg(Color::DarkGray))];
            styled_spans(spans, style, &mut out);
            vec![Line::from(out)]
        }
        ElementKind::Code { language, lines } => {
            let style = Style::default().fg(Color::Cyan);
            let mut out = vec![];
            if let Some(language) = language {
                out.push(Line::styled(
                    language.clone(),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            out.extend(
                lines
                    .iter()
                    .map(|l| Line::styled(format!("  {l}"), style)),
            );
            out
        }
        ElementKind::Table { header, rows } => table_lines(header, rows),
        ElementKind::Image { alt_text, source } => {
            let text = match source {
                ImageSource::Local { name, bytes } => {
                    format!("[image {alt_text}: {name}, {} bytes]", bytes.len())
                }
                ImageSource::Remote { url } => format!("[image {alt_text}: {url}]"),
                ImageSource::Missing { placeholder } => placeholder.clone(),
            };
            vec![Line::styled(text, Style::default().fg(Color::Magenta))]
        }
        ElementKind::Rule => vec![Line::styled(
            "─".repeat(40),
            Style::default().fg(Color::DarkGray),
        )],
        ElementKind::Paragraph { spans } => {
            let mut out = vec![];
            styled_spans(spans, Style::default(), &mut out);
            vec![Line::from(out)]
        }
        ElementKind::Spacer => vec![Line::default()],
    }
}

fn heading_color(level: u8) -> Color {
    match level {
        1 => Color::LightCyan,
        2 => Color::LightGreen,
        3 => Color::LightYellow,
        _ => Color::White,
    }
}

fn styled_spans(spans: &[NoteSpan], style: Style, out: &mut Vec<Span<'static>>) {
    for span in spans {
        match span {
            NoteSpan::Text(text) => out.push(Span::styled(text.clone(), style)),
            NoteSpan::Bold(children) => {
                styled_spans(children, style.add_modifier(Modifier::BOLD), out)
            }
            NoteSpan::Italic(children) => {
                styled_spans(children, style.add_modifier(Modifier::ITALIC), out)
            }
            NoteSpan::Strikethrough(children) => {
                styled_spans(children, style.add_modifier(Modifier::CROSSED_OUT), out)
            }
            NoteSpan::Code(text) => out.push(Span::styled(text.clone(), style.fg(Color::Cyan))),
            NoteSpan::Link { .. } => out.push(Span::styled(
                span.plain_text(),
                style.fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            )),
        }
    }
}

fn table_lines(header: &[Vec<NoteSpan>], rows: &[Vec<Vec<NoteSpan>>]) -> Vec<Line<'static>> {
    let cells: Vec<Vec<String>> = std::iter::once(header)
        .chain(rows.iter().map(Vec::as_slice))
        .map(|row| row.iter().map(|cell| plain_text(cell)).collect())
        .collect();
    let mut widths = vec![0; header.len()];
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }
    cells
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let text = row
                .iter()
                .zip(&widths)
                .map(|(cell, w)| format!(" {cell:<w$} "))
                .collect::<Vec<_>>()
                .join("│");
            let style = if i == 0 {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::styled(format!("│{text}│"), style)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use notemark_engine::NoImages;

    fn view(text: &str) -> InteractiveView {
        let snapshot = DocumentSnapshot::prepare(text, &EngineOptions::default()).unwrap();
        InteractiveRenderer.render(&snapshot, &NoImages)
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn list_items_show_markers() {
        let v = view("1. one\n   - [x] done\n");
        let (lines, _) = view_lines(&v, 0);
        let texts: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(texts, vec!["1. one", "  ☑ done"]);
    }

    #[test]
    fn table_columns_are_padded() {
        let v = view("| a | bb |\n|---|---|\n| ccc | d |\n");
        let (lines, _) = view_lines(&v, 0);
        let texts: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(texts, vec!["│ a   │ bb │", "│ ccc │ d  │"]);
    }

    #[test]
    fn selected_row_counts_multi_line_elements() {
        let v = view("```\na\nb\n```\nafter\n");
        let (_, row) = view_lines(&v, 1);
        assert_eq!(row, 2);
    }

    #[test]
    fn stale_print_results_are_not_exported() {
        let doc = PrintDocument {
            page_width: 100.0,
            page_height: 100.0,
            pages: vec![],
        };
        let latest = (3, doc.clone());
        assert_eq!(current_print(Some(&latest), 3), Some(&doc));
        assert_eq!(current_print(Some(&latest), 4), None);
        assert_eq!(current_print(None, 1), None);
    }

    #[test]
    fn raw_view_is_verbatim() {
        let v = InteractiveView::Raw("# not a heading\n**x**".to_string());
        let (lines, _) = view_lines(&v, 0);
        let texts: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(texts, vec!["# not a heading", "**x**"]);
    }
}
