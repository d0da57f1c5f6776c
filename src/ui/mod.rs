pub mod art;
pub mod grid;

use log::warn;
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;
use crate::scenes::SceneKind;
use grid::GridSurface;

/// Where the play field landed on screen last frame, so mouse cells can be
/// mapped back to canvas units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub field: Rect,
    pub cell_width: f32,
    pub cell_height: f32,
}

impl Viewport {
    /// Centre of the cell at (`column`, `row`) in canvas units; `None` outside the field.
    pub fn to_canvas(&self, column: u16, row: u16) -> Option<(f32, f32)> {
        let f = self.field;
        if column < f.x || row < f.y || column >= f.x + f.width || row >= f.y + f.height {
            return None;
        }
        let x = (column - f.x) as f32 + 0.5;
        let y = (row - f.y) as f32 + 0.5;
        Some((x * self.cell_width, y * self.cell_height))
    }
}

pub fn render(frame: &mut Frame, app: &mut App, viewport: &mut Viewport) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(80, 255, 80)))
        .title(" UFO Hunter ")
        .title_style(Style::default().fg(Color::Rgb(100, 255, 100)).add_modifier(Modifier::BOLD));

    let inner = block.inner(frame.area());
    frame.render_widget(block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(inner);

    let field = chunks[1];
    let settings = app.settings();
    let (cell_w, cell_h) = (settings.cell_width, settings.cell_height);
    *viewport = Viewport { field, cell_width: cell_w, cell_height: cell_h };

    // Follow the terminal size; a field too small to play on keeps the old canvas.
    let canvas_w = field.width as f32 * cell_w;
    let canvas_h = field.height as f32 * cell_h;
    let canvas = app.canvas();
    if (canvas_w - canvas.width).abs() > 0.5 || (canvas_h - canvas.height).abs() > 0.5 {
        if let Err(e) = app.on_resize(canvas_w, canvas_h) {
            warn!("ignoring resize: {}", e);
        }
    }

    frame.render_widget(Paragraph::new(status_line(app)), chunks[0]);

    if field.width > 0 && field.height > 0 {
        let mut surface = GridSurface::new(field.width as usize, field.height as usize, app.canvas());
        app.draw(&mut surface);
        frame.render_widget(Paragraph::new(surface.into_lines()), field);
    }

    frame.render_widget(Paragraph::new(help_line(app.scene_kind())), chunks[2]);
}

fn status_line(app: &App) -> Line<'static> {
    let progress = app.progress();
    let sep = || Span::styled(" | ", Style::default().fg(Color::DarkGray));
    let mut spans = vec![
        Span::styled(" \u{1f6f8} ", Style::default()),
        Span::styled(
            format!("Score: {} ", progress.score),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        sep(),
        Span::styled(
            format!("Shields: {}", "\u{2666} ".repeat(progress.shields as usize)),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        sep(),
        Span::styled(format!("Level: {} ", progress.level), Style::default().fg(Color::Green)),
        sep(),
        Span::styled(
            format!("Power-ups: {}/{} ", progress.powerups, app.settings().max_powerups),
            Style::default().fg(Color::Cyan),
        ),
    ];
    if app.is_muted() {
        spans.push(sep());
        spans.push(Span::styled("MUTED", Style::default().fg(Color::DarkGray)));
    }
    Line::from(spans)
}

fn help_line(scene: Option<SceneKind>) -> Line<'static> {
    let key = |k: &'static str| {
        Span::styled(k, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    };
    let text = |t: &'static str| Span::styled(t, Style::default().fg(Color::DarkGray));
    let spans = match scene {
        Some(SceneKind::Opening) => vec![
            key(" Space"),
            text(" start  "),
            key("M"),
            text(" mute  "),
            key("Q"),
            text(" quit"),
        ],
        Some(SceneKind::InGame) => vec![
            key(" \u{2190}\u{2192}/A D"),
            text(" move  "),
            key("Space"),
            text(" fire  "),
            key("P"),
            text(" pause  "),
            key("M"),
            text(" mute"),
        ],
        Some(SceneKind::Pause) => vec![
            key(" Esc/P"),
            text(" resume  "),
            key("Enter"),
            text(" quit game"),
        ],
        Some(SceneKind::GameOver) => vec![key(" Space"), text(" continue")],
        Some(SceneKind::Transfer) | None => vec![text(" get ready...")],
    };
    Line::from(spans)
}
