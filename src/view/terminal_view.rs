//! Terminal widget rendering
//!
//! Draws the floating terminal window: a title bar, the scrollback coloured
//! by line kind and pinned to the bottom, and the input row with a cursor.
//! A minimized window is a single title row.

use crate::model::{LineKind, Scrollback};
use crate::session::TerminalSession;
use crate::window::TerminalWindow;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub const WINDOW_TITLE: &str = "user@innohacks: ~";
pub const MINIMIZED_TITLE: &str = "InnoHacks Terminal";
pub const INPUT_PREFIX: &str = "➜ ~ ";

const INFO_FG: Color = Color::Rgb(0xa9, 0xb1, 0xd6);
const ACCENT_FG: Color = Color::Rgb(0x7a, 0xa2, 0xf7);
const WINDOW_BG: Color = Color::Rgb(0x1a, 0x1b, 0x26);

/// Foreground style for a scrollback line
pub fn line_style(kind: LineKind) -> Style {
    let fg = match kind {
        LineKind::Command => Color::White,
        LineKind::Error => Color::Red,
        LineKind::Warning => Color::Yellow,
        LineKind::Success => Color::Green,
        LineKind::Info => INFO_FG,
    };
    Style::default().fg(fg)
}

/// One display row per text line; multi-line entries are split on `\n`
pub fn scrollback_rows(scrollback: &Scrollback) -> Vec<Line<'_>> {
    scrollback
        .lines()
        .iter()
        .flat_map(|line| {
            let style = line_style(line.kind());
            line.text()
                .split('\n')
                .map(move |row| Line::from(Span::styled(row, style)))
        })
        .collect()
}

/// Renders the terminal window
pub struct TerminalRenderer;

impl TerminalRenderer {
    /// Area of the expanded window within `page`: the lower right part of
    /// the screen, leaving the status row free
    pub fn window_area(page: Rect) -> Rect {
        let width = (page.width * 4 / 5).clamp(page.width.min(30), page.width);
        let height = (page.height * 7 / 10).clamp(page.height.min(6), page.height);
        Rect {
            x: page.x + page.width - width,
            y: page.y + page.height - height,
            width,
            height,
        }
    }

    /// Area of the minimized title bar within `page`
    pub fn minimized_area(page: Rect) -> Rect {
        let width = (MINIMIZED_TITLE.len() as u16 + 4).min(page.width);
        Rect {
            x: page.x + page.width - width,
            y: page.y + page.height.saturating_sub(1),
            width,
            height: page.height.min(1),
        }
    }

    /// Draw the window in whatever state it is in. Nothing is drawn while
    /// it is closed.
    pub fn render(frame: &mut Frame, page: Rect, window: &TerminalWindow) {
        if !window.is_open() || page.width == 0 || page.height == 0 {
            return;
        }

        if window.is_minimized() {
            Self::render_minimized(frame, Self::minimized_area(page));
            return;
        }

        if let Some(session) = window.session() {
            Self::render_expanded(frame, Self::window_area(page), session);
        }
    }

    fn render_minimized(frame: &mut Frame, area: Rect) {
        let bar = Paragraph::new(Line::from(vec![
            Span::styled(" ▪ ", Style::default().fg(ACCENT_FG)),
            Span::styled(
                MINIMIZED_TITLE,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]))
        .style(Style::default().bg(WINDOW_BG));

        frame.render_widget(Clear, area);
        frame.render_widget(bar, area);
    }

    fn render_expanded(frame: &mut Frame, area: Rect, session: &TerminalSession) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT_FG))
            .title(Span::styled(
                format!(" {WINDOW_TITLE} "),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(WINDOW_BG));

        let inner = block.inner(area);
        frame.render_widget(Clear, area);
        frame.render_widget(block, area);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Last row is the input line
        let output_height = inner.height - 1;
        let output_area = Rect {
            height: output_height,
            ..inner
        };
        let input_area = Rect {
            y: inner.y + output_height,
            height: 1,
            ..inner
        };

        let rows = scrollback_rows(session.scrollback());
        let skip = rows.len().saturating_sub(output_height as usize);
        let visible: Vec<Line<'_>> = rows.into_iter().skip(skip).collect();
        frame.render_widget(Paragraph::new(visible), output_area);

        let input = session.input();
        let prompt = Span::styled(
            INPUT_PREFIX,
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        );
        let prompt_width = prompt.width();
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                prompt,
                Span::styled(input.text(), Style::default().fg(Color::White)),
            ])),
            input_area,
        );

        let before_cursor: String = input.text().chars().take(input.cursor()).collect();
        let cursor_x = input_area.x as usize + prompt_width + Span::raw(before_cursor).width();
        let max_x = (input_area.x + input_area.width).saturating_sub(1) as usize;
        frame.set_cursor_position(Position::new(cursor_x.min(max_x) as u16, input_area.y));
    }
}
