//! Page chrome around the terminal: navbar, page heading and status bar

use crate::model::Route;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const BRAND: &str = "InnoHacks 2.0";

/// Areas produced by `PageRenderer::render`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    /// Space between the navbar and the status bar, where the terminal floats
    pub body: Rect,
}

pub struct PageRenderer;

impl PageRenderer {
    /// Draw the navbar, the heading for `route` and the status bar
    pub fn render(frame: &mut Frame, area: Rect, route: Route, terminal_open: bool) -> PageLayout {
        if area.height < 3 {
            return PageLayout { body: area };
        }

        let navbar = Rect { height: 1, ..area };
        let status = Rect {
            y: area.y + area.height - 1,
            height: 1,
            ..area
        };
        let body = Rect {
            y: area.y + 1,
            height: area.height - 2,
            ..area
        };

        frame.render_widget(Paragraph::new(Self::navbar_line(route)), navbar);

        let heading = vec![
            Line::default(),
            Line::from(Span::styled(
                format!("  {}", route.title()),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("  {}{}", "innohacks.dev", route.path()),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(Paragraph::new(heading), body);

        frame.render_widget(
            Paragraph::new(Self::status_line(route, terminal_open))
                .style(Style::default().bg(Color::Rgb(0x24, 0x28, 0x3b))),
            status,
        );

        PageLayout { body }
    }

    fn navbar_line(current: Route) -> Line<'static> {
        let mut spans = vec![Span::styled(
            format!(" {BRAND} "),
            Style::default()
                .fg(Color::Rgb(0x7a, 0xa2, 0xf7))
                .add_modifier(Modifier::BOLD),
        )];
        for route in Route::ALL {
            let style = if route == current {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Rgb(0x7a, 0xa2, 0xf7))
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::raw(" "));
            spans.push(Span::styled(format!(" {} ", route.title()), style));
        }
        Line::from(spans)
    }

    fn status_line(route: Route, terminal_open: bool) -> Line<'static> {
        let terminal = if terminal_open { "hide" } else { "show" };
        Line::from(vec![
            Span::styled(
                format!(" {} ", route.path()),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" F2 {terminal} terminal  Tab pages  Ctrl+Q quit"),
                Style::default().fg(Color::Gray),
            ),
        ])
    }
}
