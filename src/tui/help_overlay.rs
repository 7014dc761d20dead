//! Help overlay listing the key bindings of every tab.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::component::{Component, ComponentEvent};
use super::Theme;

/// Key bindings grouped by section: `(section, [(keys, action)])`.
const BINDINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "Global",
        &[
            ("Tab / Shift+Tab", "Next / previous tab"),
            ("1-4", "Jump to tab"),
            ("?", "Toggle this help"),
            ("q / Ctrl+C", "Quit"),
        ],
    ),
    (
        "Dataset",
        &[
            ("↑↓ PgUp PgDn", "Scroll rows"),
            ("Home / End", "First / last row"),
            ("←→", "Scroll columns"),
        ],
    ),
    (
        "Types & Scatter",
        &[
            ("←→", "Move between checkboxes or attributes"),
            ("Space", "Toggle generation"),
            ("a / n", "Select all / no generations"),
            ("↑↓", "Scatter: focus generations, x or y"),
        ],
    ),
    (
        "Compare",
        &[
            ("↑↓", "Focus first / second entry"),
            ("Enter", "Pick an entry"),
            ("s", "Swap entries"),
        ],
    ),
];

/// Help overlay state (scroll position).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HelpOverlay {
    /// Lines scrolled past
    pub scroll: u16,
}

impl HelpOverlay {
    fn lines(theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (section, bindings) in BINDINGS {
            lines.push(Line::from(Span::styled(
                *section,
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )));
            for (keys, action) in *bindings {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {keys:<18}"), Style::default().fg(theme.accent)),
                    Span::styled(*action, Style::default().fg(theme.text)),
                ]));
            }
            lines.push(Line::default());
        }
        lines
    }
}

impl Component for HelpOverlay {
    type Context = ();

    fn handle_input(&mut self, key: KeyEvent, _context: &()) -> Option<ComponentEvent> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?' | 'q') | KeyCode::Enter => {
                Some(ComponentEvent::Cancelled)
            }
            KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                None
            }
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, _context: &()) {
        f.render_widget(Clear, area);
        let help = Paragraph::new(Self::lines(theme))
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.background)),
            )
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        f.render_widget(help, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_close_keys() {
        let mut help = HelpOverlay::default();
        for code in [KeyCode::Esc, KeyCode::Char('?'), KeyCode::Enter] {
            assert_eq!(
                help.handle_input(KeyEvent::new(code, KeyModifiers::NONE), &()),
                Some(ComponentEvent::Cancelled)
            );
        }
        help.handle_input(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE), &());
        assert_eq!(help.scroll, 1);
    }
}
