//! Status bar widget: selected-row count, filter warning and key hints

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Tab, Theme};
use crate::services::filter::selection_summary;
use crate::services::FilterWarning;

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar for the active tab
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut lines: Vec<Line> = Vec::new();

        // First line: selected count and warning for the filtered tabs.
        // Counts come from the memoized chart data drawn in the same frame.
        let counted = match state.tab {
            Tab::Types => Some((
                state.types_generations.selection,
                state.type_distribution().total(),
            )),
            Tab::Scatter => Some((
                state.scatter_generations.selection,
                state.scatter_plot().entry_count(),
            )),
            Tab::Dataset | Tab::Compare => None,
        };
        if let Some((selection, count)) = counted {
            let mut spans = vec![Span::styled(
                selection_summary(count),
                Style::default().fg(theme.text),
            )];
            if selection.is_empty() {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    FilterWarning::NoGenerationSelected.to_string(),
                    Style::default()
                        .fg(theme.warning)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            lines.push(Line::from(spans));
        } else {
            lines.push(Line::from(Span::styled(
                format!("{} rows from {}", state.dataset.len(), state.dataset.source()),
                Style::default().fg(theme.text_secondary),
            )));
        }

        lines.push(Self::hints_line(state.tab, theme));

        let bar = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.surface)),
        );
        f.render_widget(bar, area);
    }

    fn hints_line(tab: Tab, theme: &Theme) -> Line<'static> {
        let hints: &[(&str, &str)] = match tab {
            Tab::Dataset => &[("↑↓", "Scroll"), ("←→", "Columns")],
            Tab::Types => &[("←→", "Move"), ("Space", "Toggle"), ("a/n", "All/None")],
            Tab::Scatter => &[
                ("↑↓", "Focus"),
                ("←→", "Move"),
                ("Space", "Toggle"),
                ("a/n", "All/None"),
            ],
            Tab::Compare => &[("↑↓", "Focus"), ("Enter", "Pick"), ("s", "Swap")],
        };

        let key_style = Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD);
        let mut spans = Vec::new();
        for (key, action) in hints
            .iter()
            .chain(&[("Tab", "Next tab"), ("?", "Help"), ("q", "Quit")])
        {
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::styled(
                format!(" {action}  "),
                Style::default().fg(theme.text_muted),
            ));
        }
        Line::from(spans)
    }
}
