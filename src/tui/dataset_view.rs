//! Full dataset table with vertical scrolling.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::models::Dataset;

use super::Theme;

/// Columns shown first; the rest follow in file order.
const LEADING_COLUMNS: [&str; 4] = ["Pokédex No.", "Name", "Type", "Generation"];

/// Scroll state of the dataset tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DatasetView {
    /// Highlighted row
    pub selected: usize,
    /// First visible data column after the leading ones
    pub column_offset: usize,
}

impl DatasetView {
    /// Move the highlight by `delta` rows, clamped to the table.
    pub fn scroll(&mut self, delta: isize, row_count: usize) {
        if row_count == 0 {
            self.selected = 0;
            return;
        }
        let max = row_count - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(max);
    }

    /// Jump to the first or last row.
    pub fn jump(&mut self, to_end: bool, row_count: usize) {
        self.selected = if to_end { row_count.saturating_sub(1) } else { 0 };
    }

    /// Shift the visible columns left or right.
    pub fn shift_columns(&mut self, right: bool, column_count: usize) {
        let scrollable = column_count.saturating_sub(LEADING_COLUMNS.len());
        if right {
            self.column_offset = (self.column_offset + 1).min(scrollable.saturating_sub(1));
        } else {
            self.column_offset = self.column_offset.saturating_sub(1);
        }
    }

    /// Column indices to display: the leading columns then the scrolled window.
    #[must_use]
    pub fn visible_columns(&self, dataset: &Dataset) -> Vec<usize> {
        let columns = dataset.columns();
        let leading: Vec<usize> = LEADING_COLUMNS
            .iter()
            .filter_map(|label| columns.iter().position(|c| c == label))
            .collect();
        let rest = (0..columns.len())
            .filter(|i| !leading.contains(i))
            .skip(self.column_offset);
        leading.iter().copied().chain(rest).collect()
    }

    /// Render the table.
    pub fn render(&self, f: &mut Frame, area: Rect, dataset: &Dataset, theme: &Theme) {
        let visible = self.visible_columns(dataset);
        let columns = dataset.columns();

        let header = Row::new(
            visible
                .iter()
                .map(|&i| Cell::from(columns[i].as_str())),
        )
        .style(
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        );

        let rows = dataset.records().iter().map(|record| {
            Row::new(
                visible
                    .iter()
                    .map(|&i| Cell::from(record.get(i).map_or("", String::as_str))),
            )
        });

        let widths: Vec<Constraint> = visible
            .iter()
            .map(|&i| match columns[i].as_str() {
                "Name" | "Japanese Name" => Constraint::Length(16),
                "Abilities" | "Classification" => Constraint::Length(28),
                _ => Constraint::Length(12),
            })
            .collect();

        let table = Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .title(format!(" Dataset ({} rows) ", dataset.len()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            )
            .row_highlight_style(
                Style::default()
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD),
            );

        let mut state = TableState::default();
        if !dataset.is_empty() {
            state.select(Some(self.selected.min(dataset.len() - 1)));
        }
        f.render_stateful_widget(table, area, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::loader::test_data::ten_rows;

    #[test]
    fn test_scroll_is_clamped() {
        let mut view = DatasetView::default();
        view.scroll(-3, 10);
        assert_eq!(view.selected, 0);
        view.scroll(25, 10);
        assert_eq!(view.selected, 9);
        view.jump(false, 10);
        assert_eq!(view.selected, 0);
        view.jump(true, 10);
        assert_eq!(view.selected, 9);
    }

    #[test]
    fn test_leading_columns_first() {
        let dataset = ten_rows();
        let mut view = DatasetView::default();
        let visible = view.visible_columns(&dataset);
        let labels: Vec<_> = visible[..4]
            .iter()
            .map(|&i| dataset.columns()[i].as_str())
            .collect();
        assert_eq!(labels, LEADING_COLUMNS);
        assert_eq!(visible.len(), dataset.columns().len());

        view.shift_columns(true, dataset.columns().len());
        assert_eq!(view.visible_columns(&dataset).len(), dataset.columns().len() - 1);
        view.shift_columns(false, dataset.columns().len());
        assert_eq!(view.column_offset, 0);
    }
}
