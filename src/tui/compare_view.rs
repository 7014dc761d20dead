//! Side-by-side comparison of two entries with colored deltas.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::services::compare::{format_delta, Comparison, EntrySummary};

use super::entry_picker::CompareSlot;
use super::Theme;

fn metric_cell<'a>(value: Option<f64>, delta: Option<f64>, theme: &Theme) -> Cell<'a> {
    match (value, delta) {
        (Some(v), Some(d)) => Cell::from(Line::from(vec![
            Span::styled(format!("{v:>8}"), Style::default().fg(theme.text)),
            Span::raw(" "),
            Span::styled(format_delta(d), Style::default().fg(theme.delta_color(d))),
        ])),
        (Some(v), None) => Cell::from(format!("{v:>8}")),
        (None, _) => Cell::from(Span::styled(
            format!("{:>8}", "-"),
            Style::default().fg(theme.text_muted),
        )),
    }
}

fn header_lines<'a>(summary: &EntrySummary, focused: bool, theme: &Theme) -> Vec<Line<'a>> {
    let name_style = if focused {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
    };
    let types = std::iter::once(summary.primary_type)
        .chain(summary.secondary_type)
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join("/");
    vec![
        Line::from(Span::styled(
            format!("#{} {}", summary.pokedex_number, summary.name),
            name_style,
        )),
        Line::from(Span::styled(types, Style::default().fg(theme.text_secondary))),
        Line::from(Span::styled(
            summary.artwork_url.clone(),
            Style::default().fg(theme.text_muted),
        )),
    ]
}

/// Render the comparison; `focus` marks the slot Enter will edit.
pub fn render_compare_view(
    f: &mut Frame,
    area: Rect,
    comparison: &Comparison,
    focus: CompareSlot,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(6)])
        .split(area);
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    for (half, summary, slot) in [
        (halves[0], &comparison.first, CompareSlot::First),
        (halves[1], &comparison.second, CompareSlot::Second),
    ] {
        let focused = slot == focus;
        let border = if focused { theme.accent } else { theme.primary };
        let card = Paragraph::new(header_lines(summary, focused, theme)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
        f.render_widget(card, half);
    }

    let categorical = comparison.categorical.iter().map(|row| {
        let style = if row.equal {
            Style::default().fg(theme.text_secondary)
        } else {
            Style::default().fg(theme.text)
        };
        Row::new(vec![
            Cell::from(row.label),
            Cell::from(row.value1.clone()),
            Cell::from(row.value2.clone()),
        ])
        .style(style)
    });
    let metrics = comparison.rows.iter().map(|row| {
        Row::new(vec![
            Cell::from(row.attribute.label()),
            metric_cell(row.value1, row.delta1, theme),
            metric_cell(row.value2, row.delta2, theme),
        ])
    });

    let table = Table::new(
        categorical.chain(metrics),
        [
            Constraint::Length(14),
            Constraint::Percentage(40),
            Constraint::Percentage(40),
        ],
    )
    .header(
        Row::new(vec![
            Cell::from(""),
            Cell::from(comparison.first.name.clone()),
            Cell::from(comparison.second.name.clone()),
        ])
        .style(
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
    )
    .block(
        Block::default()
            .title(" Compare ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary)),
    );
    f.render_widget(table, chunks[1]);
}
