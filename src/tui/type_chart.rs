//! Type distribution chart: one colored bar per type, largest first.

use ratatui::{
    layout::{Direction, Rect},
    style::Style,
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::services::TypeDistribution;

use super::Theme;

/// Render the distribution as horizontal bars with percentages.
pub fn render_type_chart(f: &mut Frame, area: Rect, distribution: &TypeDistribution, theme: &Theme) {
    let block = Block::default()
        .title(format!(" Types ({} pokémon) ", distribution.total()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary));

    if distribution.is_empty() {
        let empty = Paragraph::new("No pokémon in the selected generations.")
            .style(Style::default().fg(theme.text_muted))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let bars: Vec<Bar> = distribution
        .rows()
        .iter()
        .map(|row| {
            let color = row.color.to_ratatui_color();
            Bar::default()
                .label(Line::from(row.pokemon_type.as_str()))
                .value(row.count as u64)
                .text_value(format!(
                    "{} ({:.1}%)",
                    row.count,
                    distribution.percentage(row)
                ))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(theme.background).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));
    f.render_widget(chart, area);
}
