//! Scatter chart: one braille-dot dataset per primary type.

use ratatui::{
    layout::Rect,
    style::Style,
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset as ChartDataset, GraphType, Paragraph},
    Frame,
};

use crate::services::ScatterPlot;

use super::Theme;

/// Axis bounds padded by 5% so edge points stay visible.
fn padded(bounds: [f64; 2]) -> [f64; 2] {
    let span = (bounds[1] - bounds[0]).abs();
    let pad = if span == 0.0 { 1.0 } else { span * 0.05 };
    [bounds[0] - pad, bounds[1] + pad]
}

fn axis_labels(bounds: [f64; 2]) -> Vec<String> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    [bounds[0], mid, bounds[1]]
        .iter()
        .map(|v| format!("{v:.1}"))
        .collect()
}

/// Render the plot with a legend of type names.
pub fn render_scatter_chart(f: &mut Frame, area: Rect, plot: &ScatterPlot, theme: &Theme) {
    let block = Block::default()
        .title(format!(
            " {} vs {} ({} points) ",
            plot.y.label(),
            plot.x.label(),
            plot.point_count()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary));

    let Some((x_bounds, y_bounds)) = plot.bounds() else {
        let empty = Paragraph::new("No pokémon to plot for this selection.")
            .style(Style::default().fg(theme.text_muted))
            .block(block);
        f.render_widget(empty, area);
        return;
    };
    let (x_bounds, y_bounds) = (padded(x_bounds), padded(y_bounds));

    let points: Vec<Vec<(f64, f64)>> = plot
        .series
        .iter()
        .map(|s| s.points.iter().map(|p| (p.x, p.y)).collect())
        .collect();

    let datasets: Vec<ChartDataset> = plot
        .series
        .iter()
        .zip(&points)
        .map(|(series, data)| {
            ChartDataset::default()
                .name(series.name.clone())
                .marker(Marker::Braille)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(series.color.to_ratatui_color()))
                .data(data)
        })
        .collect();

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title(plot.x.label())
                .style(Style::default().fg(theme.text_muted))
                .bounds(x_bounds)
                .labels(axis_labels(x_bounds)),
        )
        .y_axis(
            Axis::default()
                .title(plot.y.label())
                .style(Style::default().fg(theme.text_muted))
                .bounds(y_bounds)
                .labels(axis_labels(y_bounds)),
        );
    f.render_widget(chart, area);
}
