//! Row of 7 generation checkboxes with a cursor.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{Generation, GenerationSelection, GENERATION_COUNT};

use super::Theme;

/// Checkbox state for one dashboard section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationCheckboxes {
    /// Checked generations
    pub selection: GenerationSelection,
    /// Index of the focused checkbox
    pub cursor: usize,
}

impl GenerationCheckboxes {
    /// Move the cursor left, wrapping around.
    pub fn move_left(&mut self) {
        self.cursor = (self.cursor + GENERATION_COUNT - 1) % GENERATION_COUNT;
    }

    /// Move the cursor right, wrapping around.
    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1) % GENERATION_COUNT;
    }

    /// Toggle the focused checkbox.
    pub fn toggle_current(&mut self) {
        if let Some(generation) = Generation::all().nth(self.cursor) {
            self.selection.toggle(generation);
        }
    }

    /// Check every box.
    pub fn select_all(&mut self) {
        self.selection = GenerationSelection::all();
    }

    /// Clear every box.
    pub fn select_none(&mut self) {
        self.selection = GenerationSelection::none();
    }

    /// Render the row; the cursor is only highlighted when `focused`.
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, focused: bool) {
        let mut spans = Vec::with_capacity(GENERATION_COUNT * 2);
        for (i, generation) in Generation::all().enumerate() {
            let mark = if self.selection.contains(generation) { "x" } else { " " };
            let mut style = Style::default().fg(theme.text);
            if focused && i == self.cursor {
                style = style
                    .fg(theme.accent)
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD);
            }
            spans.push(Span::styled(format!("[{mark}] Gen {generation}"), style));
            spans.push(Span::raw("  "));
        }

        let border = if focused { theme.accent } else { theme.primary };
        let widget = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .title(" Generations ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
        f.render_widget(widget, area);
    }
}
