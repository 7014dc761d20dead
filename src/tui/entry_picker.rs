//! Entry picker popup: searchable list of every entry.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::models::{Dataset, Entry};

use super::component::{Component, ComponentEvent};
use super::Theme;

/// Which compare slot the picker fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareSlot {
    /// Left-hand entry
    First,
    /// Right-hand entry
    Second,
}

/// Entry picker state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPicker {
    /// Slot being edited
    pub slot: CompareSlot,
    /// Search query string
    pub search: String,
    /// Selected index within the filtered list
    pub selected: usize,
}

impl EntryPicker {
    /// Opens a picker for a slot with an empty search.
    #[must_use]
    pub const fn new(slot: CompareSlot) -> Self {
        Self {
            slot,
            search: String::new(),
            selected: 0,
        }
    }

    /// Entries matching the search by name or pokédex number.
    #[must_use]
    pub fn matches<'a>(&self, dataset: &'a Dataset) -> Vec<&'a Entry> {
        let needle = self.search.trim().to_lowercase();
        dataset
            .entries()
            .iter()
            .filter(|e| {
                needle.is_empty()
                    || e.name.to_lowercase().contains(&needle)
                    || e.pokedex_number.to_string().starts_with(&needle)
            })
            .collect()
    }
}

impl Component for EntryPicker {
    type Context = Dataset;

    fn handle_input(&mut self, key: KeyEvent, dataset: &Dataset) -> Option<ComponentEvent> {
        match key.code {
            KeyCode::Esc => Some(ComponentEvent::Cancelled),
            KeyCode::Enter => self
                .matches(dataset)
                .get(self.selected)
                .map(|e| ComponentEvent::EntrySelected(e.pokedex_number)),
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                let count = self.matches(dataset).len();
                if self.selected + 1 < count {
                    self.selected += 1;
                }
                None
            }
            KeyCode::Backspace => {
                self.search.pop();
                self.selected = 0;
                None
            }
            KeyCode::Char(c) => {
                self.search.push(c);
                self.selected = 0;
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, dataset: &Dataset) {
        f.render_widget(Clear, area);
        let background = Block::default().style(Style::default().bg(theme.background));
        f.render_widget(background, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search box
                Constraint::Min(5),    // Entry list
                Constraint::Length(1), // Help text
            ])
            .split(area);

        let search = Paragraph::new(Line::from(vec![
            Span::styled(" Search: ", Style::default().fg(theme.text_muted)),
            Span::styled(
                self.search.as_str(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled("_", Style::default().fg(theme.primary)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary)),
        );
        f.render_widget(search, chunks[0]);

        let matches = self.matches(dataset);
        let items: Vec<ListItem> = matches
            .iter()
            .map(|e| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("#{:<5}", e.pokedex_number),
                        Style::default().fg(theme.primary),
                    ),
                    Span::styled(format!("{:<14}", e.name), Style::default().fg(theme.text)),
                    Span::styled(e.type_label(), Style::default().fg(theme.text_muted)),
                ]))
            })
            .collect();

        let title = match self.slot {
            CompareSlot::First => " First Pokémon ",
            CompareSlot::Second => " Second Pokémon ",
        };
        let list = List::new(items)
            .block(
                Block::default()
                    .title(format!("{title}({}) ", matches.len()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.surface)),
            )
            .highlight_style(
                Style::default()
                    .bg(theme.highlight_bg)
                    .fg(theme.text)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("► ");

        let mut list_state = ListState::default();
        if !matches.is_empty() {
            list_state.select(Some(self.selected.min(matches.len() - 1)));
        }
        f.render_stateful_widget(list, chunks[1], &mut list_state);

        let help = Paragraph::new(Line::from(vec![
            Span::styled("↑↓", Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)),
            Span::raw(" Select  "),
            Span::styled("Enter", Style::default().fg(theme.success).add_modifier(Modifier::BOLD)),
            Span::raw(" Apply  "),
            Span::styled("Esc", Style::default().fg(theme.error).add_modifier(Modifier::BOLD)),
            Span::raw(" Cancel"),
        ]))
        .style(Style::default().fg(theme.text_muted));
        f.render_widget(help, chunks[2]);
    }
}
