//! Component trait pattern for TUI components.
//!
//! Popups implement [`Component`]: they own their state, handle their own
//! input and hand a [`ComponentEvent`] back to the parent.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::tui::Theme;

/// A popup that can be rendered and handle input.
///
/// Components read the shared dataset through `Context` but never mutate it.
pub trait Component {
    /// Read-only data the component needs
    type Context;

    /// Handle keyboard input.
    ///
    /// Returns `Some(event)` when the parent has to act.
    fn handle_input(&mut self, key: KeyEvent, context: &Self::Context) -> Option<ComponentEvent>;

    /// Render the component within the provided area.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, context: &Self::Context);
}

/// Events emitted by popups and processed by the dashboard state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentEvent {
    /// An entry was picked, identified by pokédex number
    EntrySelected(u32),
    /// The popup should close without a result
    Cancelled,
}
