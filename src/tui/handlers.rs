//! Keyboard handling for the dashboard.
//!
//! Popups get the key first; otherwise global keys are checked and the rest
//! goes to the handler of the visible tab.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::models::{Attribute, EntryRef};

use super::{AppState, CompareSlot, Component, ComponentEvent, EntryPicker, HelpOverlay};
use super::{PopupType, ScatterFocus, Tab};

/// Rows moved by PageUp / PageDown.
const PAGE: isize = 10;

/// Handle one key press. Returns `true` when the dashboard should quit.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }

    if let Some(popup) = state.active_popup.take() {
        handle_popup_input(state, popup, key);
        return state.should_quit;
    }

    let ctrl_c = key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
    match key.code {
        _ if ctrl_c => state.should_quit = true,
        KeyCode::Char('q') => state.should_quit = true,
        KeyCode::Char('?') => {
            state.active_popup = Some(PopupType::Help(HelpOverlay::default()));
        }
        KeyCode::Tab => state.tab = state.tab.next(),
        KeyCode::BackTab => state.tab = state.tab.previous(),
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            state.tab = Tab::ALL[index];
        }
        _ => match state.tab {
            Tab::Dataset => handle_dataset_key(state, key.code),
            Tab::Types => handle_types_key(state, key.code),
            Tab::Scatter => handle_scatter_key(state, key.code),
            Tab::Compare => handle_compare_key(state, key.code),
        },
    }
    state.should_quit
}

fn handle_popup_input(state: &mut AppState, popup: PopupType, key: KeyEvent) {
    match popup {
        PopupType::EntryPicker(mut picker) => match picker.handle_input(key, &state.dataset) {
            Some(ComponentEvent::EntrySelected(number)) => {
                let chosen = EntryRef::Number(number);
                match picker.slot {
                    CompareSlot::First => state.compare_first = chosen,
                    CompareSlot::Second => state.compare_second = chosen,
                }
            }
            Some(ComponentEvent::Cancelled) => {}
            None => state.active_popup = Some(PopupType::EntryPicker(picker)),
        },
        PopupType::Help(mut help) => {
            if help.handle_input(key, &()).is_none() {
                state.active_popup = Some(PopupType::Help(help));
            }
        }
    }
}

fn handle_dataset_key(state: &mut AppState, code: KeyCode) {
    let rows = state.dataset.len();
    let columns = state.dataset.columns().len();
    let view = &mut state.dataset_view;
    match code {
        KeyCode::Up => view.scroll(-1, rows),
        KeyCode::Down => view.scroll(1, rows),
        KeyCode::PageUp => view.scroll(-PAGE, rows),
        KeyCode::PageDown => view.scroll(PAGE, rows),
        KeyCode::Home => view.jump(false, rows),
        KeyCode::End => view.jump(true, rows),
        KeyCode::Left => view.shift_columns(false, columns),
        KeyCode::Right => view.shift_columns(true, columns),
        _ => {}
    }
}

fn handle_types_key(state: &mut AppState, code: KeyCode) {
    let boxes = &mut state.types_generations;
    match code {
        KeyCode::Left => boxes.move_left(),
        KeyCode::Right => boxes.move_right(),
        KeyCode::Char(' ') | KeyCode::Enter => boxes.toggle_current(),
        KeyCode::Char('a') => boxes.select_all(),
        KeyCode::Char('n') => boxes.select_none(),
        _ => {}
    }
}

/// Next or previous attribute, wrapping around.
fn cycle_attribute(current: Attribute, forward: bool) -> Attribute {
    let len = Attribute::ALL.len();
    let index = if forward {
        (current.index() + 1) % len
    } else {
        (current.index() + len - 1) % len
    };
    Attribute::ALL[index]
}

fn handle_scatter_key(state: &mut AppState, code: KeyCode) {
    match code {
        KeyCode::Up => {
            state.scatter_focus = match state.scatter_focus {
                ScatterFocus::Generations | ScatterFocus::XAxis => ScatterFocus::Generations,
                ScatterFocus::YAxis => ScatterFocus::XAxis,
            };
        }
        KeyCode::Down => {
            state.scatter_focus = match state.scatter_focus {
                ScatterFocus::Generations => ScatterFocus::XAxis,
                ScatterFocus::XAxis | ScatterFocus::YAxis => ScatterFocus::YAxis,
            };
        }
        KeyCode::Char('a') => state.scatter_generations.select_all(),
        KeyCode::Char('n') => state.scatter_generations.select_none(),
        KeyCode::Left | KeyCode::Right => {
            let forward = code == KeyCode::Right;
            match state.scatter_focus {
                ScatterFocus::Generations if forward => state.scatter_generations.move_right(),
                ScatterFocus::Generations => state.scatter_generations.move_left(),
                ScatterFocus::XAxis => state.scatter_x = cycle_attribute(state.scatter_x, forward),
                ScatterFocus::YAxis => state.scatter_y = cycle_attribute(state.scatter_y, forward),
            }
        }
        KeyCode::Char(' ') | KeyCode::Enter if state.scatter_focus == ScatterFocus::Generations => {
            state.scatter_generations.toggle_current();
        }
        _ => {}
    }
}

fn handle_compare_key(state: &mut AppState, code: KeyCode) {
    match code {
        KeyCode::Up | KeyCode::Left => state.compare_focus = CompareSlot::First,
        KeyCode::Down | KeyCode::Right => state.compare_focus = CompareSlot::Second,
        KeyCode::Enter => {
            state.active_popup = Some(PopupType::EntryPicker(EntryPicker::new(
                state.compare_focus,
            )));
        }
        KeyCode::Char('s') => {
            std::mem::swap(&mut state.compare_first, &mut state.compare_second);
        }
        _ => {}
    }
}
