//! Interactive terminal dashboard.
//!
//! One [`AppState`] holds every widget value. Chart data is derived from
//! those values on draw and memoized by dataset fingerprint and widget state,
//! so frames drawn without a widget change reuse the stored result.

pub mod compare_view;
pub mod component;
pub mod dataset_view;
pub mod entry_picker;
pub mod generation_checkboxes;
pub mod handlers;
pub mod help_overlay;
pub mod scatter_chart;
pub mod status_bar;
pub mod theme;
pub mod type_chart;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame, Terminal,
};

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::models::{Attribute, Dataset, EntryRef};
use crate::services::memo::{DistributionKey, ScatterKey};
use crate::services::{
    aggregate_types, build_scatter, compare::compare, filter_by_generation, CompareError,
    Comparison, GenerationFilter, Memo, ScatterPlot, TypeDistribution,
};

pub use component::{Component, ComponentEvent};
pub use entry_picker::{CompareSlot, EntryPicker};
pub use generation_checkboxes::GenerationCheckboxes;
pub use help_overlay::HelpOverlay;
pub use theme::Theme;

use dataset_view::DatasetView;
use status_bar::StatusBar;

/// Dashboard sections, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    /// Full table
    Dataset,
    /// Type distribution chart
    Types,
    /// Attribute scatter plot
    Scatter,
    /// Two-entry comparison
    Compare,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Self; 4] = [Self::Dataset, Self::Types, Self::Scatter, Self::Compare];

    /// Tab caption.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dataset => "Dataset",
            Self::Types => "Types",
            Self::Scatter => "Scatter",
            Self::Compare => "Compare",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }

    /// Following tab, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Preceding tab, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Which row of the scatter controls has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScatterFocus {
    /// Generation checkboxes
    Generations,
    /// X axis radio
    XAxis,
    /// Y axis radio
    YAxis,
}

/// Popup currently drawn over the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupType {
    /// Entry search for one compare slot
    EntryPicker(EntryPicker),
    /// Key binding reference
    Help(HelpOverlay),
}

/// Application state
pub struct AppState {
    /// Loaded dataset (never mutated)
    pub dataset: Arc<Dataset>,
    /// User configuration
    pub config: Config,
    /// Active color theme
    pub theme: Theme,
    /// Visible tab
    pub tab: Tab,
    /// Dataset tab scroll state
    pub dataset_view: DatasetView,
    /// Checkboxes of the Types tab
    pub types_generations: GenerationCheckboxes,
    /// Checkboxes of the Scatter tab, independent of the Types tab
    pub scatter_generations: GenerationCheckboxes,
    /// X axis attribute
    pub scatter_x: Attribute,
    /// Y axis attribute
    pub scatter_y: Attribute,
    /// Focused scatter control
    pub scatter_focus: ScatterFocus,
    /// First compared entry
    pub compare_first: EntryRef,
    /// Second compared entry
    pub compare_second: EntryRef,
    /// Slot Enter edits on the Compare tab
    pub compare_focus: CompareSlot,
    /// Popup drawn on top, if any
    pub active_popup: Option<PopupType>,
    /// Set when the loop should exit
    pub should_quit: bool,
    distributions: Memo<DistributionKey, TypeDistribution>,
    scatters: Memo<ScatterKey, ScatterPlot>,
}

impl AppState {
    /// Builds the initial widget state: all generations checked, the first
    /// two attributes on the axes and the 1st and 4th entries compared.
    #[must_use]
    pub fn new(dataset: Arc<Dataset>, config: Config) -> Self {
        let default_ref = |position: usize| {
            dataset
                .get(position)
                .or_else(|| dataset.entries().last())
                .map_or(EntryRef::Number(0), |e| EntryRef::Number(e.pokedex_number))
        };
        let compare_first = default_ref(0);
        let compare_second = default_ref(3);
        let active_popup = config
            .ui
            .show_help_on_startup
            .then(|| PopupType::Help(HelpOverlay::default()));

        Self {
            theme: Theme::from_mode(config.ui.theme_mode),
            dataset,
            config,
            tab: Tab::Dataset,
            dataset_view: DatasetView::default(),
            types_generations: GenerationCheckboxes::default(),
            scatter_generations: GenerationCheckboxes::default(),
            scatter_x: Attribute::ALL[0],
            scatter_y: Attribute::ALL[1],
            scatter_focus: ScatterFocus::Generations,
            compare_first,
            compare_second,
            compare_focus: CompareSlot::First,
            active_popup,
            should_quit: false,
            distributions: Memo::new(),
            scatters: Memo::new(),
        }
    }

    /// Entries selected by the Types tab checkboxes.
    #[must_use]
    pub fn types_filter(&self) -> GenerationFilter<'_> {
        filter_by_generation(&self.dataset, self.types_generations.selection)
    }

    /// Entries selected by the Scatter tab checkboxes.
    #[must_use]
    pub fn scatter_filter(&self) -> GenerationFilter<'_> {
        filter_by_generation(&self.dataset, self.scatter_generations.selection)
    }

    /// Type distribution of the Types tab selection.
    #[must_use]
    pub fn type_distribution(&self) -> Arc<TypeDistribution> {
        let key = (
            self.dataset.fingerprint().to_string(),
            self.types_generations.selection,
        );
        self.distributions.get_or_insert_with(key, || {
            aggregate_types(self.types_filter().entries().iter().copied())
        })
    }

    /// Scatter plot of the Scatter tab selection and axes.
    #[must_use]
    pub fn scatter_plot(&self) -> Arc<ScatterPlot> {
        let key = (
            self.dataset.fingerprint().to_string(),
            self.scatter_generations.selection,
            self.scatter_x,
            self.scatter_y,
        );
        self.scatters.get_or_insert_with(key, || {
            build_scatter(
                self.scatter_filter().entries().iter().copied(),
                self.scatter_x,
                self.scatter_y,
            )
        })
    }

    /// Comparison of the two chosen entries over every attribute.
    pub fn comparison(&self) -> Result<Comparison, CompareError> {
        compare(
            &self.dataset,
            &self.compare_first,
            &self.compare_second,
            &Attribute::ALL,
        )
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, state))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handlers::handle_key_event(state, key);
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    let theme = &state.theme;
    let full_bg = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_tabs(f, chunks[0], state);

    match state.tab {
        Tab::Dataset => state
            .dataset_view
            .render(f, chunks[1], &state.dataset, theme),
        Tab::Types => render_types_tab(f, chunks[1], state),
        Tab::Scatter => render_scatter_tab(f, chunks[1], state),
        Tab::Compare => render_compare_tab(f, chunks[1], state),
    }

    StatusBar::render(f, chunks[2], state, theme);

    match &state.active_popup {
        Some(PopupType::EntryPicker(picker)) => {
            picker.render(f, centered_rect(60, 70, f.area()), theme, &state.dataset);
        }
        Some(PopupType::Help(help)) => {
            help.render(f, centered_rect(60, 70, f.area()), theme, &());
        }
        None => {}
    }
}

fn render_tabs(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let titles: Vec<String> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, t)| format!("{} {}", i + 1, t.title()))
        .collect();
    let tabs = Tabs::new(titles)
        .select(state.tab.index())
        .block(
            Block::default()
                .title(format!(" {APP_NAME} "))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary)),
        )
        .style(Style::default().fg(theme.text_secondary))
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, area);
}

fn render_types_tab(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);
    state
        .types_generations
        .render(f, chunks[0], &state.theme, true);
    type_chart::render_type_chart(f, chunks[1], &state.type_distribution(), &state.theme);
}

fn render_attribute_radios(
    f: &mut Frame,
    area: Rect,
    title: &str,
    selected: Attribute,
    focused: bool,
    theme: &Theme,
) {
    let spans: Vec<Span> = Attribute::ALL
        .iter()
        .flat_map(|attribute| {
            let on = *attribute == selected;
            let mark = if on { "(•)" } else { "( )" };
            let mut style = Style::default().fg(theme.text);
            if on {
                style = style.fg(if focused { theme.accent } else { theme.primary });
                style = style.add_modifier(Modifier::BOLD);
            }
            [
                Span::styled(format!("{mark} {}", attribute.label()), style),
                Span::raw("  "),
            ]
        })
        .collect();

    let border = if focused { theme.accent } else { theme.primary };
    let radios = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    f.render_widget(radios, area);
}

fn render_scatter_tab(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(8),
        ])
        .split(area);
    let theme = &state.theme;
    state.scatter_generations.render(
        f,
        chunks[0],
        theme,
        state.scatter_focus == ScatterFocus::Generations,
    );
    render_attribute_radios(
        f,
        chunks[1],
        "X axis",
        state.scatter_x,
        state.scatter_focus == ScatterFocus::XAxis,
        theme,
    );
    render_attribute_radios(
        f,
        chunks[2],
        "Y axis",
        state.scatter_y,
        state.scatter_focus == ScatterFocus::YAxis,
        theme,
    );
    scatter_chart::render_scatter_chart(f, chunks[3], &state.scatter_plot(), theme);
}

fn render_compare_tab(f: &mut Frame, area: Rect, state: &AppState) {
    match state.comparison() {
        Ok(comparison) => {
            compare_view::render_compare_view(
                f,
                area,
                &comparison,
                state.compare_focus,
                &state.theme,
            );
        }
        Err(err) => {
            let message = Paragraph::new(err.to_string())
                .style(Style::default().fg(state.theme.error))
                .block(
                    Block::default()
                        .title(" Compare ")
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(state.theme.primary)),
                );
            f.render_widget(message, area);
        }
    }
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
