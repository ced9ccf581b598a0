//! Application state and event loop

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget, DefaultTerminal, Frame};

use crate::services::insights::generate_insights;
use crate::services::{PeriodView, Resolver, Selection};
use crate::types::{Dataset, Metric, Result};

use super::theme::Theme;
use super::widgets::{
    activity::ActivityView,
    charts::ChartsView,
    help::HelpPopup,
    insights::{next_frame, InsightsPanel, InsightsState},
    overview::OverviewView,
    tabs::Tab,
};

/// Main application
pub struct App {
    dataset: Dataset,
    selection: Selection,
    view: PeriodView,
    current_tab: Tab,
    chart_metric: Metric,
    show_help: bool,
    insights: InsightsState,
    insights_rx: Option<mpsc::Receiver<String>>,
    should_quit: bool,
    theme: Theme,
}

impl App {
    /// Create an app with the most recent month selected
    pub fn new(dataset: Dataset, theme: Theme) -> Result<Self> {
        let selection = Selection::Month(dataset.last_month().to_string());
        let view = Resolver::resolve(&dataset, &selection)?;
        Ok(Self {
            dataset,
            selection,
            view,
            current_tab: Tab::default(),
            chart_metric: Metric::default(),
            show_help: false,
            insights: InsightsState::default(),
            insights_rx: None,
            should_quit: false,
            theme,
        })
    }

    /// Handle keyboard events
    pub fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            if key.kind == KeyEventKind::Press {
                if self.show_help {
                    // Help popup closes on any key
                    self.show_help = false;
                    return;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        self.should_quit = true;
                    }
                    KeyCode::Tab => {
                        self.current_tab = self.current_tab.next();
                    }
                    KeyCode::BackTab => {
                        self.current_tab = self.current_tab.prev();
                    }
                    KeyCode::Char(c @ '1'..='4') => {
                        if let Some(tab) = Tab::from_number(c as u8 - b'0') {
                            self.current_tab = tab;
                        }
                    }
                    KeyCode::Char('?') => {
                        self.show_help = true;
                    }
                    KeyCode::Left | KeyCode::Char('h') => {
                        self.cycle_period(-1);
                    }
                    KeyCode::Right | KeyCode::Char('l') => {
                        self.cycle_period(1);
                    }
                    KeyCode::Char('v') | KeyCode::Char('V') => {
                        self.toggle_mode();
                    }
                    KeyCode::Up | KeyCode::Char('k') if self.current_tab == Tab::Charts => {
                        self.chart_metric = self.chart_metric.prev();
                    }
                    KeyCode::Down | KeyCode::Char('j') if self.current_tab == Tab::Charts => {
                        self.chart_metric = self.chart_metric.next();
                    }
                    KeyCode::Char('g') | KeyCode::Char('G')
                        if self.current_tab == Tab::Insights =>
                    {
                        self.start_insights();
                    }
                    _ => {}
                }
            }
        }
    }

    /// Move the selection to the previous/next period in the current mode
    fn cycle_period(&mut self, step: i64) {
        let labels: Vec<String> = match &self.selection {
            Selection::Month(_) => self
                .dataset
                .records()
                .iter()
                .map(|r| r.month.clone())
                .collect(),
            Selection::Quarter(_) => self
                .dataset
                .quarters()
                .iter()
                .map(|q| q.to_string())
                .collect(),
        };
        let Some(position) = labels.iter().position(|l| l == self.selection.label()) else {
            return;
        };

        let len = labels.len() as i64;
        let next = (position as i64 + step).rem_euclid(len) as usize;
        let selection = match &self.selection {
            Selection::Month(_) => Selection::Month(labels[next].clone()),
            Selection::Quarter(_) => Selection::Quarter(labels[next].clone()),
        };
        self.select(selection);
    }

    /// Toggle between month and quarter mode, staying on the same span:
    /// a month widens to its quarter, a quarter narrows to its last month.
    fn toggle_mode(&mut self) {
        let selection = match &self.selection {
            Selection::Month(label) => {
                match self.dataset.month_index(label) {
                    Some(index) => {
                        Selection::Quarter(self.dataset.records()[index].quarter.clone())
                    }
                    None => return,
                }
            }
            Selection::Quarter(label) => {
                let months = self.dataset.quarter_records(label);
                match months.last() {
                    Some(record) => Selection::Month(record.month.clone()),
                    None => return,
                }
            }
        };
        self.select(selection);
    }

    /// Apply a new selection; the summary belongs to the old period, so
    /// its state resets and any in-flight result is discarded.
    fn select(&mut self, selection: Selection) {
        // Labels come from the dataset itself; resolution cannot miss
        if let Ok(view) = Resolver::resolve(&self.dataset, &selection) {
            self.selection = selection;
            self.view = view;
            self.insights = InsightsState::Idle;
            self.insights_rx = None;
        }
    }

    /// Kick off summary generation in a background thread.
    /// A request already in flight is left alone.
    fn start_insights(&mut self) {
        if self.insights.is_generating() {
            return;
        }

        let (tx, rx) = mpsc::channel();
        let label = self.view.label.clone();
        let records = self.view.months.clone();
        thread::spawn(move || {
            let _ = tx.send(generate_insights(&label, &records));
        });

        self.insights_rx = Some(rx);
        self.insights = InsightsState::Generating { spinner_frame: 0 };
    }

    /// Check for a settled insights request (non-blocking)
    pub fn poll_insights(&mut self) {
        if let Some(rx) = &self.insights_rx {
            if let Ok(text) = rx.try_recv() {
                self.insights = InsightsState::Done { text };
                self.insights_rx = None;
            }
        }
    }

    /// Update spinner animation
    pub fn tick(&mut self) {
        if let InsightsState::Generating { spinner_frame } = &self.insights {
            self.insights = InsightsState::Generating {
                spinner_frame: next_frame(*spinner_frame),
            };
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Draw the application
    pub fn draw(&self, frame: &mut Frame) {
        frame.render_widget(self, frame.area());
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.current_tab {
            Tab::Overview => {
                OverviewView::new(&self.view, self.theme)
                    .with_tab(self.current_tab)
                    .render(area, buf);
            }
            Tab::Charts => {
                ChartsView::new(&self.view, self.chart_metric, self.theme)
                    .with_tab(self.current_tab)
                    .render(area, buf);
            }
            Tab::Activity => {
                ActivityView::new(self.dataset.records(), self.theme)
                    .with_tab(self.current_tab)
                    .render(area, buf);
            }
            Tab::Insights => {
                InsightsPanel::new(&self.insights, &self.view.label, self.theme)
                    .with_tab(self.current_tab)
                    .render(area, buf);
            }
        }

        // Render help popup overlay if active
        if self.show_help {
            let popup_area = HelpPopup::centered_area(area);
            HelpPopup::new(self.theme).render(popup_area, buf);
        }
    }
}

/// Run the TUI application
pub fn run(dataset: Dataset) -> anyhow::Result<()> {
    // Theme detection reads the terminal; must happen before raw mode
    let theme = Theme::detect();
    let mut terminal = ratatui::init();
    let result = run_app(&mut terminal, dataset, theme);
    ratatui::restore();
    result
}

fn run_app(terminal: &mut DefaultTerminal, dataset: Dataset, theme: Theme) -> anyhow::Result<()> {
    let mut app = App::new(dataset, theme)?;

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        if app.should_quit() {
            break;
        }

        app.poll_insights();

        // Poll for events with 100ms timeout for spinner animation
        if event::poll(Duration::from_millis(100))? {
            app.handle_event(event::read()?);
        } else {
            app.tick();
        }
    }

    Ok(())
}
