#![forbid(unsafe_code)]

//! Calculator state and its update function.
//!
//! # Invariants
//!
//! 1. `marketing`, `website`, `matrix`, and `series` are always the values
//!    the estimator gives for the current `revenue`; every revenue change
//!    recomputes all of them.
//! 2. The input field is empty or the decimal form of `revenue`, with no
//!    leading zeros and no digits past saturation.
//! 3. A tick is requested only while some figure is still animating.

use std::time::Duration;

use bcalc_core::revenue::{decrement, digits_only, increment, is_low_revenue};
use bcalc_core::{
    AnimationSet, BudgetMatrix, BudgetRange, CalculatorConfig, Complexity, Priority, SeriesPoint,
    generate_series, marketing_suggestion, sanitize_revenue_input, website_suggestion,
};
use bcalc_widgets::Buffer;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::runtime::{Cmd, Event, Model};

/// One animated number on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Figure {
    MarketingMin,
    MarketingMax,
    WebsiteMin,
    WebsiteMax,
}

/// Selection movement in the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Increment,
    Decrement,
    Digit(char),
    Backspace,
    Paste(String),
    Select(Move),
    OpenDetails,
    CloseDetails,
    Tick(Duration),
    Redraw,
    Quit,
    Ignore,
}

impl From<KeyEvent> for Msg {
    fn from(key: KeyEvent) -> Self {
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Msg::Quit,
            KeyCode::Char('q') => Msg::Quit,
            KeyCode::Char('+') => Msg::Increment,
            KeyCode::Char('-') => Msg::Decrement,
            KeyCode::Char(c) if c.is_ascii_digit() => Msg::Digit(c),
            KeyCode::Char('h') => Msg::Select(Move::Left),
            KeyCode::Char('l') => Msg::Select(Move::Right),
            KeyCode::Char('k') => Msg::Select(Move::Up),
            KeyCode::Char('j') => Msg::Select(Move::Down),
            KeyCode::Char('?') | KeyCode::Enter => Msg::OpenDetails,
            KeyCode::Esc => Msg::CloseDetails,
            KeyCode::Backspace => Msg::Backspace,
            KeyCode::Up if shift => Msg::Select(Move::Up),
            KeyCode::Down if shift => Msg::Select(Move::Down),
            KeyCode::Up => Msg::Increment,
            KeyCode::Down => Msg::Decrement,
            KeyCode::Left => Msg::Select(Move::Left),
            KeyCode::Right => Msg::Select(Move::Right),
            _ => Msg::Ignore,
        }
    }
}

impl From<Event> for Msg {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(key) => Msg::from(key),
            Event::Paste(text) => Msg::Paste(text),
            Event::Resize(..) => Msg::Redraw,
            Event::Tick(dt) => Msg::Tick(dt),
        }
    }
}

/// The calculator screen.
#[derive(Debug, Clone)]
pub struct CalculatorApp {
    revenue: u64,
    input: String,
    marketing: BudgetRange,
    website: BudgetRange,
    matrix: BudgetMatrix,
    series: Vec<SeriesPoint>,
    figures: AnimationSet<Figure>,
    selected: (Priority, Complexity),
    details_open: bool,
    frame_interval: Duration,
}

impl CalculatorApp {
    /// Start at `revenue` with figures settled on their values.
    pub fn new(revenue: u64, config: &CalculatorConfig) -> Self {
        let mut app = Self {
            revenue,
            input: revenue.to_string(),
            marketing: BudgetRange::default(),
            website: BudgetRange::default(),
            matrix: BudgetMatrix::default(),
            series: Vec::new(),
            figures: AnimationSet::with_duration(config.animation_duration()),
            selected: (Priority::SignificantInfluence, Complexity::Average),
            details_open: false,
            frame_interval: config.frame_interval(),
        };
        app.recompute();
        app
    }

    fn recompute(&mut self) {
        self.marketing = marketing_suggestion(self.revenue);
        self.website = website_suggestion(self.revenue);
        self.matrix = BudgetMatrix::compute(self.revenue);
        self.series = generate_series(self.revenue);

        let targets = [
            (Figure::MarketingMin, self.marketing.min),
            (Figure::MarketingMax, self.marketing.max),
            (Figure::WebsiteMin, self.website.min),
            (Figure::WebsiteMax, self.website.max),
        ];
        for (figure, target) in targets {
            self.figures.retarget(figure, target as f64);
        }

        tracing::debug!(
            revenue = self.revenue,
            marketing = ?self.marketing,
            website = ?self.website,
            "budgets recomputed"
        );
    }

    fn set_revenue(&mut self, revenue: u64) -> Cmd<Msg> {
        if revenue == self.revenue {
            return Cmd::none();
        }
        self.revenue = revenue;
        self.recompute();
        self.frame_cmd()
    }

    fn frame_cmd(&self) -> Cmd<Msg> {
        if self.figures.is_animating() {
            Cmd::tick(self.frame_interval)
        } else {
            Cmd::none()
        }
    }

    fn step_to(&mut self, revenue: u64) -> Cmd<Msg> {
        self.input = revenue.to_string();
        self.set_revenue(revenue)
    }

    fn edit_field(&mut self, edit: impl FnOnce(&mut String)) -> Cmd<Msg> {
        edit(&mut self.input);
        let digits = digits_only(&self.input);
        let revenue = sanitize_revenue_input(&digits);
        // An empty field stays empty; anything else reads back as the value.
        self.input = if digits.is_empty() {
            digits
        } else {
            revenue.to_string()
        };
        self.set_revenue(revenue)
    }

    fn move_selection(&mut self, direction: Move) {
        let (priority, complexity) = self.selected;
        let (mut row, mut col) = (priority.index(), complexity.index());
        match direction {
            Move::Up => row = row.saturating_sub(1),
            Move::Down => row = (row + 1).min(Priority::ALL.len() - 1),
            Move::Left => col = col.saturating_sub(1),
            Move::Right => col = (col + 1).min(Complexity::ALL.len() - 1),
        }
        self.selected = (Priority::ALL[row], Complexity::ALL[col]);
    }

    pub fn revenue(&self) -> u64 {
        self.revenue
    }

    /// Contents of the revenue field.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn marketing(&self) -> BudgetRange {
        self.marketing
    }

    pub fn website(&self) -> BudgetRange {
        self.website
    }

    pub fn matrix(&self) -> &BudgetMatrix {
        &self.matrix
    }

    pub fn series(&self) -> &[SeriesPoint] {
        &self.series
    }

    pub fn selected(&self) -> (Priority, Complexity) {
        self.selected
    }

    pub fn details_open(&self) -> bool {
        self.details_open
    }

    pub fn is_low_revenue(&self) -> bool {
        is_low_revenue(self.revenue)
    }

    pub fn is_animating(&self) -> bool {
        self.figures.is_animating()
    }

    /// The value currently on screen for `figure`.
    pub fn displayed(&self, figure: Figure) -> f64 {
        self.figures.value(&figure).unwrap_or_default()
    }

    /// A range built from two displayed figures.
    pub fn displayed_range(&self, min: Figure, max: Figure) -> BudgetRange {
        BudgetRange::new(
            self.displayed(min).round() as u64,
            self.displayed(max).round() as u64,
        )
    }
}

impl Model for CalculatorApp {
    type Message = Msg;

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        match msg {
            Msg::Quit => Cmd::quit(),
            Msg::Increment => self.step_to(increment(self.revenue)),
            Msg::Decrement => self.step_to(decrement(self.revenue)),
            Msg::Digit(c) => self.edit_field(|field| field.push(c)),
            Msg::Backspace => self.edit_field(|field| {
                field.pop();
            }),
            Msg::Paste(text) => self.edit_field(|field| field.push_str(&text)),
            Msg::Select(direction) => {
                if !self.details_open {
                    self.move_selection(direction);
                }
                Cmd::none()
            }
            Msg::OpenDetails => {
                self.details_open = true;
                Cmd::none()
            }
            Msg::CloseDetails => {
                self.details_open = false;
                Cmd::none()
            }
            Msg::Tick(dt) => {
                self.figures.tick(dt);
                self.frame_cmd()
            }
            Msg::Redraw | Msg::Ignore => Cmd::none(),
        }
    }

    fn view(&self, buf: &mut Buffer) {
        crate::view::render(self, buf.area(), buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(revenue: u64) -> CalculatorApp {
        CalculatorApp::new(revenue, &CalculatorConfig::default())
    }

    fn key(code: KeyCode) -> Msg {
        Msg::from(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn settle(app: &mut CalculatorApp) {
        let mut cmd = Cmd::tick(Duration::ZERO);
        let mut guard = 0;
        while matches!(cmd, Cmd::Tick(_)) && guard < 1_000 {
            cmd = app.update(Msg::Tick(Duration::from_millis(16)));
            guard += 1;
        }
    }

    #[test]
    fn starts_settled_on_default_budgets() {
        let app = app(100_000_000);
        assert!(!app.is_animating());
        assert_eq!(app.marketing(), BudgetRange::new(5_000_000, 10_000_000));
        assert_eq!(app.website(), BudgetRange::new(188_000, 300_000));
        assert_eq!(app.displayed(Figure::WebsiteMin), 188_000.0);
        assert_eq!(app.series().len(), 10);
    }

    #[test]
    fn increment_recomputes_and_requests_frames() {
        let mut app = app(100_000_000);
        let cmd = app.update(Msg::Increment);
        assert!(matches!(cmd, Cmd::Tick(d) if d == Duration::from_millis(16)));
        assert_eq!(app.revenue(), 101_000_000);
        assert_eq!(app.input(), "101000000");
        assert_eq!(app.marketing(), BudgetRange::new(5_050_000, 10_100_000));
        assert!(app.is_animating());

        settle(&mut app);
        assert!(!app.is_animating());
        assert_eq!(app.displayed(Figure::MarketingMin), 5_050_000.0);
        assert_eq!(app.displayed(Figure::MarketingMax), 10_100_000.0);
    }

    #[test]
    fn decrement_floors_at_one_million() {
        let mut app = app(1_500_000);
        app.update(Msg::Decrement);
        assert_eq!(app.revenue(), 1_000_000);
        app.update(Msg::Decrement);
        assert_eq!(app.revenue(), 1_000_000);
        assert!(app.is_low_revenue());
    }

    #[test]
    fn typing_edits_the_field() {
        let mut app = app(100_000_000);
        for _ in 0..9 {
            app.update(Msg::Backspace);
        }
        assert_eq!(app.input(), "");
        assert_eq!(app.revenue(), 0);
        assert!(app.is_low_revenue());
        // Budgets fall back to the baseline revenue.
        let baseline = BudgetMatrix::compute(10_000_000);
        for priority in Priority::ALL {
            for complexity in Complexity::ALL {
                assert_eq!(
                    app.matrix().get(priority, complexity),
                    baseline.get(priority, complexity)
                );
            }
        }

        for c in "25000000".chars() {
            app.update(Msg::Digit(c));
        }
        assert_eq!(app.revenue(), 25_000_000);
        assert!(!app.is_low_revenue());
    }

    #[test]
    fn paste_is_sanitized() {
        let mut app = app(0);
        app.update(Msg::Backspace);
        app.update(Msg::Paste("$1,250,000.".to_string()));
        assert_eq!(app.input(), "1250000");
        assert_eq!(app.revenue(), 1_250_000);
    }

    #[test]
    fn unchanged_revenue_requests_nothing() {
        let mut app = app(5);
        assert!(app.update(Msg::Paste("abc".into())).is_none());
    }

    #[test]
    fn selection_clamps_at_edges() {
        let mut app = app(100_000_000);
        for _ in 0..5 {
            app.update(Msg::Select(Move::Up));
            app.update(Msg::Select(Move::Left));
        }
        assert_eq!(app.selected(), (Priority::SupportiveRole, Complexity::Simple));
        for _ in 0..5 {
            app.update(Msg::Select(Move::Down));
            app.update(Msg::Select(Move::Right));
        }
        assert_eq!(app.selected(), (Priority::KeyDriver, Complexity::Complex));
    }

    #[test]
    fn details_modal_blocks_selection() {
        let mut app = app(100_000_000);
        app.update(Msg::OpenDetails);
        app.update(Msg::Select(Move::Down));
        assert_eq!(app.selected(), (Priority::SignificantInfluence, Complexity::Average));
        app.update(Msg::CloseDetails);
        assert!(!app.details_open());
    }

    #[test]
    fn key_bindings() {
        assert_eq!(key(KeyCode::Char('+')), Msg::Increment);
        assert_eq!(key(KeyCode::Up), Msg::Increment);
        assert_eq!(key(KeyCode::Down), Msg::Decrement);
        assert_eq!(key(KeyCode::Char('7')), Msg::Digit('7'));
        assert_eq!(key(KeyCode::Char('j')), Msg::Select(Move::Down));
        assert_eq!(key(KeyCode::Enter), Msg::OpenDetails);
        assert_eq!(key(KeyCode::Char('?')), Msg::OpenDetails);
        assert_eq!(key(KeyCode::Esc), Msg::CloseDetails);
        assert_eq!(key(KeyCode::Char('q')), Msg::Quit);
        assert_eq!(
            Msg::from(KeyEvent::new(KeyCode::Up, KeyModifiers::SHIFT)),
            Msg::Select(Move::Up)
        );
        assert_eq!(
            Msg::from(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Msg::Quit
        );
    }

    #[test]
    fn field_drops_leading_zeros() {
        let mut app = app(100_000_000);
        for _ in 0..9 {
            app.update(Msg::Backspace);
        }
        assert_eq!(app.input(), "");
        app.update(Msg::Paste("0005".into()));
        assert_eq!(app.input(), "5");
        assert_eq!(app.revenue(), 5);

        app.update(Msg::Backspace);
        app.update(Msg::Digit('0'));
        assert_eq!(app.input(), "0");
        app.update(Msg::Digit('7'));
        assert_eq!(app.input(), "7");
    }

    #[test]
    fn field_stops_growing_at_saturation() {
        let mut app = app(100_000_000);
        app.update(Msg::Paste("9".repeat(30)));
        assert_eq!(app.revenue(), u64::MAX);
        assert_eq!(app.input(), u64::MAX.to_string());
        app.update(Msg::Digit('1'));
        assert_eq!(app.input().len(), 20);
        assert_eq!(app.revenue(), u64::MAX);
    }

    #[test]
    fn zero_animation_snaps() {
        let config = CalculatorConfig {
            animation_ms: 0,
            ..CalculatorConfig::default()
        };
        let mut app = CalculatorApp::new(100_000_000, &config);
        assert!(app.update(Msg::Increment).is_none());
        assert_eq!(app.displayed(Figure::WebsiteMax), app.website().max as f64);
    }
}
