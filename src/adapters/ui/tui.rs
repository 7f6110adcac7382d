//! Implements InputPort. Inquire-based interactive form.
//!
//! Menu loop over a local DateForm: type a date, pick one from the calendar,
//! or calculate and show the result card.

use crate::adapters::ui::form::DateForm;
use crate::adapters::ui::presenter::{RESULT_TITLE, format_message};
use crate::adapters::ui::progress::simulate_loading;
use crate::domain::{CalendarDate, DomainError};
use crate::ports::InputPort;
use crate::usecases::EstimationService;
use async_trait::async_trait;
use chrono::{NaiveDate, Weekday};
use crossterm::style::Stylize;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::{DateSelect, InquireError, Select, Text};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Applies the inquire theme globally. Call once before the first prompt.
pub fn apply_theme() {
    let config = RenderConfig::default_colored()
        .with_prompt_prefix(Styled::new("♥").with_fg(Color::LightMagenta))
        .with_highlighted_option_prefix(Styled::new("➤").with_fg(Color::LightMagenta));
    inquire::set_global_render_config(config);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    EditFields,
    PickFromCalendar,
    Calculate,
    Quit,
}

impl MenuAction {
    const ALL: [MenuAction; 4] = [
        MenuAction::Calculate,
        MenuAction::EditFields,
        MenuAction::PickFromCalendar,
        MenuAction::Quit,
    ];
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuAction::EditFields => "Edit year / month / day",
            MenuAction::PickFromCalendar => "Pick from calendar",
            MenuAction::Calculate => "Calculate Creation Date",
            MenuAction::Quit => "Quit",
        };
        f.write_str(label)
    }
}

/// Bounds and starting point for the calendar picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CalendarWindow {
    min: Option<NaiveDate>,
    max: Option<NaiveDate>,
    /// Selected date clamped into `min..=max`.
    initial: NaiveDate,
}

impl CalendarWindow {
    fn new((min_year, max_year): (i32, i32), selected: NaiveDate) -> Self {
        let min = NaiveDate::from_ymd_opt(min_year, 1, 1);
        let max = NaiveDate::from_ymd_opt(max_year, 12, 31);
        let mut initial = selected;
        if let Some(lo) = min {
            initial = initial.max(lo);
        }
        if let Some(hi) = max {
            initial = initial.min(hi);
        }
        Self { min, max, initial }
    }
}

/// Esc or Ctrl-C map to `None`; anything else is a UI error.
fn cancellable<T>(res: Result<T, InquireError>) -> Result<Option<T>, DomainError> {
    match res {
        Ok(v) => Ok(Some(v)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(DomainError::Ui(e.to_string())),
    }
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    estimator: Arc<EstimationService>,
    year_range: (i32, i32),
    loading_delay: Duration,
}

impl TuiInputPort {
    pub fn new(
        estimator: Arc<EstimationService>,
        year_range: (i32, i32),
        loading_delay: Duration,
    ) -> Self {
        Self {
            estimator,
            year_range,
            loading_delay,
        }
    }

    fn today() -> Result<CalendarDate, DomainError> {
        CalendarDate::try_from(chrono::Local::now().date_naive())
    }

    fn edit_fields(&self, form: &mut DateForm) -> Result<(), DomainError> {
        let (year, month, day) = form.fields();
        let (year, month, day) = (year.to_string(), month.to_string(), day.to_string());

        let Some(year) = cancellable(Text::new("Year:").with_initial_value(&year).prompt())? else {
            return Ok(());
        };
        let Some(month) = cancellable(Text::new("Month:").with_initial_value(&month).prompt())?
        else {
            return Ok(());
        };
        let Some(day) = cancellable(Text::new("Day:").with_initial_value(&day).prompt())? else {
            return Ok(());
        };

        if let Err(e) = form.submit(year, month, day) {
            warn!(error = %e, "rejected date fields");
            println!("{}", format!("⚠ {}", e).yellow());
        }
        Ok(())
    }

    fn pick_from_calendar(&self, form: &mut DateForm) -> Result<(), DomainError> {
        let window = CalendarWindow::new(form.year_range(), form.selected().as_naive());
        let mut prompt = DateSelect::new("Pick a date:")
            .with_default(window.initial)
            .with_week_start(Weekday::Mon);
        if let Some(min_date) = window.min {
            prompt = prompt.with_min_date(min_date);
        }
        if let Some(max_date) = window.max {
            prompt = prompt.with_max_date(max_date);
        }
        let Some(picked) = cancellable(prompt.prompt())? else {
            return Ok(());
        };
        match CalendarDate::try_from(picked) {
            Ok(date) => form.select(date),
            Err(e) => println!("{}", format!("⚠ {}", e).yellow()),
        }
        Ok(())
    }

    async fn calculate(&self, form: &DateForm) {
        simulate_loading(self.loading_delay, "Calculating...").await;
        let result = self.estimator.estimate(form.selected());
        info!(target_date = %form.selected(), result = %result.date(), "estimate shown");
        println!();
        println!("{}", RESULT_TITLE.bold().magenta());
        println!("{}", format_message(&result));
        println!();
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        let mut form = DateForm::new(Self::today()?, self.year_range);
        println!("{}", "Select a Date".bold());

        loop {
            println!("Selected: {}", form.selected().long_format().cyan());
            let choice = cancellable(
                Select::new("What next?", MenuAction::ALL.to_vec())
                    .with_vim_mode(true)
                    .prompt(),
            )?;
            match choice {
                Some(MenuAction::EditFields) => self.edit_fields(&mut form)?,
                Some(MenuAction::PickFromCalendar) => self.pick_from_calendar(&mut form)?,
                Some(MenuAction::Calculate) => self.calculate(&form).await,
                Some(MenuAction::Quit) | None => break,
            }
        }

        info!("session ended");
        Ok(())
    }
}
