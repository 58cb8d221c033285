use anyhow::Result;
use chrono::{Duration, NaiveDate};
use forecast_core::{Forecast, ForecastStore};
use inquire::{InquireError, Select, Text};
use std::fmt;

use crate::render::{self, RecordView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuCommand {
    Quit,
    ByLocation,
    ByDate,
    ByDateAndLocation,
}

const COMMANDS: [MenuCommand; 4] = [
    MenuCommand::Quit,
    MenuCommand::ByLocation,
    MenuCommand::ByDate,
    MenuCommand::ByDateAndLocation,
];

impl fmt::Display for MenuCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuCommand::Quit => "0. quit",
            MenuCommand::ByLocation => "1. list weather forecasts by location",
            MenuCommand::ByDate => "2. list weather forecasts by date",
            MenuCommand::ByDateAndLocation => "3. list weather forecasts by date and location",
        };
        f.write_str(label)
    }
}

/// Interactive query loop over a fully loaded store.
///
/// `today` is injected by the caller rather than read from a global
/// clock, so the date-window hint is deterministic under test.
pub struct Menu {
    store: ForecastStore,
    today: NaiveDate,
}

impl Menu {
    pub fn new(store: ForecastStore, today: NaiveDate) -> Self {
        Self { store, today }
    }

    pub fn run(self) -> Result<()> {
        println!("\n============================");
        println!("MALAYSIA WEATHER FORECASTING");
        println!("============================\n");

        loop {
            let command = match Select::new("command:", COMMANDS.to_vec()).prompt() {
                Ok(command) => command,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                    MenuCommand::Quit
                }
                Err(err) => return Err(err.into()),
            };

            match command {
                MenuCommand::Quit => {
                    println!("\nexiting...");
                    return Ok(());
                }
                MenuCommand::ByLocation => self.query_by_location()?,
                MenuCommand::ByDate => self.query_by_date()?,
                MenuCommand::ByDateAndLocation => self.query_by_date_and_location()?,
            }

            println!();
        }
    }

    fn query_by_location(&self) -> Result<()> {
        let Some(location_name) = self.pick_location()? else {
            return Ok(());
        };

        let forecasts = sorted_by_date(self.store.filter_by_location_name(&location_name));

        println!();
        if forecasts.is_empty() {
            println!("'{location_name}' is not a valid location name");
        } else {
            println!("Weather Forecasts for {location_name} for the Following Week:");
            render::print_records(&forecasts, RecordView::WithoutLocation);
        }

        Ok(())
    }

    fn query_by_date(&self) -> Result<()> {
        let Some(date) = self.prompt_date()? else {
            return Ok(());
        };

        let forecasts = sorted_by_location_name(self.store.filter_by_date(&date));

        println!();
        if forecasts.is_empty() {
            println!("'{date}' is not a valid date");
        } else {
            println!("Weather Forecasts for {date} in Malaysia:");
            render::print_records(&forecasts, RecordView::WithoutDate);
        }

        Ok(())
    }

    fn query_by_date_and_location(&self) -> Result<()> {
        let Some(location_name) = self.pick_location()? else {
            return Ok(());
        };
        let Some(date) = self.prompt_date()? else {
            return Ok(());
        };

        let forecasts = self
            .store
            .filter_by_date_and_location(&date, &location_name);

        println!();
        if forecasts.is_empty() {
            println!("no forecast for {location_name} on {date}");
        } else {
            println!("Weather Forecast for {date} in {location_name}, Malaysia:");
            render::print_records(&forecasts, RecordView::ConditionsOnly);
        }

        Ok(())
    }

    /// Pick a location from every distinct name in the store, one per
    /// row. An unknown or misspelled name cannot be entered this way;
    /// cancelling returns `None`.
    fn pick_location(&self) -> Result<Option<String>> {
        let names = self.store.location_names();
        if names.is_empty() {
            println!("\nthe feed contains no locations");
            return Ok(None);
        }

        match Select::new("location:", names).prompt() {
            Ok(name) => Ok(Some(name)),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Free-text date entry. An out-of-window or garbled date simply
    /// matches nothing downstream; the store does no input validation.
    fn prompt_date(&self) -> Result<Option<String>> {
        let (from, until) = query_window(self.today);
        let help = format!("enter a date from {from} to {until} (YYYY-MM-DD)");

        match Text::new("date:").with_help_message(&help).prompt() {
            Ok(date) => Ok(Some(date.trim().to_string())),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

/// The feed publishes today plus the next six days.
fn query_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (today, today + Duration::days(6))
}

fn sorted_by_date(mut forecasts: Vec<Forecast>) -> Vec<Forecast> {
    forecasts.sort_by(|a, b| a.date().cmp(b.date()));
    forecasts
}

fn sorted_by_location_name(mut forecasts: Vec<Forecast>) -> Vec<Forecast> {
    forecasts.sort_by(|a, b| a.location_name().cmp(b.location_name()));
    forecasts
}

#[cfg(test)]
mod tests {
    use super::*;
    use forecast_core::FeedEntry;

    #[test]
    fn query_window_spans_seven_days() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let (from, until) = query_window(today);

        assert_eq!(from.to_string(), "2024-06-01");
        assert_eq!(until.to_string(), "2024-06-07");
    }

    #[test]
    fn query_window_crosses_month_boundaries() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 28).unwrap();
        let (_, until) = query_window(today);

        assert_eq!(until.to_string(), "2024-07-04");
    }

    fn forecast(name: &str, date: &str) -> Forecast {
        let entry: FeedEntry = serde_json::from_value(serde_json::json!({
            "location": {"location_id": "St000", "location_name": name},
            "date": date,
            "morning_forecast": "No rain",
            "afternoon_forecast": "No rain",
            "night_forecast": "No rain",
            "summary_forecast": "No rain",
            "summary_when": "Throughout the day",
            "min_temp": 24,
            "max_temp": 32
        }))
        .unwrap();
        entry.into()
    }

    #[test]
    fn location_results_re_sort_by_date() {
        let forecasts = vec![
            forecast("Ipoh", "2024-06-03"),
            forecast("Ipoh", "2024-06-01"),
            forecast("Ipoh", "2024-06-02"),
        ];

        let sorted = sorted_by_date(forecasts);
        let dates: Vec<&str> = sorted.iter().map(|f| f.date()).collect();
        assert_eq!(dates, ["2024-06-01", "2024-06-02", "2024-06-03"]);
    }

    #[test]
    fn date_results_re_sort_by_location_name() {
        let forecasts = vec![
            forecast("Penang", "2024-06-01"),
            forecast("Ipoh", "2024-06-01"),
            forecast("Kuala Lumpur", "2024-06-01"),
        ];

        let sorted = sorted_by_location_name(forecasts);
        let names: Vec<&str> = sorted.iter().map(|f| f.location_name()).collect();
        assert_eq!(names, ["Ipoh", "Kuala Lumpur", "Penang"]);
    }
}
