use forecast_core::Forecast;
use std::fmt::Write;

/// Which named fields a query view prints.
///
/// Each query already names the location and/or date in its heading, so
/// the per-record block drops the redundant fields. Selection happens
/// field by field here, not by slicing a pre-formatted string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordView {
    /// Everything except the location id and name (query by location).
    WithoutLocation,
    /// Everything except the date (query by date).
    WithoutDate,
    /// Station id plus the day's conditions (query by date and location).
    ConditionsOnly,
}

pub const SEPARATOR: &str =
    "--------------------------------------------------";

pub fn render(forecast: &Forecast, view: RecordView) -> String {
    let mut out = String::new();

    if matches!(view, RecordView::WithoutDate | RecordView::ConditionsOnly) {
        line(&mut out, "Location ID", forecast.location_id());
    }
    if matches!(view, RecordView::WithoutDate) {
        line(&mut out, "Location Name", forecast.location_name());
    }
    if matches!(view, RecordView::WithoutLocation) {
        line(&mut out, "Date", forecast.date());
    }

    line(&mut out, "Morning Forecast", forecast.morning_forecast());
    line(&mut out, "Afternoon Forecast", forecast.afternoon_forecast());
    line(&mut out, "Night Forecast", forecast.night_forecast());
    line(&mut out, "Summary Forecast", forecast.summary_forecast());
    line(&mut out, "Summary When", forecast.summary_when());
    line(&mut out, "Min Temperature", &format!("{}°C", forecast.min_temp()));
    line(&mut out, "Max Temperature", &format!("{}°C", forecast.max_temp()));

    out
}

/// Print a list of records with separators, like the original's
/// dash-ruled blocks.
pub fn print_records(forecasts: &[Forecast], view: RecordView) {
    for forecast in forecasts {
        println!("{SEPARATOR}");
        print!("{}", render(forecast, view));
    }
    println!("{SEPARATOR}");
}

fn line(out: &mut String, label: &str, value: &str) {
    // Labels padded to a fixed column, matching the feed browser's
    // original text layout.
    let _ = writeln!(out, "{label:<18}: {value}");
}
