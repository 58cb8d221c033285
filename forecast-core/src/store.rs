use crate::{
    error::LoadError,
    feed::ForecastSource,
    model::Forecast,
};

/// In-memory collection of all loaded forecasts, in feed arrival order
/// until a sort reorders it.
///
/// The store owns its records outright and only ever returns clones
/// from queries. Duplicates from the feed are kept as-is; there is no
/// uniqueness constraint on (location, date). Not safe for concurrent
/// mutation; the whole design is single-threaded.
#[derive(Debug, Default)]
pub struct ForecastStore {
    forecasts: Vec<Forecast>,
}

impl ForecastStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the full feed from `source` and append one record per
    /// entry, in source order. All-or-nothing: on any error the store is
    /// left untouched. Returns the number of records appended.
    ///
    /// Normally called once per store lifetime, but a second call
    /// appends rather than replaces.
    pub async fn load(&mut self, source: &dyn ForecastSource) -> Result<usize, LoadError> {
        let entries = source.fetch().await?;
        let loaded = entries.len();

        self.forecasts.extend(entries.into_iter().map(Forecast::from));

        tracing::debug!(records = loaded, total = self.forecasts.len(), "feed loaded");
        Ok(loaded)
    }

    pub fn records(&self) -> &[Forecast] {
        &self.forecasts
    }

    pub fn len(&self) -> usize {
        self.forecasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forecasts.is_empty()
    }

    /// Reorder ascending by date, in place. `sort_by` is stable, so
    /// records sharing a date keep their prior relative order.
    pub fn sort_by_date(&mut self) {
        self.forecasts.sort_by(|a, b| a.date().cmp(b.date()));
    }

    /// Reorder ascending by location name, in place. Stable.
    pub fn sort_by_location_name(&mut self) {
        self.forecasts
            .sort_by(|a, b| a.location_name().cmp(b.location_name()));
    }

    /// Reorder descending by maximum temperature, in place. Stable.
    /// Hottest first, unlike the other two sorts; that direction is
    /// deliberate.
    pub fn sort_by_max_temperature(&mut self) {
        self.forecasts
            .sort_by(|a, b| b.max_temp().cmp(&a.max_temp()));
    }

    /// All records for `location_name`, exact case-sensitive match, in
    /// current store order. Empty when nothing matches.
    pub fn filter_by_location_name(&self, location_name: &str) -> Vec<Forecast> {
        self.forecasts
            .iter()
            .filter(|f| f.location_name() == location_name)
            .cloned()
            .collect()
    }

    /// All records for the ISO date `date`, exact match.
    pub fn filter_by_date(&self, date: &str) -> Vec<Forecast> {
        self.forecasts
            .iter()
            .filter(|f| f.date() == date)
            .cloned()
            .collect()
    }

    /// All records matching both the date and the location name.
    pub fn filter_by_date_and_location(&self, date: &str, location_name: &str) -> Vec<Forecast> {
        self.forecasts
            .iter()
            .filter(|f| f.date() == date && f.location_name() == location_name)
            .cloned()
            .collect()
    }

    /// Every distinct location name in the store, sorted ascending,
    /// deduplicated.
    pub fn location_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .forecasts
            .iter()
            .map(|f| f.location_name().to_string())
            .collect();

        names.sort();
        names.dedup();
        names
    }
}
