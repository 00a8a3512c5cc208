use crate::types::numeric::finite;
use crate::types::records::aqi::AqiRecord;
use chrono::NaiveDate;
use ordered_float::OrderedFloat;
use std::collections::BTreeMap;

/// Highest AQI among `records`, ignoring missing and non-finite values.
///
/// Returns `None` when no record carries a usable AQI, so "no data" is never
/// reported as 0.
pub fn max_aqi<'a>(records: impl IntoIterator<Item = &'a AqiRecord>) -> Option<f64> {
    records
        .into_iter()
        .filter_map(|record| finite(record.aqi))
        .map(OrderedFloat)
        .max()
        .map(|max| max.0)
}

/// Per-day AQI maxima.
///
/// Records without a timestamp are skipped. A day appears in the map only if at least
/// one of its records has a usable AQI.
///
/// # Examples
///
/// ```
/// use airquality::{daily_max_aqi, AqiRecord};
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
/// let records = vec![
///     AqiRecord { date: day.and_hms_opt(1, 0, 0), aqi: Some(40.0), ..Default::default() },
///     AqiRecord { date: day.and_hms_opt(2, 0, 0), aqi: Some(95.0), ..Default::default() },
///     AqiRecord { date: day.and_hms_opt(3, 0, 0), aqi: None, ..Default::default() },
/// ];
/// assert_eq!(daily_max_aqi(&records).get(&day), Some(&95.0));
/// ```
pub fn daily_max_aqi(records: &[AqiRecord]) -> BTreeMap<NaiveDate, f64> {
    let mut by_day: BTreeMap<NaiveDate, Vec<&AqiRecord>> = BTreeMap::new();
    for record in records {
        if let Some(day) = record.day() {
            by_day.entry(day).or_default().push(record);
        }
    }
    by_day
        .into_iter()
        .filter_map(|(day, day_records)| max_aqi(day_records).map(|max| (day, max)))
        .collect()
}
