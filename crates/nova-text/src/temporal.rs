//! Publication timing: daily, weekday and hourly volume.

use std::collections::BTreeMap;

use chrono::{NaiveDate, Weekday};
use nova_core::types::HeadlineRecord;
use serde::{Deserialize, Serialize};

use crate::params::TextParams;
use crate::stats::chi_square_uniform;

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English weekday name.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub total_days: i64,
}

/// Chi-square test of weekday counts against a uniform week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdayAnalysis {
    pub chi2_statistic: f64,
    pub p_value: f64,
    pub is_uniform: bool,
    pub interpretation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeakWeekday {
    pub publish_dayofweek: String,
    pub article_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesStatistics {
    pub date_range: DateRange,
    pub weekday_analysis: WeekdayAnalysis,
    pub peak_weekday: PeakWeekday,
    pub peak_hour: u32,
}

/// Article counts along the three time axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporalAnalysis {
    /// Ascending by date, only dates with articles
    pub daily_counts: Vec<(NaiveDate, usize)>,
    /// Days with articles, by count descending then Monday-first
    pub weekday_counts: Vec<(Weekday, usize)>,
    /// Ascending by hour, only hours with articles
    pub hourly_counts: Vec<(u32, usize)>,
    /// `None` for an empty collection
    pub statistics: Option<TimeSeriesStatistics>,
}

/// Count articles per day, weekday and hour and test the weekday spread.
pub fn temporal_analysis(records: &[HeadlineRecord], params: &TextParams) -> TemporalAnalysis {
    let mut daily: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    let mut hourly: BTreeMap<u32, usize> = BTreeMap::new();
    let mut week = [0usize; 7];
    for record in records {
        *daily.entry(record.publish_date()).or_insert(0) += 1;
        *hourly.entry(record.publish_hour()).or_insert(0) += 1;
        week[record.publish_weekday().num_days_from_monday() as usize] += 1;
    }

    let mut weekday_counts: Vec<(Weekday, usize)> = WEEK
        .iter()
        .zip(week)
        .filter(|(_, count)| *count > 0)
        .map(|(day, count)| (*day, count))
        .collect();
    // Stable sort keeps Monday-first order among ties
    weekday_counts.sort_by(|a, b| b.1.cmp(&a.1));

    let daily_counts: Vec<(NaiveDate, usize)> = daily.into_iter().collect();
    let hourly_counts: Vec<(u32, usize)> = hourly.into_iter().collect();

    let statistics = statistics(&daily_counts, &weekday_counts, &hourly_counts, &week, params);

    TemporalAnalysis {
        daily_counts,
        weekday_counts,
        hourly_counts,
        statistics,
    }
}

fn statistics(
    daily: &[(NaiveDate, usize)],
    weekdays: &[(Weekday, usize)],
    hourly: &[(u32, usize)],
    week: &[usize; 7],
    params: &TextParams,
) -> Option<TimeSeriesStatistics> {
    let (start, _) = daily.first()?;
    let (end, _) = daily.last()?;
    let (peak_day, peak_count) = weekdays.first()?;
    // Earliest hour wins ties
    let (peak_hour, _) = hourly
        .iter()
        .fold(None::<&(u32, usize)>, |best, entry| match best {
            Some(b) if b.1 >= entry.1 => Some(b),
            _ => Some(entry),
        })?;

    let observed: Vec<f64> = week.iter().map(|&c| c as f64).collect();
    let test = chi_square_uniform(&observed)?;
    let interpretation = if test.p_value < params.significance {
        "Significant weekday pattern detected"
    } else {
        "No significant weekday pattern"
    };

    Some(TimeSeriesStatistics {
        date_range: DateRange {
            start: *start,
            end: *end,
            total_days: (*end - *start).num_days(),
        },
        weekday_analysis: WeekdayAnalysis {
            chi2_statistic: test.statistic,
            p_value: test.p_value,
            is_uniform: test.p_value > params.significance,
            interpretation: interpretation.to_string(),
        },
        peak_weekday: PeakWeekday {
            publish_dayofweek: weekday_name(*peak_day).to_string(),
            article_count: *peak_count,
        },
        peak_hour: *peak_hour,
    })
}
