//! Exploratory analysis of the headline dataset.

use nova_config::AppConfig;
use nova_core::error::{NovaResult, TextError};
use nova_core::types::HeadlineRecord;
use nova_data::{format_optional, load_headlines, write_csv, write_json};
use nova_text::temporal::weekday_name;
use nova_text::{
    extract_topics, length_statistics, publisher_analysis, temporal_analysis, DistributionStats,
    LengthStatistics, PublisherAnalysis, TemporalAnalysis, Topic,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::report::EdaReport;

#[derive(Serialize)]
struct StatisticalAnalysis<'a> {
    char_length: Option<&'a DistributionStats>,
    word_length: Option<&'a DistributionStats>,
}

fn counts<K: ToString>(rows: &[(K, usize)]) -> Vec<[String; 2]> {
    rows.iter()
        .map(|(key, count)| [key.to_string(), count.to_string()])
        .collect()
}

fn write_lengths(dir: &Path, lengths: &LengthStatistics, files: &mut Vec<PathBuf>) -> NovaResult<()> {
    let path = dir.join("headline_length_stats.csv");
    write_csv(
        &path,
        &["", "headline_len_chars", "headline_len_words"],
        lengths.describe_rows().into_iter().map(|(label, chars, words)| {
            [
                label.to_string(),
                format_optional(Some(chars)),
                format_optional(Some(words)),
            ]
        }),
    )?;
    files.push(path);

    let path = dir.join("statistical_analysis.json");
    write_json(
        &path,
        &StatisticalAnalysis {
            char_length: lengths.char_length.as_ref(),
            word_length: lengths.word_length.as_ref(),
        },
    )?;
    files.push(path);
    Ok(())
}

fn write_publishers(
    dir: &Path,
    publishers: &PublisherAnalysis,
    files: &mut Vec<PathBuf>,
) -> NovaResult<()> {
    let path = dir.join("publisher_article_counts.csv");
    write_csv(
        &path,
        &["publisher", "article_count"],
        counts(&publishers.publisher_counts),
    )?;
    files.push(path);

    let path = dir.join("publisher_domain_counts.csv");
    write_csv(
        &path,
        &["publisher_domain", "article_count"],
        counts(&publishers.domain_counts),
    )?;
    files.push(path);

    let path = dir.join("publisher_concentration_stats.json");
    write_json(&path, &publishers.concentration)?;
    files.push(path);
    Ok(())
}

fn write_temporal(dir: &Path, temporal: &TemporalAnalysis, files: &mut Vec<PathBuf>) -> NovaResult<()> {
    let path = dir.join("daily_publication_counts.csv");
    write_csv(
        &path,
        &["publish_date", "article_count"],
        counts(&temporal.daily_counts),
    )?;
    files.push(path);

    let weekdays: Vec<(&str, usize)> = temporal
        .weekday_counts
        .iter()
        .map(|(day, count)| (weekday_name(*day), *count))
        .collect();
    let path = dir.join("weekday_publication_counts.csv");
    write_csv(
        &path,
        &["publish_dayofweek", "article_count"],
        counts(&weekdays),
    )?;
    files.push(path);

    let path = dir.join("hourly_publication_counts.csv");
    write_csv(
        &path,
        &["publish_hour_utc", "article_count"],
        counts(&temporal.hourly_counts),
    )?;
    files.push(path);

    if let Some(stats) = &temporal.statistics {
        let path = dir.join("time_series_statistics.json");
        write_json(&path, stats)?;
        files.push(path);
    }
    Ok(())
}

/// Topics, or `None` when the corpus leaves no vocabulary to model.
fn topics(records: &[HeadlineRecord], config: &AppConfig) -> NovaResult<Option<Vec<Topic>>> {
    match extract_topics(records, &config.topics) {
        Ok(report) => {
            for (topic, docs) in report.topics.iter().zip(&report.document_counts) {
                info!(topic = topic.topic, headlines = docs, "Topic: {}", topic.keywords.join(", "));
            }
            Ok(Some(report.topics))
        }
        Err(e @ (TextError::EmptyVocabulary { .. } | TextError::EmptyCorpus)) => {
            warn!("Skipping topic modeling: {}", e);
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Run every headline analysis and write the results under `paths.eda_output`.
pub fn run_eda(config: &AppConfig) -> NovaResult<EdaReport> {
    config.text.validate()?;
    let out = &config.paths.eda_output;

    info!(path = %config.paths.headlines.display(), "Loading headlines");
    let (records, load) = load_headlines(&config.paths.headlines)?;

    let mut files = Vec::new();

    let lengths = length_statistics(&records, &config.text);
    write_lengths(out, &lengths, &mut files)?;
    info!(
        skewness = ?lengths.char_length.as_ref().and_then(|d| d.skewness),
        "Headline length statistics computed"
    );

    let publishers = publisher_analysis(&records, &config.text);
    write_publishers(out, &publishers, &mut files)?;
    info!(
        publishers = publishers.concentration.total_publishers,
        gini = publishers.concentration.gini_coefficient,
        "Publisher analysis complete"
    );

    let temporal = temporal_analysis(&records, &config.text);
    write_temporal(out, &temporal, &mut files)?;
    info!(days = temporal.daily_counts.len(), "Time series analysis complete");

    let topics = topics(&records, config)?;
    if let Some(topics) = &topics {
        let path = out.join("topic_keywords.json");
        write_json(&path, topics)?;
        files.push(path);
    }

    let stats = temporal.statistics.as_ref();
    Ok(EdaReport {
        headlines: records.len(),
        skipped_rows: load.skipped,
        mean_char_length: lengths.char_length.as_ref().map(|d| d.mean),
        char_length_skewness: lengths.char_length.as_ref().and_then(|d| d.skewness),
        publishers: publishers.concentration.total_publishers,
        gini_coefficient: publishers.concentration.gini_coefficient,
        top_10_percentage: publishers.concentration.top_10_percentage,
        date_range: stats.map(|s| (s.date_range.start, s.date_range.end)),
        peak_hour: stats.map(|s| s.peak_hour),
        weekday_p_value: stats.map(|s| s.weekday_analysis.p_value),
        topics,
        files,
    })
}
