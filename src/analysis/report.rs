use crate::classifiers::Classifiers;
use crate::config::AnalyzerConfig;
use crate::models::{ChatRecordSet, ChatReport};

use super::awards::compute_awards;
use super::basic::{activity_span, basic_stats, busy_users};
use super::content::{most_common_emojis, most_common_words};
use super::timeline::{
    activity_heatmap, daily_timeline, hourly_activity, month_activity, monthly_timeline,
    weekly_activity,
};

/// Run every aggregation over `records`.
///
/// The content scans (emoji, words, awards) walk every message body and run on
/// the rayon pool alongside the cheaper field-based groupings.
pub fn build_report(
    records: &ChatRecordSet,
    config: &AnalyzerConfig,
    classifiers: &Classifiers,
) -> ChatReport {
    let urls = classifiers.urls.as_ref();
    let emojis = classifiers.emojis.as_ref();

    let ((basic, awards), ((top_emojis, top_words), timelines)) = rayon::join(
        || {
            rayon::join(
                || basic_stats(records, &config.media_placeholder, urls),
                || compute_awards(records, config, urls),
            )
        },
        || {
            rayon::join(
                || {
                    rayon::join(
                        || most_common_emojis(records, emojis, config.top_emojis),
                        || {
                            most_common_words(
                                records,
                                &config.media_placeholder,
                                urls,
                                config.top_words,
                            )
                        },
                    )
                },
                || {
                    (
                        monthly_timeline(records),
                        daily_timeline(records),
                        weekly_activity(records),
                        month_activity(records),
                        hourly_activity(records),
                        activity_heatmap(records),
                    )
                },
            )
        },
    );

    let (
        monthly_timeline,
        daily_timeline,
        weekly_activity,
        month_activity,
        hourly_activity,
        heatmap,
    ) = timelines;

    tracing::debug!(
        messages = basic.total_messages,
        authors = records.authors().len(),
        "report built"
    );

    ChatReport {
        basic,
        span: activity_span(records),
        busy_users: busy_users(records),
        monthly_timeline,
        daily_timeline,
        weekly_activity,
        month_activity,
        hourly_activity,
        heatmap,
        top_emojis,
        top_words,
        awards,
    }
}
