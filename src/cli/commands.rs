use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use crate::analysis::{
    activity_heatmap, activity_span, basic_stats, build_report, busy_users, compute_awards,
    daily_timeline, hourly_activity, month_activity, monthly_timeline, most_common_emojis,
    most_common_words, weekly_activity,
};
use crate::classifiers::Classifiers;
use crate::config::{AnalyzerConfig, load_config};
use crate::filters::{RecordFilter, apply_filters, parse_filter};
use crate::models::{
    ActivityHeatmap, ActivitySpan, BasicStats, ChatRecordSet, TermCount, UserShare,
};
use crate::parsers::parse_transcript_file;
use crate::utils::{format_path_with_tilde, init_logging};

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Parser)]
#[command(name = "chat-analyzer")]
#[command(version = "0.1.0")]
#[command(about = "Statistics and awards for exported chat transcripts", long_about = None)]
pub struct Cli {
    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON config file (overrides $CHAT_ANALYZER_CONFIG)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Exported chat transcript
    pub file: PathBuf,

    /// Filter expression, e.g. `user:"Bob Smith" from:2024-01-01 to:2024-01-31`
    #[arg(short, long, value_name = "EXPR")]
    pub filter: Option<String>,
}

#[derive(Args, Debug)]
pub struct OutputArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Period {
    /// Messages per calendar month
    Monthly,
    /// Messages per active day
    Daily,
    /// Messages per weekday
    Weekly,
    /// Messages per month name across years
    Months,
    /// Messages per hour of day
    Hourly,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show totals and the most active authors
    Stats(OutputArgs),
    /// Show message counts over time
    Timeline {
        #[command(flatten)]
        output: OutputArgs,

        #[arg(long, value_enum, default_value_t = Period::Monthly)]
        period: Period,
    },
    /// Show the weekday x hour activity heatmap
    Heatmap(OutputArgs),
    /// Show the most common words and emojis
    Words(OutputArgs),
    /// Show per-author awards
    Awards(OutputArgs),
    /// Print every record as one JSON object per line
    Records(SourceArgs),
    /// Print the full report as JSON
    Report(SourceArgs),
    /// List the distinct authors
    Users {
        /// Exported chat transcript
        file: PathBuf,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(command) = cli.command else {
        println!("Use --help for usage information");
        return Ok(());
    };

    let config = load_config(cli.config.as_deref())?;

    match command {
        Commands::Stats(output) => show_stats(&output, &config)?,
        Commands::Timeline { output, period } => show_timeline(&output, period, &config)?,
        Commands::Heatmap(output) => show_heatmap(&output, &config)?,
        Commands::Words(output) => show_words(&output, &config)?,
        Commands::Awards(output) => show_awards(&output, &config)?,
        Commands::Records(source) => print_records(&source, &config)?,
        Commands::Report(source) => print_report(&source, &config)?,
        Commands::Users { file } => show_users(&file, &config)?,
    }

    Ok(())
}

/// Parse the filter, then the transcript, and apply one to the other.
fn load_records(source: &SourceArgs, config: &AnalyzerConfig) -> Result<ChatRecordSet> {
    let filter = match &source.filter {
        Some(expr) => {
            parse_filter(expr).with_context(|| format!("Invalid filter expression: {}", expr))?
        }
        None => RecordFilter::new(),
    };

    let parsed = parse_transcript_file(&source.file, config)
        .with_context(|| format!("Failed to load {}", format_path_with_tilde(&source.file)))?;

    let records = apply_filters(&parsed.records, &filter);
    tracing::debug!(before = parsed.records.len(), after = records.len(), "applied filter");
    Ok(records)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn show_stats(output: &OutputArgs, config: &AnalyzerConfig) -> Result<()> {
    let records = load_records(&output.source, config)?;
    let classifiers = Classifiers::default();

    let basic = basic_stats(&records, &config.media_placeholder, classifiers.urls.as_ref());
    let span = activity_span(&records);
    let users = busy_users(&records);

    if output.json {
        #[derive(Serialize)]
        struct StatsView<'a> {
            basic: &'a BasicStats,
            span: &'a Option<ActivitySpan>,
            busy_users: &'a [UserShare],
        }
        return print_json(&StatsView { basic: &basic, span: &span, busy_users: &users });
    }

    println!("Chat Statistics");
    println!("===============");
    println!("Total messages: {}", basic.total_messages);
    println!("  Media messages: {}", basic.media_messages);
    println!("  Words: {}", basic.total_words);
    println!("  Links: {}", basic.links);
    println!();

    match span {
        Some(span) => {
            println!("First message: {}", span.first_message.format(DATETIME_FORMAT));
            println!("Last message: {}", span.last_message.format(DATETIME_FORMAT));
            println!("Active days: {}", span.active_days);
        }
        None => println!("Active period: n/a"),
    }

    println!();
    println!("Busy users");
    println!("----------");
    if users.is_empty() {
        println!("n/a");
    }
    let width = users.iter().map(|u| u.author.chars().count()).max().unwrap_or(0);
    for user in &users {
        println!("{:<width$}  {:>6}  {:>6.2}%", user.author, user.messages, user.percent);
    }

    Ok(())
}

fn show_timeline(output: &OutputArgs, period: Period, config: &AnalyzerConfig) -> Result<()> {
    let records = load_records(&output.source, config)?;

    let rows: Vec<(String, usize)> = match period {
        Period::Monthly => {
            let timeline = monthly_timeline(&records);
            if output.json {
                return print_json(&timeline);
            }
            timeline.into_iter().map(|m| (m.label, m.messages)).collect()
        }
        Period::Daily => {
            let timeline = daily_timeline(&records);
            if output.json {
                return print_json(&timeline);
            }
            timeline.into_iter().map(|d| (d.date.to_string(), d.messages)).collect()
        }
        Period::Weekly => {
            let activity = weekly_activity(&records);
            if output.json {
                return print_json(&activity);
            }
            activity.into_iter().map(|w| (w.weekday, w.messages)).collect()
        }
        Period::Months => {
            let activity = month_activity(&records);
            if output.json {
                return print_json(&activity);
            }
            activity.into_iter().map(|m| (m.month, m.messages)).collect()
        }
        Period::Hourly => {
            let activity = hourly_activity(&records);
            if output.json {
                return print_json(&activity);
            }
            activity.into_iter().map(|h| (h.bucket, h.messages)).collect()
        }
    };

    if rows.is_empty() {
        println!("No messages");
        return Ok(());
    }

    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    for (label, messages) in rows {
        println!("{:<width$}  {:>6}", label, messages);
    }

    Ok(())
}

fn show_heatmap(output: &OutputArgs, config: &AnalyzerConfig) -> Result<()> {
    let records = load_records(&output.source, config)?;
    let heatmap = activity_heatmap(&records);

    if output.json {
        return print_json(&heatmap);
    }

    print_heatmap(&heatmap);
    Ok(())
}

fn print_heatmap(heatmap: &ActivityHeatmap) {
    let label_width = heatmap.weekdays.iter().map(|d| d.len()).max().unwrap_or(0);

    // Column headers are the starting hour of each bucket
    print!("{:<label_width$}", "");
    for hour in 0..heatmap.buckets.len() {
        print!(" {:>3}", hour);
    }
    println!();

    for (weekday, row) in heatmap.weekdays.iter().zip(&heatmap.counts) {
        print!("{:<label_width$}", weekday);
        for count in row {
            print!(" {:>3}", count);
        }
        println!();
    }
}

fn show_words(output: &OutputArgs, config: &AnalyzerConfig) -> Result<()> {
    let records = load_records(&output.source, config)?;
    let classifiers = Classifiers::default();

    let words = most_common_words(
        &records,
        &config.media_placeholder,
        classifiers.urls.as_ref(),
        config.top_words,
    );
    let emojis = most_common_emojis(&records, classifiers.emojis.as_ref(), config.top_emojis);

    if output.json {
        #[derive(Serialize)]
        struct WordsView<'a> {
            words: &'a [TermCount],
            emojis: &'a [TermCount],
        }
        return print_json(&WordsView { words: &words, emojis: &emojis });
    }

    print_terms("Most common words", &words);
    println!();
    print_terms("Most common emojis", &emojis);
    Ok(())
}

fn print_terms(title: &str, terms: &[TermCount]) {
    println!("{}", title);
    println!("{}", "-".repeat(title.len()));
    if terms.is_empty() {
        println!("n/a");
        return;
    }

    let width = terms.iter().map(|t| t.term.chars().count()).max().unwrap_or(0);
    for term in terms {
        println!("{:<width$}  {:>6}", term.term, term.count);
    }
}

fn show_awards(output: &OutputArgs, config: &AnalyzerConfig) -> Result<()> {
    let records = load_records(&output.source, config)?;
    let classifiers = Classifiers::default();
    let awards = compute_awards(&records, config, classifiers.urls.as_ref());

    if output.json {
        return print_json(&awards);
    }

    let entries = awards.entries();
    let width = entries.iter().map(|(title, _)| title.len()).max().unwrap_or(0);
    for (title, award) in entries {
        match award {
            Some(award) => println!("{:<width$}  {} ({})", title, award.author, award.value),
            None => println!("{:<width$}  n/a", title),
        }
    }

    Ok(())
}

fn print_records(source: &SourceArgs, config: &AnalyzerConfig) -> Result<()> {
    let records = load_records(source, config)?;
    for record in &records {
        println!("{}", serde_json::to_string(record)?);
    }
    Ok(())
}

fn print_report(source: &SourceArgs, config: &AnalyzerConfig) -> Result<()> {
    let records = load_records(source, config)?;
    let report = build_report(&records, config, &Classifiers::default());
    print_json(&report)
}

fn show_users(file: &Path, config: &AnalyzerConfig) -> Result<()> {
    let parsed = parse_transcript_file(file, config)
        .with_context(|| format!("Failed to load {}", format_path_with_tilde(file)))?;

    for author in parsed.records.authors() {
        println!("{}", author);
    }
    Ok(())
}
