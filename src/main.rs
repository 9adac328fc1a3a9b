//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chatlens::cli::{Args, ReportFormat};
use chatlens::core::{FilterConfig, OutputConfig, apply_filters, report_to_json};
use chatlens::format::{OutputFormat, write_to_format};
use chatlens::normalize::normalize_with_summary;
use chatlens::parser::ExportParser;
use chatlens::stats::AnalysisReport;
use chatlens::{AnalyzerConfig, ChatlensError};

/// Rows shown per table in the text summary.
const TEXT_ROWS: usize = 10;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatlensError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&args)?;
    info!(
        input = %args.input.display(),
        day_first = config.day_first,
        top_words = config.top_words,
        "starting analysis"
    );

    // Step 1: Parse
    let parse_start = Instant::now();
    let raw = ExportParser::new().parse(&args.input)?;
    let raw_count = raw.len();
    let (chat, summary) = normalize_with_summary(raw, config.day_first);
    info!(
        raw = raw_count,
        kept = summary.kept,
        dropped = summary.dropped,
        elapsed = ?parse_start.elapsed(),
        "parsed export"
    );

    if args.list_users {
        for user in chat.users() {
            println!("{user}");
        }
        return Ok(());
    }

    // Step 2: Filter by date (the user selection is applied by the report)
    let mut date_filter = FilterConfig::new();
    if let Some(ref after) = args.after {
        date_filter = date_filter.with_date_from(after)?;
    }
    if let Some(ref before) = args.before {
        date_filter = date_filter.with_date_to(before)?;
    }
    let chat = apply_filters(&chat, &date_filter);
    if date_filter.is_active() {
        info!(messages = chat.len(), "applied date filter");
    }

    // Step 3: Analyze
    let selection = args.selection();
    let report = AnalysisReport::build(&chat, &selection, &config);

    // Step 4: Optional record table
    if let Some(ref path) = args.records {
        let format = OutputFormat::from_path(path)?;
        let scoped = apply_filters(&chat, &FilterConfig::new().with_selection(selection.clone()));
        write_to_format(scoped.messages(), path, format, &OutputConfig::new().with_calendar())?;
        info!(path = %path.display(), %format, records = scoped.len(), "wrote records");
    }

    // Step 5: Render
    match args.output {
        Some(ref path) => {
            let mut file = BufWriter::new(File::create(path)?);
            write_report(&mut file, &args, &report)?;
            file.flush()?;
            info!(path = %path.display(), format = %args.format, "wrote report");
        }
        None => write_report(&mut io::stdout().lock(), &args, &report)?,
    }

    info!(elapsed = ?total_start.elapsed(), "done");
    Ok(())
}

/// Builds the analyzer configuration: JSON file, then command-line overrides.
fn load_config(args: &Args) -> Result<AnalyzerConfig, ChatlensError> {
    let mut config = match args.config {
        Some(ref path) => AnalyzerConfig::from_json_file(path)?,
        None => AnalyzerConfig::default(),
    };

    if let Some(order) = args.date_order {
        config = config.with_day_first(order.is_day_first());
    }
    if let Some(ref path) = args.stop_words {
        config = config.with_stop_words_file(path)?;
    }
    if let Some(top) = args.top {
        config = config.with_top_words(top);
    }

    config.validate()
}

fn write_report(
    out: &mut impl Write,
    args: &Args,
    report: &AnalysisReport,
) -> Result<(), ChatlensError> {
    match args.format {
        ReportFormat::Text => write_text(out, args, report)?,
        ReportFormat::Json => writeln!(out, "{}", report_to_json(report)?)?,
    }
    Ok(())
}

/// Writes the human-readable summary.
fn write_text(out: &mut impl Write, args: &Args, report: &AnalysisReport) -> io::Result<()> {
    let stats = &report.stats;

    writeln!(out, "📊 chatlens v{}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
    writeln!(out, "📂 Input:     {}", args.input.display())?;
    writeln!(out, "👤 Selection: {}", report.selection)?;
    if let Some(ref after) = args.after {
        writeln!(out, "📅 After:     {after}")?;
    }
    if let Some(ref before) = args.before {
        writeln!(out, "📅 Before:    {before}")?;
    }
    writeln!(out)?;

    writeln!(out, "💬 Messages:  {}", stats.message_count)?;
    writeln!(out, "📝 Words:     {}", stats.word_count)?;
    writeln!(out, "🖼️  Media:     {}", stats.media_count)?;
    writeln!(out, "🗑️  Deleted:   {}", stats.deleted_message_count)?;
    writeln!(out, "🔗 Links:     {}", stats.link_count)?;

    if report.is_empty() {
        writeln!(out)?;
        writeln!(out, "No messages for this selection.")?;
        return Ok(());
    }

    if let Some(ref users) = report.top_users {
        writeln!(out)?;
        writeln!(out, "🏆 Most active:")?;
        for share in users {
            writeln!(
                out,
                "   {:<24} {:>6}  ({:.2}%)",
                share.user, share.message_count, share.percentage
            )?;
        }
    }

    if !report.emojis.is_empty() {
        writeln!(out)?;
        writeln!(out, "😀 Emoji:")?;
        for entry in report.emojis.iter().take(TEXT_ROWS) {
            writeln!(out, "   {}  {}", entry.token, entry.count)?;
        }
    }

    if !report.common_words.is_empty() {
        writeln!(out)?;
        writeln!(out, "🔤 Common words:")?;
        for entry in report.common_words.iter().take(TEXT_ROWS) {
            writeln!(out, "   {:<24} {:>6}", entry.token, entry.count)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "📅 Monthly timeline:")?;
    for point in &report.monthly_timeline {
        writeln!(out, "   {:<24} {:>6}", point.time, point.message_count)?;
    }

    writeln!(out)?;
    if let Some(day) = report.busiest_days.top_entry() {
        writeln!(out, "📆 Busiest day:   {} ({})", day.token, day.count)?;
    }
    if let Some(month) = report.busiest_months.top_entry() {
        writeln!(out, "🗓️  Busiest month: {} ({})", month.token, month.count)?;
    }
    if let Some((day, hour, count)) = report.heatmap.peak() {
        writeln!(
            out,
            "🔥 Peak hour:     {} {} ({count})",
            report.heatmap.days[day.num_days_from_monday() as usize],
            report.heatmap.hour_ranges[hour as usize],
        )?;
    }

    Ok(())
}
