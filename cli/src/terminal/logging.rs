use std::fs::{self, File};
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;

pub struct CanonFormatter;

impl<S, N> FormatEvent<S, N> for CanonFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        // Raw print lines carry their own dressing; success lines get a
        // symbol of their own.
        let symbol: Option<ColoredString> = match meta.target() {
            "canon6::print" => None,
            "canon6::success" => Some("[✓]".green().bold()),
            _ => Some(level_symbol(*meta.level())),
        };

        if let Some(symbol) = symbol {
            write!(writer, "{} ", symbol)?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

fn level_symbol(level: Level) -> ColoredString {
    match level {
        Level::TRACE => "[ ]".dimmed(),
        Level::DEBUG => "[?]".blue(),
        Level::INFO => "[+]".green().bold(),
        Level::WARN => "[*]".yellow().bold(),
        Level::ERROR => "[-]".red().bold(),
    }
}

/// Installs the process-wide subscriber: formatted output on stdout plus,
/// when requested, an ANSI-free copy in `log_file`.
///
/// The log file handle is owned by the subscriber for the life of the
/// process and written through on every event, so every line is on disk
/// no matter how the process exits.
pub fn init(log_file: Option<&Path>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stdout_layer = tracing_subscriber::fmt::layer()
        .event_format(CanonFormatter)
        .with_writer(std::io::stdout);

    let registry = tracing_subscriber::registry().with(filter).with(stdout_layer);

    let Some(path) = log_file else {
        registry.init();
        return Ok(());
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file =
        File::create(path).with_context(|| format!("opening log file {}", path.display()))?;

    registry
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Arc::new(file)),
        )
        .init();

    Ok(())
}
