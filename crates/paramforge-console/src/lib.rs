//! Colorful console output for exploration events.
//!
//! Provides a custom `tracing` layer that formats explorer events with colors.
//!
//! ## Log Levels
//!
//! - **WARN**: Empty generators, malformed records, failed closes
//! - **DEBUG**: Stream lifecycle (start and end of each session)
//! - **TRACE**: Generator restarts and dedup window resets
//!
//! The default filter is `paramforge_explorer=info`; set
//! `RUST_LOG=paramforge_explorer=debug` to see stream lifecycle events.

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "paramforge_explorer=info";

/// Initializes the explorer console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the ParamForge banner and sets up tracing.
pub fn init() {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);
        print_banner();

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(ExplorerConsoleLayer)
            .try_init();
    });
}

// Seconds since `init`.
fn elapsed_secs() -> f64 {
    EPOCH
        .get()
        .map_or(0.0, |epoch| epoch.elapsed().as_secs_f64())
}

fn print_banner() {
    let banner = r#"
 ____                          _____
|  _ \ __ _ _ __ __ _ _ __ ___ |  ___|__  _ __ __ _  ___
| |_) / _` | '__/ _` | '_ ` _ \| |_ / _ \| '__/ _` |/ _ \
|  __/ (_| | | | (_| | | | | | |  _| (_) | | | (_| |  __/
|_|   \__,_|_|  \__,_|_| |_| |_|_|  \___/|_|  \__, |\___|
                                              |___/
"#;

    let version_line = format!("                   v{} - Parameter Space Explorer\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats explorer events with colors.
pub struct ExplorerConsoleLayer;

impl<S: Subscriber> Layer<S> for ExplorerConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        // Accept events from explorer modules
        if !metadata.target().starts_with("paramforge") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    provider: Option<String>,
    reason: Option<String>,
    function: Option<String>,
    error: Option<String>,
    message: Option<String>,
    arity: Option<u64>,
    tuples: Option<u64>,
    index: Option<u64>,
    capacity: Option<u64>,
    expected: Option<u64>,
    actual: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.record_str(field, s.trim_matches('"'));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "arity" => self.arity = Some(value),
            "tuples" => self.tuples = Some(value),
            "index" => self.index = Some(value),
            "capacity" => self.capacity = Some(value),
            "expected" => self.expected = Some(value),
            "actual" => self.actual = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        let value = Some(value.to_string());
        match field.name() {
            "event" => self.event = value,
            "provider" => self.provider = value,
            "reason" => self.reason = value,
            "function" => self.function = value,
            "error" => self.error = value,
            "message" => self.message = value,
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "stream_start" => format_stream_start(v),
        "stream_end" => format_stream_end(v, level),
        "generator_wrapped" => format_generator_wrapped(v),
        "dedup_reset" => format_dedup_reset(v),
        "malformed_record" => format_malformed_record(v),
        "close_failed" => format_close_failed(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_count(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
}

fn format_stream_start(v: &EventVisitor) -> String {
    let provider = v.provider.as_deref().unwrap_or("unknown");
    let arity = v.arity.unwrap_or(0);

    format!(
        "{} {} {} stream │ {} parameters",
        format_elapsed(),
        "▶".bright_green().bold(),
        provider.white().bold(),
        format_count(arity).bright_yellow()
    )
}

fn format_stream_end(v: &EventVisitor, level: Level) -> String {
    let provider = v.provider.as_deref().unwrap_or("unknown");
    let tuples = v.tuples.unwrap_or(0);
    let reason = v.reason.as_deref().unwrap_or("unknown");

    let reason = if level == Level::WARN {
        reason.bright_red().bold().to_string()
    } else {
        reason.bright_cyan().to_string()
    };

    format!(
        "{} {} {} stream ended │ {} tuples │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        provider.white().bold(),
        format_count(tuples).bright_magenta().bold(),
        reason
    )
}

fn format_generator_wrapped(v: &EventVisitor) -> String {
    let provider = v.provider.as_deref().unwrap_or("unknown");
    let index = v.index.unwrap_or(0);

    format!(
        "{} {} {} restarted generator {}",
        format_elapsed(),
        "↻".bright_blue(),
        provider.bright_black(),
        format_count(index).bright_black()
    )
}

fn format_dedup_reset(v: &EventVisitor) -> String {
    let capacity = v.capacity.unwrap_or(0);

    format!(
        "{} {} dedup window cleared at {} entries",
        format_elapsed(),
        "⟲".yellow(),
        format_count(capacity).yellow()
    )
}

fn format_malformed_record(v: &EventVisitor) -> String {
    let function = v.function.as_deref().unwrap_or("unknown");
    let expected = v.expected.unwrap_or(0);
    let actual = v.actual.unwrap_or(0);

    format!(
        "{} {} record for {} has {} params, expected {}",
        format_elapsed(),
        "⚠".bright_yellow().bold(),
        function.white().bold(),
        format_count(actual).bright_red(),
        format_count(expected).bright_green()
    )
}

fn format_close_failed(v: &EventVisitor) -> String {
    let provider = v.provider.as_deref().unwrap_or("unknown");
    let error = v
        .error
        .as_deref()
        .or(v.message.as_deref())
        .unwrap_or("unknown error");

    format!(
        "{} {} {} close failed │ {}",
        format_elapsed(),
        "✗".bright_red().bold(),
        provider.white().bold(),
        error.bright_red()
    )
}
