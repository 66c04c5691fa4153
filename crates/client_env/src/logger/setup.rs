//!
//! Setup logging subsystem.
//!

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter, fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
    Layer,
};

use crate::{config, FormattingLayer, StorageSubscription};

/// Contains guards necessary for logging
#[derive(Debug)]
pub struct TelemetryGuard {
    _log_guards: Vec<WorkerGuard>,
}

///
/// Setup logging sub-system specifying.
/// Expects config and list of names of crates to watch.
///
/// Fails when a global subscriber has already been installed.
///
pub fn setup(
    config: &config::Log,
    service_name: &str,
    crates_to_filter: impl AsRef<[&'static str]>,
) -> Result<TelemetryGuard, TryInitError> {
    let mut guards = Vec::new();

    let file_writer = if config.file.enabled {
        let mut path = crate::env::workspace_path();
        path.push(PathBuf::from(&config.file.path));

        let file_appender = tracing_appender::rolling::hourly(&path, &config.file.file_name);
        let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
        guards.push(guard);

        let file_filter = get_envfilter(
            config.file.filtering_directive.as_ref(),
            config::Level(tracing::Level::WARN),
            config.file.level,
            &crates_to_filter,
        );
        Some(FormattingLayer::new(service_name, file_writer).with_filter(file_filter))
    } else {
        None
    };

    let (pretty_console, json_console) = if config.console.enabled {
        let (console_writer, guard) = tracing_appender::non_blocking(std::io::stdout());
        guards.push(guard);

        let console_filter = get_envfilter(
            config.console.filtering_directive.as_ref(),
            config::Level(tracing::Level::WARN),
            config.console.level,
            &crates_to_filter,
        );

        match config.console.log_format {
            config::LogFormat::Default => {
                let logging_layer = fmt::layer()
                    .with_timer(fmt::time::time())
                    .with_span_events(fmt::format::FmtSpan::ACTIVE)
                    .pretty()
                    .with_writer(console_writer)
                    .with_filter(console_filter);
                (Some(logging_layer), None)
            }
            config::LogFormat::Json => {
                let logging_layer = FormattingLayer::new(service_name, console_writer)
                    .with_filter(console_filter);
                (None, Some(logging_layer))
            }
        }
    } else {
        (None, None)
    };

    // Use 'RUST_LOG' environment variable will override the config settings
    tracing_subscriber::registry()
        .with(StorageSubscription)
        .with(file_writer)
        .with(pretty_console)
        .with(json_console)
        .with(
            EnvFilter::builder()
                .with_default_directive(tracing::Level::TRACE.into())
                .from_env_lossy(),
        )
        .try_init()?;

    // Returning the WorkerGuard for logs to be printed until it is dropped
    Ok(TelemetryGuard {
        _log_guards: guards,
    })
}

/// Build the filter of one output: an explicit directive wins, otherwise the watched crates
/// log at `filter_log_level` and everything else at `default_log_level`.
fn get_envfilter(
    filtering_directive: Option<&String>,
    default_log_level: config::Level,
    filter_log_level: config::Level,
    crates_to_filter: impl AsRef<[&'static str]>,
) -> EnvFilter {
    filtering_directive
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| {
            let directives = crates_to_filter.as_ref().iter().fold(
                default_log_level.into_level().to_string(),
                |mut directives, krate| {
                    directives.push(',');
                    directives.push_str(krate);
                    directives.push('=');
                    directives.push_str(&filter_log_level.into_level().to_string());
                    directives
                },
            );

            EnvFilter::builder()
                .with_default_directive(default_log_level.into_level().into())
                .parse_lossy(directives)
        })
}
