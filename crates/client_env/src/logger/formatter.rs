//!
//! JSON lines output. Each event becomes one object: its own metadata and the request context
//! at the top level, every other field under `extra`.
//!

use std::io::Write;

use serde_json::{Map, Value};
use time::{format_description::well_known::Iso8601, OffsetDateTime};
use tracing::{Event, Subscriber};
use tracing_subscriber::{
    fmt::MakeWriter,
    layer::Context,
    registry::{LookupSpan, SpanRef},
    Layer,
};

use crate::{storage::REQUEST_CONTEXT_KEYS, Storage};

const MESSAGE: &str = "message";
const LEVEL: &str = "level";
const TARGET: &str = "target";
const FILE: &str = "file";
const LINE: &str = "line";
const FN: &str = "fn";
const TIME: &str = "time";
const SERVICE: &str = "service";
const ENV: &str = "env";
const VERSION: &str = "version";
const HOSTNAME: &str = "hostname";
const PID: &str = "pid";
const EXTRA: &str = "extra";

/// Writes every event as a JSON object on its own line.
/// Relies on [`crate::StorageSubscription`] for the fields of the enclosing spans.
#[derive(Debug)]
pub struct FormattingLayer<W>
where
    W: for<'a> MakeWriter<'a> + 'static,
{
    dst_writer: W,
    service: String,
    env: String,
    version: String,
    hostname: String,
    pid: u32,
}

impl<W> FormattingLayer<W>
where
    W: for<'a> MakeWriter<'a> + 'static,
{
    /// `service` is written into every record.
    ///
    /// ```rust
    /// let layer = client_env::FormattingLayer::new(client_env::service_name!(), std::io::stdout);
    /// ```
    pub fn new(service: &str, dst_writer: W) -> Self {
        Self {
            dst_writer,
            service: service.to_owned(),
            env: crate::env::which().to_string(),
            version: crate::version!().to_owned(),
            hostname: gethostname::gethostname().to_string_lossy().into_owned(),
            pid: std::process::id(),
        }
    }

    /// The record of `event`, logged inside `span` when there is one.
    pub fn event_record<S>(&self, span: Option<&SpanRef<'_, S>>, event: &Event<'_>) -> Value
    where
        S: Subscriber + for<'a> LookupSpan<'a>,
    {
        let metadata = event.metadata();
        let mut fields = Storage::default();
        event.record(&mut fields);

        let text = match fields.values.remove(MESSAGE) {
            Some(Value::String(text)) => text,
            _ => metadata.target().to_owned(),
        };
        let message = match span {
            Some(span) => format!("[{} - EVENT] {text}", span.name().to_uppercase()),
            None => text,
        };

        let mut record = Map::new();
        record.insert(MESSAGE.into(), message.into());
        record.insert(LEVEL.into(), metadata.level().to_string().into());
        record.insert(TARGET.into(), metadata.target().into());
        record.insert(FILE.into(), metadata.file().into());
        record.insert(LINE.into(), metadata.line().into());
        record.insert(FN.into(), span.map_or("?", |span| span.name()).into());
        if let Ok(time) = OffsetDateTime::now_utc().format(&Iso8601::DEFAULT) {
            record.insert(TIME.into(), time.into());
        }
        record.insert(SERVICE.into(), self.service.as_str().into());
        record.insert(ENV.into(), self.env.as_str().into());
        record.insert(VERSION.into(), self.version.as_str().into());
        record.insert(HOSTNAME.into(), self.hostname.as_str().into());
        record.insert(PID.into(), self.pid.into());

        let span_fields = span
            .and_then(|span| {
                span.extensions()
                    .get::<Storage>()
                    .map(|storage| storage.values.clone())
            })
            .unwrap_or_default();

        // event fields come last and win over span fields of the same name
        let mut extra = Map::new();
        for (key, value) in span_fields.into_iter().chain(fields.values) {
            if REQUEST_CONTEXT_KEYS.contains(&key.as_str()) {
                record.insert(key, value);
            } else {
                extra.insert(key, value);
            }
        }
        record.insert(EXTRA.into(), extra.into());

        record.into()
    }
}

impl<S, W> Layer<S> for FormattingLayer<W>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'a> MakeWriter<'a> + 'static,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let span = ctx.lookup_current();
        let record = self.event_record(span.as_ref(), event);

        if let Ok(mut line) = serde_json::to_vec(&record) {
            line.push(b'\n');
            // one write per line, so lines of concurrent requests do not interleave
            let _ = self.dst_writer.make_writer().write_all(&line);
        }
    }
}
