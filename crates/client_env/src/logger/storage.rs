//!
//! Span field storage. Values recorded on a span are kept in its extensions, where the
//! [`crate::FormattingLayer`] reads them for every event logged inside the span.
//!

use std::fmt;

use serde_json::{Map, Value};
use tracing::{
    field::{Field, Visit},
    span::{Attributes, Record},
    Id, Subscriber,
};
use tracing_subscriber::{layer::Context, registry::LookupSpan, Layer};

/// Fields naming the API request in progress. A new span starts with its parent's values for
/// these, so an event deep in the call tree still carries the flow and the resource it is for.
pub const REQUEST_CONTEXT_KEYS: [&str; 7] = [
    "flow",
    "resource_id",
    "request_id",
    "attempt",
    "idempotency_key",
    "api_version",
    "stripe_account",
];

/// Field values of one span or event.
#[derive(Clone, Debug, Default)]
pub struct Storage {
    /// Values by field name, `r#` prefixes stripped.
    pub values: Map<String, Value>,
}

impl Storage {
    fn request_context_of(parent: &Self) -> Self {
        let values = parent
            .values
            .iter()
            .filter(|(key, _)| REQUEST_CONTEXT_KEYS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Self { values }
    }

    fn insert(&mut self, field: &Field, value: impl Into<Value>) {
        let name = field.name();
        let name = name.strip_prefix("r#").unwrap_or(name);
        self.values.insert(name.to_owned(), value.into());
    }
}

impl Visit for Storage {
    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, value);
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, value);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.insert(field, value);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, value);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.insert(field, value);
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        // metadata of records bridged from the `log` crate
        if !field.name().starts_with("log.") {
            self.insert(field, format!("{value:?}"));
        }
    }
}

/// Layer attaching a [`Storage`] to every span.
#[derive(Clone, Copy, Debug)]
pub struct StorageSubscription;

impl<S> Layer<S> for StorageSubscription
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };

        let mut storage = span
            .parent()
            .and_then(|parent| {
                parent
                    .extensions()
                    .get::<Storage>()
                    .map(Storage::request_context_of)
            })
            .unwrap_or_default();
        attrs.record(&mut storage);

        span.extensions_mut().insert(storage);
    }

    fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };

        let mut extensions = span.extensions_mut();
        if let Some(storage) = extensions.get_mut::<Storage>() {
            values.record(storage);
        }
    }
}
