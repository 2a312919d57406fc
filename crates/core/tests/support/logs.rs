//! Tracing capture for asserting on log categories.

use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::Registry;

/// One recorded tracing event.
#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub level: Level,
    pub message: String,
    pub category: Option<String>,
}

/// Layer that keeps every event it sees.
#[derive(Clone, Default)]
pub struct LogCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl LogCapture {
    /// Install a capturing subscriber for the current thread.
    ///
    /// Keep the guard alive for as long as events should be recorded.
    pub fn install() -> (Self, DefaultGuard) {
        let capture = Self::default();
        let subscriber = Registry::default().with(capture.clone());
        let guard = tracing::subscriber::set_default(subscriber);
        (capture, guard)
    }

    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().expect("log capture mutex poisoned").clone()
    }

    /// Categories attached to ERROR events, in emission order.
    pub fn error_categories(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|event| event.level == Level::ERROR)
            .filter_map(|event| event.category)
            .collect()
    }

    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.events().iter().any(|event| event.level == level && event.message.contains(needle))
    }
}

impl<S: Subscriber> Layer<S> for LogCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let captured = CapturedEvent {
            level: *event.metadata().level(),
            message: visitor.message,
            category: visitor.category,
        };
        self.events.lock().expect("log capture mutex poisoned").push(captured);
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: String,
    category: Option<String>,
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "category" => self.category = Some(value.to_string()),
            "message" => self.message = value.to_string(),
            _ => {}
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "category" => self.category = Some(format!("{value:?}")),
            "message" => self.message = format!("{value:?}"),
            _ => {}
        }
    }
}
