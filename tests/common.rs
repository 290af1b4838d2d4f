#![allow(dead_code)]

use std::fmt;
use std::sync::{Arc, Mutex};

use axum::Router;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use authornames::config::NameConstants;
use authornames::handlers::create_router;

/// Create the application router for testing
pub fn create_test_app() -> Router {
    create_router(Arc::new(NameConstants::default()))
}

/// Records the level and message of every event it sees.
#[derive(Clone, Default)]
struct EventRecorder(Arc<Mutex<Vec<(Level, String)>>>);

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{:?}", value);
        }
    }
}

impl<S: Subscriber> Layer<S> for EventRecorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        self.0
            .lock()
            .unwrap()
            .push((*event.metadata().level(), visitor.0));
    }
}

/// Run `f` with a subscriber that captures log events, returning its result
/// along with the captured `(level, message)` pairs.
pub fn capture_events<T>(f: impl FnOnce() -> T) -> (T, Vec<(Level, String)>) {
    let recorder = EventRecorder::default();
    let subscriber = tracing_subscriber::registry().with(recorder.clone());
    let result = tracing::subscriber::with_default(subscriber, f);
    let events = recorder.0.lock().unwrap().clone();
    (result, events)
}
