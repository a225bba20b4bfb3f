//! Warnings raised for values that make a connection string ambiguous

use sqlbuilder_mysql::descriptor::ambiguous_keys;
use sqlbuilder_mysql::{encode_descriptor, ConnectionOptions};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

/// Counts warning events
#[derive(Clone, Default)]
struct WarningCounter(Arc<AtomicUsize>);

impl WarningCounter {
    fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for WarningCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Run `f` with a subscriber that counts warnings, returning the count
fn warnings_during(f: impl FnOnce()) -> usize {
    let counter = WarningCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    tracing::subscriber::with_default(subscriber, f);
    counter.count()
}

fn ambiguous_options() -> ConnectionOptions {
    ConnectionOptions::builder()
        .password("p;w")
        .connect_attrs("a=b")
        .username("app")
        .build()
}

#[test]
fn test_encoding_does_not_warn() {
    let options = ambiguous_options();

    let warnings = warnings_during(|| {
        assert_eq!(
            encode_descriptor(&options),
            "Connect_Attrs=a=b;Password=p;w;Username=app"
        );
        assert_eq!(
            options.to_string(),
            "Connect_Attrs=a=b;Password=p;w;Username=app"
        );
    });
    assert_eq!(warnings, 0);
}

#[test]
fn test_ambiguous_keys_warns_per_key() {
    let options = ambiguous_options();

    let warnings = warnings_during(|| {
        assert_eq!(
            ambiguous_keys(&options),
            vec!["Connect_Attrs", "Password"]
        );
    });
    assert_eq!(warnings, 2);
}

#[test]
fn test_unambiguous_options_do_not_warn() {
    let options = ConnectionOptions::builder().username("app").build();

    let warnings = warnings_during(|| {
        assert!(ambiguous_keys(&options).is_empty());
    });
    assert_eq!(warnings, 0);
}
