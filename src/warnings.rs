//! Scoped suppression of warning diagnostics
//!
//! [`warning_free`] wraps the current thread's tracing dispatcher in a filter
//! that drops `WARN` events and forwards everything else. The returned guard
//! restores the previous dispatcher when dropped, on every exit path
//! including unwinding. Span context, the level hint and `Registry` lookups
//! pass through to the wrapped dispatcher.

use std::any::TypeId;

use tracing::dispatcher::{self, DefaultGuard, Dispatch};
use tracing::level_filters::LevelFilter;
use tracing::span::{Attributes, Id, Record};
use tracing_core::span::Current;
use tracing::subscriber::{Interest, Subscriber};
use tracing::{Event, Level, Metadata};
use tracing_subscriber::Registry;

/// Guard returned by [`warning_free`]
#[derive(Debug)]
#[must_use = "warnings are only suppressed while the guard is alive"]
pub struct WarningFree {
    _guard: DefaultGuard,
}

/// Suppress warning events on this thread until the guard is dropped
pub fn warning_free() -> WarningFree {
    let previous = dispatcher::get_default(Dispatch::clone);
    let filter = Dispatch::new(WarningFilter {
        inner: previous,
        max_level: LevelFilter::current(),
    });
    WarningFree {
        _guard: dispatcher::set_default(&filter),
    }
}

/// Run `f` with warning events suppressed
pub fn with_warnings_suppressed<T>(f: impl FnOnce() -> T) -> T {
    let _guard = warning_free();
    f()
}

struct WarningFilter {
    inner: Dispatch,
    /// Global ceiling when the guard was created; never below the inner hint
    max_level: LevelFilter,
}

impl WarningFilter {
    fn suppresses(metadata: &Metadata<'_>) -> bool {
        metadata.is_event() && *metadata.level() == Level::WARN
    }
}

impl Subscriber for WarningFilter {
    fn register_callsite(&self, metadata: &'static Metadata<'static>) -> Interest {
        let interest = self.inner.register_callsite(metadata);
        // Warning callsites must be re-checked per event; the filter is temporary.
        if Self::suppresses(metadata) {
            Interest::sometimes()
        } else {
            interest
        }
    }

    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        !Self::suppresses(metadata) && self.inner.enabled(metadata)
    }

    fn max_level_hint(&self) -> Option<LevelFilter> {
        Some(self.max_level)
    }

    // The inner dispatcher applies its own `event_enabled` inside `Dispatch::event`.
    fn event_enabled(&self, event: &Event<'_>) -> bool {
        !Self::suppresses(event.metadata())
    }

    fn current_span(&self) -> Current {
        self.inner.current_span()
    }

    // The inner dispatcher was registered when it was first constructed.
    fn on_register_dispatch(&self, _subscriber: &Dispatch) {}

    #[allow(unsafe_code)]
    unsafe fn downcast_raw(&self, id: TypeId) -> Option<*const ()> {
        if id == TypeId::of::<Self>() {
            return Some(std::ptr::from_ref(self).cast());
        }
        if id == TypeId::of::<Registry>() {
            return self
                .inner
                .downcast_ref::<Registry>()
                .map(|registry| std::ptr::from_ref(registry).cast());
        }
        None
    }

    fn new_span(&self, span: &Attributes<'_>) -> Id {
        self.inner.new_span(span)
    }

    fn record(&self, span: &Id, values: &Record<'_>) {
        self.inner.record(span, values);
    }

    fn record_follows_from(&self, span: &Id, follows: &Id) {
        self.inner.record_follows_from(span, follows);
    }

    fn event(&self, event: &Event<'_>) {
        if !Self::suppresses(event.metadata()) {
            self.inner.event(event);
        }
    }

    fn enter(&self, span: &Id) {
        self.inner.enter(span);
    }

    fn exit(&self, span: &Id) {
        self.inner.exit(span);
    }

    fn clone_span(&self, id: &Id) -> Id {
        self.inner.clone_span(id)
    }

    fn try_close(&self, id: Id) -> bool {
        self.inner.try_close(id)
    }
}
