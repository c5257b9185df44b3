//! # Instrumented call envelope.
//!
//! Every façade operation runs inside the same envelope:
//!
//! ```text
//! op(ctx, args…)
//!   ├─ 1. trace entry   (only if TRACE)      logger.write(op.entry, args)
//!   ├─ 2. work          read the canned value
//!   ├─ 3. notify        (only if observers)  spawn one task per observer, no wait
//!   └─ 4. trace exit    (if entry written)   logger.write(op.exit, args + return + error + elapsed)
//!                       written by a drop guard, so it also happens on unwind
//! ```
//!
//! ## Rules
//! - The envelope never recovers or rewrites the operation's error.
//! - Observer failures stay inside the observer's task.
//! - A cancelled context suppresses step 3 for service operations; the
//!   canned value is still returned.
//! - The logger is built on first use (first trace or first `set_log_level`).
//!
//! ## Observer registry lifecycle
//! ```text
//!   Absent ──register_observer──► Present ──unregister_observer(last)──► Absent
//! ```
//! Unregistration is notify-then-detach: the `UnregisterObserver` event is
//! dispatched to a snapshot that still contains the departing observer, then
//! the observer is removed, then an empty registry collapses back to `None`.

mod operation;
mod redact;

pub use operation::{ObservableCodes, Operation, Outcome};
pub use redact::{Redact, RedactKeys};

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};
use std::time::Instant;

use tokio_util::sync::CancellationToken;

use crate::component::Component;
use crate::config::Config;
use crate::error::{SzError, SzResult};
use crate::events::{self, Details};
use crate::logging::{LogLevel, Logger, TracingLogger};
use crate::observers::{Observer, ObserverRegistry};

/// Shared instrumentation state of one façade.
///
/// Cloning is cheap and yields a handle to the same state; export streams
/// keep a clone so they can trace and notify after the call returned.
#[derive(Clone)]
pub struct Envelope {
    inner: Arc<Inner>,
}

struct Inner {
    component: Component,
    codes: &'static ObservableCodes,
    trace: AtomicBool,
    initial_level: AtomicU8,
    logger: OnceLock<Arc<dyn Logger>>,
    origin: RwLock<String>,
    observers: RwLock<Option<Arc<ObserverRegistry>>>,
    redactor: RwLock<Option<Arc<dyn Redact>>>,
}

impl Envelope {
    /// Creates the envelope of a `component` façade.
    pub fn new(component: Component, codes: &'static ObservableCodes) -> Self {
        Self {
            inner: Arc::new(Inner {
                component,
                codes,
                trace: AtomicBool::new(false),
                initial_level: AtomicU8::new(LogLevel::default() as u8),
                logger: OnceLock::new(),
                origin: RwLock::new(String::new()),
                observers: RwLock::new(None),
                redactor: RwLock::new(None),
            }),
        }
    }

    /// Applies factory settings: origin, initial level and redaction.
    pub fn configure(&self, config: &Config) {
        self.set_origin(config.observer_origin.clone());
        self.set_initial_level(config.log_level);
        self.set_redactor(config.redactor());
    }

    /// Copies origin, level and redaction from `parent`.
    ///
    /// Used for façades created by another façade (configs created by a
    /// config manager).
    pub fn inherit(&self, parent: &Envelope) {
        self.set_origin(parent.observer_origin());
        let level = match parent.inner.logger.get() {
            Some(logger) => logger.log_level(),
            None => LogLevel::from_u8(parent.inner.initial_level.load(Ordering::Relaxed)),
        };
        self.set_initial_level(level);
        self.inner
            .trace
            .store(parent.is_trace_enabled(), Ordering::Relaxed);
        self.set_redactor(parent.redactor());
    }

    /// True when entry/exit traces are written.
    pub fn is_trace_enabled(&self) -> bool {
        self.inner.trace.load(Ordering::Relaxed)
    }

    /// Returns the logger, building the default one on first use.
    pub fn logger(&self) -> Arc<dyn Logger> {
        Arc::clone(self.inner.logger.get_or_init(|| {
            let level = LogLevel::from_u8(self.inner.initial_level.load(Ordering::Relaxed));
            Arc::new(TracingLogger::with_level(self.inner.component, level))
        }))
    }

    /// Installs `logger` unless one was already built. Returns `true` on success.
    ///
    /// The logger is brought to the envelope's initial level. A rejected
    /// logger is reported with a warning and left untouched.
    pub fn set_logger(&self, logger: Arc<dyn Logger>) -> bool {
        if self.inner.logger.get().is_some() {
            tracing::warn!(
                component = %self.inner.component,
                "logger already in use, injected logger ignored"
            );
            return false;
        }
        let level = LogLevel::from_u8(self.inner.initial_level.load(Ordering::Relaxed));
        if logger.set_log_level(level).is_err() {
            tracing::warn!(
                component = %self.inner.component,
                %level,
                "injected logger rejected initial level"
            );
        }
        let installed = self.inner.logger.set(logger).is_ok();
        if !installed {
            tracing::warn!(
                component = %self.inner.component,
                "logger already in use, injected logger ignored"
            );
        }
        installed
    }

    /// Installs (or clears) the redaction hook.
    pub fn set_redactor(&self, redactor: Option<Arc<dyn Redact>>) {
        let mut slot = self
            .inner
            .redactor
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *slot = redactor;
    }

    /// Current observer origin.
    pub fn observer_origin(&self) -> String {
        self.inner
            .origin
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// True if at least one observer is registered.
    pub fn has_observers(&self) -> bool {
        self.registry().is_some_and(|r| r.has_observers())
    }

    /// The observer registry, `None` until the first registration and again
    /// after the last observer leaves.
    pub fn registry(&self) -> Option<Arc<ObserverRegistry>> {
        self.inner
            .observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    // ---------------------------
    // Call envelope
    // ---------------------------

    /// Runs an infallible operation body inside the envelope.
    pub fn call<T, F>(
        &self,
        ctx: &CancellationToken,
        op: &Operation,
        args: Details,
        work: F,
    ) -> SzResult<T>
    where
        T: Outcome,
        F: FnOnce() -> T,
    {
        self.run(ctx, op, args, || Ok(work()))
    }

    /// Runs an operation body inside the envelope.
    pub fn run<T, F>(
        &self,
        ctx: &CancellationToken,
        op: &Operation,
        args: Details,
        work: F,
    ) -> SzResult<T>
    where
        T: Outcome,
        F: FnOnce() -> SzResult<T>,
    {
        let mut exit = self.trace_entry(op, &args);
        let result = work();

        if let Some(code) = op.event {
            if !ctx.is_cancelled() {
                let mut details = args;
                let error = match &result {
                    Ok(value) => {
                        if op.returns {
                            if let Some(ret) = value.detail() {
                                details.insert("return", ret);
                            }
                        }
                        None
                    }
                    Err(err) => Some(err.clone()),
                };
                self.notify(code, error, details);
            }
        }

        if let Some(exit) = exit.as_mut() {
            exit.record(&result);
        }
        result
    }

    /// Writes the entry trace of `op` and returns the guard writing its exit
    /// trace, or `None` when tracing is off.
    ///
    /// Once the entry is written the exit is written unconditionally, even if
    /// the operation lowers the logger's level in between.
    pub fn trace_entry(&self, op: &Operation, args: &Details) -> Option<ExitTrace> {
        if !self.is_trace_enabled() {
            return None;
        }
        let logger = self.logger();
        if !logger.is_enabled(op.entry) {
            return None;
        }
        let mut entry = args.clone();
        self.redact(&mut entry);
        logger.write(op.entry, &entry);
        Some(ExitTrace {
            envelope: self.clone(),
            code: op.exit,
            details: args.clone(),
            started: Instant::now(),
            recorded: false,
        })
    }

    /// Dispatches an event to the registered observers, if any.
    ///
    /// Details are redacted first. Returns immediately.
    pub fn notify(&self, event_code: u32, error: Option<SzError>, mut details: Details) {
        let Some(registry) = self.registry() else {
            return;
        };
        self.redact(&mut details);
        let _ = events::notify(
            &registry,
            &self.observer_origin(),
            self.inner.component,
            event_code,
            error,
            details,
        );
    }

    fn write_exit(&self, code: u32, mut details: Details) {
        self.redact(&mut details);
        self.logger().write(code, &details);
    }

    fn redact(&self, details: &mut Details) {
        if let Some(redactor) = self.redactor() {
            details.map_values(|key, value| redactor.redact(key, value));
        }
    }

    fn redactor(&self) -> Option<Arc<dyn Redact>> {
        self.inner
            .redactor
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_origin(&self, origin: String) {
        let mut slot = self
            .inner
            .origin
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *slot = origin;
    }

    fn set_initial_level(&self, level: LogLevel) {
        self.inner
            .initial_level
            .store(level as u8, Ordering::Relaxed);
        self.inner
            .trace
            .store(level == LogLevel::Trace, Ordering::Relaxed);
        if let Some(logger) = self.inner.logger.get() {
            if let Err(err) = logger.set_log_level(level) {
                tracing::warn!(
                    component = %self.inner.component,
                    error = %err,
                    "logger rejected level"
                );
            }
        }
    }

    // ---------------------------
    // Observer management
    // ---------------------------

    /// Registers `observer`.
    ///
    /// Observers that are already registered receive a `RegisterObserver`
    /// event naming the newcomer; the newcomer itself does not. Registering an
    /// id twice is a no-op.
    pub fn register_observer(&self, observer: Arc<dyn Observer>) -> SzResult<()> {
        let op = &self.inner.codes.register_observer;
        let args = Details::new().with("observerID", observer.id());
        let mut exit = self.trace_entry(op, &args);

        {
            let mut slot = self
                .inner
                .observers
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            let registry = slot.get_or_insert_with(|| Arc::new(ObserverRegistry::new()));
            let registry = Arc::clone(registry);
            if !registry.contains(observer.id()) {
                if let (Some(code), true) = (op.event, registry.has_observers()) {
                    let mut details = args.clone();
                    self.redact(&mut details);
                    let _ = events::notify(
                        &registry,
                        &self.observer_origin(),
                        self.inner.component,
                        code,
                        None,
                        details,
                    );
                }
                registry.register(observer);
            }
        }

        let result = Ok(());
        if let Some(exit) = exit.as_mut() {
            exit.record(&result);
        }
        result
    }

    /// Unregisters the observer with the same id as `observer`.
    ///
    /// 1. builds the `UnregisterObserver` event,
    /// 2. dispatches it to every current observer, the departing one included,
    /// 3. removes the observer,
    /// 4. drops the registry if it is now empty.
    pub fn unregister_observer(&self, observer: &dyn Observer) -> SzResult<()> {
        let op = &self.inner.codes.unregister_observer;
        let id = observer.id();
        let args = Details::new().with("observerID", id);
        let mut exit = self.trace_entry(op, &args);

        if let Some(registry) = self.registry() {
            if registry.contains(id) {
                if let Some(code) = op.event {
                    self.notify(code, None, args.clone());
                }
                let mut slot = self
                    .inner
                    .observers
                    .write()
                    .unwrap_or_else(PoisonError::into_inner);
                registry.unregister(id);
                let same = slot.as_ref().is_some_and(|r| Arc::ptr_eq(r, &registry));
                if same && registry.is_empty() {
                    *slot = None;
                }
            }
        }

        let result = Ok(());
        if let Some(exit) = exit.as_mut() {
            exit.record(&result);
        }
        result
    }

    /// Sets the log level by name. Unknown names are rejected with
    /// [`SzError::InvalidArgument`] and leave tracing unchanged.
    pub fn set_log_level(&self, ctx: &CancellationToken, name: &str) -> SzResult<()> {
        let op = self.inner.codes.set_log_level;
        let args = Details::new().with("logLevel", name);
        let component = self.inner.component;
        self.run(ctx, &op, args, || {
            let level: LogLevel = name
                .parse()
                .map_err(|err| SzError::invalid_argument(component, format!("{err}")))?;
            self.logger().set_log_level(level)?;
            self.inner
                .initial_level
                .store(level as u8, Ordering::Relaxed);
            self.inner
                .trace
                .store(level == LogLevel::Trace, Ordering::Relaxed);
            Ok(())
        })
    }

    /// Replaces the origin copied into subsequent events.
    pub fn set_observer_origin(&self, ctx: &CancellationToken, origin: &str) -> SzResult<()> {
        let op = self.inner.codes.set_observer_origin;
        let args = Details::new().with("origin", origin);
        self.call(ctx, &op, args, || self.set_origin(origin.to_string()))
    }

    /// Returns the origin (traced, never notified).
    pub fn get_observer_origin(&self, ctx: &CancellationToken) -> SzResult<String> {
        let op = self.inner.codes.get_observer_origin;
        self.call(ctx, &op, Details::new(), || self.observer_origin())
    }
}

impl std::fmt::Debug for Envelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Envelope")
            .field("component", &self.inner.component)
            .field("trace", &self.is_trace_enabled())
            .field("origin", &self.observer_origin())
            .field("observers", &self.registry())
            .finish()
    }
}

/// Guard writing the exit trace of one operation when dropped.
///
/// Records `return`, `error` and `elapsed` (nanoseconds). If dropped before
/// [`ExitTrace::record`] (unwind, abandoned stream) the record carries
/// `outcome = "panicked"` or `outcome = "abandoned"` instead.
pub struct ExitTrace {
    envelope: Envelope,
    code: u32,
    details: Details,
    started: Instant,
    recorded: bool,
}

impl ExitTrace {
    /// Stores the operation's result for the exit record.
    pub fn record<T: Outcome>(&mut self, result: &SzResult<T>) {
        match result {
            Ok(value) => {
                if let Some(ret) = value.detail() {
                    self.details.insert("return", ret);
                }
            }
            Err(err) => self.details.insert("error", err),
        }
        self.recorded = true;
    }
}

impl Drop for ExitTrace {
    fn drop(&mut self) {
        let mut details = std::mem::take(&mut self.details);
        if !self.recorded {
            let outcome = if std::thread::panicking() {
                "panicked"
            } else {
                "abandoned"
            };
            details.insert("outcome", outcome);
        }
        details.insert("elapsed", self.started.elapsed().as_nanos());
        self.envelope.write_exit(self.code, details);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observers::ChannelObserver;
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio::sync::mpsc::UnboundedReceiver;

    const CODES: ObservableCodes = ObservableCodes {
        get_observer_origin: Operation::traced("GetObserverOrigin", 11),
        register_observer: Operation::new("RegisterObserver", 13, 8006),
        set_log_level: Operation::new("SetLogLevel", 15, 8007),
        set_observer_origin: Operation::new("SetObserverOrigin", 17, 8008),
        unregister_observer: Operation::new("UnregisterObserver", 19, 8009),
    };
    const GET_THING: Operation = Operation::new("GetThing", 1, 8001);
    const COUNT_THINGS: Operation = Operation::new("CountThings", 3, 8002).with_return();

    #[derive(Default)]
    struct Recording {
        level: Mutex<Option<LogLevel>>,
        lines: Mutex<Vec<(u32, Details)>>,
    }

    impl Logger for Recording {
        fn write(&self, code: u32, details: &Details) {
            self.lines.lock().unwrap().push((code, details.clone()));
        }
        fn set_log_level(&self, level: LogLevel) -> SzResult<()> {
            *self.level.lock().unwrap() = Some(level);
            Ok(())
        }
        fn log_level(&self) -> LogLevel {
            self.level.lock().unwrap().unwrap_or_default()
        }
    }

    impl Recording {
        fn codes(&self) -> Vec<u32> {
            self.lines
                .lock()
                .unwrap()
                .iter()
                .map(|(c, _)| *c)
                .collect()
        }
    }

    fn envelope() -> (Envelope, Arc<Recording>) {
        let env = Envelope::new(Component::Engine, &CODES);
        let logger = Arc::new(Recording::default());
        assert!(env.set_logger(logger.clone()));
        (env, logger)
    }

    async fn next(rx: &mut UnboundedReceiver<crate::Event>) -> crate::Event {
        tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .expect("event not delivered")
            .expect("channel closed")
    }

    #[tokio::test]
    async fn call_returns_work_result_without_tracing_by_default() {
        let (env, logger) = envelope();
        let ctx = CancellationToken::new();
        let out = env.call(&ctx, &GET_THING, Details::new(), || "canned".to_string());
        assert_eq!(out, Ok("canned".to_string()));
        assert!(logger.lines.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn trace_writes_entry_then_exit() {
        let (env, logger) = envelope();
        let ctx = CancellationToken::new();
        env.set_log_level(&ctx, "TRACE").unwrap();
        logger.lines.lock().unwrap().clear();

        let args = Details::new().with("flags", 0);
        env.call(&ctx, &COUNT_THINGS, args, || 5_i64).unwrap();

        let lines = logger.lines.lock().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].0, 3);
        assert_eq!(lines[0].1, Details::from([("flags", "0")]));
        assert_eq!(lines[1].0, 4);
        assert_eq!(lines[1].1.get("return"), Some("5"));
        assert!(lines[1].1.contains_key("elapsed"));
    }

    #[tokio::test]
    async fn exit_trace_survives_unwind() {
        let (env, logger) = envelope();
        let ctx = CancellationToken::new();
        env.set_log_level(&ctx, "TRACE").unwrap();
        logger.lines.lock().unwrap().clear();

        let env2 = env.clone();
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _ = env2.call(&ctx, &GET_THING, Details::new(), || -> String {
                panic!("work failed")
            });
        }));
        assert!(outcome.is_err());

        let lines = logger.lines.lock().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].0, 2);
        assert_eq!(lines[1].1.get("outcome"), Some("panicked"));
    }

    #[tokio::test]
    async fn lowering_the_level_still_closes_its_own_trace() {
        let (env, logger) = envelope();
        let ctx = CancellationToken::new();
        env.set_log_level(&ctx, "TRACE").unwrap();
        logger.lines.lock().unwrap().clear();

        env.set_log_level(&ctx, "DEBUG").unwrap();
        assert_eq!(logger.log_level(), LogLevel::Debug);
        assert_eq!(logger.codes(), vec![15, 16]);

        logger.lines.lock().unwrap().clear();
        env.call(&ctx, &GET_THING, Details::new(), String::new).unwrap();
        assert!(logger.lines.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn no_exit_trace_without_an_entry() {
        let (env, logger) = envelope();
        let ctx = CancellationToken::new();
        env.inner.trace.store(true, Ordering::Relaxed);
        env.call(&ctx, &GET_THING, Details::new(), String::new).unwrap();
        assert!(logger.lines.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn notify_includes_return_only_when_asked() {
        let (env, _logger) = envelope();
        let ctx = CancellationToken::new();
        let (obs, mut rx) = ChannelObserver::new("o");
        env.register_observer(Arc::new(obs)).unwrap();

        let args = Details::new().with("k", "v");
        env.call(&ctx, &GET_THING, args, || "r".to_string()).unwrap();
        let ev = next(&mut rx).await;
        assert_eq!(ev.event_code, 8001);
        assert_eq!(ev.details, Details::from([("k", "v")]));

        env.call(&ctx, &COUNT_THINGS, Details::new(), || 9_i64).unwrap();
        let ev = next(&mut rx).await;
        assert_eq!(ev.details, Details::from([("return", "9")]));
    }

    #[tokio::test]
    async fn cancelled_context_suppresses_notification() {
        let (env, _logger) = envelope();
        let (obs, mut rx) = ChannelObserver::new("o");
        env.register_observer(Arc::new(obs)).unwrap();

        let ctx = CancellationToken::new();
        ctx.cancel();
        let out = env.call(&ctx, &GET_THING, Details::new(), || "still".to_string());
        assert_eq!(out.as_deref(), Ok("still"));
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn register_notifies_existing_observers_only() {
        let (env, _logger) = envelope();
        let (first, mut rx_first) = ChannelObserver::new("first");
        let (second, mut rx_second) = ChannelObserver::new("second");
        env.register_observer(Arc::new(first)).unwrap();
        env.register_observer(Arc::new(second)).unwrap();

        let ev = next(&mut rx_first).await;
        assert_eq!(ev.event_code, 8006);
        assert_eq!(ev.details.get("observerID"), Some("second"));

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(rx_second.try_recv().is_err());
    }

    #[tokio::test]
    async fn reregistering_an_id_is_silent() {
        let (env, _logger) = envelope();
        let (first, mut rx) = ChannelObserver::new("first");
        let (again, _rx_again) = ChannelObserver::new("first");
        env.register_observer(Arc::new(first)).unwrap();

        env.register_observer(Arc::new(again)).unwrap();
        assert_eq!(env.registry().map(|r| r.len()), Some(1));
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn unregister_last_observer_collapses_registry() {
        let (env, _logger) = envelope();
        let (obs, mut rx) = ChannelObserver::new("solo");
        let obs = Arc::new(obs);
        assert!(env.registry().is_none());

        env.register_observer(obs.clone()).unwrap();
        assert!(env.has_observers());

        env.unregister_observer(obs.as_ref()).unwrap();
        assert!(!env.has_observers());
        assert!(env.registry().is_none());

        let ev = next(&mut rx).await;
        assert_eq!(ev.event_code, 8009);
        assert_eq!(ev.details, Details::from([("observerID", "solo")]));
    }

    #[tokio::test]
    async fn unregister_unknown_observer_is_quiet() {
        let (env, _logger) = envelope();
        let (known, mut rx) = ChannelObserver::new("known");
        let (stranger, _rx2) = ChannelObserver::new("stranger");
        env.register_observer(Arc::new(known)).unwrap();

        env.unregister_observer(&stranger).unwrap();
        assert!(env.has_observers());
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn bad_level_is_rejected_and_keeps_trace_off() {
        let (env, _logger) = envelope();
        let ctx = CancellationToken::new();
        let err = env.set_log_level(&ctx, "BOGUS").unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(err.component(), Some(Component::Engine));
        assert!(!env.is_trace_enabled());

        env.set_log_level(&ctx, "TRACE").unwrap();
        assert!(env.is_trace_enabled());
        env.set_log_level(&ctx, "BOGUS").unwrap_err();
        assert!(env.is_trace_enabled());
        env.set_log_level(&ctx, "INFO").unwrap();
        assert!(!env.is_trace_enabled());
    }

    #[tokio::test]
    async fn redaction_applies_to_events_and_traces() {
        let (env, logger) = envelope();
        let ctx = CancellationToken::new();
        env.set_redactor(Some(Arc::new(RedactKeys::new(["settings"]))));
        env.set_log_level(&ctx, "TRACE").unwrap();
        let (obs, mut rx) = ChannelObserver::new("o");
        env.register_observer(Arc::new(obs)).unwrap();
        logger.lines.lock().unwrap().clear();

        let args = Details::new()
            .with("settings", "{\"PASSWORD\":\"x\"}")
            .with("instanceName", "i");
        env.call(&ctx, &GET_THING, args, || String::new()).unwrap();

        let ev = next(&mut rx).await;
        assert_eq!(ev.details.get("settings"), Some(RedactKeys::MASK));
        assert_eq!(ev.details.get("instanceName"), Some("i"));
        for (_, details) in logger.lines.lock().unwrap().iter() {
            assert_eq!(details.get("settings"), Some(RedactKeys::MASK));
        }
    }

    #[tokio::test]
    async fn origin_is_copied_into_events() {
        let (env, _logger) = envelope();
        let ctx = CancellationToken::new();
        let (obs, mut rx) = ChannelObserver::new("o");
        env.register_observer(Arc::new(obs)).unwrap();

        env.set_observer_origin(&ctx, "billing").unwrap();
        let ev = next(&mut rx).await;
        assert_eq!(ev.event_code, 8008);
        assert_eq!(ev.origin, "billing");
        assert_eq!(env.get_observer_origin(&ctx).unwrap(), "billing");
    }

    #[test]
    fn inherit_copies_parent_state() {
        let parent = Envelope::new(Component::ConfigManager, &CODES);
        parent.configure(&Config {
            observer_origin: "parent".into(),
            log_level: LogLevel::Trace,
            redact_keys: vec!["settings".into()],
        });
        let child = Envelope::new(Component::Config, &CODES);
        child.inherit(&parent);
        assert_eq!(child.observer_origin(), "parent");
        assert!(child.is_trace_enabled());
        assert_eq!(child.logger().log_level(), LogLevel::Trace);
        assert!(child.redactor().is_some());
    }

    #[test]
    fn default_logger_is_built_lazily_once() {
        let env = Envelope::new(Component::Product, &CODES);
        let a = env.logger();
        let b = env.logger();
        assert!(Arc::ptr_eq(&a, &b));

        let late = Arc::new(Recording::default());
        assert!(!env.set_logger(late.clone()));
        assert!(Arc::ptr_eq(&env.logger(), &a));
        assert_eq!(*late.level.lock().unwrap(), None);
    }
}
