//! Shared helpers for the scenario tests.

#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use szmock::{ChannelObserver, Details, Event, LogLevel, Logger, SzResult};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing_subscriber::filter::LevelFilter;

/// How long a test waits for an event before failing.
pub const DELIVERY: Duration = Duration::from_secs(2);

/// How long a test waits before concluding that nothing was delivered.
pub const QUIET: Duration = Duration::from_millis(100);

/// Routes `tracing` output to the test harness; safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::TRACE)
        .with_test_writer()
        .try_init();
}

/// In-memory sink for formatted `tracing` output.
#[derive(Clone, Default)]
pub struct CapturedTracing(Arc<Mutex<Vec<u8>>>);

impl CapturedTracing {
    /// Installs a TRACE-level subscriber writing into this buffer for the
    /// current thread until the guard is dropped.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let sink = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(LevelFilter::TRACE)
            .with_ansi(false)
            .with_writer(move || sink.clone())
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Number of written records carrying message id `id`.
    pub fn count(&self, id: &str) -> usize {
        self.text()
            .lines()
            .filter(|line| {
                line.split_whitespace()
                    .any(|word| word.trim_matches('"').ends_with(&format!("={id}")))
            })
            .count()
    }

    pub fn clear(&self) {
        self.0.lock().unwrap().clear();
    }
}

impl io::Write for CapturedTracing {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Logger that keeps every record it is handed.
#[derive(Default)]
pub struct RecordingLogger {
    level: Mutex<LogLevel>,
    records: Mutex<Vec<(u32, Details)>>,
}

impl RecordingLogger {
    pub fn arc() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn records(&self) -> Vec<(u32, Details)> {
        self.records.lock().unwrap().clone()
    }

    pub fn codes(&self) -> Vec<u32> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .map(|(c, _)| *c)
            .collect()
    }

    pub fn clear(&self) {
        self.records.lock().unwrap().clear();
    }
}

impl Logger for RecordingLogger {
    fn write(&self, code: u32, details: &Details) {
        self.records.lock().unwrap().push((code, details.clone()));
    }

    fn set_log_level(&self, level: LogLevel) -> SzResult<()> {
        *self.level.lock().unwrap() = level;
        Ok(())
    }

    fn log_level(&self) -> LogLevel {
        *self.level.lock().unwrap()
    }
}

/// Channel observer wrapped for registration.
pub fn channel(id: &str) -> (Arc<ChannelObserver>, UnboundedReceiver<Event>) {
    let (observer, rx) = ChannelObserver::new(id);
    (Arc::new(observer), rx)
}

/// Waits for the next event or panics after [`DELIVERY`].
pub async fn next_event(rx: &mut UnboundedReceiver<Event>) -> Event {
    tokio::time::timeout(DELIVERY, rx.recv())
        .await
        .expect("timed out waiting for event")
        .expect("observer channel closed")
}

/// Asserts that no event arrives within [`QUIET`].
pub async fn assert_quiet(rx: &mut UnboundedReceiver<Event>) {
    tokio::time::sleep(QUIET).await;
    if let Ok(ev) = rx.try_recv() {
        panic!(
            "unexpected event {} with details {}",
            ev.event_code, ev.details
        );
    }
}
