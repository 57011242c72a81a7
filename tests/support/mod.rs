// Shared fixtures for host-side tests: a fixed snapshot source, a recording
// scheduler and a capturing logger.

#![allow(dead_code)]

use mic_bloom::core::{FrameScheduler, Reschedule, SnapshotSource};
use std::sync::Mutex;

pub struct FixedSource {
    pub frequency: Vec<u8>,
    pub time_domain: Vec<u8>,
}

impl FixedSource {
    pub fn flat(bins: usize, samples: usize, level: u8) -> Self {
        Self {
            frequency: vec![level; bins],
            time_domain: vec![level; samples],
        }
    }
}

impl SnapshotSource for FixedSource {
    fn frequency_bin_count(&self) -> usize {
        self.frequency.len()
    }

    fn time_domain_len(&self) -> usize {
        self.time_domain.len()
    }

    fn fill_frequency(&self, out: &mut [u8]) {
        out.copy_from_slice(&self.frequency);
    }

    fn fill_time_domain(&self, out: &mut [u8]) {
        out.copy_from_slice(&self.time_domain);
    }
}

#[derive(Default)]
pub struct RecordingScheduler {
    pub requests: Vec<Reschedule>,
}

impl FrameScheduler for RecordingScheduler {
    fn schedule(&mut self, next: Reschedule) {
        self.requests.push(next);
    }
}

struct CaptureLogger;

static RECORDS: Mutex<Vec<(log::Level, String)>> = Mutex::new(Vec::new());
static LOGGER: CaptureLogger = CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if let Ok(mut r) = RECORDS.lock() {
            r.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

pub fn install_logger() {
    _ = log::set_logger(&LOGGER);
    log::set_max_level(log::LevelFilter::Trace);
}

/// Records at `level` whose message contains `needle`.
pub fn logged(level: log::Level, needle: &str) -> usize {
    RECORDS
        .lock()
        .map(|r| {
            r.iter()
                .filter(|(l, m)| *l == level && m.contains(needle))
                .count()
        })
        .unwrap_or(0)
}
