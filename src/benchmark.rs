// SPDX-License-Identifier: GPL-3.0-only

//! Frame rate benchmark
//!
//! Reads frames from a [`FrameSource`] for [`TEST_DURATION`], printing the
//! number of frames seen in every [`REPORT_INTERVAL`] and an average at the
//! end.
//!
//! # States
//!
//! ```text
//!            frame read ok
//!          ┌──────────────┐
//!          ▼              │
//!      ┌─────────┐ interval elapsed ┌───────────┐
//!  ──▶ │ RUNNING │ ───────────────▶ │ REPORTING │
//!      └─────────┘ ◀─────────────── └───────────┘
//!        │    │
//!  read  │    │ duration elapsed
//!  error ▼    ▼
//!  ┌────────┐ ┌──────┐
//!  │ FAILED │ │ DONE │
//!  └────────┘ └──────┘
//! ```
//!
//! The counters live in [`BenchmarkState`], which is advanced one frame at a
//! time with an explicit timestamp so the loop can be driven by a simulated
//! clock.

use std::io::Write;
use std::time::{Duration, Instant};

use tracing::{debug, trace, warn};

use crate::backends::camera::FrameSource;
use crate::constants::{REPORT_INTERVAL, TEST_DURATION};
use crate::errors::{AppResult, CameraError};

/// Final numbers of a completed run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkSummary {
    pub total_frames: u64,
    /// Whole seconds elapsed between the start and the last frame
    pub elapsed_secs: u64,
    pub average_fps: f64,
}

/// How a benchmark run ended
#[derive(Debug)]
pub enum BenchmarkOutcome {
    /// The full test duration was captured
    Completed(BenchmarkSummary),
    /// A frame read failed before the duration elapsed
    Failed {
        total_frames: u64,
        error: CameraError,
    },
}

impl BenchmarkOutcome {
    /// Outcome of a run whose stream could not be started
    ///
    /// Reported like a read failure on the first frame.
    pub fn not_started(error: CameraError) -> Self {
        warn!(error = %error, "Capture stream did not start");
        BenchmarkOutcome::Failed {
            total_frames: 0,
            error,
        }
    }
}

/// What happened as a result of recording one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameEvents {
    /// Frames counted in the report interval that just closed
    pub interval_report: Option<u64>,
    /// Set on the frame that ends the run
    pub summary: Option<BenchmarkSummary>,
}

/// Frame counters of a running benchmark
#[derive(Debug, Clone)]
pub struct BenchmarkState {
    total_frames: u64,
    interval_frames: u64,
    started_at: Instant,
    last_report: Instant,
    duration: Duration,
    report_interval: Duration,
}

impl BenchmarkState {
    /// Counters for a run starting at `started_at` with the default timing
    pub fn new(started_at: Instant) -> Self {
        Self::with_timing(started_at, TEST_DURATION, REPORT_INTERVAL)
    }

    /// Counters with a custom run length and report cadence.
    ///
    /// Both durations are rounded up to whole seconds, with a minimum of
    /// one second, since elapsed time is measured in whole seconds.
    pub fn with_timing(started_at: Instant, duration: Duration, report_interval: Duration) -> Self {
        Self {
            total_frames: 0,
            interval_frames: 0,
            started_at,
            last_report: started_at,
            duration: whole_seconds(duration),
            report_interval: whole_seconds(report_interval),
        }
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    /// Frames counted since the last interval report
    pub fn interval_frames(&self) -> u64 {
        self.interval_frames
    }

    /// Count one frame captured at `now`.
    ///
    /// Closes the report interval when at least one interval has passed
    /// since the previous report, and ends the run once the test duration
    /// has passed since the start.
    pub fn record_frame(&mut self, now: Instant) -> FrameEvents {
        self.total_frames += 1;
        self.interval_frames += 1;

        let mut events = FrameEvents::default();

        if now.saturating_duration_since(self.last_report) >= self.report_interval {
            events.interval_report = Some(self.interval_frames);
            self.interval_frames = 0;
            self.last_report = now;
        }

        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration {
            let elapsed_secs = elapsed.as_secs();
            events.summary = Some(BenchmarkSummary {
                total_frames: self.total_frames,
                elapsed_secs,
                average_fps: self.total_frames as f64 / elapsed_secs as f64,
            });
        }

        events
    }
}

fn whole_seconds(duration: Duration) -> Duration {
    let secs = duration.as_secs() + u64::from(duration.subsec_nanos() > 0);
    Duration::from_secs(secs.max(1))
}

/// Run the benchmark against `source`, writing the report to `out`.
///
/// `clock` is sampled once at the start and once after every frame. A
/// failed read ends the run without an average; the partial interval
/// reports already written stay in `out`.
pub fn run_benchmark<S, C, W>(
    source: &mut S,
    mut clock: C,
    out: &mut W,
) -> AppResult<BenchmarkOutcome>
where
    S: FrameSource + ?Sized,
    C: FnMut() -> Instant,
    W: Write,
{
    let state = BenchmarkState::new(clock());
    run_with_state(source, state, clock, out)
}

/// Same as [`run_benchmark`], starting from prepared counters
pub fn run_with_state<S, C, W>(
    source: &mut S,
    mut state: BenchmarkState,
    mut clock: C,
    out: &mut W,
) -> AppResult<BenchmarkOutcome>
where
    S: FrameSource + ?Sized,
    C: FnMut() -> Instant,
    W: Write,
{
    debug!(
        duration_secs = state.duration.as_secs(),
        report_interval_secs = state.report_interval.as_secs(),
        "Starting frame rate benchmark"
    );

    loop {
        let frame = match source.read_frame() {
            Ok(frame) => frame,
            Err(error) => {
                warn!(error = %error, frames = state.total_frames(), "Benchmark stopped early");
                return Ok(BenchmarkOutcome::Failed {
                    total_frames: state.total_frames(),
                    error,
                });
            }
        };
        trace!(sequence = frame.sequence, bytes = frame.bytes, "Frame captured");

        let events = state.record_frame(clock());

        if let Some(frames) = events.interval_report {
            writeln!(out, "Current FPS: {}", frames)?;
            out.flush()?;
        }

        if let Some(summary) = events.summary {
            writeln!(
                out,
                "Captured {} frames in {} seconds. Average FPS: {}",
                summary.total_frames, summary.elapsed_secs, summary.average_fps
            )?;
            out.flush()?;
            return Ok(BenchmarkOutcome::Completed(summary));
        }
    }
}
