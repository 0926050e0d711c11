//! The interactive randomize → select → sort → verify → report cycle.
//!
//! [`Harness`] owns the buffer for its whole lifetime and lends it to one sorter per
//! cycle. It is generic over its input and output so the same state machine drives
//! the terminal binary and in-memory tests.

use crate::core::{Algorithm, BUFFER_LEN, RandomSource, Selector, is_sorted};
use crate::error::{HarnessError, Result};
use crate::timer::{ScopedTimer, millis};
use log::{debug, info, trace, warn};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::time::Duration;

/// Harness settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Number of elements in the buffer.
    pub len: usize,
    /// Fixed seed for reproducible runs. `None` reseeds from the clock every cycle.
    pub seed: Option<u64>,
    /// Print the buffer again after each sort.
    pub print_sorted: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            len: BUFFER_LEN,
            seed: None,
            print_sorted: false,
        }
    }
}

impl HarnessConfig {
    /// Rejects settings the harness cannot run with, such as an empty buffer.
    pub fn validate(&self) -> Result<()> {
        if self.len == 0 {
            return Err(HarnessError::invalid_config(
                "buffer length must be non-zero",
            ));
        }
        Ok(())
    }
}

/// Where the harness is in its cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HarnessState {
    AwaitingInput,
    Sorting,
    Reporting,
    Terminated,
}

/// Outcome of one completed cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CycleReport {
    pub selector: Selector,
    /// Wall-clock time of the timed scope.
    pub elapsed: Duration,
    /// Verifier verdict on the buffer after the cycle.
    pub sorted: bool,
}

impl CycleReport {
    /// Elapsed time in fractional milliseconds.
    pub fn millis(&self) -> f64 {
        millis(self.elapsed)
    }
}

/// Totals for a whole session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub cycles: usize,
    pub successful: usize,
}

/// Yields one selector per non-whitespace character of a line-oriented input.
///
/// Blank lines are skipped and a line holding several characters feeds several cycles.
/// End of input reads as [`Selector::Terminate`].
pub struct SelectorReader<R> {
    input: R,
    pending: VecDeque<char>,
    line: String,
}

impl<R: BufRead> SelectorReader<R> {
    /// Wraps a line-oriented input.
    pub fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
            line: String::new(),
        }
    }

    /// Reads the next selector code, or `None` at end of input.
    pub fn next_code(&mut self) -> io::Result<Option<char>> {
        loop {
            if let Some(code) = self.pending.pop_front() {
                return Ok(Some(code));
            }

            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(self.line.chars().filter(|c| !c.is_whitespace()));
        }
    }

    /// Reads the next code and maps it to a [`Selector`].
    pub fn next_selector(&mut self) -> io::Result<Selector> {
        Ok(self.next_code()?.map_or(Selector::Terminate, Selector::from))
    }
}

/// Drives the benchmark cycle until a terminating selector arrives.
///
/// # Examples
///
/// ```
/// use sortbench::harness::{Harness, HarnessConfig};
///
/// let config = HarnessConfig { len: 16, seed: Some(1), print_sorted: false };
/// let mut harness = Harness::new(config, "4\nq\n".as_bytes(), Vec::<u8>::new()).unwrap();
/// let summary = harness.run().unwrap();
///
/// assert_eq!(summary.cycles, 1);
/// assert_eq!(summary.successful, 1);
/// let out = String::from_utf8(harness.into_output()).unwrap();
/// assert!(out.starts_with("Quick Sort [TIMER]: "));
/// assert!(out.ends_with("[RESULT]: successful\n"));
/// ```
pub struct Harness<R, W> {
    buffer: Vec<i32>,
    source: RandomSource,
    selectors: SelectorReader<R>,
    out: W,
    print_sorted: bool,
    state: HarnessState,
}

impl<R: BufRead, W: Write> Harness<R, W> {
    /// Validates `config` and allocates the buffer. Selectors are read from `input`,
    /// reports written to `out`.
    pub fn new(config: HarnessConfig, input: R, out: W) -> Result<Self> {
        config.validate()?;
        let source = match config.seed {
            Some(seed) => RandomSource::with_seed(seed),
            None => RandomSource::from_clock(),
        };
        debug!(
            "Harness ready: {} elements, seed {:?}",
            config.len, config.seed
        );

        Ok(Self {
            buffer: vec![0; config.len],
            source,
            selectors: SelectorReader::new(input),
            out,
            print_sorted: config.print_sorted,
            state: HarnessState::AwaitingInput,
        })
    }

    /// Current state of the cycle.
    pub fn state(&self) -> HarnessState {
        self.state
    }

    /// The buffer as left by the last cycle.
    pub fn buffer(&self) -> &[i32] {
        &self.buffer
    }

    /// Consumes the harness and returns the report sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs cycles until termination.
    pub fn run(&mut self) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        while let Some(report) = self.step()? {
            summary.cycles += 1;
            if report.sorted {
                summary.successful += 1;
            }
        }
        info!(
            "Session finished: {} cycles, {} successful",
            summary.cycles, summary.successful
        );
        Ok(summary)
    }

    /// Runs a single cycle. Returns `None` once the harness has terminated.
    pub fn step(&mut self) -> Result<Option<CycleReport>> {
        if self.state == HarnessState::Terminated {
            return Ok(None);
        }

        self.source.fill(&mut self.buffer);

        let selector = self.selectors.next_selector()?;
        let algorithm = match selector {
            Selector::Terminate => {
                self.transition(HarnessState::Terminated);
                self.out.flush()?;
                return Ok(None);
            }
            Selector::Print => {
                writeln!(self.out, "Original array:")?;
                write_values(&mut self.out, &self.buffer)?;
                None
            }
            Selector::Sort(algorithm) => {
                write!(self.out, "{} ", algorithm.label())?;
                Some(algorithm)
            }
        };

        self.transition(HarnessState::Sorting);
        let elapsed = self.timed_sort(algorithm)?;

        self.transition(HarnessState::Reporting);
        let sorted = is_sorted(&self.buffer);
        writeln!(
            self.out,
            "[RESULT]: {}",
            if sorted { "successful" } else { "unsuccessful" }
        )?;
        if self.print_sorted {
            write_values(&mut self.out, &self.buffer)?;
        }
        self.out.flush()?;

        let report = CycleReport {
            selector,
            elapsed,
            sorted,
        };
        let label = algorithm.map_or("Print", Algorithm::label);
        if sorted {
            info!("{}: {}ms", label, report.millis());
        } else if algorithm.is_some() {
            warn!("{} left the buffer unsorted after {}ms", label, report.millis());
        }

        self.transition(HarnessState::AwaitingInput);
        Ok(Some(report))
    }

    /// Times exactly the sort call. The timer line is written when the scope closes.
    fn timed_sort(&mut self, algorithm: Option<Algorithm>) -> Result<Duration> {
        let mut elapsed = Duration::ZERO;
        let mut written: io::Result<()> = Ok(());
        let out = &mut self.out;
        let buffer = &mut self.buffer;

        ScopedTimer::time(
            |d| {
                elapsed = d;
                written = writeln!(out, "[TIMER]: {}ms", millis(d));
            },
            || {
                if let Some(algorithm) = algorithm {
                    algorithm.sort(buffer);
                }
            },
        );

        written?;
        Ok(elapsed)
    }

    fn transition(&mut self, next: HarnessState) {
        trace!("{:?} -> {:?}", self.state, next);
        self.state = next;
    }
}

fn write_values<W: Write>(out: &mut W, values: &[i32]) -> io::Result<()> {
    for value in values {
        write!(out, "{} ", value)?;
    }
    writeln!(out)
}
