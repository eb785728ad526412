use std::{
    error,
    fmt::Display,
    io::{self, Write},
};

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// The bound used when none is given on the command line.
pub const DEFAULT_UPPER_BOUND: usize = 500;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    ZeroUpperBound,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ZeroUpperBound => write!(f, "Upper bound must be positive, but got 0."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
#[command(about = "Count odd and even divisors of every number from 1 to the upper bound")]
pub struct CLIArgs {
    #[arg(default_value_t = DEFAULT_UPPER_BOUND)]
    pub upper_bound: usize,
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn init_logger(verbose: bool) {
    let default_filter = if verbose {
        "divisor_parity=debug"
    } else {
        "divisor_parity=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DivisorCounts {
    odd: usize,
    even: usize,
}

impl DivisorCounts {
    pub fn new(odd: usize, even: usize) -> Self {
        Self { odd, even }
    }

    pub fn odd(&self) -> usize {
        self.odd
    }

    pub fn even(&self) -> usize {
        self.even
    }

    pub fn total(&self) -> usize {
        self.odd + self.even
    }

    fn add(&mut self, divisor: usize) {
        if divisor % 2 == 0 {
            self.even += 1;
        } else {
            self.odd += 1;
        }
    }
}

impl Display for DivisorCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.odd, self.even)
    }
}

/// Scans every candidate in `1..=n`, so `n` divisibility tests are made.
pub fn count_divisors(n: usize) -> DivisorCounts {
    let mut counts = DivisorCounts::default();
    for i in (1..=n).filter(|i| n % i == 0) {
        counts.add(i);
    }

    counts
}

/// Yields `(n, counts)` for every `n` from 1 to the upper bound, ascending.
#[derive(Debug)]
pub struct DivisorCounter {
    next: usize,
    upper_bound: usize,
    test_count: usize,
}

impl DivisorCounter {
    pub fn new(upper_bound: usize) -> Result<Self, Error> {
        if upper_bound == 0 {
            return Err(Error::ZeroUpperBound);
        }

        Ok(Self {
            next: 1,
            upper_bound,
            test_count: 0,
        })
    }

    pub fn upper_bound(&self) -> usize {
        self.upper_bound
    }

    pub fn divisibility_tests(&self) -> usize {
        self.test_count
    }
}

impl Iterator for DivisorCounter {
    type Item = (usize, DivisorCounts);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.upper_bound {
            return None;
        }

        let n = self.next;
        let counts = count_divisors(n);
        self.test_count += n;
        self.next += 1;
        debug!(n, odd = counts.odd(), even = counts.even(), "counted divisors");

        Some((n, counts))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.upper_bound + 1).saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for DivisorCounter {}

pub fn banner(upper_bound: usize) -> String {
    format!(
        "========== COUNT OF ODD AND EVEN DIVISORS FOR NUMBERS 1 TO {} ==========",
        upper_bound
    )
}

/// Writes the banner, a blank line and then one `odd even` line per number.
/// Returns the number of divisibility tests performed.
pub fn write_report<W: Write>(writer: &mut W, upper_bound: usize) -> anyhow::Result<usize> {
    let mut counter = DivisorCounter::new(upper_bound)?;
    writeln!(writer, "{}", banner(upper_bound))?;
    writeln!(writer)?;
    for (_, counts) in counter.by_ref() {
        writeln!(writer, "{}", counts)?;
    }
    writer.flush()?;

    Ok(counter.divisibility_tests())
}
