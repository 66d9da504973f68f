//! Times the sorters on generated input, counts their comparisons and verifies the results.
//!
//! ```no_run
//! use orst_sorts::benchmark::{self, BenchConfig, InputShape, Order, Suite};
//!
//! let report = benchmark::run(&BenchConfig {
//!     shape: InputShape::Random,
//!     size: 10_000,
//!     order: Order::Less,
//!     suite: Suite::Pivots,
//!     seed: Some(7),
//! })
//! .unwrap();
//! report.print_table();
//! ```

use std::{cell::Cell, cmp::Ordering, rc::Rc, time::Instant};

use clap::ValueEnum;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use prettytable::{row, Table};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;

use crate::compare::{is_sorted_by, Greater, Less};
use crate::sorters::Algorithm;

/// Quadratic algorithms are not run on inputs larger than this.
pub const QUADRATIC_LIMIT: usize = 50_000;

/// Shape of the generated input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputShape {
    /// Uniformly random `i32` values
    Random,
    /// `0, 1, 2, ..., n - 1`
    #[value(alias = "sorted_small_to_large")]
    SortedSmallToLarge,
}

/// Direction every sorter is asked to sort in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Order {
    /// Smallest first
    Less,
    /// Largest first
    Greater,
}

/// Which algorithms to run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Suite {
    /// Every algorithm
    All,
    /// One representative of every algorithm family
    Algorithms,
    /// The three quicksort pivot strategies
    Pivots,
}

impl Suite {
    pub fn algorithms(self) -> &'static [Algorithm] {
        match self {
            Suite::All => Algorithm::value_variants(),
            Suite::Algorithms => &[
                Algorithm::Insertion,
                Algorithm::Shell,
                Algorithm::Heap,
                Algorithm::Merge,
                Algorithm::QuickMedianOfThree,
                Algorithm::ThreeWay,
            ],
            Suite::Pivots => &[
                Algorithm::QuickMedianOfThree,
                Algorithm::QuickMiddle,
                Algorithm::QuickFirst,
            ],
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct BenchConfig {
    pub shape: InputShape,
    pub size: usize,
    pub order: Order,
    pub suite: Suite,
    /// Seed for [`InputShape::Random`]. Drawn from the OS when absent.
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub config: BenchConfig,
    pub rows: Vec<Row>,
}

#[derive(Debug, Serialize)]
pub struct Row {
    pub algorithm: Algorithm,
    pub name: &'static str,
    #[serde(flatten)]
    pub outcome: Outcome,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum Outcome {
    Ran {
        nanos: u64,
        millis: u64,
        comparisons: usize,
        verified: bool,
    },
    Skipped {
        reason: String,
    },
}

// An element that counts how often it gets compared. `value` decides the order, the shared
// counter is ignored by every comparison.
#[derive(Clone, Debug)]
struct Counted {
    value: i32,
    comparisons: Rc<Cell<usize>>,
}

impl PartialEq for Counted {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Counted {}

impl PartialOrd for Counted {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Counted {
    fn cmp(&self, other: &Self) -> Ordering {
        self.comparisons.set(self.comparisons.get() + 1);
        self.value.cmp(&other.value)
    }
}

/// Generates `size` values of the given shape.
pub fn generate(shape: InputShape, size: usize, seed: Option<u64>) -> Vec<i32> {
    match shape {
        InputShape::Random => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            (0..size).map(|_| rng.gen::<i32>()).collect()
        }
        InputShape::SortedSmallToLarge => (0..size).map(|i| i as i32).collect(),
    }
}

fn skip_reason(algorithm: Algorithm, config: &BenchConfig) -> Option<&'static str> {
    if algorithm.quadratic() && config.size > QUADRATIC_LIMIT {
        Some("quadratic, input too large")
    } else {
        None
    }
}

fn measure(algorithm: Algorithm, input: &[i32], order: Order) -> Outcome {
    let counter = Rc::new(Cell::new(0));
    let mut values = input
        .iter()
        .map(|&value| Counted {
            value,
            comparisons: Rc::clone(&counter),
        })
        .collect::<Vec<_>>();

    let now = Instant::now();
    let sorted = match order {
        Order::Less => {
            algorithm.sort(&mut values);
            Ok(())
        }
        Order::Greater => algorithm.sort_by(&mut values, &Greater),
    };
    let elapsed = now.elapsed();
    let comparisons = counter.get();

    if let Err(err) = sorted {
        return Outcome::Skipped {
            reason: err.to_string(),
        };
    }

    let verified = match order {
        Order::Less => is_sorted_by(&values, &Less),
        Order::Greater => is_sorted_by(&values, &Greater),
    };

    Outcome::Ran {
        nanos: elapsed.as_nanos() as u64,
        millis: elapsed.as_millis() as u64,
        comparisons,
        verified,
    }
}

/// Runs every algorithm of the configured suite on its own copy of one generated input.
pub fn run(config: &BenchConfig) -> anyhow::Result<Report> {
    let input = generate(config.shape, config.size, config.seed);
    let algorithms = config.suite.algorithms();

    let pb = ProgressBar::new(algorithms.len() as u64);
    pb.set_style(ProgressStyle::with_template(
        "Benchmark -> {spinner:.green} [{elapsed_precise}] [{bar:50.cyan/blue}] ({pos}/{len}) {msg}",
    )?);

    let mut rows = Vec::with_capacity(algorithms.len());
    for &algorithm in algorithms {
        pb.set_message(algorithm.name());

        let outcome = match skip_reason(algorithm, config) {
            Some(reason) => Outcome::Skipped {
                reason: reason.to_string(),
            },
            None => measure(algorithm, &input, config.order),
        };

        rows.push(Row {
            algorithm,
            name: algorithm.name(),
            outcome,
        });
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(Report {
        config: config.clone(),
        rows,
    })
}

impl Report {
    /// Prints the report as a table.
    pub fn print_table(&self) {
        let config = &self.config;
        println!(
            "{} {:?} {} numbers, {:?}",
            "Testing ->".bold().underline().blue(),
            config.shape,
            config.size.to_string().bold(),
            config.order,
        );

        let mut table = Table::new();
        table.add_row(row![
            "Sorter".bold(),
            "Comparisons Made".bold(),
            "Run Time".bold(),
            "Verified".bold()
        ]);

        for row in &self.rows {
            match &row.outcome {
                Outcome::Ran {
                    nanos,
                    millis,
                    comparisons,
                    verified,
                } => {
                    let verified = if *verified {
                        "1".green()
                    } else {
                        "0".red().bold()
                    };
                    table.add_row(row![
                        row.name,
                        comparisons.to_string(),
                        format!("{nanos}ns or {millis}ms"),
                        verified
                    ]);
                }
                Outcome::Skipped { reason } => {
                    table.add_row(row![row.name, "Not Doing It".red(), reason, "-"]);
                }
            }
        }

        table.printstd();
        println!();
    }

    /// True when every algorithm that ran produced a correctly ordered result.
    pub fn all_verified(&self) -> bool {
        self.rows.iter().all(|row| match row.outcome {
            Outcome::Ran { verified, .. } => verified,
            Outcome::Skipped { .. } => true,
        })
    }
}
