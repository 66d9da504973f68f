//! # Introduction
//!
//! Classical comparison sorts over `&mut [T]`, parameterized by an ordering predicate, plus
//! quickselect and a small benchmark harness.
//!
//! # Example
//!
//! ```
//! use orst_sorts::compare::Greater;
//! use orst_sorts::{quick_select, PivotStrategy, QuickSorter, SortBy, Sorter};
//!
//! let mut slice = vec![5, 3, 8, 1, 9, 2];
//! QuickSorter::default().sort(&mut slice);
//! assert_eq!(slice, [1, 2, 3, 5, 8, 9]);
//!
//! QuickSorter { pivot: PivotStrategy::Middle }.sort_by(&mut slice, &Greater);
//! assert_eq!(slice, [9, 8, 5, 3, 2, 1]);
//!
//! let mut slice = [7, 2, 9, 4, 1];
//! assert_eq!(quick_select(&mut slice, 3), Ok(&4));
//! ```

pub mod benchmark;
pub mod compare;
pub mod error;
mod partition;
mod select;
mod sorters;

pub use error::{Error, Result};
pub use partition::PivotStrategy;
pub use select::quick_select;
pub use sorters::heap_sorter::{heap_sort_by, HeapSorter};
pub use sorters::insertion_sorter::{insertion_sort_by, InsertionSorter};
pub use sorters::merge_sorter::{merge_sort_by, MergeSorter};
pub use sorters::quick_sorter::{quick_sort_by, QuickSorter};
pub use sorters::shell_sorter::{shell_sort, ShellSorter};
pub use sorters::three_way_sorter::{three_way_sort, ThreeWaySorter};
pub use sorters::{Algorithm, SortBy, Sorter};

use benchmark::{BenchConfig, InputShape, Order, Suite};
use clap::builder::RangedU64ValueParser;
use clap::{Args, Subcommand, ValueEnum};
use colored::Colorize;

/// Sort, select and benchmark on the command line. Install the `orst` binary and run
/// `orst --help` to see what options are available.
#[derive(Debug, Args)]
#[command(flatten_help = true, subcommand_required = true)]
pub struct SortArgs {
    #[command(subcommand)]
    command: SortCommands,
}

#[derive(Clone, Subcommand, Debug)]
#[command(arg_required_else_help = true)]
enum SortCommands {
    /// Time a suite of sorters on generated input and verify every result.
    Bench {
        /// Shape of the generated input
        #[arg(value_enum)]
        input_type: InputShape,

        /// Number of elements to generate
        #[arg(value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        input_size: usize,

        /// Order to sort in
        #[arg(value_enum)]
        comparison_type: Order,

        /// Algorithms to run
        #[arg(long, value_enum, default_value_t = Suite::All)]
        suite: Suite,

        /// Seed for random input
        #[arg(long)]
        seed: Option<u64>,

        /// How to print the results
        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },

    /// Sort the given numbers with one algorithm.
    Sort {
        #[arg(short, long, value_enum, default_value_t = Algorithm::QuickMedianOfThree)]
        algorithm: Algorithm,

        #[arg(short, long, value_enum, default_value_t = Order::Less)]
        order: Order,

        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Print the k-th smallest of the given numbers.
    Select {
        /// Rank to select, 1 is the minimum
        #[arg(short, long)]
        k: usize,

        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Format {
    /// Human readable table
    Table,

    /// Pretty printed json
    Json,
}

impl SortArgs {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            SortCommands::Bench {
                input_type,
                input_size,
                comparison_type,
                suite,
                seed,
                format,
            } => {
                let report = benchmark::run(&BenchConfig {
                    shape: input_type,
                    size: input_size,
                    order: comparison_type,
                    suite,
                    seed,
                })?;

                match format {
                    Format::Table => report.print_table(),
                    Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                }

                if !report.all_verified() {
                    anyhow::bail!("at least one sorter produced an unordered result");
                }
            }

            SortCommands::Sort {
                algorithm,
                order,
                mut values,
            } => {
                match order {
                    Order::Less => algorithm.sort(&mut values),
                    Order::Greater => algorithm.sort_by(&mut values, &compare::Greater)?,
                }
                println!("{} {}", "==>".green().bold(), join(&values));
            }

            SortCommands::Select { k, mut values } => {
                let kth = quick_select(&mut values, k)?;
                println!("{} {}", "==>".green().bold(), kth.to_string().bold().cyan());
            }
        }
        Ok(())
    }
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
