//! Comparative timing of the ordered sets in this crate on seeded random workloads.
//!
//! For every input size the harness draws one batch of keys, then builds each selected structure
//! from scratch and times three phases over that batch: inserting every key, searching for every
//! key and erasing every key. Keys may repeat within a batch; repeated inserts and erases are
//! no-ops for every structure.
//!
//! # Examples
//!
//! ```
//! use bst_collections::harness::{self, HarnessConfig, Structure};
//!
//! let config = HarnessConfig {
//!     sizes: vec![100],
//!     structures: vec![Structure::Avl, Structure::Splay],
//!     ..HarnessConfig::default()
//! };
//! let measurements = harness::run(&config).unwrap();
//! assert_eq!(measurements.len(), 6);
//! ```

mod config;
mod error;
mod keys;
mod report;

pub use self::config::{HarnessConfig, ReportFormat, Structure};
pub use self::error::HarnessError;
pub use self::keys::KeyGenerator;
pub use self::report::{write_report, CSV_HEADER};

use crate::avl_tree::AvlTree;
use crate::red_black_tree::RedBlackTree;
use crate::splay_tree::SplayTree;
use crate::OrderedSet;
use std::collections::BTreeSet;
use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// A timed phase of a benchmark round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Insert,
    Search,
    Erase,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Insert, Operation::Search, Operation::Erase];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Insert => "insert",
            Operation::Search => "search",
            Operation::Erase => "erase",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The mean time of one phase for one structure at one input size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub size: usize,
    pub structure: Structure,
    pub operation: Operation,
    pub micros: f64,
}

/// Runs every selected structure over every input size and returns the measurements in the order
/// they were taken.
pub fn run(config: &HarnessConfig) -> Result<Vec<Measurement>, HarnessError> {
    config.validate()?;

    let mut generator = KeyGenerator::new(config.seed, config.min_key, config.max_key)?;
    let mut measurements = Vec::with_capacity(config.sizes.len() * config.structures.len() * 3);

    for &size in &config.sizes {
        let keys: Vec<i32> = generator.by_ref().take(size).collect();
        info!("Benchmarking {} structures with N = {}.", config.structures.len(), size);

        for &structure in &config.structures {
            let timings = match structure {
                Structure::BTreeSet => measure::<BTreeSet<i32>>(&keys, config.iterations),
                Structure::Avl => measure::<AvlTree<i32>>(&keys, config.iterations),
                Structure::Splay => measure::<SplayTree<i32>>(&keys, config.iterations),
                Structure::RedBlack => measure::<RedBlackTree<i32>>(&keys, config.iterations),
            };

            for (operation, micros) in Operation::ALL.iter().zip(timings.iter()) {
                info!("{} {} with N = {}: {:.1} us.", structure, operation, size, micros);
                measurements.push(Measurement {
                    size,
                    structure,
                    operation: *operation,
                    micros: *micros,
                });
            }
        }
    }

    Ok(measurements)
}

/// Returns the mean insert, search and erase times in microseconds of `S` over `keys`.
fn measure<S>(keys: &[i32], iterations: u32) -> [f64; 3]
where
    S: OrderedSet<i32> + Default,
{
    let mut totals = [Duration::default(); 3];

    for iteration in 0..iterations {
        let mut set = S::default();

        let start = Instant::now();
        for &key in keys {
            set.insert(key);
        }
        totals[0] += start.elapsed();

        let start = Instant::now();
        let mut found = 0;
        for key in keys {
            if set.find(key) {
                found += 1;
            }
        }
        black_box(found);
        totals[1] += start.elapsed();

        let start = Instant::now();
        for key in keys {
            set.remove(key);
        }
        totals[2] += start.elapsed();

        debug!(
            "{} iteration {}: {} keys found, {} left after erase.",
            S::NAME,
            iteration,
            found,
            set.len(),
        );
    }

    let mut ret = [0.0; 3];
    for (mean, total) in ret.iter_mut().zip(totals.iter()) {
        *mean = total.as_secs_f64() * 1e6 / f64::from(iterations);
    }
    ret
}

#[cfg(test)]
mod tests {
    use super::{measure, run, HarnessConfig, Operation, Structure};
    use crate::avl_tree::AvlTree;

    #[test]
    fn test_measure_is_non_negative() {
        let keys: Vec<i32> = (0..100).rev().collect();
        let timings = measure::<AvlTree<i32>>(&keys, 3);
        assert!(timings.iter().all(|micros| *micros >= 0.0));
    }

    #[test]
    fn test_run_order() {
        let config = HarnessConfig {
            sizes: vec![10, 20],
            structures: vec![Structure::RedBlack, Structure::BTreeSet],
            ..HarnessConfig::default()
        };
        let measurements = run(&config).unwrap();
        let rows: Vec<(usize, Structure, Operation)> = measurements
            .iter()
            .map(|m| (m.size, m.structure, m.operation))
            .collect();

        let mut expected = Vec::new();
        for &size in &[10, 20] {
            for &structure in &[Structure::RedBlack, Structure::BTreeSet] {
                for &operation in &Operation::ALL {
                    expected.push((size, structure, operation));
                }
            }
        }
        assert_eq!(rows, expected);
    }

    #[test]
    fn test_run_rejects_invalid_config() {
        let config = HarnessConfig {
            iterations: 0,
            ..HarnessConfig::default()
        };
        assert!(run(&config).is_err());
    }
}
