//! Demo driver: sort one random data set with each selected method
//!
//! Every method gets its own copy of the same unsorted input. The report lists
//! the comparison count per method and flags any result that fails
//! [`verify_sort`].

use crate::config::DemoConfig;
use crate::error::{SortContext, SortResult};
use crate::instrument::ComparisonCounter;
use crate::method::SortMethod;
use crate::mwc::Mwc;
use crate::verify::verify_sort;
use itertools::Itertools;
use rand::SeedableRng;
use std::io::Write;

/// Outcome of running one method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodReport {
    pub method: SortMethod,
    /// Comparisons made (key evaluations for radix sort)
    pub comparisons: u64,
    pub verified: bool,
}

/// Outcome of a whole demo run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub seed: u64,
    pub num_items: usize,
    pub reports: Vec<MethodReport>,
}

impl RunSummary {
    pub fn all_verified(&self) -> bool {
        self.reports.iter().all(|report| report.verified)
    }
}

pub struct SortRunner {
    config: DemoConfig,
}

impl SortRunner {
    pub fn new(config: DemoConfig) -> Self {
        Self { config }
    }

    /// Generate `count` random integers from `seed`
    pub fn generate(seed: u64, count: usize) -> Vec<i64> {
        let mut rng = Mwc::seed_from_u64(seed);
        (0..count).map(|_| rng.next_i64()).collect()
    }

    /// Run every selected method and write the report to `out`
    pub fn run<W: Write>(&self, out: &mut W) -> SortResult<RunSummary> {
        let seed = self.config.seed.unwrap_or_else(rand::random);
        let num_items = self.config.num_items;
        log::info!("sorting {} items generated from seed {}", num_items, seed);

        let unsorted = Self::generate(seed, num_items);
        if self.config.debug {
            writeln!(out, "Unsorted list:").with_context(|| "writing report".to_string())?;
            Self::dump_list(out, &unsorted)?;
        }

        let mut reports = Vec::with_capacity(self.config.methods.len());
        for method in self.config.run_order() {
            let report = self.run_method(method, &unsorted, out)?;
            reports.push(report);
        }

        Ok(RunSummary {
            seed,
            num_items,
            reports,
        })
    }

    fn run_method<W: Write>(
        &self,
        method: SortMethod,
        unsorted: &[i64],
        out: &mut W,
    ) -> SortResult<MethodReport> {
        let mut list = unsorted.to_vec();
        let mut counter = ComparisonCounter::new();
        method.sort_i64(&mut list, &mut counter)?;

        let verified = verify_sort(&list, i64::cmp);
        log::debug!(
            "{} sort: {} comparisons, verified={}",
            method,
            counter.count(),
            verified
        );

        let context = || format!("writing {method} sort report");
        writeln!(out, "{} sort:", capitalize(method.name())).with_context(context)?;
        if self.config.debug {
            writeln!(out, "Sorted list:").with_context(context)?;
            Self::dump_list(out, &list)?;
        }
        writeln!(
            out,
            "Number of comparisons to sort {} Items: {}",
            list.len(),
            counter.count()
        )
        .with_context(context)?;
        if !verified {
            log::warn!("{} sort produced an unsorted result", method);
            writeln!(out, "ERROR: Sort results are incorrect.").with_context(context)?;
        }

        Ok(MethodReport {
            method,
            comparisons: counter.count(),
            verified,
        })
    }

    /// Print a list as space separated 16-digit hex values
    pub fn dump_list<W: Write>(out: &mut W, list: &[i64]) -> SortResult<()> {
        let line = list.iter().map(|value| format!("{value:016X}")).join(" ");
        writeln!(out, "{line}").with_context(|| "dumping list".to_string())
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
