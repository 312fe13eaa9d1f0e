//! Simulation driver.
//!
//! Ties the pipeline together: validate parameters, select index bits from the trace's
//! distinct addresses, replay the full trace and assemble the [`Report`].

/// Parameter and trace parsing.
pub mod loader;

/// Cache replay over a trace.
pub mod simulator;

pub use simulator::{Outcome, Simulator};

use tracing::info;

use crate::common::{Error, Result};
use crate::config::CacheParams;
use crate::report::Report;
use crate::select::select_index_bits;
use crate::trace::Trace;

/// Runs index-bit selection and LRU simulation for `trace`.
///
/// # Errors
///
/// Any parameter validation error, [`Error::AddressWidth`] if the trace was built for a
/// different address width, and any selection or simulation error.
pub fn run(params: &CacheParams, trace: &Trace) -> Result<Report> {
    let geometry = params.validate()?;
    if let Some(addr) = trace
        .references()
        .iter()
        .find(|addr| addr.width() != geometry.address_bits)
    {
        return Err(Error::AddressWidth {
            address: addr.to_string(),
            expected: geometry.address_bits,
            actual: addr.width(),
        });
    }

    let distinct = trace.distinct();
    let index_bits = select_index_bits(&distinct, &geometry)?;
    let lsb_offsets = index_bits.lsb_offsets(geometry.address_bits);

    let mut sim = Simulator::new(geometry, index_bits)?;
    let outcomes = sim.run(trace)?;
    let mut stats = sim.into_stats();
    stats.distinct_addresses = distinct.len() as u64;

    info!(
        benchmark = trace.benchmark(),
        references = stats.references,
        misses = stats.misses,
        index_bits = ?lsb_offsets,
        "simulation finished"
    );

    Ok(Report {
        params: *params,
        index_bit_count: geometry.index_bits,
        index_bits: lsb_offsets,
        offset_bit_count: geometry.offset_bits,
        benchmark: trace.benchmark().to_owned(),
        outcomes,
        miss_count: stats.misses,
        stats,
    })
}
