//! Per-category error counters.
//!
//! Enabled with `feature = "metrics"`. Every constructed error costs one
//! `AtomicU64::fetch_add(1, Relaxed)` on the counter of its [`ErrorType`].
//!
//! ```text
//! ErrorType::new(..) / wrap(..) / From<io::Error>
//!       │
//!       ▼  index = error_type.code()
//! COUNTERS[index].fetch_add(1, Relaxed)
//!       │
//!       ▼  scrape
//! dump() / dump_string() / dump_prometheus()
//! ```
//!
//! Codes at or above [`MAX_TYPES`] are not counted.

use core::sync::atomic::{AtomicU64, Ordering};

use crate::ErrorType;

/// Number of counted codes. Covers the registered set plus application codes
/// below 256.
pub const MAX_TYPES: usize = 256;

static COUNTERS: [AtomicU64; MAX_TYPES] = {
    const ZERO: AtomicU64 = AtomicU64::new(0);
    [ZERO; MAX_TYPES]
};

#[inline]
fn slot(t: ErrorType) -> Option<&'static AtomicU64> {
    COUNTERS.get(t.code() as usize)
}

/// Increment the counter for `t`. Returns the previous count.
#[inline(always)]
pub fn bump(t: ErrorType) -> u64 {
    slot(t).map_or(0, |c| c.fetch_add(1, Ordering::Relaxed))
}

#[inline]
pub fn count(t: ErrorType) -> u64 {
    slot(t).map_or(0, |c| c.load(Ordering::Relaxed))
}

/// Reset the counter for `t`. Returns the old value.
#[inline]
pub fn reset(t: ErrorType) -> u64 {
    slot(t).map_or(0, |c| c.swap(0, Ordering::Relaxed))
}

pub fn reset_all() {
    for counter in COUNTERS.iter() {
        counter.store(0, Ordering::Relaxed);
    }
}

// ── Dump ──────────────────────────────────────────────────────────

/// Counter value of one category at dump time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSnapshot {
    pub error_type: ErrorType,
    pub count: u64,
}

/// All non-zero counters, in code order.
pub fn dump() -> Vec<TypeSnapshot> {
    COUNTERS
        .iter()
        .enumerate()
        .filter_map(|(idx, c)| {
            let count = c.load(Ordering::Relaxed);
            (count > 0).then(|| TypeSnapshot {
                error_type: ErrorType::from_code(idx as u32),
                count,
            })
        })
        .collect()
}

/// Human-readable table of non-zero counters.
pub fn dump_string() -> String {
    let mut out = String::new();
    for snap in dump() {
        out.push_str(&format!(
            "[{:>3}] count={:<10} type={:<14} desc={}\n",
            snap.error_type.code(),
            snap.count,
            snap.error_type.name(),
            snap.error_type.description(),
        ));
    }
    out
}

/// Counters in OpenMetrics/Prometheus exposition format.
pub fn dump_prometheus() -> String {
    let mut out = String::from(
        "# HELP cerror_total Errors constructed per category\n\
         # TYPE cerror_total counter\n",
    );
    for snap in dump() {
        out.push_str(&format!(
            "cerror_total{{type=\"{}\",code=\"{}\"}} {}\n",
            snap.error_type.name(),
            snap.error_type.code(),
            snap.count
        ));
    }
    out
}
