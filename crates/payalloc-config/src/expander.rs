//! Due-state expansion of a base allocation order.
//!
//! Callers configure a single base ordering over allocation components
//! (`PENALTY`, `PRINCIPAL`, ...). The expander turns it into a due-state
//! qualified ordering: every base entry for `PAST_DUE`, then every base entry
//! for `DUE`, then every base entry for `IN_ADVANCE`.
//!
//! ```text
//! base:     1:PENALTY 2:PRINCIPAL
//! expanded: 1:PAST_DUE_PENALTY 2:PAST_DUE_PRINCIPAL 3:DUE_PENALTY
//!           4:DUE_PRINCIPAL 5:IN_ADVANCE_PENALTY 6:IN_ADVANCE_PRINCIPAL
//! ```
//!
//! Horizontal and vertical processing currently expand identically.

use std::collections::HashSet;

use tracing::{debug, warn};

use payalloc_core::types::{DueType, LoanScheduleProcessingType, Resolution};

use crate::request::{AllocationOrderEntry, PaymentAllocationRequest};

/// Result of expanding one base ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionReport {
    /// Topology the expansion was requested for.
    pub processing_type: Resolution<LoanScheduleProcessingType>,
    /// Base ordering as supplied, with the caller's `order` values.
    pub base: Vec<AllocationOrderEntry>,
    /// Every emitted slot before duplicate suppression, numbered `1..=3N`.
    pub raw: Vec<AllocationOrderEntry>,
    /// Surviving entries, renumbered contiguously from 1.
    pub entries: Vec<AllocationOrderEntry>,
}

impl ExpansionReport {
    /// Returns true if the ordering was expanded (false on passthrough).
    pub fn is_expanded(&self) -> bool {
        self.processing_type.is_found()
    }

    /// Names dropped because an identical name had already been emitted.
    ///
    /// Always empty on passthrough, where nothing is dropped.
    pub fn suppressed(&self) -> Vec<&str> {
        if !self.is_expanded() {
            return Vec::new();
        }
        let mut seen = HashSet::new();
        self.raw
            .iter()
            .filter(|entry| !seen.insert(entry.payment_allocation_rule.as_str()))
            .map(|entry| entry.payment_allocation_rule.as_str())
            .collect()
    }
}

/// Emits every due-state qualified slot for a base ordering, without
/// suppressing duplicates.
///
/// The base is walked in ascending `order` (stable for ties) once per
/// due-state, in macro order. The running index starts at 1 and advances for
/// every slot, so each due-state occupies a contiguous block of `base.len()`
/// positions.
pub fn expand_slots(base: &[AllocationOrderEntry]) -> Vec<AllocationOrderEntry> {
    let mut sorted: Vec<&AllocationOrderEntry> = base.iter().collect();
    sorted.sort_by_key(|entry| entry.order);

    let mut running_index = 0i64;
    DueType::ALL
        .iter()
        .flat_map(|due| {
            sorted
                .iter()
                .map(move |entry| due.qualify(&entry.payment_allocation_rule))
        })
        .map(|name| {
            running_index += 1;
            AllocationOrderEntry::new(running_index, name)
        })
        .collect()
}

/// Drops repeated names (first occurrence wins) and renumbers the survivors
/// `1..=M` so the result carries no gaps.
pub fn suppress_duplicates(slots: &[AllocationOrderEntry]) -> Vec<AllocationOrderEntry> {
    let mut seen = HashSet::new();
    slots
        .iter()
        .filter(|entry| seen.insert(entry.payment_allocation_rule.as_str()))
        .zip(1i64..)
        .map(|(entry, order)| AllocationOrderEntry::new(order, entry.payment_allocation_rule.clone()))
        .collect()
}

/// Expands base allocation orders into due-state qualified orders.
///
/// Only the first element of a `paymentAllocation` array is read as the base
/// ordering; later elements are left untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleExpander;

impl RuleExpander {
    /// Creates a new expander.
    pub fn new() -> Self {
        Self
    }

    /// Expands a base ordering for the given topology.
    ///
    /// An empty base yields an empty expansion. An unrecognized topology is
    /// a passthrough: the base ordering is returned unchanged.
    pub fn expand(
        &self,
        base: &[AllocationOrderEntry],
        processing_type: &Resolution<LoanScheduleProcessingType>,
    ) -> ExpansionReport {
        match processing_type {
            Resolution::Found(
                LoanScheduleProcessingType::Horizontal | LoanScheduleProcessingType::Vertical,
            ) => {
                let raw = expand_slots(base);
                let entries = suppress_duplicates(&raw);
                debug!(
                    processing_type = %processing_type,
                    base = base.len(),
                    raw = raw.len(),
                    emitted = entries.len(),
                    "Expanded payment allocation order"
                );
                ExpansionReport {
                    processing_type: processing_type.clone(),
                    base: base.to_vec(),
                    raw,
                    entries,
                }
            }
            Resolution::NotFound(name) => {
                warn!(
                    processing_type = %name,
                    "Unrecognized schedule processing type, allocation order passed through unexpanded"
                );
                ExpansionReport {
                    processing_type: processing_type.clone(),
                    base: base.to_vec(),
                    raw: base.to_vec(),
                    entries: base.to_vec(),
                }
            }
        }
    }

    /// Expands the first element's base ordering in place.
    ///
    /// Returns `None` when there is no element to expand.
    pub fn expand_requests(
        &self,
        requests: &mut [PaymentAllocationRequest],
        processing_type: &Resolution<LoanScheduleProcessingType>,
    ) -> Option<ExpansionReport> {
        let first = requests.first_mut()?;
        let report = self.expand(&first.payment_allocation_order, processing_type);
        first
            .payment_allocation_order
            .clone_from(&report.entries);
        Some(report)
    }
}
