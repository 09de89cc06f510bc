//! The five deterministic propagation tiers and their escalation schedule.
//!
//! Each tier is a safe, monotone deduction rule: it only ever adds
//! exclusions (tier 1's replace grows a set wholesale) and never guesses.
//! Which tiers run on a given pass is a function of the stall counter
//! alone: tier *t* runs when `stall == t`, and every tier runs on the
//! catch-all pass at [`STALL_LIMIT`](crate::STALL_LIMIT) before the driver
//! gives up. Stall values 5 through 11 activate no deterministic tier;
//! those passes belong to hypothesis search.

use std::fmt::Debug;

use crate::{STALL_LIMIT, SolverState};

pub use self::{
    basic_elimination::BasicElimination, hidden_single::HiddenSingle, hidden_subset::HiddenSubset,
    locked_candidate::LockedCandidate, naked_subset::NakedSubset,
};

mod basic_elimination;
mod hidden_single;
mod hidden_subset;
mod locked_candidate;
mod naked_subset;

/// A deterministic deduction rule.
///
/// Tiers mutate the state only by adding exclusions; `apply` returns
/// `true` if at least one new exclusion was proven.
pub trait Tier: Debug + Sync {
    /// Returns the name of the tier.
    fn name(&self) -> &'static str;

    /// Applies the tier to the state.
    ///
    /// Returns `true` if the state gained at least one new exclusion.
    fn apply(&self, state: &mut SolverState) -> bool;
}

/// All five tiers in escalation order (tier 0 first).
pub static ALL_TIERS: [&'static dyn Tier; 5] = [
    &BasicElimination,
    &HiddenSingle,
    &LockedCandidate,
    &HiddenSubset,
    &NakedSubset,
];

/// Returns the tiers active for a stall-counter value.
///
/// The schedule is exact and load-bearing: difficulty classification and
/// solve order are defined by it. Tier `t` alone for `stall == t`, all
/// tiers for the catch-all sweep at `stall == STALL_LIMIT`, and nothing
/// in between.
#[must_use]
pub fn active_tiers(stall: u8) -> &'static [&'static dyn Tier] {
    match usize::from(stall) {
        t if t < ALL_TIERS.len() => &ALL_TIERS[t..=t],
        t if t == usize::from(STALL_LIMIT) => &ALL_TIERS,
        _ => &[],
    }
}
