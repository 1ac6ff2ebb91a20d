//! Progression engine: XP awards, level rollover and rank lookup.
//!
//! # Responsibility
//! - Price a completion in XP from its tier and the current level.
//! - Roll accumulated XP into levels.
//! - Map levels onto display ranks.
//!
//! # Invariants
//! - Award amounts decay geometrically with level but never drop below
//!   `MIN_XP`.
//! - Decayed awards round half-to-even before the floor is applied.
//! - After `apply_award`, `xp` is always within `[0, XP_PER_LEVEL)` and
//!   `level` never decreases.
//!
//! All functions here are pure; persistence is the coordinating
//! service's concern.

use crate::model::task::Tier;

/// XP required to advance one level.
pub const XP_PER_LEVEL: u32 = 100;

/// Lower bound on any single award, whatever the level.
pub const MIN_XP: u32 = 2;

/// Per-level geometric decay applied to base awards.
const LEVEL_DECAY: f64 = 0.8;

/// Display ranks indexed by level. Levels past the end are `MAX_RANK`.
pub const RANKS: [&str; 14] = [
    "Bronze I",
    "Bronze II",
    "Silver I",
    "Silver II",
    "Gold I",
    "Gold II",
    "Platinum I",
    "Platinum II",
    "Diamond I",
    "Diamond II",
    "Ace I",
    "Ace II",
    "GrandMaster I",
    "GrandMaster II",
];

/// Rank shown once the level runs past the end of `RANKS`.
pub const MAX_RANK: &str = "MAX";

/// Result of folding one award into the progression counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AwardOutcome {
    /// XP remaining after rollover, within `[0, XP_PER_LEVEL)`.
    pub xp: u32,
    /// Level after rollover.
    pub level: u32,
    /// Whether at least one level-up occurred.
    pub leveled_up: bool,
}

/// Returns the XP value of completing a `tier` task at `level`.
///
/// The base award shrinks by `LEVEL_DECAY` per level, so high-level
/// completions pay less, and never falls below `MIN_XP`.
pub fn xp_for_completion(tier: Tier, level: u32) -> u32 {
    let base = f64::from(base_xp(tier));
    let raw = base * LEVEL_DECAY.powi(level.min(i32::MAX as u32) as i32);
    round_half_to_even(raw).max(MIN_XP)
}

/// Adds `amount` to `xp`, rolling overflow into `level`.
///
/// A single large award can cross several level boundaries; every full
/// `XP_PER_LEVEL` is converted into one level.
pub fn apply_award(xp: u32, level: u32, amount: u32) -> AwardOutcome {
    let mut xp = xp + amount;
    let mut level = level;
    let mut leveled_up = false;

    while xp >= XP_PER_LEVEL {
        xp -= XP_PER_LEVEL;
        level += 1;
        leveled_up = true;
    }

    AwardOutcome {
        xp,
        level,
        leveled_up,
    }
}

/// Returns the display rank for `level`.
pub fn rank_for_level(level: u32) -> &'static str {
    RANKS
        .get(level as usize)
        .copied()
        .unwrap_or(MAX_RANK)
}

fn base_xp(tier: Tier) -> u32 {
    match tier {
        Tier::Easy => 6,
        Tier::Medium => 8,
        Tier::Hard => 10,
    }
}

/// Rounds to the nearest integer, ties to the even neighbor.
///
/// `f64::round` rounds ties away from zero; award pricing is pinned to
/// half-to-even instead, so the tie-break is spelled out here.
fn round_half_to_even(value: f64) -> u32 {
    let floor = value.floor();
    let fraction = value - floor;
    let below = floor as u32;

    if fraction > 0.5 {
        below + 1
    } else if fraction < 0.5 {
        below
    } else if below % 2 == 0 {
        below
    } else {
        below + 1
    }
}
