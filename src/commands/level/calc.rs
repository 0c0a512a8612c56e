//! Pure XP math for the level calculator.
//!
//! Gacha-style quadratic curve: reaching level `n` from `n-1` costs
//! `BASE + STEP * (n - 1)` XP.

const BASE_XP: i64 = 100;
const STEP_XP: i64 = 50;

/// Average XP granted per chat message and per hunt/battle command.
pub const XP_PER_MESSAGE: i64 = 20;
pub const XP_PER_HUNT: i64 = 150;

/// XP needed to go from `level` to `level + 1`.
pub fn xp_for_next(level: i64) -> i64 {
    BASE_XP + STEP_XP * level.max(0)
}

/// Total XP still required to reach `target` from `current` with `xp` already
/// banked toward the next level. Zero when the target is not ahead.
pub fn xp_to_target(current: i64, xp: i64, target: i64) -> i64 {
    if target <= current {
        return 0;
    }
    let total: i64 = (current..target).map(xp_for_next).sum();
    (total - xp.max(0)).max(0)
}

/// Grind estimate in (messages, hunts) for a remaining XP amount, each as if
/// it were the only activity.
pub fn grind_estimate(remaining_xp: i64) -> (i64, i64) {
    (
        remaining_xp.div_ceil(XP_PER_MESSAGE),
        remaining_xp.div_ceil(XP_PER_HUNT),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_level_costs_grow_linearly() {
        assert_eq!(xp_for_next(0), 100);
        assert_eq!(xp_for_next(1), 150);
        assert_eq!(xp_for_next(10), 600);
    }

    #[test]
    fn target_behind_or_equal_is_free() {
        assert_eq!(xp_to_target(10, 0, 10), 0);
        assert_eq!(xp_to_target(10, 0, 5), 0);
    }

    #[test]
    fn banked_xp_is_subtracted() {
        let full = xp_to_target(3, 0, 5);
        assert_eq!(xp_to_target(3, 120, 5), full - 120);
        // Banked XP past the requirement never goes negative.
        assert_eq!(xp_to_target(3, 1_000_000, 4), 0);
    }

    #[test]
    fn grind_estimates_round_up() {
        let (messages, hunts) = grind_estimate(101);
        assert_eq!(messages, 6);
        assert_eq!(hunts, 1);
    }
}
