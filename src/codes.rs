use tracing::info;

use crate::config::GachaConfig;
use crate::error::{GachaError, Result};
use crate::state::PlayerState;

/// What a successful code redemption granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeRedemption {
    pub bonus_spins: u32,
    /// Times this code has now been redeemed, this one included.
    pub times_redeemed: u32,
}

/// Redeem a reward code for bonus spins. Codes are repeatable.
///
/// Surrounding whitespace is ignored; the rest must match exactly.
///
/// # Errors
/// [`GachaError::InvalidCode`] for anything unrecognized, with `state` untouched.
pub fn redeem_code(
    config: &GachaConfig,
    state: &mut PlayerState,
    code: &str,
) -> Result<CodeRedemption> {
    let code = code.trim();
    let reward = config.reward_code(code).ok_or(GachaError::InvalidCode)?;

    state.spins_remaining = state.spins_remaining.saturating_add(reward.bonus_spins);
    let count = state.redeemed_codes.entry(reward.code.clone()).or_insert(0);
    *count += 1;

    info!(bonus = reward.bonus_spins, times = *count, "reward code redeemed");
    Ok(CodeRedemption {
        bonus_spins: reward.bonus_spins,
        times_redeemed: *count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_grants_spins_and_counts() {
        let config = GachaConfig::default();
        let mut state = PlayerState::default();
        let first = redeem_code(&config, &mut state, "主任真帅").unwrap();
        assert_eq!(first.times_redeemed, 1);
        assert_eq!(state.spins_remaining, 160);
        assert_eq!(state.redeemed_codes["主任真帅"], 1);

        let second = redeem_code(&config, &mut state, "  主任真帅\n").unwrap();
        assert_eq!(second.times_redeemed, 2);
        assert_eq!(state.spins_remaining, 260);
    }

    #[test]
    fn unknown_code_changes_nothing() {
        let config = GachaConfig::default();
        let mut state = PlayerState::default();
        let before = state.clone();
        for code in ["", "主任", "主任真帅!", "ZHUREN"] {
            assert!(matches!(
                redeem_code(&config, &mut state, code),
                Err(GachaError::InvalidCode)
            ));
        }
        assert_eq!(state, before);
    }
}
