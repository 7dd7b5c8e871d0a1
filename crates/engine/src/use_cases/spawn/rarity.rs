//! Rarity policy - turns one random draw into a tier and element instruction.

use std::sync::Arc;

use monsterforge_domain::{ElementInstruction, RarityTier};

use crate::infrastructure::ports::RandomPort;

/// Draws the rarity roll from an injected random source.
///
/// Holds no state of its own, so one instance serves concurrent requests.
pub struct RarityPolicy {
    random: Arc<dyn RandomPort>,
}

impl RarityPolicy {
    pub fn new(random: Arc<dyn RandomPort>) -> Self {
        Self { random }
    }

    /// Roll once and pick the tier plus the element directive for the prompt.
    pub fn select_tier(&self, eligible_for_custom: bool) -> (RarityTier, ElementInstruction) {
        let roll = self.random.roll_unit();
        let tier = RarityTier::from_roll(roll, eligible_for_custom);
        tracing::debug!(
            roll = roll,
            eligible_for_custom = eligible_for_custom,
            tier = %tier,
            "Selected rarity tier"
        );
        (tier, tier.element_instruction())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockRandomPort;
    use crate::infrastructure::random::FixedRandom;
    use monsterforge_domain::{RARE_ELEMENTS, STANDARD_ELEMENTS};

    fn policy(roll: f64) -> RarityPolicy {
        RarityPolicy::new(Arc::new(FixedRandom(roll)))
    }

    #[test]
    fn low_roll_with_eligibility_invents_element() {
        let (tier, instruction) = policy(0.03).select_tier(true);
        assert_eq!(tier, RarityTier::UniqueCustom);
        assert_eq!(instruction, ElementInstruction::Invent);
    }

    #[test]
    fn low_roll_without_eligibility_is_rare() {
        let (tier, instruction) = policy(0.03).select_tier(false);
        assert_eq!(tier, RarityTier::Rare);
        assert_eq!(instruction.allowed_elements(), Some(&RARE_ELEMENTS[..]));
    }

    #[test]
    fn high_roll_is_standard() {
        let (tier, instruction) = policy(0.5).select_tier(true);
        assert_eq!(tier, RarityTier::Standard);
        assert_eq!(instruction.allowed_elements(), Some(&STANDARD_ELEMENTS[..]));
    }

    #[test]
    fn draws_exactly_one_roll_per_selection() {
        let mut random = MockRandomPort::new();
        random.expect_roll_unit().times(1).return_const(0.1);
        let policy = RarityPolicy::new(Arc::new(random));

        let (tier, _) = policy.select_tier(true);
        assert_eq!(tier, RarityTier::Rare);
    }
}
