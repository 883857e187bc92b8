//! The risk engine: turns a sector name into a scored recommendation.
//!
//! score = clamp(round1(base_risk * multiplier), 1.0, 10.0)
//!
//! Tiers are checked in order on the clamped score:
//!   <= 3.0  PROCEED
//!   <= 5.0  PROCEED WITH CAUTION
//!   <= 7.0  DELAY
//!   else    AVOID

use crate::{rng::StressSource, sector::SectorTable};

pub const SCORE_MIN: f64 = 1.0;
pub const SCORE_MAX: f64 = 10.0;

/// Separator between the action word and the rest of a recommendation.
pub const ACTION_SEPARATOR: &str = " - ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Proceed,
    ProceedWithCaution,
    Delay,
    Avoid,
}

impl Tier {
    pub fn from_score(score: f64) -> Self {
        if score <= 3.0 {
            Self::Proceed
        } else if score <= 5.0 {
            Self::ProceedWithCaution
        } else if score <= 7.0 {
            Self::Delay
        } else {
            Self::Avoid
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Proceed            => "PROCEED - Excellent Timing",
            Self::ProceedWithCaution => "PROCEED WITH CAUTION - Moderate Risk",
            Self::Delay              => "DELAY - High Risk Period",
            Self::Avoid              => "AVOID - Extreme Risk",
        }
    }

    pub fn action(&self) -> &'static str {
        action_word(self.label())
    }

    pub fn impact(&self, sector: &str) -> String {
        match self {
            Self::Proceed => format!(
                "Low risk environment. Optimal for major business decisions in {sector}."
            ),
            Self::ProceedWithCaution => format!(
                "Moderate risk in {sector}. Consider 20% contingency planning."
            ),
            Self::Delay => format!(
                "High volatility in {sector}. Consider delaying major decisions 60-90 days."
            ),
            Self::Avoid => format!(
                "Extreme risk in {sector}. High probability of unfavorable outcomes."
            ),
        }
    }
}

/// The part of a recommendation before " - ", e.g. "DELAY".
pub fn action_word(recommendation: &str) -> &str {
    recommendation
        .split_once(ACTION_SEPARATOR)
        .map_or(recommendation, |(action, _)| action)
}

pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct RiskAssessment {
    pub risk_score:      f64,
    pub tier:            Tier,
    pub business_impact: String,
}

impl RiskAssessment {
    pub fn recommendation(&self) -> &'static str {
        self.tier.label()
    }
}

pub struct RiskEngine {
    table: SectorTable,
}

impl RiskEngine {
    pub fn new(table: SectorTable) -> Self {
        Self { table }
    }

    pub fn standard() -> Self {
        Self::new(SectorTable::standard())
    }

    pub fn table(&self) -> &SectorTable {
        &self.table
    }

    /// Score one sector with a single draw from `stress`.
    /// Total over every input: unknown sectors use the default profile.
    pub fn evaluate(&self, sector: &str, stress: &mut dyn StressSource) -> RiskAssessment {
        let profile = self.table.lookup(sector);
        let multiplier = stress.next_multiplier();
        // The upper clamp only bites if the multiplier range widens.
        let risk_score = round_to_tenth(profile.base_risk * multiplier).clamp(SCORE_MIN, SCORE_MAX);
        let tier = Tier::from_score(risk_score);

        log::debug!(
            "evaluate sector={sector:?} base={:.1} mult={multiplier:.4} score={risk_score:.1} tier={tier:?}",
            profile.base_risk
        );

        RiskAssessment {
            risk_score,
            tier,
            business_impact: tier.impact(sector),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::FixedStress;

    #[test]
    fn tier_boundaries_are_inclusive() {
        assert_eq!(Tier::from_score(1.0), Tier::Proceed);
        assert_eq!(Tier::from_score(3.0), Tier::Proceed);
        assert_eq!(Tier::from_score(3.1), Tier::ProceedWithCaution);
        assert_eq!(Tier::from_score(5.0), Tier::ProceedWithCaution);
        assert_eq!(Tier::from_score(5.1), Tier::Delay);
        assert_eq!(Tier::from_score(7.0), Tier::Delay);
        assert_eq!(Tier::from_score(7.1), Tier::Avoid);
        assert_eq!(Tier::from_score(10.0), Tier::Avoid);
    }

    #[test]
    fn action_words() {
        assert_eq!(Tier::Proceed.action(), "PROCEED");
        assert_eq!(Tier::ProceedWithCaution.action(), "PROCEED WITH CAUTION");
        assert_eq!(Tier::Delay.action(), "DELAY");
        assert_eq!(Tier::Avoid.action(), "AVOID");
        assert_eq!(action_word("HOLD"), "HOLD");
    }

    #[test]
    fn impact_keeps_caller_spelling() {
        let engine = RiskEngine::standard();
        let a = engine.evaluate("BaNkInG", &mut FixedStress(1.0));
        assert_eq!(
            a.business_impact,
            "High volatility in BaNkInG. Consider delaying major decisions 60-90 days."
        );
    }

    #[test]
    fn lower_clamp_applies() {
        let engine = RiskEngine::standard();
        let a = engine.evaluate("fmcg", &mut FixedStress(0.1));
        assert_eq!(a.risk_score, 1.0);
        assert_eq!(a.tier, Tier::Proceed);
    }

    #[test]
    fn rounds_to_one_decimal() {
        assert_eq!(round_to_tenth(7.2 * 1.1), 7.9);
        assert_eq!(round_to_tenth(3.1 * 0.8), 2.5);
    }
}
