//! Seriousness scoring for incidents
//!
//! An additive heuristic over the assembled record, not a weighted model.
//! Impact bonuses apply only to scores strictly above the threshold.

use crate::models::incident::SeriousnessScore;

/// Consequence phrase indicating a visible injury (matched case-insensitively)
pub const VISIBLE_INJURY_PHRASE: &str = "visible injury";

/// Impact ratings must exceed this to add a bonus
pub const IMPACT_THRESHOLD: f64 = 7.0;

const BASE_SCORE: u32 = 1;
const VISIBLE_INJURY_BONUS: u32 = 2;
const CLIENT_IMPACT_BONUS: u32 = 2;
const SUPPORTER_IMPACT_BONUS: u32 = 1;

/// The parts of a row that drive its seriousness
///
/// Impact ratings are the clamped, unrounded answers: 7.4 is above the
/// threshold even though the record stores it as 7.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeverityFactors<'a> {
    pub is_suicide_incident: bool,
    pub victim_consequences: &'a str,
    pub client_impact: f64,
    pub supporter_impact: f64,
}

/// Whether the consequence text reports a visible injury
#[must_use]
pub fn has_visible_injury(victim_consequences: &str) -> bool {
    victim_consequences
        .to_lowercase()
        .contains(VISIBLE_INJURY_PHRASE)
}

/// Score an incident on the 1..=5 scale
///
/// Suicide-flagged incidents always score the maximum. Other incidents can
/// still reach it when both the injury and client impact bonuses apply.
#[must_use]
pub fn seriousness_score(factors: &SeverityFactors<'_>) -> SeriousnessScore {
    if factors.is_suicide_incident {
        return SeriousnessScore::MAX;
    }

    let mut score = BASE_SCORE;
    if has_visible_injury(factors.victim_consequences) {
        score += VISIBLE_INJURY_BONUS;
    }
    if factors.client_impact > IMPACT_THRESHOLD {
        score += CLIENT_IMPACT_BONUS;
    }
    if factors.supporter_impact > IMPACT_THRESHOLD {
        score += SUPPORTER_IMPACT_BONUS;
    }

    SeriousnessScore::clamped(score)
}
