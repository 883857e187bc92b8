//! Sector analysis report: one assessment per canonical sector.

use crate::{
    clock::{format_date, Clock},
    engine::RiskEngine,
    error::DemoResult,
    rng::StressSource,
};
use serde::Serialize;

pub const MARKET_OVERVIEW: &str = "Demonstration of volatility assessment methodology";

/// Scores at or below this earn an "expand now" insight.
pub const EXPANSION_INSIGHT_MAX: f64 = 3.5;
/// Scores at or above this earn a "play defensive" insight.
pub const DEFENSIVE_INSIGHT_MIN: f64 = 7.0;

#[derive(Debug, Clone, Serialize)]
pub struct SectorAnalysis {
    pub sector:          String,
    pub risk_score:      f64,
    pub recommendation:  String,
    pub business_impact: String,
    pub key_factors:     Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectorReport {
    pub analysis_date:         String,
    pub market_overview:       String,
    /// Canonical sector order.
    pub sectors:               Vec<SectorAnalysis>,
    pub business_intelligence: Vec<String>,
}

impl SectorReport {
    pub fn sector(&self, name: &str) -> Option<&SectorAnalysis> {
        self.sectors.iter().find(|s| s.sector == name)
    }

    pub fn to_json(&self) -> DemoResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Evaluate every canonical sector once and collect insights.
pub fn build_sector_report(
    engine: &RiskEngine,
    clock:  &dyn Clock,
    stress: &mut dyn StressSource,
) -> SectorReport {
    let mut sectors = Vec::with_capacity(engine.table().len());
    let mut insights = Vec::new();

    for (name, profile) in engine.table().iter() {
        let assessment = engine.evaluate(name, stress);

        if let Some(insight) = insight_for(name, assessment.risk_score) {
            insights.push(insight);
        }

        sectors.push(SectorAnalysis {
            sector:          name.to_string(),
            risk_score:      assessment.risk_score,
            recommendation:  assessment.recommendation().to_string(),
            business_impact: assessment.business_impact,
            key_factors:     profile.factors.clone(),
        });
    }

    let analysis_date = format_date(clock.today());
    log::info!(
        "sector report {analysis_date}: {} sectors, {} insights",
        sectors.len(),
        insights.len()
    );

    SectorReport {
        analysis_date,
        market_overview: MARKET_OVERVIEW.to_string(),
        sectors,
        business_intelligence: insights,
    }
}

/// Insight line for a sector score, if the score is extreme enough.
pub fn insight_for(sector: &str, risk_score: f64) -> Option<String> {
    if risk_score <= EXPANSION_INSIGHT_MAX {
        Some(format!(
            "{}: Optimal timing for expansion or major investments",
            title_case(sector)
        ))
    } else if risk_score >= DEFENSIVE_INSIGHT_MIN {
        Some(format!(
            "{}: High risk - consider defensive strategies",
            title_case(sector)
        ))
    } else {
        None
    }
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}
