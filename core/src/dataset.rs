//! Sample dataset: a trailing window of fabricated daily assessments,
//! plus the CSV export that is the demo's only durable output.

use crate::{
    clock::{format_date, Clock},
    engine::RiskEngine,
    error::{DemoError, DemoResult},
    rng::StressSource,
};
use chrono::{Duration, NaiveDate};
use csv::Writer;
use std::{io, path::Path};

/// Days in the trailing window, today included.
pub const WINDOW_DAYS: u32 = 30;

pub const EXPORT_FILE_NAME: &str = "market_volatility_business_intelligence_sample.csv";

pub const CSV_HEADER: [&str; 7] = [
    "date",
    "sector",
    "risk_score",
    "recommendation",
    "business_impact",
    "sample_scenario",
    "confidence_level",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    Savings,
    CostIncrease,
    Standard,
}

impl Scenario {
    pub fn from_score(score: f64) -> Self {
        if score <= 3.0 {
            Self::Savings
        } else if score >= 7.0 {
            Self::CostIncrease
        } else {
            Self::Standard
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Self::Savings      => "Equipment purchase timing optimal - potential savings 10-15%",
            Self::CostIncrease => "Delay major decisions - risk of 20-30% cost increase",
            Self::Standard     => "Moderate conditions - proceed with standard planning",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    High,
    Moderate,
}

impl Confidence {
    pub fn from_score(score: f64) -> Self {
        if score <= 3.0 || score >= 7.0 {
            Self::High
        } else {
            Self::Moderate
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High     => "High",
            Self::Moderate => "Moderate",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SampleRecord {
    pub date:            NaiveDate,
    pub sector:          String,
    pub risk_score:      f64,
    /// Action word only, e.g. "DELAY".
    pub recommendation:  String,
    pub business_impact: String,
    pub scenario:        Scenario,
    pub confidence:      Confidence,
}

impl SampleRecord {
    fn to_row(&self) -> [String; 7] {
        [
            format_date(self.date),
            self.sector.clone(),
            format!("{:.1}", self.risk_score),
            self.recommendation.clone(),
            self.business_impact.clone(),
            self.scenario.text().to_string(),
            self.confidence.as_str().to_string(),
        ]
    }
}

/// `WINDOW_DAYS` consecutive dates ending at `end`, oldest first.
pub fn trailing_window(end: NaiveDate) -> Vec<NaiveDate> {
    (0..WINDOW_DAYS)
        .rev()
        .map(|days_back| end - Duration::days(i64::from(days_back)))
        .collect()
}

/// One record per (date, canonical sector), date outer, sector inner.
pub fn export_sample_dataset(
    engine: &RiskEngine,
    clock:  &dyn Clock,
    stress: &mut dyn StressSource,
) -> Vec<SampleRecord> {
    let dates = trailing_window(clock.today());
    let mut records = Vec::with_capacity(dates.len() * engine.table().len());

    for date in dates {
        for sector in engine.table().names() {
            let assessment = engine.evaluate(sector, stress);
            let score = assessment.risk_score;
            records.push(SampleRecord {
                date,
                sector:          sector.to_string(),
                risk_score:      score,
                recommendation:  assessment.tier.action().to_string(),
                business_impact: assessment.business_impact,
                scenario:        Scenario::from_score(score),
                confidence:      Confidence::from_score(score),
            });
        }
    }

    log::info!("sample dataset: {} records", records.len());
    records
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSummary {
    pub record_count: usize,
    pub first_date:   Option<NaiveDate>,
    pub last_date:    Option<NaiveDate>,
    /// Distinct sectors in first-seen order.
    pub sectors:      Vec<String>,
}

impl DatasetSummary {
    pub fn from_records(records: &[SampleRecord]) -> Self {
        let mut sectors: Vec<String> = Vec::new();
        for r in records {
            if !sectors.contains(&r.sector) {
                sectors.push(r.sector.clone());
            }
        }
        Self {
            record_count: records.len(),
            first_date:   records.iter().map(|r| r.date).min(),
            last_date:    records.iter().map(|r| r.date).max(),
            sectors,
        }
    }
}

fn write_records<W: io::Write>(wtr: &mut Writer<W>, records: &[SampleRecord]) -> Result<(), csv::Error> {
    wtr.write_record(CSV_HEADER)?;
    for record in records {
        wtr.write_record(record.to_row())?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the dataset as CSV to any sink.
pub fn write_csv<W: io::Write>(records: &[SampleRecord], sink: W) -> DemoResult<()> {
    let mut wtr = Writer::from_writer(sink);
    write_records(&mut wtr, records)?;
    Ok(())
}

/// Write the dataset to `path`. Errors name the path.
pub fn export_csv(records: &[SampleRecord], path: &Path) -> DemoResult<()> {
    let export_err = |source: csv::Error| DemoError::Export {
        path: path.display().to_string(),
        source,
    };
    let mut wtr = Writer::from_path(path).map_err(export_err)?;
    write_records(&mut wtr, records).map_err(export_err)?;
    log::info!("exported {} records to {}", records.len(), path.display());
    Ok(())
}
