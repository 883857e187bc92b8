//! Sector profiles: the static base-risk table.
//!
//! Built once at startup and handed to the engine. Lookups are
//! case-insensitive and never fail: unknown names get the default profile.

#[derive(Debug, Clone, PartialEq)]
pub struct SectorProfile {
    pub base_risk: f64,
    pub factors:   Vec<String>,
}

impl SectorProfile {
    pub fn new(base_risk: f64, factors: &[&str]) -> Self {
        Self {
            base_risk,
            factors: factors.iter().map(|f| f.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SectorTable {
    /// Canonical sectors in iteration order. Keys are lowercase.
    sectors:         Vec<(String, SectorProfile)>,
    default_profile: SectorProfile,
}

impl SectorTable {
    pub fn new(sectors: Vec<(String, SectorProfile)>, default_profile: SectorProfile) -> Self {
        let sectors = sectors
            .into_iter()
            .map(|(name, profile)| (name.to_lowercase(), profile))
            .collect();
        Self { sectors, default_profile }
    }

    /// The five demo sectors plus the "Market conditions" fallback.
    pub fn standard() -> Self {
        Self::new(
            vec![
                ("technology".into(),     SectorProfile::new(7.2, &["Global sentiment", "Tech cycles"])),
                ("banking".into(),        SectorProfile::new(5.9, &["Interest rates", "RBI policies"])),
                ("fmcg".into(),           SectorProfile::new(3.1, &["Rural demand", "Monsoon patterns"])),
                ("pharmaceutical".into(), SectorProfile::new(6.8, &["Regulatory approvals", "Export demand"])),
                ("energy".into(),         SectorProfile::new(8.1, &["Oil prices", "Government policies"])),
            ],
            SectorProfile::new(6.0, &["Market conditions"]),
        )
    }

    /// Profile for `sector`, falling back to the default for unknown names.
    pub fn lookup(&self, sector: &str) -> &SectorProfile {
        self.get(sector).unwrap_or(&self.default_profile)
    }

    /// Profile for a canonical sector only.
    pub fn get(&self, sector: &str) -> Option<&SectorProfile> {
        let key = sector.to_lowercase();
        self.sectors
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, profile)| profile)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sectors.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SectorProfile)> {
        self.sectors.iter().map(|(name, profile)| (name.as_str(), profile))
    }

    pub fn len(&self) -> usize {
        self.sectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }
}
