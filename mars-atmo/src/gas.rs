use crate::selection::Identified;
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt};

/// Embedded CSV table of the gases that make up the Martian atmosphere.
pub static GAS_CSV: &str = include_str!("../../fixtures/gases.csv");

/// How strongly a gas's abundance swings over the Martian year.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum SeasonalVariation {
    Low,
    Medium,
    High,
}

impl SeasonalVariation {
    /// Numeric level charted by the seasonal-variation view.
    pub fn level(self) -> u8 {
        match self {
            SeasonalVariation::Low => 1,
            SeasonalVariation::Medium => 2,
            SeasonalVariation::High => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SeasonalVariation::Low => "Low",
            SeasonalVariation::Medium => "Medium",
            SeasonalVariation::High => "High",
        }
    }
}

impl fmt::Display for SeasonalVariation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptive text shown in the detail panel.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct GasDetails {
    /// Chemical formula, absent for mixtures
    pub formula: Option<String>,
    pub description: String,
    pub effects: String,
    pub seasonal_behavior: String,
    pub significance: String,
}

/// One gas of the Martian atmosphere. Identity is the name.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct GasRecord {
    pub name: String,
    /// Share of the Martian atmosphere, in percent
    pub value: f64,
    /// Share of Earth's atmosphere, in percent
    pub earth_value: f64,
    pub seasonal_variation: SeasonalVariation,
    /// CSS color used for the chart arc and list swatch
    pub color: String,
    pub details: GasDetails,
}

impl Identified for GasRecord {
    fn id(&self) -> &str {
        &self.name
    }
}

/// Flat CSV row; the detail columns are folded into `GasDetails`.
#[derive(Debug, Deserialize)]
struct GasRow {
    name: String,
    value: f64,
    earth_value: f64,
    seasonal_variation: SeasonalVariation,
    color: String,
    formula: Option<String>,
    description: String,
    effects: String,
    seasonal_behavior: String,
    significance: String,
}

impl From<GasRow> for GasRecord {
    fn from(row: GasRow) -> Self {
        GasRecord {
            name: row.name,
            value: row.value,
            earth_value: row.earth_value,
            seasonal_variation: row.seasonal_variation,
            color: row.color,
            details: GasDetails {
                formula: row.formula.filter(|f| !f.trim().is_empty()),
                description: row.description,
                effects: row.effects,
                seasonal_behavior: row.seasonal_behavior,
                significance: row.significance,
            },
        }
    }
}

impl GasRecord {
    /// The fixed Martian atmosphere dataset, in declaration order.
    pub fn mars_atmosphere() -> anyhow::Result<Vec<GasRecord>> {
        GasRecord::parse_gas_csv(GAS_CSV)
    }

    /// Parse a CSV string of gas data into a vector of GasRecords.
    ///
    /// Expected CSV columns: name, value, earth_value, seasonal_variation, color,
    /// formula, description, effects, seasonal_behavior, significance
    pub fn parse_gas_csv(csv_object: &str) -> anyhow::Result<Vec<GasRecord>> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .trim(csv::Trim::Fields)
            .from_reader(csv_object.as_bytes());
        let mut names: HashSet<String> = HashSet::new();
        let mut gases: Vec<GasRecord> = Vec::new();
        for row in rdr.deserialize::<GasRow>() {
            let gas = GasRecord::from(row?);
            if !names.insert(gas.name.clone()) {
                anyhow::bail!("duplicate gas name in table: {}", gas.name);
            }
            gases.push(gas);
        }
        Ok(gases)
    }
}

#[cfg(test)]
mod tests {
    use super::{GasRecord, SeasonalVariation};

    #[test]
    fn test_mars_atmosphere() {
        let gases = GasRecord::mars_atmosphere().unwrap();
        let names: Vec<&str> = gases.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Carbon Dioxide", "Nitrogen", "Argon", "Oxygen", "Other Trace Gases"]
        );
        assert_eq!(gases[0].value, 95.0);
        assert_eq!(gases[0].earth_value, 0.04);
        assert_eq!(gases[0].seasonal_variation, SeasonalVariation::High);
        assert_eq!(gases[0].color, "#FF4D4D");
        assert_eq!(gases[0].details.formula.as_deref(), Some("CO₂"));
        assert_eq!(gases[3].value, 0.13);
        assert_eq!(gases[3].seasonal_variation, SeasonalVariation::Medium);
    }

    #[test]
    fn test_trace_gases_have_no_formula() {
        let gases = GasRecord::mars_atmosphere().unwrap();
        let trace = &gases[4];
        assert_eq!(trace.details.formula, None);
        assert_eq!(
            trace.details.description,
            "Including water vapor, carbon monoxide, and other trace elements"
        );
    }

    #[test]
    fn test_seasonal_levels() {
        assert_eq!(SeasonalVariation::Low.level(), 1);
        assert_eq!(SeasonalVariation::Medium.level(), 2);
        assert_eq!(SeasonalVariation::High.level(), 3);
        assert_eq!(SeasonalVariation::Medium.to_string(), "Medium");
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let csv_data = "\
name,value,earth_value,seasonal_variation,color,formula,description,effects,seasonal_behavior,significance
Argon,1.6,0.93,Low,#7B61FF,Ar,a,b,c,d
Argon,1.7,0.93,Low,#7B61FF,Ar,a,b,c,d
";
        assert!(GasRecord::parse_gas_csv(csv_data).is_err());
    }

    #[test]
    fn test_unknown_variation_rejected() {
        let csv_data = "\
name,value,earth_value,seasonal_variation,color,formula,description,effects,seasonal_behavior,significance
Argon,1.6,0.93,Extreme,#7B61FF,Ar,a,b,c,d
";
        assert!(GasRecord::parse_gas_csv(csv_data).is_err());
    }

    #[test]
    fn test_parse_empty_csv() {
        let csv_data = "name,value,earth_value,seasonal_variation,color,formula,description,effects,seasonal_behavior,significance\n";
        let gases = GasRecord::parse_gas_csv(csv_data).unwrap();
        assert_eq!(gases.len(), 0);
    }
}
