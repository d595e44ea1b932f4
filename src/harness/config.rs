use crate::harness::HarnessError;
use std::fmt;
use std::path::PathBuf;

/// A structure that the harness can time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum Structure {
    #[serde(rename = "BTreeSet")]
    #[value(name = "btreeset")]
    BTreeSet,
    #[serde(rename = "AVL")]
    #[value(name = "avl")]
    Avl,
    #[serde(rename = "Splay")]
    #[value(name = "splay")]
    Splay,
    #[serde(rename = "RedBlack")]
    #[value(name = "redblack")]
    RedBlack,
}

impl Structure {
    pub const ALL: [Structure; 4] = [
        Structure::BTreeSet,
        Structure::Avl,
        Structure::Splay,
        Structure::RedBlack,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Structure::BTreeSet => "BTreeSet",
            Structure::Avl => "AVL",
            Structure::Splay => "Splay",
            Structure::RedBlack => "RedBlack",
        }
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The layout of the report written after a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// A header line followed by one comma-separated row per measurement.
    Csv,
    /// One JSON object per line.
    Json,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
        }
    }

    /// The report path used when none is given, `benchmark_results` with this format's
    /// extension.
    pub fn default_output(self) -> PathBuf {
        PathBuf::from("benchmark_results").with_extension(self.extension())
    }
}

/// The parameters of a benchmark run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// The number of keys inserted, searched and erased in each round.
    pub sizes: Vec<usize>,
    pub seed: u64,
    /// Inclusive lower bound of generated keys.
    pub min_key: i32,
    /// Inclusive upper bound of generated keys.
    pub max_key: i32,
    /// How many times each measurement is repeated. Reported times are averaged.
    pub iterations: u32,
    pub structures: Vec<Structure>,
    pub format: ReportFormat,
    pub output: PathBuf,
}

impl HarnessConfig {
    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.sizes.is_empty() {
            return Err(HarnessError::InvalidConfig(String::from("no input sizes given")));
        }
        if self.iterations == 0 {
            return Err(HarnessError::InvalidConfig(String::from(
                "iterations must be at least 1",
            )));
        }
        if self.min_key > self.max_key {
            return Err(HarnessError::InvalidConfig(format!(
                "empty key range {}..={}",
                self.min_key, self.max_key,
            )));
        }
        if self.structures.is_empty() {
            return Err(HarnessError::InvalidConfig(String::from("no structures selected")));
        }
        Ok(())
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        HarnessConfig {
            sizes: vec![1_000, 10_000, 100_000, 1_000_000],
            seed: 42,
            min_key: 1,
            max_key: 10_000_000,
            iterations: 1,
            structures: Structure::ALL.to_vec(),
            format: ReportFormat::Csv,
            output: ReportFormat::Csv.default_output(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{HarnessConfig, ReportFormat, Structure};
    use crate::harness::HarnessError;
    use std::path::PathBuf;

    #[test]
    fn test_default_is_valid() {
        let config = HarnessConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.structures, Structure::ALL.to_vec());
    }

    #[test]
    fn test_rejects_inverted_range() {
        let config = HarnessConfig {
            min_key: 10,
            max_key: 9,
            ..HarnessConfig::default()
        };
        match config.validate() {
            Err(HarnessError::InvalidConfig(message)) => assert!(message.contains("10..=9")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_single_key_range_is_valid() {
        let config = HarnessConfig {
            min_key: 7,
            max_key: 7,
            ..HarnessConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_output_follows_format() {
        assert_eq!(HarnessConfig::default().output, PathBuf::from("benchmark_results.csv"));
        assert_eq!(
            ReportFormat::Json.default_output(),
            PathBuf::from("benchmark_results.json"),
        );
    }

    #[test]
    fn test_serializes_structure_names() {
        let json = serde_json::to_string(&Structure::ALL).unwrap();
        assert_eq!(json, r#"["BTreeSet","AVL","Splay","RedBlack"]"#);
    }
}
