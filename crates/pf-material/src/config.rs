//! Material-region configuration: YAML/JSON schema, validation and loading.

use crate::brooks_corey::{BrooksCorey, BrooksCoreyParams};
use crate::eff_to_abs::EffToAbsLaw;
use crate::error::MaterialError;
use crate::law::CapillaryLaw;
use pf_core::units::pa;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

pub const LATEST_VERSION: u32 = 1;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Duplicate region name: {name}")]
    DuplicateRegion { name: String },

    #[error("Configuration has no regions")]
    NoRegions,

    #[error("Invalid region {region}: {source}")]
    InvalidRegion {
        region: String,
        #[source]
        source: MaterialError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaterialConfig {
    pub version: u32,
    #[serde(default)]
    pub regions: Vec<RegionDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegionDef {
    pub name: String,
    #[serde(default)]
    pub swr: f64,
    #[serde(default)]
    pub snr: f64,
    pub law: LawDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LawDef {
    BrooksCorey { entry_pressure_pa: f64, alpha: f64 },
}

impl LawDef {
    fn build(&self) -> Result<BrooksCorey, MaterialError> {
        match *self {
            LawDef::BrooksCorey {
                entry_pressure_pa,
                alpha,
            } => Ok(BrooksCorey::new(BrooksCoreyParams::new(
                pa(entry_pressure_pa),
                alpha,
            )?)),
        }
    }
}

impl RegionDef {
    fn build(&self) -> Result<EffToAbsLaw<BrooksCorey>, MaterialError> {
        EffToAbsLaw::new(self.law.build()?, self.swr, self.snr)
    }
}

/// A named material region with its absolute-saturation law.
#[derive(Debug, Clone)]
pub struct MaterialRegion {
    name: String,
    law: EffToAbsLaw<BrooksCorey>,
}

impl MaterialRegion {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn law(&self) -> &EffToAbsLaw<BrooksCorey> {
        &self.law
    }
}

/// Validated material regions, looked up by name.
#[derive(Debug, Clone)]
pub struct MaterialRegions {
    regions: Vec<MaterialRegion>,
}

impl MaterialRegions {
    /// Validate `config` and build every region law in one pass.
    pub fn from_config(config: &MaterialConfig) -> ConfigResult<Self> {
        if config.version > LATEST_VERSION || config.version == 0 {
            return Err(ConfigError::UnsupportedVersion {
                version: config.version,
            });
        }

        let mut names = HashSet::new();
        let mut regions = Vec::with_capacity(config.regions.len());
        for def in &config.regions {
            if !names.insert(def.name.as_str()) {
                warn!(region = %def.name, "duplicate material region");
                return Err(ConfigError::DuplicateRegion {
                    name: def.name.clone(),
                });
            }
            let law = def.build().map_err(|source| {
                warn!(region = %def.name, error = %source, "rejected material region");
                ConfigError::InvalidRegion {
                    region: def.name.clone(),
                    source,
                }
            })?;
            regions.push(MaterialRegion {
                name: def.name.clone(),
                law,
            });
        }

        let regions = Self { regions };
        if regions.is_empty() {
            return Err(ConfigError::NoRegions);
        }
        Ok(regions)
    }

    pub fn get(&self, name: &str) -> Option<&MaterialRegion> {
        self.regions.iter().find(|r| r.name == name)
    }

    /// Law of the named region as a trait object.
    pub fn law(&self, name: &str) -> Option<&dyn CapillaryLaw> {
        self.get(name).map(|r| &r.law as &dyn CapillaryLaw)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MaterialRegion> {
        self.regions.iter()
    }
}

pub fn validate_config(config: &MaterialConfig) -> ConfigResult<()> {
    MaterialRegions::from_config(config).map(|_| ())
}

pub fn parse_yaml(content: &str) -> ConfigResult<MaterialRegions> {
    let config: MaterialConfig = serde_yaml::from_str(content)?;
    finish_load(&config)
}

pub fn parse_json(content: &str) -> ConfigResult<MaterialRegions> {
    let config: MaterialConfig = serde_json::from_str(content)?;
    finish_load(&config)
}

pub fn load_yaml(path: &Path) -> ConfigResult<MaterialRegions> {
    let content = std::fs::read_to_string(path)?;
    parse_yaml(&content)
}

pub fn load_json(path: &Path) -> ConfigResult<MaterialRegions> {
    let content = std::fs::read_to_string(path)?;
    parse_json(&content)
}

pub fn save_yaml(path: &Path, config: &MaterialConfig) -> ConfigResult<()> {
    validate_config(config)?;
    let content = serde_yaml::to_string(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn save_json(path: &Path, config: &MaterialConfig) -> ConfigResult<()> {
    validate_config(config)?;
    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

fn finish_load(config: &MaterialConfig) -> ConfigResult<MaterialRegions> {
    let regions = MaterialRegions::from_config(config)?;
    let names: Vec<&str> = regions.iter().map(MaterialRegion::name).collect();
    info!(
        version = config.version,
        regions = ?names,
        "loaded material configuration"
    );
    Ok(regions)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAND_AND_CLAY: &str = r#"
version: 1
regions:
  - name: sand
    law:
      type: brooks_corey
      entry_pressure_pa: 1000.0
      alpha: 2.0
  - name: clay
    swr: 0.1
    snr: 0.05
    law:
      type: brooks_corey
      entry_pressure_pa: 50000.0
      alpha: 0.5
"#;

    #[test]
    fn parse_yaml_regions() {
        let regions = parse_yaml(SAND_AND_CLAY).unwrap();
        assert_eq!(regions.len(), 2);

        let sand = regions.get("sand").unwrap();
        assert_eq!(sand.name(), "sand");
        assert_eq!(sand.law().swr(), 0.0);
        assert_eq!(sand.law().snr(), 0.0);
        assert_eq!(sand.law().inner().params().pe().value, 1000.0);

        let clay = regions.get("clay").unwrap();
        assert_eq!(clay.law().swr(), 0.1);
        assert_eq!(clay.law().inner().params().alpha(), 0.5);

        let names: Vec<&str> = regions.iter().map(MaterialRegion::name).collect();
        assert_eq!(names, ["sand", "clay"]);
        assert!(!regions.is_empty());

        assert!(regions.get("gravel").is_none());
        assert!(regions.law("gravel").is_none());
    }

    #[test]
    fn law_lookup_evaluates() {
        let regions = parse_yaml(SAND_AND_CLAY).unwrap();
        let sand = regions.law("sand").unwrap();
        assert_eq!(sand.pc(1.0).unwrap().value, 1000.0);
    }

    #[test]
    fn region_laws_accept_their_saturation_endpoints() {
        let regions = parse_yaml(SAND_AND_CLAY).unwrap();
        for region in regions.iter() {
            let law = region.law();
            let s_max = 1.0 - law.snr();
            let pe = law.inner().params().pe().value;
            assert!((law.pc(s_max).unwrap().value - pe).abs() < 1e-6 * pe);
            let sw_entry = law.sw(pa(0.0)).unwrap();
            assert!(law.pc(sw_entry).is_ok(), "region {}", region.name());
        }
    }

    #[test]
    fn validate_config_agrees_with_from_config() {
        let config: MaterialConfig = serde_yaml::from_str(SAND_AND_CLAY).unwrap();
        assert!(validate_config(&config).is_ok());
        assert!(MaterialRegions::from_config(&config).is_ok());

        let mut bad = config.clone();
        bad.regions[1].swr = 0.99;
        assert!(matches!(
            validate_config(&bad),
            Err(ConfigError::InvalidRegion { .. })
        ));
        assert!(MaterialRegions::from_config(&bad).is_err());
    }

    #[test]
    fn rejects_unsupported_version() {
        let yaml = SAND_AND_CLAY.replace("version: 1", "version: 7");
        assert!(matches!(
            parse_yaml(&yaml),
            Err(ConfigError::UnsupportedVersion { version: 7 })
        ));
    }

    #[test]
    fn rejects_duplicate_names() {
        let yaml = SAND_AND_CLAY.replace("name: clay", "name: sand");
        assert!(matches!(
            parse_yaml(&yaml),
            Err(ConfigError::DuplicateRegion { .. })
        ));
    }

    #[test]
    fn rejects_bad_parameters() {
        let yaml = SAND_AND_CLAY.replace("alpha: 0.5", "alpha: -0.5");
        match parse_yaml(&yaml) {
            Err(ConfigError::InvalidRegion { region, source }) => {
                assert_eq!(region, "clay");
                assert!(matches!(source, MaterialError::Precondition { .. }));
            }
            other => panic!("expected InvalidRegion, got {other:?}"),
        }

        let yaml = SAND_AND_CLAY.replace("snr: 0.05", "snr: 0.95");
        assert!(matches!(
            parse_yaml(&yaml),
            Err(ConfigError::InvalidRegion { .. })
        ));
    }

    #[test]
    fn rejects_empty_and_unknown_law() {
        assert!(matches!(
            parse_yaml("version: 1\nregions: []\n"),
            Err(ConfigError::NoRegions)
        ));

        let yaml = SAND_AND_CLAY.replacen("brooks_corey", "van_genuchten", 1);
        assert!(matches!(parse_yaml(&yaml), Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn json_matches_yaml() {
        let config: MaterialConfig = serde_yaml::from_str(SAND_AND_CLAY).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"type\":\"brooks_corey\""));

        let regions = parse_json(&json).unwrap();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions.get("clay").unwrap().law().snr(), 0.05);
    }
}
