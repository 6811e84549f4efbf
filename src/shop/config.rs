use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use super::ShopSize;
use crate::catalog::ItemCategory;
use crate::price::PriceRates;

/// One entry of a weighted count table: roll `count` items with relative
/// likelihood `weight`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WeightedCount {
    pub count: u32,
    pub weight: f64,
}

/// Count tables for one category, one table per shop size.
#[derive(Debug, Clone, Deserialize)]
pub struct SizeTables {
    pub small: Vec<WeightedCount>,
    pub medium: Vec<WeightedCount>,
    pub large: Vec<WeightedCount>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CountTables {
    pub gear: SizeTables,
    pub weapons: SizeTables,
    pub armors: SizeTables,
    pub potions: SizeTables,
    pub poisons: SizeTables,
}

/// Generation parameters: price rates plus the fifteen weighted count tables.
/// These are data, not logic; a config file can replace the built-in values.
#[derive(Debug, Clone, Deserialize)]
pub struct GenConfig {
    pub rates: PriceRates,
    pub counts: CountTables,
}

impl GenConfig {
    /// Load from `config.toml` in the data directory; built-in defaults when
    /// the file is absent. A present-but-malformed file fails startup.
    pub fn load(data_dir: &Path) -> Result<Self, String> {
        let path = data_dir.join("config.toml");
        if !path.exists() {
            warn!("Config file does not exist: {:?}, using built-in defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read {:?}: {}", path, e))?;
        let config: GenConfig = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse {:?}: {}", path, e))?;

        info!("Loaded generation config from {:?}", path);
        Ok(config)
    }

    /// The weighted count table for one (category, size) combination.
    pub fn table(&self, category: ItemCategory, size: ShopSize) -> &[WeightedCount] {
        let tables = match category {
            ItemCategory::Gear => &self.counts.gear,
            ItemCategory::Weapons => &self.counts.weapons,
            ItemCategory::Armors => &self.counts.armors,
            ItemCategory::Potions => &self.counts.potions,
            ItemCategory::Poisons => &self.counts.poisons,
        };
        match size {
            ShopSize::Small => &tables.small,
            ShopSize::Medium => &tables.medium,
            ShopSize::Large => &tables.large,
        }
    }
}

fn table(entries: &[(u32, f64)]) -> Vec<WeightedCount> {
    entries
        .iter()
        .map(|&(count, weight)| WeightedCount { count, weight })
        .collect()
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            rates: PriceRates::default(),
            counts: CountTables {
                gear: SizeTables {
                    small: table(&[(1, 1.0), (2, 3.0), (3, 4.0), (4, 3.0), (5, 1.0)]),
                    medium: table(&[(3, 1.0), (4, 2.0), (5, 4.0), (6, 4.0), (7, 2.0), (8, 1.0)]),
                    large: table(&[(6, 1.0), (8, 3.0), (10, 4.0), (12, 3.0), (14, 1.0)]),
                },
                weapons: SizeTables {
                    small: table(&[(0, 2.0), (1, 4.0), (2, 3.0), (3, 1.0)]),
                    medium: table(&[(1, 2.0), (2, 4.0), (3, 3.0), (4, 1.0)]),
                    large: table(&[(2, 1.0), (3, 3.0), (4, 4.0), (5, 2.0), (6, 1.0)]),
                },
                armors: SizeTables {
                    small: table(&[(0, 4.0), (1, 4.0), (2, 2.0)]),
                    medium: table(&[(0, 1.0), (1, 3.0), (2, 4.0), (3, 2.0)]),
                    large: table(&[(1, 2.0), (2, 4.0), (3, 3.0), (4, 1.0)]),
                },
                potions: SizeTables {
                    small: table(&[(0, 2.0), (1, 4.0), (2, 3.0), (3, 1.0)]),
                    medium: table(&[(1, 2.0), (2, 4.0), (3, 3.0), (4, 1.0)]),
                    large: table(&[(2, 2.0), (3, 3.0), (4, 3.0), (5, 2.0)]),
                },
                poisons: SizeTables {
                    small: table(&[(0, 6.0), (1, 3.0), (2, 1.0)]),
                    medium: table(&[(0, 3.0), (1, 4.0), (2, 2.0), (3, 1.0)]),
                    large: table(&[(0, 1.0), (1, 3.0), (2, 4.0), (3, 2.0)]),
                },
            },
        }
    }
}
