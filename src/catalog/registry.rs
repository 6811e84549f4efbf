use std::path::Path;
use tracing::{info, warn};

use super::item::{ItemCategory, ItemRecord};

/// The five item pools, loaded once at startup and shared read-only for the
/// life of the process.
#[derive(Debug)]
pub struct Catalog {
    pub gear: Vec<ItemRecord>,
    pub weapons: Vec<ItemRecord>,
    pub armors: Vec<ItemRecord>,
    pub potions: Vec<ItemRecord>,
    pub poisons: Vec<ItemRecord>,
}

impl Catalog {
    /// Load all category files from a directory.
    pub fn load_from_directory(data_dir: &Path) -> Result<Self, String> {
        let catalog = Self {
            gear: load_pool(data_dir, ItemCategory::Gear)?,
            weapons: load_pool(data_dir, ItemCategory::Weapons)?,
            armors: load_pool(data_dir, ItemCategory::Armors)?,
            potions: load_pool(data_dir, ItemCategory::Potions)?,
            poisons: load_pool(data_dir, ItemCategory::Poisons)?,
        };
        info!("Loaded {} catalog records", catalog.len());
        Ok(catalog)
    }

    pub fn pool(&self, category: ItemCategory) -> &[ItemRecord] {
        match category {
            ItemCategory::Gear => &self.gear,
            ItemCategory::Weapons => &self.weapons,
            ItemCategory::Armors => &self.armors,
            ItemCategory::Potions => &self.potions,
            ItemCategory::Poisons => &self.poisons,
        }
    }

    pub fn len(&self) -> usize {
        ItemCategory::ALL
            .iter()
            .map(|&c| self.pool(c).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One record per non-blank line, fields separated by a literal 4-space
/// delimiter, mapped positionally. A missing file yields an empty pool (the
/// sampler clamps to zero); a malformed line fails the whole load.
fn load_pool(data_dir: &Path, category: ItemCategory) -> Result<Vec<ItemRecord>, String> {
    let path = data_dir.join(category.file_name());
    if !path.exists() {
        warn!("Catalog file does not exist: {:?}", path);
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read {:?}: {}", path, e))?;

    let mut records = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split("    ").collect();
        let record = ItemRecord::from_fields(category, &fields)
            .map_err(|e| format!("{:?} line {}: {}", path, idx + 1, e))?;
        records.push(record);
    }

    info!("Loaded {} {} records", records.len(), category.as_str());
    Ok(records)
}
