use std::sync::Arc;

use super::ShopSize;
use super::config::GenConfig;
use crate::catalog::{Catalog, ItemCategory, ItemRecord};
use crate::error::GenError;
use crate::price::{self, PricePolicy};
use crate::rng::ShopRng;

/// A cloned catalog record with its policy-adjusted price attached. The
/// source record is never touched.
#[derive(Debug, Clone)]
pub struct PricedItem {
    pub record: ItemRecord,
    pub cost_gp: f64,
}

/// One generated shop. Request-scoped; discarded after serialization.
#[derive(Debug)]
pub struct Shop {
    pub size: ShopSize,
    pub policy: PricePolicy,
    pub gear: Vec<PricedItem>,
    pub weapons: Vec<PricedItem>,
    pub armors: Vec<PricedItem>,
    pub potions: Vec<PricedItem>,
    pub poisons: Vec<PricedItem>,
}

/// Rolls a count, samples items, and prices them for each category.
///
/// Draw order is part of the seed-reproducibility contract: categories run in
/// the fixed order gear, weapons, armors, potions, poisons, with one count
/// roll then one sample per category. The count roll happens even when the
/// pool is empty. Size and policy are validated at the HTTP boundary, never
/// here.
pub struct ShopAssembler {
    catalog: Arc<Catalog>,
    config: Arc<GenConfig>,
}

impl ShopAssembler {
    pub fn new(catalog: Arc<Catalog>, config: Arc<GenConfig>) -> Self {
        Self { catalog, config }
    }

    pub fn assemble(
        &self,
        size: ShopSize,
        policy: PricePolicy,
        rng: &mut ShopRng,
    ) -> Result<Shop, GenError> {
        let gear = self.populate(ItemCategory::Gear, size, policy, rng)?;
        let weapons = self.populate(ItemCategory::Weapons, size, policy, rng)?;
        let armors = self.populate(ItemCategory::Armors, size, policy, rng)?;
        let potions = self.populate(ItemCategory::Potions, size, policy, rng)?;
        let poisons = self.populate(ItemCategory::Poisons, size, policy, rng)?;

        Ok(Shop {
            size,
            policy,
            gear,
            weapons,
            armors,
            potions,
            poisons,
        })
    }

    fn populate(
        &self,
        category: ItemCategory,
        size: ShopSize,
        policy: PricePolicy,
        rng: &mut ShopRng,
    ) -> Result<Vec<PricedItem>, GenError> {
        let table = self.config.table(category, size);
        let rolled = rng.weighted(table, |entry| entry.weight)?.count;

        let pool = self.catalog.pool(category);
        rng.sample(pool, rolled as usize)
            .into_iter()
            .map(|record| {
                let base = price::parse_cost(record.cost())?;
                Ok(PricedItem {
                    record: record.clone(),
                    cost_gp: price::adjust(base, policy, &self.config.rates),
                })
            })
            .collect()
    }
}
