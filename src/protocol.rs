//! JSON shapes produced by the shop endpoint.

use serde::Serialize;

use crate::catalog::ItemRecord;
use crate::keeper::Shopkeeper;
use crate::price::format_coins;
use crate::shop::{PricedItem, Shop};

// ============================================================================
// Item Views
// ============================================================================

/// One inventory entry as serialized to the client. Category-specific fields
/// are emitted only when the source record defines them.
#[derive(Debug, Clone, Serialize)]
pub struct ItemView {
    pub name: String,
    pub slots: String,
    pub cost_gp: f64,
    pub cost_str: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub weapon_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ac: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<String>,
}

impl From<&PricedItem> for ItemView {
    fn from(item: &PricedItem) -> Self {
        let mut view = ItemView {
            name: String::new(),
            slots: String::new(),
            cost_gp: item.cost_gp,
            cost_str: format_coins(item.cost_gp),
            weapon_type: None,
            range: None,
            damage: None,
            ac: None,
            rarity: None,
            properties: None,
        };

        match &item.record {
            ItemRecord::Gear {
                name,
                slots,
                properties,
                ..
            }
            | ItemRecord::Potion {
                name,
                slots,
                properties,
                ..
            } => {
                view.name = name.clone();
                view.slots = slots.clone();
                view.properties = Some(properties.clone());
            }
            ItemRecord::Weapon {
                name,
                slots,
                weapon_type,
                range,
                damage,
                properties,
                ..
            } => {
                view.name = name.clone();
                view.slots = slots.clone();
                view.weapon_type = Some(weapon_type.clone());
                view.range = Some(range.clone());
                view.damage = Some(damage.clone());
                view.properties = Some(properties.clone());
            }
            ItemRecord::Armor {
                name,
                slots,
                ac,
                properties,
                ..
            } => {
                view.name = name.clone();
                view.slots = slots.clone();
                view.ac = Some(ac.clone());
                view.properties = Some(properties.clone());
            }
            ItemRecord::Poison {
                name,
                slots,
                rarity,
                properties,
                ..
            } => {
                view.name = name.clone();
                view.slots = slots.clone();
                view.rarity = Some(rarity.clone());
                view.properties = Some(properties.clone());
            }
        }

        view
    }
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ShopResponse {
    pub seed: String,
    pub shopkeeper: Shopkeeper,
    pub size: &'static str,
    pub cost_policy: &'static str,
    pub gear: Vec<ItemView>,
    pub weapons: Vec<ItemView>,
    pub armors: Vec<ItemView>,
    pub poisons: Vec<ItemView>,
    pub potions: Vec<ItemView>,
}

impl ShopResponse {
    pub fn new(seed: String, shopkeeper: Shopkeeper, shop: &Shop) -> Self {
        fn views(items: &[PricedItem]) -> Vec<ItemView> {
            items.iter().map(ItemView::from).collect()
        }

        Self {
            seed,
            shopkeeper,
            size: shop.size.as_str(),
            cost_policy: shop.policy.as_str(),
            gear: views(&shop.gear),
            weapons: views(&shop.weapons),
            armors: views(&shop.armors),
            poisons: views(&shop.poisons),
            potions: views(&shop.potions),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
