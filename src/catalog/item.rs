// ============================================================================
// Item Categories
// ============================================================================

/// The five inventory categories, in the fixed assembly (and draw) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemCategory {
    Gear,
    Weapons,
    Armors,
    Potions,
    Poisons,
}

impl ItemCategory {
    pub const ALL: [ItemCategory; 5] = [
        ItemCategory::Gear,
        ItemCategory::Weapons,
        ItemCategory::Armors,
        ItemCategory::Potions,
        ItemCategory::Poisons,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCategory::Gear => "gear",
            ItemCategory::Weapons => "weapons",
            ItemCategory::Armors => "armors",
            ItemCategory::Potions => "potions",
            ItemCategory::Poisons => "poisons",
        }
    }

    /// Source file for this category's pool.
    pub fn file_name(&self) -> &'static str {
        match self {
            ItemCategory::Gear => "gear.txt",
            ItemCategory::Weapons => "weapons.txt",
            ItemCategory::Armors => "armors.txt",
            ItemCategory::Potions => "potions.txt",
            ItemCategory::Poisons => "poisons.txt",
        }
    }

    /// Fields per record line, in positional order.
    pub fn field_count(&self) -> usize {
        match self {
            ItemCategory::Gear | ItemCategory::Potions => 4,
            ItemCategory::Armors | ItemCategory::Poisons => 5,
            ItemCategory::Weapons => 7,
        }
    }
}

// ============================================================================
// Item Records
// ============================================================================

/// One catalog entry. Records are immutable templates: generation clones a
/// record and attaches the adjusted price separately, so the catalog is never
/// written after load.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemRecord {
    Gear {
        name: String,
        slots: String,
        cost: String,
        properties: String,
    },
    Weapon {
        name: String,
        slots: String,
        cost: String,
        weapon_type: String,
        range: String,
        damage: String,
        properties: String,
    },
    Armor {
        name: String,
        slots: String,
        cost: String,
        ac: String,
        properties: String,
    },
    Potion {
        name: String,
        slots: String,
        cost: String,
        properties: String,
    },
    // Rarity sits before cost in the source file.
    Poison {
        name: String,
        slots: String,
        rarity: String,
        cost: String,
        properties: String,
    },
}

impl ItemRecord {
    /// Build a record from one line's fields, mapped positionally.
    pub fn from_fields(category: ItemCategory, fields: &[&str]) -> Result<Self, String> {
        match (category, fields) {
            (ItemCategory::Gear, [name, slots, cost, properties]) => Ok(ItemRecord::Gear {
                name: name.to_string(),
                slots: slots.to_string(),
                cost: cost.to_string(),
                properties: properties.to_string(),
            }),
            (
                ItemCategory::Weapons,
                [name, slots, cost, weapon_type, range, damage, properties],
            ) => Ok(ItemRecord::Weapon {
                name: name.to_string(),
                slots: slots.to_string(),
                cost: cost.to_string(),
                weapon_type: weapon_type.to_string(),
                range: range.to_string(),
                damage: damage.to_string(),
                properties: properties.to_string(),
            }),
            (ItemCategory::Armors, [name, slots, cost, ac, properties]) => Ok(ItemRecord::Armor {
                name: name.to_string(),
                slots: slots.to_string(),
                cost: cost.to_string(),
                ac: ac.to_string(),
                properties: properties.to_string(),
            }),
            (ItemCategory::Potions, [name, slots, cost, properties]) => Ok(ItemRecord::Potion {
                name: name.to_string(),
                slots: slots.to_string(),
                cost: cost.to_string(),
                properties: properties.to_string(),
            }),
            (ItemCategory::Poisons, [name, slots, rarity, cost, properties]) => {
                Ok(ItemRecord::Poison {
                    name: name.to_string(),
                    slots: slots.to_string(),
                    rarity: rarity.to_string(),
                    cost: cost.to_string(),
                    properties: properties.to_string(),
                })
            }
            _ => Err(format!(
                "{} record expects {} fields, got {}",
                category.as_str(),
                category.field_count(),
                fields.len()
            )),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ItemRecord::Gear { name, .. }
            | ItemRecord::Weapon { name, .. }
            | ItemRecord::Armor { name, .. }
            | ItemRecord::Potion { name, .. }
            | ItemRecord::Poison { name, .. } => name,
        }
    }

    /// Raw cost string as loaded, e.g. "5sp" or "12".
    pub fn cost(&self) -> &str {
        match self {
            ItemRecord::Gear { cost, .. }
            | ItemRecord::Weapon { cost, .. }
            | ItemRecord::Armor { cost, .. }
            | ItemRecord::Potion { cost, .. }
            | ItemRecord::Poison { cost, .. } => cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_each_variant_positionally() {
        let gear = ItemRecord::from_fields(ItemCategory::Gear, &["Rope", "1", "5sp", "60 feet"])
            .unwrap();
        assert_eq!(gear.name(), "Rope");
        assert_eq!(gear.cost(), "5sp");

        let weapon = ItemRecord::from_fields(
            ItemCategory::Weapons,
            &["Dagger", "1", "3gp", "Melee", "Near", "1d6", "Light"],
        )
        .unwrap();
        match weapon {
            ItemRecord::Weapon { ref damage, .. } => assert_eq!(damage, "1d6"),
            ref other => panic!("expected weapon, got {:?}", other),
        }

        // Poison puts rarity before cost.
        let poison = ItemRecord::from_fields(
            ItemCategory::Poisons,
            &["Hemlock", "1", "Common", "10gp", "Ingested"],
        )
        .unwrap();
        match poison {
            ItemRecord::Poison {
                ref rarity,
                ref cost,
                ..
            } => {
                assert_eq!(rarity, "Common");
                assert_eq!(cost, "10gp");
            }
            ref other => panic!("expected poison, got {:?}", other),
        }
    }

    #[test]
    fn rejects_wrong_field_count() {
        let err = ItemRecord::from_fields(ItemCategory::Gear, &["Rope", "1"]).unwrap_err();
        assert!(err.contains("expects 4 fields"), "{}", err);
    }
}
