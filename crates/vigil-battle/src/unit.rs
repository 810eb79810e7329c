//! Battle unit components.
//!
//! Components are plain data structs with no game logic; display and
//! systems code resolves rule ids through the `Ruleset`.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use vigil_core::enums::{SlotKind, UnitSize};
use vigil_ruleset::{Armor, RuleInventory, Ruleset};

use crate::item::BattleItem;

/// Identity and body of a battle unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitData {
    pub name: String,
    /// Armor rule id.
    pub armor: String,
    pub size: UnitSize,
}

impl UnitData {
    pub fn new(name: &str, armor: &str, size: UnitSize) -> Self {
        Self {
            name: name.to_string(),
            armor: armor.to_string(),
            size,
        }
    }

    /// Unit wearing the given armor; the body size comes from the armor rule.
    pub fn with_armor(name: &str, armor: &Armor) -> Self {
        Self {
            name: name.to_string(),
            armor: armor.id.clone(),
            size: armor.size,
        }
    }
}

/// Everything the unit carries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    pub items: Vec<BattleItem>,
}

impl Inventory {
    pub fn new(items: Vec<BattleItem>) -> Self {
        Self { items }
    }

    /// The item occupying `cell` of `section`, if any.
    ///
    /// Hand sections hold one item and match regardless of cell; general
    /// sections match against each item's footprint.
    pub fn item_at(
        &self,
        section: &RuleInventory,
        cell: IVec2,
        rules: &Ruleset,
    ) -> Option<&BattleItem> {
        self.items.iter().find(|it| {
            if it.slot != section.id {
                return false;
            }
            match section.kind {
                SlotKind::Hand => true,
                SlotKind::General | SlotKind::Ground => rules
                    .item(&it.item)
                    .is_some_and(|rule| it.occupies(rule, cell)),
            }
        })
    }
}
