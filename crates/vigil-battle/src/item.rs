//! Battle item component.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use vigil_ruleset::RuleItem;

/// An item equipped by a battle unit. Owned by the unit's `Inventory`
/// for the unit's lifetime.
///
/// Animation state is not stored per item: the display's frame counter
/// plus the rule's cycle length determine the sprite to draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleItem {
    /// Item rule id.
    pub item: String,
    /// Inventory section id the item sits in.
    pub slot: String,
    /// Cell within the section (general sections only).
    pub slot_pos: IVec2,
}

impl BattleItem {
    pub fn new(item: &str, slot: &str) -> Self {
        Self {
            item: item.to_string(),
            slot: slot.to_string(),
            slot_pos: IVec2::ZERO,
        }
    }

    pub fn at(item: &str, slot: &str, slot_pos: IVec2) -> Self {
        Self {
            item: item.to_string(),
            slot: slot.to_string(),
            slot_pos,
        }
    }

    /// Whether the item's footprint covers `cell` in a general section.
    pub fn occupies(&self, rule: &RuleItem, cell: IVec2) -> bool {
        cell.x >= self.slot_pos.x
            && cell.x < self.slot_pos.x + rule.inv_width
            && cell.y >= self.slot_pos.y
            && cell.y < self.slot_pos.y + rule.inv_height
    }
}
