//! Item type rules, limited to what the inventory display and codex need.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A specific item type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleItem {
    pub id: String,
    /// Frame index into the item sprite sheet (-1 = no sprite).
    pub big_sprite: i32,
    /// Pixel offset centering the sprite inside a hand slot.
    pub hand_sprite_offset: IVec2,
    /// Cells occupied in general inventory sections.
    pub inv_width: i32,
    pub inv_height: i32,
    /// Sprite cycle length; 1 = static sprite.
    pub anim_frames: u32,
    pub list_order: i32,
}

impl RuleItem {
    /// Blank item ruleset with the given id and list position.
    pub fn new(id: &str, list_order: i32) -> Self {
        Self {
            id: id.to_string(),
            big_sprite: -1,
            hand_sprite_offset: IVec2::ZERO,
            inv_width: 1,
            inv_height: 1,
            anim_frames: 1,
            list_order,
        }
    }

    /// Sprite sheet frame to draw at the given animation frame.
    /// `None` when the item has no sprite.
    pub fn sprite_index(&self, anim_frame: u32) -> Option<usize> {
        if self.big_sprite < 0 {
            return None;
        }
        let base = self.big_sprite as u32;
        let index = if self.anim_frames > 1 {
            base + anim_frame % self.anim_frames
        } else {
            base
        };
        Some(index as usize)
    }

    /// Merge a rule document patch over the current values.
    pub fn load(&mut self, patch: &ItemPatch) {
        if let Some(v) = patch.big_sprite {
            self.big_sprite = v;
        }
        if let Some(v) = patch.hand_sprite_offset {
            self.hand_sprite_offset = v;
        }
        if let Some(v) = patch.inv_width {
            self.inv_width = v.max(1);
        }
        if let Some(v) = patch.inv_height {
            self.inv_height = v.max(1);
        }
        if let Some(v) = patch.anim_frames {
            self.anim_frames = v.max(1);
        }
        if let Some(v) = patch.list_order {
            self.list_order = v;
        }
    }
}

/// Partial item record as it appears in rule documents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ItemPatch {
    pub id: String,
    pub big_sprite: Option<i32>,
    pub hand_sprite_offset: Option<IVec2>,
    pub inv_width: Option<i32>,
    pub inv_height: Option<i32>,
    pub anim_frames: Option<u32>,
    pub list_order: Option<i32>,
}
