//! Inventory section rules: named slot regions with pixel geometry.
//!
//! Sections serve double duty: the display layer draws them, and pointer
//! coordinates are mapped back through them to semantic slots.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use vigil_core::constants::{HAND_H, HAND_W, SCREEN_H, SCREEN_W, SLOT_H, SLOT_W};
use vigil_core::enums::{HandSide, SlotKind};
use vigil_core::types::Rect;

/// A named inventory section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleInventory {
    pub id: String,
    pub kind: SlotKind,
    /// Which hand this section represents. Only meaningful for `Hand` kind.
    pub hand: Option<HandSide>,
    /// Top-left corner in widget-relative pixels.
    pub pos: IVec2,
    /// Occupied cells in slot units. Only used by `General` sections.
    pub cells: Vec<IVec2>,
    pub list_order: i32,
}

impl RuleInventory {
    /// Blank section ruleset with the given id and list position.
    pub fn new(id: &str, list_order: i32) -> Self {
        Self {
            id: id.to_string(),
            kind: SlotKind::General,
            hand: None,
            pos: IVec2::ZERO,
            cells: Vec::new(),
            list_order,
        }
    }

    pub fn is_left_hand(&self) -> bool {
        self.hand == Some(HandSide::Left)
    }

    pub fn is_right_hand(&self) -> bool {
        self.hand == Some(HandSide::Right)
    }

    /// Pixel bounding box of the section.
    pub fn bounding_rect(&self) -> Rect {
        match self.kind {
            SlotKind::Hand => Rect::from_cells(self.pos, HAND_W, HAND_H, SLOT_W, SLOT_H),
            SlotKind::General => {
                if self.cells.is_empty() {
                    return Rect {
                        pos: self.pos,
                        size: IVec2::ZERO,
                    };
                }
                let min = self
                    .cells
                    .iter()
                    .fold(IVec2::MAX, |acc, c| acc.min(*c));
                let max = self
                    .cells
                    .iter()
                    .fold(IVec2::MIN, |acc, c| acc.max(*c));
                Rect {
                    pos: self.pos + min * IVec2::new(SLOT_W, SLOT_H),
                    size: (max - min + IVec2::ONE) * IVec2::new(SLOT_W, SLOT_H),
                }
            }
            SlotKind::Ground => Rect {
                pos: self.pos,
                size: IVec2::new(SCREEN_W - self.pos.x, SCREEN_H - self.pos.y),
            },
        }
    }

    /// Map a widget-relative pixel coordinate to a cell in this section.
    ///
    /// Hand sections are a single logical slot and always report cell (0,0).
    pub fn slot_at(&self, p: IVec2) -> Option<IVec2> {
        match self.kind {
            SlotKind::Hand => self.bounding_rect().contains(p).then_some(IVec2::ZERO),
            SlotKind::General => {
                let rel = p - self.pos;
                if rel.x < 0 || rel.y < 0 {
                    return None;
                }
                let cell = IVec2::new(rel.x / SLOT_W, rel.y / SLOT_H);
                self.cells.contains(&cell).then_some(cell)
            }
            SlotKind::Ground => {
                let rect = self.bounding_rect();
                if !rect.contains(p) {
                    return None;
                }
                let rel = p - self.pos;
                Some(IVec2::new(rel.x / SLOT_W, rel.y / SLOT_H))
            }
        }
    }

    /// Merge a rule document patch over the current values.
    pub fn load(&mut self, patch: &InventoryPatch) {
        if let Some(v) = patch.kind {
            self.kind = v;
        }
        if let Some(v) = patch.hand {
            self.hand = Some(v);
        }
        if let Some(v) = patch.pos {
            self.pos = v;
        }
        if let Some(v) = &patch.cells {
            self.cells = v.clone();
        }
        if let Some(v) = patch.list_order {
            self.list_order = v;
        }
    }
}

/// Partial section record as it appears in rule documents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InventoryPatch {
    pub id: String,
    pub kind: Option<SlotKind>,
    pub hand: Option<HandSide>,
    pub pos: Option<IVec2>,
    pub cells: Option<Vec<IVec2>>,
    pub list_order: Option<i32>,
}
