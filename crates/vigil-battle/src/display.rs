//! Enemy inventory display.
//!
//! Shows what a hostile unit holds in its hands: a grid layer with the
//! hand slot outlines and an items layer with the held item sprites.
//! The items layer is re-rendered on a fixed animation tick so animated
//! sprites cycle; the grid only changes when the unit does.

use glam::IVec2;
use hecs::Entity;

use vigil_core::constants::{ANIM_INTERVAL_MS, SCREEN_W, TRANSPARENT};
use vigil_core::enums::{MouseButton, SlotKind, UnitSize};
use vigil_core::events::UiRequest;
use vigil_core::types::Rect;
use vigil_ruleset::{RuleInventory, Ruleset};

use crate::battle::SavedBattle;
use crate::surface::{Surface, SurfaceSet};
use crate::timer::FrameTimer;

/// Grid color when the ruleset carries no inventory interface entry.
const GRID_COLOR_FALLBACK: u8 = 8;

/// Widget displaying a hostile unit's hand-held inventory.
pub struct EnemyInventory {
    rect: Rect,
    grid: Surface,
    items: Surface,
    selected: Option<Entity>,
    /// Extra outward shift of the hand slots for large units.
    dynamic_offset: i32,
    anim_frame: u32,
    timer: FrameTimer,
}

impl EnemyInventory {
    /// Sets up the display with the given size and position.
    pub fn new(width: i32, height: i32, x: i32, y: i32) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            grid: Surface::new(width, height),
            items: Surface::new(width, height),
            selected: None,
            dynamic_offset: 0,
            anim_frame: 0,
            timer: FrameTimer::new(ANIM_INTERVAL_MS),
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The currently displayed unit, if any.
    pub fn selected_unit(&self) -> Option<Entity> {
        self.selected
    }

    pub fn anim_frame(&self) -> u32 {
        self.anim_frame
    }

    /// Change the unit whose inventory is displayed.
    pub fn set_selected_unit(
        &mut self,
        battle: &SavedBattle,
        unit: Option<Entity>,
        rules: &Ruleset,
    ) {
        self.selected = unit;
        self.dynamic_offset = 0;
        if let Some(entity) = unit {
            if let Some(data) = battle.unit(entity) {
                if data.size == UnitSize::Large {
                    self.dynamic_offset = rules.ui().enemy_inventory_big_unit_offset;
                }
            }
        }
    }

    /// X shift applied to a hand section: the display-wide offset plus
    /// the dynamic offset pushing hands outward on large units.
    fn hand_x_shift(&self, section: &RuleInventory, rules: &Ruleset) -> i32 {
        let mut shift = rules.ui().enemy_inventory_offset_x;
        if section.is_right_hand() {
            shift -= self.dynamic_offset;
        } else if section.is_left_hand() {
            shift += self.dynamic_offset;
        }
        shift
    }

    /// Redraw both layers.
    pub fn draw(&mut self, battle: &SavedBattle, rules: &Ruleset, sprites: &SurfaceSet) {
        self.draw_grid(rules);
        self.draw_items(battle, rules, sprites);
    }

    /// Redraw the hand slot outlines.
    pub fn draw_grid(&mut self, rules: &Ruleset) {
        self.grid.clear();
        let color = rules
            .interface("inventory")
            .and_then(|i| i.element("grid"))
            .map_or(GRID_COLOR_FALLBACK, |e| e.color);

        for section in rules.inventories() {
            if section.kind != SlotKind::Hand {
                continue;
            }
            let shift = IVec2::new(self.hand_x_shift(section, rules), 0);
            let outer = section.bounding_rect().translated(shift);
            self.grid.fill_rect(&outer, color);
            self.grid.fill_rect(&outer.shrunk(1), TRANSPARENT);
        }
    }

    /// Redraw the sprites of the items held in the unit's hands.
    pub fn draw_items(&mut self, battle: &SavedBattle, rules: &Ruleset, sprites: &SurfaceSet) {
        self.items.clear();
        let Some(entity) = self.selected else {
            return;
        };
        let Some(inventory) = battle.inventory(entity) else {
            return;
        };

        for item in &inventory.items {
            let Some(section) = rules.inventory(&item.slot) else {
                continue;
            };
            if section.kind != SlotKind::Hand {
                continue;
            }
            let Some(rule) = rules.item(&item.item) else {
                continue;
            };
            // An absent sprite skips the item, nothing else.
            let Some(frame) = rule
                .sprite_index(self.anim_frame)
                .and_then(|index| sprites.frame(index))
            else {
                continue;
            };

            let shift = IVec2::new(self.hand_x_shift(section, rules), 0);
            let pos = section.pos + rule.hand_sprite_offset + shift;
            frame.blit_onto(&mut self.items, pos);
        }
    }

    /// The inventory section under a display-relative position.
    pub fn slot_in_position<'a>(
        &self,
        rules: &'a Ruleset,
        p: IVec2,
    ) -> Option<(&'a RuleInventory, IVec2)> {
        rules
            .inventories()
            .find_map(|section| section.slot_at(p).map(|cell| (section, cell)))
    }

    /// Dispatch a pointer click at an absolute screen position.
    ///
    /// Left and right dismiss the display. Middle looks up the item under
    /// the pointer and asks for its codex article, if one exists.
    pub fn handle_click(
        &self,
        button: MouseButton,
        absolute: IVec2,
        battle: &SavedBattle,
        rules: &Ruleset,
    ) -> Option<UiRequest> {
        match button {
            MouseButton::Left | MouseButton::Right => Some(UiRequest::CloseScreen),
            MouseButton::Middle => {
                let entity = self.selected?;
                let inventory = battle.inventory(entity)?;

                let mut p = absolute - self.rect.pos;
                // Undo the dynamic offset: hands on the right half of the
                // screen were shifted outward, hands on the left inward.
                if p.x >= SCREEN_W / 2 {
                    p.x -= self.dynamic_offset;
                } else {
                    p.x += self.dynamic_offset;
                }
                p.x -= rules.ui().enemy_inventory_offset_x;

                let (section, cell) = self.slot_in_position(rules, p)?;
                if section.kind != SlotKind::Hand {
                    return None;
                }
                let item = inventory.item_at(section, cell, rules)?;
                rules.article(&item.item).map(|article| UiRequest::OpenArticle {
                    id: article.id.clone(),
                })
            }
        }
    }

    /// Feed elapsed frame time; each expired animation interval advances
    /// the frame counter and re-renders the items layer only.
    pub fn think(
        &mut self,
        elapsed_ms: u32,
        battle: &SavedBattle,
        rules: &Ruleset,
        sprites: &SurfaceSet,
    ) {
        let fired = self.timer.advance(elapsed_ms);
        if fired > 0 {
            self.anim_frame = self.anim_frame.wrapping_add(fired);
            self.draw_items(battle, rules, sprites);
        }
    }

    /// Composite both layers onto `target` at the display position,
    /// items over grid.
    pub fn blit(&self, target: &mut Surface) {
        self.grid.blit_onto(target, self.rect.pos);
        self.items.blit_onto(target, self.rect.pos);
    }
}
