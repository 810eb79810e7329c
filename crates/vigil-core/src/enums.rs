//! Enumeration types used throughout the engine.

use serde::{Deserialize, Serialize};

/// Classification of an inventory section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotKind {
    /// Hand slot: a fixed 2×3-cell box, one item at a time.
    Hand,
    /// General section: an arbitrary set of grid cells (belt, backpack, ...).
    #[default]
    General,
    /// The ground under the unit's feet.
    Ground,
}

/// Which hand a hand section represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandSide {
    Left,
    Right,
}

/// Pointer button for click dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Battlefield footprint of a unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSize {
    /// 1×1 tile.
    #[default]
    Small,
    /// 2×2 tile. Hand slots are pushed outward when displayed.
    Large,
}

/// Damage types recognized by armor damage modifiers.
///
/// `Hidden` exists for rule entries that must participate in the modifier
/// table without ever being shown in the codex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DamageKind {
    ArmorPiercing,
    Incendiary,
    HighExplosive,
    Laser,
    Plasma,
    Stun,
    Melee,
    Acid,
    Smoke,
    Hidden,
}

impl DamageKind {
    /// Every damage kind, in modifier-table order.
    pub const ALL: [DamageKind; 10] = [
        DamageKind::ArmorPiercing,
        DamageKind::Incendiary,
        DamageKind::HighExplosive,
        DamageKind::Laser,
        DamageKind::Plasma,
        DamageKind::Stun,
        DamageKind::Melee,
        DamageKind::Acid,
        DamageKind::Smoke,
        DamageKind::Hidden,
    ];

    /// Number of damage kinds (modifier table length).
    pub const COUNT: usize = Self::ALL.len();

    /// Index into a damage modifier table.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&k| k == self).unwrap_or(0)
    }

    /// Codex label key, or `None` for kinds that are never displayed.
    pub fn label(self) -> Option<&'static str> {
        match self {
            DamageKind::ArmorPiercing => Some("damage-armor-piercing"),
            DamageKind::Incendiary => Some("damage-incendiary"),
            DamageKind::HighExplosive => Some("damage-high-explosive"),
            DamageKind::Laser => Some("damage-laser"),
            DamageKind::Plasma => Some("damage-plasma"),
            DamageKind::Stun => Some("damage-stun"),
            DamageKind::Melee => Some("damage-melee"),
            DamageKind::Acid => Some("damage-acid"),
            DamageKind::Smoke => Some("damage-smoke"),
            DamageKind::Hidden => None,
        }
    }
}
