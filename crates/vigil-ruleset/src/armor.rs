//! Armor type rules and the unit stat block.

use std::collections::BTreeMap;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use vigil_core::enums::{DamageKind, UnitSize};

/// Unit statistics. On an armor rule these are *bonuses* applied on top
/// of the wearer's own stats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitStats {
    pub tu: i32,
    pub stamina: i32,
    pub health: i32,
    pub bravery: i32,
    pub reactions: i32,
    pub firing: i32,
    pub throwing: i32,
    pub melee: i32,
    pub strength: i32,
    pub psi_strength: i32,
    pub psi_skill: i32,
}

impl AddAssign for UnitStats {
    fn add_assign(&mut self, r: UnitStats) {
        self.tu += r.tu;
        self.stamina += r.stamina;
        self.health += r.health;
        self.bravery += r.bravery;
        self.reactions += r.reactions;
        self.firing += r.firing;
        self.throwing += r.throwing;
        self.melee += r.melee;
        self.strength += r.strength;
        self.psi_strength += r.psi_strength;
        self.psi_skill += r.psi_skill;
    }
}

impl Add for UnitStats {
    type Output = UnitStats;

    fn add(mut self, r: UnitStats) -> UnitStats {
        self += r;
        self
    }
}

impl SubAssign for UnitStats {
    fn sub_assign(&mut self, r: UnitStats) {
        self.tu -= r.tu;
        self.stamina -= r.stamina;
        self.health -= r.health;
        self.bravery -= r.bravery;
        self.reactions -= r.reactions;
        self.firing -= r.firing;
        self.throwing -= r.throwing;
        self.melee -= r.melee;
        self.strength -= r.strength;
        self.psi_strength -= r.psi_strength;
        self.psi_skill -= r.psi_skill;
    }
}

impl Sub for UnitStats {
    type Output = UnitStats;

    fn sub(mut self, r: UnitStats) -> UnitStats {
        self -= r;
        self
    }
}

impl Neg for UnitStats {
    type Output = UnitStats;

    fn neg(self) -> UnitStats {
        UnitStats::default() - self
    }
}

impl UnitStats {
    /// Override each field named by the patch; the rest keep their value.
    pub fn apply(&mut self, patch: &UnitStatsPatch) {
        if let Some(v) = patch.tu {
            self.tu = v;
        }
        if let Some(v) = patch.stamina {
            self.stamina = v;
        }
        if let Some(v) = patch.health {
            self.health = v;
        }
        if let Some(v) = patch.bravery {
            self.bravery = v;
        }
        if let Some(v) = patch.reactions {
            self.reactions = v;
        }
        if let Some(v) = patch.firing {
            self.firing = v;
        }
        if let Some(v) = patch.throwing {
            self.throwing = v;
        }
        if let Some(v) = patch.melee {
            self.melee = v;
        }
        if let Some(v) = patch.strength {
            self.strength = v;
        }
        if let Some(v) = patch.psi_strength {
            self.psi_strength = v;
        }
        if let Some(v) = patch.psi_skill {
            self.psi_skill = v;
        }
    }
}

/// Partial unit stat block as it appears in rule documents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UnitStatsPatch {
    pub tu: Option<i32>,
    pub stamina: Option<i32>,
    pub health: Option<i32>,
    pub bravery: Option<i32>,
    pub reactions: Option<i32>,
    pub firing: Option<i32>,
    pub throwing: Option<i32>,
    pub melee: Option<i32>,
    pub strength: Option<i32>,
    pub psi_strength: Option<i32>,
    pub psi_skill: Option<i32>,
}

/// A specific armor type worn by units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Armor {
    pub id: String,
    pub front: i32,
    pub left_side: i32,
    pub right_side: i32,
    pub rear: i32,
    pub under: i32,
    /// Incoming damage is scaled by the modifier for its kind.
    pub damage_modifiers: [f32; DamageKind::COUNT],
    /// Stat bonuses granted to the wearer.
    pub stats: UnitStats,
    pub size: UnitSize,
}

impl Armor {
    /// Blank armor ruleset: no protection, neutral modifiers.
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            front: 0,
            left_side: 0,
            right_side: 0,
            rear: 0,
            under: 0,
            damage_modifiers: [1.0; DamageKind::COUNT],
            stats: UnitStats::default(),
            size: UnitSize::Small,
        }
    }

    /// Damage scale factor for one damage kind.
    pub fn damage_modifier(&self, kind: DamageKind) -> f32 {
        self.damage_modifiers[kind.index()]
    }

    /// Merge a rule document patch over the current values.
    pub fn load(&mut self, patch: &ArmorPatch) {
        if let Some(v) = patch.front {
            self.front = v;
        }
        if let Some(v) = patch.left_side {
            self.left_side = v;
        }
        if let Some(v) = patch.right_side {
            self.right_side = v;
        }
        if let Some(v) = patch.rear {
            self.rear = v;
        }
        if let Some(v) = patch.under {
            self.under = v;
        }
        if let Some(mods) = &patch.damage_modifiers {
            for (&kind, &factor) in mods {
                self.damage_modifiers[kind.index()] = factor;
            }
        }
        if let Some(stats) = &patch.stats {
            self.stats.apply(stats);
        }
        if let Some(v) = patch.size {
            self.size = v;
        }
    }
}

/// Partial armor record as it appears in rule documents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArmorPatch {
    pub id: String,
    pub front: Option<i32>,
    pub left_side: Option<i32>,
    pub right_side: Option<i32>,
    pub rear: Option<i32>,
    pub under: Option<i32>,
    /// Per-kind overrides; unnamed kinds keep their factor.
    pub damage_modifiers: Option<BTreeMap<DamageKind, f32>>,
    pub stats: Option<UnitStatsPatch>,
    pub size: Option<UnitSize>,
}
