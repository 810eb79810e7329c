//! Craft type rules: the numeric stat block and the full craft record.

use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Maximum number of weapon slots on a craft.
pub const WEAPON_MAX: usize = 4;

/// Maximum number of different weapon types one slot accepts.
pub const WEAPON_TYPE_MAX: usize = 8;

/// Battle statistics of a craft type, also used for craft-weapon bonuses.
///
/// Equipping a weapon adds its stat block to the craft's base block;
/// unequipping subtracts the same block. All fields are independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CraftStats {
    pub fuel_max: i32,
    pub hull_max: i32,
    pub speed_max: i32,
    pub accel: i32,
    pub radar_range: i32,
    pub radar_chance: i32,
    pub sight_range: i32,
    pub hit_bonus: i32,
    pub avoid_bonus: i32,
    pub power_bonus: i32,
    pub armor: i32,
    pub shield_capacity: i32,
    pub shield_recharge: i32,
    pub shield_recharge_in_flight: i32,
    pub shield_bleed_through: i32,
}

impl AddAssign for CraftStats {
    fn add_assign(&mut self, r: CraftStats) {
        self.fuel_max += r.fuel_max;
        self.hull_max += r.hull_max;
        self.speed_max += r.speed_max;
        self.accel += r.accel;
        self.radar_range += r.radar_range;
        self.radar_chance += r.radar_chance;
        self.sight_range += r.sight_range;
        self.hit_bonus += r.hit_bonus;
        self.avoid_bonus += r.avoid_bonus;
        self.power_bonus += r.power_bonus;
        self.armor += r.armor;
        self.shield_capacity += r.shield_capacity;
        self.shield_recharge += r.shield_recharge;
        self.shield_recharge_in_flight += r.shield_recharge_in_flight;
        self.shield_bleed_through += r.shield_bleed_through;
    }
}

impl Add for CraftStats {
    type Output = CraftStats;

    fn add(mut self, r: CraftStats) -> CraftStats {
        self += r;
        self
    }
}

impl SubAssign for CraftStats {
    fn sub_assign(&mut self, r: CraftStats) {
        self.fuel_max -= r.fuel_max;
        self.hull_max -= r.hull_max;
        self.speed_max -= r.speed_max;
        self.accel -= r.accel;
        self.radar_range -= r.radar_range;
        self.radar_chance -= r.radar_chance;
        self.sight_range -= r.sight_range;
        self.hit_bonus -= r.hit_bonus;
        self.avoid_bonus -= r.avoid_bonus;
        self.power_bonus -= r.power_bonus;
        self.armor -= r.armor;
        self.shield_capacity -= r.shield_capacity;
        self.shield_recharge -= r.shield_recharge;
        self.shield_recharge_in_flight -= r.shield_recharge_in_flight;
        self.shield_bleed_through -= r.shield_bleed_through;
    }
}

impl Sub for CraftStats {
    type Output = CraftStats;

    fn sub(mut self, r: CraftStats) -> CraftStats {
        self -= r;
        self
    }
}

impl Neg for CraftStats {
    type Output = CraftStats;

    fn neg(self) -> CraftStats {
        CraftStats::default() - self
    }
}

impl CraftStats {
    /// Override each field named by the patch; the rest keep their value.
    pub fn apply(&mut self, patch: &CraftStatsPatch) {
        if let Some(v) = patch.fuel_max {
            self.fuel_max = v;
        }
        if let Some(v) = patch.hull_max {
            self.hull_max = v;
        }
        if let Some(v) = patch.speed_max {
            self.speed_max = v;
        }
        if let Some(v) = patch.accel {
            self.accel = v;
        }
        if let Some(v) = patch.radar_range {
            self.radar_range = v;
        }
        if let Some(v) = patch.radar_chance {
            self.radar_chance = v;
        }
        if let Some(v) = patch.sight_range {
            self.sight_range = v;
        }
        if let Some(v) = patch.hit_bonus {
            self.hit_bonus = v;
        }
        if let Some(v) = patch.avoid_bonus {
            self.avoid_bonus = v;
        }
        if let Some(v) = patch.power_bonus {
            self.power_bonus = v;
        }
        if let Some(v) = patch.armor {
            self.armor = v;
        }
        if let Some(v) = patch.shield_capacity {
            self.shield_capacity = v;
        }
        if let Some(v) = patch.shield_recharge {
            self.shield_recharge = v;
        }
        if let Some(v) = patch.shield_recharge_in_flight {
            self.shield_recharge_in_flight = v;
        }
        if let Some(v) = patch.shield_bleed_through {
            self.shield_bleed_through = v;
        }
    }
}

/// Partial stat block as it appears in rule documents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CraftStatsPatch {
    pub fuel_max: Option<i32>,
    pub hull_max: Option<i32>,
    pub speed_max: Option<i32>,
    pub accel: Option<i32>,
    pub radar_range: Option<i32>,
    pub radar_chance: Option<i32>,
    pub sight_range: Option<i32>,
    pub hit_bonus: Option<i32>,
    pub avoid_bonus: Option<i32>,
    pub power_bonus: Option<i32>,
    pub armor: Option<i32>,
    pub shield_capacity: Option<i32>,
    pub shield_recharge: Option<i32>,
    pub shield_recharge_in_flight: Option<i32>,
    pub shield_bleed_through: Option<i32>,
}

/// Which theoretical range figure to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeKind {
    /// Total distance on a full tank, one way.
    OneWay,
    /// Operational radius: the craft has to make it back to base.
    Radius,
}

/// A specific craft type: capacities, economy, weapon slots, stat block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleCraft {
    pub id: String,
    /// Research ids required before the craft appears.
    pub requires: Vec<String>,
    pub sprite: i32,
    /// Map marker sprite (-1 = default for the craft's side).
    pub marker: i32,
    pub weapons: usize,
    pub soldiers: i32,
    pub pilots: i32,
    pub vehicles: i32,
    pub max_items: i32,
    pub max_storage_space: f64,
    pub cost_buy: i32,
    pub cost_rent: i32,
    pub cost_sell: i32,
    /// Item consumed for refuelling; `None` burns generic fuel.
    pub refuel_item: Option<String>,
    /// Hull points repaired per maintenance cycle.
    pub repair_rate: i32,
    /// Fuel units loaded per maintenance cycle.
    pub refuel_rate: i32,
    /// Hours to transfer the craft between bases.
    pub transfer_time: i32,
    /// Score penalty when the craft is lost.
    pub score: i32,
    pub allow_landing: bool,
    pub spacecraft: bool,
    pub auto_patrol: bool,
    pub undetectable: bool,
    pub keep_after_failed_mission: bool,
    pub notify_when_refueled: bool,
    pub water_only: bool,
    pub map_visible: bool,
    pub force_show_in_monthly_costs: bool,
    /// Highest altitude band the craft can engage at (-1 = unrestricted).
    pub max_altitude: i32,
    pub list_order: i32,
    /// Shield points recharged per hour while docked.
    pub shield_recharge_at_base: i32,
    /// Base stat block. Equipment bonuses are added on top by the caller.
    pub stats: CraftStats,
    /// Weapon type codes accepted by each slot.
    pub weapon_types: [Vec<u8>; WEAPON_MAX],
    /// Label key shown for each weapon slot.
    pub weapon_strings: [String; WEAPON_MAX],
    /// Built-in weapon mounted in a slot, if any.
    pub fixed_weapons: [Option<String>; WEAPON_MAX],
    pub select_sound: Vec<i32>,
    pub takeoff_sound: Vec<i32>,
}

impl RuleCraft {
    /// Blank craft ruleset with the given id and list position.
    pub fn new(id: &str, list_order: i32) -> Self {
        Self {
            id: id.to_string(),
            requires: Vec::new(),
            sprite: -1,
            marker: -1,
            weapons: 0,
            soldiers: 0,
            pilots: 0,
            vehicles: 0,
            max_items: 0,
            max_storage_space: 0.0,
            cost_buy: 0,
            cost_rent: 0,
            cost_sell: 0,
            refuel_item: None,
            repair_rate: 1,
            refuel_rate: 1,
            transfer_time: 24,
            score: 0,
            allow_landing: true,
            spacecraft: false,
            auto_patrol: false,
            undetectable: false,
            keep_after_failed_mission: false,
            notify_when_refueled: false,
            water_only: false,
            map_visible: true,
            force_show_in_monthly_costs: false,
            max_altitude: -1,
            list_order,
            shield_recharge_at_base: 1000,
            stats: CraftStats::default(),
            weapon_types: std::array::from_fn(|_| vec![0]),
            weapon_strings: [
                "craft-weapon-one".to_string(),
                "craft-weapon-two".to_string(),
                String::new(),
                String::new(),
            ],
            fixed_weapons: std::array::from_fn(|_| None),
            select_sound: Vec::new(),
            takeoff_sound: Vec::new(),
        }
    }

    /// Merge a rule document patch over the current values.
    pub fn load(&mut self, patch: &CraftPatch) {
        if let Some(v) = &patch.requires {
            self.requires = v.clone();
        }
        if let Some(v) = patch.sprite {
            self.sprite = v;
        }
        if let Some(v) = patch.marker {
            self.marker = v;
        }
        if let Some(v) = patch.weapons {
            self.weapons = v.min(WEAPON_MAX);
        }
        if let Some(v) = patch.soldiers {
            self.soldiers = v;
        }
        if let Some(v) = patch.pilots {
            self.pilots = v;
        }
        if let Some(v) = patch.vehicles {
            self.vehicles = v;
        }
        if let Some(v) = patch.max_items {
            self.max_items = v;
        }
        if let Some(v) = patch.max_storage_space {
            self.max_storage_space = v;
        }
        if let Some(v) = patch.cost_buy {
            self.cost_buy = v;
        }
        if let Some(v) = patch.cost_rent {
            self.cost_rent = v;
        }
        if let Some(v) = patch.cost_sell {
            self.cost_sell = v;
        }
        if let Some(v) = &patch.refuel_item {
            self.refuel_item = Some(v.clone());
        }
        if let Some(v) = patch.repair_rate {
            self.repair_rate = v;
        }
        if let Some(v) = patch.refuel_rate {
            self.refuel_rate = v;
        }
        if let Some(v) = patch.transfer_time {
            self.transfer_time = v;
        }
        if let Some(v) = patch.score {
            self.score = v;
        }
        if let Some(v) = patch.allow_landing {
            self.allow_landing = v;
        }
        if let Some(v) = patch.spacecraft {
            self.spacecraft = v;
        }
        if let Some(v) = patch.auto_patrol {
            self.auto_patrol = v;
        }
        if let Some(v) = patch.undetectable {
            self.undetectable = v;
        }
        if let Some(v) = patch.keep_after_failed_mission {
            self.keep_after_failed_mission = v;
        }
        if let Some(v) = patch.notify_when_refueled {
            self.notify_when_refueled = v;
        }
        if let Some(v) = patch.water_only {
            self.water_only = v;
        }
        if let Some(v) = patch.map_visible {
            self.map_visible = v;
        }
        if let Some(v) = patch.force_show_in_monthly_costs {
            self.force_show_in_monthly_costs = v;
        }
        if let Some(v) = patch.max_altitude {
            self.max_altitude = v;
        }
        if let Some(v) = patch.list_order {
            self.list_order = v;
        }
        if let Some(v) = patch.shield_recharge_at_base {
            self.shield_recharge_at_base = v;
        }
        if let Some(stats) = &patch.stats {
            self.stats.apply(stats);
        }
        if let Some(rows) = &patch.weapon_types {
            // Each provided row replaces the slot's accepted types entirely,
            // capped at WEAPON_TYPE_MAX entries.
            for (slot, row) in rows.iter().take(WEAPON_MAX).enumerate() {
                let mut types = row.clone();
                types.truncate(WEAPON_TYPE_MAX);
                self.weapon_types[slot] = types;
            }
        }
        if let Some(labels) = &patch.weapon_strings {
            for (slot, label) in labels.iter().take(WEAPON_MAX).enumerate() {
                self.weapon_strings[slot] = label.clone();
            }
        }
        if let Some(fixed) = &patch.fixed_weapons {
            for (slot, weapon) in fixed.iter().take(WEAPON_MAX).enumerate() {
                self.fixed_weapons[slot] = weapon.clone();
            }
        }
        if let Some(v) = &patch.select_sound {
            self.select_sound = v.clone();
        }
        if let Some(v) = &patch.takeoff_sound {
            self.takeoff_sound = v.clone();
        }
    }

    /// Whether `weapon_type` may be mounted in `slot`.
    pub fn is_valid_weapon_slot(&self, slot: usize, weapon_type: u8) -> bool {
        slot < self.weapons && self.weapon_types[slot].contains(&weapon_type)
    }

    /// Label key for a weapon slot.
    pub fn weapon_slot_label(&self, slot: usize) -> &str {
        self.weapon_strings.get(slot).map_or("", |s| s.as_str())
    }

    /// Built-in weapon id for a slot, if the slot has one.
    pub fn fixed_weapon_in_slot(&self, slot: usize) -> Option<&str> {
        self.fixed_weapons.get(slot).and_then(|w| w.as_deref())
    }

    /// Theoretical range in nautical miles.
    ///
    /// Item-fuelled craft burn 1 fuel per 10-minute interval; others burn
    /// `speed_max / 100` per interval. Each interval covers `speed_max / 6` nm.
    pub fn operational_range(&self, kind: RangeKind) -> i32 {
        if self.stats.speed_max <= 0 || self.stats.fuel_max <= 0 {
            return 0;
        }
        let burn_per_interval = if self.refuel_item.is_some() {
            1
        } else {
            (self.stats.speed_max / 100).max(1)
        };
        let intervals = self.stats.fuel_max / burn_per_interval;
        let one_way = intervals * (self.stats.speed_max / 6);
        match kind {
            RangeKind::OneWay => one_way,
            RangeKind::Radius => one_way / 2,
        }
    }

    /// Sound played when the player selects the craft on the map.
    pub fn pick_select_sound<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<i32> {
        self.select_sound.choose(rng).copied()
    }

    /// Sound played when the craft takes off from a base.
    pub fn pick_takeoff_sound<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<i32> {
        self.takeoff_sound.choose(rng).copied()
    }
}

/// Partial craft record as it appears in rule documents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CraftPatch {
    pub id: String,
    pub requires: Option<Vec<String>>,
    pub sprite: Option<i32>,
    pub marker: Option<i32>,
    pub weapons: Option<usize>,
    pub soldiers: Option<i32>,
    pub pilots: Option<i32>,
    pub vehicles: Option<i32>,
    pub max_items: Option<i32>,
    pub max_storage_space: Option<f64>,
    pub cost_buy: Option<i32>,
    pub cost_rent: Option<i32>,
    pub cost_sell: Option<i32>,
    pub refuel_item: Option<String>,
    pub repair_rate: Option<i32>,
    pub refuel_rate: Option<i32>,
    pub transfer_time: Option<i32>,
    pub score: Option<i32>,
    pub allow_landing: Option<bool>,
    pub spacecraft: Option<bool>,
    pub auto_patrol: Option<bool>,
    pub undetectable: Option<bool>,
    pub keep_after_failed_mission: Option<bool>,
    pub notify_when_refueled: Option<bool>,
    pub water_only: Option<bool>,
    pub map_visible: Option<bool>,
    pub force_show_in_monthly_costs: Option<bool>,
    pub max_altitude: Option<i32>,
    pub list_order: Option<i32>,
    pub shield_recharge_at_base: Option<i32>,
    pub stats: Option<CraftStatsPatch>,
    pub weapon_types: Option<Vec<Vec<u8>>>,
    pub weapon_strings: Option<Vec<String>>,
    pub fixed_weapons: Option<Vec<Option<String>>>,
    pub select_sound: Option<Vec<i32>>,
    pub takeoff_sound: Option<Vec<i32>>,
}
