#[cfg(test)]
mod tests {
    use glam::IVec2;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use vigil_core::enums::{DamageKind, HandSide, SlotKind, UnitSize};

    use crate::armor::{Armor, ArmorPatch, UnitStats};
    use crate::craft::{CraftStats, CraftStatsPatch, RangeKind, RuleCraft, WEAPON_TYPE_MAX};
    use crate::error::RulesetError;
    use crate::item::RuleItem;
    use crate::ruleset::{ArticleKind, Ruleset};

    fn sample_stats() -> CraftStats {
        CraftStats {
            fuel_max: 100,
            hull_max: 50,
            speed_max: 2000,
            accel: 3,
            radar_range: 600,
            radar_chance: 80,
            sight_range: 30,
            hit_bonus: 5,
            avoid_bonus: 2,
            power_bonus: 10,
            armor: 12,
            shield_capacity: 400,
            shield_recharge: 20,
            shield_recharge_in_flight: 5,
            shield_bleed_through: 50,
        }
    }

    // ---- Stat block algebra ----

    #[test]
    fn test_craft_stats_addition_commutative() {
        let a = sample_stats();
        let b = CraftStats {
            fuel_max: -20,
            speed_max: 500,
            shield_capacity: 100,
            ..CraftStats::default()
        };
        assert_eq!(a + b, b + a);
    }

    #[test]
    fn test_craft_stats_zero_identity() {
        let a = sample_stats();
        assert_eq!(a + CraftStats::default(), a);
        assert_eq!(CraftStats::default() + a, a);
    }

    #[test]
    fn test_craft_stats_subtraction_inverts_addition() {
        let base = sample_stats();
        let bonus = CraftStats {
            radar_range: 50,
            hit_bonus: 15,
            armor: -4,
            ..CraftStats::default()
        };
        let equipped = base + bonus;
        assert_eq!(equipped - bonus, base);
    }

    #[test]
    fn test_craft_stats_negation() {
        let a = sample_stats();
        assert_eq!(-a, CraftStats::default() - a);
        assert_eq!(a + -a, CraftStats::default());
    }

    #[test]
    fn test_craft_stats_patch_partial_override() {
        let mut stats = sample_stats();
        let patch: CraftStatsPatch =
            serde_json::from_str(r#"{ "speed_max": 2400, "armor": 20 }"#).unwrap();
        stats.apply(&patch);
        assert_eq!(stats.speed_max, 2400);
        assert_eq!(stats.armor, 20);
        // Unnamed fields keep their values.
        assert_eq!(stats.fuel_max, 100);
        assert_eq!(stats.shield_capacity, 400);
    }

    // ---- Craft rules ----

    #[test]
    fn test_craft_defaults() {
        let craft = RuleCraft::new("interceptor", 100);
        assert_eq!(craft.repair_rate, 1);
        assert_eq!(craft.refuel_rate, 1);
        assert_eq!(craft.transfer_time, 24);
        assert!(craft.allow_landing);
        assert!(craft.map_visible);
        assert!(!craft.spacecraft);
        assert_eq!(craft.max_altitude, -1);
        assert_eq!(craft.shield_recharge_at_base, 1000);
        assert_eq!(craft.weapon_slot_label(0), "craft-weapon-one");
        assert_eq!(craft.weapon_slot_label(1), "craft-weapon-two");
        assert_eq!(craft.weapon_slot_label(3), "");
        assert_eq!(craft.stats, CraftStats::default());
    }

    #[test]
    fn test_craft_weapon_slot_validation() {
        let mut craft = RuleCraft::new("gunship", 100);
        let patch = serde_json::from_str(
            r#"{ "id": "gunship", "weapons": 2, "weapon_types": [[0, 1], [2]] }"#,
        )
        .unwrap();
        craft.load(&patch);

        assert!(craft.is_valid_weapon_slot(0, 0));
        assert!(craft.is_valid_weapon_slot(0, 1));
        assert!(!craft.is_valid_weapon_slot(0, 2));
        assert!(craft.is_valid_weapon_slot(1, 2));
        assert!(!craft.is_valid_weapon_slot(1, 0));
        // Slots past the craft's weapon count never validate.
        assert!(!craft.is_valid_weapon_slot(2, 0));
    }

    #[test]
    fn test_craft_weapon_types_capped() {
        let mut craft = RuleCraft::new("gunship", 100);
        let many: Vec<u8> = (0..20).collect();
        let patch = crate::craft::CraftPatch {
            id: "gunship".into(),
            weapon_types: Some(vec![many]),
            ..Default::default()
        };
        craft.load(&patch);
        assert_eq!(craft.weapon_types[0].len(), WEAPON_TYPE_MAX);
    }

    #[test]
    fn test_craft_range_item_fuelled() {
        let mut craft = RuleCraft::new("interceptor", 100);
        let patch = serde_json::from_str(
            r#"{
                "id": "interceptor",
                "refuel_item": "craft-fuel-cell",
                "stats": { "fuel_max": 30, "speed_max": 1200 }
            }"#,
        )
        .unwrap();
        craft.load(&patch);

        // 1 fuel per interval, 200 nm per interval.
        assert_eq!(craft.operational_range(RangeKind::OneWay), 6000);
        assert_eq!(craft.operational_range(RangeKind::Radius), 3000);
    }

    #[test]
    fn test_craft_range_fuel_burning() {
        let mut craft = RuleCraft::new("transport", 100);
        let patch = serde_json::from_str(
            r#"{ "id": "transport", "stats": { "fuel_max": 1500, "speed_max": 600 } }"#,
        )
        .unwrap();
        craft.load(&patch);

        // Burns speed/100 = 6 per interval → 250 intervals at 100 nm each.
        assert_eq!(craft.operational_range(RangeKind::OneWay), 25_000);
        assert_eq!(craft.operational_range(RangeKind::Radius), 12_500);
    }

    #[test]
    fn test_craft_range_zero_without_speed_or_fuel() {
        let craft = RuleCraft::new("hulk", 100);
        assert_eq!(craft.operational_range(RangeKind::OneWay), 0);
    }

    #[test]
    fn test_craft_sound_selection() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut craft = RuleCraft::new("interceptor", 100);
        assert_eq!(craft.pick_takeoff_sound(&mut rng), None);

        craft.takeoff_sound = vec![14, 15, 16];
        for _ in 0..20 {
            let sound = craft.pick_takeoff_sound(&mut rng).unwrap();
            assert!(craft.takeoff_sound.contains(&sound));
        }
    }

    // ---- Armor rules ----

    #[test]
    fn test_armor_defaults_neutral() {
        let armor = Armor::new("scout-suit");
        assert_eq!(armor.front, 0);
        assert_eq!(armor.size, UnitSize::Small);
        for kind in DamageKind::ALL {
            assert_eq!(armor.damage_modifier(kind), 1.0);
        }
        assert_eq!(armor.stats, UnitStats::default());
    }

    #[test]
    fn test_armor_patch_modifiers_per_kind() {
        let mut armor = Armor::new("drone-carapace");
        let patch: ArmorPatch = serde_json::from_str(
            r#"{
                "id": "drone-carapace",
                "front": 50,
                "damage_modifiers": { "stun": 0.0, "incendiary": 1.2 },
                "stats": { "tu": 10, "firing": -5 }
            }"#,
        )
        .unwrap();
        armor.load(&patch);

        assert_eq!(armor.front, 50);
        assert_eq!(armor.damage_modifier(DamageKind::Stun), 0.0);
        assert_eq!(armor.damage_modifier(DamageKind::Incendiary), 1.2);
        // Unnamed kinds stay neutral.
        assert_eq!(armor.damage_modifier(DamageKind::Laser), 1.0);
        assert_eq!(armor.stats.tu, 10);
        assert_eq!(armor.stats.firing, -5);
    }

    #[test]
    fn test_unit_stats_algebra() {
        let a = UnitStats {
            tu: 50,
            firing: 60,
            ..UnitStats::default()
        };
        let bonus = UnitStats {
            tu: 10,
            firing: -5,
            ..UnitStats::default()
        };
        assert_eq!((a + bonus) - bonus, a);
        assert_eq!(a + -a, UnitStats::default());
    }

    // ---- Item rules ----

    #[test]
    fn test_item_sprite_index() {
        let mut item = RuleItem::new("plasma-rifle", 100);
        assert_eq!(item.sprite_index(0), None, "no sprite assigned yet");

        item.big_sprite = 6;
        assert_eq!(item.sprite_index(0), Some(6));
        assert_eq!(item.sprite_index(5), Some(6), "static sprite ignores frame");

        item.anim_frames = 4;
        assert_eq!(item.sprite_index(0), Some(6));
        assert_eq!(item.sprite_index(3), Some(9));
        assert_eq!(item.sprite_index(4), Some(6), "cycle wraps");
    }

    // ---- Inventory sections ----

    fn hand_section(id: &str, side: HandSide, x: i32, y: i32) -> crate::inventory::RuleInventory {
        let mut section = crate::inventory::RuleInventory::new(id, 100);
        section.kind = SlotKind::Hand;
        section.hand = Some(side);
        section.pos = IVec2::new(x, y);
        section
    }

    #[test]
    fn test_hand_section_hit_test() {
        let section = hand_section("right-hand", HandSide::Right, 0, 64);
        // Hand box is 2×3 cells of 16×16 = 32×48 pixels.
        assert_eq!(section.slot_at(IVec2::new(0, 64)), Some(IVec2::ZERO));
        assert_eq!(section.slot_at(IVec2::new(31, 111)), Some(IVec2::ZERO));
        assert_eq!(section.slot_at(IVec2::new(32, 64)), None);
        assert_eq!(section.slot_at(IVec2::new(0, 112)), None);
        assert_eq!(section.slot_at(IVec2::new(-1, 64)), None);
        assert!(section.is_right_hand());
        assert!(!section.is_left_hand());
    }

    #[test]
    fn test_general_section_hit_test() {
        let mut belt = crate::inventory::RuleInventory::new("belt", 100);
        belt.kind = SlotKind::General;
        belt.pos = IVec2::new(64, 120);
        belt.cells = vec![
            IVec2::new(0, 0),
            IVec2::new(1, 0),
            IVec2::new(2, 0),
            IVec2::new(0, 1),
        ];

        assert_eq!(belt.slot_at(IVec2::new(64, 120)), Some(IVec2::new(0, 0)));
        assert_eq!(belt.slot_at(IVec2::new(97, 125)), Some(IVec2::new(2, 0)));
        assert_eq!(belt.slot_at(IVec2::new(70, 137)), Some(IVec2::new(0, 1)));
        // Cell (1,1) is not part of the section.
        assert_eq!(belt.slot_at(IVec2::new(85, 137)), None);
        assert_eq!(belt.slot_at(IVec2::new(63, 120)), None);

        let rect = belt.bounding_rect();
        assert_eq!(rect.pos, IVec2::new(64, 120));
        assert_eq!(rect.size, IVec2::new(48, 32));
    }

    // ---- Registry ----

    #[test]
    fn test_ruleset_document_stacking() {
        let mut rules = Ruleset::new();
        rules
            .load_str(
                "base",
                r#"{
                    "crafts": [{
                        "id": "interceptor",
                        "weapons": 2,
                        "stats": { "fuel_max": 1000, "speed_max": 2100 }
                    }]
                }"#,
            )
            .unwrap();
        rules
            .load_str(
                "mod",
                r#"{
                    "crafts": [{
                        "id": "interceptor",
                        "stats": { "speed_max": 2700 }
                    }]
                }"#,
            )
            .unwrap();

        let craft = rules.craft("interceptor").unwrap();
        // The mod only touched speed; everything else survives.
        assert_eq!(craft.stats.speed_max, 2700);
        assert_eq!(craft.stats.fuel_max, 1000);
        assert_eq!(craft.weapons, 2);
    }

    #[test]
    fn test_ruleset_list_order_assignment() {
        let mut rules = Ruleset::new();
        rules
            .load_str(
                "base",
                r#"{
                    "items": [
                        { "id": "alpha" },
                        { "id": "beta" },
                        { "id": "gamma", "list_order": 5 }
                    ]
                }"#,
            )
            .unwrap();
        assert_eq!(rules.item("alpha").unwrap().list_order, 100);
        assert_eq!(rules.item("beta").unwrap().list_order, 200);
        assert_eq!(rules.item("gamma").unwrap().list_order, 5);
    }

    #[test]
    fn test_ruleset_strings_fallback() {
        let mut rules = Ruleset::new();
        rules
            .load_str("base", r#"{ "strings": { "armor-front": "Front armor" } }"#)
            .unwrap();
        assert_eq!(rules.tr("armor-front"), "Front armor");
        assert_eq!(rules.tr("missing-key"), "missing-key");
    }

    #[test]
    fn test_ruleset_ui_patch() {
        let mut rules = Ruleset::new();
        assert_eq!(rules.ui().enemy_inventory_offset_x, 80);
        assert_eq!(rules.ui().enemy_inventory_big_unit_offset, 32);

        rules
            .load_str("mod", r#"{ "ui": { "enemy_inventory_offset_x": 96 } }"#)
            .unwrap();
        assert_eq!(rules.ui().enemy_inventory_offset_x, 96);
        assert_eq!(rules.ui().enemy_inventory_big_unit_offset, 32);
    }

    #[test]
    fn test_ruleset_rejects_unknown_fields() {
        let mut rules = Ruleset::new();
        let err = rules
            .load_str("typo", r#"{ "crafts": [{ "id": "x", "speeed": 1 }] }"#)
            .unwrap_err();
        assert!(matches!(err, RulesetError::Parse { .. }));
    }

    #[test]
    fn test_ruleset_require_lookups() {
        let rules = Ruleset::new();
        assert!(rules.armor("nope").is_none());
        assert!(matches!(
            rules.require_armor("nope"),
            Err(RulesetError::UnknownArmor(_))
        ));
        assert!(matches!(
            rules.require_article("nope"),
            Err(RulesetError::UnknownArticle(_))
        ));
    }

    #[test]
    fn test_ruleset_validate_findings() {
        let mut rules = Ruleset::new();
        rules
            .load_str(
                "broken",
                r#"{
                    "crafts": [{ "id": "interceptor", "refuel_item": "no-such-item" }],
                    "inventories": [{ "id": "right-hand", "kind": "Hand" }],
                    "articles": [{ "id": "ghost-armor", "kind": "armor" }],
                    "armors": [{ "id": "bad-suit", "damage_modifiers": { "laser": -0.5 } }]
                }"#,
            )
            .unwrap();

        let findings = rules.validate();
        assert!(findings.iter().any(|f| f.contains("no-such-item")));
        assert!(findings.iter().any(|f| f.contains("without a hand side")));
        assert!(findings.iter().any(|f| f.contains("ghost-armor")));
        assert!(findings.iter().any(|f| f.contains("negative damage modifier")));
    }

    #[test]
    fn test_ruleset_article_kinds() {
        let mut rules = Ruleset::new();
        rules
            .load_str(
                "base",
                r#"{
                    "armors": [{ "id": "drone-carapace" }],
                    "articles": [{ "id": "drone-carapace", "kind": "armor" }]
                }"#,
            )
            .unwrap();
        let article = rules.article("drone-carapace").unwrap();
        assert_eq!(article.kind, ArticleKind::Armor);
        assert!(rules.validate().is_empty());
    }

    #[test]
    fn test_load_shipped_base_rules() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../rules/base.json");
        let mut rules = Ruleset::new();
        rules.load_file(&path).unwrap();

        let craft = rules.craft("interceptor").unwrap();
        assert!(craft.stats.speed_max > 0);
        assert!(rules.armor("drone-carapace").is_some());
        assert!(rules.inventory("right-hand").is_some());
        assert!(rules.inventory("left-hand").is_some());
        assert!(rules.interface("inventory").is_some());

        let findings = rules.validate();
        assert!(findings.is_empty(), "shipped rules must lint clean: {findings:?}");
    }
}
