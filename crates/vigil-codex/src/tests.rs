#[cfg(test)]
mod tests {
    use vigil_core::enums::MouseButton;
    use vigil_core::events::UiRequest;
    use vigil_ruleset::{Ruleset, RulesetError};

    use crate::armor_article::ArmorArticle;
    use crate::article::open_article;
    use crate::format::{format_percentage, format_signed};
    use crate::text_list::TextList;

    fn test_rules() -> Ruleset {
        let mut rules = Ruleset::new();
        rules
            .load_str(
                "test",
                r#"{
                    "interfaces": [
                        { "id": "codex-article", "elements": { "stat-list": { "color": 244, "color2": 208 } } }
                    ],
                    "armors": [
                        {
                            "id": "drone-carapace",
                            "front": 50, "left_side": 40, "right_side": 40, "rear": 30, "under": 20,
                            "damage_modifiers": { "incendiary": 1.2, "stun": 0.0, "smoke": 0.0 },
                            "stats": { "tu": 10, "firing": -5 }
                        },
                        { "id": "bare-hide", "front": 12 },
                        { "id": "null-suit" }
                    ],
                    "articles": [
                        { "id": "drone-carapace", "kind": "armor" },
                        { "id": "bare-hide", "kind": "armor" },
                        { "id": "null-suit", "kind": "armor" },
                        { "id": "ghost-armor", "kind": "armor" }
                    ],
                    "strings": {
                        "armor-front": "Front armor",
                        "armor-left": "Left armor",
                        "armor-right": "Right armor",
                        "armor-rear": "Rear armor",
                        "armor-under": "Under armor",
                        "damage-incendiary": "Incendiary",
                        "damage-stun": "Stun",
                        "damage-smoke": "Smoke",
                        "stat-tu": "Time units",
                        "stat-firing": "Firing accuracy"
                    }
                }"#,
            )
            .unwrap();
        rules
    }

    // ---- Formatters ----

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(120), "120%");
        assert_eq!(format_percentage(0), "0%");
    }

    #[test]
    fn test_format_signed() {
        assert_eq!(format_signed(12), "+12");
        assert_eq!(format_signed(-3), "-3");
        assert_eq!(format_signed(0), "0");
    }

    // ---- TextList ----

    #[test]
    fn test_text_list_rows_and_colors() {
        let mut list = TextList::new(vec![10, 4], 5);
        list.add_row(&["Speed", "90"]);
        list.add_row(&[]);
        list.add_row(&["Armor", "12"]);
        list.set_cell_color(0, 1, 9);

        assert_eq!(list.row_count(), 3);
        assert!(list.is_separator(1));
        assert!(!list.is_separator(0));
        assert_eq!(list.cell(0, 0).unwrap().color, 5);
        assert_eq!(list.cell(0, 1).unwrap().color, 9);
        assert_eq!(list.cell(2, 1).unwrap().text, "12");

        // Out-of-range recolors are dropped, not a panic.
        list.set_cell_color(7, 0, 1);
        list.set_cell_color(0, 9, 1);
    }

    #[test]
    fn test_text_list_render_with_dot_leaders() {
        let mut list = TextList::new(vec![10, 4], 5);
        list.set_dot_leaders(true);
        list.add_row(&["Speed", "90"]);
        assert_eq!(list.render_row(0), "Speed.....90");
    }

    #[test]
    fn test_text_list_render_plain_padding() {
        let mut list = TextList::new(vec![10, 4], 5);
        list.add_row(&["Speed", "90"]);
        assert_eq!(list.render_row(0), "Speed     90");
    }

    #[test]
    fn test_text_list_render_long_label_unpadded() {
        let mut list = TextList::new(vec![4, 4], 5);
        list.set_dot_leaders(true);
        list.add_row(&["Longlabel", "1"]);
        assert_eq!(list.render_row(0), "Longlabel1");
    }

    #[test]
    fn test_text_list_render_multiline() {
        let mut list = TextList::new(vec![6, 3], 5);
        list.add_row(&["A", "1"]);
        list.add_row(&[]);
        list.add_row(&["B", "2"]);
        assert_eq!(list.render(), "A     1\n\nB     2");
    }

    #[test]
    fn test_text_list_rows_serialize() {
        let mut list = TextList::new(vec![10, 4], 5);
        list.add_row(&["Speed", "90"]);
        let json = serde_json::to_string(&list).unwrap();
        let back: TextList = serde_json::from_str(&json).unwrap();
        assert_eq!(back.cell(0, 1).unwrap().text, "90");
    }

    // ---- Armor article ----

    #[test]
    fn test_armor_article_row_population() {
        let rules = test_rules();
        let article = ArmorArticle::new("drone-carapace", &rules).unwrap();
        let rows = article.rows();

        let expected: [(&str, &str); 12] = [
            ("Front armor", "50"),
            ("Left armor", "40"),
            ("Right armor", "40"),
            ("Rear armor", "30"),
            ("Under armor", "20"),
            ("", ""),
            ("Incendiary", "120%"),
            ("Stun", "0%"),
            ("Smoke", "0%"),
            ("", ""),
            ("Time units", "+10"),
            ("Firing accuracy", "-5"),
        ];
        assert_eq!(rows.row_count(), expected.len());
        for (i, (label, value)) in expected.iter().enumerate() {
            if label.is_empty() {
                assert!(rows.is_separator(i), "row {i} should be a separator");
            } else {
                assert_eq!(rows.cell(i, 0).unwrap().text, *label, "row {i}");
                assert_eq!(rows.cell(i, 1).unwrap().text, *value, "row {i}");
            }
        }
    }

    #[test]
    fn test_armor_article_colors() {
        let rules = test_rules();
        let article = ArmorArticle::new("drone-carapace", &rules).unwrap();
        let rows = article.rows();
        assert_eq!(rows.cell(0, 0).unwrap().color, 244, "label color");
        assert_eq!(rows.cell(0, 1).unwrap().color, 208, "value color");
    }

    #[test]
    fn test_armor_article_skips_zero_stats() {
        let rules = test_rules();
        let article = ArmorArticle::new("bare-hide", &rules).unwrap();
        let rows = article.rows();

        // Only the front armor row plus the two separators.
        assert_eq!(rows.row_count(), 3);
        assert_eq!(rows.cell(0, 0).unwrap().text, "Front armor");
        assert!(rows.is_separator(1));
        assert!(rows.is_separator(2));
    }

    #[test]
    fn test_armor_article_all_neutral() {
        let rules = test_rules();
        let article = ArmorArticle::new("null-suit", &rules).unwrap();
        // Nothing to show: two separators and no stat rows.
        assert_eq!(article.rows().row_count(), 2);
    }

    #[test]
    fn test_armor_article_render() {
        let rules = test_rules();
        let article = ArmorArticle::new("drone-carapace", &rules).unwrap();
        assert_eq!(
            article.rows().render_row(0),
            "Front armor..............50"
        );
    }

    #[test]
    fn test_armor_article_unknown_ids() {
        let rules = test_rules();
        assert!(matches!(
            ArmorArticle::new("nope", &rules),
            Err(RulesetError::UnknownArticle(_))
        ));
        // Article entry exists but no armor rule backs it.
        assert!(matches!(
            ArmorArticle::new("ghost-armor", &rules),
            Err(RulesetError::UnknownArmor(_))
        ));
    }

    #[test]
    fn test_armor_article_click_dismissal() {
        let rules = test_rules();
        let article = ArmorArticle::new("drone-carapace", &rules).unwrap();
        assert_eq!(
            article.handle_click(MouseButton::Left),
            Some(UiRequest::CloseScreen)
        );
        assert_eq!(
            article.handle_click(MouseButton::Right),
            Some(UiRequest::CloseScreen)
        );
        assert_eq!(article.handle_click(MouseButton::Middle), None);
    }

    #[test]
    fn test_armor_article_info_button_follows_ui_rules() {
        let mut rules = test_rules();
        let article = ArmorArticle::new("drone-carapace", &rules).unwrap();
        assert!(!article.info_button_visible());

        rules
            .load_str("mod", r#"{ "ui": { "show_codex_info_button": true } }"#)
            .unwrap();
        let article = ArmorArticle::new("drone-carapace", &rules).unwrap();
        assert!(article.info_button_visible());
    }

    #[test]
    fn test_open_article() {
        let rules = test_rules();
        assert_eq!(open_article(&rules, "bare-hide").unwrap().id, "bare-hide");
        assert!(matches!(
            open_article(&rules, "missing"),
            Err(RulesetError::UnknownArticle(_))
        ));
    }
}
