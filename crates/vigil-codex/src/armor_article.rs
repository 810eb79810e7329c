//! Armor article screen: directional armor, damage modifiers, stat bonuses.

use vigil_core::enums::{DamageKind, MouseButton};
use vigil_core::events::UiRequest;
use vigil_ruleset::{Ruleset, RulesetError};

use crate::format::{format_percentage, format_signed};
use crate::text_list::TextList;

/// Label color when the ruleset carries no codex interface entry.
const LIST_COLOR_FALLBACK: u8 = 1;

/// Stat list column widths in characters: label, value.
const COLUMNS: [usize; 2] = [25, 6];

/// A built armor article. All rows are populated at construction;
/// afterwards the screen only reads them.
pub struct ArmorArticle {
    id: String,
    list: TextList,
    value_color: u8,
    info_button_visible: bool,
}

impl ArmorArticle {
    /// Build the article for an armor id.
    pub fn new(article_id: &str, rules: &Ruleset) -> Result<Self, RulesetError> {
        rules.require_article(article_id)?;
        let armor = rules.require_armor(article_id)?;

        let element = rules
            .interface("codex-article")
            .and_then(|i| i.element("stat-list"));
        let color = element.map_or(LIST_COLOR_FALLBACK, |e| e.color);
        let value_color = element.and_then(|e| e.color2).unwrap_or(color);

        let mut list = TextList::new(COLUMNS.to_vec(), color);
        list.set_dot_leaders(true);

        let mut article = Self {
            id: article_id.to_string(),
            list,
            value_color,
            info_button_visible: rules.ui().show_codex_info_button,
        };

        // Directional armor.
        article.add_stat(rules, "armor-front", armor.front, false);
        article.add_stat(rules, "armor-left", armor.left_side, false);
        article.add_stat(rules, "armor-right", armor.right_side, false);
        article.add_stat(rules, "armor-rear", armor.rear, false);
        article.add_stat(rules, "armor-under", armor.under, false);

        article.list.add_row(&[]);

        // Damage modifiers: only kinds with a label, only when not 100%.
        for kind in DamageKind::ALL {
            let Some(label) = kind.label() else {
                continue;
            };
            let percentage = (armor.damage_modifier(kind) * 100.0).round() as i32;
            if percentage != 100 {
                article.add_text_stat(rules, label, &format_percentage(percentage));
            }
        }

        article.list.add_row(&[]);

        // Stat bonuses granted by wearing the armor.
        let stats = &armor.stats;
        article.add_stat(rules, "stat-tu", stats.tu, true);
        article.add_stat(rules, "stat-stamina", stats.stamina, true);
        article.add_stat(rules, "stat-health", stats.health, true);
        article.add_stat(rules, "stat-bravery", stats.bravery, true);
        article.add_stat(rules, "stat-reactions", stats.reactions, true);
        article.add_stat(rules, "stat-firing", stats.firing, true);
        article.add_stat(rules, "stat-throwing", stats.throwing, true);
        article.add_stat(rules, "stat-melee", stats.melee, true);
        article.add_stat(rules, "stat-strength", stats.strength, true);
        article.add_stat(rules, "stat-psi-strength", stats.psi_strength, true);
        article.add_stat(rules, "stat-psi-skill", stats.psi_skill, true);

        Ok(article)
    }

    /// Add a numeric stat row. Zero values are not shown; positive values
    /// get a leading plus when `signed`.
    fn add_stat(&mut self, rules: &Ruleset, label_key: &str, value: i32, signed: bool) {
        if value == 0 {
            return;
        }
        let text = if signed {
            format_signed(value)
        } else {
            value.to_string()
        };
        self.add_text_stat(rules, label_key, &text);
    }

    /// Add a preformatted stat row and color its value cell.
    fn add_text_stat(&mut self, rules: &Ruleset, label_key: &str, value: &str) {
        let row = self.list.row_count();
        self.list.add_row(&[rules.tr(label_key), value]);
        self.list.set_cell_color(row, 1, self.value_color);
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn rows(&self) -> &TextList {
        &self.list
    }

    pub fn info_button_visible(&self) -> bool {
        self.info_button_visible
    }

    /// Left and right clicks dismiss the article.
    pub fn handle_click(&self, button: MouseButton) -> Option<UiRequest> {
        match button {
            MouseButton::Left | MouseButton::Right => Some(UiRequest::CloseScreen),
            MouseButton::Middle => None,
        }
    }
}
