//! The rule registry: owns every loaded rule and resolves lookups.
//!
//! Documents are applied in load order. A patch for an id that has not
//! been seen yet creates the rule from defaults first, so base game and
//! mods use the same document format.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use vigil_core::enums::SlotKind;

use crate::armor::{Armor, ArmorPatch};
use crate::craft::{CraftPatch, RuleCraft};
use crate::error::RulesetError;
use crate::interface::{InterfacePatch, RuleInterface};
use crate::inventory::{InventoryPatch, RuleInventory};
use crate::item::{ItemPatch, RuleItem};

/// Spacing between auto-assigned list positions.
const LIST_ORDER_STEP: i32 = 100;

/// What a codex article describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArticleKind {
    Armor,
    Item,
    Craft,
}

/// A codex article entry. The article id doubles as the id of the rule
/// it describes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArticleRule {
    pub id: String,
    pub kind: ArticleKind,
}

/// Display options settable from rule documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiOptions {
    /// X shift applied to every inventory section in the enemy display.
    pub enemy_inventory_offset_x: i32,
    /// Extra outward shift of hand slots for large units.
    pub enemy_inventory_big_unit_offset: i32,
    /// Whether codex articles show their info button.
    pub show_codex_info_button: bool,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            enemy_inventory_offset_x: 80,
            enemy_inventory_big_unit_offset: 32,
            show_codex_info_button: false,
        }
    }
}

/// Partial UI options as they appear in rule documents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiPatch {
    pub enemy_inventory_offset_x: Option<i32>,
    pub enemy_inventory_big_unit_offset: Option<i32>,
    pub show_codex_info_button: Option<bool>,
}

/// One rule document. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RulesetDoc {
    pub crafts: Vec<CraftPatch>,
    pub armors: Vec<ArmorPatch>,
    pub items: Vec<ItemPatch>,
    pub inventories: Vec<InventoryPatch>,
    pub interfaces: Vec<InterfacePatch>,
    pub articles: Vec<ArticleRule>,
    pub strings: BTreeMap<String, String>,
    pub ui: Option<UiPatch>,
}

/// The loaded rule registry.
#[derive(Debug)]
pub struct Ruleset {
    crafts: BTreeMap<String, RuleCraft>,
    armors: BTreeMap<String, Armor>,
    items: BTreeMap<String, RuleItem>,
    inventories: BTreeMap<String, RuleInventory>,
    interfaces: BTreeMap<String, RuleInterface>,
    articles: BTreeMap<String, ArticleRule>,
    strings: BTreeMap<String, String>,
    ui: UiOptions,
    next_list_order: i32,
}

impl Default for Ruleset {
    fn default() -> Self {
        Self::new()
    }
}

impl Ruleset {
    pub fn new() -> Self {
        Self {
            crafts: BTreeMap::new(),
            armors: BTreeMap::new(),
            items: BTreeMap::new(),
            inventories: BTreeMap::new(),
            interfaces: BTreeMap::new(),
            articles: BTreeMap::new(),
            strings: BTreeMap::new(),
            ui: UiOptions::default(),
            next_list_order: LIST_ORDER_STEP,
        }
    }

    /// Apply one JSON document. `name` is used for logging and errors.
    pub fn load_str(&mut self, name: &str, json: &str) -> Result<(), RulesetError> {
        let doc: RulesetDoc = serde_json::from_str(json).map_err(|source| RulesetError::Parse {
            name: name.to_string(),
            source,
        })?;
        self.apply_doc(name, doc);
        Ok(())
    }

    /// Load a single rule document file.
    pub fn load_file(&mut self, path: &Path) -> Result<(), RulesetError> {
        let json = fs::read_to_string(path).map_err(|source| RulesetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_str(&path.display().to_string(), &json)
    }

    /// Load every `.json` document in a directory, in sorted filename
    /// order. Later files override earlier ones.
    pub fn load_dir(&mut self, dir: &Path) -> Result<(), RulesetError> {
        let entries = fs::read_dir(dir).map_err(|source| RulesetError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let mut paths: Vec<_> = entries
            .filter_map(|e| e.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();
        for path in paths {
            self.load_file(&path)?;
        }
        Ok(())
    }

    fn apply_doc(&mut self, name: &str, doc: RulesetDoc) {
        info!(
            doc = name,
            crafts = doc.crafts.len(),
            armors = doc.armors.len(),
            items = doc.items.len(),
            inventories = doc.inventories.len(),
            interfaces = doc.interfaces.len(),
            articles = doc.articles.len(),
            strings = doc.strings.len(),
            "applying rule document"
        );

        for patch in &doc.crafts {
            if !self.crafts.contains_key(&patch.id) {
                debug!(id = %patch.id, "new craft rule");
                let order = self.take_list_order();
                self.crafts
                    .insert(patch.id.clone(), RuleCraft::new(&patch.id, order));
            }
            if let Some(craft) = self.crafts.get_mut(&patch.id) {
                craft.load(patch);
            }
        }

        for patch in &doc.armors {
            let armor = self
                .armors
                .entry(patch.id.clone())
                .or_insert_with(|| Armor::new(&patch.id));
            armor.load(patch);
        }

        for patch in &doc.items {
            if !self.items.contains_key(&patch.id) {
                debug!(id = %patch.id, "new item rule");
                let order = self.take_list_order();
                self.items
                    .insert(patch.id.clone(), RuleItem::new(&patch.id, order));
            }
            if let Some(item) = self.items.get_mut(&patch.id) {
                item.load(patch);
            }
        }

        for patch in &doc.inventories {
            if !self.inventories.contains_key(&patch.id) {
                let order = self.take_list_order();
                self.inventories
                    .insert(patch.id.clone(), RuleInventory::new(&patch.id, order));
            }
            if let Some(section) = self.inventories.get_mut(&patch.id) {
                section.load(patch);
            }
        }

        for patch in &doc.interfaces {
            self.interfaces
                .entry(patch.id.clone())
                .or_default()
                .load(patch);
        }

        for article in doc.articles {
            self.articles.insert(article.id.clone(), article);
        }

        self.strings.extend(doc.strings);

        if let Some(ui) = doc.ui {
            if let Some(v) = ui.enemy_inventory_offset_x {
                self.ui.enemy_inventory_offset_x = v;
            }
            if let Some(v) = ui.enemy_inventory_big_unit_offset {
                self.ui.enemy_inventory_big_unit_offset = v;
            }
            if let Some(v) = ui.show_codex_info_button {
                self.ui.show_codex_info_button = v;
            }
        }
    }

    fn take_list_order(&mut self) -> i32 {
        let order = self.next_list_order;
        self.next_list_order += LIST_ORDER_STEP;
        order
    }

    // --- Lookups ---

    pub fn craft(&self, id: &str) -> Option<&RuleCraft> {
        self.crafts.get(id)
    }

    pub fn armor(&self, id: &str) -> Option<&Armor> {
        self.armors.get(id)
    }

    /// Armor lookup for contexts that cannot proceed without one.
    pub fn require_armor(&self, id: &str) -> Result<&Armor, RulesetError> {
        self.armors
            .get(id)
            .ok_or_else(|| RulesetError::UnknownArmor(id.to_string()))
    }

    pub fn item(&self, id: &str) -> Option<&RuleItem> {
        self.items.get(id)
    }

    pub fn inventory(&self, id: &str) -> Option<&RuleInventory> {
        self.inventories.get(id)
    }

    /// All inventory sections in id order (drawing iterates this).
    pub fn inventories(&self) -> impl Iterator<Item = &RuleInventory> {
        self.inventories.values()
    }

    pub fn interface(&self, id: &str) -> Option<&RuleInterface> {
        self.interfaces.get(id)
    }

    pub fn article(&self, id: &str) -> Option<&ArticleRule> {
        self.articles.get(id)
    }

    pub fn require_article(&self, id: &str) -> Result<&ArticleRule, RulesetError> {
        self.articles
            .get(id)
            .ok_or_else(|| RulesetError::UnknownArticle(id.to_string()))
    }

    pub fn crafts(&self) -> impl Iterator<Item = &RuleCraft> {
        self.crafts.values()
    }

    pub fn armors(&self) -> impl Iterator<Item = &Armor> {
        self.armors.values()
    }

    pub fn items(&self) -> impl Iterator<Item = &RuleItem> {
        self.items.values()
    }

    pub fn articles(&self) -> impl Iterator<Item = &ArticleRule> {
        self.articles.values()
    }

    pub fn ui(&self) -> &UiOptions {
        &self.ui
    }

    /// Resolve a label key to display text. Unknown keys fall back to the
    /// key itself so missing language entries stay visible, not fatal.
    pub fn tr<'a>(&'a self, key: &'a str) -> &'a str {
        self.strings.get(key).map_or(key, |s| s.as_str())
    }

    // --- Validation ---

    /// Cross-reference checks for `ruleset-lint`. Returns human-readable
    /// findings; an empty list means the ruleset is internally consistent.
    pub fn validate(&self) -> Vec<String> {
        let mut findings = Vec::new();

        for craft in self.crafts.values() {
            if let Some(item) = &craft.refuel_item {
                if !self.items.contains_key(item) {
                    findings.push(format!(
                        "craft '{}': refuel_item '{}' is not a known item",
                        craft.id, item
                    ));
                }
            }
            for slot in 0..craft.weapons {
                if let Some(weapon) = craft.fixed_weapon_in_slot(slot) {
                    if !self.items.contains_key(weapon) {
                        findings.push(format!(
                            "craft '{}': fixed weapon '{}' in slot {} is not a known item",
                            craft.id, weapon, slot
                        ));
                    }
                }
            }
        }

        for armor in self.armors.values() {
            for (i, factor) in armor.damage_modifiers.iter().enumerate() {
                if *factor < 0.0 {
                    findings.push(format!(
                        "armor '{}': negative damage modifier {} at index {}",
                        armor.id, factor, i
                    ));
                }
            }
        }

        for article in self.articles.values() {
            let known = match article.kind {
                ArticleKind::Armor => self.armors.contains_key(&article.id),
                ArticleKind::Item => self.items.contains_key(&article.id),
                ArticleKind::Craft => self.crafts.contains_key(&article.id),
            };
            if !known {
                findings.push(format!(
                    "article '{}' has no backing {:?} rule",
                    article.id, article.kind
                ));
            }
        }

        for section in self.inventories.values() {
            match section.kind {
                SlotKind::Hand => {
                    if section.hand.is_none() {
                        findings.push(format!(
                            "inventory '{}': hand section without a hand side",
                            section.id
                        ));
                    }
                }
                SlotKind::General => {
                    let mut seen = std::collections::BTreeSet::new();
                    for cell in &section.cells {
                        if !seen.insert((cell.x, cell.y)) {
                            findings.push(format!(
                                "inventory '{}': duplicate cell ({}, {})",
                                section.id, cell.x, cell.y
                            ));
                        }
                    }
                }
                SlotKind::Ground => {}
            }
        }

        findings
    }
}
