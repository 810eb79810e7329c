//! UI color tables, looked up by interface name and element name.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Colors for one named element of an interface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceElement {
    /// Primary palette index.
    pub color: u8,
    /// Secondary palette index (value cells, highlights).
    pub color2: Option<u8>,
}

/// Color table for one screen or widget.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleInterface {
    pub elements: BTreeMap<String, InterfaceElement>,
}

impl RuleInterface {
    pub fn element(&self, name: &str) -> Option<&InterfaceElement> {
        self.elements.get(name)
    }

    /// Merge a rule document patch over the current values.
    pub fn load(&mut self, patch: &InterfacePatch) {
        for (name, element) in &patch.elements {
            let entry = self.elements.entry(name.clone()).or_default();
            if let Some(v) = element.color {
                entry.color = v;
            }
            if let Some(v) = element.color2 {
                entry.color2 = Some(v);
            }
        }
    }
}

/// Partial element colors as they appear in rule documents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InterfaceElementPatch {
    pub color: Option<u8>,
    pub color2: Option<u8>,
}

/// Partial interface record as it appears in rule documents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InterfacePatch {
    pub id: String,
    pub elements: BTreeMap<String, InterfaceElementPatch>,
}
