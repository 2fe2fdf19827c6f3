use crate::sim::catalog::{AWAKEN_ELEMENTS, CatalogEntry, OptionCatalog};
use crate::sim::slot::ItemType;
use crate::sim::types::OptionId;

pub const UNSELECTED_LABEL: &str = "SELECT STAT";

/// One line of a row's stat selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionEntry {
    /// Head of every list; selecting it clears the slot.
    Unselected,
    /// Category divider. Never selectable.
    Header(String),
    Stat { id: OptionId, name: String },
}

impl OptionEntry {
    pub fn label(&self) -> String {
        match self {
            Self::Unselected => UNSELECTED_LABEL.into(),
            Self::Header(category) => format!(">-- {category} --<"),
            Self::Stat { name, .. } => name.clone(),
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Header(_))
    }

    /// Id written to the slot when this line is picked.
    pub fn option_id(&self) -> Option<OptionId> {
        match self {
            Self::Unselected => Some(OptionId::UNSET),
            Self::Header(_) => None,
            Self::Stat { id, .. } => Some(*id),
        }
    }
}

/// Whether `entry` may be offered on an item of `item_type`.
pub fn is_offered(entry: &CatalogEntry, item_type: ItemType) -> bool {
    !(item_type == ItemType::Armor && entry.category == AWAKEN_ELEMENTS)
}

/// Selector lines in catalog order: the unselected sentinel, then a header
/// at each category boundary followed by that category's stats.
pub fn build_option_list(catalog: &OptionCatalog, item_type: ItemType) -> Vec<OptionEntry> {
    let mut options = vec![OptionEntry::Unselected];
    let mut last_category: Option<&str> = None;

    for (id, entry) in catalog.iter() {
        if !is_offered(entry, item_type) {
            continue;
        }
        if last_category != Some(entry.category.as_str()) {
            options.push(OptionEntry::Header(entry.category.clone()));
            last_category = Some(entry.category.as_str());
        }
        options.push(OptionEntry::Stat {
            id,
            name: entry.name.clone(),
        });
    }

    options
}

/// Display name for the current selection.
pub fn selected_label(catalog: &OptionCatalog, id: OptionId) -> String {
    catalog
        .get(id)
        .map(|e| e.name.clone())
        .unwrap_or_else(|| UNSELECTED_LABEL.into())
}
