use serde::{Deserialize, Serialize};

/// Name of the legendary item.
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
/// Name of the vintage item that appreciates with age.
pub const AGED_BRIE: &str = "Aged Brie";
/// Name of the backstage pass item.
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";
/// Name of the conjured item.
pub const CONJURED_MANA_CAKE: &str = "Conjured Mana Cake";

/// A shop item.
///
/// `name` doubles as the item's category tag (see [`Category::from_name`]).
/// `sell_in` may go negative once the sell-by date has passed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    pub fn category(&self) -> Category {
        Category::from_name(&self.name)
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

/// Closed set of update behaviors.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Quality fixed at 80 forever.
    Legendary,
    /// Appreciates with age.
    Vintage,
    /// Appreciates faster as the concert approaches, worthless afterwards.
    BackstagePass,
    /// Degrades twice as fast as an ordinary item.
    Conjured,
    /// Everything else.
    Ordinary,
}

impl Category {
    /// Resolve a category by exact, case-sensitive name match.
    ///
    /// Unrecognized names are [`Category::Ordinary`].
    pub fn from_name(name: &str) -> Self {
        match name {
            SULFURAS => Category::Legendary,
            AGED_BRIE => Category::Vintage,
            BACKSTAGE_PASSES => Category::BackstagePass,
            CONJURED_MANA_CAKE => Category::Conjured,
            _ => Category::Ordinary,
        }
    }

    pub fn is_legendary(self) -> bool {
        matches!(self, Category::Legendary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve_to_their_category() {
        assert_eq!(Category::from_name(SULFURAS), Category::Legendary);
        assert_eq!(Category::from_name(AGED_BRIE), Category::Vintage);
        assert_eq!(Category::from_name(BACKSTAGE_PASSES), Category::BackstagePass);
        assert_eq!(Category::from_name(CONJURED_MANA_CAKE), Category::Conjured);
    }

    #[test]
    fn matching_is_exact_and_case_sensitive() {
        assert_eq!(Category::from_name("aged brie"), Category::Ordinary);
        assert_eq!(Category::from_name("Aged Brie "), Category::Ordinary);
        assert_eq!(Category::from_name("Sulfuras"), Category::Ordinary);
        assert_eq!(Category::from_name("Conjured Sword"), Category::Ordinary);
        assert_eq!(Category::from_name(""), Category::Ordinary);
    }

    #[test]
    fn display_renders_report_line() {
        let item = Item::new("+5 Dexterity Vest", 10, 20);
        assert_eq!(item.to_string(), "+5 Dexterity Vest, 10, 20");
        assert_eq!(item.category(), Category::Ordinary);
    }

    #[test]
    fn item_serializes_with_field_names() {
        let item = Item::new(AGED_BRIE, 2, 0);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["name"], "Aged Brie");
        assert_eq!(json["sell_in"], 2);
        assert_eq!(json["quality"], 0);

        let category = serde_json::to_value(Category::BackstagePass).unwrap();
        assert_eq!(category, "backstage_pass");
    }
}
