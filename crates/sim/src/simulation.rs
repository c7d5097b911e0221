//! Day-by-day driver around [`Inventory::update_quality`].

use gildedrose_inventory::{Inventory, Item};
use serde::{Deserialize, Serialize};

/// Inventory state at the start of a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayReport {
    pub day: u32,
    pub items: Vec<Item>,
}

impl DayReport {
    /// Text block: a day header, a column header, then one line per item.
    pub fn render(&self) -> String {
        let mut out = format!("-------- day {} --------\nname, sellIn, quality\n", self.day);
        for item in &self.items {
            out.push_str(&item.to_string());
            out.push('\n');
        }
        out
    }

    pub fn render_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone)]
pub struct Simulation {
    inventory: Inventory,
    day: u32,
}

impl Simulation {
    pub fn new(inventory: Inventory) -> Self {
        Self { inventory, day: 0 }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Snapshot the current day, then let one day pass.
    pub fn step(&mut self) -> DayReport {
        let report = DayReport {
            day: self.day,
            items: self.inventory.items().to_vec(),
        };
        self.inventory.update_quality();
        self.day = self.day.saturating_add(1);

        tracing::debug!(day = report.day, items = report.items.len(), "day advanced");
        report
    }

    /// Produce `days` reports; the first one is the state before any update.
    pub fn run(&mut self, days: u32) -> Vec<DayReport> {
        (0..days).map(|_| self.step()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gildedrose_inventory::{AGED_BRIE, SULFURAS};

    fn sample() -> Inventory {
        Inventory::new(vec![
            Item::new("+5 Dexterity Vest", 10, 20),
            Item::new(AGED_BRIE, 2, 0),
            Item::new(SULFURAS, 0, 80),
        ])
    }

    #[test]
    fn first_report_is_initial_state() {
        let mut sim = Simulation::new(sample());
        let reports = sim.run(2);

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].day, 0);
        assert_eq!(reports[0].items, sample().into_items());
        assert_eq!(reports[1].day, 1);
        assert_eq!(reports[1].items[0], Item::new("+5 Dexterity Vest", 9, 19));
        assert_eq!(reports[1].items[1], Item::new(AGED_BRIE, 1, 1));
        assert_eq!(reports[1].items[2], Item::new(SULFURAS, -1, 80));

        assert_eq!(sim.day(), 2);
        assert_eq!(sim.inventory().items()[0], Item::new("+5 Dexterity Vest", 8, 18));
    }

    #[test]
    fn zero_days_produces_nothing_and_changes_nothing() {
        let mut sim = Simulation::new(sample());
        assert!(sim.run(0).is_empty());
        assert_eq!(sim.inventory(), &sample());
    }

    #[test]
    fn render_matches_text_report_layout() {
        let report = DayReport {
            day: 3,
            items: vec![Item::new(AGED_BRIE, 2, 0)],
        };
        assert_eq!(
            report.render(),
            "-------- day 3 --------\nname, sellIn, quality\nAged Brie, 2, 0\n"
        );
    }

    #[test]
    fn render_json_round_trips() {
        let report = DayReport {
            day: 1,
            items: vec![Item::new(SULFURAS, -1, 80)],
        };
        let json = report.render_json().unwrap();
        let back: DayReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
