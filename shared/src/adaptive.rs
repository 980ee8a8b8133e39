use crate::constants::REPEAT_KEEP_FACTOR;
use crate::weighted_wheel::WheelItem;

/// Makes the previous outcome less likely on the next spin.
///
/// Weights are recomputed from baseline on every call, never from the
/// current weights, so repeated selections do not compound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveWeightAdjuster {
    keep_factor: f64,
}

impl Default for AdaptiveWeightAdjuster {
    fn default() -> Self {
        Self { keep_factor: REPEAT_KEEP_FACTOR }
    }
}

impl AdaptiveWeightAdjuster {
    pub fn adjust(&self, items: &mut [WheelItem], last_selected: Option<&str>) {
        let selected = last_selected
            .and_then(|label| items.iter().position(|item| item.label == label));

        // Nothing to discount, or nobody to hand the reduction to
        let selected = match selected {
            Some(index) if items.len() > 1 => index,
            _ => {
                reset_to_baseline(items);
                return;
            }
        };

        let reduction = items[selected].baseline_weight * (1.0 - self.keep_factor);
        let bonus = reduction / (items.len() - 1) as f64;

        for (index, item) in items.iter_mut().enumerate() {
            item.current_weight = if index == selected {
                item.baseline_weight * self.keep_factor
            } else {
                item.baseline_weight + bonus
            };
        }
    }
}

fn reset_to_baseline(items: &mut [WheelItem]) {
    for item in items.iter_mut() {
        item.current_weight = item.baseline_weight;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(pairs: &[(&str, f64)]) -> Vec<WheelItem> {
        pairs.iter().map(|&(label, weight)| WheelItem::new(label, weight)).collect()
    }

    fn weights(items: &[WheelItem]) -> Vec<f64> {
        items.iter().map(|item| item.current_weight).collect()
    }

    fn total(items: &[WheelItem]) -> f64 {
        items.iter().map(|item| item.current_weight).sum()
    }

    #[test]
    fn test_first_spin_keeps_baseline() {
        let mut items = items(&[("A", 40.0), ("B", 30.0), ("C", 30.0)]);
        AdaptiveWeightAdjuster::default().adjust(&mut items, None);
        assert_eq!(weights(&items), vec![40.0, 30.0, 30.0]);
    }

    #[test]
    fn test_previous_outcome_drops_to_seventy_percent() {
        let mut items = items(&[("A", 40.0), ("B", 30.0), ("C", 30.0)]);
        AdaptiveWeightAdjuster::default().adjust(&mut items, Some("A"));

        assert_eq!(items[0].current_weight, 40.0 * 0.7);
        assert!((items[0].current_weight - 28.0).abs() < 1e-9);
        assert!((items[1].current_weight - 36.0).abs() < 1e-9);
        assert!((items[2].current_weight - 36.0).abs() < 1e-9);
        assert!((total(&items) - 100.0).abs() <= 0.01);
    }

    #[test]
    fn test_adjustment_is_not_cumulative() {
        let adjuster = AdaptiveWeightAdjuster::default();
        let mut items = items(&[("A", 40.0), ("B", 30.0), ("C", 30.0)]);

        adjuster.adjust(&mut items, Some("B"));
        let once = weights(&items);
        adjuster.adjust(&mut items, Some("B"));
        assert_eq!(weights(&items), once);
        assert_eq!(items[1].current_weight, 30.0 * 0.7);
    }

    #[test]
    fn test_only_latest_selection_counts() {
        let adjuster = AdaptiveWeightAdjuster::default();
        let mut items = items(&[("A", 40.0), ("B", 30.0), ("C", 30.0)]);

        adjuster.adjust(&mut items, Some("A"));
        adjuster.adjust(&mut items, Some("C"));

        assert!((items[0].current_weight - 44.5).abs() < 1e-9);
        assert!((items[1].current_weight - 34.5).abs() < 1e-9);
        assert!((items[2].current_weight - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_sum_preserved_on_menu_sized_wheel() {
        let adjuster = AdaptiveWeightAdjuster::default();
        let pairs = [
            ("Ramen", 4.0), ("Sushi", 4.0), ("Beef Noodle Soup", 8.0), ("Pizza", 6.0),
            ("Burger", 8.0), ("Fried Rice", 7.0), ("Braised Pork Rice", 7.0), ("Pasta", 8.0),
            ("Salad Bowl", 6.0), ("Hot Pot", 8.0), ("Yakiniku", 7.0), ("Curry Rice", 8.0),
            ("Sandwich", 6.0), ("Dumplings", 7.0), ("Fried Chicken", 6.0),
        ];
        for (label, baseline) in pairs {
            let mut items = items(&pairs);
            adjuster.adjust(&mut items, Some(label));
            assert!((total(&items) - 100.0).abs() <= 0.01, "sum drifted after {}", label);
            let selected = items.iter().find(|item| item.label == label).unwrap();
            assert_eq!(selected.current_weight, baseline * 0.7);
        }
    }

    #[test]
    fn test_unknown_label_resets_to_baseline() {
        let adjuster = AdaptiveWeightAdjuster::default();
        let mut items = items(&[("A", 50.0), ("B", 50.0)]);
        adjuster.adjust(&mut items, Some("A"));
        adjuster.adjust(&mut items, Some("Z"));
        assert_eq!(weights(&items), vec![50.0, 50.0]);
    }

    #[test]
    fn test_single_item_is_left_alone() {
        let mut items = items(&[("Only", 100.0)]);
        AdaptiveWeightAdjuster::default().adjust(&mut items, Some("Only"));
        assert_eq!(weights(&items), vec![100.0]);
    }
}
