use serde::{Serialize, Deserialize};
use std::f64::consts::PI;

use crate::constants::{FULL_TURN_DEG, POINTER_OFFSET_DEG};
use crate::weighted_wheel::WheelItem;

// Alternating wedge colors
pub const SECTOR_FILLS: [&str; 2] = ["#FFD700", "#FFA500"];

/// Angular extent of one wedge, in degrees clockwise from 12 o'clock
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Sector {
    pub label: String,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Sector {
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn mid_angle(&self) -> f64 {
        self.start_angle + self.sweep() / 2.0
    }
}

/// Lays the items out around the circle in list order, sized by current weight.
/// The last wedge is stretched to 360 the same way angle resolution does.
pub fn sectors(items: &[WheelItem]) -> Vec<Sector> {
    let mut start = 0.0;
    let last = items.len().saturating_sub(1);
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let mut end = start + item.span_degrees();
            if index == last {
                end = end.max(FULL_TURN_DEG);
            }
            let sector = Sector {
                label: item.label.clone(),
                start_angle: start,
                end_angle: end,
            };
            start = end;
            sector
        })
        .collect()
}

pub fn sector_fill(index: usize) -> &'static str {
    SECTOR_FILLS[index % SECTOR_FILLS.len()]
}

/// Wheel angle (0 at the top, clockwise) to canvas radians (0 at 3 o'clock).
pub fn to_canvas_radians(angle_deg: f64) -> f64 {
    (angle_deg - 90.0) * PI / 180.0
}

pub fn polar_point(center_x: f64, center_y: f64, radius: f64, angle_deg: f64) -> (f64, f64) {
    let rad = to_canvas_radians(angle_deg);
    (center_x + radius * rad.cos(), center_y + radius * rad.sin())
}

/// Wheel angle the pointer indicates for a given cumulative rotation.
pub fn pointer_angle(rotation: f64) -> f64 {
    crate::weighted_wheel::normalize_angle(rotation + POINTER_OFFSET_DEG)
}

// Easing function for smooth deceleration
pub fn ease_out_quart(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(pairs: &[(&str, f64)]) -> Vec<WheelItem> {
        pairs.iter().map(|&(label, weight)| WheelItem::new(label, weight)).collect()
    }

    #[test]
    fn test_sectors_follow_list_order() {
        let sectors = sectors(&items(&[("A", 25.0), ("B", 50.0), ("C", 25.0)]));
        assert_eq!(sectors.len(), 3);
        assert_eq!((sectors[0].start_angle, sectors[0].end_angle), (0.0, 90.0));
        assert_eq!((sectors[1].start_angle, sectors[1].end_angle), (90.0, 270.0));
        assert_eq!((sectors[2].start_angle, sectors[2].end_angle), (270.0, 360.0));
        assert_eq!(sectors[1].mid_angle(), 180.0);
        assert_eq!(sectors[2].sweep(), 90.0);
    }

    #[test]
    fn test_last_sector_closes_circle() {
        let sectors = sectors(&items(&[("A", 33.333), ("B", 33.333), ("C", 33.333)]));
        assert_eq!(sectors[2].end_angle, 360.0);
    }

    #[test]
    fn test_sectors_track_current_weight() {
        let mut items = items(&[("A", 40.0), ("B", 30.0), ("C", 30.0)]);
        items[0].current_weight = 28.0;
        items[1].current_weight = 36.0;
        items[2].current_weight = 36.0;
        let sectors = sectors(&items);
        assert!((sectors[0].end_angle - 100.8).abs() < 1e-9);
        assert!((sectors[1].end_angle - 230.4).abs() < 1e-9);
    }

    #[test]
    fn test_fills_alternate() {
        assert_eq!(sector_fill(0), "#FFD700");
        assert_eq!(sector_fill(1), "#FFA500");
        assert_eq!(sector_fill(2), "#FFD700");
    }

    #[test]
    fn test_polar_point_starts_at_top() {
        let (x, y) = polar_point(50.0, 50.0, 50.0, 0.0);
        assert!((x - 50.0).abs() < 1e-9);
        assert!(y.abs() < 1e-9);
        let (x, y) = polar_point(50.0, 50.0, 50.0, 90.0);
        assert!((x - 100.0).abs() < 1e-9);
        assert!((y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_pointer_angle_includes_offset() {
        assert_eq!(pointer_angle(0.0), 140.0);
        assert!((pointer_angle(1800.0 + 250.0) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_easing_endpoints() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert_eq!(ease_out_quart(2.0), 1.0);
        assert!(ease_out_quart(0.5) > 0.5);
    }
}
