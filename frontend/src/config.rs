use serde::Deserialize;
use wheel_shared::{ItemSpec, WeightedWheel, WheelError, WheelVariant};

const CLASSIC_MENU: &str = include_str!("../menus/classic.json");
const ADAPTIVE_MENU: &str = include_str!("../menus/adaptive.json");
const FALLBACK_TITLE: &str = "Decision Wheel";

/// A fixed item list and the heading shown above its wheel
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Menu {
    pub title: String,
    pub items: Vec<ItemSpec>,
}

pub fn menu_source(variant: WheelVariant) -> &'static str {
    match variant {
        WheelVariant::Classic => CLASSIC_MENU,
        WheelVariant::Adaptive => ADAPTIVE_MENU,
    }
}

pub fn parse_menu(source: &str) -> Result<Menu, WheelError> {
    serde_json::from_str(source).map_err(|e| WheelError::InvalidConfig(e.to_string()))
}

/// Builds the wheel for a variant. Any configuration problem leaves it inert.
pub fn build_wheel(variant: WheelVariant) -> (String, WeightedWheel) {
    build_wheel_from(menu_source(variant), variant)
}

pub fn build_wheel_from(source: &str, variant: WheelVariant) -> (String, WeightedWheel) {
    match parse_menu(source) {
        Ok(menu) => (menu.title, WeightedWheel::new_or_inert(menu.items, variant)),
        Err(e) => (FALLBACK_TITLE.to_string(), WeightedWheel::inert(variant, e)),
    }
}
