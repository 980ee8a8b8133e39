use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::adaptive::AdaptiveWeightAdjuster;
use crate::constants::*;
use crate::error::WheelError;

/// One wedge of the wheel
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WheelItem {
    pub label: String,
    pub baseline_weight: f64,
    pub current_weight: f64,
}

impl WheelItem {
    pub fn new(label: impl Into<String>, weight: f64) -> Self {
        Self {
            label: label.into(),
            baseline_weight: weight,
            current_weight: weight,
        }
    }

    /// Angular size of the wedge for its current weight, in degrees.
    pub fn span_degrees(&self) -> f64 {
        self.current_weight / WEIGHT_TOTAL * FULL_TURN_DEG
    }
}

/// Construction input: a label and its share of 100
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ItemSpec {
    pub label: String,
    pub weight: f64,
}

impl ItemSpec {
    pub fn new(label: impl Into<String>, weight: f64) -> Self {
        Self { label: label.into(), weight }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum WheelVariant {
    /// Weights never change
    #[default]
    Classic,
    /// The last outcome is made less likely before every spin
    Adaptive,
}

/// Ticket for the spin currently in flight. Only the matching ticket resolves it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingSpin {
    pub id: u64,
    pub extra_rotation: f64,
    pub target_rotation: f64,
    pub delay_ms: u32,
}

/// Represents the result of a resolved spin
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinOutcome {
    pub label: String,
    pub index: usize,
    pub final_angle: f64,
}

#[derive(Debug, Clone)]
pub struct WeightedWheel {
    items: Vec<WheelItem>,
    variant: WheelVariant,
    adjuster: Option<AdaptiveWeightAdjuster>,
    cumulative_rotation: f64,
    in_flight: Option<u64>,
    next_spin_id: u64,
    last_selected: Option<String>,
    inert: Option<WheelError>,
}

impl WeightedWheel {
    /// Builds a wheel, rejecting item lists whose weights do not sum to 100.
    pub fn new(specs: Vec<ItemSpec>, variant: WheelVariant) -> Result<Self, WheelError> {
        let items = validate_items(specs)?;
        Ok(Self::with_items(items, variant, None))
    }

    /// Like [`WeightedWheel::new`], but a bad item list yields a wheel that
    /// ignores every spin request instead of an error.
    pub fn new_or_inert(specs: Vec<ItemSpec>, variant: WheelVariant) -> Self {
        match Self::new(specs, variant) {
            Ok(wheel) => wheel,
            Err(e) => Self::inert(variant, e),
        }
    }

    /// A wheel with no items that ignores every spin request.
    pub fn inert(variant: WheelVariant, reason: WheelError) -> Self {
        log::error!("Wheel configuration rejected: {}", reason);
        Self::with_items(Vec::new(), variant, Some(reason))
    }

    fn with_items(items: Vec<WheelItem>, variant: WheelVariant, inert: Option<WheelError>) -> Self {
        let adjuster = match variant {
            WheelVariant::Classic => None,
            WheelVariant::Adaptive => Some(AdaptiveWeightAdjuster::default()),
        };
        Self {
            items,
            variant,
            adjuster,
            cumulative_rotation: 0.0,
            in_flight: None,
            next_spin_id: 1,
            last_selected: None,
            inert,
        }
    }

    pub fn items(&self) -> &[WheelItem] {
        &self.items
    }

    pub fn variant(&self) -> WheelVariant {
        self.variant
    }

    pub fn cumulative_rotation(&self) -> f64 {
        self.cumulative_rotation
    }

    pub fn is_spinning(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn is_inert(&self) -> bool {
        self.inert.is_some()
    }

    pub fn inert_reason(&self) -> Option<&WheelError> {
        self.inert.as_ref()
    }

    pub fn last_selected(&self) -> Option<&str> {
        self.last_selected.as_deref()
    }

    pub fn total_weight(&self) -> f64 {
        self.items.iter().map(|item| item.current_weight).sum()
    }

    /// Permanently disables the wheel. A spin in flight is dropped without an outcome.
    pub fn mark_inert(&mut self, reason: WheelError) {
        log::error!("Wheel disabled: {}", reason);
        self.in_flight = None;
        self.inert = Some(reason);
    }

    /// Maps an angle in [0, 360) to the item whose wedge contains it.
    ///
    /// Wedges are half-open, `[start, end)`, laid out in list order from 0.
    /// The last wedge always extends to 360 so rounding in the running sum
    /// cannot leave an uncovered sliver at the end of the circle.
    pub fn angle_to_item(&self, angle: f64) -> Option<&WheelItem> {
        self.position_for_angle(angle).map(|index| &self.items[index])
    }

    fn position_for_angle(&self, angle: f64) -> Option<usize> {
        if !(0.0..FULL_TURN_DEG).contains(&angle) {
            return None;
        }
        let last = self.items.len().checked_sub(1)?;

        let mut start = 0.0;
        for (index, item) in self.items.iter().enumerate() {
            let mut end = start + item.span_degrees();
            if index == last {
                end = end.max(FULL_TURN_DEG);
            }
            if angle >= start && angle < end {
                return Some(index);
            }
            start = end;
        }
        None
    }

    /// Starts a spin. Returns `None` without touching any state when the wheel
    /// is inert or a spin is already in flight.
    pub fn begin_spin<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<PendingSpin> {
        if let Some(reason) = &self.inert {
            log::debug!("Spin ignored, wheel is disabled: {}", reason);
            return None;
        }
        if let Some(id) = self.in_flight {
            log::debug!("Spin ignored, spin #{} still in flight", id);
            return None;
        }

        if let Some(adjuster) = &self.adjuster {
            adjuster.adjust(&mut self.items, self.last_selected.as_deref());
        }

        let extra_rotation = rng.gen_range(MIN_EXTRA_ROTATION..MAX_EXTRA_ROTATION);
        self.cumulative_rotation += extra_rotation;

        let id = self.next_spin_id;
        self.next_spin_id += 1;
        self.in_flight = Some(id);

        log::debug!(
            "Spin #{} started: +{:.2} deg, total {:.2} deg",
            id,
            extra_rotation,
            self.cumulative_rotation
        );

        Some(PendingSpin {
            id,
            extra_rotation,
            target_rotation: self.cumulative_rotation,
            delay_ms: SPIN_DURATION_MS,
        })
    }

    /// Resolves the in-flight spin to an outcome. Stale or repeated tickets
    /// are ignored, so a spin reports at most one outcome.
    pub fn resolve_spin(&mut self, spin: &PendingSpin) -> Option<SpinOutcome> {
        if self.in_flight != Some(spin.id) {
            log::debug!("Ignoring resolution for spin #{}, not in flight", spin.id);
            return None;
        }
        self.in_flight = None;

        let final_angle = normalize_angle(self.cumulative_rotation + POINTER_OFFSET_DEG);
        match self.position_for_angle(final_angle) {
            Some(index) => {
                let label = self.items[index].label.clone();
                log::info!("Spin #{} landed on '{}' at {:.2} deg", spin.id, label, final_angle);
                self.last_selected = Some(label.clone());
                Some(SpinOutcome {
                    label,
                    index,
                    final_angle,
                })
            }
            None => {
                log::warn!("Spin #{} resolved to uncovered angle {:.4}", spin.id, final_angle);
                None
            }
        }
    }

    /// Abandons the in-flight spin without an outcome. Rotation already
    /// applied is kept so the pointer never moves backwards.
    pub fn cancel_spin(&mut self, spin: &PendingSpin) -> bool {
        if self.in_flight != Some(spin.id) {
            return false;
        }
        log::debug!("Spin #{} cancelled", spin.id);
        self.in_flight = None;
        true
    }
}

/// Wraps any angle into [0, 360).
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(FULL_TURN_DEG);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= FULL_TURN_DEG {
        0.0
    } else {
        wrapped
    }
}

fn validate_items(specs: Vec<ItemSpec>) -> Result<Vec<WheelItem>, WheelError> {
    if specs.is_empty() {
        return Err(WheelError::NoItems);
    }

    if let Some(bad) = specs
        .iter()
        .find(|spec| !spec.weight.is_finite() || spec.weight <= 0.0)
    {
        return Err(WheelError::InvalidWeight {
            label: bad.label.clone(),
            weight: bad.weight,
        });
    }

    let total: f64 = specs.iter().map(|spec| spec.weight).sum();
    if (total - WEIGHT_TOTAL).abs() > WEIGHT_TOLERANCE {
        return Err(WheelError::WeightsDoNotSum { total });
    }

    Ok(specs
        .into_iter()
        .map(|spec| WheelItem::new(spec.label, spec.weight))
        .collect())
}
