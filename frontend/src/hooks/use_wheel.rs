use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;
use wheel_shared::geometry::{sectors, Sector};
use wheel_shared::{PendingSpin, SpinOutcome, WeightedWheel, WheelError, WheelVariant};

use crate::config::build_wheel;

/// What the page needs to render the wheel
#[derive(Clone, PartialEq)]
pub struct WheelSnapshot {
    pub sectors: Vec<Sector>,
    pub rotation: f64,
    pub is_spinning: bool,
    pub is_inert: bool,
    pub error: Option<String>,
}

impl From<&WeightedWheel> for WheelSnapshot {
    fn from(wheel: &WeightedWheel) -> Self {
        Self {
            sectors: sectors(wheel.items()),
            rotation: wheel.cumulative_rotation(),
            is_spinning: wheel.is_spinning(),
            is_inert: wheel.is_inert(),
            error: wheel.inert_reason().map(|e| e.to_string()),
        }
    }
}

// Keeps the resolution timer alive; dropping it cancels the timer
struct ScheduledResolution {
    spin: PendingSpin,
    _timeout: Timeout,
}

pub struct UseWheelHandle {
    pub title: String,
    pub snapshot: WheelSnapshot,
    pub outcome: Option<SpinOutcome>,
    pub spin: Callback<()>,
    pub dismiss: Callback<()>,
    pub disable: Callback<WheelError>,
}

fn refresh(snapshot: &UseStateHandle<WheelSnapshot>, wheel: &Rc<RefCell<WeightedWheel>>) {
    snapshot.set(WheelSnapshot::from(&*wheel.borrow()));
}

/// Owns one wheel for the lifetime of the calling component.
#[hook]
pub fn use_wheel(variant: WheelVariant) -> UseWheelHandle {
    let title = use_mut_ref(String::new);
    let wheel = {
        let title = title.clone();
        use_mut_ref(move || {
            let (menu_title, wheel) = build_wheel(variant);
            *title.borrow_mut() = menu_title;
            wheel
        })
    };
    let scheduled = use_mut_ref(|| None::<ScheduledResolution>);
    let snapshot = {
        let wheel = wheel.clone();
        use_state(move || WheelSnapshot::from(&*wheel.borrow()))
    };
    let outcome = use_state(|| None::<SpinOutcome>);

    // A wheel discarded mid-spin must not resolve later
    {
        let wheel = wheel.clone();
        let scheduled = scheduled.clone();
        use_effect_with((), move |_| {
            move || {
                if let Some(pending) = scheduled.borrow_mut().take() {
                    wheel.borrow_mut().cancel_spin(&pending.spin);
                }
            }
        });
    }

    let spin = {
        let wheel = wheel.clone();
        let scheduled = scheduled.clone();
        let snapshot = snapshot.clone();
        let outcome = outcome.clone();

        Callback::from(move |_: ()| {
            let started = wheel.borrow_mut().begin_spin(&mut rand::thread_rng());
            let spin = match started {
                Some(spin) => spin,
                None => return,
            };

            outcome.set(None);
            refresh(&snapshot, &wheel);

            let timeout = {
                let wheel = wheel.clone();
                let snapshot = snapshot.clone();
                let outcome = outcome.clone();
                Timeout::new(spin.delay_ms, move || {
                    let resolved = wheel.borrow_mut().resolve_spin(&spin);
                    if let Some(result) = resolved {
                        outcome.set(Some(result));
                    }
                    refresh(&snapshot, &wheel);
                })
            };

            // Replacing an already fired timer is harmless
            *scheduled.borrow_mut() = Some(ScheduledResolution {
                spin,
                _timeout: timeout,
            });
        })
    };

    let dismiss = {
        let outcome = outcome.clone();
        Callback::from(move |_: ()| outcome.set(None))
    };

    let disable = {
        let wheel = wheel.clone();
        let scheduled = scheduled.clone();
        let snapshot = snapshot.clone();
        Callback::from(move |reason: WheelError| {
            scheduled.borrow_mut().take();
            wheel.borrow_mut().mark_inert(reason);
            refresh(&snapshot, &wheel);
        })
    };

    let title = title.borrow().clone();
    UseWheelHandle {
        title,
        snapshot: (*snapshot).clone(),
        outcome: (*outcome).clone(),
        spin,
        dismiss,
        disable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::build_wheel_from;

    #[test]
    fn test_snapshot_of_ready_wheel() {
        let (_, wheel) = build_wheel(WheelVariant::Classic);
        let snapshot = WheelSnapshot::from(&wheel);

        assert_eq!(snapshot.sectors.len(), 15);
        assert_eq!(snapshot.rotation, 0.0);
        assert!(!snapshot.is_spinning);
        assert!(!snapshot.is_inert);
        assert!(snapshot.error.is_none());
    }

    #[test]
    fn test_snapshot_of_inert_wheel_carries_error() {
        let (_, wheel) = build_wheel_from("[]", WheelVariant::Adaptive);
        let snapshot = WheelSnapshot::from(&wheel);

        assert!(snapshot.sectors.is_empty());
        assert!(snapshot.is_inert);
        assert!(snapshot.error.is_some());
    }

    #[test]
    fn test_snapshot_follows_spin() {
        let (_, mut wheel) = build_wheel(WheelVariant::Classic);
        let spin = wheel.begin_spin(&mut rand::thread_rng()).unwrap();

        let spinning = WheelSnapshot::from(&wheel);
        assert!(spinning.is_spinning);
        assert_eq!(spinning.rotation, spin.target_rotation);

        wheel.resolve_spin(&spin);
        assert!(!WheelSnapshot::from(&wheel).is_spinning);
    }
}
