use std::{str::FromStr, time::Duration};

use anyhow::Result;
use mealswipe_menu::{GestureEvent, MenuDisplay, SwipeObserver, render_menu};
use mealswipe_shared::{MealSlot, SwipeDirection};
use tokio::time::{MissedTickBehavior, interval};

use super::FilterArgs;
use crate::config::Config;

/// One scripted drag on a slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub slot: MealSlot,
    pub translation_x: f32,
    /// Input is interrupted before release
    pub cancelled: bool,
}

impl Step {
    /// Events of a drag sampled at half and full translation.
    pub fn events(&self) -> Vec<GestureEvent> {
        let mut events = vec![
            GestureEvent::Begin,
            GestureEvent::Update {
                translation_x: self.translation_x / 2.0,
            },
            GestureEvent::Update {
                translation_x: self.translation_x,
            },
        ];
        events.push(if self.cancelled {
            GestureEvent::Cancel
        } else {
            GestureEvent::End {
                translation_x: self.translation_x,
            }
        });

        events
    }
}

/// `SLOT:DX` releases a drag at DX, `SLOT:cancel:DX` interrupts it there.
impl FromStr for Step {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = value.split(':').map(str::trim).collect();
        let (slot, cancelled, dx) = match parts.as_slice() {
            [slot, dx] => (slot, false, dx),
            [slot, "cancel", dx] => (slot, true, dx),
            _ => return Err(format!("expected SLOT:DX or SLOT:cancel:DX, got {value}")),
        };

        let slot = MealSlot::from_str(slot).map_err(|_| format!("unknown slot {slot}"))?;
        let translation_x = dx
            .parse::<f32>()
            .ok()
            .filter(|dx| dx.is_finite())
            .ok_or_else(|| format!("invalid translation {dx}"))?;

        Ok(Self {
            slot,
            translation_x,
            cancelled,
        })
    }
}

#[derive(Debug, Default)]
pub struct SimulationReport {
    pub swipes: Vec<(MealSlot, SwipeDirection)>,
    pub frames: u32,
    pub settled: bool,
    pub menu: String,
}

#[derive(Default)]
struct LoggingObserver {
    swipes: Vec<(MealSlot, SwipeDirection)>,
}

impl SwipeObserver for LoggingObserver {
    fn on_swipe_change(&mut self, slot: MealSlot, direction: SwipeDirection) {
        tracing::info!(%slot, %direction, "onSwipeChange");
        self.swipes.push((slot, direction));
    }
}

/// Play `steps` against the menu, one gesture event per frame, then keep
/// ticking until every offset has settled or the frame budget runs out.
#[tracing::instrument(skip(config, steps), fields(steps = steps.len()))]
pub async fn simulate(
    config: &Config,
    filters: &FilterArgs,
    steps: &[Step],
) -> Result<SimulationReport> {
    let catalog = super::load_catalog(config)?;
    let mut menu =
        MenuDisplay::with_settings(catalog, config.menu_settings(), LoggingObserver::default());
    menu.set_criteria(filters.criteria());

    let frame = config.frame_interval();
    let mut ticker = interval(frame);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut frames = 0;
    for step in steps {
        tracing::debug!(?step, "playing drag");
        for event in step.events() {
            menu.handle_gesture(step.slot, event);
            next_frame(&mut menu, &mut ticker, frame).await;
            frames += 1;
        }
    }

    let mut remaining = config.display.max_settle_frames;
    while !menu.is_settled() && remaining > 0 {
        next_frame(&mut menu, &mut ticker, frame).await;
        frames += 1;
        remaining -= 1;
    }

    let settled = menu.is_settled();
    if !settled {
        tracing::warn!(frames, "offsets still moving after the settle budget");
    }

    let rendered = render_menu(&menu.render(), config.display.card_width);
    Ok(SimulationReport {
        swipes: menu.into_observer().swipes,
        frames,
        settled,
        menu: rendered,
    })
}

async fn next_frame<O: SwipeObserver>(
    menu: &mut MenuDisplay<O>,
    ticker: &mut tokio::time::Interval,
    frame: Duration,
) {
    ticker.tick().await;
    menu.tick(frame);
}
