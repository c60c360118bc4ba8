use mealswipe_menu::{GestureEvent, MenuDisplay, SwipeObserver};
use mealswipe_shared::{Cuisine, Meal, MealSlot, PriceTier, SwipeDirection};

#[derive(Default)]
pub struct RecordingObserver {
    pub events: Vec<(MealSlot, SwipeDirection)>,
}

impl SwipeObserver for RecordingObserver {
    fn on_swipe_change(&mut self, slot: MealSlot, direction: SwipeDirection) {
        self.events.push((slot, direction));
    }
}

pub fn meal(id: &str, cuisine: Cuisine, price: PriceTier) -> Meal {
    Meal::new(id, format!("Meal {id}"), cuisine, price)
}

/// Drag from rest to `dx` in two samples and release there.
pub fn drag<O: SwipeObserver>(
    menu: &mut MenuDisplay<O>,
    slot: MealSlot,
    dx: f32,
) -> Option<SwipeDirection> {
    menu.handle_gesture(slot, GestureEvent::Begin);
    menu.handle_gesture(
        slot,
        GestureEvent::Update {
            translation_x: dx / 2.0,
        },
    );
    menu.handle_gesture(slot, GestureEvent::Update { translation_x: dx });
    menu.handle_gesture(slot, GestureEvent::End { translation_x: dx })
}
