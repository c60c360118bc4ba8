use std::time::Duration;

use mealswipe_shared::{Meal, MealSlot, SwipeDirection};

use crate::{
    carousel::CarouselState,
    catalog::MealCatalog,
    filter::{self, FilterCriteria},
    gesture::{GestureEvent, GesturePhase, SWIPE_THRESHOLD, SwipeCommit, SwipeGestureAdapter},
    spring::SpringConfig,
};

/// Receives one notification per committed swipe.
pub trait SwipeObserver {
    fn on_swipe_change(&mut self, slot: MealSlot, direction: SwipeDirection);
}

impl<F: FnMut(MealSlot, SwipeDirection)> SwipeObserver for F {
    fn on_swipe_change(&mut self, slot: MealSlot, direction: SwipeDirection) {
        self(slot, direction)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SwipeObserver for NoopObserver {
    fn on_swipe_change(&mut self, _slot: MealSlot, _direction: SwipeDirection) {}
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuSettings {
    pub swipe_threshold: f32,
    pub spring: SpringConfig,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            swipe_threshold: SWIPE_THRESHOLD,
            spring: SpringConfig::default(),
        }
    }
}

/// What a slot shows on the current frame.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotView<'a> {
    Meal {
        slot: MealSlot,
        meal: &'a Meal,
        index: usize,
        total: usize,
        offset: f32,
    },
    /// Nothing matches the filters; there is no swipe target.
    Empty { slot: MealSlot },
}

impl<'a> SlotView<'a> {
    pub fn slot(&self) -> MealSlot {
        match self {
            SlotView::Meal { slot, .. } | SlotView::Empty { slot } => *slot,
        }
    }

    pub fn meal(&self) -> Option<&'a Meal> {
        match self {
            SlotView::Meal { meal, .. } => Some(*meal),
            SlotView::Empty { .. } => None,
        }
    }

    pub fn is_swipeable(&self) -> bool {
        matches!(self, SlotView::Meal { .. })
    }

    pub fn placeholder(slot: MealSlot) -> String {
        format!("No {slot} options match your filters")
    }
}

#[derive(Debug, Clone)]
struct SlotCarousel {
    carousel: CarouselState,
    gesture: SwipeGestureAdapter,
}

impl SlotCarousel {
    fn new(settings: &MenuSettings) -> Self {
        Self {
            carousel: CarouselState::new(),
            gesture: SwipeGestureAdapter::new(settings.swipe_threshold, settings.spring),
        }
    }
}

/// Swipeable three-slot menu over a catalog and the active preference
/// criteria. Every slot keeps its own cursor and gesture state.
pub struct MenuDisplay<O = NoopObserver> {
    catalog: MealCatalog,
    criteria: FilterCriteria,
    slots: [SlotCarousel; 3],
    observer: O,
}

impl MenuDisplay<NoopObserver> {
    pub fn new(catalog: MealCatalog) -> Self {
        Self::with_settings(catalog, MenuSettings::default(), NoopObserver)
    }
}

impl<O: SwipeObserver> MenuDisplay<O> {
    pub fn with_observer(catalog: MealCatalog, observer: O) -> Self {
        Self::with_settings(catalog, MenuSettings::default(), observer)
    }

    pub fn with_settings(catalog: MealCatalog, settings: MenuSettings, observer: O) -> Self {
        Self {
            catalog,
            criteria: FilterCriteria::any(),
            slots: std::array::from_fn(|_| SlotCarousel::new(&settings)),
            observer,
        }
    }

    pub fn catalog(&self) -> &MealCatalog {
        &self.catalog
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Replace the active criteria. Cursors are kept and reinterpreted
    /// against the new views.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.detach_empty_slots();
    }

    pub fn set_catalog(&mut self, catalog: MealCatalog) {
        self.catalog = catalog;
        self.detach_empty_slots();
    }

    pub fn view_len(&self, slot: MealSlot) -> usize {
        filter::view_len(self.catalog.meals(slot), &self.criteria)
    }

    pub fn cursor(&self, slot: MealSlot) -> usize {
        self.slots[slot.index()].carousel.cursor()
    }

    pub fn offset(&self, slot: MealSlot) -> f32 {
        self.slots[slot.index()].gesture.offset()
    }

    pub fn gesture_phase(&self, slot: MealSlot) -> GesturePhase {
        self.slots[slot.index()].gesture.phase()
    }

    pub fn current_meal(&self, slot: MealSlot) -> Option<&Meal> {
        self.slot_view(slot).meal()
    }

    pub fn slot_view(&self, slot: MealSlot) -> SlotView<'_> {
        let meals = self.catalog.meals(slot);
        let total = filter::view_len(meals, &self.criteria);
        let state = &self.slots[slot.index()];

        let shown = state
            .carousel
            .current_index(total)
            .and_then(|index| Some((index, filter::nth_match(meals, &self.criteria, index)?)));

        match shown {
            Some((index, meal)) => SlotView::Meal {
                slot,
                meal,
                index,
                total,
                offset: state.gesture.offset(),
            },
            None => SlotView::Empty { slot },
        }
    }

    /// Views for breakfast, lunch and dinner, in that order.
    pub fn render(&self) -> [SlotView<'_>; 3] {
        MealSlot::ALL.map(|slot| self.slot_view(slot))
    }

    /// Route a gesture event to `slot`. Returns the direction of a committed
    /// swipe after the cursor has moved and the observer has been notified.
    pub fn handle_gesture(
        &mut self,
        slot: MealSlot,
        event: GestureEvent,
    ) -> Option<SwipeDirection> {
        let len = self.view_len(slot);
        let state = &mut self.slots[slot.index()];

        if len == 0 {
            state.gesture.cancel();
            tracing::trace!(%slot, ?event, "no swipe target, gesture dropped");
            return None;
        }

        let commit = state.gesture.handle(event)?;
        match commit {
            SwipeCommit::Advance => state.carousel.advance(len),
            SwipeCommit::Retreat => state.carousel.retreat(len),
        }

        let direction = commit.direction();
        tracing::debug!(
            %slot,
            %direction,
            cursor = state.carousel.cursor(),
            len,
            "swipe committed"
        );
        self.observer.on_swipe_change(slot, direction);

        Some(direction)
    }

    /// Advance every settle animation by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        for state in &mut self.slots {
            state.gesture.tick(dt);
        }
    }

    /// Whether every slot is idle with its offset back at zero.
    pub fn is_settled(&self) -> bool {
        self.slots.iter().all(|state| state.gesture.is_idle())
    }

    fn detach_empty_slots(&mut self) {
        for slot in MealSlot::ALL {
            if self.view_len(slot) == 0 {
                self.slots[slot.index()].gesture.cancel();
            }
        }
    }
}
