use std::time::Duration;

use mealswipe_shared::SwipeDirection;

use crate::spring::{Spring, SpringConfig};

/// Release translation a drag must exceed (strictly) to commit a swipe.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Raw input from a horizontal pan recognizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Begin,
    /// Cumulative horizontal translation since `Begin`.
    Update { translation_x: f32 },
    End { translation_x: f32 },
    /// Input was interrupted before release (multi-touch conflict, teardown).
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    Dragging,
    /// Released; the offset is springing back to zero.
    Settling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeCommit {
    /// Swipe left, show the next meal.
    Advance,
    /// Swipe right, show the previous meal.
    Retreat,
}

impl SwipeCommit {
    pub fn direction(self) -> SwipeDirection {
        match self {
            SwipeCommit::Advance => SwipeDirection::Left,
            SwipeCommit::Retreat => SwipeDirection::Right,
        }
    }
}

/// Decide what a released drag commits to, if anything.
pub fn classify(translation_x: f32, threshold: f32) -> Option<SwipeCommit> {
    if translation_x < -threshold {
        Some(SwipeCommit::Advance)
    } else if translation_x > threshold {
        Some(SwipeCommit::Retreat)
    } else {
        None
    }
}

/// Turns a continuous drag into at most one discrete commit plus a visual
/// offset that always returns to zero.
#[derive(Debug, Clone)]
pub struct SwipeGestureAdapter {
    phase: GesturePhase,
    offset: Spring,
    threshold: f32,
}

impl Default for SwipeGestureAdapter {
    fn default() -> Self {
        Self::new(SWIPE_THRESHOLD, SpringConfig::default())
    }
}

impl SwipeGestureAdapter {
    pub fn new(threshold: f32, spring: SpringConfig) -> Self {
        Self {
            phase: GesturePhase::Idle,
            offset: Spring::new(spring),
            threshold: threshold.abs(),
        }
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn offset(&self) -> f32 {
        self.offset.position()
    }

    pub fn is_idle(&self) -> bool {
        self.phase == GesturePhase::Idle
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == GesturePhase::Dragging
    }

    /// Feed one input event. Returns the commit produced by a release past
    /// the threshold; events that don't fit the current phase are ignored.
    /// A non-finite translation aborts the drag from the last finite offset.
    pub fn handle(&mut self, event: GestureEvent) -> Option<SwipeCommit> {
        match (self.phase, event) {
            (GesturePhase::Idle | GesturePhase::Settling, GestureEvent::Begin) => {
                // A new drag takes over the offset wherever the settle left it.
                let position = self.offset.position();
                self.offset.set(position);
                self.phase = GesturePhase::Dragging;
                None
            }
            (
                GesturePhase::Dragging,
                GestureEvent::Update { translation_x } | GestureEvent::End { translation_x },
            ) if !translation_x.is_finite() => {
                tracing::debug!(?event, "non-finite translation, drag cancelled");
                self.settle();
                None
            }
            (GesturePhase::Dragging, GestureEvent::Update { translation_x }) => {
                self.offset.set(translation_x);
                None
            }
            (GesturePhase::Dragging, GestureEvent::End { translation_x }) => {
                self.offset.set(translation_x);
                self.settle();
                classify(translation_x, self.threshold)
            }
            (GesturePhase::Dragging, GestureEvent::Cancel) => {
                self.settle();
                None
            }
            (phase, event) => {
                tracing::trace!(?phase, ?event, "gesture event ignored");
                None
            }
        }
    }

    /// Abort a drag in progress without committing.
    pub fn cancel(&mut self) {
        if self.is_dragging() {
            self.handle(GestureEvent::Cancel);
        }
    }

    /// Advance the settle animation by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        if self.phase != GesturePhase::Settling {
            return;
        }

        if !self.offset.step(dt) {
            self.phase = GesturePhase::Idle;
        }
    }

    fn settle(&mut self) {
        self.offset.animate_to(0.0);
        self.phase = GesturePhase::Settling;
    }
}
