use std::time::Duration;

use serde::Deserialize;

/// Integration step used when advancing a spring.
const MAX_STEP_SECS: f32 = 0.001;

/// Physical parameters of a damped spring. The defaults give a slightly
/// underdamped settle of roughly two seconds from a full-width drag.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// Distance from the target below which the spring may come to rest.
    pub rest_displacement: f32,
    /// Speed below which the spring may come to rest.
    pub rest_speed: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 10.0,
            mass: 1.0,
            rest_displacement: 0.01,
            rest_speed: 2.0,
        }
    }
}

/// A scalar driven toward a target by a damped spring.
///
/// The spring never blocks: callers `step` it from their own frame clock and
/// may overwrite it at any time with `set` or `animate_to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    position: f32,
    velocity: f32,
    target: f32,
    animating: bool,
}

impl Spring {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            config,
            position: 0.0,
            velocity: 0.0,
            target: 0.0,
            animating: false,
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Jump to `position` and stop any running animation.
    pub fn set(&mut self, position: f32) {
        self.position = position;
        self.target = position;
        self.velocity = 0.0;
        self.animating = false;
    }

    /// Start moving toward `target` from the current position and velocity.
    pub fn animate_to(&mut self, target: f32) {
        self.target = target;
        self.animating = true;
    }

    /// Advance the animation by `dt`. Returns whether it is still running.
    pub fn step(&mut self, dt: Duration) -> bool {
        if !self.animating {
            return false;
        }

        let mut remaining = dt.as_secs_f32();
        while remaining > 0.0 && self.animating {
            let h = remaining.min(MAX_STEP_SECS);
            remaining -= h;

            let displacement = self.position - self.target;
            let force = -self.config.stiffness * displacement - self.config.damping * self.velocity;
            self.velocity += force / self.config.mass * h;
            self.position += self.velocity * h;

            if self.at_rest() {
                self.position = self.target;
                self.velocity = 0.0;
                self.animating = false;
            }
        }

        self.animating
    }

    fn at_rest(&self) -> bool {
        (self.position - self.target).abs() < self.config.rest_displacement
            && self.velocity.abs() < self.config.rest_speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn settle(spring: &mut Spring, max_frames: usize) -> Option<usize> {
        (1..=max_frames).find(|_| !spring.step(FRAME))
    }

    #[test]
    fn test_idle_spring_does_nothing() {
        let mut spring = Spring::new(SpringConfig::default());

        assert!(!spring.step(FRAME));
        assert_eq!(spring.position(), 0.0);
    }

    #[test]
    fn test_settles_exactly_on_target() {
        let mut spring = Spring::new(SpringConfig::default());
        spring.set(-240.0);
        spring.animate_to(0.0);

        let frames = settle(&mut spring, 600).expect("spring should come to rest");

        assert!(frames > 1, "settle should be animated, not a snap");
        assert_eq!(spring.position(), 0.0);
        assert_eq!(spring.velocity(), 0.0);
        assert!(!spring.is_animating());
    }

    /// Underdamped defaults overshoot the target before settling
    #[test]
    fn test_default_spring_overshoots() {
        let mut spring = Spring::new(SpringConfig::default());
        spring.set(120.0);
        spring.animate_to(0.0);

        let mut lowest = f32::MAX;
        while spring.step(FRAME) {
            lowest = lowest.min(spring.position());
        }

        assert!(lowest < 0.0);
    }

    #[test]
    fn test_set_interrupts_animation() {
        let mut spring = Spring::new(SpringConfig::default());
        spring.set(80.0);
        spring.animate_to(0.0);
        spring.step(FRAME);

        spring.set(-15.0);

        assert!(!spring.is_animating());
        assert_eq!(spring.position(), -15.0);
        assert!(!spring.step(FRAME));
    }

    #[test]
    fn test_already_at_target_rests_immediately() {
        let mut spring = Spring::new(SpringConfig::default());
        spring.animate_to(0.0);

        assert!(!spring.step(FRAME));
        assert_eq!(spring.position(), 0.0);
    }
}
