pub mod card;
pub mod carousel;
pub mod catalog;
pub mod display;
pub mod error;
pub mod filter;
pub mod gesture;
pub mod preferences;
pub mod spring;

pub use card::{MealCard, SWIPE_HINT, render_menu};
pub use carousel::CarouselState;
pub use catalog::MealCatalog;
pub use display::{MenuDisplay, MenuSettings, NoopObserver, SlotView, SwipeObserver};
pub use error::{MenuError, Result};
pub use filter::FilterCriteria;
pub use gesture::{GestureEvent, GesturePhase, SWIPE_THRESHOLD, SwipeCommit, SwipeGestureAdapter};
pub use preferences::PreferenceFilters;
pub use spring::{Spring, SpringConfig};

pub use mealswipe_shared::{Cuisine, Meal, MealSlot, PriceTier, SwipeDirection};
