pub mod meal;
pub mod menu;
pub mod recipe;

pub use meal::*;
pub use menu::*;
pub use recipe::*;
