pub mod events;
pub mod modal;
pub mod select;

pub use {events::*, modal::*, select::*};
