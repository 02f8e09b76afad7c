pub mod elements;
pub mod layout;
pub mod modal;
pub mod root;

pub use {elements::*, layout::*, modal::*, root::*};
