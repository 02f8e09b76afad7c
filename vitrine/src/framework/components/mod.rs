pub mod footer;
pub mod header;
pub mod nav;

pub use {footer::*, header::*, nav::*};
