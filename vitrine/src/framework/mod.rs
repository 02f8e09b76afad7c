pub mod app;
pub mod boundary;
pub mod components;
pub mod dom;
pub mod js;
pub mod router;
pub mod styles;
pub mod theme;

pub use app::*;
pub use components::*;
pub use theme::*;
