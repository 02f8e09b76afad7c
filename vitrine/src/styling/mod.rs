pub mod css;
pub mod error;
pub mod scan;
pub mod tokens;
pub mod utilities;

pub use error::StyleError;
