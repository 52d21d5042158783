mod fetch;
mod theme;

pub use fetch::*;
pub use theme::*;
