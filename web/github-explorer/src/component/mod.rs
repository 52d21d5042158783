mod copy_button;
mod navbar;
mod status;
mod title;

pub use copy_button::*;
pub use navbar::*;
pub use status::*;
pub use title::*;
