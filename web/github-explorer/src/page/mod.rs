mod badge;
mod home;
mod user;

pub use badge::*;
pub use home::*;
pub use user::*;
