pub mod badge;
pub mod github;
