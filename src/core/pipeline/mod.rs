pub mod polling;
pub mod running;
pub mod submitting;
