pub mod config;
pub mod play;

pub use play::run_play;
