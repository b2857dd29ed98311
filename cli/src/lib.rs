pub mod config;
pub mod input;
pub mod play;
pub mod render;

pub use config::*;
pub use input::*;
pub use play::*;
pub use render::*;
