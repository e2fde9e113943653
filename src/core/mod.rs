pub mod config;
pub mod constants;
pub mod engine;
pub mod field;
pub mod particles;

pub use config::Config;
pub use engine::{Composite, Engine, Hsla, Surface};
