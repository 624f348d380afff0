pub mod system;
pub mod texture;
