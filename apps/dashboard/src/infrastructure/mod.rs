pub mod registry;
pub mod system;
