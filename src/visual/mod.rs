pub mod cursor;
pub mod hero;
pub mod hover;
pub mod particle_nodes;
pub mod plugin;
pub mod skills;
pub mod typography;
pub mod utils;
