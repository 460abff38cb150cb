mod interface;
mod spigot;
mod state;
mod status;

pub use interface::*;
pub use spigot::*;
pub use status::*;
