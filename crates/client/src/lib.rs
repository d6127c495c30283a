//! Server rendered components of the DOOR landing page

mod components;
pub use components::*;

mod render;
pub use render::*;
