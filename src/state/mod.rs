// State management module.
// Session state, the selection controller, and the render model it derives.

pub mod controller;
pub mod render;
pub mod session;

pub use controller::{FETCH_ERROR_MESSAGE, SelectionController};
pub use render::{CategoryView, RenderModel};
pub use session::SessionState;
