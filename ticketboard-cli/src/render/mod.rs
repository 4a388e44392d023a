//! Render layer
//!
//! Turns a board state into a view tree and the view tree into terminal
//! text. Nothing here performs I/O.

mod terminal;
mod view;
mod zone;

pub use terminal::render_board;
pub use view::BoardView;
pub use zone::DisplayZone;
