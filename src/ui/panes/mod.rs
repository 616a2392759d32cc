//! TUI pane rendering modules
//!
//! Each pane is a stateless `render_*` function drawing one region of the
//! screen from engine state. Scrollable panes take a mutable offset that the
//! caller owns.

pub mod buffer;
pub mod console;
pub mod memory;
pub mod registers;
pub mod source;
pub mod status;

pub use buffer::render_buffer_pane;
pub use console::render_console_pane;
pub use memory::render_memory_pane;
pub use registers::render_registers_pane;
pub use source::render_source_pane;
pub use status::render_status_bar;
