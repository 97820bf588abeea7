pub mod pointer;
pub mod scroll;

pub use pointer::{wire_pointer_handlers, PointerWiring};
pub use scroll::{wire_scroll_handlers, ScrollWiring};
