mod pointer;
mod scroll;
mod ui;

pub use pointer::{wire_canvas_resize, wire_pointer_move};
pub use scroll::wire_scroll_effects;
pub use ui::{wire_email_form, wire_listen_button, wire_modal};
