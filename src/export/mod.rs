// Look output: the append-only CSV log and the system clipboard
pub mod clipboard;
pub mod csv_log;

pub use clipboard::{copy_look, format_look_text};
pub use csv_log::append_look;
