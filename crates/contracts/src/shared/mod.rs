pub mod aggregate;
pub mod alerts;
pub mod filter;
pub mod format;
pub mod persona;
pub mod time_window;
pub mod widgets;
