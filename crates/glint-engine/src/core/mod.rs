//! Application-facing contract of the runtime.

mod app;

pub use app::{App, AppControl};
