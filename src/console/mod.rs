//! Console module - logging and the operator prompt.

pub mod logger;
pub mod tty;

pub use logger::init as init_logger;
pub use tty::run as run_tty;
