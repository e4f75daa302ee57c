#[cfg(windows)]
pub mod windows;

#[cfg(not(windows))]
pub mod unix;

#[cfg(windows)]
pub use windows::tool_command;

#[cfg(not(windows))]
pub use unix::tool_command;
