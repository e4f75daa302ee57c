use std::process::Command;
use tracing::debug;

/// Build a process for a developer tool found on `PATH`.
///
/// Tools like `flutter` ship as shell scripts on Unix, which the kernel
/// runs directly through their shebang line.
pub fn tool_command(program: &str) -> Command {
    debug!("Resolving {} from PATH", program);
    Command::new(program)
}
