use std::process::Command;
use tracing::debug;

/// Build a process for a developer tool found on `PATH`.
///
/// `flutter` and friends are `.bat` files on Windows, and `CreateProcess`
/// only resolves `.exe` names, so the tool is launched through `cmd /C`.
pub fn tool_command(program: &str) -> Command {
    debug!("Resolving {} through cmd /C", program);
    let mut command = Command::new("cmd");
    command.arg("/C").arg(program);
    command
}
