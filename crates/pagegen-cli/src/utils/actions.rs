//! GitHub Actions workflow-command emission.
//!
//! Workflow commands are plain lines on standard output that the Actions
//! runner interprets (`::debug::`, `::notice::`, `::add-mask::`). Outputs go
//! to the file named by `$GITHUB_OUTPUT` when the runner provides one.
//! Command data is percent-escaped so multi-line values survive the
//! line-oriented protocol.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Log an informational line to the build log.
pub fn info(message: &str) {
    println!("{message}");
}

/// Emit a debug line (shown when step debugging is enabled).
pub fn debug(message: &str) {
    println!("::debug::{}", escape_data(message));
}

/// Emit a notice annotation.
pub fn notice(message: &str) {
    println!("::notice::{}", escape_data(message));
}

/// Register a value to be masked in the build log.
pub fn add_mask(value: &str) {
    println!("::add-mask::{}", escape_data(value));
}

/// Set a step output.
///
/// Appends to the file named by `$GITHUB_OUTPUT` when set; outside a runner,
/// falls back to printing the pair.
pub fn set_output(name: &str, value: &str) -> std::io::Result<()> {
    match std::env::var_os("GITHUB_OUTPUT") {
        Some(path) => set_output_to(Path::new(&path), name, value),
        None => {
            println!("{name}={value}");
            Ok(())
        },
    }
}

/// Append one `name=value` pair to an output file.
pub(crate) fn set_output_to(path: &Path, name: &str, value: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{name}={value}")
}

/// Percent-escape workflow-command data (`%`, CR, LF).
fn escape_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
