//! Azure CLI command execution.
//!
//! Runs `az` commands as subprocesses and returns their stdout.

use colored::Colorize;
use regex::Regex;
use std::error::Error;
use std::process::Command;
use std::sync::OnceLock;

/// Responses larger than this indicate a runaway query.
const MAX_STDOUT_BYTES: usize = 500_000;

/// Regex for splitting command strings while preserving quoted substrings.
static COMMAND_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_command_regex() -> &'static Regex {
    COMMAND_REGEX.get_or_init(|| {
        Regex::new(r#"'([^']*)'\s*|\"([^\"]*)\"\s*|([^'\s]*)\s*"#).expect("Invalid Regex")
    })
}

/// Run a shell command and return its stdout.
///
/// The command string is split on spaces, with quoted substrings preserved
/// so a Kusto query can be passed as a single argument.
pub fn run(cmd: &str) -> Result<String, Box<dyn Error>> {
    log::debug!("run({cmd})", cmd = cmd.on_blue());

    let cmds: Vec<&str> = split_and_strip(cmd);
    log::trace!("split cmds={:?}", cmds);

    let mut command = Command::new(cmds[0]);
    for arg in cmds.iter().skip(1) {
        command.arg(arg);
    }

    let output = command
        .output()
        .map_err(|e| format!("Failed to execute command: {e}"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        log::trace!(
            "code={code:?}, status={status}\nstderr=\n{stderr}",
            code = output.status.code(),
            status = output.status,
            stderr = stderr.red()
        );
        log::warn!(
            "{failed} to run {cmd}",
            failed = "failed".on_red(),
            cmd = cmd.on_blue()
        );
        return Err(format!("ERROR running: {stderr}").into());
    }

    log::debug!(
        "Success cmd: {cmd} stdout.len()={len}",
        len = output.stdout.len()
    );
    if output.stdout.len() > MAX_STDOUT_BYTES {
        return Err(format!(
            "Response too large: {} bytes for command: {:?}",
            output.stdout.len(),
            cmds
        )
        .into());
    }

    let stdout = String::from_utf8(output.stdout).map_err(|e| format!("Invalid UTF-8: {e}"))?;

    Ok(stdout)
}

/// Split a command string on spaces, preserving quoted substrings.
fn split_and_strip(input: &str) -> Vec<&str> {
    get_command_regex()
        .find_iter(input)
        .map(|m| m.as_str().trim().trim_matches('\'').trim_matches('"'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_and_strip_quoted() {
        let input = "az graph query -q 'resources | take 1' --output json";
        let expected = vec![
            "az",
            "graph",
            "query",
            "-q",
            "resources | take 1",
            "--output",
            "json",
        ];
        assert_eq!(split_and_strip(input), expected);
    }

    #[test]
    fn test_split_and_strip_nospaces() {
        assert_eq!(split_and_strip("NoSpacesHere"), vec!["NoSpacesHere"]);
    }

    #[test]
    fn test_split_and_strip_double_quotes() {
        let input = "echo \"two words\" tail";
        assert_eq!(split_and_strip(input), vec!["echo", "two words", "tail"]);
    }

    #[test]
    fn test_split_and_strip_empty_quotes() {
        let input = "Empty '' Single Quotes";
        assert_eq!(
            split_and_strip(input),
            vec!["Empty", "", "Single", "Quotes"]
        );
    }
}
