//! macOS pipe writer detection via lsof
//!
//! No /proc here, so we ask lsof which processes hold our stdin pipe's
//! inode open for writing and take the first command that is not us.

use std::os::unix::fs::MetadataExt;
use tokio::process::Command;

pub async fn detect() -> Result<String, String> {
    let inode = stdin_pipe_inode()?;
    find_writer(inode).await
}

/// Inode of the pipe behind stdin
fn stdin_pipe_inode() -> Result<u64, String> {
    let meta = std::fs::metadata("/dev/fd/0").map_err(|e| format!("stat stdin: {e}"))?;
    Ok(meta.ino())
}

/// Ask lsof for processes with this pipe open and pick the writer
async fn find_writer(inode: u64) -> Result<String, String> {
    let output = Command::new("lsof")
        .args(["-Fcn", "-d", "1"])
        .output()
        .await
        .map_err(|e| format!("running lsof: {e}"))?;

    if !output.status.success() {
        return Err(format!(
            "lsof exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        ));
    }

    parse_lsof(&String::from_utf8_lossy(&output.stdout), inode)
}

/// Walk lsof field output (`c<command>` / `n<name>` records) looking for a
/// name record carrying our inode, and report that record's command.
fn parse_lsof(output: &str, inode: u64) -> Result<String, String> {
    let needle = inode.to_string();
    let mut current_command = "";

    for line in output.lines() {
        if let Some(command) = line.strip_prefix('c') {
            current_command = command;
        } else if let Some(name) = line.strip_prefix('n') {
            if name.contains(&needle) && !current_command.is_empty() {
                return Ok(current_command.to_string());
            }
        }
    }

    Err(format!("no process found writing to pipe inode {inode}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_lsof_matches_inode_to_command() {
        let output = "p100\ncbash\nn->0xdead\np200\ncsubfinder\nnpipe 4242\n";
        assert_eq!(parse_lsof(output, 4242).unwrap(), "subfinder");
    }

    #[test]
    fn parse_lsof_no_match() {
        let output = "p100\ncbash\nn->0xdead\n";
        assert!(parse_lsof(output, 4242).is_err());
    }
}
