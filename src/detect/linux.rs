//! Linux pipe writer detection via /proc
//!
//! Our stdin symlink (`/proc/self/fd/0`) names the pipe as `pipe:[inode]`.
//! The writer is whichever other process has the same pipe open on its
//! stdout, so we scan `/proc/<pid>/fd/1` links and read that process's
//! command line.

use tokio::fs;

pub async fn detect() -> Result<String, String> {
    let inode = stdin_pipe_inode().await?;
    find_writer(&inode).await
}

/// Read the `pipe:[inode]` target behind our own stdin
async fn stdin_pipe_inode() -> Result<String, String> {
    let target = fs::read_link("/proc/self/fd/0")
        .await
        .map_err(|e| format!("readlink /proc/self/fd/0: {e}"))?;

    let target = target.to_string_lossy().into_owned();
    if !target.starts_with("pipe:[") {
        return Err(format!("stdin is not a pipe: {target}"));
    }
    Ok(target)
}

/// Scan /proc for another process whose stdout is the same pipe
async fn find_writer(pipe_target: &str) -> Result<String, String> {
    let own_pid = std::process::id().to_string();

    let mut proc_entries = fs::read_dir("/proc")
        .await
        .map_err(|e| format!("reading /proc: {e}"))?;

    while let Ok(Some(entry)) = proc_entries.next_entry().await {
        let pid = entry.file_name().to_string_lossy().into_owned();
        if pid == own_pid || !pid.bytes().all(|b| b.is_ascii_digit()) {
            continue;
        }

        let stdout_link = format!("/proc/{pid}/fd/1");
        match fs::read_link(&stdout_link).await {
            Ok(target) if target.to_string_lossy() == pipe_target => {
                return command_line(&pid).await;
            }
            _ => continue,
        }
    }

    Err(format!("no process found writing to {pipe_target}"))
}

/// Reconstruct the writer's command line from /proc/<pid>/cmdline
async fn command_line(pid: &str) -> Result<String, String> {
    let raw = fs::read(format!("/proc/{pid}/cmdline"))
        .await
        .map_err(|e| format!("reading cmdline for pid {pid}: {e}"))?;

    let command = raw
        .split(|b| *b == 0)
        .filter(|part| !part.is_empty())
        .map(|part| String::from_utf8_lossy(part).into_owned())
        .collect::<Vec<_>>()
        .join(" ");

    if command.is_empty() {
        Err(format!("empty cmdline for pid {pid}"))
    } else {
        Ok(command)
    }
}
