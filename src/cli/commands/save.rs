//! Save command - cache piped stdin

use crate::cli::args::SaveArgs;
use crate::config::Config;
use crate::detect;
use crate::error::{PouchError, PouchResult};
use crate::store::CacheManager;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::info;

/// Execute the save command
pub async fn execute(args: SaveArgs, manager: &CacheManager, config: &Config) -> PouchResult<()> {
    if !detect::is_piped() {
        return Err(PouchError::NotPiped);
    }

    let label = match args.label {
        Some(label) if !label.trim().is_empty() => label,
        _ => detect::pipe_writer_command()
            .await
            .ok_or(PouchError::LabelRequired)?,
    };

    let data = read_payload(tokio::io::stdin(), config.cache.max_payload_bytes).await?;
    info!("Read {} bytes from stdin", data.len());

    let id = manager.save(&label, &data).await?;
    println!("{id}");

    Ok(())
}

/// Read the payload fully, enforcing the configured cap when one is set
async fn read_payload<R>(reader: R, max_payload_bytes: u64) -> PouchResult<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let mut reader = reader;
    let mut data = Vec::new();

    if max_payload_bytes == 0 {
        reader
            .read_to_end(&mut data)
            .await
            .map_err(|e| PouchError::io("reading stdin", e))?;
        return Ok(data);
    }

    // Read one byte past the cap to tell "exactly at the limit" from "over"
    let mut limited = reader.take(max_payload_bytes.saturating_add(1));
    limited
        .read_to_end(&mut data)
        .await
        .map_err(|e| PouchError::io("reading stdin", e))?;

    if data.len() as u64 > max_payload_bytes {
        return Err(PouchError::PayloadTooLarge {
            limit: max_payload_bytes,
        });
    }

    Ok(data)
}
