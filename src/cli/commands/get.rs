//! Get command - print a cached payload

use crate::cli::args::GetArgs;
use crate::error::{PouchError, PouchResult};
use crate::store::CacheManager;
use tokio::io::AsyncWriteExt;

/// Execute the get command
pub async fn execute(args: GetArgs, manager: &CacheManager) -> PouchResult<()> {
    let data = manager.retrieve(&args.id).await?;

    match args.output {
        Some(path) => {
            tokio::fs::write(&path, &data)
                .await
                .map_err(|e| PouchError::io(format!("writing output to {}", path.display()), e))?;
            eprintln!("Wrote {} bytes to {}", data.len(), path.display());
        }
        None => {
            // Payloads can be binary, so write raw bytes rather than printing
            let mut stdout = tokio::io::stdout();
            stdout
                .write_all(&data)
                .await
                .map_err(|e| PouchError::io("writing to stdout", e))?;
            stdout
                .flush()
                .await
                .map_err(|e| PouchError::io("flushing stdout", e))?;
        }
    }

    Ok(())
}
