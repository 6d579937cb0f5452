//! Clear command - remove one entry or reset the cache

use crate::cli::args::ClearArgs;
use crate::error::PouchResult;
use crate::store::CacheManager;

/// Execute the clear command
pub async fn execute(args: ClearArgs, manager: &CacheManager) -> PouchResult<()> {
    if args.all {
        manager.clear_all().await?;
        println!("All cache entries cleared");
        return Ok(());
    }

    // clap's arg group guarantees an id when --all is absent
    let id = args.id.expect("clap enforces id or --all");
    manager.clear_one(&id).await?;
    println!("Cleared {id}");

    Ok(())
}
