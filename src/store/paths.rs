//! Path safety and identifier validation
//!
//! Blob paths are built from caller-supplied ids. Both helpers here run
//! before any filesystem access so a crafted id can never name a file
//! outside the cache root.

use crate::error::{PouchError, PouchResult};
use std::path::{Component, Path, PathBuf};
use uuid::Uuid;

/// Join `relative` onto `root` and reject any result outside `root`.
///
/// The joined path is lexically normalized (`.` and `..` resolved) before
/// the containment check. Containment is checked component-wise against the
/// normalized root, so a sibling directory that merely shares a name prefix
/// (`/cache-evil` next to `/cache`) cannot pass.
pub fn safe_join(root: &Path, relative: impl AsRef<Path>) -> PouchResult<PathBuf> {
    let relative = relative.as_ref();
    let root_normalized = normalize(root);
    let joined = normalize(&root.join(relative));

    if joined == root_normalized || !joined.starts_with(&root_normalized) {
        return Err(PouchError::PathEscape {
            path: relative.to_path_buf(),
        });
    }

    Ok(joined)
}

/// Parse a caller-supplied id string into a typed [`Uuid`].
///
/// Everything downstream builds filenames from the parsed value, never the
/// raw input string.
pub fn parse_id(input: &str) -> PouchResult<Uuid> {
    Uuid::parse_str(input).map_err(|_| PouchError::InvalidId(input.to_string()))
}

/// Lexical normalization: drops `.` components and resolves `..` against
/// preceding components without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => out.push(prefix.as_os_str()),
            Component::RootDir => out.push(Component::RootDir.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                // Unresolvable `..` (already at the top) is kept so the
                // containment check fails rather than silently clamping.
                if !out.pop() {
                    out.push(Component::ParentDir.as_os_str());
                }
            }
            Component::Normal(name) => out.push(name),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_inside_root() {
        let path = safe_join(Path::new("/cache"), "data/abc.data").unwrap();
        assert_eq!(path, PathBuf::from("/cache/data/abc.data"));
    }

    #[test]
    fn join_normalizes_dot_segments() {
        let path = safe_join(Path::new("/cache"), "data/./sub/../abc.data").unwrap();
        assert_eq!(path, PathBuf::from("/cache/data/abc.data"));
    }

    #[test]
    fn join_rejects_traversal() {
        let err = safe_join(Path::new("/cache"), "../../etc/passwd").unwrap_err();
        assert!(matches!(err, PouchError::PathEscape { .. }));
    }

    #[test]
    fn join_rejects_root_itself() {
        let err = safe_join(Path::new("/cache"), "data/..").unwrap_err();
        assert!(matches!(err, PouchError::PathEscape { .. }));
    }

    #[test]
    fn join_rejects_sibling_with_shared_prefix() {
        let err = safe_join(Path::new("/cache"), "../cache-evil/abc").unwrap_err();
        assert!(matches!(err, PouchError::PathEscape { .. }));
    }

    #[test]
    fn parse_id_accepts_canonical_uuid() {
        let id = parse_id("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
        assert_eq!(id.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
    }

    #[test]
    fn parse_id_rejects_garbage() {
        assert!(matches!(
            parse_id("not-a-uuid"),
            Err(PouchError::InvalidId(_))
        ));
    }

    #[test]
    fn parse_id_rejects_traversal_disguised_as_id() {
        assert!(matches!(
            parse_id("../../etc/passwd"),
            Err(PouchError::InvalidId(_))
        ));
    }
}
