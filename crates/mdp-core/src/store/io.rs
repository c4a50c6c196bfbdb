//! Reading entity folders from disk

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::warn;
use walkdir::WalkDir;

use crate::entity::frontmatter::{decode, parse_markdown};
use crate::error::{MdpError, Result};

/// One entity file decoded into its front matter type
pub(crate) struct EntityFile<T> {
    pub folder: String,
    pub relative_path: String,
    pub frontmatter: T,
    pub content: String,
}

/// List the immediate subdirectories of `base` in file-name order.
///
/// A missing `base` yields an empty list.
pub(crate) fn list_entity_folders(base: &Path) -> Vec<String> {
    if !base.is_dir() {
        return Vec::new();
    }

    WalkDir::new(base)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(error = %e, "Failed to read entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_dir())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .collect()
}

/// Read and decode a markdown file with front matter
pub(crate) fn read_markdown<T>(path: &Path) -> Result<(T, String)>
where
    T: DeserializeOwned + Default,
{
    let raw = fs::read_to_string(path)?;
    let parsed = parse_markdown(&raw).map_err(|e| MdpError::parse(path, e))?;
    let frontmatter = decode(parsed.frontmatter).map_err(|e| MdpError::parse(path, e))?;
    Ok((frontmatter, parsed.content))
}

/// Read every `<folder>/<folder>.md` under `base`, skipping unreadable ones.
///
/// `relative_base` is the project-relative prefix recorded as each file's path.
pub(crate) fn read_entity_files<T>(base: &Path, relative_base: &str) -> Vec<EntityFile<T>>
where
    T: DeserializeOwned + Default,
{
    let mut files = Vec::new();

    for folder in list_entity_folders(base) {
        let file_name = format!("{}.md", folder);
        let path = base.join(&folder).join(&file_name);

        match read_markdown::<T>(&path) {
            Ok((frontmatter, content)) => files.push(EntityFile {
                relative_path: format!("{}/{}/{}", relative_base, folder, file_name),
                folder,
                frontmatter,
                content,
            }),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Skipping unreadable entity file");
            }
        }
    }

    files
}
