use std::path::Path;
use walkdir::WalkDir;

/// Compute total size of a directory recursively. Unreadable entries count
/// as zero.
pub fn dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.metadata().ok())
        .map(|m| m.len())
        .sum()
}

/// Remove a directory and everything under it. Returns bytes freed on success.
/// A symlink is removed on its own and frees nothing from its target.
pub fn remove_tree(path: &Path) -> Result<u64, std::io::Error> {
    let size = if std::fs::symlink_metadata(path)?.file_type().is_symlink() {
        0
    } else {
        dir_size(path)
    };
    std::fs::remove_dir_all(path)?;
    Ok(size)
}

/// Format byte count as human-readable string.
pub fn format_size(bytes: u64) -> String {
    if bytes >= 1_073_741_824 {
        format!("{:.2} GB", bytes as f64 / 1_073_741_824.0)
    } else if bytes >= 1_048_576 {
        format!("{:.2} MB", bytes as f64 / 1_048_576.0)
    } else if bytes >= 1_024 {
        format!("{:.2} KB", bytes as f64 / 1_024.0)
    } else {
        format!("{} B", bytes)
    }
}

/// Shorten a path for display by replacing home dir with ~.
pub fn display_path(path: &Path) -> String {
    match dirs::home_dir() {
        Some(home) => match path.strip_prefix(&home) {
            Ok(relative) if !relative.as_os_str().is_empty() => {
                format!("~/{}", relative.display())
            }
            _ => path.display().to_string(),
        },
        None => path.display().to_string(),
    }
}
