use std::io::Write;
use std::path::{Path, PathBuf};
use log::debug;
use tempfile::NamedTempFile;
use crate::error::{create_playlist_error, PlaylistError, PlaylistErrorKind};

macro_rules! cant_write_result {
    ($path:expr, $err:expr) => {
        create_playlist_error!(PlaylistErrorKind::Write, "failed to write m3u playlist: {} - {}", $path.display(), $err)
    }
}

fn get_target_dir(m3u_path: &Path) -> PathBuf {
    match m3u_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Writes the complete playlist document. The content is staged in a temp file next to
/// the target and renamed over it, an existing playlist stays untouched if writing fails.
pub fn m3u_write_playlist(m3u_path: &Path, content: &str) -> Result<(), PlaylistError> {
    let target_dir = get_target_dir(m3u_path);
    let mut temp_file = NamedTempFile::new_in(&target_dir).map_err(|err| cant_write_result!(m3u_path, err))?;
    temp_file.write_all(content.as_bytes()).map_err(|err| cant_write_result!(m3u_path, err))?;
    temp_file.flush().map_err(|err| cant_write_result!(m3u_path, err))?;
    temp_file.persist(m3u_path).map_err(|err| cant_write_result!(m3u_path, err.error))?;
    debug!("persisted {} bytes to {}", content.len(), m3u_path.display());
    Ok(())
}
