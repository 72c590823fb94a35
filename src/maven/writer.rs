use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Error, Result};

#[cfg(unix)]
const SETTINGS_MODE: u32 = 0o644;

/// Replace every occurrence of `old` with `new` in the file at `path` and
/// return the number of occurrences replaced.
///
/// The file is patched at byte level; every byte around the substituted
/// token is preserved exactly. Zero occurrences leaves the file untouched.
///
/// The write goes through a temp file in the same directory followed by a
/// rename, so a crash mid-write never leaves a truncated settings file.
pub fn replace_token(path: &Path, old: &str, new: &str) -> Result<usize> {
    let input = fs::read(path).map_err(|source| Error::FileRead {
        path: path.to_owned(),
        source,
    })?;

    let (output, replaced) = substitute(&input, old.as_bytes(), new.as_bytes());
    if replaced == 0 {
        warn!(path = %path.display(), "existing token not found in settings file, nothing to update");
        return Ok(0);
    }
    if output == input {
        debug!(path = %path.display(), "token already up to date");
        return Ok(replaced);
    }

    let tmp = tmp_path(path);
    fs::write(&tmp, &output).map_err(|source| Error::FileWrite {
        path: tmp.clone(),
        source,
    })?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&tmp, fs::Permissions::from_mode(SETTINGS_MODE)).map_err(|source| {
            Error::FileWrite {
                path: tmp.clone(),
                source,
            }
        })?;
    }
    fs::rename(&tmp, path).map_err(|source| Error::FileWrite {
        path: path.to_owned(),
        source,
    })?;

    Ok(replaced)
}

/// Sibling temp file: `settings.xml` -> `settings.xml.tmp`, same directory
/// so the final rename stays on one filesystem.
fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| "settings.xml".into());
    name.push(".tmp");
    path.with_file_name(name)
}

fn substitute(haystack: &[u8], needle: &[u8], replacement: &[u8]) -> (Vec<u8>, usize) {
    if needle.is_empty() {
        return (haystack.to_vec(), 0);
    }

    let mut out = Vec::with_capacity(haystack.len());
    let mut count = 0;
    let mut at = 0;
    while at < haystack.len() {
        if haystack[at..].starts_with(needle) {
            out.extend_from_slice(replacement);
            at += needle.len();
            count += 1;
        } else {
            out.push(haystack[at]);
            at += 1;
        }
    }
    (out, count)
}
