//! Filesystem locations for persisted client state and trace output.

use std::env;
use std::path::PathBuf;

/// Overrides the data directory when set.
pub const DATA_DIR_VAR: &str = "DWIJABAKE_DATA_DIR";

/// Returns the directory holding `preferences.json` and trace files.
///
/// Resolution order: `DWIJABAKE_DATA_DIR`, `$XDG_DATA_HOME/dwijabake`,
/// `$HOME/.local/share/dwijabake`, then `./.dwijabake`.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    resolve_data_dir(
        env::var_os(DATA_DIR_VAR).map(PathBuf::from),
        env::var_os("XDG_DATA_HOME").map(PathBuf::from),
        env::var_os("HOME").map(PathBuf::from),
    )
}

fn resolve_data_dir(explicit: Option<PathBuf>, xdg: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    let non_empty = |p: &PathBuf| !p.as_os_str().is_empty();

    if let Some(dir) = explicit.filter(non_empty) {
        return dir;
    }
    if let Some(xdg) = xdg.filter(non_empty) {
        return xdg.join("dwijabake");
    }
    home.filter(non_empty).map_or_else(
        || PathBuf::from(".dwijabake"),
        |home| home.join(".local").join("share").join("dwijabake"),
    )
}

/// Expands a leading `~` to the home directory. Other paths are returned
/// unchanged, as is `~` itself when `HOME` is unset.
///
/// # Examples
///
/// ```
/// use dwijabake::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), std::path::PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = env::var_os("HOME").map(PathBuf::from);
    match (path, home) {
        ("~", Some(home)) => home,
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_resolution_order() {
        let home = Some(PathBuf::from("/home/baker"));
        assert_eq!(
            resolve_data_dir(Some("/srv/bake".into()), Some("/xdg".into()), home.clone()),
            PathBuf::from("/srv/bake")
        );
        assert_eq!(
            resolve_data_dir(None, Some("/xdg".into()), home.clone()),
            PathBuf::from("/xdg/dwijabake")
        );
        assert_eq!(
            resolve_data_dir(Some(PathBuf::new()), None, home),
            PathBuf::from("/home/baker/.local/share/dwijabake")
        );
        assert_eq!(resolve_data_dir(None, None, None), PathBuf::from(".dwijabake"));
    }
}
