use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::core::utils::ensure_dir;

use super::{KeyValueStore, Result};

const VALUE_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// Filesystem-backed store keeping one `<key>.json` file per key.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: PathBuf) -> Result<Self> {
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    pub fn value_path(&self, key: &str) -> PathBuf {
        self.root
            .join(format!("{}.{}", canonical_key(key), VALUE_EXTENSION))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.value_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&path)?;
        Ok(Some(data))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.value_path(key);
        let tmp = tmp_path(&path);
        write_file(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        debug!(key, path = %path.display(), bytes = value.len(), "value written");
        Ok(())
    }
}

/// Maps a key to a file stem that differs for every distinct key, even on
/// case-insensitive filesystems. Lowercase letters, digits and `-` pass
/// through, an uppercase letter becomes `_` plus its lowercase form, and
/// every other byte becomes `%XX`. The empty key maps to `_`.
fn canonical_key(key: &str) -> String {
    if key.is_empty() {
        return "_".into();
    }
    let mut stem = String::with_capacity(key.len());
    for byte in key.bytes() {
        match byte {
            b'a'..=b'z' | b'0'..=b'9' | b'-' => stem.push(char::from(byte)),
            b'A'..=b'Z' => {
                stem.push('_');
                stem.push(char::from(byte.to_ascii_lowercase()));
            }
            other => stem.push_str(&format!("%{other:02x}")),
        }
    }
    stem
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_key_reads_as_none() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("data")).unwrap();
        assert_eq!(store.get("meuCashTransacoes").unwrap(), None);
    }

    #[test]
    fn set_then_get_returns_value_and_leaves_no_tmp_file() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().to_path_buf()).unwrap();
        store.set("meuCashTransacoes", "[]").unwrap();
        assert_eq!(store.get("meuCashTransacoes").unwrap().as_deref(), Some("[]"));

        let path = store.value_path("meuCashTransacoes");
        assert!(path.exists());
        assert!(!tmp_path(&path).exists());
    }

    #[test]
    fn keys_are_encoded_into_file_names() {
        assert_eq!(canonical_key("meuCashTransacoes"), "meu_cash_transacoes");
        assert_eq!(canonical_key("../etc/passwd"), "%2e%2e%2fetc%2fpasswd");
        assert_eq!(canonical_key("a_b"), "a%5fb");
        assert_eq!(canonical_key(""), "_");
    }

    #[test]
    fn keys_differing_only_in_case_stay_separate() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().to_path_buf()).unwrap();
        store.set("Foo", "upper").unwrap();
        store.set("foo", "lower").unwrap();
        assert_eq!(store.get("Foo").unwrap().as_deref(), Some("upper"));
        assert_eq!(store.get("foo").unwrap().as_deref(), Some("lower"));
        assert_eq!(store.get("FOO").unwrap(), None);
        assert_ne!(store.value_path("Foo"), store.value_path("foo"));
    }
}
