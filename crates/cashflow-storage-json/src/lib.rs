use std::{
    fs::{self, File},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use cashflow_core::{storage::LedgerStorage, CoreError};
use cashflow_domain::Ledger;
use tracing::debug;

const LEDGER_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// Filesystem-backed JSON persistence for ledger snapshots.
#[derive(Debug, Clone)]
pub struct JsonLedgerStorage {
    ledgers_dir: PathBuf,
}

impl JsonLedgerStorage {
    pub fn new(ledgers_dir: PathBuf) -> Result<Self, CoreError> {
        fs::create_dir_all(&ledgers_dir)?;
        Ok(Self { ledgers_dir })
    }

    pub fn ledgers_dir(&self) -> &Path {
        &self.ledgers_dir
    }

    pub fn ledger_path(&self, name: &str) -> PathBuf {
        self.ledgers_dir
            .join(format!("{}.{}", canonical_name(name), LEDGER_EXTENSION))
    }
}

impl LedgerStorage for JsonLedgerStorage {
    fn save_ledger(&self, name: &str, ledger: &Ledger) -> Result<(), CoreError> {
        save_ledger_to_path(ledger, &self.ledger_path(name))
    }

    fn load_ledger(&self, name: &str) -> Result<Ledger, CoreError> {
        let path = self.ledger_path(name);
        if !path.exists() {
            return Err(CoreError::LedgerNotFound(name.to_string()));
        }
        load_ledger_from_path(&path)
    }

    fn list_ledgers(&self) -> Result<Vec<String>, CoreError> {
        if !self.ledgers_dir.exists() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.ledgers_dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some(LEDGER_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn save_ledger_to_path(&self, ledger: &Ledger, path: &Path) -> Result<(), CoreError> {
        save_ledger_to_path(ledger, path)
    }

    fn load_ledger_from_path(&self, path: &Path) -> Result<Ledger, CoreError> {
        load_ledger_from_path(path)
    }
}

/// Saves a ledger to an arbitrary path on disk.
pub fn save_ledger_to_path(ledger: &Ledger, path: &Path) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = tmp_path(path);
    write_atomic(&tmp, &serialize_ledger(ledger)?)?;
    fs::rename(&tmp, path)?;
    debug!(
        path = %path.display(),
        transactions = ledger.transactions.len(),
        holdings = ledger.holdings.len(),
        "ledger saved"
    );
    Ok(())
}

/// Loads a ledger from the provided filesystem path.
pub fn load_ledger_from_path(path: &Path) -> Result<Ledger, CoreError> {
    let data = fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => CoreError::LedgerNotFound(path.display().to_string()),
        _ => CoreError::Io(err),
    })?;
    let ledger: Ledger =
        serde_json::from_str(&data).map_err(|err| CoreError::Serde(err.to_string()))?;
    debug!(
        path = %path.display(),
        transactions = ledger.transactions.len(),
        holdings = ledger.holdings.len(),
        "ledger loaded"
    );
    Ok(ledger)
}

fn canonical_name(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '-' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "ledger".into()
    } else {
        sanitized
    }
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

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

fn serialize_ledger(ledger: &Ledger) -> Result<String, CoreError> {
    serde_json::to_string_pretty(ledger).map_err(|err| CoreError::Serde(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_name_slugs_and_falls_back() {
        assert_eq!(canonical_name("  Family Budget "), "family_budget");
        assert_eq!(canonical_name("q3-plan"), "q3-plan");
        assert_eq!(canonical_name("!!!"), "ledger");
    }

    #[test]
    fn tmp_path_appends_suffix_to_extension() {
        assert_eq!(
            tmp_path(Path::new("/data/home.json")),
            PathBuf::from("/data/home.json.tmp")
        );
        assert_eq!(tmp_path(Path::new("/data/home")), PathBuf::from("/data/home.tmp"));
    }
}
