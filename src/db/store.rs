//! Record store: table creation, JSON import and row listing.

use std::path::{Path, PathBuf};

use diesel::prelude::*;
use tracing::{debug, info, warn};

use crate::db::database::{Database, DatabaseConfig};
use crate::db::models::{NewRecord, StoredRecord};
use crate::db::schema::{create_table_sql, dados};
use crate::error::StoreError;
use crate::serialization::{read_records_file, JSON_EXTENSION};
use crate::source::files_with_extension;

/// Default database file of the load command.
pub const DEFAULT_DATABASE: &str = "dados.sqlite3";

/// Result of importing one JSON file.
#[derive(Debug)]
pub struct ImportOutcome {
    pub source: PathBuf,
    pub result: Result<usize, StoreError>,
}

/// Per-file outcomes of one import run, in processing order.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub outcomes: Vec<ImportOutcome>,
}

impl ImportReport {
    /// Number of files imported without error.
    pub fn imported(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    /// Total rows inserted.
    pub fn rows(&self) -> usize {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok())
            .sum()
    }
}

/// SQLite-backed store of decoded records.
pub struct RecordStore {
    db: Database,
}

impl RecordStore {
    /// Open the store at `path`, creating the file if it does not exist.
    ///
    /// A connection failure here is fatal to the run.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        Self::open_with_config(path, DatabaseConfig::default())
    }

    pub fn open_with_config(path: &Path, config: DatabaseConfig) -> Result<Self, StoreError> {
        let url = path.to_string_lossy();
        let db = Database::new_with_config(&url, config)?;
        db.test_connection()?;
        debug!(database = %url, "opened record store");
        Ok(Self { db })
    }

    /// Create the `dados` table if absent.
    pub fn create_table(&self) -> Result<(), StoreError> {
        let mut conn = self.db.get_connection()?;
        diesel::sql_query(create_table_sql()).execute(&mut conn)?;
        Ok(())
    }

    /// Insert rows in one transaction. Either all rows are stored or none.
    pub fn insert_records(&self, rows: &[NewRecord]) -> Result<usize, StoreError> {
        let mut conn = self.db.get_connection()?;
        let inserted = conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let mut count = 0;
            for row in rows {
                count += diesel::insert_into(dados::table).values(row).execute(conn)?;
            }
            Ok(count)
        })?;
        Ok(inserted)
    }

    /// Import one JSON record file.
    pub fn import_file(&self, path: &Path) -> Result<usize, StoreError> {
        let rows: Vec<NewRecord> = read_records_file(path)?
            .iter()
            .map(NewRecord::from_fields)
            .collect();
        self.insert_records(&rows)
    }

    /// Import every JSON file in `dir`.
    ///
    /// A file that fails is rolled back and reported; the others still load.
    pub fn import_directory(&self, dir: &Path) -> Result<ImportReport, StoreError> {
        let mut report = ImportReport::default();

        for source in files_with_extension(dir, JSON_EXTENSION)? {
            let result = self.import_file(&source);
            match &result {
                Ok(rows) => info!(source = %source.display(), rows, "imported"),
                Err(e) => warn!(source = %source.display(), error = %e, "import failed"),
            }
            report.outcomes.push(ImportOutcome { source, result });
        }

        Ok(report)
    }

    /// Every stored row, in insertion order.
    pub fn all_records(&self) -> Result<Vec<StoredRecord>, StoreError> {
        let mut conn = self.db.get_connection()?;
        let rows = dados::table
            .select(StoredRecord::as_select())
            .order(dados::rowid.asc())
            .load(&mut conn)?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::LoadedRecord;
    use std::fs;

    fn open_temp() -> (tempfile::TempDir, RecordStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::open(&dir.path().join("test.sqlite3")).unwrap();
        store.create_table().unwrap();
        (dir, store)
    }

    #[test]
    fn test_create_table_is_idempotent() {
        let (_dir, store) = open_temp();
        store.create_table().unwrap();
        assert!(store.all_records().unwrap().is_empty());
    }

    #[test]
    fn test_insert_and_read_back() {
        let (_dir, store) = open_temp();

        let mut fields = LoadedRecord::new();
        fields.insert("Tipo".to_string(), Some("R10".to_string()));
        fields.insert("Dia".to_string(), Some(String::new()));

        let inserted = store
            .insert_records(&[NewRecord::from_fields(&fields), NewRecord::default()])
            .unwrap();
        assert_eq!(inserted, 2);

        let rows = store.all_records().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("Tipo"), Some("R10"));
        assert_eq!(rows[0].dia.as_deref(), Some(""));
        assert_eq!(rows[0].cnpj, None);
        assert_eq!(rows[1].tipo, None);
        assert!(rows[0].rowid < rows[1].rowid);
    }

    #[test]
    fn test_import_directory_reports_bad_files() {
        let (dir, store) = open_temp();
        let data = dir.path().join("data");
        fs::create_dir(&data).unwrap();
        fs::write(data.join("a.json"), r#"[{"Tipo": "R10"}, {"Tipo": "R10", "Dia": null}]"#).unwrap();
        fs::write(data.join("b.json"), "not json").unwrap();
        fs::write(data.join("c.json"), r#"[{"Tipo": "R10", "Extra": "ignored"}]"#).unwrap();

        let report = store.import_directory(&data).unwrap();

        assert_eq!(report.outcomes.len(), 3);
        assert_eq!(report.imported(), 2);
        assert_eq!(report.rows(), 3);
        assert!(matches!(report.outcomes[1].result, Err(StoreError::Serialization(_))));
        assert_eq!(store.all_records().unwrap().len(), 3);
    }

    #[test]
    fn test_import_missing_directory() {
        let (dir, store) = open_temp();
        let result = store.import_directory(&dir.path().join("missing"));
        assert!(matches!(result, Err(StoreError::Source(_))));
    }

    #[test]
    fn test_open_fails_for_unreachable_path() {
        let config = DatabaseConfig {
            connection_timeout_secs: 1,
            ..DatabaseConfig::default()
        };
        let result = RecordStore::open_with_config(Path::new("/nonexistent/dir/db.sqlite3"), config);
        assert!(matches!(result, Err(StoreError::Connection { .. })));
    }
}
