use super::migrations::init_with_migrations;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// An open SQLite connection with the schema migrated to the latest version.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database configured for this user, creating it on first use.
    pub fn new() -> Result<Db> {
        let config = Config::read()?;
        Self::open(Self::resolve_path(&config)?)
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Db> {
        let conn = Connection::open(path)?;
        Self::init(conn)
    }

    pub fn open_in_memory() -> Result<Db> {
        let conn = Connection::open_in_memory()?;
        Self::init(conn)
    }

    /// Raw connection to the configured database, schema untouched.
    pub fn new_without_migrations() -> Result<Connection> {
        let config = Config::read()?;
        Ok(Connection::open(Self::resolve_path(&config)?)?)
    }

    /// Absolute database paths are used as is; names are resolved inside the
    /// application data directory.
    pub fn resolve_path(config: &Config) -> Result<PathBuf> {
        let db_file = config.db_file();
        let path = Path::new(&db_file);
        if path.is_absolute() {
            return Ok(path.to_path_buf());
        }
        DataStorage::new().get_path(&db_file)
    }

    fn init(mut conn: Connection) -> Result<Db> {
        init_with_migrations(&mut conn)?;
        Ok(Db { conn })
    }
}
