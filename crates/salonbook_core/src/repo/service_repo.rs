//! Service catalog repository.
//!
//! # Responsibility
//! - CRUD over the `services` table.

use rusqlite::{params, params_from_iter, Connection, Row};
use uuid::Uuid;

use crate::model::service::{Service, ServiceId};
use crate::repo::{parse_uuid, RepoError, RepoResult};

/// Repository interface for the service catalog.
pub trait ServiceRepository {
    fn create_service(&self, title: &str) -> RepoResult<Service>;
    fn get_service(&self, id: ServiceId) -> RepoResult<Option<Service>>;
    /// Resolves a batch of IDs; IDs with no matching row are skipped.
    fn get_services(&self, ids: &[ServiceId]) -> RepoResult<Vec<Service>>;
    fn list_services(&self) -> RepoResult<Vec<Service>>;
    fn delete_service(&self, id: ServiceId) -> RepoResult<()>;
}

/// SQLite-backed service repository.
pub struct SqliteServiceRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteServiceRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ServiceRepository for SqliteServiceRepository<'_> {
    fn create_service(&self, title: &str) -> RepoResult<Service> {
        let service = Service::new(title);
        self.conn.execute(
            "INSERT INTO services (uuid, title) VALUES (?1, ?2);",
            params![service.id.to_string(), service.title.as_str()],
        )?;
        Ok(service)
    }

    fn get_service(&self, id: ServiceId) -> RepoResult<Option<Service>> {
        let mut stmt = self
            .conn
            .prepare("SELECT uuid, title FROM services WHERE uuid = ?1;")?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_service_row(row)?));
        }
        Ok(None)
    }

    fn get_services(&self, ids: &[ServiceId]) -> RepoResult<Vec<Service>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let mut stmt = self.conn.prepare(&format!(
            "SELECT uuid, title FROM services WHERE uuid IN ({placeholders}) ORDER BY title ASC;"
        ))?;
        let bind_values: Vec<String> = ids.iter().map(Uuid::to_string).collect();

        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut services = Vec::new();
        while let Some(row) = rows.next()? {
            services.push(parse_service_row(row)?);
        }
        Ok(services)
    }

    fn list_services(&self) -> RepoResult<Vec<Service>> {
        let mut stmt = self
            .conn
            .prepare("SELECT uuid, title FROM services ORDER BY title ASC, uuid ASC;")?;
        let mut rows = stmt.query([])?;
        let mut services = Vec::new();
        while let Some(row) = rows.next()? {
            services.push(parse_service_row(row)?);
        }
        Ok(services)
    }

    fn delete_service(&self, id: ServiceId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM services WHERE uuid = ?1;", [id.to_string()])?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }
}

pub(crate) fn parse_service_row(row: &Row<'_>) -> RepoResult<Service> {
    let uuid_text: String = row.get("uuid")?;
    let id = parse_uuid(&uuid_text, "services.uuid")?;
    Ok(Service {
        id,
        title: row.get("title")?,
    })
}
