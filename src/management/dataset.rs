use std::{io::Error, path::Path};

use crate::{dataset::FeatureTable, utils::ExportFormat};

#[derive(Debug)]
pub enum ExportError {
    IoError(Error),
    SerdeError(serde_json::Error),
}

impl From<Error> for ExportError {
    fn from(err: Error) -> Self {
        ExportError::IoError(err)
    }
}

pub struct DatasetManager {
    table: FeatureTable,
}

impl DatasetManager {
    pub fn new(table: FeatureTable) -> Self {
        Self { table }
    }

    pub async fn export(&self, path: &Path, format: &ExportFormat) -> Result<(), ExportError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                async_fs::create_dir_all(parent)
                    .await
                    .map_err(|e| ExportError::IoError(e))?;
            }
        }

        let payload = match format {
            ExportFormat::Csv => self.table.to_csv(),
            ExportFormat::Json => serde_json::to_string_pretty(&self.table)
                .map_err(|e| ExportError::SerdeError(e))?,
        };

        async_fs::write(path, payload)
            .await
            .map_err(|e| ExportError::IoError(e))
    }

    pub fn table(&self) -> &FeatureTable {
        &self.table
    }
}
