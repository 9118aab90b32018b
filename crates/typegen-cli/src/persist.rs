use std::{fs, io, path::Path};
use thiserror::Error as ThisError;
use typegen_core::generate::Generation;

///
/// PersistError
///

#[derive(Debug, ThisError)]
pub enum PersistError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Write every produced document to `<dir>/<TypeName>.json`, creating the
/// directory first. Document names are artifact-safe by the time they get
/// here; the driver filters the rest.
pub fn write_documents(dir: &Path, run: &Generation, compact: bool) -> Result<(), PersistError> {
    fs::create_dir_all(dir)?;

    for doc in &run.documents {
        let text = if compact {
            doc.schema.to_json()?
        } else {
            doc.schema.to_json_pretty()?
        };

        let path = dir.join(format!("{}.json", doc.name));
        fs::write(&path, text)?;

        tracing::info!(path = %path.display(), "wrote schema document");
    }

    Ok(())
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use typegen_core::generate::generate;

    #[test]
    fn writes_one_file_per_document() {
        let dir = std::env::temp_dir().join(format!("typegen-persist-{}", std::process::id()));
        let run = generate(&typegen_fixtures::catalog());

        write_documents(&dir, &run, true).unwrap();

        let income = fs::read_to_string(dir.join("Income.json")).unwrap();
        assert!(income.starts_with("{\"discriminator\":\"incomeType\""));
        assert!(!dir.join("EmploymentIncome.json").exists());

        fs::remove_dir_all(&dir).ok();
    }
}
