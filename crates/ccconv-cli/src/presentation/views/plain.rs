use crate::presentation::formatters::format_scalar;
use ccconv_engine::Projection;
use ccconv_types::Record;
use std::fmt;

/// `key: value` blocks, one per record, separated by a blank line
pub struct PlainView {
    blocks: Vec<Vec<(String, String)>>,
}

impl PlainView {
    /// Top-level keys followed by the provenance keys
    pub fn from_records(records: &[Record]) -> Self {
        let blocks = records
            .iter()
            .map(|record| {
                let mut lines: Vec<(String, String)> = record
                    .value()
                    .as_object()
                    .into_iter()
                    .flatten()
                    .map(|(k, v)| (k.clone(), format_scalar(v)))
                    .collect();

                let provenance = record.provenance();
                lines.push((
                    "_filePath".to_string(),
                    provenance.file_path.display().to_string(),
                ));
                lines.push(("_projectDir".to_string(), provenance.project_dir.clone()));
                lines.push(("_fileName".to_string(), provenance.file_name.clone()));
                lines
            })
            .collect();

        Self { blocks }
    }

    /// Column expressions as keys; absent columns are skipped
    pub fn from_projections(projections: &[Projection]) -> Self {
        let blocks = projections
            .iter()
            .map(|projection| {
                projection
                    .present()
                    .map(|(k, v)| (k.to_string(), format_scalar(v)))
                    .collect()
            })
            .collect();

        Self { blocks }
    }
}

impl fmt::Display for PlainView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (key, value) in block {
                writeln!(f, "{}: {}", key, value)?;
            }
        }
        Ok(())
    }
}
