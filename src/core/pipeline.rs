use crate::core::{
    ConfigProvider, Pipeline, RenderedVariant, SourceDocument, Storage, TransformOutcome,
};
use crate::domain::model::{GenerationReport, ReportEntry};
use crate::utils::error::{Result, VariantError};
use std::path::Path;

pub struct VariantPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> VariantPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn output_file_path(&self, filename: &str) -> String {
        Path::new(self.config.output_path())
            .join(filename)
            .to_string_lossy()
            .into_owned()
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for VariantPipeline<S, C> {
    async fn extract(&self) -> Result<SourceDocument> {
        let path = self.config.source_path();
        tracing::debug!("Reading source document: {}", path);

        // 來源檔案缺失時整個流程中止，不寫任何輸出
        let content = self.storage.read_text(path).await.map_err(|e| match e {
            VariantError::IoError(ref io) if io.kind() == std::io::ErrorKind::NotFound => {
                VariantError::SourceNotFound {
                    path: path.to_string(),
                }
            }
            other => other,
        })?;

        tracing::debug!("Source document is {} bytes", content.len());

        Ok(SourceDocument {
            path: path.to_string(),
            content,
        })
    }

    async fn transform(&self, document: SourceDocument) -> Result<TransformOutcome> {
        let specs = self.config.variants();
        let mut variants = Vec::with_capacity(specs.len());

        for spec in specs {
            // 由左至右、非重疊的字面取代，與 str::replace 語義一致
            let replacements = document.content.matches(spec.target.as_str()).count();
            let content = document.content.replace(&spec.target, &spec.replacement);

            if replacements == 0 {
                tracing::warn!(
                    "Variant '{}': target not found in source, copying content unchanged",
                    spec.name
                );
            } else {
                tracing::debug!(
                    "Variant '{}': replaced {} occurrences",
                    spec.name,
                    replacements
                );
            }

            variants.push(RenderedVariant {
                spec,
                content,
                replacements,
            });
        }

        Ok(TransformOutcome {
            source_path: document.path,
            variants,
        })
    }

    async fn load(&self, outcome: TransformOutcome) -> Result<Vec<String>> {
        let mut written = Vec::with_capacity(outcome.variants.len());
        let mut entries = Vec::with_capacity(outcome.variants.len());

        for variant in &outcome.variants {
            self.storage
                .write_text(&variant.spec.dest, &variant.content)
                .await?;

            let full_path = self.output_file_path(&variant.spec.dest);
            tracing::info!("Created {}", full_path);

            entries.push(ReportEntry {
                variant: variant.spec.name.clone(),
                path: full_path.clone(),
                replacements: variant.replacements,
            });
            written.push(full_path);
        }

        // 產生執行報告（選用）
        if let Some(report_name) = self.config.report_filename() {
            let report = GenerationReport {
                source: outcome.source_path.clone(),
                generated_at: chrono::Utc::now(),
                outputs: entries,
            };
            let json = serde_json::to_string_pretty(&report)?;
            self.storage.write_text(report_name, &json).await?;
            tracing::info!("Report written to {}", self.output_file_path(report_name));
        }

        Ok(written)
    }
}
