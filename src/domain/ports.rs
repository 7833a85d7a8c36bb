use crate::domain::model::{SourceDocument, TransformOutcome, VariantSpec};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_text(&self, path: &str) -> impl std::future::Future<Output = Result<String>> + Send;
    fn write_text(
        &self,
        path: &str,
        content: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn source_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn variants(&self) -> Vec<VariantSpec>;
    fn report_filename(&self) -> Option<&str>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<SourceDocument>;
    async fn transform(&self, document: SourceDocument) -> Result<TransformOutcome>;
    async fn load(&self, outcome: TransformOutcome) -> Result<Vec<String>>;
}
