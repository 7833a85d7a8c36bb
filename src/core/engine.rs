use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct VariantEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> VariantEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<Vec<String>> {
        println!("Starting variant generation...");

        // Extract
        println!("Reading source document...");
        let document = self.pipeline.extract().await?;
        println!("Read {} bytes from {}", document.content.len(), document.path);
        self.monitor.log_stats("Extract");

        // Transform
        println!("Rendering variants...");
        let outcome = self.pipeline.transform(document).await?;
        println!("Rendered {} variants", outcome.variants.len());
        self.monitor.log_stats("Transform");

        // Load
        println!("Writing output files...");
        let written = self.pipeline.load(outcome).await?;
        for path in &written {
            println!("Created {}", path);
        }
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        Ok(written)
    }
}
