use asset_variants::config::toml_config::TomlConfig;
use asset_variants::domain::ports::ConfigProvider;
use asset_variants::utils::{logger, validation::Validate};
use asset_variants::{LocalStorage, VariantEngine, VariantPipeline};
use clap::Parser;

#[derive(Parser)]
#[command(name = "toml-gen")]
#[command(about = "Variant generator with TOML configuration support")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "gen-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Override the source path from config
    #[arg(long)]
    source: Option<String>,

    /// Dry run - show what would be generated without executing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based variant generator");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入 TOML 配置
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 應用命令列覆蓋設定
    if let Some(source) = args.source.clone() {
        tracing::info!("🔧 Source overridden to: {}", source);
        config.source.path = source;
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    // 顯示配置摘要
    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No actual processing will occur");
        perform_dry_run(&config);
        return Ok(());
    }

    // 決定監控設定
    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());

    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 創建存儲和管道
    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = VariantPipeline::new(storage, config);

    // 創建引擎並運行
    let engine = VariantEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(written) => {
            tracing::info!("✅ Variant generation completed successfully!");
            println!("✅ Variant generation completed successfully!");
            println!("📁 {} files written", written.len());
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Variant generation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                asset_variants::utils::error::ErrorSeverity::Low => 0,
                asset_variants::utils::error::ErrorSeverity::Medium => 2,
                asset_variants::utils::error::ErrorSeverity::High => 1,
                asset_variants::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!(
        "  Pipeline: {} v{}",
        config.pipeline.name, config.pipeline.version
    );
    println!("  Source: {}", config.source_path());
    println!("  Output: {}", config.output_path());
    println!("  Variants: {}", config.variants.len());

    if let Some(report) = config.report_filename() {
        println!("  Report: {}", report);
    }

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(config: &TomlConfig) {
    println!("🔍 Dry Run Analysis:");
    println!();

    // 來源檔案分析
    println!("📄 Source Analysis:");
    println!("  Path: {}", config.source_path());
    match std::fs::metadata(config.source_path()) {
        Ok(meta) => println!("  Found ({} bytes)", meta.len()),
        Err(_) => println!("  ⚠️ Not found - a real run would abort before writing"),
    }

    // 變體分析
    println!();
    println!("🎨 Variant Specs:");
    for variant in &config.variants {
        println!("  {} -> {}", variant.name, variant.dest);
        println!("    target:      {}", variant.target);
        println!("    replacement: {}", variant.replacement);
    }

    // 輸出分析
    println!();
    println!("💾 Output Configuration:");
    println!("  Path: {}", config.output_path());
    if let Some(report) = config.report_filename() {
        println!("  Report: {}", report);
    }

    println!();
    println!("✅ Dry run analysis complete. Use --verbose for more details during actual run.");
}
