use asset_variants::{CliConfig, LocalStorage, VariantEngine, VariantPipeline, VariantError};
use tempfile::TempDir;

const SOURCE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
  <g fill="#000000" stroke="none">
    <path fill="#000000" stroke="none" d="M0 0"/>
    <circle fill="#000000" stroke="none" cx="5" cy="5" r="2"/>
  </g>
</svg>
"##;

fn write_source(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

fn config_for(source: String, output_path: String) -> CliConfig {
    CliConfig {
        source,
        output_path,
        report: None,
        verbose: false,
        monitor: false,
    }
}

#[tokio::test]
async fn test_end_to_end_generates_white_and_black_variants() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_source(&temp_dir, "mage.svg", SOURCE_SVG);
    let output_path = temp_dir.path().join("output").to_str().unwrap().to_string();

    let config = config_for(source, output_path.clone());
    let storage = LocalStorage::new(output_path.clone());
    let pipeline = VariantPipeline::new(storage, config);
    let engine = VariantEngine::new(pipeline);

    let written = engine.run().await.unwrap();
    assert_eq!(written.len(), 2);

    let white = std::fs::read_to_string(
        std::path::Path::new(&output_path).join("white.svg"),
    )
    .unwrap();
    assert_eq!(
        white
            .matches(r##"fill="#ffffff" stroke="#000000" stroke-width="10""##)
            .count(),
        3
    );
    assert_eq!(white.matches(r##"stroke="none""##).count(), 0);

    let black = std::fs::read_to_string(
        std::path::Path::new(&output_path).join("black.svg"),
    )
    .unwrap();
    assert_eq!(
        black
            .matches(r##"fill="#000000" stroke="#ffffff" stroke-width="10""##)
            .count(),
        3
    );
    assert_eq!(black.matches(r##"stroke="none""##).count(), 0);
}

#[tokio::test]
async fn test_rerun_produces_identical_outputs() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_source(&temp_dir, "mage.svg", SOURCE_SVG);
    let output_path = temp_dir.path().join("output").to_str().unwrap().to_string();

    let run = || {
        let config = config_for(source.clone(), output_path.clone());
        let storage = LocalStorage::new(output_path.clone());
        let pipeline = VariantPipeline::new(storage, config);
        VariantEngine::new(pipeline)
    };

    run().run().await.unwrap();
    let white_first = std::fs::read(std::path::Path::new(&output_path).join("white.svg")).unwrap();
    let black_first = std::fs::read(std::path::Path::new(&output_path).join("black.svg")).unwrap();

    run().run().await.unwrap();
    let white_second = std::fs::read(std::path::Path::new(&output_path).join("white.svg")).unwrap();
    let black_second = std::fs::read(std::path::Path::new(&output_path).join("black.svg")).unwrap();

    assert_eq!(white_first, white_second);
    assert_eq!(black_first, black_second);
}

#[tokio::test]
async fn test_missing_source_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir
        .path()
        .join("does-not-exist.svg")
        .to_str()
        .unwrap()
        .to_string();
    let output_path = temp_dir.path().join("output").to_str().unwrap().to_string();

    let config = config_for(missing.clone(), output_path.clone());
    let storage = LocalStorage::new(output_path.clone());
    let pipeline = VariantPipeline::new(storage, config);
    let engine = VariantEngine::new(pipeline);

    let err = engine.run().await.unwrap_err();

    match &err {
        VariantError::SourceNotFound { path } => assert_eq!(path, &missing),
        other => panic!("Expected SourceNotFound, got {:?}", other),
    }
    assert!(err.to_string().contains(&missing));

    // The output directory is only created on write, so it must not exist
    assert!(!std::path::Path::new(&output_path).exists());
}

#[tokio::test]
async fn test_zero_match_source_is_copied_unchanged() {
    let temp_dir = TempDir::new().unwrap();
    let plain_svg = "<svg><rect width=\"10\" height=\"10\"/></svg>";
    let source = write_source(&temp_dir, "plain.svg", plain_svg);
    let output_path = temp_dir.path().join("output").to_str().unwrap().to_string();

    let config = config_for(source, output_path.clone());
    let storage = LocalStorage::new(output_path.clone());
    let pipeline = VariantPipeline::new(storage, config);
    let engine = VariantEngine::new(pipeline);

    let written = engine.run().await.unwrap();
    assert_eq!(written.len(), 2);

    let white =
        std::fs::read_to_string(std::path::Path::new(&output_path).join("white.svg")).unwrap();
    let black =
        std::fs::read_to_string(std::path::Path::new(&output_path).join("black.svg")).unwrap();

    assert_eq!(white, plain_svg);
    assert_eq!(black, plain_svg);
}

#[tokio::test]
async fn test_report_lists_written_outputs() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_source(&temp_dir, "mage.svg", SOURCE_SVG);
    let output_path = temp_dir.path().join("output").to_str().unwrap().to_string();

    let mut config = config_for(source.clone(), output_path.clone());
    config.report = Some("report.json".to_string());

    let storage = LocalStorage::new(output_path.clone());
    let pipeline = VariantPipeline::new(storage, config);
    let engine = VariantEngine::new(pipeline);

    engine.run().await.unwrap();

    let report_json =
        std::fs::read_to_string(std::path::Path::new(&output_path).join("report.json")).unwrap();
    let report: serde_json::Value = serde_json::from_str(&report_json).unwrap();

    assert_eq!(report["source"], source.as_str());
    assert_eq!(report["outputs"].as_array().unwrap().len(), 2);
    assert_eq!(report["outputs"][0]["variant"], "white");
    assert_eq!(report["outputs"][0]["replacements"], 3);
    assert_eq!(report["outputs"][1]["variant"], "black");
    assert_eq!(report["outputs"][1]["replacements"], 3);
}
