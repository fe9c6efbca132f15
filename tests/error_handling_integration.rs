use quarry::storage::read_quotes;
use quarry::{BlockProcessor, ProcessorConfig};
use std::time::Duration;

#[path = "integration/mod.rs"]
mod test_utils;
use test_utils::{Reply, ScriptedModel, TestFixture};

fn test_config(block_size: usize) -> ProcessorConfig {
    ProcessorConfig {
        block_size,
        call_delay: Duration::ZERO,
        ..Default::default()
    }
}

/// A missing input file aborts the run before any output is created
#[tokio::test]
async fn test_missing_input_is_fatal() {
    let fixture = TestFixture::new();
    let input = fixture.root_path.join("missing.txt");
    let output = fixture.root_path.join("missing.csv");

    let processor = BlockProcessor::new(ScriptedModel::new(vec![]), "Author", test_config(3000));
    let result = processor.process_file(&input, &output).await;

    assert!(result.is_err());
    assert!(!output.exists(), "No output should be created for a missing input");
    assert!(processor.extractor().model().prompts().is_empty());
}

/// An output path that cannot be created aborts the run
#[tokio::test]
async fn test_unwritable_output_is_fatal() {
    let fixture = TestFixture::new();
    let input = fixture.create_file("book.txt", "Some text.");
    let output = fixture.root_path.join("no-such-dir").join("book.csv");

    let processor = BlockProcessor::new(ScriptedModel::new(vec![]), "Author", test_config(3000));
    let result = processor.process_file(&input, &output).await;

    let err = result.expect_err("Writing into a missing directory should fail");
    assert!(format!("{err:#}").contains("Failed to create output file"));
}

/// Quotes saved before a fatal read error stay on disk
#[tokio::test]
async fn test_partial_results_survive_read_error() {
    let fixture = TestFixture::new();
    let input = fixture.root_path.join("broken.txt");
    let mut bytes = b"First sentence here. Second sentence here.\n".to_vec();
    bytes.extend([0xFF, 0xFE, 0xFD, b'\n']);
    std::fs::write(&input, bytes).expect("Failed to write input");
    let output = fixture.root_path.join("broken.csv");

    let model = ScriptedModel::new(vec![Reply::json(&["Second sentence"])]);
    let processor = BlockProcessor::new(model, "Author", test_config(10));
    let result = processor.process_file(&input, &output).await;

    let err = result.expect_err("Invalid UTF-8 should abort the run");
    assert!(format!("{err:#}").contains("UTF-8 decoding error"));

    let quotes = read_quotes(&output).await.expect("Output should be readable");
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].text, "Second sentence");
    assert_eq!(quotes[0].context_before, "First sentence here.");
}

/// Every block failing still completes the run with an empty result
#[tokio::test]
async fn test_all_blocks_failing() {
    let fixture = TestFixture::new();
    let input = fixture.create_file(
        "book.txt",
        "Line one is here.\nLine two is here.\nLine three.",
    );
    let output = fixture.root_path.join("book.csv");

    let model = ScriptedModel::new(vec![
        Reply::Fail(401, "invalid key".to_string()),
        Reply::Fail(401, "invalid key".to_string()),
        Reply::Fail(401, "invalid key".to_string()),
    ]);
    let processor = BlockProcessor::new(model, "Author", test_config(5));

    let stats = processor
        .process_file(&input, &output)
        .await
        .expect("Model failures are not fatal");
    assert_eq!(stats.blocks_dispatched, 3);
    assert_eq!(stats.blocks_failed, 3);
    assert_eq!(stats.quotes_saved, 0);
    assert!(read_quotes(&output).await.expect("Output should be readable").is_empty());
}
