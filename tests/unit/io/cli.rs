//! Tests for command-line interface parsing and file processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::path::PathBuf;
    use wavetile::analysis::adjacency::InferenceStrategy;
    use wavetile::io::cli::Cli;
    use wavetile::io::configuration::{
        DEFAULT_RETRIES, DEFAULT_SEED, DEFAULT_TILE_HEIGHT, DEFAULT_TILE_WIDTH,
    };

    // Tests CLI parsing with only required target file argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let args = vec!["program", "sample.txt"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.target, PathBuf::from("sample.txt"));
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.width, None);
        assert_eq!(cli.height, None);
        assert_eq!(cli.tile_width, DEFAULT_TILE_WIDTH);
        assert_eq!(cli.tile_height, DEFAULT_TILE_HEIGHT);
        assert_eq!(cli.strategy, InferenceStrategy::Observed);
        assert_eq!(cli.max_steps, None);
        assert_eq!(cli.retries, DEFAULT_RETRIES);
        assert!(!cli.quiet);
    }

    // Tests CLI parsing with all available arguments
    // Verified by modifying argument definitions to ensure they're wired
    #[test]
    fn test_cli_parse_all_args() {
        let args = vec![
            "program",
            "input.txt",
            "--seed",
            "123",
            "--width",
            "40",
            "--height",
            "25",
            "--tile-width",
            "2",
            "--tile-height",
            "3",
            "--strategy",
            "border",
            "--max-steps",
            "500",
            "--retries",
            "4",
            "--quiet",
            "--no-skip",
        ];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.target, PathBuf::from("input.txt"));
        assert_eq!(cli.seed, 123);
        assert_eq!(cli.width, Some(40));
        assert_eq!(cli.height, Some(25));
        assert_eq!(cli.tile_width, 2);
        assert_eq!(cli.tile_height, 3);
        assert_eq!(cli.strategy, InferenceStrategy::Border);
        assert_eq!(cli.max_steps, Some(500));
        assert_eq!(cli.retries, 4);
        assert!(cli.quiet);
    }

    // Tests file skip behavior based on --no-skip flag
    // Verified by inverting boolean logic in skip_existing method
    #[test]
    fn test_skip_existing_logic() {
        let args_default = vec!["program", "sample.txt"];
        let cli_default = Cli::parse_from(args_default);
        assert!(cli_default.skip_existing());

        let args_no_skip = vec!["program", "sample.txt", "--no-skip"];
        let cli_no_skip = Cli::parse_from(args_no_skip);
        assert!(!cli_no_skip.skip_existing());
    }

    // Tests progress display based on --quiet flag
    // Verified by inverting quiet flag logic
    #[test]
    fn test_should_show_progress() {
        let args_default = vec!["program", "sample.txt"];
        let cli_default = Cli::parse_from(args_default);
        assert!(cli_default.should_show_progress());

        let args_quiet = vec!["program", "sample.txt", "--quiet"];
        let cli_quiet = Cli::parse_from(args_quiet);
        assert!(!cli_quiet.should_show_progress());
    }

    // Tests short flag parsing (-s, -w, -H, -r)
    // Verified by changing short flag definitions
    #[test]
    fn test_cli_short_flags() {
        let args = vec![
            "program", "sample.txt", "-s", "999", "-w", "12", "-H", "8", "-r", "2",
        ];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.seed, 999);
        assert_eq!(cli.width, Some(12));
        assert_eq!(cli.height, Some(8));
        assert_eq!(cli.retries, 2);
    }

    use std::fs;
    use tempfile::TempDir;
    use wavetile::GenerationError;
    use wavetile::io::cli::FileProcessor;

    // Tests FileProcessor construction
    // Verified by modifying constructor logic
    #[test]
    fn test_file_processor_new() {
        let cli = create_test_cli("sample.txt");
        let _processor = FileProcessor::new(cli);
    }

    // Tests error handling for missing files
    // Verified by removing error return for nonexistent files
    #[test]
    fn test_process_nonexistent_file() {
        let cli = create_test_cli("nonexistent.txt");
        let mut processor = FileProcessor::new(cli);

        let result = processor.process();
        assert!(result.is_err());
    }

    // Tests error handling for non-text files
    // Verified by removing file type validation
    #[test]
    fn test_process_invalid_file_type() {
        let temp_dir = TempDir::new().unwrap();
        let png_file = temp_dir.path().join("sample.png");
        fs::write(&png_file, "not a sample").unwrap();

        let cli = create_test_cli(png_file.to_str().unwrap());
        let mut processor = FileProcessor::new(cli);

        let result = processor.process();
        assert!(result.is_err());
    }

    // Tests skip logic when output file exists
    // Verified by removing skip check
    #[test]
    fn test_skip_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let input_file = temp_dir.path().join("sample.txt");
        let output_file = temp_dir.path().join("sample_result.txt");

        fs::write(&input_file, "AB\nBA\n").unwrap();
        fs::write(&output_file, "KEEP\n").unwrap();

        let cli = create_test_cli(input_file.to_str().unwrap());
        let mut processor = FileProcessor::new(cli);

        let result = processor.process();
        assert!(result.is_ok());

        let kept = fs::read_to_string(&output_file).unwrap();
        assert_eq!(kept, "KEEP\n", "Skipped output should stay untouched");
    }

    // Tests processing empty directories
    // Verified by adding error for empty directories
    #[test]
    fn test_process_empty_directory() {
        let temp_dir = TempDir::new().unwrap();

        let cli = create_test_cli(temp_dir.path().to_str().unwrap());
        let mut processor = FileProcessor::new(cli);

        let result = processor.process();
        assert!(result.is_ok());
    }

    // Tests a solvable sample produces an alternating result file
    // Verified by corrupting the written output grid
    #[test]
    fn test_process_writes_result_file() {
        let temp_dir = TempDir::new().unwrap();
        let input_file = temp_dir.path().join("checker.txt");
        fs::write(&input_file, "AB\nBA\n").unwrap();

        let args = vec!["program", input_file.to_str().unwrap(), "--quiet"];
        let cli = Cli::parse_from(args);
        let mut processor = FileProcessor::new(cli);

        processor.process().unwrap();

        let output_file = temp_dir.path().join("checker_result.txt");
        let written = fs::read_to_string(&output_file).unwrap();
        assert!(
            written == "AB\nBA\n" || written == "BA\nAB\n",
            "Checkerboard output should alternate: {written:?}"
        );
    }

    // Tests every text sample in a directory is processed
    // Verified by dropping files from the collected list
    #[test]
    fn test_process_directory_handles_all_samples() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("one.txt"), "AB\nBA\n").unwrap();
        fs::write(temp_dir.path().join("two.txt"), "AB\nBA\n").unwrap();
        fs::write(temp_dir.path().join("notes.md"), "ignore me").unwrap();

        let args = vec!["program", temp_dir.path().to_str().unwrap(), "--quiet"];
        let cli = Cli::parse_from(args);
        let mut processor = FileProcessor::new(cli);

        processor.process().unwrap();

        assert!(temp_dir.path().join("one_result.txt").exists());
        assert!(temp_dir.path().join("two_result.txt").exists());
        assert!(!temp_dir.path().join("notes_result.md").exists());
    }

    // Tests output filename generation with suffix
    // Verified by changing output suffix to verify path generation
    #[test]
    fn test_output_path_generation() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input_file = temp_dir.path().join("grid.txt");
        fs::write(&input_file, "AB\nBA\n").unwrap();

        let args = vec!["program", input_file.to_str().unwrap(), "--quiet"];
        let cli = Cli::parse_from(args);
        let mut processor = FileProcessor::new(cli);

        processor.process().unwrap();

        assert!(temp_dir.path().join("grid_result.txt").exists());
        let wrong_output = temp_dir.path().join("grid_output.txt");
        assert!(
            !wrong_output.exists(),
            "Should not create file with wrong suffix"
        );
    }

    // Tests retries cannot rescue a sample that contradicts immediately
    // Verified by treating input errors as retryable
    #[test]
    fn test_retries_exhausted_still_errors() {
        let temp_dir = TempDir::new().unwrap();
        let input_file = temp_dir.path().join("row.txt");
        fs::write(&input_file, "AB\n").unwrap();

        let args = vec![
            "program",
            input_file.to_str().unwrap(),
            "--retries",
            "2",
            "--quiet",
        ];
        let cli = Cli::parse_from(args);
        let mut processor = FileProcessor::new(cli);

        let result = processor.process();
        assert!(matches!(
            result,
            Err(GenerationError::Contradiction { step: 0, .. })
        ));
        assert!(!temp_dir.path().join("row_result.txt").exists());
    }

    // Tests the step budget flag aborts the solve
    // Verified by ignoring max_steps in the solver configuration
    #[test]
    fn test_max_steps_flag_aborts() {
        let temp_dir = TempDir::new().unwrap();
        let input_file = temp_dir.path().join("checker.txt");
        fs::write(&input_file, "AB\nBA\n").unwrap();

        let args = vec![
            "program",
            input_file.to_str().unwrap(),
            "--max-steps",
            "0",
            "--quiet",
        ];
        let cli = Cli::parse_from(args);
        let mut processor = FileProcessor::new(cli);

        let result = processor.process();
        assert!(matches!(
            result,
            Err(GenerationError::Aborted { steps: 0 })
        ));
    }

    // Tests quiet mode configuration and behavior
    // Verified by testing quiet flag affects progress display
    #[test]
    fn test_quiet_mode() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input_file = temp_dir.path().join("sample.txt");

        fs::write(&input_file, "AB\nBA\n").unwrap();

        let args_quiet = vec!["program", input_file.to_str().unwrap(), "--quiet"];
        let cli_quiet = Cli::parse_from(args_quiet);
        assert!(cli_quiet.quiet, "Quiet flag should be set");
        assert!(
            !cli_quiet.should_show_progress(),
            "Should not show progress in quiet mode"
        );

        let mut processor_quiet = FileProcessor::new(cli_quiet);
        let _ = processor_quiet.process();

        let args_normal = vec!["program", input_file.to_str().unwrap(), "--no-skip"];
        let cli_normal = Cli::parse_from(args_normal);
        assert!(!cli_normal.quiet, "Quiet flag should not be set by default");
        assert!(
            cli_normal.should_show_progress(),
            "Should show progress by default"
        );

        let mut processor_normal = FileProcessor::new(cli_normal);
        let _ = processor_normal.process();
    }

    fn create_test_cli(target: &str) -> Cli {
        let args = vec!["program", target];
        Cli::parse_from(args)
    }
}
