//! The `scan` command: detect platforms for a local directory and
//! print the result as JSON.

use color_eyre::eyre::eyre;
use log::info;

use crate::cli::ScanArgs;
use crate::detector;
use crate::result::Result;

/// Validate arguments, run detection, and print the report.
pub fn execute(args: &ScanArgs) -> Result<()> {
    if args.max_depth < 1 {
        return Err(eyre!("max-depth must be at least 1"));
    }

    if !(0.0..=1.0).contains(&args.min_confidence) {
        return Err(eyre!(
            "min-confidence must be between 0.0 and 1.0, got {}",
            args.min_confidence
        ));
    }

    if !args.path.is_dir() {
        return Err(eyre!(
            "{} is not a readable directory",
            args.path.display()
        ));
    }

    let result =
        detector::detect(&args.path, args.max_depth, args.min_confidence);

    info!(
        "{} candidate(s); primary: {}",
        result.detections.len(),
        result.primary.language
    );

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ScanArgs;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn scan_args(path: PathBuf) -> ScanArgs {
        ScanArgs {
            path,
            max_depth: 3,
            min_confidence: 0.0,
        }
    }

    #[test]
    fn test_rejects_missing_directory() {
        let args = scan_args(PathBuf::from("/definitely/not/here"));
        assert!(execute(&args).is_err());
    }

    #[test]
    fn test_rejects_zero_max_depth() {
        let temp_dir = TempDir::new().unwrap();
        let mut args = scan_args(temp_dir.path().to_path_buf());
        args.max_depth = 0;
        assert!(execute(&args).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_confidence() {
        let temp_dir = TempDir::new().unwrap();
        let mut args = scan_args(temp_dir.path().to_path_buf());
        args.min_confidence = 1.5;
        assert!(execute(&args).is_err());
    }

    #[test]
    fn test_scans_valid_directory() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("go.mod"), "module app\n")
            .unwrap();
        let args = scan_args(temp_dir.path().to_path_buf());
        assert!(execute(&args).is_ok());
    }
}
