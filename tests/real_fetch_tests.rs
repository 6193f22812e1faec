//! Dataset fetch against the real filesystem

mod common;

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {

use super::common::{build_zip, titanic_zip};
use kaggle_client::dataset::fetch_dataset;
use kaggle_client::error::ClientError;
use kaggle_client::kaggle::KaggleApi;
use kaggle_client::system::RealSystem;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Writes fixed files into the destination, like a finished download
struct StaticApi {
    files: Vec<(&'static str, Vec<u8>)>,
}

impl KaggleApi for StaticApi {
    fn download(&self, _competition: &str, dest: &Path) -> anyhow::Result<()> {
        for (name, contents) in &self.files {
            fs::write(dest.join(name), contents)?;
        }
        Ok(())
    }

    fn submit(&self, _competition: &str, _file: &Path, _message: &str) -> anyhow::Result<()> {
        Ok(())
    }

    fn submissions(&self, _competition: &str) -> anyhow::Result<String> {
        Ok(String::new())
    }
}

#[test]
fn titanic_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("comp1");
    let cwd_before = std::env::current_dir().unwrap();
    let api = StaticApi {
        files: vec![("titanic.zip", titanic_zip())],
    };

    let report = fetch_dataset(&RealSystem::new(), &api, "titanic", &target).unwrap();

    assert_eq!(report.files_extracted(), 2);
    assert!(target.join("train.csv").is_file());
    assert!(target.join("test.csv").is_file());
    assert!(!target.join("titanic.zip").exists());
    assert_eq!(std::env::current_dir().unwrap(), cwd_before);
}

#[test]
fn existing_directory_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("comp1");
    fs::create_dir(&target).unwrap();
    let api = StaticApi {
        files: vec![("titanic.zip", titanic_zip())],
    };

    let err = fetch_dataset(&RealSystem::new(), &api, "titanic", &target).unwrap_err();

    assert_eq!(err.downcast_ref::<ClientError>().unwrap().exit_code(), 3);
    assert_eq!(fs::read_dir(&target).unwrap().count(), 0);
}

#[test]
fn nested_entries_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("comp");
    let api = StaticApi {
        files: vec![(
            "bundle.zip",
            build_zip(&[("images/train/", ""), ("images/train/0001.png", "png")]),
        )],
    };

    fetch_dataset(&RealSystem::new(), &api, "bundle", &target).unwrap();

    assert_eq!(
        fs::read_to_string(target.join("images/train/0001.png")).unwrap(),
        "png"
    );
    assert!(!target.join("bundle.zip").exists());
}
}
