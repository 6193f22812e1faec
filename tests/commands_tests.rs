//! Command registry and command behaviour tests

mod common;

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {

use super::common::titanic_zip;
use kaggle_client::app::KaggleClient;
use kaggle_client::commands::CommandManager;
use kaggle_client::config::Settings;
use kaggle_client::error::ClientError;
use kaggle_client::kaggle::MockKaggleApi;
use kaggle_client::kaggle::mock::ApiCall;
use kaggle_client::system::{MockSystem, System as _};
use std::path::{Path, PathBuf};

const SETTINGS_PATH: &str = "/home/user/.config/kaggle-client/config.yaml";

fn argv(args: &[&str]) -> Vec<String> {
    args.iter().map(|arg| (*arg).to_owned()).collect()
}

fn workspace() -> MockSystem {
    MockSystem::new().with_current_dir("/home/user/work").unwrap()
}

fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<ClientError>().unwrap().exit_code()
}

#[test]
fn builtins_are_the_four_commands() {
    let manager = CommandManager::with_builtins();
    let names: Vec<&str> = manager.names().collect();
    assert_eq!(names, ["config", "download", "submissions", "submit"]);
}

#[test]
fn client_adds_fetch() {
    let system = workspace();
    let api = MockKaggleApi::new(system.clone());
    let client = KaggleClient::new(&system, &api, Settings::default(), PathBuf::from(SETTINGS_PATH));

    let names: Vec<&str> = client.commands().map(|(name, _)| name).collect();
    assert_eq!(names, ["config", "download", "fetch", "submissions", "submit"]);
}

#[test]
fn unknown_command_lists_available_ones() {
    let manager = CommandManager::with_builtins();

    let err = manager.find("upload").err().unwrap();
    assert_eq!(exit_code(&err), 2);
    assert!(err.to_string().contains("config, download, submissions, submit"));
}

#[test]
fn empty_command_line_is_a_usage_error() {
    let system = workspace();
    let api = MockKaggleApi::new(system.clone());
    let client = KaggleClient::new(&system, &api, Settings::default(), PathBuf::from(SETTINGS_PATH));

    let err = client.run(&[]).unwrap_err();
    assert_eq!(exit_code(&err), 2);
}

#[test]
fn download_resolves_relative_paths() {
    let system = workspace();
    let api = MockKaggleApi::new(system.clone()).with_file("titanic", "titanic.zip", b"zip");
    let client = KaggleClient::new(&system, &api, Settings::default(), PathBuf::from(SETTINGS_PATH));

    client.run(&argv(&["download", "-c", "titanic"])).unwrap();

    assert_eq!(
        api.calls(),
        vec![ApiCall::Download {
            competition: "titanic".to_owned(),
            dest: PathBuf::from("/home/user/work"),
        }]
    );
    // Plain download does not unpack
    assert!(system.is_file(Path::new("/home/user/work/titanic.zip")));
}

#[test]
fn download_uses_configured_competition() {
    let system = workspace().with_dir("/data").unwrap();
    let api = MockKaggleApi::new(system.clone()).with_file("titanic", "titanic.zip", b"zip");
    let settings = Settings {
        competition: Some("titanic".to_owned()),
        ..Settings::default()
    };
    let client = KaggleClient::new(&system, &api, settings, PathBuf::from(SETTINGS_PATH));

    client.run(&argv(&["download", "--path", "/data"])).unwrap();

    assert!(system.is_file(Path::new("/data/titanic.zip")));
}

#[test]
fn download_without_competition_fails() {
    let system = workspace();
    let api = MockKaggleApi::new(system.clone());
    let client = KaggleClient::new(&system, &api, Settings::default(), PathBuf::from(SETTINGS_PATH));

    let err = client.run(&argv(&["download"])).unwrap_err();
    assert_eq!(exit_code(&err), 2);
    assert!(api.calls().is_empty());
}

#[test]
fn bad_flags_are_usage_errors() {
    let system = workspace();
    let api = MockKaggleApi::new(system.clone());
    let client = KaggleClient::new(&system, &api, Settings::default(), PathBuf::from(SETTINGS_PATH));

    let err = client.run(&argv(&["download", "--bogus"])).unwrap_err();
    assert_eq!(exit_code(&err), 2);
}

#[test]
fn fetch_command_unpacks_into_a_relative_target() {
    let system = workspace();
    let api = MockKaggleApi::new(system.clone()).with_file("titanic", "titanic.zip", &titanic_zip());
    let client = KaggleClient::new(&system, &api, Settings::default(), PathBuf::from(SETTINGS_PATH));

    client.run(&argv(&["fetch", "-c", "titanic", "titanic"])).unwrap();

    assert!(system.is_file(Path::new("/home/user/work/titanic/train.csv")));
    assert!(system.is_file(Path::new("/home/user/work/titanic/test.csv")));
    assert!(!system.exists(Path::new("/home/user/work/titanic/titanic.zip")));
}

#[test]
fn download_dataset_matches_fetch_command() {
    let system = MockSystem::new().with_dir("/tmp").unwrap();
    let api = MockKaggleApi::new(system.clone()).with_file("titanic", "titanic.zip", &titanic_zip());
    let client = KaggleClient::new(&system, &api, Settings::default(), PathBuf::from(SETTINGS_PATH));

    let report = client
        .download_dataset("titanic", Path::new("/tmp/comp1"))
        .unwrap();

    assert_eq!(report.files_extracted(), 2);
    assert!(system.is_file(Path::new("/tmp/comp1/train.csv")));
}

#[test]
fn submit_requires_an_existing_file() {
    let system = workspace();
    let api = MockKaggleApi::new(system.clone());
    let client = KaggleClient::new(&system, &api, Settings::default(), PathBuf::from(SETTINGS_PATH));

    let err = client
        .run(&argv(&["submit", "-c", "titanic", "-f", "missing.csv"]))
        .unwrap_err();

    assert_eq!(exit_code(&err), 7);
    assert!(api.calls().is_empty());
}

#[test]
fn submit_passes_file_and_message() {
    let system = workspace()
        .with_file("/home/user/work/predictions.csv", b"PassengerId,Survived\n")
        .unwrap();
    let api = MockKaggleApi::new(system.clone());
    let client = KaggleClient::new(&system, &api, Settings::default(), PathBuf::from(SETTINGS_PATH));

    client
        .run(&argv(&["submit", "-c", "titanic", "-f", "predictions.csv", "-m", "first try"]))
        .unwrap();

    assert_eq!(
        api.calls(),
        vec![ApiCall::Submit {
            competition: "titanic".to_owned(),
            file: PathBuf::from("/home/user/work/predictions.csv"),
            message: "first try".to_owned(),
        }]
    );
}

#[test]
fn submission_failures_use_their_own_exit_code() {
    let system = workspace()
        .with_file("/home/user/work/predictions.csv", b"x")
        .unwrap();
    let api = MockKaggleApi::new(system.clone()).failing("403 Forbidden");
    let client = KaggleClient::new(&system, &api, Settings::default(), PathBuf::from(SETTINGS_PATH));

    let err = client
        .run(&argv(&["submit", "-c", "titanic", "-f", "predictions.csv"]))
        .unwrap_err();
    assert_eq!(exit_code(&err), 5);

    let err = client.run(&argv(&["submissions", "-c", "titanic"])).unwrap_err();
    assert_eq!(exit_code(&err), 5);
}

#[test]
fn submissions_queries_the_competition() {
    let system = workspace();
    let api = MockKaggleApi::new(system.clone()).with_submissions("titanic", "fileName  score\nsub.csv  0.77\n");
    let client = KaggleClient::new(&system, &api, Settings::default(), PathBuf::from(SETTINGS_PATH));

    client.run(&argv(&["submissions", "-c", "titanic"])).unwrap();

    assert_eq!(
        api.calls(),
        vec![ApiCall::Submissions {
            competition: "titanic".to_owned()
        }]
    );
}

#[test]
fn config_writes_merged_settings() {
    let system = workspace();
    let api = MockKaggleApi::new(system.clone());
    let existing = Settings {
        username: Some("ada".to_owned()),
        ..Settings::default()
    };
    let client = KaggleClient::new(&system, &api, existing, PathBuf::from(SETTINGS_PATH));

    client
        .run(&argv(&["config", "-k", "secret", "-c", "titanic"]))
        .unwrap();

    let saved = Settings::load_from_file(&system, Path::new(SETTINGS_PATH)).unwrap();
    assert_eq!(
        saved,
        Settings {
            username: Some("ada".to_owned()),
            key: Some("secret".to_owned()),
            competition: Some("titanic".to_owned()),
            cli: None,
        }
    );
}

#[test]
fn config_without_flags_changes_nothing() {
    let system = workspace();
    let api = MockKaggleApi::new(system.clone());
    let client = KaggleClient::new(&system, &api, Settings::default(), PathBuf::from(SETTINGS_PATH));

    client.run(&argv(&["config"])).unwrap();

    assert!(!system.exists(Path::new(SETTINGS_PATH)));
}

#[test]
fn config_rejects_invalid_competition() {
    let system = workspace();
    let api = MockKaggleApi::new(system.clone());
    let client = KaggleClient::new(&system, &api, Settings::default(), PathBuf::from(SETTINGS_PATH));

    let err = client
        .run(&argv(&["config", "-c", "../../etc"]))
        .unwrap_err();

    assert_eq!(exit_code(&err), 2);
    assert!(!system.exists(Path::new(SETTINGS_PATH)));
}

#[test]
fn command_help_succeeds_without_side_effects() {
    let system = workspace();
    let api = MockKaggleApi::new(system.clone());
    let client = KaggleClient::new(&system, &api, Settings::default(), PathBuf::from(SETTINGS_PATH));

    client.run(&argv(&["fetch", "--help"])).unwrap();
    assert!(api.calls().is_empty());
}
}
