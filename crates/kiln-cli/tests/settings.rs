//! Integration tests for settings loading.
//!
//! Priority: CLI > Environment > File > Defaults

use kiln_cli::config::{Settings, SettingsOverrides};
use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

struct EnvGuard(&'static str);

impl EnvGuard {
    fn set(key: &'static str, value: &str) -> Self {
        unsafe { std::env::set_var(key, value) };
        Self(key)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe { std::env::remove_var(self.0) };
    }
}

#[test]
#[serial]
fn defaults_when_nothing_is_configured() {
    let temp = TempDir::new().unwrap();
    let overrides = SettingsOverrides {
        root: Some(temp.path().to_path_buf()),
        mode: None,
    };

    let settings = Settings::load(&overrides, None).unwrap();
    assert_eq!(settings.root, temp.path());
    assert_eq!(settings.mode, "development");
}

#[test]
#[serial]
fn settings_file_is_found_in_root() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("kiln.toml"), "source_dir = \"client\"\n").unwrap();

    let overrides = SettingsOverrides {
        root: Some(temp.path().to_path_buf()),
        mode: None,
    };
    let settings = Settings::load(&overrides, None).unwrap();
    assert_eq!(settings.source_dir, "client");
}

#[test]
#[serial]
fn environment_overrides_file() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("custom.toml");
    fs::write(&file, "mode = \"staging\"\nsource_dir = \"client\"\n").unwrap();

    let _mode = EnvGuard::set("KILN_MODE", "production");
    let settings = Settings::load(&SettingsOverrides::default(), Some(&file)).unwrap();
    assert_eq!(settings.mode, "production");
    assert_eq!(settings.source_dir, "client");
}

#[test]
#[serial]
fn cli_overrides_environment() {
    let _mode = EnvGuard::set("KILN_MODE", "production");
    let overrides = SettingsOverrides {
        root: None,
        mode: Some("development".to_string()),
    };

    let settings = Settings::load(&overrides, None).unwrap();
    assert_eq!(settings.mode, "development");
}

#[test]
#[serial]
fn unrelated_kiln_variables_are_ignored() {
    let _other = EnvGuard::set("KILN_UNRELATED", "1");
    let settings = Settings::load(&SettingsOverrides::default(), None);
    assert!(settings.is_ok());
}

#[test]
#[serial]
fn env_dir_from_environment() {
    let _dir = EnvGuard::set("KILN_ENV_DIR", "/etc/app");
    let settings = Settings::load(&SettingsOverrides::default(), None).unwrap();
    assert_eq!(settings.env_dir, Some(PathBuf::from("/etc/app")));
}

#[test]
#[serial]
fn settings_file_is_found_in_root_from_environment() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("kiln.toml"), "source_dir = \"client\"\n").unwrap();

    let _root = EnvGuard::set("KILN_ROOT", temp.path().to_str().unwrap());
    let settings = Settings::load(&SettingsOverrides::default(), None).unwrap();
    assert_eq!(settings.root, temp.path());
    assert_eq!(settings.source_dir, "client");
}

#[test]
#[serial]
fn cli_root_wins_over_environment_root_for_file_lookup() {
    let from_env = TempDir::new().unwrap();
    fs::write(from_env.path().join("kiln.toml"), "source_dir = \"env\"\n").unwrap();
    let from_cli = TempDir::new().unwrap();
    fs::write(from_cli.path().join("kiln.toml"), "source_dir = \"cli\"\n").unwrap();

    let _root = EnvGuard::set("KILN_ROOT", from_env.path().to_str().unwrap());
    let overrides = SettingsOverrides {
        root: Some(from_cli.path().to_path_buf()),
        mode: None,
    };
    let settings = Settings::load(&overrides, None).unwrap();
    assert_eq!(settings.source_dir, "cli");
}
