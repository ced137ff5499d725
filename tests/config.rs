#![cfg(feature = "json")]

use huekit::config::{Config, ConfigMode, Format, Options};
use huekit::prelude::*;
use huekit::widgets::ColourPickerDialog;
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("huekit-test-{}-{name}", std::process::id()));
    path
}

#[test]
fn read_write_json() {
    let _ = env_logger::builder().is_test(true).try_init();
    let path = temp_path("picker.json");
    let options = Options {
        config_path: path.clone(),
        config_mode: ConfigMode::ReadWrite,
    };

    let mut config = Config::default();
    let mut dialog = ColourPickerDialog::from_config(&config);
    dialog.open(Some(Rgb8::rgb(200, 100, 50)));
    dialog.confirm();
    dialog.save_to(&mut config);
    assert!(config.is_dirty());
    options.write_config(&config).unwrap();

    let read = options.read_config().unwrap();
    assert_eq!(read.history(), &[Rgb8::rgb(200, 100, 50)]);
    assert!(!read.is_dirty());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn write_default() {
    let path = temp_path("default.json");
    let options = Options {
        config_path: path.clone(),
        config_mode: ConfigMode::WriteDefault,
    };
    assert_eq!(options.read_config().unwrap(), Config::default());
    let read: Config = Format::Json.read_path(&path).unwrap();
    assert_eq!(read, Config::default());

    let _ = std::fs::remove_file(&path);
}
