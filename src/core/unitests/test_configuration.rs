use std::fs;
use log::LevelFilter;
use crate::core::default_configuration::Builder;
use crate::{Config, Error};
use super::{
    working_path,
    remove_working_path,
};

#[test]
fn test_defaults() {
    let cfg = Builder::new().build().unwrap();
    assert_eq!(cfg.data_file(), "phonebook.json");
    assert_eq!(cfg.min_digits(), 5);
    assert_eq!(cfg.log_level(), LevelFilter::Warn);
    assert_eq!(cfg.log_file(), None);
    assert_eq!(cfg.yes_token(), "y");
    assert_eq!(cfg.no_token(), "n");
}

#[test]
fn test_builder_values() {
    let cfg = Builder::new()
        .with_data_file("contacts/book.json")
        .with_min_digits(7)
        .with_logger(LevelFilter::Debug, Some("book.log"))
        .with_confirm_tokens("Д", "н")
        .build()
        .unwrap();

    assert_eq!(cfg.data_file(), "contacts/book.json");
    assert_eq!(cfg.min_digits(), 7);
    assert_eq!(cfg.log_level(), LevelFilter::Debug);
    assert_eq!(cfg.log_file(), Some("book.log"));
    assert_eq!(cfg.yes_token(), "д");
    assert_eq!(cfg.no_token(), "н");
}

#[test]
fn test_builder_rejects() {
    let rc = Builder::new().with_min_digits(0).build();
    assert!(matches!(rc, Err(Error::Argument(_))));

    let rc = Builder::new().with_confirm_tokens("y", "Y").build();
    assert!(matches!(rc, Err(Error::Argument(_))));

    let rc = Builder::new().with_confirm_tokens(" ", "n").build();
    assert!(matches!(rc, Err(Error::Argument(_))));

    let rc = Builder::new().with_data_file("").build();
    assert!(matches!(rc, Err(Error::Argument(_))));
}

#[test]
fn test_load_file() {
    let path = working_path("cfg-load");
    let file = format!("{}/phonebook.conf", path);
    fs::write(&file, r#"{
        "dataFile": "ru.json",
        "minDigits": 6,
        "logger": { "level": "info", "logFile": "ru.log" },
        "confirm": { "yes": "д", "no": "н" }
    }"#).unwrap();

    let cfg = Builder::new()
        .load(&file)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(cfg.data_file(), "ru.json");
    assert_eq!(cfg.min_digits(), 6);
    assert_eq!(cfg.log_level(), LevelFilter::Info);
    assert_eq!(cfg.log_file(), Some("ru.log"));
    assert_eq!(cfg.yes_token(), "д");
    assert_eq!(cfg.no_token(), "н");

    let cfg = Builder::new()
        .load(&file)
        .unwrap()
        .with_data_file("override.json")
        .with_min_digits(5)
        .build()
        .unwrap();
    assert_eq!(cfg.data_file(), "override.json");
    assert_eq!(cfg.min_digits(), 5);
    assert_eq!(cfg.yes_token(), "д");
    remove_working_path(&path);
}

#[test]
fn test_load_partial_and_bad() {
    let path = working_path("cfg-partial");
    let file = format!("{}/phonebook.conf", path);

    fs::write(&file, r#"{ "minDigits": 3 }"#).unwrap();
    let cfg = Builder::new().load(&file).unwrap().build().unwrap();
    assert_eq!(cfg.min_digits(), 3);
    assert_eq!(cfg.data_file(), "phonebook.json");
    assert_eq!(cfg.log_level(), LevelFilter::Warn);

    fs::write(&file, r#"{ "logger": { "level": "chatty" } }"#).unwrap();
    let rc = Builder::new().load(&file).unwrap().build();
    assert!(matches!(rc, Err(Error::Argument(_))));

    fs::write(&file, "minDigits = 3").unwrap();
    let rc = Builder::new().load(&file).map(|_| ());
    assert!(matches!(rc, Err(Error::Argument(_))));

    let rc = Builder::new().load(&format!("{}/missing.conf", path)).map(|_| ());
    assert!(matches!(rc, Err(Error::Io(_))));
    remove_working_path(&path);
}
