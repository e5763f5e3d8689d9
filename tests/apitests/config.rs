use log::LevelFilter;
use phonebook::{
    Config,
    configuration,
};

/**
# default_configuration::Builder
 - new
 - with_data_file
 - with_min_digits
 - with_logger
 - with_confirm_tokens
 - load
 - build

# trait Config
 - data_file
 - min_digits
 - log_level
 - log_file
 - yes_token
 - no_token
 */
#[test]
fn test_build_cfg() {
    let cfg: Box<dyn Config>;

    cfg = configuration::Builder::new()
        .with_data_file("tests/phonebook.json")
        .with_logger(LevelFilter::Info, None)
        .build()
        .map_err(|_| assert!(false))
        .unwrap();

    assert_eq!(cfg.data_file(), "tests/phonebook.json");
    assert_eq!(cfg.min_digits(), 5);
    assert_eq!(cfg.log_level(), LevelFilter::Info);
    assert_eq!(cfg.log_file(), None);
    assert_eq!(cfg.yes_token(), "y");
    assert_eq!(cfg.no_token(), "n");

    #[cfg(feature = "inspect")]
    cfg.dump();
}

#[test]
fn test_load_cfg() {
    let path = match std::fs::metadata("apitests1.conf") {
        Ok(_) => "apitests1.conf",
        Err(_) => "tests/apitests/apitests1.conf",
    };
    let cfg = configuration::Builder::new()
        .load(path)
        .map_err(|_| assert!(false))
        .unwrap()
        .build()
        .map_err(|_| assert!(false))
        .unwrap();

    #[cfg(feature = "inspect")]
    cfg.dump();

    assert_eq!(cfg.data_file(), "apitests1_data/phonebook.json");
    assert_eq!(cfg.min_digits(), 6);
    assert_eq!(cfg.log_level(), LevelFilter::Debug);
    assert_eq!(cfg.log_file(), None);
    assert_eq!(cfg.yes_token(), "д");
    assert_eq!(cfg.no_token(), "н");
}
