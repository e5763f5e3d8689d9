use log::LevelFilter;

pub trait Config {
    fn data_file(&self) -> &str;
    fn min_digits(&self) -> usize;

    fn log_level(&self) -> LevelFilter;
    fn log_file(&self) -> Option<&str>;

    fn yes_token(&self) -> &str;
    fn no_token(&self) -> &str;

    #[cfg(feature = "inspect")]
    fn dump(&self);
}
