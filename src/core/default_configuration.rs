use std::fmt;
use std::fs;
use serde::Deserialize;
use log::LevelFilter;

use crate::{
    Error,
    core::{
        config::Config,
        contact_store::DEFAULT_DATA_FILE,
        phone::DEFAULT_MIN_DIGITS,
        Result
    },
};

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;
const DEFAULT_YES_TOKEN: &str = "y";
const DEFAULT_NO_TOKEN:  &str = "n";

#[derive(Clone, Deserialize)]
struct LogCfg {
    #[serde(rename = "level")]
    level   : Option<String>,
    #[serde(rename = "logFile")]
    file    : Option<String>,
}

#[derive(Clone, Deserialize)]
struct ConfirmCfg {
    #[serde(rename = "yes")]
    yes     : String,
    #[serde(rename = "no")]
    no      : String,
}

#[derive(Clone, Default, Deserialize)]
struct FileCfg {
    #[serde(rename = "dataFile")]
    data_file   : Option<String>,
    #[serde(rename = "minDigits")]
    min_digits  : Option<usize>,

    #[serde(rename = "logger")]
    logger      : Option<LogCfg>,

    #[serde(rename = "confirm")]
    confirm     : Option<ConfirmCfg>,
}

struct Configuration {
    data_file   : String,
    min_digits  : usize,
    log_level   : LevelFilter,
    log_file    : Option<String>,
    yes_token   : String,
    no_token    : String,
}

pub struct Builder<'a> {
    data_file   : Option<&'a str>,
    min_digits  : Option<usize>,

    log_level   : Option<LevelFilter>,
    log_file    : Option<&'a str>,

    yes_token   : Option<&'a str>,
    no_token    : Option<&'a str>,

    cfg         : Option<FileCfg>,
}

impl<'a> Builder<'a> {
    pub fn new() -> Builder<'a> {
        Self {
            data_file   : None,
            min_digits  : None,
            log_level   : None,
            log_file    : None,
            yes_token   : None,
            no_token    : None,
            cfg         : None,
        }
    }

    pub fn with_data_file(&mut self, path: &'a str) -> &mut Self {
        self.data_file = Some(path);
        self
    }

    pub fn with_min_digits(&mut self, min_digits: usize) -> &mut Self {
        self.min_digits = Some(min_digits);
        self
    }

    pub fn with_logger(&mut self, level: LevelFilter, file: Option<&'a str>) -> &mut Self {
        self.log_level = Some(level);
        self.log_file = file;
        self
    }

    pub fn with_confirm_tokens(&mut self, yes: &'a str, no: &'a str) -> &mut Self {
        self.yes_token = Some(yes);
        self.no_token = Some(no);
        self
    }

    pub fn load(&mut self, input: &str) -> Result<&mut Self> {
        let data = fs::read_to_string(input).map_err(|e| {
            Error::Io(format!("Reading config error: {}", e))
        })?;

        let cfg = serde_json::from_str::<FileCfg>(&data).map_err(|e| {
            Error::Argument(format!("bad config, error: {}", e))
        })?;

        self.cfg = Some(cfg);
        Ok(self)
    }

    pub fn build(&mut self) -> Result<Box<dyn Config>> {
        Ok(Box::new(Configuration::new(self)?))
    }
}

impl<'a> Default for Builder<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl Configuration {
    fn new(b: &Builder) -> Result<Self> {
        let file = b.cfg.clone().unwrap_or_default();

        let data_file = b.data_file.map(|v| v.to_string())
            .or(file.data_file)
            .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());
        if data_file.trim().is_empty() {
            return Err(Error::Argument("Data file path must not be empty".into()));
        }

        let min_digits = b.min_digits
            .or(file.min_digits)
            .unwrap_or(DEFAULT_MIN_DIGITS);
        if min_digits == 0 {
            return Err(Error::Argument("Minimum digit count must be positive".into()));
        }

        let file_level = match file.logger.as_ref().and_then(|v| v.level.as_ref()) {
            Some(level) => Some(level.parse::<LevelFilter>().map_err(|_| {
                Error::Argument(format!("bad log level: {}", level))
            })?),
            None => None,
        };
        let log_level = b.log_level
            .or(file_level)
            .unwrap_or(DEFAULT_LOG_LEVEL);
        let log_file = b.log_file.map(|v| v.to_string())
            .or(file.logger.and_then(|v| v.file));

        let (yes_token, no_token) = match (b.yes_token, b.no_token, file.confirm) {
            (Some(yes), Some(no), _) => (yes.to_string(), no.to_string()),
            (_, _, Some(confirm)) => (confirm.yes, confirm.no),
            _ => (DEFAULT_YES_TOKEN.to_string(), DEFAULT_NO_TOKEN.to_string()),
        };
        let yes_token = yes_token.trim().to_lowercase();
        let no_token = no_token.trim().to_lowercase();
        if yes_token.is_empty() || no_token.is_empty() {
            return Err(Error::Argument("Confirmation tokens must not be empty".into()));
        }
        if yes_token == no_token {
            return Err(Error::Argument(format!("Confirmation tokens must differ, both are {}", yes_token)));
        }

        Ok(Self {
            data_file,
            min_digits,
            log_level,
            log_file,
            yes_token,
            no_token,
        })
    }
}

impl Config for Configuration {
    fn data_file(&self) -> &str {
        &self.data_file
    }

    fn min_digits(&self) -> usize {
        self.min_digits
    }

    fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    fn log_file(&self) -> Option<&str> {
        self.log_file.as_deref()
    }

    fn yes_token(&self) -> &str {
        &self.yes_token
    }

    fn no_token(&self) -> &str {
        &self.no_token
    }

    #[cfg(feature = "inspect")]
    fn dump(&self) {
        println!("config: {}", self);
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data:{},", self.data_file)?;
        write!(f, "\tminDigits:{},", self.min_digits)?;
        write!(f, "\tlog:{}", self.log_level)?;
        if let Some(file) = self.log_file.as_ref() {
            write!(f, "@{}", file)?;
        }
        write!(f, ",\tconfirm:{}/{}", self.yes_token, self.no_token)
    }
}
