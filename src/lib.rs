pub mod core;

pub use crate::core::{
    error::{self, Error},
    phone::{
        self,
        PhoneEntry,
        PhoneType,
        DEFAULT_MIN_DIGITS,
    },
    contact::{self, Contact, ContactBuilder},
    contact_store::{self, ContactStore, DEFAULT_DATA_FILE},
    repository,

    logger,
    config::{self, Config},
    default_configuration as configuration,
};
