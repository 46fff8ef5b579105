pub use std::{
    collections::{BTreeMap, BTreeSet},
    env,
    fmt::Display,
    io::Write,
    path::{Path, PathBuf},
};

pub use anyhow::{Context, anyhow};
pub use async_trait::async_trait;
pub use derive_new::new;
pub use dotenv::dotenv;
pub use getset::Getters;
pub use log::{error, info, warn};
pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
