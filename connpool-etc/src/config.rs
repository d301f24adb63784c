use serde::{Deserialize, Serialize};

/// Describes how many connections a pool holds to one endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConf {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "PoolConf::default_size")]
    pub size: usize,
}

impl PoolConf {
    const DEFAULT_SIZE: usize = 1;

    fn default_size() -> usize {
        Self::DEFAULT_SIZE
    }

    pub fn from_yaml(s: &str) -> serde_yaml::Result<Self> {
        let c: Self = serde_yaml::from_str(s)?;
        log::debug!("load pool config: {:?}", &c);
        Ok(c)
    }
}

impl Default for PoolConf {
    fn default() -> Self {
        Self {
            name: None,
            size: Self::DEFAULT_SIZE,
        }
    }
}
