use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Namespace prefixed to every metric name
    pub namespace: String,
    /// Bucket upper bounds, in bytes, for the deleted-file-size histogram
    pub size_buckets: Vec<f64>,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            namespace: "logarchive".to_string(),
            // 1 KiB to 256 MiB, factor 4
            size_buckets: vec![
                1024.0,
                4096.0,
                16384.0,
                65536.0,
                262144.0,
                1048576.0,
                4194304.0,
                16777216.0,
                67108864.0,
                268435456.0,
            ],
        }
    }
}

impl MetricsConfig {
    /// Load configuration from defaults, then `retention-metrics.toml`, then
    /// `RETENTION_METRICS_`-prefixed environment variables.
    pub fn load() -> Result<Self> {
        let config = Figment::from(Serialized::defaults(MetricsConfig::default()))
            .merge(Toml::file("retention-metrics.toml"))
            .merge(Env::prefixed("RETENTION_METRICS_"))
            .extract()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_buckets_are_ascending() {
        let config = MetricsConfig::default();
        assert!(config
            .size_buckets
            .windows(2)
            .all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn load_falls_back_to_defaults() {
        figment::Jail::expect_with(|_jail| {
            let config = MetricsConfig::load().expect("load default config");
            assert_eq!(config.namespace, "logarchive");
            assert_eq!(config.size_buckets.len(), 10);
            Ok(())
        });
    }

    #[test]
    fn env_overrides_namespace() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("RETENTION_METRICS_NAMESPACE", "custom");
            let config = MetricsConfig::load().expect("load config from env");
            assert_eq!(config.namespace, "custom");
            Ok(())
        });
    }
}
