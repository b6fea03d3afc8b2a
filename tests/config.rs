#[cfg(test)]
mod tests {
    use parking_lot::{const_mutex, Mutex, MutexGuard};
    use std::collections::HashMap;
    use std::time::Duration;
    use taskflow::api::ApiConfig;
    use taskflow::libs::config::{CacheConfig, Config, ENV_API_URL, ENV_STALE_TIME};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Tests in this file point `HOME` at their own directory, one at a time.
    static HOME_LOCK: Mutex<()> = const_mutex(());

    struct ConfigTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
        api_url: String,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = HOME_LOCK.lock();
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
                api_url: "http://tasks.internal:3001".to_string(),
            }
        }
    }

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_defaults(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert!(config.api.is_none());
        assert!(config.cache.is_none());
        assert_eq!(config.api_config().api_url, "http://localhost:3001");
        assert_eq!(config.stale_time(), Duration::from_secs(30));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            api: Some(ApiConfig {
                api_url: ctx.api_url.clone(),
            }),
            cache: Some(CacheConfig { stale_time: 5 }),
        };
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        assert_eq!(read_config, config);
        assert_eq!(read_config.stale_time(), Duration::from_secs(5));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_config_omits_unset_modules(_ctx: &mut ConfigTestContext) {
        let config = Config {
            api: None,
            cache: Some(CacheConfig { stale_time: 0 }),
        };
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        assert!(read_config.api.is_none());
        assert_eq!(read_config.stale_time(), Duration::ZERO);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_corrupt_config_is_an_error(_ctx: &mut ConfigTestContext) {
        let path = taskflow::libs::data_storage::DataStorage::new()
            .get_path(taskflow::libs::config::CONFIG_FILE_NAME)
            .unwrap();
        std::fs::write(path, "{ not json").unwrap();
        assert!(Config::read().is_err());
    }

    #[test]
    fn test_env_overrides_file_values() {
        let config = Config {
            api: Some(ApiConfig {
                api_url: "http://from-file:3001".to_string(),
            }),
            cache: Some(CacheConfig { stale_time: 30 }),
        }
        .with_overrides(env(&[(ENV_API_URL, "http://from-env:4000"), (ENV_STALE_TIME, "10")]));

        assert_eq!(config.api_config().api_url, "http://from-env:4000");
        assert_eq!(config.stale_time(), Duration::from_secs(10));
    }

    #[test]
    fn test_missing_env_keeps_file_values() {
        let config = Config {
            api: None,
            cache: Some(CacheConfig { stale_time: 12 }),
        }
        .with_overrides(env(&[]));

        assert!(config.api.is_none());
        assert_eq!(config.stale_time(), Duration::from_secs(12));
    }

    #[test]
    fn test_invalid_env_values_are_ignored() {
        let config = Config::default().with_overrides(env(&[(ENV_API_URL, "  "), (ENV_STALE_TIME, "soon")]));
        assert_eq!(config, Config::default());
    }
}
