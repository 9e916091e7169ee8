#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use taskmirror::libs::config::{Config, CONFIG_FILE_NAME, DEFAULT_API_URL};
    use taskmirror::libs::data_storage::DataStorage;
    use taskmirror::libs::store::StoreSettings;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Gives each test its own data directory.
    struct ConfigTestContext {
        temp_dir: TempDir,
        api_url: String,
    }

    impl ConfigTestContext {
        fn storage(&self) -> DataStorage {
            DataStorage::at(self.temp_dir.path().join("taskmirror"))
        }

        fn config_path(&self) -> PathBuf {
            self.storage().get_path(CONFIG_FILE_NAME).unwrap()
        }
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                api_url: "http://localhost:3000/todos".to_string(),
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.bootstrap_limit, 20);
        assert_eq!(config.local_id_start, 10001);
        assert_eq!(config.store_settings(), StoreSettings::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.config_path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_get_path_creates_data_directory(ctx: &mut ConfigTestContext) {
        let storage = ctx.storage();
        assert!(!storage.base_path().exists());

        let path = storage.get_path(CONFIG_FILE_NAME).unwrap();
        assert!(storage.base_path().is_dir());
        assert_eq!(path.file_name().unwrap(), CONFIG_FILE_NAME);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            api_url: ctx.api_url.clone(),
            bootstrap_limit: 5,
            local_id_start: 50_000,
            timeout_secs: 3,
            snapshot_buffer: 8,
        };
        config.save_to(&ctx.config_path()).unwrap();

        let read = Config::read_from(&ctx.config_path()).unwrap();
        assert_eq!(read, config);

        let settings = read.store_settings();
        assert_eq!(settings.bootstrap_limit, 5);
        assert_eq!(settings.local_id_start, 50_000);
        assert_eq!(settings.snapshot_buffer, 8);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_config_falls_back_to_defaults(ctx: &mut ConfigTestContext) {
        let path = ctx.config_path();
        fs::write(&path, format!(r#"{{ "api_url": "{}" }}"#, ctx.api_url)).unwrap();

        let config = Config::read_from(&path).unwrap();
        assert_eq!(config.api_url, ctx.api_url);
        assert_eq!(config.bootstrap_limit, 20);
        assert_eq!(config.timeout_secs, 10);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_corrupted_config_is_an_error(ctx: &mut ConfigTestContext) {
        let path = ctx.config_path();
        fs::write(&path, "{ not json").unwrap();

        assert!(Config::read_from(&path).is_err());
    }
}
