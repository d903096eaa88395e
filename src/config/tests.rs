#[cfg(test)]
mod config_tests {
    mod configuration_tests {
        use crate::config::structs::configuration::Configuration;
        use crate::database::enums::database_drivers::DatabaseDrivers;

        #[test]
        fn test_init_defaults() {
            let config = Configuration::init();
            assert_eq!(config.log_level, "info");
            assert_eq!(config.log_console_interval, 60);
            assert_eq!(config.index.torrents_per_page, 25);
            assert_eq!(config.index.posts_per_page, 5);
            assert_eq!(config.index.top_torrents_limit, 100);
            assert_eq!(config.index.bcrypt_cost, 12);
            assert_eq!(config.database.engine, DatabaseDrivers::sqlite3);
            assert!(!config.database.persistent);
            assert_eq!(config.database_structure.torrents.table_name, "torrents");
            assert_eq!(config.database_structure.posts.table_name, "posts");
            assert_eq!(config.storage.uploads_path, "uploads");
            assert_eq!(config.api_server.len(), 1);
            assert!(config.api_server[0].enabled);
            assert!(!config.api_server[0].ssl);
        }

        #[test]
        fn test_init_generates_secrets() {
            let config = Configuration::init();
            assert!(config.index.api_key.len() >= 32);
            assert!(config.index.jwt_secret.len() >= 32);
            assert_ne!(config.index.api_key, config.index.jwt_secret);
        }

        #[test]
        fn test_toml_roundtrip() {
            let config = Configuration::init();
            let serialized = toml::to_string(&config).unwrap();
            let loaded = Configuration::load(serialized.as_bytes()).unwrap();
            assert_eq!(loaded.log_level, config.log_level);
            assert_eq!(loaded.index.jwt_secret, config.index.jwt_secret);
            assert_eq!(loaded.database.path, config.database.path);
            assert_eq!(loaded.api_server[0].bind_address, config.api_server[0].bind_address);
        }

        #[test]
        fn test_load_rejects_garbage() {
            let result = Configuration::load(b"this is { not toml");
            assert!(result.is_err());
        }
    }

    mod validate_tests {
        use crate::config::structs::configuration::Configuration;

        #[test]
        fn test_validate_accepts_defaults() {
            let config = Configuration::init();
            Configuration::validate(config);
        }

        #[test]
        fn test_validate_accepts_nested_uploads_path() {
            let mut config = Configuration::init();
            config.storage.uploads_path = String::from("/var/lib/harbor/uploads.v2");
            Configuration::validate(config);
        }

        #[test]
        #[should_panic]
        fn test_validate_rejects_empty_uploads_path() {
            let mut config = Configuration::init();
            config.storage.uploads_path = String::new();
            Configuration::validate(config);
        }

        #[test]
        #[should_panic]
        fn test_validate_rejects_bad_log_level() {
            let mut config = Configuration::init();
            config.log_level = String::from("verbose");
            Configuration::validate(config);
        }

        #[test]
        #[should_panic]
        fn test_validate_rejects_bad_table_name() {
            let mut config = Configuration::init();
            config.database_structure.torrents.table_name = String::from("torrents; DROP TABLE users");
            Configuration::validate(config);
        }

        #[test]
        #[should_panic]
        fn test_validate_rejects_short_jwt_secret() {
            let mut config = Configuration::init();
            config.index.jwt_secret = String::from("short");
            Configuration::validate(config);
        }

        #[test]
        #[should_panic]
        fn test_validate_rejects_bad_bcrypt_cost() {
            let mut config = Configuration::init();
            config.index.bcrypt_cost = 99;
            Configuration::validate(config);
        }

        #[test]
        #[should_panic]
        fn test_validate_rejects_zero_page_size() {
            let mut config = Configuration::init();
            config.index.posts_per_page = 0;
            Configuration::validate(config);
        }

        #[test]
        #[should_panic]
        fn test_validate_rejects_ssl_without_certificate() {
            let mut config = Configuration::init();
            config.api_server[0].ssl = true;
            config.api_server[0].ssl_cert = String::from("");
            Configuration::validate(config);
        }
    }
}
