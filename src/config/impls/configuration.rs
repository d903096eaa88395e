use std::fs::File;
use std::io::Write;
use std::sync::Arc;
use std::thread::available_parallelism;
use regex::Regex;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::api_server_config::ApiServerConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::database_config::DatabaseConfig;
use crate::config::structs::database_structure_config::DatabaseStructureConfig;
use crate::config::structs::database_structure_config_forums::DatabaseStructureConfigForums;
use crate::config::structs::database_structure_config_posts::DatabaseStructureConfigPosts;
use crate::config::structs::database_structure_config_threads::DatabaseStructureConfigThreads;
use crate::config::structs::database_structure_config_torrents::DatabaseStructureConfigTorrents;
use crate::config::structs::database_structure_config_users::DatabaseStructureConfigUsers;
use crate::config::structs::index_config::IndexConfig;
use crate::config::structs::storage_config::StorageConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::security::security::generate_secure_api_key;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            index: IndexConfig {
                api_key: generate_secure_api_key(),
                jwt_secret: generate_secure_api_key(),
                token_validity_secs: 2592000,
                bcrypt_cost: 12,
                torrents_per_page: 25,
                posts_per_page: 5,
                top_torrents_limit: 100,
                recent_threads_limit: 5,
                max_image_files: 5,
                max_torrent_file_size: 5242880,
                max_image_file_size: 5242880,
                max_avatar_file_size: 2097152
            },
            database: DatabaseConfig {
                engine: DatabaseDrivers::sqlite3,
                path: String::from("sqlite://data.db"),
                persistent: false,
                persistent_interval: 60
            },
            database_structure: DatabaseStructureConfig {
                torrents: DatabaseStructureConfigTorrents {
                    table_name: String::from("torrents")
                },
                users: DatabaseStructureConfigUsers {
                    table_name: String::from("users")
                },
                forums: DatabaseStructureConfigForums {
                    table_name: String::from("forums")
                },
                threads: DatabaseStructureConfigThreads {
                    table_name: String::from("threads")
                },
                posts: DatabaseStructureConfigPosts {
                    table_name: String::from("posts")
                }
            },
            storage: StorageConfig {
                uploads_path: String::from("uploads"),
                torrents_dir: String::from("torrents"),
                images_dir: String::from("images"),
                default_avatar: String::from("uploads/avatars/default.png")
            },
            api_server: vec!(
                ApiServerConfig {
                    enabled: true,
                    bind_address: String::from("0.0.0.0:8080"),
                    keep_alive: 60,
                    request_timeout: 30,
                    disconnect_timeout: 30,
                    max_connections: 25000,
                    threads: available_parallelism().unwrap().get() as u64,
                    ssl: false,
                    ssl_key: String::from(""),
                    ssl_cert: String::from("")
                }
            )
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn save_from_config(config: Arc<Configuration>, path: &str)
    {
        let config_toml = match toml::to_string(&*config) {
            Ok(data) => data,
            Err(error) => {
                log::error!("[CONFIG] Unable to serialize configuration: {}", error);
                return;
            }
        };
        if let Err(error) = Configuration::save_file(path, config_toml) {
            log::error!("[CONFIG] Unable to write {}: {}", path, error);
        }
    }

    pub fn load_from_file(create: bool) -> Result<Configuration, CustomError> {
        let mut config = Configuration::init();
        match Configuration::load_file("config.toml") {
            Ok(c) => { config = c; }
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own config.toml file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new("will not create automatically config.toml file"));
                }
                eprintln!("Creating config file..");

                let config_toml = toml::to_string(&config).unwrap();
                let save_file = Configuration::save_file("config.toml", config_toml);
                return match save_file {
                    Ok(_) => {
                        eprintln!("Please edit the config.TOML in the root folder, exiting now...");
                        Err(CustomError::new("create config.toml file"))
                    }
                    Err(e) => {
                        eprintln!("config.toml file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new("could not create config.toml file"))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        Self::validate(config.clone());
        Ok(config)
    }

    pub fn validate(config: Configuration) {
        // Check Map
        let check_map = vec![
            ("[Log] Level", config.log_level.clone(), r"^(off|trace|debug|info|warn|error)$".to_string()),
            ("[DB: torrents]", config.database_structure.torrents.table_name.clone(), r"^[a-z_][a-z0-9_]{0,30}$".to_string()),
            ("[DB: users]", config.database_structure.users.table_name.clone(), r"^[a-z_][a-z0-9_]{0,30}$".to_string()),
            ("[DB: forums]", config.database_structure.forums.table_name.clone(), r"^[a-z_][a-z0-9_]{0,30}$".to_string()),
            ("[DB: threads]", config.database_structure.threads.table_name.clone(), r"^[a-z_][a-z0-9_]{0,30}$".to_string()),
            ("[DB: posts]", config.database_structure.posts.table_name.clone(), r"^[a-z_][a-z0-9_]{0,30}$".to_string()),
            ("[Storage] Uploads path", config.storage.uploads_path.clone(), r"^[^\x00]+$".to_string()),
            ("[Storage] Torrents dir", config.storage.torrents_dir.clone(), r"^[A-Za-z0-9._-]+$".to_string()),
            ("[Storage] Images dir", config.storage.images_dir.clone(), r"^[A-Za-z0-9._-]+$".to_string()),
        ];

        // Validation
        for (name, value, regex) in check_map {
            Self::validate_value(name, value, regex);
        }

        if config.index.api_key.len() < 8 {
            panic!("[VALIDATE CONFIG] The index.api_key must be at least 8 characters long");
        }
        if config.index.jwt_secret.len() < 32 {
            panic!("[VALIDATE CONFIG] The index.jwt_secret must be at least 32 characters long");
        }
        if config.index.token_validity_secs == 0 {
            panic!("[VALIDATE CONFIG] The index.token_validity_secs must be non-zero");
        }
        if !(4..=16).contains(&config.index.bcrypt_cost) {
            panic!("[VALIDATE CONFIG] The index.bcrypt_cost must be between 4 and 16");
        }
        if config.index.torrents_per_page == 0 || config.index.posts_per_page == 0 {
            panic!("[VALIDATE CONFIG] Page sizes must be non-zero");
        }
        if config.index.top_torrents_limit == 0 {
            panic!("[VALIDATE CONFIG] The index.top_torrents_limit must be non-zero");
        }
        for api_server in &config.api_server {
            if api_server.enabled && api_server.ssl && (api_server.ssl_key.is_empty() || api_server.ssl_cert.is_empty()) {
                panic!("[VALIDATE CONFIG] SSL enabled for {} but ssl_key or ssl_cert is empty", api_server.bind_address);
            }
        }
    }

    pub fn validate_value(name: &str, value: String, regex: String)
    {
        let regex_check = Regex::new(regex.as_str()).unwrap();
        if !regex_check.is_match(value.as_str()){
            panic!("[VALIDATE CONFIG] Error checking {} [:] Name: \"{}\" [:] Regex: \"{}\"", name, value, regex_check);
        }
    }
}
