pub mod config {
    use serde::Deserialize;

    #[derive(Deserialize, Debug)]
    pub struct Config {
        #[serde(default = "default_db_url")]
        pub db_url: String,
        #[serde(default = "default_port")]
        pub port: u16,
    }

    impl Config {
        /// Loads configuration from environment variables.
        pub fn from_env() -> anyhow::Result<Self> {
            let settings = config::Config::builder()
                .add_source(config::Environment::default())
                .build()?;

            let config: Config = settings.try_deserialize()?;
            Ok(config)
        }
    }

    fn default_db_url() -> String {
        "sqlite://mydatabase.db?mode=rwc".to_string()
    }

    fn default_port() -> u16 {
        8080
    }

}

pub mod db {
    use migration::MigratorTrait;
    use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

    /// Opens the shared connection and brings the schema up to date.
    pub async fn connect(db_url: &str) -> Result<DatabaseConnection, DbErr> {
        let mut options = ConnectOptions::new(db_url);
        // One connection for the whole process. This also keeps `sqlite::memory:` a single database.
        options.max_connections(1).min_connections(1);

        let db = Database::connect(options).await?;
        migration::Migrator::up(&db, None).await?;
        tracing::info!("Database migrations applied successfully");
        Ok(db)
    }
}

pub mod entities;
pub mod good;
pub mod order;
pub mod resource;
pub mod task;
pub mod user;
pub mod web;
