use crate::config::Config;
use crate::errors::ServerError;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::sync::Client;

const APP_NAME: &str = "mongobnb";

/// Process-wide handle on the MongoDB deployment. The driver keeps its own
/// connection pool, so cloning or sharing this is cheap.
#[derive(Clone)]
pub struct Database {
    client: Client,
    name: String,
}

impl Database {
    /// Builds the client once at startup. No I/O happens until the first operation.
    pub fn connect(cfg: &Config) -> Result<Self, ServerError> {
        let mut options = ClientOptions::parse(cfg.mongodb_uri.as_str()).run()?;
        options.max_pool_size = Some(cfg.pool_size);
        if options.app_name.is_none() {
            options.app_name = Some(APP_NAME.to_string());
        }

        let client = Client::with_options(options)?;

        Ok(Self {
            client,
            name: cfg.database.clone(),
        })
    }

    /// Hands `f` the configured logical database for the span of one request.
    pub fn with_db<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mongodb::sync::Database) -> Result<T, ServerError>,
    {
        let db = self.client.database(&self.name);
        f(&db)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Round trip to the server, used at startup to report reachability.
    pub fn ping(&self) -> Result<(), ServerError> {
        self.with_db(|db| {
            db.run_command(doc! { "ping": 1 }).run()?;
            Ok(())
        })
    }
}
