use futures_util::future::{BoxFuture, FutureExt};
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use std::time::Duration;
use tracing::info;

use super::lazy::{BoxError, ConnectOptions, Connector};

/// Ready MongoDB client bound to one database
#[derive(Clone, Debug)]
pub struct MongoHandle {
    client: Client,
    db_name: String,
}

impl MongoHandle {
    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn db_name(&self) -> &str {
        &self.db_name
    }

    pub fn database(&self) -> Database {
        self.client.database(&self.db_name)
    }
}

/// Connects to MongoDB through the official driver
#[derive(Clone, Debug)]
pub struct MongoConnector {
    app_name: String,
    server_selection_timeout: Duration,
}

impl MongoConnector {
    pub fn new(app_name: impl Into<String>, server_selection_timeout: Duration) -> Self {
        Self {
            app_name: app_name.into(),
            server_selection_timeout,
        }
    }

    /// Name reported to the server in the connection handshake
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }
}

impl Default for MongoConnector {
    fn default() -> Self {
        Self::new("imaginify-server", Duration::from_secs(5))
    }
}

impl Connector for MongoConnector {
    type Handle = MongoHandle;

    fn connect(
        &self,
        target: &str,
        options: &ConnectOptions,
    ) -> BoxFuture<'static, Result<MongoHandle, BoxError>> {
        let target = target.to_string();
        let options = options.clone();
        let app_name = self.app_name.clone();
        let timeout = self.server_selection_timeout;

        async move {
            let mut client_options = ClientOptions::parse(&target).await?;
            client_options.app_name = Some(app_name);
            client_options.server_selection_timeout = Some(timeout);
            client_options.default_database = Some(options.db_name.clone());

            let client = Client::with_options(client_options)?;

            // The driver connects lazily; ping now so a bad target fails here.
            if !options.buffer_commands {
                client
                    .database(&options.db_name)
                    .run_command(doc! { "ping": 1 })
                    .await?;
            }

            info!("Connected to MongoDB database '{}'", options.db_name);

            Ok(MongoHandle {
                client,
                db_name: options.db_name,
            })
        }
        .boxed()
    }
}
