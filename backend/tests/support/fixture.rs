//! Container fixture: an isolated network with a Postgres container and the
//! Person API container wired to it.
//!
//! The API image is built from `backend/Dockerfile` when the fixture starts.
//! Set `PERSON_API_IMAGE` to a `name:tag` to run an existing image instead.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Context;
use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::Text;
use testcontainers::core::IntoContainerPort;
use testcontainers::runners::{AsyncBuilder, AsyncRunner};
use testcontainers::{ContainerAsync, GenericBuildableImage, GenericImage, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tokio::net::TcpStream;
use tokio::time::sleep;
use uuid::Uuid;

use person_api::api::{CreatePersonRequest, PersonResponse};

const API_PORT: u16 = 8080;
const POSTGRES_PORT: u16 = 5432;
const API_IMAGE_NAME: &str = "person-api";
const API_IMAGE_TAG: &str = "test";
const SQL_NETWORK_ALIAS: &str = "persondb";
const READY_TIMEOUT: Duration = Duration::from_secs(60);

// Defaults of the postgres module image.
const POSTGRES_USER: &str = "postgres";
const POSTGRES_PASSWORD: &str = "postgres";
const POSTGRES_DB: &str = "postgres";

const DIESEL_MIGRATIONS_TABLE: &str = "__diesel_schema_migrations";

fn split_image_name(image: &str) -> (String, String) {
    match image.rsplit_once(':') {
        Some((name, tag)) if !tag.contains('/') => (name.to_string(), tag.to_string()),
        _ => (image.to_string(), "latest".to_string()),
    }
}

/// Build the service image from the workspace sources.
async fn build_api_image() -> anyhow::Result<GenericImage> {
    let backend_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let workspace_dir = backend_dir
        .parent()
        .context("backend crate has no parent workspace directory")?;

    let mut image = GenericBuildableImage::new(API_IMAGE_NAME, API_IMAGE_TAG)
        .with_dockerfile(backend_dir.join("Dockerfile"))
        .with_file(workspace_dir.join("Cargo.toml"), "./Cargo.toml")
        .with_file(backend_dir.join("Cargo.toml"), "./backend/Cargo.toml")
        .with_file(backend_dir.join("src"), "./backend/src");

    let lockfile = workspace_dir.join("Cargo.lock");
    if lockfile.exists() {
        image = image.with_file(lockfile, "./Cargo.lock");
    }

    image
        .build_image()
        .await
        .context("failed to build person-api image from backend/Dockerfile")
}

async fn api_image() -> anyhow::Result<GenericImage> {
    match std::env::var("PERSON_API_IMAGE") {
        Ok(image) => {
            let (name, tag) = split_image_name(&image);
            Ok(GenericImage::new(name, tag))
        }
        Err(_) => build_api_image().await,
    }
}

fn postgres_url(host: &str, port: u16) -> String {
    format!(
        "postgres://{}:{}@{}:{}/{}",
        POSTGRES_USER, POSTGRES_PASSWORD, host, port, POSTGRES_DB
    )
}

/// A clean database plus API instance shared by a group of tests.
pub struct ApplicationFixture {
    api: ContainerAsync<GenericImage>,
    database: ContainerAsync<Postgres>,
    network: String,
    base_url: String,
    host_database_url: String,
    client: reqwest::Client,
}

impl ApplicationFixture {
    /// Build the API image, create the network, start the database, then
    /// start the API and wait until it accepts requests.
    pub async fn start() -> anyhow::Result<Self> {
        let api_image = api_image().await?;

        let suffix = Uuid::new_v4().simple().to_string();
        let network = format!("person-api-test-{}", suffix);
        // Container names double as DNS aliases on a user-defined network.
        let database_alias = format!("{}-{}", SQL_NETWORK_ALIAS, suffix);

        let database = Postgres::default()
            .with_network(network.clone())
            .with_container_name(database_alias.clone())
            .start()
            .await
            .context("failed to start postgres container")?;

        // Container-to-container traffic uses the internal port and alias,
        // so this is known before the API starts.
        let internal_database_url = postgres_url(&database_alias, POSTGRES_PORT);

        let api = api_image
            .with_exposed_port(API_PORT.tcp())
            .with_network(network.clone())
            .with_env_var("DATABASE_URL", internal_database_url)
            .with_env_var("PORT", API_PORT.to_string())
            .with_env_var("RUST_LOG", "info")
            .start()
            .await
            .context("failed to start person-api container")?;

        let api_host = api.get_host().await?.to_string();
        let api_port = api.get_host_port_ipv4(API_PORT).await?;

        let db_host = database.get_host().await?.to_string();
        let db_port = database.get_host_port_ipv4(POSTGRES_PORT).await?;

        let fixture = Self {
            api,
            database,
            network,
            base_url: format!("http://{}:{}", api_host, api_port),
            host_database_url: postgres_url(&db_host, db_port),
            client: reqwest::Client::new(),
        };

        fixture.wait_for_ready(READY_TIMEOUT).await?;
        Ok(fixture)
    }

    /// Wait until the API port accepts connections and the service answers.
    async fn wait_for_ready(&self, timeout: Duration) -> anyhow::Result<()> {
        let address = self.base_url.trim_start_matches("http://").to_string();
        let start = Instant::now();

        loop {
            if TcpStream::connect(&address).await.is_ok() {
                let health = self.client.get(self.url("/health")).send().await;
                if matches!(health, Ok(ref r) if r.status().is_success()) {
                    return Ok(());
                }
            }

            if start.elapsed() > timeout {
                anyhow::bail!(
                    "person-api on network {} did not become ready within {:?}",
                    self.network,
                    timeout
                );
            }

            sleep(Duration::from_millis(500)).await;
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Empty every user table through a direct database connection, leaving
    /// the migration bookkeeping intact.
    pub async fn reset(&self) -> anyhow::Result<()> {
        let url = self.host_database_url.clone();
        tokio::task::spawn_blocking(move || truncate_user_tables(&url)).await??;
        Ok(())
    }

    pub async fn get_people(&self) -> anyhow::Result<Vec<PersonResponse>> {
        let response = self
            .client
            .get(self.url("/person"))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    pub async fn get_person(&self, path: &str) -> anyhow::Result<PersonResponse> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    pub async fn post_person<T: serde::Serialize + ?Sized>(
        &self,
        body: &T,
    ) -> anyhow::Result<reqwest::Response> {
        Ok(self.client.post(self.url("/person")).json(body).send().await?)
    }

    pub async fn create_person(
        &self,
        request: &CreatePersonRequest,
    ) -> anyhow::Result<reqwest::Response> {
        self.post_person(request).await
    }

    /// Stop both containers. The network goes away with them.
    pub async fn shutdown(self) -> anyhow::Result<()> {
        self.api.stop().await?;
        self.database.stop().await?;
        Ok(())
    }
}

#[derive(QueryableByName)]
struct UserTable {
    #[diesel(sql_type = Text)]
    table_name: String,
}

fn truncate_user_tables(database_url: &str) -> anyhow::Result<()> {
    let mut conn = PgConnection::establish(database_url)
        .with_context(|| format!("failed to connect to {}", database_url))?;

    let tables: Vec<UserTable> = sql_query(
        "SELECT table_name::text AS table_name \
         FROM information_schema.tables \
         WHERE table_schema = 'public' AND table_type = 'BASE TABLE' AND table_name::text <> $1",
    )
    .bind::<Text, _>(DIESEL_MIGRATIONS_TABLE)
    .load(&mut conn)?;

    if tables.is_empty() {
        return Ok(());
    }

    let names = tables
        .iter()
        .map(|t| format!("\"{}\"", t.table_name.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(", ");

    sql_query(format!("TRUNCATE TABLE {} RESTART IDENTITY CASCADE", names)).execute(&mut conn)?;
    Ok(())
}
