use anyhow::{Result, bail};
use mokkan_slug::{
    application::{ports::util::SlugGenerator, services::RecordServices},
    config::SlugSettings,
    domain::{
        record::{Record, RecordId, RecordReadRepository, RecordState, RecordWriteRepository, Slug},
        slug::SlugConfig,
    },
    infrastructure::{database, repositories::SqliteRecordStore, util::DefaultSlugGenerator},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Article {
    id: RecordId,
    title: String,
    slug: Option<Slug>,
    #[serde(skip)]
    state: RecordState,
}

impl Article {
    fn new(title: impl Into<String>) -> Self {
        Self {
            id: RecordId::generate(),
            title: title.into(),
            slug: None,
            state: RecordState::default(),
        }
    }
}

impl Record for Article {
    const COLLECTION: &'static str = "articles";

    fn id(&self) -> RecordId {
        self.id
    }

    fn state(&self) -> &RecordState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut RecordState {
        &mut self.state
    }
}

fn article_slug(article: &Article) -> Option<&Slug> {
    article.slug.as_ref()
}

fn set_article_slug(article: &mut Article, slug: Slug) {
    article.slug = Some(slug);
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    init_tracing();

    let mut permanent = false;
    let mut titles = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--permanent" => permanent = true,
            _ => titles.push(arg),
        }
    }
    if titles.is_empty() {
        bail!("usage: mokkan_slug [--permanent] <title>...");
    }

    let settings = SlugSettings::from_env()?;
    let pool = database::init_pool(settings.database_url(), settings.max_connections()).await?;
    database::run_migrations(&pool).await?;

    let store = Arc::new(SqliteRecordStore::<Article>::new(pool));
    let read_repo: Arc<dyn RecordReadRepository<Article>> = store.clone();
    let write_repo: Arc<dyn RecordWriteRepository<Article>> = store;
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let config = SlugConfig::<Article>::builder()
        .source("title", |article: &Article| article.title.clone())
        .storage(article_slug, set_article_slug)
        .permanent(permanent)
        .max_attempts(settings.max_slug_attempts())
        .build()?;
    let services = RecordServices::configure(config, read_repo, write_repo, slugger).await?;

    for title in titles {
        let saved = services.commands.save(Article::new(title)).await?;
        let param = services.queries.to_param(&saved).unwrap_or_default();
        println!("{param}\t{}", saved.title);
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
