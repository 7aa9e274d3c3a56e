use clap::Parser;
use giphy_feed::{
    application::{
        trending_feed::use_case::TrendingUseCaseLoader,
        trending_giphy::use_case::{
            TrendingGiphyRequest, TrendingGiphyUseCase, TrendingGiphyUseCaseLoader,
        },
    },
    config::Config,
    infrastructure::{
        network::{
            data_transfer_service::DataTransferServiceLoader,
            network_service::{NetworkService, NetworkServiceLoader},
        },
        repositories::{
            gif_data_repository::GifDataRepositoryLoader,
            trending_giphy_repository::GiphyTrendingRepository,
            trending_repository::TrendingRepositoryLoader,
        },
    },
    presentation::feed::view_model::{FeedViewModel, FeedViewModelOptions, FeedViewModelState},
};
use std::sync::Arc;
use tokio::sync::watch;

/// Print the trending GIF feed page by page.
#[derive(Debug, Parser)]
#[command(name = "giphy-feed", version)]
struct Args {
    /// Further pages to load after the first one
    #[arg(long, default_value_t = 0)]
    pages: usize,

    /// Fetch a single unpaginated list instead of driving the feed
    #[arg(long, conflicts_with = "pages")]
    list_only: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info,giphy_feed=debug"))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = Args::parse();
    let config = Config::from_env()?;

    let network: Arc<dyn NetworkService> = Arc::new(NetworkServiceLoader::new(
        config.network_config(),
        config.http_timeout(),
    )?);
    let data_transfer = Arc::new(DataTransferServiceLoader::new(network));

    if args.list_only {
        let use_case = TrendingGiphyUseCaseLoader::new(Arc::new(GiphyTrendingRepository::new(
            data_transfer,
        )));
        let page = use_case
            .execute(TrendingGiphyRequest {
                limit: config.feed_page_size,
            })
            .await?;
        for giphy in &page.items {
            tracing::info!(id = %giphy.id, title = %giphy.title, datetime = %giphy.datetime, "trending gif");
        }
        tracing::info!(count = page.count, total_count = page.total_count, "trending list loaded");
        return Ok(());
    }

    let trending_repository = Arc::new(TrendingRepositoryLoader::new(Arc::clone(&data_transfer)));
    let gif_data_repository = Arc::new(GifDataRepositoryLoader::new(data_transfer));
    let use_case = Arc::new(TrendingUseCaseLoader::new(trending_repository));

    let view_model = FeedViewModel::with_options(
        use_case,
        gif_data_repository,
        FeedViewModelOptions {
            page_size: config.feed_page_size,
            ..FeedViewModelOptions::default()
        },
    );
    let mut state = view_model.state().subscribe();

    view_model.view_did_load();
    wait_until_idle(&mut state).await?;
    ensure_loaded(&view_model)?;

    for _ in 0..args.pages {
        if !view_model.has_more_pages() {
            tracing::info!("feed fully loaded");
            break;
        }
        view_model.did_load_next_page();
        wait_until_idle(&mut state).await?;
        ensure_loaded(&view_model)?;
    }

    for item in view_model.items().get().iter() {
        tracing::info!(
            id = %item.id,
            title = %item.title,
            trending = item.trending_date_time.as_deref().unwrap_or("-"),
            author = item.author_name.as_deref().unwrap_or("-"),
            gif = %item.images.small.url,
            "feed item"
        );
    }
    tracing::info!(
        loaded = view_model.loaded_count(),
        total_count = view_model.total_count(),
        "feed loaded"
    );
    Ok(())
}

async fn wait_until_idle(state: &mut watch::Receiver<FeedViewModelState>) -> anyhow::Result<()> {
    state
        .wait_for(|state| *state == FeedViewModelState::None)
        .await?;
    Ok(())
}

fn ensure_loaded(view_model: &FeedViewModel) -> anyhow::Result<()> {
    let error = view_model.error().get();
    if !error.is_empty() {
        anyhow::bail!(error);
    }
    Ok(())
}
