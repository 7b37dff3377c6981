use movies::{config::Config, db, seed, titles::FakerTitles};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,movies=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;

    let db = db::connect_and_migrate(&config).await?;
    seed::make_movies(&db, &mut FakerTitles::new()).await?;
    db.close().await?;

    Ok(())
}
