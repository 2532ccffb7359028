use clap::Parser;
use quizhall::db::Db;
use quizhall::models::SeedData;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// SQLite database path.
    #[arg(long, env = "DATABASE_URL", default_value = "quizhall.db")]
    database: String,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:8000")]
    address: String,

    /// Set the Secure attribute on session cookies.
    #[arg(long, env)]
    secure_cookies: bool,

    /// JSON file with quizzes and events to load at startup.
    #[arg(long, env)]
    seed: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "quizhall=debug,axum=info,sqlx=warn".to_owned());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    let db = Db::new(args.database).await?;

    if let Some(path) = &args.seed {
        let raw = std::fs::read_to_string(path)?;
        let seed: SeedData = serde_json::from_str(&raw)?;
        db.load_seed(seed).await?;
        tracing::info!("seed data loaded from {}", path.display());
    }

    let state = quizhall::AppState {
        db,
        secure_cookies: args.secure_cookies,
    };
    let app = quizhall::router(state);

    let listener = tokio::net::TcpListener::bind(&args.address).await?;
    tracing::info!("listening on {}", args.address);
    axum::serve(listener, app).await?;

    Ok(())
}
