use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Stand-in for the Inertia daemon web API.
#[derive(Parser, Debug)]
#[command(name = "mock-daemon", version)]
struct Args {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Username accepted by /user/login
    #[arg(long, env = "INERTIA_USERNAME", default_value = "admin")]
    username: String,

    /// Password accepted by /user/login
    #[arg(long, env = "INERTIA_PASSWORD", default_value = "admin")]
    password: String,
}

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let addr = format!("127.0.0.1:{}", args.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "serving mock daemon");

    let config = mock_daemon::Config {
        username: args.username,
        password: args.password,
    };
    mock_daemon::run_with(listener, config).await
}
