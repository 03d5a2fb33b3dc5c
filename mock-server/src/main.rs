use mock_server::Account;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let defaults = Account::default();
    let account = Account::new(
        &std::env::var("PINBOARD_USER").unwrap_or(defaults.username),
        &std::env::var("PINBOARD_PASSWORD").unwrap_or(defaults.password),
        &std::env::var("PINBOARD_TOKEN").unwrap_or(defaults.token),
    );

    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, username = %account.username, "mock pinboard listening; API root is /v1");
    mock_server::run(listener, mock_server::app(account)).await
}
