use std::net::IpAddr;

use anyhow::Result;
use api::service::UserService;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ApiArgs {
    /// The address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    addr: IpAddr,

    /// The port to serve the API on
    #[arg(short, long, default_value = "3000")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let args = ApiArgs::parse();

    let app = api::app(UserService::seeded());

    let listener = tokio::net::TcpListener::bind((args.addr, args.port)).await?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "serving api");
    axum::serve(listener, app).await?;

    Ok(())
}
