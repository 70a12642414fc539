use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use tc_mock_service::{MockBehavior, MockResult, serve};

#[derive(Parser)]
#[command(name = "tc-mock-service")]
#[command(about = "Local stand-in for the thermodynamic calculation service", long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,
    /// Port to listen on
    #[arg(short, long, default_value_t = 5000)]
    port: u16,
}

#[tokio::main]
async fn main() -> MockResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    serve(SocketAddr::new(args.host, args.port), MockBehavior::Canned).await
}
