use clap::Parser;
use roomscape::cli::{Cli, Cmd};
use roomscape::config::RoomscapeConfig;
use roomscape::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = RoomscapeConfig::load(&cli.config)?;

    match cli.cmd.unwrap_or(Cmd::Serve) {
        Cmd::Serve => server::serve(config).await,
        Cmd::Build => {
            server::emit_assets(&config)?;
            tracing::info!("assets written to {}/assets", config.content.dist);
            Ok(())
        }
        Cmd::Check => {
            server::check_styles()?;
            tracing::info!("every token reference resolves in every theme");
            Ok(())
        }
    }
}
