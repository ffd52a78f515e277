mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "swb")]
#[command(about = "Build and deploy serverless switchboard workflows", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Package the workflow and executor functions for deployment
    Package {
        /// Remove the .dist build directory after packaging
        #[arg(long)]
        clean: bool,
    },
    /// Deploy the packaged workflow to the cloud with terraform
    Deploy,
    /// Teardown a deployed workflow
    Teardown,
    /// Print version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // ログは stderr へ。ユーザー向けの進捗は progress チャネル経由で stdout に出る
    tracing_subscriber::fmt::init();

    // Version コマンドは設定ファイル不要
    if matches!(cli.command, Commands::Version) {
        println!("switchboard {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    match cli.command {
        Commands::Package { clean } => commands::package::handle(clean).await,
        Commands::Deploy => commands::deploy::handle().await,
        Commands::Teardown => commands::teardown::handle().await,
        Commands::Version => Ok(()),
    }
}
