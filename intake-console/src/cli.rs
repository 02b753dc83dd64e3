use clap::Parser;

#[derive(Parser)]
#[command(name = "intake")]
#[command(about = "Credential-gated record submission console")]
#[command(version)]
pub struct Cli {
    /// Backend endpoint URL (overrides config.toml and INTAKE_BACKEND_URL)
    #[arg(long)]
    pub url: Option<String>,

    /// Backend access key (overrides config.toml and INTAKE_BACKEND_KEY)
    #[arg(long)]
    pub key: Option<String>,
}
