use std::env;
use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing::error;

use codeartoken::config::{default_maven_settings, Configuration};
use codeartoken::refresh::refresh_token;
use codeartoken::source::CodeArtifactSource;
use codeartoken::utils::logging::{self, LogFormat, LogLevel};

#[derive(Parser)]
#[command(name = "codeartoken", version, about = "Refresh AWS CodeArtifact token for maven", long_about = None)]
struct Args {
    /// AWS CodeArtifact domain
    #[arg(short, long, env = "CODEARTIFACT_DOMAIN")]
    domain: String,
    /// AWS CodeArtifact domain owner (AWS account id)
    #[arg(short, long, env = "CODEARTIFACT_DOMAIN_OWNER")]
    owner: String,
    /// Server id for CodeArtifact in your Maven settings
    #[arg(short, long, default_value = "codeartifact")]
    server: String,
    /// Maven settings path [default: ~/.m2/settings.xml]
    #[arg(short = 'x', long)]
    settings: Option<PathBuf>,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Bare invocation prints help and exits cleanly instead of complaining
    // about missing flags.
    if env::args().len() <= 1 {
        Args::command().print_help()?;
        return Ok(());
    }

    let args = Args::parse();

    let level = args
        .log_level
        .map(|level| level.as_str().to_owned())
        .unwrap_or_else(|| "info".to_owned());
    logging::init_logging(&level, &LogFormat::from_env());

    // Single top-level handler: log the error, exit non-zero.
    if let Err(err) = run(args).await {
        error!("Encountered exception, exiting: {err}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run(args: Args) -> codeartoken::Result<()> {
    let settings = match args.settings {
        Some(path) => path,
        None => default_maven_settings()?,
    };
    let cfg = Configuration {
        domain: args.domain,
        domain_owner: args.owner,
        server: args.server,
        settings,
    };

    let source = CodeArtifactSource::from_env().await?;
    refresh_token(&cfg, &source).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::Args;

    #[test]
    fn cli_definition_is_valid() {
        Args::command().debug_assert();
    }
}
