use anyhow::Context;
use clap::Parser;
use rootwalk_domain::{CliOverrides, DomainName, LookupKind};
use std::process::ExitCode;
use std::str::FromStr;
use tracing::{debug, error};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "rootwalk")]
#[command(version)]
#[command(about = "Resolves a name by walking the DNS delegation tree from the root servers")]
struct Cli {
    /// Domain name to resolve
    name: String,

    /// Look up the mail server instead of the host address
    #[arg(short = 'm', long)]
    mx: bool,

    /// Show the delegation walk on the console
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        log_level: cli.verbose.then(|| "debug".to_string()),
        query_timeout: None,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    let name = DomainName::from_str(&cli.name)
        .with_context(|| format!("'{}' is not a resolvable name", cli.name))?;

    let kind = if cli.mx {
        LookupKind::MailExchange
    } else {
        LookupKind::Address
    };

    debug!(
        name = %name,
        kind = %kind,
        strategy = config.resolver.strategy.as_str(),
        timeout_ms = config.resolver.query_timeout,
        "Starting resolution"
    );

    let services = di::ResolverServices::new(&config);

    // An empty server list makes the resolver bootstrap from the root hints.
    match services.resolver.resolve(&name, Vec::new(), kind).await {
        Ok(Some(answer)) => {
            match kind {
                LookupKind::Address => println!("IP address for {}: {}", name, answer),
                LookupKind::MailExchange => println!("Mail Server for {}: {}", name, answer),
            }
            Ok(ExitCode::SUCCESS)
        }
        Ok(None) => {
            debug!(name = %name, "Authoritative servers report the name absent");
            println!("ERROR: Could not resolve request.");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => {
            error!(name = %name, error = %e, "Resolution failed");
            println!("ERROR: Could not resolve request.");
            Ok(ExitCode::FAILURE)
        }
    }
}
