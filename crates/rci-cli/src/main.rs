mod admin;
mod marketing;
mod render;

use clap::{Parser, Subcommand};
use rci_core::{LoginSession, RetailerConfig, RetailersFile, Role};
use tracing_subscriber::EnvFilter;

use crate::admin::AdminArgs;
use crate::marketing::AnalyzeArgs;

#[derive(Debug, Parser)]
#[command(name = "rci")]
#[command(about = "Review intelligence dashboard (mock data)")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Sign in and open the dashboard for the chosen role
    Login {
        #[arg(long, default_value = "Marketing Manager")]
        username: String,
        /// Accepted and ignored; there is no credential check
        #[arg(long, default_value = "password")]
        password: String,
        #[arg(long, default_value = "marketing-manager", value_parser = parse_role)]
        role: Role,
    },
    /// Show the competitor comparison for a retailer
    Analyze(AnalyzeArgs),
    /// Show the admin panel
    Admin(AdminArgs),
    /// List retailers in the catalog
    Retailers {
        /// Show only the retailer with this id
        #[arg(long)]
        id: Option<String>,
    },
}

fn parse_role(s: &str) -> Result<Role, String> {
    match s {
        "admin" => Ok(Role::Admin),
        "marketing-manager" | "marketing" => Ok(Role::MarketingManager),
        other => Err(format!(
            "unknown role '{other}'; expected 'admin' or 'marketing-manager'"
        )),
    }
}

/// Catalog entries to list: all of them, or the one matching `id`.
fn catalog_entries<'a>(
    catalog: &'a RetailersFile,
    id: Option<&str>,
) -> anyhow::Result<Vec<&'a RetailerConfig>> {
    match id {
        Some(id) => catalog
            .find(id)
            .map(|entry| vec![entry])
            .ok_or_else(|| anyhow::anyhow!("unknown retailer: {id}")),
        None => Ok(catalog.retailers.iter().collect()),
    }
}

/// Sign-in banner listing the roles granted to the user.
fn login_banner(session: &LoginSession) -> anyhow::Result<String> {
    if !session.user.has_role(session.active_role) {
        anyhow::bail!(
            "user {} is not granted the {} role",
            session.user.name,
            session.active_role
        );
    }
    let granted: Vec<String> = [Role::Admin, Role::MarketingManager]
        .into_iter()
        .filter(|role| session.user.has_role(*role))
        .map(|role| role.to_string())
        .collect();
    Ok(format!(
        "Signed in as {} <{}> ({}); roles: {}",
        session.user.name,
        session.user.email,
        session.active_role,
        granted.join(", ")
    ))
}

/// Route a signed-in user to the dashboard for their active role.
async fn run_shell(
    config: &rci_core::AppConfig,
    username: &str,
    role: Role,
) -> anyhow::Result<()> {
    let session = rci_core::login(username, role)?;
    println!("{}", login_banner(&session)?);
    println!();

    match session.active_role {
        Role::Admin => admin::run_admin(config, &AdminArgs::default()).await,
        Role::MarketingManager => {
            marketing::run_analyze(config, &AnalyzeArgs::default()).await
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = rci_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, freshness = %config.freshness, "configuration loaded");

    match cli.command {
        Some(Commands::Login {
            username,
            password,
            role,
        }) => {
            tracing::debug!(
                password_set = !password.is_empty(),
                "password accepted without verification"
            );
            run_shell(&config, &username, role).await?;
        }
        Some(Commands::Analyze(args)) => marketing::run_analyze(&config, &args).await?,
        Some(Commands::Admin(args)) => admin::run_admin(&config, &args).await?,
        Some(Commands::Retailers { id }) => {
            let catalog = rci_core::load_retailers(&config.retailers_path)?;
            let entries = catalog_entries(&catalog, id.as_deref())?;
            print!("{}", render::render_retailers(&entries));
        }
        None => {
            println!("rci: run `rci login` to open the dashboard, or `rci --help` for commands");
        }
    }

    Ok(())
}
