mod cli;

use holonet::{config, server};
use holonet_db::pool::{get_conn, init_pool_with_size, DbPool};
use holonet_db::{migrations, seed};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

fn open_database(config: &config::Config) -> Result<DbPool> {
    let db_path = config.database.path.to_string_lossy();
    tracing::info!("Opening database at {}", db_path);
    let pool = init_pool_with_size(&db_path, config.database.pool_size)?;
    Ok(pool)
}

async fn start_server(
    host: Option<String>,
    port: Option<u16>,
    config_path: Option<&std::path::Path>,
) -> Result<()> {
    let mut config = config::load_config_or_default(config_path)?;

    // Override host/port from CLI if specified
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    tracing::info!("Starting holonet server");

    let db_pool = open_database(&config)?;
    server::start_server(config, db_pool).await
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "holonet=trace,holonet_db=debug,holonet_common=debug,tower_http=debug".to_string()
        } else {
            "holonet=info,holonet_db=info,tower_http=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Start { host, port } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(start_server(host, port, cli.config.as_deref()))
        }
        Commands::InitDb => init_db(cli.config.as_deref()),
        Commands::Seed => seed_db(cli.config.as_deref()),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("holonet {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn init_db(config_path: Option<&std::path::Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let pool = open_database(&config)?;
    let conn = get_conn(&pool)?;
    let version = migrations::current_version(&conn)?;

    println!(
        "Database ready at {} (schema version {})",
        config.database.path.display(),
        version
    );
    Ok(())
}

fn seed_db(config_path: Option<&std::path::Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let pool = open_database(&config)?;
    let conn = get_conn(&pool)?;

    tracing::warn!("Seeding replaces all existing rows");
    let summary = seed::seed(&conn)?;

    println!("Seeded {}", config.database.path.display());
    println!("  Planets: {}", summary.planets);
    println!("  Characters: {}", summary.characters);
    println!("  Starships: {}", summary.starships);
    println!("  Assignments: {}", summary.assignments);
    Ok(())
}

fn validate_config(path: Option<&std::path::Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Server: {}:{}", config.server.host, config.server.port);
            println!("  GraphiQL: {}", config.server.graphiql);
            println!("  Database: {}", config.database.path.display());
            println!("  Pool size: {}", config.database.pool_size);
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!("  Server: {}:{}", config.server.host, config.server.port);
            println!("  Database: {}", config.database.path.display());
        }
    }

    Ok(())
}
