//! Demonstration of the matchkit abstract factory.
//!
//! Runs the same SDK workflow twice in one process: first against a
//! factory configured for in-process clients, then against one configured
//! for a gRPC engine server. The workflow code is identical in both
//! passes; only the factory configuration differs.

use anyhow::Result;
use clap::Parser;
use serde_json::json;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use matchkit_api::{ConfigApi, ConfigManagerApi, DiagnosticApi, EngineApi, ProductApi};
use matchkit_factory::{FactoryConfig, SdkFactory};

/// matchkit SDK demonstration
#[derive(Parser)]
#[command(name = "matchkit-demo")]
#[command(about = "Exercises the matchkit SDK through both factory backends")]
struct Cli {
    /// Address of a matchkit gRPC engine server for the remote pass
    #[arg(long, default_value = "localhost:8258")]
    grpc_address: String,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let engine_config_json = json!({
        "PIPELINE": { "CONFIGPATH": "/etc/matchkit" }
    })
    .to_string();

    let passes = [
        ("in-process", String::new()),
        ("grpc", cli.grpc_address.clone()),
    ];

    for (backend, grpc_address) in passes {
        info!(backend, "starting demonstration pass");

        let factory = SdkFactory::new(FactoryConfig {
            grpc_address,
            module_name: "matchkit-demo".to_string(),
            verbose_logging: i64::from(cli.verbose),
            engine_config_json: engine_config_json.clone(),
            ..Default::default()
        });

        // An unreachable server does not fail the accessors; the errors
        // show up on the first RPC inside the pass.
        if let Err(error) = run_pass(&factory).await {
            warn!(backend, error = %error, "demonstration pass failed");
        }
    }

    Ok(())
}

async fn run_pass(factory: &SdkFactory) -> Result<()> {
    let config = factory.config().await?;
    let config_manager = factory.config_manager().await?;

    // Build an engine configuration with the demo data sources and make
    // it the default.
    let handle = config.create().await?;
    for code in ["CUSTOMERS", "WATCHLIST"] {
        config.add_data_source(handle, code).await?;
    }
    let definition = config.save(handle).await?;
    config.close(handle).await?;

    let config_id = config_manager
        .add_config(&definition, "created by matchkit-demo")
        .await?;
    config_manager.set_default_config_id(config_id).await?;
    info!(config_id, "engine configuration installed");

    // With a configuration in place, pull the remaining clients.
    let diagnostic = factory.diagnostic().await?;
    let engine = factory.engine().await?;
    let product = factory.product().await?;

    let cores = diagnostic.physical_cores().await?;
    info!(cores, "host diagnostics");

    engine.purge_repository().await?;
    let record_id = Uuid::new_v4().to_string();
    let record = json!({
        "NAME_LAST": "SEAMAN",
        "DATE_OF_BIRTH": "4/8/1983",
        "SOCIAL_HANDLE": "flavorh",
        "ADDR_CITY": "Delhi",
        "RECORD_ID": record_id,
    })
    .to_string();
    let with_info = engine
        .add_record_with_info("TEST", &record_id, &record, "TEST", 0)
        .await?;
    info!(%with_info, "record loaded");

    let license = product.license().await?;
    info!(%license, "product license");

    // Releasing the clients is the caller's job, not the factory's.
    config.destroy().await?;
    config_manager.destroy().await?;
    diagnostic.destroy().await?;
    engine.destroy().await?;
    product.destroy().await?;

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
