use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use product_lookup::batch::{load_requests, write_results};
use product_lookup::config::API_KEY_ENV;
use product_lookup::lookup::{ConsoleProgress, SupplierProfile};
use product_lookup::report::{render_product_report, BatchSummary};
use product_lookup::{LookupClient, LookupConfig, LookupError, ProductRequest};

#[derive(Parser)]
#[command(
    name = "product-lookup",
    version,
    about = "Scientific-supply product lookup through a search-enabled LLM",
    long_about = None
)]
struct Cli {
    /// Input CSV file with product list
    #[arg(long, short = 'i')]
    input: Option<PathBuf>,
    /// Output CSV file for results
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,
    /// Single product name to search
    #[arg(long, short = 'p')]
    product: Option<String>,
    /// API key (or set OPENAI_API_KEY)
    #[arg(long)]
    api_key: Option<String>,
    #[arg(long)]
    model: Option<String>,
    #[arg(long)]
    max_tokens: Option<u32>,
    #[arg(long)]
    base_url: Option<String>,
    #[arg(long)]
    timeout_secs: Option<u64>,
    #[arg(long)]
    supplier_name: Option<String>,
    #[arg(long)]
    supplier_domain: Option<String>,
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let config = match LookupConfig::resolve(cli.api_key.clone()) {
        Ok(config) => apply_overrides(config, &cli),
        Err(err) => {
            report_setup_error(&err);
            return Ok(());
        }
    };
    let client = match LookupClient::from_config(&config) {
        Ok(client) => client,
        Err(err) => {
            report_setup_error(&err);
            return Ok(());
        }
    };
    info!(model = %config.model, supplier = %config.supplier.name, "lookup client ready");

    if let Some(product) = cli.product {
        let result = client.lookup(&ProductRequest::new(product));
        print!("{}", render_product_report(&result));
    } else if let Some(input) = cli.input {
        let requests = load_requests(&input);
        if requests.is_empty() {
            println!("No products found in input file");
            return Ok(());
        }

        println!("\nProcessing {} products...", requests.len());
        let results = client.lookup_batch(&requests, &mut ConsoleProgress);

        let written = write_results(&results, cli.output.as_deref())
            .context("failed to save lookup results")?;
        println!("\nResults saved to: {}", written.display());
        print!("{}", BatchSummary::from_results(&results, &written).render());
    } else {
        print_usage();
    }

    Ok(())
}

fn apply_overrides(mut config: LookupConfig, cli: &Cli) -> LookupConfig {
    if let Some(model) = &cli.model {
        config = config.with_model(model.clone());
    }
    if let Some(max_tokens) = cli.max_tokens {
        config = config.with_max_tokens(max_tokens);
    }
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url.clone());
    }
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    if cli.supplier_name.is_some() || cli.supplier_domain.is_some() {
        let default = SupplierProfile::default();
        config = config.with_supplier(SupplierProfile::new(
            cli.supplier_name.clone().unwrap_or(default.name),
            cli.supplier_domain.clone().unwrap_or(default.domain),
        ));
    }
    config
}

fn report_setup_error(err: &LookupError) {
    println!("Error: {}", err);
    if !err.is_missing_credential() {
        return;
    }
    println!("Please set your OpenAI API key:");
    println!("  export {}='your-api-key-here'", API_KEY_ENV);
    println!("  or use --api-key argument");
}

fn print_usage() {
    println!("Please provide either --product for single search or --input for batch processing");
    println!("\nExamples:");
    println!("  product-lookup --product 'DPBS solution'");
    println!("  product-lookup --input products.csv --output results.csv");
}
