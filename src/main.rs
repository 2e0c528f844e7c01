//! Block view provider command line entry point.
//!
//! Loads the API configuration, builds a [`BlockProvider`] over the HTTP transport
//! and prints the requested view blocks as JSON.
//!
//! # Flow
//! 1. Applies CLI options and `.env` to the environment
//! 2. Sets up logging and loads the API configuration
//! 3. Runs one subcommand against the selected chain network

use anyhow::{Context, Result};
use block_view_provider::{
	models::{ApiConfig, ChainNetwork},
	services::{
		blocks::BlockProvider,
		notification::TracingNotifier,
		transport::{ApiEndpointResolver, HttpTransportClient},
	},
	utils::{constants::DEFAULT_CONFIG_PATH, logging::setup_logging},
};
use clap::{Parser, Subcommand};
use dotenvy::dotenv_override;
use serde::Serialize;
use std::{
	env::{set_var, var},
	path::PathBuf,
	sync::Arc,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(
	name = "block-view-provider",
	about = "Fetches blocks from an indexing API and prints them as normalized view blocks.",
	version
)]
struct Cli {
	/// Path to the API configuration file; defaults apply when it does not exist
	#[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
	config: PathBuf,

	/// Chain identifier (BTC, BCH, LTC, DOGE, ETH, ...)
	#[arg(long, default_value = "BTC")]
	chain: String,

	/// Network identifier (mainnet, testnet, regtest, ...)
	#[arg(long, default_value = "mainnet")]
	network: String,

	/// Write logs to file instead of stdout
	#[arg(long)]
	log_file: bool,

	/// Set log level (trace, debug, info, warn, error)
	#[arg(long, value_name = "LEVEL")]
	log_level: Option<String>,

	/// Path to store log files (default: logs/)
	#[arg(long, value_name = "PATH")]
	log_path: Option<String>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Print the current tip
	Tip,
	/// Print the latest blocks; prints an empty list when they cannot be loaded
	List {
		#[arg(long)]
		count: Option<u32>,
	},
	/// Print blocks at or below a height, highest first
	Page {
		#[arg(long)]
		since: u64,
		#[arg(long)]
		count: Option<u32>,
	},
	/// Print one block by hash
	Block { hash: String },
	/// Print one page of the coins of a block
	Coins {
		hash: String,
		#[arg(long, default_value_t = 100)]
		limit: u32,
		#[arg(long, default_value_t = 1)]
		page: u32,
	},
}

impl Cli {
	/// Apply CLI options to environment variables, overriding any existing values
	fn apply_to_env(&self) {
		dotenv_override().ok();

		if self.log_file {
			set_var("LOG_MODE", "file");
		}

		if let Ok(level) = var("RUST_LOG") {
			set_var("LOG_LEVEL", level);
		}

		if let Some(level) = &self.log_level {
			set_var("LOG_LEVEL", level);
			set_var("RUST_LOG", level);
		}

		if let Some(path) = &self.log_path {
			set_var("LOG_DATA_DIR", path);
		}
	}
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
	println!(
		"{}",
		serde_json::to_string_pretty(value).context("Failed to serialize output")?
	);
	Ok(())
}

async fn run(cli: Cli) -> Result<()> {
	let config = ApiConfig::load(&cli.config)
		.await
		.context("Failed to load API configuration")?;
	let chain_network = ChainNetwork::new(&cli.chain, &cli.network);

	info!("Using {} at {}", chain_network, config.url_prefix);

	let http = HttpTransportClient::new(&config.http_client_config())?;
	let provider = BlockProvider::new(
		Arc::new(http),
		Arc::new(ApiEndpointResolver::from_config(&config)),
		Arc::new(TracingNotifier),
		&config,
	);

	match cli.command {
		Command::Tip => {
			let tip = provider
				.get_current_height(&chain_network)
				.await
				.await
				.map_err(|e| anyhow::anyhow!("Failed to fetch tip: {}", e))?;
			print_json(&tip)
		}
		Command::List { count } => print_json(&provider.get_blocks(&chain_network, count).await),
		Command::Page { since, count } => {
			let blocks = provider
				.page_blocks(since, count, &chain_network)
				.await
				.context("Failed to page blocks")?;
			print_json(&blocks)
		}
		Command::Block { hash } => {
			let block = provider
				.get_block(&hash, &chain_network)
				.await
				.context("Failed to fetch block")?;
			print_json(&block)
		}
		Command::Coins { hash, limit, page } => {
			let coins = provider
				.get_coins_for_block_hash(&hash, &chain_network, limit, page)
				.await
				.context("Failed to fetch coins")?;
			print_json(&coins)
		}
	}
}

#[tokio::main]
async fn main() {
	let cli = Cli::parse();
	cli.apply_to_env();

	setup_logging().unwrap_or_else(|e| {
		eprintln!("Failed to setup logging: {}", e);
	});

	if let Err(e) = run(cli).await {
		error!("{:#}", e);
		std::process::exit(1);
	}
}
