//! Constants shared across the crate.

/// Default base of the indexing API
pub const DEFAULT_API_URL_PREFIX: &str = "https://api.bitcore.io/api";

/// Default location of the API configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/api.json";

/// Environment variable overriding the configured URL prefix
pub const API_URL_PREFIX_ENV: &str = "BLOCKS_API_URL_PREFIX";

/// Chains served with account-model (EVM) block records
pub const ACCOUNT_MODEL_CHAINS: [&str; 5] = ["ETH", "MATIC", "ARB", "BASE", "OP"];

/// Number of blocks requested by list and page calls when no count is given
pub const DEFAULT_BLOCK_COUNT: u32 = 10;

/// Compact-encoded genesis target used as the difficulty numerator
pub const GENESIS_COMPACT_BITS: u32 = 0x1d00ffff;

/// Shown to the user when the latest blocks cannot be loaded
pub const LATEST_BLOCKS_ERROR_MESSAGE: &str =
	"An error occurred while getting the latest block information.";

/// How long the latest-blocks error notification stays visible
pub const LATEST_BLOCKS_ERROR_DURATION_MS: u64 = 4000;
