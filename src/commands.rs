//! CLI command definitions
//!
//! Defines the clap commands for the test harness CLI.

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a mapped test case and dry-run it against the recording driver
    Run {
        /// Test id from the test mapping file
        test_id: String,

        /// Environment to load configuration for
        #[arg(long, env = "UITEST_ENV", default_value = "dev")]
        env: String,

        /// Directory holding the environment configuration files
        #[arg(long, default_value = "config")]
        config_dir: PathBuf,

        /// Directory holding test mapping and data files
        #[arg(long, default_value = "testdata")]
        data_dir: PathBuf,

        /// Print each dispatched driver action
        #[arg(long, short)]
        verbose: bool,
    },

    /// Inspect test mapping and data files
    #[command(subcommand)]
    Data(DataCommands),

    /// Show the effective merged configuration for an environment
    Config {
        /// Environment to load configuration for
        #[arg(long, env = "UITEST_ENV", default_value = "dev")]
        env: String,

        /// Directory holding the environment configuration files
        #[arg(long, default_value = "config")]
        config_dir: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum DataCommands {
    /// List all mapped test cases
    List {
        /// Directory holding test mapping and data files
        #[arg(long, default_value = "testdata")]
        data_dir: PathBuf,
    },

    /// List the datasets a data file contains
    Datasets {
        /// Data file name, relative to the data directory
        file: String,

        /// Directory holding test mapping and data files
        #[arg(long, default_value = "testdata")]
        data_dir: PathBuf,
    },

    /// Check that a test id resolves to readable data
    Validate {
        /// Test id from the test mapping file
        test_id: String,

        /// Directory holding test mapping and data files
        #[arg(long, default_value = "testdata")]
        data_dir: PathBuf,
    },
}
