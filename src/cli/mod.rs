//! CLI command handling
//!
//! Dispatches CLI commands and formats output. The `run` command drives
//! the full pipeline (config, data resolution, page fill) against the
//! recording driver, so a suite author can see exactly which UI actions
//! a dataset produces without a browser.

use std::sync::Arc;

use colored::Colorize;

use crate::commands::{Commands, DataCommands};
use crate::common::{Config, Result};
use crate::data::{DataCache, TestDataResolver};
use crate::driver::MockDriver;
use crate::page::RegistrationPage;
use crate::report::TracingReporter;

/// Dispatch a CLI command
pub async fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Run {
            test_id,
            env,
            config_dir,
            data_dir,
            verbose,
        } => {
            let config = Config::load(&env, &config_dir)?;
            let resolver = TestDataResolver::new(data_dir)?;
            let mut cache = DataCache::new();
            let record = resolver.resolve(&mut cache, &test_id)?;

            println!(
                "\n{} {} ({})",
                "Running:".blue().bold(),
                test_id.white().bold(),
                config.environment
            );
            if verbose {
                if let Some(entry) = resolver.entry(&test_id) {
                    println!(
                        "  {} {} / {}",
                        "Data:".cyan(),
                        entry.data_file.dimmed(),
                        entry.dataset.dimmed()
                    );
                }
                let mut keys: Vec<&String> = record.keys().collect();
                keys.sort_unstable();
                for key in keys {
                    println!("    {}", key.dimmed());
                }
            }

            let mut page = RegistrationPage::new(MockDriver::new(), &config)
                .with_reporter(Arc::new(TracingReporter));
            page.open_registration(&config.application.base_url).await?;
            page.fill_registration_form(&record).await?;

            let calls = page.into_driver().take_calls();
            println!("\n{}", "Actions:".cyan());
            for call in &calls {
                println!("  {} {}", "✓".green(), call.describe().dimmed());
            }
            println!(
                "\n{} {} driver actions, no errors\n",
                "✓".green().bold(),
                calls.len()
            );

            Ok(())
        }

        Commands::Data(data_cmd) => match data_cmd {
            DataCommands::List { data_dir } => {
                let resolver = TestDataResolver::new(data_dir)?;
                println!("{}", "Mapped test cases:".cyan());
                for test_id in resolver.test_ids() {
                    match resolver.entry(test_id) {
                        Some(entry) => {
                            let description = entry.description.as_deref().unwrap_or("");
                            println!(
                                "  {} ({} / {}) {}",
                                test_id.white().bold(),
                                entry.data_file,
                                entry.dataset,
                                description.dimmed()
                            );
                        }
                        None => println!("  {}", test_id),
                    }
                }
                Ok(())
            }

            DataCommands::Datasets { file, data_dir } => {
                let resolver = TestDataResolver::new(data_dir)?;
                let mut cache = DataCache::new();
                let datasets = resolver.datasets_in(&mut cache, &file)?;
                println!("{} {}", "Datasets in".cyan(), file.white().bold());
                for name in datasets {
                    println!("  {name}");
                }
                Ok(())
            }

            DataCommands::Validate { test_id, data_dir } => {
                let resolver = TestDataResolver::new(data_dir)?;
                let mut cache = DataCache::new();
                let record = resolver.resolve(&mut cache, &test_id)?;
                println!(
                    "{} {} resolves to {} fields",
                    "✓".green(),
                    test_id.white().bold(),
                    record.len()
                );
                Ok(())
            }
        },

        Commands::Config { env, config_dir } => {
            let config = Config::load(&env, &config_dir)?;
            let rendered =
                toml::to_string_pretty(&config).map_err(|e| crate::Error::ConfigParse {
                    path: format!("<effective {env} config>"),
                    error: e.to_string(),
                })?;
            println!("{rendered}");
            Ok(())
        }
    }
}
