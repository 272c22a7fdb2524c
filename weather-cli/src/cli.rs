use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::Password;
use tracing::error;
use weather_core::{Config, Dashboard, DisplayOptions, ProxyClient, UnitSystem};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather dashboard for the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key used by the proxy server.
    Configure,

    /// Show current conditions, forecast and alerts for a city.
    Show {
        /// Town or city name.
        city: String,

        /// metric or imperial; defaults to the configured unit system.
        #[arg(long)]
        units: Option<UnitSystem>,

        /// Base URL of the weather proxy.
        #[arg(long)]
        proxy: Option<String>,

        /// After rendering, flip the unit system and query again.
        #[arg(long)]
        toggle: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load()?;

        match self.command {
            Command::Configure => {
                let api_key = Password::new("OpenWeather API key:")
                    .without_confirmation()
                    .prompt()
                    .context("Failed to read API key")?;

                config.set_api_key(api_key);
                config.save()?;
                println!("Saved configuration to {}", Config::config_file_path()?.display());
            }
            Command::Show { city, units, proxy, toggle } => {
                let proxy_url = proxy.unwrap_or_else(|| config.client.proxy_url.clone());
                let units = units.unwrap_or(config.client.units);
                let dashboard = Dashboard::new(
                    ProxyClient::new(proxy_url),
                    DisplayOptions::from(config.display.clone()),
                );

                render(&dashboard, &city, units).await?;
                if toggle {
                    println!();
                    render(&dashboard, &city, units.toggled()).await?;
                }
            }
        }

        Ok(())
    }
}

async fn render(dashboard: &Dashboard, city: &str, units: UnitSystem) -> anyhow::Result<()> {
    match dashboard.show(city, units).await {
        Ok(model) => {
            println!("{model}");
            Ok(())
        }
        Err(e) => {
            // The user only sees the generic message; the cause stays in the log.
            error!("{e}");
            Err(anyhow::anyhow!(e.user_message()))
        }
    }
}
