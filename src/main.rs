use std::net::SocketAddr;
use std::process;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};
use yansi::Paint;

use telescopes::api::{self, HttpTransport, PricingClient, PricingError};
use telescopes::config::{self, Settings, DEFAULT_HOST, DEFAULT_PORT};
use telescopes::models::AppState;
use telescopes::routes::build_router;
use telescopes::services::ProductsView;
use telescopes::shell::{terminal, Shell};

fn load_settings(env_file: Option<&str>) -> Settings {
    config::load_env_file(env_file);
    Settings::from_env()
}

fn build_transport(settings: &Settings) -> Arc<HttpTransport> {
    match HttpTransport::new(settings.timeout) {
        Ok(t) => Arc::new(t),
        Err(e) => {
            tracing::error!(%e, "Failed to create HTTP client");
            eprintln!("{}: {}", Paint::new("Failed to create HTTP client").red(), e);
            process::exit(1);
        }
    }
}

fn resolve_provider(settings: &Settings, provider: Option<String>) -> String {
    provider
        .map(|p| p.trim().to_lowercase())
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| settings.provider.clone())
}

fn build_client(settings: &Settings) -> PricingClient {
    PricingClient::new(build_transport(settings), settings.api_base_url.clone())
}

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn exit_with(e: &PricingError) -> ! {
    eprintln!("{}", Paint::new(e.user_message()).red());
    if let PricingError::UnknownRegion { provider, .. } = e {
        eprintln!(
            "{}",
            Paint::new(format!("Run `telescopes regions --provider {}` to list valid regions.", provider)).yellow()
        );
    }
    process::exit(1);
}

async fn start_server(settings: Settings, host: &str, port: u16) {
    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", Paint::new("Invalid host/port format").red(), e);
            process::exit(1);
        }
    };
    let state = AppState::new(settings.clone(), build_transport(&settings));
    let app = build_router(state);
    tracing::info!(%addr, api = %settings.api_base_url, "Starting Telescopes web shell");
    println!(
        "{} {}",
        Paint::new("Web server running on").green(),
        Paint::new(format!("http://{}", addr)).cyan()
    );
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!(
                "{}: {}\n{}",
                Paint::new(format!("Failed to bind to {}", addr)).red(),
                e,
                Paint::new("Stop the process using this port, or pass a different --port value.").yellow()
            );
            process::exit(1);
        }
    }
}

#[derive(Parser)]
#[command(
    name = "telescopes",
    author,
    version,
    about = "Browse cloud instance-type pricing",
    long_about = r#"Telescopes: compare on-demand and spot prices of cloud instance types.

Prices come from a pricing API (PRICING_API_BASE_URL). Pick a provider and region,
then narrow the table with a filter.

Examples:
  1) Show the default provider's first region:
      telescopes products
  2) Filter a specific region:
      telescopes products --provider ec2 --region eu-west-1 --filter m5
  3) Serve the web page:
      telescopes serve --port 8080
"#,
    after_help = "Use `telescopes <subcommand> --help` to get subcommand specific options."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Disable request/response logging
    #[arg(long, global = true)]
    silent: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
    /// Print the pricing table for a provider region
    #[command(long_about = "Load the provider's regions, select --region (or the first one) and print its instance types. --filter keeps rows where any column contains the text, ignoring case.")]
    Products {
        /// Cloud provider (defaults to PRICING_PROVIDER or ec2)
        #[arg(long)]
        provider: Option<String>,
        /// Region id; the provider's first region when omitted
        #[arg(long)]
        region: Option<String>,
        /// Case-insensitive substring filter
        #[arg(long, short = 'f')]
        filter: Option<String>,
        /// Print rows as JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
    /// List the regions of a provider
    Regions {
        #[arg(long)]
        provider: Option<String>,
        #[arg(long)]
        env_file: Option<String>,
    },
    /// Validate configuration and API connectivity
    #[command(long_about = "Check that PRICING_API_BASE_URL is set and that the regions endpoint answers for the default provider.")]
    CheckConfig { env_file: Option<String> },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    if cli.silent {
        api::set_silent(true);
    }

    let Some(command) = cli.command else {
        start_server(load_settings(None), DEFAULT_HOST, DEFAULT_PORT).await;
        return;
    };

    match command {
        Commands::Serve { host, port, env_file } => {
            start_server(load_settings(env_file.as_deref()), &host, port).await;
        }
        Commands::Products { provider, region, filter, json, env_file } => {
            let settings = load_settings(env_file.as_deref());
            if json {
                api::set_silent(true);
            }
            let mut view = ProductsView::new(build_client(&settings), resolve_provider(&settings, provider));
            let pb = (cli.silent && !json)
                .then(|| spinner(format!("Loading {} pricing...", view.provider())));
            let result = view.load(region.as_deref()).await;
            if let Some(pb) = pb {
                pb.finish_and_clear();
            }
            if let Err(e) = result {
                exit_with(&e);
            }
            view.set_filter(filter.as_deref().unwrap_or_default());

            if json {
                match serde_json::to_string_pretty(&view.visible_rows()) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        eprintln!("{}: {}", Paint::new("Failed to serialize rows").red(), e);
                        process::exit(1);
                    }
                }
            } else {
                println!("{}", Paint::new(Shell::default().title).bold());
                terminal::print_products(&view);
            }
        }
        Commands::Regions { provider, env_file } => {
            let settings = load_settings(env_file.as_deref());
            let provider = resolve_provider(&settings, provider);
            match build_client(&settings).fetch_regions(&provider).await {
                Ok(regions) if regions.is_empty() => {
                    println!("{}", Paint::new(format!("No regions for provider {}", provider)).yellow());
                }
                Ok(regions) => {
                    let default = regions.first().map(|r| r.id.clone());
                    println!("\n{}", terminal::regions_table(&regions, default.as_deref()));
                    println!("{}\n", Paint::new("* selected by default").dim());
                }
                Err(e) => exit_with(&e),
            }
        }
        Commands::CheckConfig { env_file } => {
            let settings = load_settings(env_file.as_deref());
            if std::env::var("PRICING_API_BASE_URL").map(|v| v.trim().is_empty()).unwrap_or(true) {
                println!(
                    "{} {}",
                    Paint::new("PRICING_API_BASE_URL is not set; using").yellow(),
                    settings.api_base_url
                );
            }
            match build_client(&settings).fetch_regions(&settings.provider).await {
                Ok(regions) if !regions.is_empty() => {
                    println!(
                        "{}",
                        Paint::new(format!(
                            "Configuration looks valid ({} regions returned for {})",
                            regions.len(),
                            settings.provider
                        )).green()
                    );
                }
                Ok(_) => exit_with(&PricingError::EmptyRegionList { provider: settings.provider.clone() }),
                Err(e) => {
                    eprintln!("{}", Paint::new("Configuration appears invalid").red());
                    exit_with(&e);
                }
            }
        }
    }
}
