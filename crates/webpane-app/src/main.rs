mod app_state;
mod cli;

use std::path::Path;

use tracing_subscriber::EnvFilter;
use webpane_browser::NavigationRequest;
use webpane_config::WebpaneConfig;
use winit::event_loop::EventLoop;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("webpane panicked: {info}");
        default_hook(info);
    }));
}

fn load_config(args: &cli::Args) -> (WebpaneConfig, Option<String>) {
    let loaded = match args.config.as_deref() {
        Some(path) => webpane_config::load_config_from(Path::new(path)),
        None => webpane_config::load_config(),
    };
    match loaded {
        Ok(config) => (config, None),
        Err(e) => (WebpaneConfig::default(), Some(e.to_string())),
    }
}

fn main() {
    install_panic_hook();

    let args = cli::parse();

    // Config first: it supplies the default log level.
    let (mut config, config_error) = load_config(&args);

    let log_directive = args
        .log_level
        .as_deref()
        .unwrap_or(config.logging.level.directive());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "webpane=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Webpane v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    args.apply_toolbar_overrides(&mut config.toolbar);

    let input = args
        .url
        .clone()
        .unwrap_or_else(|| config.navigation.home_url.clone());
    let request = match NavigationRequest::parse(&input) {
        Ok(request) => request,
        Err(e) => {
            tracing::error!("Cannot open {input:?}: {e}");
            std::process::exit(2);
        }
    };
    tracing::info!(url = %request.url(), "Opening");

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::WebpaneApp::new(config, request, args.title);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
