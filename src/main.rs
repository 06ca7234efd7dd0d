#[cfg(not(target_arch = "wasm32"))]
mod cli;

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing(verbose: bool) {
    let default_filter = match verbose {
        true => "debug",
        false => "warn",
    };
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;
    use dioxus::logger::tracing::error;

    let args = cli::Cli::parse();
    init_tracing(args.verbose);

    if let Err(err) = cli::run(args) {
        error!("{err}");
        std::process::exit(1);
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
fn main() {
    use dioxus::logger::tracing::debug;

    dioxus::logger::initialize_default();
    debug!("Starting nav bar");
    companion_nav::page::web::install();
}

#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
fn main() {
    use dioxus::logger::tracing::warn;

    warn!("Built for wasm32 without the `web` feature, nav bar not installed.");
}
