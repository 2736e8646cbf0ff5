use std::path::PathBuf;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Optional path to a starting board; defaults to ./init_config.toml
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    if let Err(e) = ion_puzzle::app::run(config_path.as_deref()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
