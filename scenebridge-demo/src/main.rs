mod cli;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let level = if args.iter().any(|arg| arg == "--verbose") {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    // First non-flag argument is an optional descriptor file
    let descriptor_path = args.iter().skip(1).find(|arg| !arg.starts_with("--"));
    cli::run(descriptor_path.map(String::as_str))
}
