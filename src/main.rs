use clap::Parser;
use question_bank::{logging, Browser, Config};

#[tokio::main]
async fn main() {
    let config = Config::parse();

    if let Err(e) = logging::init(&config.log_file) {
        eprintln!("Logging disabled: {}", e);
    }

    if let Err(e) = Browser::new(config).run().await {
        eprintln!("Error running question bank: {}", e);
        std::process::exit(1);
    }
}
