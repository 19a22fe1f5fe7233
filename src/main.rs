#[tokio::main]
async fn main() {
    let args = tithe::args::parse();
    let config = tithe::config::Config::from_args(&args);
    config.log.init();
    if let Err(err) = tithe::cli::main(args, config).await {
        log::error!("{:#}", err);
    }
}
