use bambam_isomap::app::IsomapCliArguments;
use clap::Parser;

fn main() {
    env_logger::init();
    log::info!("starting bambam-isomap at {}", chrono::Local::now().to_rfc3339());
    let args = IsomapCliArguments::parse();
    match args.op.run(args.config_file.as_deref()) {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running bambam-isomap: {e}");
            std::process::exit(1);
        }
    }
}
