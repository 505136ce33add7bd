use dotenvy::dotenv;
use lesson_status::{
    config::{logging, settings},
    core::{EntityKind, report},
    errors::{Error, Result},
};
use tracing::{error, info};

const USAGE: &str = "lesson-status [<kind> <status> <transition>]";

fn main() -> Result<()> {
    // 1. Load .env file (before config, it may set the config path)
    dotenv().ok();

    // 2. Load the application configuration
    let app_config = settings::load_app_configuration()?;

    // 3. Initialize tracing with the configured default filter
    logging::init_tracing(&app_config.log_filter);
    info!("Loaded configuration: {:?}", app_config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => {
            for kind in &app_config.kinds {
                print!("{}", report::render(&kind.table()));
            }
            Ok(())
        }
        [kind, status, transition] => evaluate(kind, status, transition)
            .inspect_err(|e| error!("{}", e)),
        _ => Err(Error::Usage(USAGE.to_string())),
    }
}

fn evaluate(kind: &str, status: &str, transition: &str) -> Result<()> {
    let kind: EntityKind = kind.parse()?;
    let result = kind.transition(status, transition)?;
    info!(%kind, status, transition, result, "Transition allowed");
    println!("{result}");
    Ok(())
}
