mod config;
mod dispatcher;
mod external;
mod model;
mod operators;
mod parser;
mod store;
mod suggestions;

use anyhow::Result;
use clap::Parser;
use log::{error, info};
use std::process::ExitCode;
use crate::config::load_config;
use crate::dispatcher::{DispatchError, Dispatcher, Outcome};
use crate::external::{dmenu::Dmenu, xprop::XProp, CollaboratorError};
use crate::model::RequestKind;
use crate::store::Store;

/// Called by surf with `<request> <property> <window id>`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// One of _SURF_BMARK, _SURF_URI_RAW, _SURF_URI, _SURF_URI_BMARK
    request: String,
    /// Property surf expects to be set; the target is always taken from the config
    #[allow(dead_code)]
    property: String,
    /// X11 id of the browser window
    window: String,
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let args = Args::parse();
    info!("Called with {:?}", args);

    let config = load_config()?;
    let store = Store::open(&config.database_path()?)?;

    let result = match RequestKind::parse(&args.request) {
        Some(kind) => {
            let menu = Dmenu::new(config.menu.clone(), args.window.as_str());
            let properties = XProp::new(config.properties.program.as_str(), args.window.as_str());
            Dispatcher {
                store: &store,
                menu: &menu,
                properties: &properties,
                config: &config,
            }
            .run(kind)
            .map(Some)
        }
        None => {
            error!("Invalid request kind: {}", args.request);
            Ok(None)
        }
    };

    // Closed on every path, before any exit status is decided
    if let Err(e) = store.close() {
        error!("Failed to close store: {}", e);
    }

    exit_status(result)
}

/// The dispatch result alone decides the exit status.
fn exit_status(result: Result<Option<Outcome>, DispatchError>) -> Result<ExitCode> {
    match result {
        Ok(outcome) => {
            info!("Done: {:?}", outcome);
            Ok(ExitCode::SUCCESS)
        }
        Err(DispatchError::Collaborator(CollaboratorError::SilentAbort)) => Ok(ExitCode::FAILURE),
        Err(e) => Err(e.into()),
    }
}
