//! was-accept — acceptance-test helpers for IBM WebSphere provisioning

use clap::Parser;

use websphere_acceptance::cli::Cli;
use websphere_acceptance::domain::FailureKind;
use websphere_acceptance::infra::logging;
use websphere_acceptance::output::json;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let as_json = cli.json;

    match cli.run().await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            let kind = FailureKind::of(&e);
            let message = format!("{e:#}");
            match json::format_error(&message, kind) {
                Ok(obj) if as_json => println!("{obj}"),
                _ => eprintln!("Error: {message}"),
            }
            std::process::exit(kind.exit_code());
        }
    }
}
