use crate::evaluate::{run_catalog, run_evaluate, run_rules, EvaluateArgs};
use crate::server;
use cabinet_offer::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Arbre d'offre",
    about = "Qualify an accounting-firm client and build a priced service proposal",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Evaluate a client questionnaire and optionally export the proposal
    Evaluate(EvaluateArgs),
    /// Print the pricing catalog
    Catalog,
    /// Print the key decision rules
    Rules,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Evaluate(args) => run_evaluate(args),
        Command::Catalog => {
            run_catalog();
            Ok(())
        }
        Command::Rules => {
            run_rules();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["arbre-offre"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_evaluate_flags() {
        let cli = Cli::try_parse_from([
            "arbre-offre",
            "evaluate",
            "--profile",
            "client.json",
            "--export",
            "--export-dir",
            "out",
            "--date",
            "2026-10-15",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Evaluate(args)) => {
                assert_eq!(args.profile.as_deref(), Some(std::path::Path::new("client.json")));
                assert!(args.export);
                assert_eq!(args.export_dir.as_deref(), Some(std::path::Path::new("out")));
                assert!(args.date.is_some());
            }
            other => panic!("expected evaluate command, got {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_date() {
        assert!(Cli::try_parse_from(["arbre-offre", "evaluate", "--date", "demain"]).is_err());
    }
}
