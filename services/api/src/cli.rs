use crate::demo::{run_demo, run_score, DemoArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use claimwatch::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "ClaimWatch",
    about = "Score insurance claims for fraud risk and serve the ClaimWatch API",
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
    /// Score a single claim and print the prediction
    Score(ScoreArgs),
    /// Walk through a low-risk and a high-risk claim end to end
    Demo(DemoArgs),
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
        Command::Score(args) => run_score(args).await,
        Command::Demo(args) => run_demo(args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claimwatch::fraud::IncidentType;

    #[test]
    fn no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["claimwatch"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn score_arguments_parse() {
        let cli = Cli::try_parse_from([
            "claimwatch",
            "score",
            "--policy-number",
            "POL-123456",
            "--claim-amount",
            "18000",
            "--incident-type",
            "single vehicle theft",
            "--location",
            "Urban",
            "--policy-age",
            "4",
            "--previous-claims",
            "1",
            "--jitter",
            "0",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Score(args)) => {
                assert_eq!(args.incident_type, IncidentType::SingleVehicleTheft);
                assert_eq!(args.claim_amount, 18_000.0);
                assert_eq!(args.jitter, Some(0.0));
                assert!(args.incident_date.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn score_rejects_unknown_incident_type() {
        let result = Cli::try_parse_from([
            "claimwatch",
            "score",
            "--policy-number",
            "POL-1",
            "--claim-amount",
            "100",
            "--incident-type",
            "Hail",
            "--location",
            "Urban",
            "--policy-age",
            "12",
            "--previous-claims",
            "0",
        ]);
        assert!(result.is_err());
    }
}
