use clap::Parser;
use pagecheck_cli::{
    cli::Cli,
    commands,
    error::PcError,
    logging,
    output::{self, OutputFormat, ResultBuilder},
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let format: OutputFormat = cli.format.into();
    let command = cli.command.name();

    if let Err(err) = commands::dispatch(cli).await {
        handle_error(command, err, format);
        std::process::exit(1);
    }
}

fn handle_error(command: &'static str, err: PcError, format: OutputFormat) {
    let cmd_error = err.to_command_error();

    // Always print to stderr for humans
    output::print_error_stderr(&cmd_error);

    // Also emit the envelope to stdout with ok=false (for scripts and CI)
    if format != OutputFormat::Text {
        let result: output::CommandResult<()> = ResultBuilder::new(command)
            .error(cmd_error.code, &cmd_error.message)
            .build();
        output::print_result(&result, format);
    }
}
