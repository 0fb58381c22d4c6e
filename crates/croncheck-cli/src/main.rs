use clap::Parser;
use croncheck::{Cli, run};
use croncheck_core::Status;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version keep clap's native behavior; actual
            // usage errors must still honor the one-line/exit-code
            // contract the poller relies on.
            if !err.use_stderr() {
                err.exit();
            }
            eprint!("{}", err);
            println!("{} - invalid arguments (see --help)", Status::Unknown);
            std::process::exit(Status::Unknown.exit_code());
        }
    };

    let result = run(cli);
    println!("{} - {}", result.status, result.message);
    std::process::exit(result.status.exit_code());
}
