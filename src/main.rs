use std::env;
use std::io;
use std::process::ExitCode;

use sales_report::app;

fn main() -> ExitCode {
    let mut input = io::stdin().lock();
    let mut console = io::stdout().lock();
    ExitCode::from(app::run_with_args(env::args_os(), &mut input, &mut console))
}
