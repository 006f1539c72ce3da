use std::io;
use std::process::exit;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let code = holdem_cli::run(args, &mut io::stdout(), &mut io::stderr());
    exit(code);
}
