use std::io;
use std::process;

use eip::output::{print_body, report};
use eip::{Client, Config};

fn main() {
    env_logger::init();

    let client = Client::new(Config::default());
    let result = client
        .lookup()
        .and_then(|body| print_body(&mut io::stdout().lock(), &body));
    if let Err(e) = result {
        process::exit(report(&mut io::stderr().lock(), &e));
    }
}
