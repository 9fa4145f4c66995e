use std::process::exit;

fn main() {
    dtspatch::init_tracing();
    let args: Vec<String> = std::env::args().collect();
    exit(dtspatch::run_cli(args));
}
