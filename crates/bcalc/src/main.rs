#![forbid(unsafe_code)]

fn main() {
    if let Err(error) = bcalc::run_from_env() {
        eprintln!("bcalc: {error}");
        std::process::exit(error.exit_code());
    }
}
