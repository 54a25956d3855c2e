//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = putnik_cli::run() {
        eprintln!("putnik: {err}");
        std::process::exit(1);
    }
}
