fn main() {
    if let Err(e) = hostman::cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
