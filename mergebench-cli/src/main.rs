fn main() {
    if let Err(e) = mergebench_cli::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
