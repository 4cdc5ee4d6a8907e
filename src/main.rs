fn main() {
    if let Err(e) = qr_rebuilder::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
