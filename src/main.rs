fn main() {
    if let Err(error) = gijiroku::run() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}
