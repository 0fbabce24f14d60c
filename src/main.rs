fn main() {
    if let Err(e) = thoracic_lib::run() {
        eprintln!("thoracic: {e}");
        std::process::exit(1);
    }
}
