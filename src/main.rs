fn main() {
    match pushgate::run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("pushgate: {}", e);
            std::process::exit(2);
        }
    }
}
