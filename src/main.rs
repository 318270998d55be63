fn main() {
    std::process::exit(greeter::run(std::env::args_os()));
}
