//! Build script resolving the program name baked into the binary.

const NAME_VAR: &str = "GREETER_PROGRAM_NAME";
const DEFAULT_NAME: &str = "greeter";

fn main() {
    println!("cargo:rerun-if-env-changed={NAME_VAR}");

    let name = std::env::var(NAME_VAR)
        .ok()
        .map(|name| name.trim().to_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_NAME.to_owned());

    println!("cargo:rustc-env={NAME_VAR}={name}");
}
