//! Forwards the chat settings from `.env` or the build environment into the
//! wasm binary, which has no process environment at runtime.

const FORWARDED: [&str; 5] = [
    "GEMINI_API_KEY",
    "GEMINI_API_BASE_URL",
    "TOURMALINE_FAST_MODEL",
    "TOURMALINE_REASONING_MODEL",
    "TOURMALINE_THINKING_BUDGET",
];

fn main() {
    dotenvy::from_filename("../.env").ok();
    dotenvy::dotenv().ok();

    println!("cargo:rerun-if-changed=../.env");
    for name in FORWARDED {
        println!("cargo:rerun-if-env-changed={name}");
        if let Ok(value) = std::env::var(name) {
            println!("cargo:rustc-env={name}={value}");
        }
    }
}
