//! Entry point for the WASM application

pub fn main() {
    roast_frontend::start();
}
