//! Entry point for the WASM application

pub fn main() {
    asd2csv_ui::start();
}
