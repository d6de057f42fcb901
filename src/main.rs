#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    react_test_app::run();
}
