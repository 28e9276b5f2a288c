//! Clipboard round-trip demo.

fn main() {
    println!("Reading clipboard...");
    let types = plumekit_clipboard::get_types();
    if types.is_empty() {
        println!("Clipboard is empty or no backend is available.");
    } else {
        println!("Available types: {types:?}");
    }

    let text = plumekit_clipboard::paste();
    if text.is_empty() {
        println!("Clipboard does not contain text.");
    } else {
        println!("Clipboard text content:\n{text}");
    }

    plumekit_clipboard::copy("Hello from plumekit-clipboard");
    println!("Copied a greeting; paste now returns: {}", plumekit_clipboard::paste());
}
