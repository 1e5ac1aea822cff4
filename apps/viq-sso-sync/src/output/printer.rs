//! Terminal output helpers for consistent CLI formatting

/// Check if color output is enabled
fn use_color() -> bool {
    std::env::var("NO_COLOR").is_err()
}

fn paint(code: &str, message: &str) -> String {
    if use_color() {
        format!("\x1b[{code}m{message}\x1b[0m")
    } else {
        message.to_string()
    }
}

/// Print a success message (green checkmark)
pub fn print_success(message: &str) {
    if use_color() {
        println!("\x1b[32m✓\x1b[0m {}", message);
    } else {
        println!("OK: {}", message);
    }
}

/// Print a per-item failure (red), keeping the run going
pub fn print_error(message: &str) {
    if use_color() {
        println!("\x1b[31m✗\x1b[0m {}", message);
    } else {
        println!("FAILED: {}", message);
    }
}

/// Print an info message (blue)
pub fn print_info(message: &str) {
    if use_color() {
        println!("\x1b[34mℹ\x1b[0m {}", message);
    } else {
        println!("Info: {}", message);
    }
}

/// Print a highlighted block of text (orange), e.g. sheet contents
pub fn print_notice(message: &str) {
    println!("{}", paint("38;5;94", message));
}

/// Print a pagination progress line (purple)
pub fn print_progress(message: &str) {
    println!("{}", paint("38;5;54", message));
}

/// Print a header with decorative border
pub fn print_header(title: &str) {
    let border = "═".repeat(59);
    println!();
    println!("{}", border);
    println!("{:^59}", title);
    println!("{}", border);
    println!();
}

/// Print a key-value pair with consistent formatting
pub fn print_key_value(key: &str, value: &str) {
    if use_color() {
        println!("  \x1b[1m{}:\x1b[0m {}", key, value);
    } else {
        println!("  {}: {}", key, value);
    }
}
