// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_djot_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with *strong*, _emphasis_, {=mark=} and `code`[^n].\n\n- Bullet point\n  - Nested item\n- [x] Done item\n\n| a | b |\n|---|--:|\n| 1 | 2 |\n\n> quoted [link](https://example.com \"T\")\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n[^n]: A note.\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_lists(depth: usize) -> String {
    let mut content = String::new();
    for level in 0..depth {
        content.push_str(&"  ".repeat(level));
        content.push_str(&format!("- item at level {level}\n"));
    }
    content
}

/// Inputs that stress delimiter matching and nesting caps.
#[allow(dead_code)]
pub fn pathological_inputs() -> Vec<(&'static str, String)> {
    vec![
        ("unclosed_strong", "*a ".repeat(5_000)),
        ("alternating_markers", "*_".repeat(5_000)),
        ("open_brackets", "[".repeat(10_000)),
        ("nested_quotes", ">".repeat(10_000)),
        ("nested_lists", generate_nested_lists(500)),
        ("backtick_runs", "`".repeat(1_000) + " x " + &"``".repeat(500)),
    ]
}
