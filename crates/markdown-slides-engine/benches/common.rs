// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **some** content and a [link](https://example.com).\n\n- Bullet point\n  - Nested item\n- Another item\n\n| a | b |\n|---|---|\n| 1 | 2 |\n\n> Quoted text\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n---\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_deck(slides: usize) -> String {
    let mut content = String::new();

    for slide in 0..slides {
        content.push_str(&format!("## Slide {}\n\n", slide));
        match slide % 4 {
            0 => {
                for i in 0..3 {
                    content.push_str(&format!("- **Point {}**: short description\n", i));
                }
            }
            1 => {
                for i in 1..=5 {
                    content.push_str(&format!("{}. Step {} of the plan\n", i, i));
                }
            }
            2 => content.push_str("> A memorable quote.\n>\n> — Someone\n"),
            _ => content.push_str("| Col | Value |\n|:----|------:|\n| x | 1 |\n| y | 2 |\n"),
        }
        content.push_str("\n---\n\n");
    }

    content
}
