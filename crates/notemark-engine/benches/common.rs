// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_note(sections: usize) -> String {
    let mut content = String::new();
    for section in 0..sections {
        content.push_str(&format!("# Section {section}\n\n"));
        content.push_str("## Plan\n\nSome **bold** text, some *italic*, a `code` span and [a link](#plan).\n\n");
        for i in 1..=5 {
            content.push_str(&format!("{i}. step {i}\n"));
            content.push_str(&format!("  1. detail {i}\n"));
        }
        content.push_str("\n- [ ] open task\n- [x] done task\n\n");
        content.push_str("|Name|Value|Notes|\n|---|---:|---|\n");
        for row in 0..4 {
            content.push_str(&format!("|row {row}|{}|~~old~~ new|\n", row * 7));
        }
        content.push_str("\n```rust\nfn main() {\n    println!(\"hi\");\n}\n```\n\n> quoted line\n\n---\n\n");
    }
    content
}
