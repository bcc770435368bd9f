use srt_lint::validate_document;

fn main() {
    println!("=== SRT Lint Demo ===");

    let documents = [
        (
            "well formed",
            "1\n00:00:01,000 --> 00:00:02,000\nHello\n\n2\n00:00:02,500 --> 00:00:04,000\nWorld\n\n",
        ),
        (
            "overlapping cues",
            "1\n00:00:05,000 --> 00:00:10,000\nA\n\n2\n00:00:08,000 --> 00:00:12,000\nB\n\n",
        ),
        (
            "dot delimiter and gap",
            "1\n00:00:01.000 --> 00:00:02.000\nA\n\n3\n00:00:03,000 --> 00:00:04,000\nB\n\n",
        ),
        ("missing text", "1\n00:00:01,000 --> 00:00:02,000\n\n"),
    ];

    for (name, content) in documents {
        println!("\n{}:", name);
        let report = validate_document(content);
        if report.is_clean() {
            println!("  no errors");
        }
        for diagnostic in &report {
            println!("  line {}: {} ({})", diagnostic.line, diagnostic.kind, diagnostic.kind.name());
        }
    }
}
