use std::collections::BTreeSet;

/// Print the collected coordinates to stdout, one per line.
///
/// No brackets, no quotes: the output is meant to be pipeable into other
/// tooling.
pub fn render(coordinates: &BTreeSet<String>) {
    let lines: Vec<&str> = coordinates.iter().map(String::as_str).collect();
    println!("{}", lines.join("\n"));
}
