use crate::pass::output::DEFAULT_FILE;
use crate::terminal::{box_bottom, box_line, box_line_center, box_opt, box_top};

pub fn banner() -> String {
    [
        box_top(""),
        box_line_center("Passforge - Advanced Password Generator"),
        box_line_center("[Esc] skips a question, [Ctrl+C] quits"),
        box_bottom(),
    ]
    .join("\n")
}

pub fn print_help() {
    let rows = [
        box_top("Passforge"),
        box_line_center("Password generator with per-class guarantees"),
        box_line(""),
        box_line("MODES:"),
        box_line("  1) Interactive: run without arguments (or with -i) and answer"),
        box_line("     the prompts. The password can be appended to a file."),
        box_line("  2) Client: pass flags (e.g. -l 20 -n 5) to print passwords"),
        box_line("     without prompts."),
        box_line(""),
        box_line("USAGE:"),
        box_line("  passforge [OPTIONS]"),
        box_line(""),
        box_line("OPTIONS:"),
        box_line(" Password:"),
        box_opt("  -l, --length <N>", "Characters per password (default: 12)"),
        box_opt("  -n, --number <N>", "How many passwords to generate (default: 1)"),
        box_opt("      --no-upper", "Leave out uppercase letters"),
        box_opt("      --no-lower", "Leave out lowercase letters"),
        box_opt("      --no-digits", "Leave out digits"),
        box_opt("      --no-special", "Leave out special characters"),
        box_opt(
            "  -x, --exclude-similar",
            "Never use look-alike characters: O 0 I l 1 |",
        ),
        box_line(" Output:"),
        box_opt(
            "  -o, --output [PATH]",
            &format!("Append passwords to PATH (default: {DEFAULT_FILE})"),
        ),
        box_opt("  -b, --board", "Copy passwords to the clipboard"),
        box_opt("  -q, --quiet", "Only print passwords; no strength or status"),
        box_line(" Other:"),
        box_opt("      --rate <TEXT>", "Rate the strength of TEXT and exit"),
        box_opt("  -i, --interactive", "Ask for settings; -o and -b pick the save target"),
        box_opt("  -h, --help", "Show this help"),
        box_opt("  -v, --version", "Show version"),
        box_line(""),
        box_line("Logging goes to stderr; set RUST_LOG=debug for details."),
        box_bottom(),
    ];
    println!("{}", rows.join("\n"));
}
