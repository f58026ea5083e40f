use flexdate::{NormalizeResultVerbose, Shape};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RED: &str = "\x1b[31m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(res: &NormalizeResultVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Normalizing: \"{}\"", res.input), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Dispatch ━━━", ansi::GRAY));
    println!("  {} {}", palette.dim("shape:"), palette.paint(shape_names(res.details.shape), ansi::BLUE));
    match res.details.rule {
        Some(rule) => println!("  {} {}", palette.dim("rule: "), palette.paint(rule, ansi::CYAN)),
        None => println!("  {} {}", palette.dim("rule: "), palette.dim("none (rejected before dispatch)")),
    }

    println!("\n{}", palette.paint("━━━ Result ━━━", ansi::GRAY));
    match &res.outcome {
        Ok(date) => println!("  {}", palette.bold(palette.paint(format!("✓ {date}"), ansi::GREEN))),
        Err(err) => {
            println!("  {} {}", palette.paint(format!("✗ {}", err.kind()), ansi::RED), palette.dim("│"));
            println!("    {}", palette.paint(err.to_string(), ansi::YELLOW));
        }
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!("  Total: {}", palette.paint(format!("{:?}", res.details.elapsed), ansi::GREEN));
    println!();
}

fn shape_names(shape: Shape) -> String {
    if shape.is_empty() {
        return "-".to_string();
    }
    shape.iter_names().map(|(name, _)| name.to_ascii_lowercase()).collect::<Vec<_>>().join(" | ")
}
