use anstyle::{AnsiColor, Color, Style};
use clap::{builder::Styles, Parser};
use orst_sorts::SortArgs;

#[derive(Parser)]
#[command(author, version, about, long_about = None, styles = styles())] // Read from `Cargo.toml`
struct Cli {
    #[command(flatten)]
    args: SortArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.args.run()
}

fn styles() -> Styles {
    let fg = |color: AnsiColor| Style::new().fg_color(Some(Color::Ansi(color)));

    Styles::styled()
        .usage(fg(AnsiColor::Blue).bold().underline())
        .header(fg(AnsiColor::Blue).bold())
        .literal(fg(AnsiColor::Green))
        .invalid(fg(AnsiColor::Red).bold())
        .error(fg(AnsiColor::Red).bold())
        .valid(fg(AnsiColor::Cyan).bold().underline())
        .placeholder(fg(AnsiColor::Yellow))
}
