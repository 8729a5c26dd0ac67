use std::process::exit;

use anyhow::Result;
use clap::Parser;
use console::{Emoji, Style};

use stackgen::{GeneratedProject, Generator, Opts};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    opts: Opts,
}

fn main() {
    let cli = Cli::parse();
    match run(cli.opts) {
        Ok(project) => {
            let green = Style::new().green();
            println!(
                "{} {}",
                Emoji("✅", ""),
                green.apply_to(format!(
                    "Project {} of type {} created at {}",
                    project.name,
                    project.kind,
                    project.path.display()
                )),
            );
        }
        Err(err) => {
            let red = Style::new().red();
            eprintln!("{} {}", Emoji("❌", ""), red.apply_to(err));
            exit(1);
        }
    }
}

fn run(opts: Opts) -> Result<GeneratedProject> {
    let generator = Generator::from_env()?;
    Ok(generator.generate(&opts)?)
}
