use clap::Parser;
use dfauto_reencode::{cli, config, converter, detector, error, scanner};
use cli::{Cli, Commands};
use config::BatchConfig;
use detector::ChardetDetector;
use error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert { input, output } => {
            println!("🔤 dfauto-reencode - batch conversion\n");

            // 1. Enumerate merged exports
            println!("[1/2] Scanning for merged files...");
            let config = BatchConfig::new(input, output);
            let candidates = scanner::enumerate_candidates(&config.input_dir)?;
            println!("✔ {} merged file(s) found\n", candidates.len());

            // 2. Detect, decode, substitute, write
            println!("[2/2] Converting to UTF-8...");
            let detector = ChardetDetector;
            let converted = converter::run_batch(&config, &detector, &candidates)?;
            println!(
                "✔ {} file(s) written to {}\n",
                converted,
                config.output_dir.display()
            );

            println!("✅ Done");
        }

        Commands::Detect { input } => {
            println!("🔎 dfauto-reencode - encoding report\n");

            let detector = ChardetDetector;
            let candidates = scanner::enumerate_candidates(&input)?;

            for file in &candidates {
                match detector::detect_encoding(&detector, &file.path)? {
                    Some(encoding) => println!("{}: {}", file.file_name, encoding.name()),
                    None => println!("{}: (undetected)", file.file_name),
                }
            }
        }
    }

    Ok(())
}
