use clap::Parser;
use log::info;
use simple_logger::init_with_level;
use tfpeaks::{Args, tfpeaks};

fn main() {
    let args = Args::parse();

    init_with_level(args.level).unwrap_or_else(|e| panic!("{}", e));
    info!("Starting tfpeaks with args: {}", args);

    let outdir = args.outdir.clone();
    match tfpeaks(args) {
        Ok(n) => println!("{} FASTA files available in {}", n, outdir.display()),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
