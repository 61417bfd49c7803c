use std::env;
use std::io;
use std::process::ExitCode;

use env_logger::Env;
use log::debug;

use recipe_quest::{ingredients_from_args, run, run_interactive, Outcome, QuestError, Settings};

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    match quest() {
        Ok(outcome) => {
            debug!("{:?}", outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn quest() -> Result<Outcome, QuestError> {
    let settings = Settings::load()?;
    let stdout = io::stdout();
    let mut output = stdout.lock();

    // Usage: recipe-quest [INGREDIENT...]
    // Each argument is one ingredient; with none, the ingredients are prompted for.
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        let stdin = io::stdin();
        run_interactive(&settings, &mut stdin.lock(), &mut output)
    } else {
        let stocked = ingredients_from_args(&args)?;
        run(&settings, &stocked, &mut output)
    }
}
