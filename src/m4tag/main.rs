use clap::Parser;
use colored::*;
use m4tag::api::TagsApi;
use m4tag::apply::{CmdMessage, MessageLevel};
use m4tag::error::Result;
use m4tag::store::fs::FileStore;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut api = TagsApi::new(FileStore::new());
    let request = api.build_request(cli.modifications())?;
    let report = api.run(&request, cli.remove.as_deref(), &cli.files)?;
    print_messages(&report.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
        }
    }
}
