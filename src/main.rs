use clap::Parser;
use colored::*;
use std::path::{Path, PathBuf};
use todoz::api::{CmdMessage, MessageLevel};
use todoz::commands;
use todoz::error::Result;
use todoz::init::{initialize, AppContext};
use todoz::tui;

mod args;
use args::{get_version, Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut ctx = initialize(&cwd)?;

    match cli.command {
        Some(Commands::Add { text }) => handle_add(&mut ctx, &text),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Edit { index, text }) => handle_edit(&mut ctx, index, &text),
        Some(Commands::Toggle { index }) => handle_toggle(&mut ctx, index),
        Some(Commands::Delete { index }) => handle_delete(&mut ctx, index),
        Some(Commands::Undo) => handle_undo(&mut ctx),
        Some(Commands::Init) => handle_init(&cwd),
        Some(Commands::Status) => handle_status(&ctx),
        Some(Commands::Version) => {
            println!("todoz {}", get_version());
            Ok(())
        }
        None => tui::run(ctx.api),
    }
}

fn handle_add(ctx: &mut AppContext, text: &[String]) -> Result<()> {
    let result = ctx.api.add(text.join(" "))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list()?;
    if result.items.is_empty() {
        println!("No todos found");
        return Ok(());
    }
    for (i, item) in result.items.iter().enumerate() {
        let status = if item.done { "x" } else { " " };
        let line = format!("{}. [{}] {}", i + 1, status, item.text);
        if item.done {
            println!("{}", line.dimmed());
        } else {
            println!("{}", line);
        }
    }
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, index: usize, text: &[String]) -> Result<()> {
    let result = ctx.api.edit_at(index, text.join(" "))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_toggle(ctx: &mut AppContext, index: usize) -> Result<()> {
    let result = ctx.api.toggle_at(index)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, index: usize) -> Result<()> {
    let result = ctx.api.delete_at(index)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_undo(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.undo()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(cwd: &Path) -> Result<()> {
    let result = commands::init::run(cwd)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_status(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.status(&ctx.location)?;
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
