//! Quill CLI
//!
//! Usage:
//!   quill selector --element a --attr 'href$=".png"' --pseudo-class focus
//!   quill selector --id main --class container --json
//!   quill area 10 20
//!   quill decode '{"width":10,"height":20}'

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use owo_colors::OwoColorize;
use quill_css::SelectorBuilder;
use quill_objects::{Rectangle, Shape, decode_as};

#[derive(Debug, Parser)]
#[command(name = "quill", version, about = "Build CSS selectors and work with JSON shapes")]
struct Cli {
    /// Do not print builder warnings to stderr
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render a compound selector from its parts
    Selector(SelectorArgs),
    /// Print the area of a rectangle
    Area {
        /// Rectangle width
        width: f64,
        /// Rectangle height
        height: f64,
    },
    /// Decode a rectangle from JSON and print its area
    Decode {
        /// JSON object with `width` and `height`
        json: String,
    },
}

#[derive(Debug, Args)]
struct SelectorArgs {
    /// Type selector
    #[arg(long)]
    element: Option<String>,
    /// Id selector (without `#`)
    #[arg(long)]
    id: Option<String>,
    /// Class selector (without `.`), repeatable
    #[arg(long = "class")]
    classes: Vec<String>,
    /// Attribute selector body (without brackets), repeatable
    #[arg(long = "attr")]
    attributes: Vec<String>,
    /// Pseudo-class (without `:`), repeatable
    #[arg(long = "pseudo-class")]
    pseudo_classes: Vec<String>,
    /// Pseudo-element (without `::`)
    #[arg(long)]
    pseudo_element: Option<String>,
    /// Print the selector and its specificity as JSON
    #[arg(long)]
    json: bool,
}

fn build_selector(args: &SelectorArgs) -> quill_css::Result<SelectorBuilder> {
    let mut selector = SelectorBuilder::new();
    if let Some(element) = &args.element {
        selector = selector.element(element.as_str())?;
    }
    if let Some(id) = &args.id {
        selector = selector.id(id.as_str())?;
    }
    for class in &args.classes {
        selector = selector.class(class.as_str())?;
    }
    for attribute in &args.attributes {
        selector = selector.attr(attribute.as_str())?;
    }
    for pseudo_class in &args.pseudo_classes {
        selector = selector.pseudo_class(pseudo_class.as_str())?;
    }
    if let Some(pseudo_element) = &args.pseudo_element {
        selector = selector.pseudo_element(pseudo_element.as_str())?;
    }
    Ok(selector)
}

fn area_line(width: f64, height: f64) -> String {
    Rectangle::new(width, height).area().to_string()
}

fn decode_line(json: &str) -> Result<String> {
    let rectangle: Rectangle = decode_as(json).context("could not decode rectangle from JSON")?;
    Ok(format!(
        "{} x {} = {}",
        rectangle.width,
        rectangle.height,
        rectangle.area()
    ))
}

fn run(cli: Cli) -> Result<()> {
    quill_common::set_enabled(!cli.quiet);

    match cli.command {
        Command::Selector(args) => {
            let selector = build_selector(&args).context("could not build selector")?;
            if args.json {
                let summary = serde_json::json!({
                    "selector": selector.stringify(),
                    "specificity": selector.specificity(),
                });
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{selector}");
            }
        }
        Command::Area { width, height } => println!("{}", area_line(width, height)),
        Command::Decode { json } => println!("{}", decode_line(&json)?),
    }

    Ok(())
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
