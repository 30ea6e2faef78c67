use std::env;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use layout::{layout_document, page_stats};
use markup::{apply_styles, build, style_registry, tokenize};
use render::{write_dump, write_script};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const VIEWPORT_WIDTH: i32 = 800;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let [_, input, rest @ ..] = args.as_slice() else {
        eprintln!("usage: marklight <input.html> [dump.txt] [script.txt]");
        return ExitCode::FAILURE;
    };
    let dump_path = rest.first().map(String::as_str).unwrap_or("dump.txt");
    let script_path = rest.get(1).map(String::as_str).unwrap_or("render.txt");

    let source = match fs::read_to_string(input) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("cannot read {input}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let tokens = tokenize(&source);
    log::info!("tokenized {} bytes into {} tokens", source.len(), tokens.len());

    let mut doc = build(&tokens);
    apply_styles(&mut doc, &style_registry());
    let indexes = layout_document(&mut doc, VIEWPORT_WIDTH);
    log::info!("{}", page_stats(&doc, &indexes));

    if let Err(err) = write_dump(&doc, Path::new(dump_path)) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }
    if let Err(err) = write_script(&doc, Path::new(script_path)) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
