use std::{path::PathBuf, process, time::Instant};

use clap::Parser as ClapParser;
use frontend::{
    arena::{Arena, DEFAULT_CAPACITY},
    display_error,
    errors::errors::Error,
    lexer::{lexer::Lexer, tokens::TokenKind},
    parser::parser::Parser,
    printer::print_program,
};

/// Parse a source file and print its syntax tree.
#[derive(ClapParser, Debug)]
#[command(version)]
struct Args {
    /// Source file to parse
    file: PathBuf,

    /// Arena capacity in bytes
    #[arg(long, env = "FRONTEND_ARENA_CAPACITY", default_value_t = DEFAULT_CAPACITY)]
    arena_capacity: usize,

    /// Print the token stream instead of the tree
    #[arg(long)]
    tokens: bool,
}

fn main() {
    env_logger::init();

    // clap reports usage errors itself and exits with status 2
    let args = Args::parse();
    let arena = Arena::with_capacity(args.arena_capacity);

    let lexer = match Lexer::from_file(&args.file, &arena) {
        Ok(lexer) => lexer,
        Err(error) => fail(&error, ""),
    };

    if args.tokens {
        dump_tokens(lexer);
        return;
    }

    let source = lexer.source().to_string();
    let start = Instant::now();

    let result = Parser::new(lexer, &arena).and_then(|mut parser| parser.parse());
    match result {
        Ok(functions) => {
            log::info!(
                "parsed {} in {:?} ({} of {} arena bytes)",
                args.file.display(),
                start.elapsed(),
                arena.used(),
                arena.capacity()
            );
            print!("{}", print_program(&functions));
        }
        Err(error) => fail(&error, &source),
    }
}

fn dump_tokens(mut lexer: Lexer) {
    loop {
        match lexer.next_token() {
            Ok(token) => {
                token.debug();
                if token.kind == TokenKind::FileEnd {
                    return;
                }
            }
            Err(error) => fail(&error, lexer.source()),
        }
    }
}

fn fail(error: &Error, source: &str) -> ! {
    log::debug!("aborting: {:?}", error);
    display_error(error, source);
    process::exit(-1)
}
