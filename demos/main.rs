// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use plistline::context::{Context, FileContext, StreamContext};
use plistline::parse::{tokens, AtomWithPos};
use plistline::read::{read_with_context, write_all};
use plistline::value::List;
use clap::Parser as ClapParser;
use std::io::{stdin, stdout, BufWriter, Read};
use std::path::PathBuf;
use anyhow::{Result, bail};
use tracing_subscriber::EnvFilter;


#[derive(clap::Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Print each list in canonical form
    #[clap(long, value_parser)]
    print: bool,
    /// Print each atom with its type and position instead of whole
    /// lists
    #[clap(short, long, value_parser)]
    tokens: bool,
    /// Print the value following this keyword (without the ':'), for
    /// each list; can be given multiple times
    #[clap(short, long, value_parser)]
    lookup: Vec<String>,
    /// Path to the input file (default: stdin)
    #[clap(value_parser)]
    input_path: Option<PathBuf>,
}

fn print_tokens(input: &str) -> Result<()> {
    for (i, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        for r in tokens(line) {
            let AtomWithPos(atom, pos) = r?;
            println!("{} {:?}", pos.below(i as u32), atom);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut input = String::new();
    let container = || -> Box<dyn Context> {
        match &args.input_path {
            Some(path) => Box::new(FileContext { path: path.clone() }),
            None => Box::new(StreamContext::new("stdin")),
        }
    };
    match &args.input_path {
        Some(path) => std::fs::File::open(path)?.read_to_string(&mut input)?,
        None => stdin().read_to_string(&mut input)?,
    };

    if args.tokens {
        return print_tokens(&input);
    }

    let lists: Vec<List> = read_with_context(input.as_bytes(), container)?;
    if args.print {
        write_all(BufWriter::new(stdout()), &lists)?;
    }
    for key in &args.lookup {
        if key.starts_with(':') {
            bail!("give keywords without the leading ':', got {:?}", key)
        }
        for l in &lists {
            match l.lookup(key) {
                Some(v) => println!(":{} {}", key, v),
                None => println!(":{} not found in {}", key, l),
            }
        }
    }
    println!(";; count_lists = {}", lists.len());
    Ok(())
}
