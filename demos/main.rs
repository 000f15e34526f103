// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use anyhow::{bail, Result};
use clap::Parser as ClapParser;
use sexptree::pos::{chars_with_pos, Pos};
use sexptree::read::read_file;
use sexptree::settings::{Settings, FUF_FILTER, NO_FILTER};
use sexptree::strip::strip_comments;
use sexptree::tokenize::{tokenize, Token, TokenWithPos};
use sexptree::value::Parenkind;
use std::path::PathBuf;

// None once nesting outgrows the pad buffer
fn indent(depth: usize) -> Option<&'static str> {
    "                                                                  ".get(0..depth)
}

#[derive(clap::Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Stream the raw tokens instead of building a tree
    #[clap(short, long, value_parser)]
    tokens: bool,
    /// Show token positions (only with --tokens)
    #[clap(long, value_parser)]
    pos: bool,
    /// Keep trace/demo sub-expressions instead of filtering them
    #[clap(short, long, value_parser)]
    no_filter: bool,
    /// Path to the input file
    #[clap(value_parser, required(true))]
    input_path: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let settings = Settings {
        filter: if args.no_filter { &NO_FILTER } else { &FUF_FILTER },
    };

    if args.tokens {

        // Read through the token stream of the stripped file
        // contents, do some bracket bookkeeping and print each token
        // indented by nesting level.

        let text = std::fs::read_to_string(&args.input_path)?;
        let stripped = strip_comments(&text);
        let ts = tokenize(chars_with_pos(&stripped));
        let mut toplevel_exprs = 0;
        let mut lists_seen = 0;
        let mut open_lists: Vec<(Parenkind, Pos)> = Vec::new();
        for TokenWithPos(token, pos) in ts {
            let depth;
            match token {
                Token::Open(kind) => {
                    lists_seen += 1;
                    if open_lists.is_empty() {
                        toplevel_exprs += 1;
                    }
                    depth = open_lists.len();
                    open_lists.push((kind, pos));
                }
                Token::Close(kind) => match open_lists.pop() {
                    Some((opened, openpos)) => {
                        if kind != opened {
                            bail!("grammar {:?}: list opened with '{}' {} \
                                   is closed with '{}' {}",
                                  args.input_path,
                                  opened.opening(),
                                  openpos,
                                  kind.closing(),
                                  pos)
                        }
                        depth = open_lists.len();
                    }
                    None => bail!("grammar {:?}: stray '{}' {}",
                                  args.input_path, kind.closing(), pos),
                },
                _ => {
                    depth = open_lists.len();
                }
            }
            match indent(depth) {
                Some(pad) => {
                    if args.pos {
                        println!("{pad}{pos} {token}");
                    } else {
                        println!("{pad}{token}");
                    }
                }
                None => bail!("grammar {:?}: nesting outgrows the indent \
                               buffer {}",
                              args.input_path, pos),
            }
        }
        println!(";; {toplevel_exprs} top-level expression(s), \
                  {lists_seen} list(s) in total");

    } else {

        // Load the whole file as one implicit outer list and print
        // the tree back out, one top-level expression per line.

        let outer = read_file(&args.input_path, &settings)?;
        match outer {
            sexptree::value::Element::List(node) => {
                for child in &node.children {
                    println!("{child}");
                }
            }
            atom => println!("{atom}"),
        }
    }
    Ok(())
}
