//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "dido-align", about = "DIDO corpus alignment tool.")]
/// Holds every command that is callable by the `dido-align` command.
pub enum DidoAlign {
    #[structopt(about = "Align a corpus file to DIDO, writing Turtle")]
    Align(Align),
    #[structopt(about = "Save the first dialogues of a JSON lines stream, one file each")]
    Group(Group),
}

#[derive(Debug, StructOpt)]
/// Align command and parameters.
///
/// ```sh
/// dido-align-align 0.1.0
/// Align a corpus file to DIDO, writing Turtle
///
/// USAGE:
///     dido-align align [FLAGS] [OPTIONS] <src> [dst]
///
/// FLAGS:
///     -h, --help           Prints help information
///         --skip-errors    log and skip records that can't be aligned
///     -V, --version        Prints version information
///
/// OPTIONS:
///         --delimiter <delimiter>    CSV field delimiter [default: ,]
///     -n, --first-n <first-n>        only align the first n dialogues
///     -f, --format <format>          source format [default: jsonl]  [possible values: jsonl, csv, daic]
///     -o, --ontology <ontology>      base ontology (Turtle) [default: ontology/DIDO.ttl]
///     -r, --recipe <recipe>          built-in recipe (ami, ami-dialogue, daic-woz) or JSON recipe file [default: ami]
///
/// ARGS:
///     <src>    source corpus file
///     <dst>    Turtle destination [default: aligned.ttl]
/// ```
pub struct Align {
    #[structopt(parse(from_os_str), help = "source corpus file")]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "Turtle destination",
        default_value = "aligned.ttl"
    )]
    pub dst: PathBuf,
    #[structopt(
        short = "f",
        long = "format",
        help = "source format",
        default_value = "jsonl",
        possible_values = &["jsonl", "csv", "daic"]
    )]
    pub format: String,
    #[structopt(
        short = "r",
        long = "recipe",
        help = "built-in recipe (ami, ami-dialogue, daic-woz) or JSON recipe file",
        default_value = "ami"
    )]
    pub recipe: String,
    #[structopt(
        parse(from_os_str),
        short = "o",
        long = "ontology",
        help = "base ontology (Turtle)",
        default_value = "ontology/DIDO.ttl"
    )]
    pub ontology: PathBuf,
    #[structopt(short = "n", long = "first-n", help = "only align the first n dialogues")]
    pub first_n: Option<usize>,
    #[structopt(long = "skip-errors", help = "log and skip records that can't be aligned")]
    pub skip_errors: bool,
    #[structopt(long = "delimiter", help = "CSV field delimiter", default_value = ",")]
    pub delimiter: char,
}

#[derive(Debug, StructOpt)]
/// Group command and parameters.
pub struct Group {
    #[structopt(parse(from_os_str), help = "source JSON lines stream")]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "destination folder",
        default_value = "dialogues_json"
    )]
    pub dst: PathBuf,
    #[structopt(short = "n", help = "number of dialogues to keep", default_value = "5")]
    pub n: usize,
    #[structopt(
        short = "k",
        long = "key",
        help = "field identifying a dialogue",
        default_value = "meeting_id"
    )]
    pub key_field: String,
}
