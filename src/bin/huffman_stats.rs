use std::fs;

use clap::Parser;
use serde::Serialize;
use huffman_rust::huffman::{FrequencyTable, HuffmanTree};

#[derive(Parser, Debug)]
#[command(about = "Report the code lengths and expected size of a Huffman-compressed file without writing it")]
struct Args {
    /// The file to analyze
    source_name: String,
    /// Print the report as JSON
    #[arg(short, long = "json", default_value_t = false)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    symbols: u64,
    distinct: usize,
    raw_bits: u64,
    fixed_width_bits: u64,
    compressed_bits: u64,
    min_code_len: usize,
    max_code_len: usize,
}

fn main() {
    let args = Args::parse();

    let data = fs::read(&args.source_name).unwrap_or_else(|_| panic!("Could not read {}", args.source_name));
    assert!(!data.is_empty(), "Cannot analyze an empty file");

    let table = FrequencyTable::from_symbols(&data);
    let tree = HuffmanTree::from_frequencies(&table).expect("Failed building the Huffman tree");

    let mut compressed_bits = 0;
    let mut min_code_len = usize::MAX;
    let mut max_code_len = 0;

    for (symbol, count) in table.iter() {
        let len = tree.code_of(&symbol).expect("Every counted symbol has a code").len();

        compressed_bits += count * len as u64;
        min_code_len = min_code_len.min(len);
        max_code_len = max_code_len.max(len);
    }

    let width = if table.num_distinct() > 1 {
        (usize::BITS - (table.num_distinct() - 1).leading_zeros()) as u64
    } else {
        1
    };

    let report = Report {
        symbols: table.num_symbols(),
        distinct: table.num_distinct(),
        raw_bits: table.num_symbols() * 8,
        fixed_width_bits: table.num_symbols() * width,
        compressed_bits,
        min_code_len,
        max_code_len,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report).unwrap());
        return;
    }

    println!("symbols: {}", report.symbols);
    println!("distinct symbols: {}", report.distinct);
    println!("raw size: {} bits", report.raw_bits);
    println!("fixed-width size: {} bits", report.fixed_width_bits);
    println!("compressed size: {} bits", report.compressed_bits);
    println!("code lengths: {} to {}", report.min_code_len, report.max_code_len);
    println!("compression ratio: {:.3}", report.compressed_bits as f64 / report.raw_bits as f64);
}
