use std::{time::Instant, fs};

use clap::Parser;
use huffman_rust::huffman::{FrequencyTable, HuffmanTree, huffman_encoder::HuffmanEncoder};
use huffman_rust::properties::Properties;

#[derive(Parser, Debug)]
#[command(about = "Compress a file with a Huffman code built from its byte frequencies")]
struct Args {
    /// The file to compress
    source_name: String,
    /// The destination basename of the compressed files
    dest_name: String,
}

fn main() {
    let args = Args::parse();

    let data = fs::read(&args.source_name).unwrap_or_else(|_| panic!("Could not read {}", args.source_name));
    assert!(!data.is_empty(), "Cannot compress an empty file");

    let comp_time = Instant::now();

    let table = FrequencyTable::from_symbols(&data);
    let tree = HuffmanTree::from_frequencies(&table).expect("Failed building the Huffman tree");
    let bits = HuffmanEncoder::new(&tree).encode(&data).expect("Failed encoding the input");

    let comp_time = comp_time.elapsed().as_nanos() as f64;

    let props = Properties {
        symbols: table.num_symbols(),
        distinct: table.num_distinct(),
        bits: bits.len() as u64,
        bytes: bits.as_bytes().len() as u64,
    };

    fs::write(format!("{}.huff", args.dest_name), bits.as_bytes()).expect("Failed storing the payload");
    fs::write(format!("{}.properties", args.dest_name), String::from(props)).expect("Failed storing the properties file");
    table.store(&args.dest_name).expect("Failed storing the frequency table");

    println!("compressed {} bytes into {} bytes in {}ns", data.len(), bits.as_bytes().len(), comp_time);
    println!("compression ratio: {:.3}", bits.as_bytes().len() as f64 / data.len() as f64);
}
