use std::{time::Instant, fs::{self, File}, io::BufReader};

use clap::Parser;
use huffman_rust::bitstreams::BitSequence;
use huffman_rust::huffman::{FrequencyTable, HuffmanTree, huffman_decoder::HuffmanDecoder};
use huffman_rust::properties::Properties;

#[derive(Parser, Debug)]
#[command(about = "Decompress a Huffman-compressed file, rebuilding its tree from the frequency sidecar")]
struct Args {
    /// The basename of the compressed files
    source_name: String,
    /// The file to restore
    dest_name: String,
}

fn main() {
    let args = Args::parse();

    let properties_file = File::open(format!("{}.properties", args.source_name));
    let properties_file = properties_file.unwrap_or_else(|_| panic!("Could not find {}.properties", args.source_name));
    let p = java_properties::read(BufReader::new(properties_file)).unwrap_or_else(|_| panic!("Failed parsing the properties file"));
    let props = Properties::from(p);

    let table = FrequencyTable::<u8>::load(&args.source_name).expect("Failed loading the frequency table");
    let tree = HuffmanTree::from_frequencies(&table).expect("Failed rebuilding the Huffman tree");

    let payload = fs::read(format!("{}.huff", args.source_name)).unwrap_or_else(|_| panic!("Could not find {}.huff", args.source_name));
    assert_eq!(payload.len() as u64, props.bytes, "The payload size does not match the properties file");

    let decomp_time = Instant::now();

    let mut bits = BitSequence::from_bytes(&payload, payload.len());
    bits.truncate(props.bits as usize);
    let data = HuffmanDecoder::new(&tree).decode(&bits).expect("Failed decoding the payload");

    let decomp_time = decomp_time.elapsed().as_nanos() as f64;

    assert_eq!(data.len() as u64, props.symbols, "The decoded length does not match the properties file");

    fs::write(&args.dest_name, &data).expect("Failed storing the decompressed file");

    println!("decompressed {} bytes in {}ns", data.len(), decomp_time);
}
