use std::{time::Instant, hint::black_box};

use clap::Parser;

use rand::Rng;
use huffman_rust::huffman::{FrequencyTable, HuffmanTree, huffman_encoder::HuffmanEncoder, huffman_decoder::HuffmanDecoder};

#[derive(Parser, Debug)]
struct BenchArgs {
    /// Number of symbols to generate
    #[arg(short, long, default_value_t = N_SYMBOLS)]
    symbols: usize,
    /// Number of distinct symbol values
    #[arg(short, long, default_value_t = N_DISTINCT)]
    distinct: usize,
    /// Number of timed runs per phase
    #[arg(short, long, default_value_t = N_RUNS)]
    runs: usize,
}

const N_SYMBOLS: usize = 1000000;
const N_DISTINCT: usize = 64;
const N_RUNS: usize = 3;

fn gen_symbols(n_symbols: usize, n_distinct: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..n_symbols)
        .map(|_| rng.gen_range(0..n_distinct) as u8)
        .collect()
}

fn main() {
    let args = BenchArgs::parse();

    assert!(args.distinct >= 1 && args.distinct <= 256, "The number of distinct symbols has to be in [1, 256]");
    assert!(args.symbols > 0 && args.runs > 0);

    let data = gen_symbols(args.symbols, args.distinct);

    let total = Instant::now();
    for _ in 0..args.runs {
        let table = FrequencyTable::from_symbols(&data);
        let _ = black_box(HuffmanTree::from_frequencies(&table).unwrap());
    }
    let avg_build = (total.elapsed().as_nanos() as f64) / args.runs as f64;
    println!("time per tree build: {}ns", avg_build);

    let table = FrequencyTable::from_symbols(&data);
    let tree = HuffmanTree::from_frequencies(&table).unwrap();
    let encoder = HuffmanEncoder::new(&tree);

    let total = Instant::now();
    for _ in 0..args.runs {
        let _ = black_box(encoder.encode(&data).unwrap());
    }
    let avg_encode = (total.elapsed().as_nanos() as f64) / (args.symbols * args.runs) as f64;
    println!("time per encoded symbol: {}ns", avg_encode);

    let bits = encoder.encode(&data).unwrap();
    let decoder = HuffmanDecoder::new(&tree);

    let total = Instant::now();
    for _ in 0..args.runs {
        let _ = black_box(decoder.decode(&bits).unwrap());
    }
    let avg_decode = (total.elapsed().as_nanos() as f64) / (args.symbols * args.runs) as f64;
    println!("time per decoded symbol: {}ns", avg_decode);

    println!("compressed {} symbols into {} bytes", args.symbols, bits.as_bytes().len());
}
