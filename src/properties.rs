use std::collections::HashMap;

/// Sidecar metadata describing a compressed payload.
///
/// The payload file stores whole bytes; `bits` is the exact length of the
/// encoded bit sequence, which tells a reader how much of the last byte is
/// padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Properties {
    pub symbols: u64,
    pub distinct: usize,
    pub bits: u64,
    pub bytes: u64,
}

impl From<HashMap<String, String>> for Properties {
    fn from(value: HashMap<String, String>) -> Self {
        Properties {
            symbols: value.get("symbols").expect("Failed in reading symbols from properties").parse().unwrap(),
            distinct: value.get("distinct").expect("Failed in reading distinct from properties").parse().unwrap(),
            bits: value.get("bits").expect("Failed in reading bits from properties").parse().unwrap(),
            bytes: value.get("bytes").expect("Failed in reading bytes from properties").parse().unwrap(),
        }
    }
}

impl From<Properties> for String {
    fn from(val: Properties) -> Self {
        let mut s = String::new();

        s.push_str("#Huffman payload properties\n");
        s.push_str("version=0\n");
        s.push_str(&format!("symbols={}\n", val.symbols));
        s.push_str(&format!("distinct={}\n", val.distinct));
        s.push_str(&format!("bits={}\n", val.bits));
        s.push_str(&format!("bytes={}\n", val.bytes));

        s
    }
}
