use std::fs;

use super::BitSequence;

fn sequence_of(bits: &[bool]) -> BitSequence {
    let mut seq = BitSequence::new();

    for &bit in bits {
        seq.push(bit);
    }

    seq
}

#[test]
fn test_lsb_first_packing() {
    let seq = sequence_of(&[true, false, true, true]);

    assert_eq!(seq.len(), 4);
    assert_eq!(seq.as_bytes(), &[0b0000_1101]);
}

#[test]
fn test_padding_is_zeroed() {
    let seq = sequence_of(&[true; 9]);

    assert_eq!(seq.len(), 9);
    assert_eq!(seq.as_bytes(), &[0xFF, 0x01]);
}

#[test]
fn test_get_and_iter() {
    let bits = [true, true, false, true, false, false, true, false, true, true];
    let seq = sequence_of(&bits);

    for (i, &bit) in bits.iter().enumerate() {
        assert_eq!(seq.get(i), Some(bit));
    }
    assert_eq!(seq.get(bits.len()), None);

    let collected: Vec<bool> = seq.iter().collect();
    assert_eq!(collected, bits);
}

#[test]
fn test_empty_sequence() {
    let seq = BitSequence::new();

    assert!(seq.is_empty());
    assert_eq!(seq.len(), 0);
    assert!(seq.as_bytes().is_empty());
    assert_eq!(seq.iter().next(), None);
    assert_eq!(BitSequence::from_bytes(&[], 0), seq);
}

#[test]
fn test_extend_from() {
    let mut seq = sequence_of(&[true, false, true]);
    let tail = sequence_of(&[true, true]);

    seq.extend_from(&tail);

    assert_eq!(seq, sequence_of(&[true, false, true, true, true]));
}

#[test]
fn test_pack_unpack_round_trip() {
    let bits = [
        true, false, false, true, true, true, false, true,
        false, true, true, false, true,
    ];
    let seq = sequence_of(&bits);

    let packed = seq.as_bytes().to_vec();
    assert_eq!(packed.len(), 2);

    let mut unpacked = BitSequence::from_bytes(&packed, packed.len());
    assert_eq!(unpacked.len(), 16);

    // The unpacked sequence is the original plus zero padding up to the byte boundary
    for (i, &bit) in bits.iter().enumerate() {
        assert_eq!(unpacked.get(i), Some(bit));
    }
    for i in bits.len()..unpacked.len() {
        assert_eq!(unpacked.get(i), Some(false));
    }

    unpacked.truncate(bits.len());
    assert_eq!(unpacked, seq);
}

#[test]
fn test_from_bytes_partial_buffer() {
    let seq = BitSequence::from_bytes(&[0xAB, 0xCD, 0xEF], 2);

    assert_eq!(seq.len(), 16);
    assert_eq!(seq.as_bytes(), &[0xAB, 0xCD]);
}

#[test]
fn test_byte_boundary_needs_no_padding() {
    let seq = sequence_of(&[true, false, false, false, true, false, true, true]);

    assert_eq!(seq.len(), 8);
    assert_eq!(seq.as_bytes(), &[0b1101_0001]);
}

#[test]
fn test_truncate_clears_padding_region() {
    let mut seq = sequence_of(&[true; 8]);

    seq.truncate(3);
    assert_eq!(seq.len(), 3);
    assert_eq!(seq.as_bytes(), &[0b0000_0111]);

    // Bits cleared by the truncation must not resurface on later pushes
    seq.push(false);
    seq.push(true);
    assert_eq!(seq.as_bytes(), &[0b0001_0111]);
}

#[test]
fn test_truncate_beyond_len_is_noop() {
    let mut seq = sequence_of(&[true, false, true, false, true]);
    let before = seq.clone();

    seq.truncate(10);

    assert_eq!(seq, before);
}

#[test]
fn test_write_and_read_to_file() {
    let mut seq = BitSequence::new();
    for x in 0..10000 {
        seq.push(x % 3 == 0 || x % 7 == 0);
    }

    fs::write("BITSEQ", seq.as_bytes()).unwrap();

    let read_file = fs::read("BITSEQ").unwrap();
    let mut read_seq = BitSequence::from_bytes(&read_file, read_file.len());
    read_seq.truncate(seq.len());

    assert_eq!(read_seq, seq);

    fs::remove_file("BITSEQ").unwrap();
}
