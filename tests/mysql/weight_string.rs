use collations::mysql::{ASCII_BIN, ASCII_GENERAL_CI, BINARY, LATIN1_BIN, LATIN1_SWEDISH_CI};
use collations::{Collation, WeightLimit, PAD_TO_MAX};
use collations_test::{random_bytes, rng};

static ALL: [&dyn Collation; 5] = [
    &BINARY,
    &LATIN1_SWEDISH_CI,
    &LATIN1_BIN,
    &ASCII_GENERAL_CI,
    &ASCII_BIN,
];

static PADDED: [&dyn Collation; 4] = [&LATIN1_SWEDISH_CI, &LATIN1_BIN, &ASCII_GENERAL_CI, &ASCII_BIN];

#[test]
fn it_reports_the_exact_weight_string_length() {
    for collation in ALL {
        for n in [0, 1, 2, 7, 64, 255, 1024] {
            let src = vec![b'x'; n];
            let mut dst = Vec::new();

            collation.weight_string(&mut dst, &src, WeightLimit::NoLimit);

            assert_eq!(collation.weight_string_len(n), dst.len(), "{}", collation.name());
        }
    }
}

#[test]
fn it_pads_to_a_codepoint_count() {
    let mut rng = rng(0x5eed_0101);

    for collation in PADDED {
        for _ in 0..500 {
            let src = random_bytes(&mut rng, b"abcXYZ \xe5", 10);
            let n = src.len() + 1 + (src.len() % 5);

            let mut dst = Vec::new();
            collation.weight_string(&mut dst, &src, WeightLimit::Codepoints(n));

            assert_eq!(dst.len(), n);
            assert!(dst[src.len()..].iter().all(|&b| b == b' '));
        }
    }
}

#[test]
fn it_truncates_to_a_codepoint_count() {
    for collation in ALL {
        let mut dst = Vec::new();
        collation.weight_string(&mut dst, b"abcdefgh", WeightLimit::Codepoints(3));

        assert_eq!(dst.len(), 3, "{}", collation.name());
    }
}

#[test]
fn it_appends_to_existing_contents() {
    for collation in ALL {
        let mut dst = b"\x01\x02".to_vec();
        collation.weight_string(&mut dst, b"a", WeightLimit::NoLimit);

        assert_eq!(&dst[..2], b"\x01\x02");
        assert_eq!(dst.len(), 3);
    }
}

#[test]
fn it_pads_to_capacity() {
    for collation in ALL {
        for k in [4, 8, 32] {
            let mut dst = Vec::<u8>::with_capacity(k);
            let cap = dst.capacity();

            collation.weight_string(&mut dst, b"abc", WeightLimit::PadToCapacity);

            assert_eq!(dst.len(), cap, "{}", collation.name());
            assert_eq!(dst.capacity(), cap);
        }
    }
}

#[test]
fn it_counts_existing_contents_against_capacity() {
    let mut dst = Vec::<u8>::with_capacity(10);
    let cap = dst.capacity();
    dst.extend_from_slice(b"key:");

    LATIN1_SWEDISH_CI.weight_string(&mut dst, b"ab", WeightLimit::PadToCapacity);

    assert_eq!(dst.len(), cap);
    assert_eq!(&dst[..6], b"key:AB");
    assert!(dst[6..].iter().all(|&b| b == b' '));
}

#[test]
fn it_never_pads_past_the_original_capacity() {
    for collation in ALL {
        let mut dst = Vec::<u8>::with_capacity(2);
        let cap = dst.capacity();
        let src = vec![b'a'; cap + 5];

        collation.weight_string(&mut dst, &src, WeightLimit::PadToCapacity);

        // the input is always encoded in full, and nothing is added after it
        assert_eq!(dst.len(), src.len(), "{}", collation.name());
    }
}

#[test]
fn binary_weight_strings_are_exact_copies() {
    let src = b"Ab \x00\xff";

    assert_eq!(BINARY.weight_string_vec(src, WeightLimit::NoLimit), src);
    assert_eq!(BINARY.weight_string_vec(src, WeightLimit::Codepoints(2)), b"Ab");

    // a codepoint count larger than the input does not pad
    assert_eq!(BINARY.weight_string_vec(src, WeightLimit::Codepoints(16)), src);

    let mut dst = Vec::<u8>::with_capacity(16);
    let cap = dst.capacity();
    BINARY.weight_string(&mut dst, src, WeightLimit::PadToCapacity);

    assert_eq!(&dst[..src.len()], src);
    assert_eq!(dst.len(), cap);
    assert!(dst[src.len()..].iter().all(|&b| b == 0));
}

#[test]
fn fixed_width_keys_sort_like_char_columns() {
    // CHAR(6) values compare with trailing spaces; the weight strings must too
    let mut keys: Vec<Vec<u8>> = [&b"beta"[..], b"Alpha", b"alp", b"GAMMA!"]
        .iter()
        .map(|v| LATIN1_SWEDISH_CI.weight_string_vec(v, WeightLimit::Codepoints(6)))
        .collect();

    keys.sort();

    assert_eq!(keys, [&b"ALP   "[..], b"ALPHA ", b"BETA  ", b"GAMMA!"]);
}

#[test]
fn raw_limits_match_mysql_conventions() {
    let mut dst = Vec::<u8>::with_capacity(8);
    let cap = dst.capacity();

    LATIN1_BIN.weight_string(&mut dst, b"ab", WeightLimit::from(PAD_TO_MAX));
    assert_eq!(dst.len(), cap);

    assert_eq!(LATIN1_BIN.weight_string_vec(b"ab", WeightLimit::from(0)), b"ab");
    assert_eq!(LATIN1_BIN.weight_string_vec(b"ab", WeightLimit::from(4)), b"ab  ");
    assert_eq!(LATIN1_BIN.weight_string_vec(b"ab", WeightLimit::from(-1)), b"");
}
