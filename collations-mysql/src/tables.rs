//! Sort orders of MySQL's case-insensitive single-byte collations.
//!
//! These must match the server's tables byte for byte.

use crate::simple::SortOrder;

/// `latin1_swedish_ci`.
///
/// Letters fold to their upper case ASCII weight. Accented letters fold onto their
/// base letter, except `Å`/`å` (91), `Ä`/`ä`/`Æ`/`æ` (92) and `Ö`/`ö` (93), which sort
/// after `Z` as in the Swedish alphabet. `ß`, `Ø` and `Þ` keep weights of their own.
#[rustfmt::skip]
pub static SORT_ORDER_LATIN1_SWEDISH_CI: SortOrder = [
      0,   1,   2,   3,   4,   5,   6,   7,   8,   9,  10,  11,  12,  13,  14,  15,
     16,  17,  18,  19,  20,  21,  22,  23,  24,  25,  26,  27,  28,  29,  30,  31,
     32,  33,  34,  35,  36,  37,  38,  39,  40,  41,  42,  43,  44,  45,  46,  47,
     48,  49,  50,  51,  52,  53,  54,  55,  56,  57,  58,  59,  60,  61,  62,  63,
     64,  65,  66,  67,  68,  69,  70,  71,  72,  73,  74,  75,  76,  77,  78,  79,
     80,  81,  82,  83,  84,  85,  86,  87,  88,  89,  90,  91,  92,  93,  94,  95,
     96,  65,  66,  67,  68,  69,  70,  71,  72,  73,  74,  75,  76,  77,  78,  79,
     80,  81,  82,  83,  84,  85,  86,  87,  88,  89,  90, 123, 124, 125, 126, 127,
    128, 129, 130, 131, 132, 133, 134, 135, 136, 137, 138, 139, 140, 141, 142, 143,
    144, 145, 146, 147, 148, 149, 150, 151, 152, 153, 154, 155, 156, 157, 158, 159,
    160, 161, 162, 163, 164, 165, 166, 167, 168, 169, 170, 171, 172, 173, 174, 175,
    176, 177, 178, 179, 180, 181, 182, 183, 184, 185, 186, 187, 188, 189, 190, 191,
     65,  65,  65,  65,  92,  91,  92,  67,  69,  69,  69,  69,  73,  73,  73,  73,
     68,  78,  79,  79,  79,  79,  93, 215, 216,  85,  85,  85,  89,  89, 222, 223,
     65,  65,  65,  65,  92,  91,  92,  67,  69,  69,  69,  69,  73,  73,  73,  73,
     68,  78,  79,  79,  79,  79,  93, 247, 216,  85,  85,  85,  89,  89, 222, 255,
];

/// `ascii_general_ci`: `a`-`z` fold onto `A`-`Z`, every other byte is its own weight.
pub static SORT_ORDER_ASCII_GENERAL_CI: SortOrder = fold_ascii_case();

const fn fold_ascii_case() -> SortOrder {
    let mut table = [0; 256];
    let mut b: u8 = 0;

    loop {
        table[b as usize] = b.to_ascii_uppercase();

        if b == u8::MAX {
            break table;
        }

        b += 1;
    }
}
