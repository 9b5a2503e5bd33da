//! MD5 compression function
//!
//! One call to [`transform`] folds a single 64-byte block into the chaining
//! state: 64 steps in four rounds of sixteen, followed by the Davies-Meyer
//! feed-forward of the incoming state.

use crate::hashing::BLOCK_SIZE;
use crate::hashing::codec::{decode_block, encode_words};

/// Size of the chaining state in bytes
pub const STATE_SIZE: usize = 16;

/// Chaining state: four 32-bit registers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct State {
    pub a: u32,
    pub b: u32,
    pub c: u32,
    pub d: u32,
}

impl State {
    /// Fixed initial chaining value
    pub const INITIAL: State = State {
        a: 0x67452301,
        b: 0xefcdab89,
        c: 0x98badcfe,
        d: 0x10325476,
    };

    pub const fn new(a: u32, b: u32, c: u32, d: u32) -> Self {
        Self { a, b, c, d }
    }

    /// Reinterpret 16 raw bytes (a digest) as chaining state
    pub fn from_bytes(bytes: &[u8; STATE_SIZE]) -> Self {
        let word = |i: usize| {
            u32::from_le_bytes([bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]])
        };
        Self::new(word(0), word(4), word(8), word(12))
    }

    /// Little-endian encoding of the four registers
    pub fn to_bytes(&self) -> [u8; STATE_SIZE] {
        let mut output = [0u8; STATE_SIZE];
        output.copy_from_slice(&encode_words(&self.words()));
        output
    }

    pub fn words(&self) -> [u32; 4] {
        [self.a, self.b, self.c, self.d]
    }
}

impl From<[u32; 4]> for State {
    fn from(words: [u32; 4]) -> Self {
        Self::new(words[0], words[1], words[2], words[3])
    }
}

/// Nonlinear function mixing three registers in one round
pub type RoundFunction = fn(u32, u32, u32) -> u32;

/// Round 1: bitwise select, `y` where `x` is set and `z` elsewhere
pub fn f(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

/// Round 2: bitwise select keyed on `z`
pub fn g(x: u32, y: u32, z: u32) -> u32 {
    (x & z) | (y & !z)
}

/// Round 3: parity
pub fn h(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

/// Round 4
pub fn i(x: u32, y: u32, z: u32) -> u32 {
    y ^ (x | !z)
}

/// Rotate a word left by `n` bits
///
/// `n` is reduced modulo 32, so rotating by the full width returns the word
/// unchanged instead of overflowing the shift.
pub fn left_rotate(word: u32, n: u32) -> u32 {
    word.rotate_left(n)
}

/// One MD5 step, returning the new value for the register in the `b` role
///
/// `b + rotl(a + round(b, c, d) + x + constant, shift)`, all modulo 2^32.
#[allow(clippy::too_many_arguments)]
pub fn step(
    round: RoundFunction,
    a: u32,
    b: u32,
    c: u32,
    d: u32,
    x: u32,
    shift: u32,
    constant: u32,
) -> u32 {
    let mixed = a
        .wrapping_add(round(b, c, d))
        .wrapping_add(x)
        .wrapping_add(constant);
    left_rotate(mixed, shift).wrapping_add(b)
}

/// Round function and shift cycle for each of the four rounds
const ROUNDS: [(RoundFunction, [u32; 4]); 4] = [
    (f, [7, 12, 17, 22]),
    (g, [5, 9, 14, 20]),
    (h, [4, 11, 16, 23]),
    (i, [6, 10, 15, 21]),
];

/// Additive constants, one per step: floor(2^32 * |sin(n)|) for n = 1..=64
const K: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee, 0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be, 0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa, 0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed, 0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c, 0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05, 0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039, 0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1, 0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

/// Message word consumed by step `n` (0..64)
fn message_index(n: usize) -> usize {
    match n / 16 {
        0 => n,
        1 => (5 * n + 1) % 16,
        2 => (3 * n + 5) % 16,
        _ => (7 * n) % 16,
    }
}

/// Fold one block into the chaining state
pub fn transform(state: State, block: &[u8; BLOCK_SIZE]) -> State {
    let x = decode_block(block);
    let [mut a, mut b, mut c, mut d] = state.words();

    for (round, (function, shifts)) in ROUNDS.iter().enumerate() {
        for j in 0..16 {
            let n = round * 16 + j;
            let next = step(*function, a, b, c, d, x[message_index(n)], shifts[j % 4], K[n]);
            a = d;
            d = c;
            c = b;
            b = next;
        }
    }

    State::new(
        a.wrapping_add(state.a),
        b.wrapping_add(state.b),
        c.wrapping_add(state.c),
        d.wrapping_add(state.d),
    )
}
