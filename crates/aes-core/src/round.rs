//! AES round transformations.

use crate::gf::mix_term;
use crate::key::KeySchedule;
use crate::state::State;
use crate::tables::{inv_sbox, sbox};

const MIX: [[u8; 4]; 4] = [
    [0x02, 0x03, 0x01, 0x01],
    [0x01, 0x02, 0x03, 0x01],
    [0x01, 0x01, 0x02, 0x03],
    [0x03, 0x01, 0x01, 0x02],
];

const INV_MIX: [[u8; 4]; 4] = [
    [0x0e, 0x0b, 0x0d, 0x09],
    [0x09, 0x0e, 0x0b, 0x0d],
    [0x0d, 0x09, 0x0e, 0x0b],
    [0x0b, 0x0d, 0x09, 0x0e],
];

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut State) {
    for byte in state.0.iter_mut().flatten() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut State) {
    for byte in state.0.iter_mut().flatten() {
        *byte = inv_sbox(*byte);
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r` columns.
#[inline]
pub fn shift_rows(state: &mut State) {
    let old = *state;
    for (c, column) in state.0.iter_mut().enumerate() {
        for (r, byte) in column.iter_mut().enumerate() {
            *byte = old.0[(c + r) % 4][r];
        }
    }
}

/// Performs the inverse of ShiftRows in place: row `r` rotates right by `r`.
#[inline]
pub fn inv_shift_rows(state: &mut State) {
    let old = *state;
    for (c, column) in state.0.iter_mut().enumerate() {
        for (r, byte) in column.iter_mut().enumerate() {
            *byte = old.0[(c + 4 - r) % 4][r];
        }
    }
}

fn mix_with(state: &mut State, matrix: &[[u8; 4]; 4]) {
    for column in state.0.iter_mut() {
        let src = *column;
        for (out, coeffs) in column.iter_mut().zip(matrix.iter()) {
            *out = mix_term(src, *coeffs);
        }
    }
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut State) {
    mix_with(state, &MIX);
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut State) {
    mix_with(state, &INV_MIX);
}

/// XORs round key `round` of the schedule into the state.
///
/// # Panics
///
/// Panics if `round` exceeds the schedule's round count.
#[inline]
pub fn add_round_key(state: &mut State, schedule: &KeySchedule, round: usize) {
    for (c, word) in schedule.round_key(round).iter().enumerate() {
        state.set_word(c, state.word(c) ^ word);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Aes128Key;
    use hex_literal::hex;

    fn state(bytes: [u8; 16]) -> State {
        State::from_block(&bytes)
    }

    #[test]
    fn shift_rows_moves_rows_left() {
        let identity: [u8; 16] = core::array::from_fn(|i| i as u8);
        let mut s = state(identity);
        shift_rows(&mut s);
        assert_eq!(
            s.to_block(),
            [0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, 1, 6, 11]
        );
        inv_shift_rows(&mut s);
        assert_eq!(s.to_block(), identity);
    }

    #[test]
    fn sub_bytes_round_trip_every_byte() {
        for start in (0..=255u8).step_by(16) {
            let original = state(core::array::from_fn(|i| start.wrapping_add(i as u8)));
            let mut s = original;
            sub_bytes(&mut s);
            inv_sub_bytes(&mut s);
            assert_eq!(s, original);
        }
    }

    #[test]
    fn mix_columns_fips_column() {
        // Round 1 of the FIPS-197 Appendix B trace.
        let mut s = state(hex!("d4bf5d30e0b452aeb84111f11e2798e5"));
        mix_columns(&mut s);
        assert_eq!(s.to_block(), hex!("046681e5e0cb199a48f8d37a2806264c"));
        inv_mix_columns(&mut s);
        assert_eq!(s.to_block(), hex!("d4bf5d30e0b452aeb84111f11e2798e5"));
    }

    #[test]
    fn mix_columns_keeps_columns_independent() {
        let mut a = state(hex!("db135345f20a225c01010101c6c6c6c6"));
        let mut b = a;
        b.0[3] = [0xd4, 0xd4, 0xd4, 0xd5];
        mix_columns(&mut a);
        mix_columns(&mut b);
        assert_eq!(a.0[..3], b.0[..3]);
        assert_eq!(a.0[0], [0x8e, 0x4d, 0xa1, 0xbc]);
        assert_eq!(a.0[1], [0x9f, 0xdc, 0x58, 0x9d]);
        assert_eq!(a.0[2], [0x01, 0x01, 0x01, 0x01]);
        assert_eq!(b.0[3], [0xd5, 0xd5, 0xd7, 0xd6]);
    }

    #[test]
    fn add_round_key_is_involution() {
        let key = Aes128Key::from(hex!("2b7e151628aed2a6abf7158809cf4f3c"));
        let schedule = KeySchedule::new(&key);
        let original = state(hex!("3243f6a8885a308d313198a2e0370734"));
        let mut s = original;
        add_round_key(&mut s, &schedule, 0);
        assert_eq!(s.to_block(), hex!("193de3bea0f4e22b9ac68d2ae9f84808"));
        add_round_key(&mut s, &schedule, 0);
        assert_eq!(s, original);
    }
}
