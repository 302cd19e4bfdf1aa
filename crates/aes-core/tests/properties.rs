//! Property-based tests for the round transformations and the full cipher.

use aes_core::gf::gmul;
use aes_core::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use aes_core::{decrypt_block, encrypt_block, KeySchedule, State};
use proptest::prelude::*;

fn any_state() -> impl Strategy<Value = State> {
    any::<[u8; 16]>().prop_map(State::from)
}

proptest! {
    #[test]
    fn shift_rows_inverse(state in any_state()) {
        let mut s = state;
        shift_rows(&mut s);
        inv_shift_rows(&mut s);
        prop_assert_eq!(s, state);
    }

    #[test]
    fn shift_rows_keeps_first_row(state in any_state()) {
        let mut s = state;
        shift_rows(&mut s);
        for c in 0..4 {
            prop_assert_eq!(s.get(0, c), state.get(0, c));
        }
    }

    #[test]
    fn sub_bytes_inverse(state in any_state()) {
        let mut s = state;
        sub_bytes(&mut s);
        inv_sub_bytes(&mut s);
        prop_assert_eq!(s, state);
    }

    #[test]
    fn mix_columns_inverse(state in any_state()) {
        let mut s = state;
        mix_columns(&mut s);
        inv_mix_columns(&mut s);
        prop_assert_eq!(s, state);
    }

    #[test]
    fn mix_columns_per_column(state in any_state(), col in 0usize..4) {
        // Mixing a state that differs from zero in one column only touches that column.
        let mut isolated = State::default();
        isolated.0[col] = state.0[col];
        let mut full = state;
        mix_columns(&mut isolated);
        mix_columns(&mut full);
        prop_assert_eq!(isolated.0[col], full.0[col]);
        inv_mix_columns(&mut isolated);
        prop_assert_eq!(isolated.0[col], state.0[col]);
    }

    #[test]
    fn add_round_key_involution(state in any_state(), key in any::<[u8; 32]>(), round in 0usize..=14) {
        let schedule = KeySchedule::from_key_bytes(&key).unwrap();
        let mut s = state;
        add_round_key(&mut s, &schedule, round);
        add_round_key(&mut s, &schedule, round);
        prop_assert_eq!(s, state);
    }

    #[test]
    fn gmul_commutes(a in any::<u8>(), b in any::<u8>()) {
        prop_assert_eq!(gmul(a, b), gmul(b, a));
    }

    #[test]
    fn gmul_distributes_over_xor(a in any::<u8>(), b in any::<u8>(), c in any::<u8>()) {
        prop_assert_eq!(gmul(a, b ^ c), gmul(a, b) ^ gmul(a, c));
    }

    #[test]
    fn cipher_round_trip_128(key in any::<[u8; 16]>(), block in any::<[u8; 16]>()) {
        let schedule = KeySchedule::from_key_bytes(&key).unwrap();
        prop_assert_eq!(decrypt_block(&encrypt_block(&block, &schedule), &schedule), block);
    }

    #[test]
    fn cipher_round_trip_192(key in any::<[u8; 24]>(), block in any::<[u8; 16]>()) {
        let schedule = KeySchedule::from_key_bytes(&key).unwrap();
        prop_assert_eq!(decrypt_block(&encrypt_block(&block, &schedule), &schedule), block);
    }

    #[test]
    fn cipher_round_trip_256(key in any::<[u8; 32]>(), block in any::<[u8; 16]>()) {
        let schedule = KeySchedule::from_key_bytes(&key).unwrap();
        prop_assert_eq!(decrypt_block(&encrypt_block(&block, &schedule), &schedule), block);
    }
}

#[test]
fn sub_bytes_inverse_exhaustive() {
    for hi in 0..16u8 {
        let block: [u8; 16] = core::array::from_fn(|i| (hi << 4) | i as u8);
        let original = State::from(block);
        let mut s = original;
        sub_bytes(&mut s);
        inv_sub_bytes(&mut s);
        assert_eq!(s, original);
    }
}
