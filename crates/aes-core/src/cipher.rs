//! Block encryption and decryption (FIPS-197 §5.1 and §5.3).

use crate::block::Block;
use crate::error::{Error, Result};
use crate::key::{KeySchedule, KeySize};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::state::State;

/// Transformation that produced a traced state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TraceStep {
    /// State freshly loaded from the input block.
    Input,
    /// After SubBytes.
    SubBytes,
    /// After ShiftRows.
    ShiftRows,
    /// After MixColumns.
    MixColumns,
    /// After AddRoundKey.
    AddRoundKey,
    /// After InvShiftRows.
    InvShiftRows,
    /// After InvSubBytes.
    InvSubBytes,
    /// After InvMixColumns.
    InvMixColumns,
    /// State about to be copied out.
    Output,
}

/// Encrypts a block, reporting the state after every transformation.
///
/// `observe` receives the round index, the step just applied and the state.
pub fn encrypt_block_traced<F>(block: &Block, schedule: &KeySchedule, mut observe: F) -> Block
where
    F: FnMut(usize, TraceStep, &State),
{
    let nr = schedule.rounds();
    let mut state = State::from_block(block);
    observe(0, TraceStep::Input, &state);

    add_round_key(&mut state, schedule, 0);
    observe(0, TraceStep::AddRoundKey, &state);

    for round in 1..nr {
        sub_bytes(&mut state);
        observe(round, TraceStep::SubBytes, &state);
        shift_rows(&mut state);
        observe(round, TraceStep::ShiftRows, &state);
        mix_columns(&mut state);
        observe(round, TraceStep::MixColumns, &state);
        add_round_key(&mut state, schedule, round);
        observe(round, TraceStep::AddRoundKey, &state);
    }

    sub_bytes(&mut state);
    observe(nr, TraceStep::SubBytes, &state);
    shift_rows(&mut state);
    observe(nr, TraceStep::ShiftRows, &state);
    add_round_key(&mut state, schedule, nr);
    observe(nr, TraceStep::AddRoundKey, &state);

    observe(nr, TraceStep::Output, &state);
    state.to_block()
}

/// Decrypts a block, reporting the state after every transformation.
///
/// Rounds are reported in the order they run, from `Nr` down to 0.
pub fn decrypt_block_traced<F>(block: &Block, schedule: &KeySchedule, mut observe: F) -> Block
where
    F: FnMut(usize, TraceStep, &State),
{
    let nr = schedule.rounds();
    let mut state = State::from_block(block);
    observe(nr, TraceStep::Input, &state);

    add_round_key(&mut state, schedule, nr);
    observe(nr, TraceStep::AddRoundKey, &state);

    for round in (1..nr).rev() {
        inv_shift_rows(&mut state);
        observe(round, TraceStep::InvShiftRows, &state);
        inv_sub_bytes(&mut state);
        observe(round, TraceStep::InvSubBytes, &state);
        add_round_key(&mut state, schedule, round);
        observe(round, TraceStep::AddRoundKey, &state);
        inv_mix_columns(&mut state);
        observe(round, TraceStep::InvMixColumns, &state);
    }

    inv_shift_rows(&mut state);
    observe(0, TraceStep::InvShiftRows, &state);
    inv_sub_bytes(&mut state);
    observe(0, TraceStep::InvSubBytes, &state);
    add_round_key(&mut state, schedule, 0);
    observe(0, TraceStep::AddRoundKey, &state);

    observe(0, TraceStep::Output, &state);
    state.to_block()
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, schedule: &KeySchedule) -> Block {
    encrypt_block_traced(block, schedule, |_, _, _| {})
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, schedule: &KeySchedule) -> Block {
    decrypt_block_traced(block, schedule, |_, _, _| {})
}

fn check_nk(nk: usize, schedule: &KeySchedule) -> Result<()> {
    let size = KeySize::from_nk(nk)?;
    if size != schedule.key_size() {
        return Err(Error::ContractViolation {
            context: "Nk of key schedule",
            expected: schedule.key_size().nk(),
            actual: nk,
        });
    }
    Ok(())
}

/// Forward cipher with an explicit `Nk`, which must match the schedule.
pub fn cipher(nk: usize, schedule: &KeySchedule, input: &Block) -> Result<Block> {
    check_nk(nk, schedule)?;
    Ok(encrypt_block(input, schedule))
}

/// Inverse cipher with an explicit `Nk`, which must match the schedule.
pub fn inv_cipher(nk: usize, schedule: &KeySchedule, input: &Block) -> Result<Block> {
    check_nk(nk, schedule)?;
    Ok(decrypt_block(input, schedule))
}
