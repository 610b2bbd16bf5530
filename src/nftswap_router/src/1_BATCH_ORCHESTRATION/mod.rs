//! Batch orchestration - the public swap compositions
//! Owns running-balance accounting and the strict/robust slippage policy

pub mod robust;
pub mod strict;
