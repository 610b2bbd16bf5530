//! Leg execution - one buy or sell against exactly one pool
//! The four primitives every public entry is composed from

pub mod buy_leg;
pub mod sell_leg;
