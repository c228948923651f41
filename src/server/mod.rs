//! Listener loop: accepts connections and spawns one connection task each.

pub mod listener;
