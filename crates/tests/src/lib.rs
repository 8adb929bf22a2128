#[cfg(test)]
mod common;

#[cfg(test)]
mod nav_gate_tests;

#[cfg(test)]
mod session_tests;

#[cfg(test)]
mod auth_tests;

#[cfg(test)]
mod store_tests;
