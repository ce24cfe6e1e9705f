//! Internal macro implementations (used by tola-meta itself).

pub mod std_types;
