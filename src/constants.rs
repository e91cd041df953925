//! Compile-time defaults shared by the rule builder and the password policy.

/// Default lower bound for generic length rules.
pub const LENGTH_MIN_DEFAULT: usize = 1;

/// Default upper bound for generic length rules.
pub const LENGTH_MAX_DEFAULT: usize = 100;

/// Lower bound of the default password policy.
pub const LENGTH_MIN_PASSWORD: usize = 8;

/// Upper bound of the default password policy.
pub const LENGTH_MAX_PASSWORD: usize = 50;

/// Expiry carried by the default password policy. Not enforced here.
pub const PASSWORD_EXPIRY_DAYS: u32 = 30;
