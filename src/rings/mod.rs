pub mod display;
pub mod division;
pub mod errors;
pub mod inversion;
pub mod poly;

pub use division::{div_mod, xgcd};
pub use errors::{RingError, RingResult};
pub use inversion::{invert_mod_prime, invert_mod_prime_power, mul_in_quotient};
pub use poly::Poly;
