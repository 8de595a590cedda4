pub mod primes;
pub mod sampling;
pub mod utils;

pub use primes::is_prime;
pub use sampling::{centered_coefficients, ternary_coefficients};
pub use utils::{exact_log2, mod_inverse};
