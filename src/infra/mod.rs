//! Инфраструктурный слой вокруг движка баккара:
//! - генерация ID и время;
//! - RNG-реализации для движка;
//! - доменный seed с коммитментом.

pub mod ids;
pub mod rng;
pub mod rng_seed;

pub use ids::*;
pub use rng::*;
pub use rng_seed::RngSeed;
