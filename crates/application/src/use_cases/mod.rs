pub mod lookup;

pub use lookup::{BatchLookupUseCase, ReverseLookupUseCase};
