pub mod batch_lookup;
pub mod reverse_lookup;

pub use batch_lookup::BatchLookupUseCase;
pub use reverse_lookup::ReverseLookupUseCase;
