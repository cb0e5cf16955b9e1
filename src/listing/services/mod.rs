//! Application services for listing render passes.

mod renderer;

pub use renderer::ListingRenderer;
