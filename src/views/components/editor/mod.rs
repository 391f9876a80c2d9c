pub mod viewport;

pub use viewport::ComposeViewport;
