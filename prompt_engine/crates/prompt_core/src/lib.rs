pub mod modules;

pub use modules::{catalog, composer, error, field_resolver, protocol, randomizer, session};

pub use modules::catalog::Catalog;
pub use modules::composer::Composer;
pub use modules::error::PromptError;
pub use modules::field_resolver::FieldResolver;
pub use modules::randomizer::{DrawSource, RandomDraw, Randomizer};
pub use modules::session::PromptSession;
