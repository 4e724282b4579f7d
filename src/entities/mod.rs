pub mod tag;

pub use tag::Entity as Tag;
