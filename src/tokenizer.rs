pub mod delimiter;

pub use delimiter::Delimiter;
