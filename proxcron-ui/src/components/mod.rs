//! Reusable UI components

pub mod card;
pub mod header;
pub mod loading;
pub mod status_badge;

pub use card::Card;
pub use header::Header;
pub use loading::Loading;
pub use status_badge::StatusBadge;
