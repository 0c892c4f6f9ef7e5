pub mod feature_card;
pub mod icon;
pub mod pages;
pub mod reveal;

pub use feature_card::FeatureCard;
pub use icon::{Icon, icons};
pub use pages::{LandingPage, NotFoundPage};
pub use reveal::use_reveal_once;
