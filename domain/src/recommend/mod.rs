//! Recommendation value objects
//!
//! What the result screens show: a persona card, the primary bean, an
//! optional alternate from the runner-up persona, and, for blends, the
//! resolved components.

pub mod card;
pub mod links;

pub use card::{AlternatePick, BlendBreakdown, PersonaCard, Recommendation, ResolvedComponent};
pub use links::{PurchaseContext, PurchaseLink, share_text};
