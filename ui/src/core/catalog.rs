//! The two sellable editions of the guide and their storefront variant IDs.

use serde::{Deserialize, Serialize};

/// Language edition of the guide. The storefront sells each edition as its
/// own product variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edition {
    #[default]
    English,
    Deutsch,
}

impl Edition {
    /// Display order of the selector buttons.
    pub const ALL: [Edition; 2] = [Edition::English, Edition::Deutsch];

    /// Vendor-assigned variant identifier used by the cart endpoint.
    pub fn variant_id(self) -> &'static str {
        match self {
            Edition::English => "50232071356720",
            Edition::Deutsch => "50232071422256",
        }
    }

    /// Label shown on the selector. Edition names are not translated.
    pub fn label(self) -> &'static str {
        match self {
            Edition::English => "English",
            Edition::Deutsch => "Deutsch",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Edition::English => "🇬🇧",
            Edition::Deutsch => "🇩🇪",
        }
    }

    /// Reverse lookup, used when logging platform responses.
    pub fn from_variant_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.variant_id() == id)
    }
}
