//! Shared UI crate for the Maldives on a Budget landing page. Components,
//! storefront logic and localization live here; `web` only mounts them.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Inline SVG icon set (components/icons.rs)
    pub mod icons;

    mod edition_selector;
    pub use edition_selector::EditionSelector;

    mod feature_bullet;
    pub use feature_bullet::FeatureBullet;
}

mod hero;
pub use hero::Hero;

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
