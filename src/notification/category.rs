//! Notification categories
//!
//! Every toast belongs to exactly one [`Category`]. Multi-variant categories
//! carry their variant inline so the style lookup is an exhaustive match.

use std::fmt;
use std::str::FromStr;

/// Returned when a category key is not recognized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown notification category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

/// Defines a variant enum with its key table, `FromStr` and a fallback parser.
macro_rules! variant_enum {
    (
        $(#[$meta:meta])*
        $name:ident, default = $default:ident, {
            $($variant:ident => $key:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// All variants in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Key used in config files and dotted category keys
            pub fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }

            /// Parse a key, falling back to the default variant when unknown
            pub fn from_key_or_default(key: &str) -> Self {
                key.parse().unwrap_or_else(|_| {
                    log::debug!(
                        "Unknown {} variant '{}', using '{}'",
                        stringify!($name),
                        key,
                        $name::$default.key()
                    );
                    $name::$default
                })
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl FromStr for $name {
            type Err = UnknownCategory;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($key => Ok($name::$variant),)+
                    _ => Err(UnknownCategory(s.to_string())),
                }
            }
        }
    };
}

variant_enum! {
    /// Authentication feedback variants
    AuthVariant, default = Login, {
        Login => "login",
        Signup => "signup",
        Logout => "logout",
        InvalidCredentials => "invalidCredentials",
        UserNotFound => "userNotFound",
        VerificationRequired => "verificationRequired",
    }
}

variant_enum! {
    /// Connectivity variants
    NetworkVariant, default = ServerError, {
        Offline => "offline",
        Online => "online",
        ServerError => "serverError",
    }
}

variant_enum! {
    /// Named two-stop color gradients
    GradientVariant, default = Purple, {
        Purple => "purple",
        Ocean => "ocean",
        Sunset => "sunset",
        Forest => "forest",
        Fire => "fire",
    }
}

variant_enum! {
    /// Coming-soon feature teaser variants
    FeatureVariant, default = Info, {
        Voice => "voice",
        Video => "video",
        Info => "info",
    }
}

/// Semantic classification of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Success,
    Error,
    Warning,
    Info,
    Loading,
    Auth(AuthVariant),
    Network(NetworkVariant),
    Gradient(GradientVariant),
    FeaturePreview(FeatureVariant),
}

impl Category {
    /// Every category, variants included
    pub fn all() -> Vec<Category> {
        let mut all = vec![
            Category::Success,
            Category::Error,
            Category::Warning,
            Category::Info,
            Category::Loading,
        ];
        all.extend(AuthVariant::ALL.iter().copied().map(Category::Auth));
        all.extend(NetworkVariant::ALL.iter().copied().map(Category::Network));
        all.extend(GradientVariant::ALL.iter().copied().map(Category::Gradient));
        all.extend(
            FeatureVariant::ALL
                .iter()
                .copied()
                .map(Category::FeaturePreview),
        );
        all
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Success => write!(f, "success"),
            Category::Error => write!(f, "error"),
            Category::Warning => write!(f, "warning"),
            Category::Info => write!(f, "info"),
            Category::Loading => write!(f, "loading"),
            Category::Auth(v) => write!(f, "auth.{}", v.key()),
            Category::Network(v) => write!(f, "network.{}", v.key()),
            Category::Gradient(v) => write!(f, "gradient.{}", v.key()),
            Category::FeaturePreview(v) => write!(f, "featurePreview.{}", v.key()),
        }
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || UnknownCategory(s.to_string());

        match s.split_once('.') {
            None => match s {
                "success" => Ok(Category::Success),
                "error" => Ok(Category::Error),
                "warning" => Ok(Category::Warning),
                "info" => Ok(Category::Info),
                "loading" => Ok(Category::Loading),
                _ => Err(unknown()),
            },
            Some((group, variant)) => match group {
                "auth" => variant.parse().map(Category::Auth),
                "network" => variant.parse().map(Category::Network),
                "gradient" => variant.parse().map(Category::Gradient),
                "featurePreview" => variant.parse().map(Category::FeaturePreview),
                _ => Err(unknown()),
            }
            .map_err(|_| unknown()),
        }
    }
}

#[cfg(test)]
#[path = "category_tests.rs"]
mod category_tests;
