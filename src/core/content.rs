//! Static page copy for the ShortSplit landing page.
//!
//! Everything the page shows is a compile-time literal defined here, so the
//! components only decide layout and animation.

use serde::Serialize;

/// Product name shown as the hero heading.
pub const HEADLINE: &str = "ShortSplit";

/// One-line pitch under the heading.
pub const TAGLINE: &str = "Effortless vertical video stacking with automatic subtitles.";

/// Label of the call-to-action button.
pub const CTA_LABEL: &str = "Get the Tool";

/// Source repository of the advertised tool. The call-to-action always points here.
pub const REPOSITORY_URL: &str = "https://github.com/Dyhrrr/shortsplit";

/// One product capability shown in the features grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureEntry {
    /// Icon name from [`crate::ui::icon::icons`]
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Features grid content, in display order.
pub const FEATURES: [FeatureEntry; 3] = [
    FeatureEntry {
        icon: "layers-3",
        title: "Stack Clips Instantly",
        description: "Combine talking head and gameplay footage into perfect 1080x1920 shorts.",
    },
    FeatureEntry {
        icon: "cpu",
        title: "GPU/CPU Support",
        description: "Uses your GPU when available and gracefully falls back to CPU.",
    },
    FeatureEntry {
        icon: "terminal",
        title: "Local & Offline",
        description: "Runs completely offline with whisper-based transcription.",
    },
];

#[derive(Serialize)]
struct StructuredData<'a> {
    #[serde(rename = "@context")]
    context: &'a str,
    #[serde(rename = "@type")]
    kind: &'a str,
    name: &'a str,
    #[serde(rename = "applicationCategory")]
    application_category: &'a str,
    #[serde(rename = "operatingSystem")]
    operating_system: &'a str,
    description: &'a str,
    url: &'a str,
    #[serde(rename = "featureList")]
    feature_list: Vec<&'a str>,
}

/// JSON-LD `SoftwareApplication` document describing the tool.
///
/// The feature list follows [`FEATURES`] so the markup and the structured
/// data cannot drift apart.
pub fn structured_data() -> String {
    let data = StructuredData {
        context: "https://schema.org",
        kind: "SoftwareApplication",
        name: HEADLINE,
        application_category: "MultimediaApplication",
        operating_system: "Windows, macOS, Linux",
        description: TAGLINE,
        url: REPOSITORY_URL,
        feature_list: FEATURES.iter().map(|f| f.title).collect(),
    };
    // Serializing plain strings into a map cannot fail.
    serde_json::to_string(&data).unwrap_or_default()
}
