//! Landing page component
//!
//! Single-screen marketing page for the ShortSplit CLI:
//! - SEO meta tags and JSON-LD structured data
//! - Hero heading with a fade-in-up entrance
//! - Features grid, one scroll-revealed card per entry
//! - Call-to-action link to the source repository

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::FEATURES;
use crate::core::content::{CTA_LABEL, HEADLINE, REPOSITORY_URL, TAGLINE, structured_data};
use crate::ui::feature_card::FeatureCard;
use crate::ui::icon::{Icon, icons};

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        // SEO Meta Tags
        <SeoMeta />

        <main class="flex flex-col items-center px-6 py-12 space-y-12">
            // Hero
            <div class="landing-fade-in-up">
                <h1 class="text-5xl font-bold text-center">{HEADLINE}</h1>
                <p class="mt-4 text-center text-gray-600 text-lg max-w-2xl">{TAGLINE}</p>
            </div>

            // Features
            <div class="grid gap-8 sm:grid-cols-3">
                {FEATURES
                    .iter()
                    .map(|feature| {
                        view! {
                            <FeatureCard
                                icon=feature.icon
                                title=feature.title
                                description=feature.description
                            />
                        }
                    })
                    .collect_view()}
            </div>

            // CTA
            <div class="landing-fade-in landing-delay-300">
                <a
                    href=REPOSITORY_URL
                    class="inline-flex items-center gap-2 rounded bg-black px-6 py-3 text-white hover:bg-gray-800"
                >
                    <Icon name=icons::ROCKET class="w-5 h-5 invert" />
                    {CTA_LABEL}
                </a>
            </div>

            // CSS Animations
            <LandingStyles />
        </main>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="ShortSplit - Vertical Shorts From Two Clips" />
        <Meta name="description" content=TAGLINE />
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content=HEADLINE />
        <Meta property="og:description" content=TAGLINE />

        <script type="application/ld+json" inner_html=structured_data()></script>
    }
}

/// CSS styles for landing page animations
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            @keyframes landing-fade-in-up {
                from {
                    opacity: 0;
                    transform: translateY(20px);
                }
                to {
                    opacity: 1;
                    transform: translateY(0);
                }
            }

            @keyframes landing-fade-in {
                from { opacity: 0; }
                to { opacity: 1; }
            }

            .landing-fade-in-up {
                animation: landing-fade-in-up 0.5s ease-out forwards;
            }

            .landing-fade-in {
                animation: landing-fade-in 0.5s ease-out forwards;
            }

            .landing-delay-300 {
                animation-delay: 0.3s;
                opacity: 0;
            }

            /* Scroll reveal, played once per card */
            .reveal-pending {
                opacity: 0;
                transform: translateY(20px);
                transition: opacity 0.5s ease-out, transform 0.5s ease-out;
            }

            .reveal-pending.revealed {
                opacity: 1;
                transform: translateY(0);
            }
            "#
        </style>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use leptos_meta::provide_meta_context;

    fn render_page() -> String {
        Owner::new().with(|| {
            provide_meta_context();
            view! { <LandingPage /> }.to_html()
        })
    }

    #[test]
    fn test_renders_hero() {
        let html = render_page();
        assert!(html.contains("ShortSplit"));
        assert!(html.contains("Effortless vertical video stacking with automatic subtitles."));
    }

    #[test]
    fn test_renders_three_cards_in_order() {
        let html = render_page();

        assert_eq!(html.matches("<h3").count(), 3);

        let positions: Vec<usize> = [
            "Stack Clips Instantly",
            "GPU/CPU Support",
            "Local &amp; Offline",
        ]
        .iter()
        .map(|title| {
            html.find(&format!(">{title}<"))
                .unwrap_or_else(|| panic!("missing card {title}"))
        })
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_cards_match_entries() {
        let html = render_page();
        for feature in &FEATURES {
            assert!(html.contains(&feature.description.replace('&', "&amp;")));
            assert!(html.contains(&format!(r#"src="/icons/{}.svg""#, feature.icon)));
        }
    }

    #[test]
    fn test_cta_links_to_repository() {
        let html = render_page();
        assert_eq!(
            html.matches(r#"href="https://github.com/Dyhrrr/shortsplit""#)
                .count(),
            1
        );
        assert!(html.contains("Get the Tool"));
    }

    #[test]
    fn test_rerender_is_identical() {
        assert_eq!(render_page(), render_page());
    }
}
