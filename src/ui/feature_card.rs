use leptos::html;
use leptos::prelude::*;

use crate::ui::icon::Icon;
use crate::ui::reveal::use_reveal_once;

/// Feature card: icon, title and description in a centered column.
///
/// Starts transparent and shifted down, then settles in place the first time
/// it scrolls into view.
#[component]
pub fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    let card = NodeRef::<html::Div>::new();
    let reveal = use_reveal_once(card);

    view! {
        <div
            node_ref=card
            class=move || {
                format!(
                    "feature-card flex flex-col items-center text-center space-y-2 {}",
                    reveal.get().css_class(),
                )
            }
        >
            <div class="text-primary-500">
                <Icon name=icon class="w-8 h-8" />
            </div>
            <h3 class="text-xl font-semibold">{title}</h3>
            <p class="text-gray-600 max-w-xs">{description}</p>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render_card() -> String {
        Owner::new().with(|| {
            view! {
                <FeatureCard
                    icon="cpu"
                    title="GPU/CPU Support"
                    description="Uses your GPU when available and gracefully falls back to CPU."
                />
            }
            .to_html()
        })
    }

    #[test]
    fn test_card_renders_props() {
        let html = render_card();
        assert!(html.contains("GPU/CPU Support"));
        assert!(html.contains("Uses your GPU when available and gracefully falls back to CPU."));
        assert!(html.contains(r#"src="/icons/cpu.svg""#));
    }

    #[test]
    fn test_card_renders_pending_on_server() {
        let html = render_card();
        assert!(html.contains("reveal-pending"));
        assert!(!html.contains("revealed"));
    }

    #[test]
    fn test_card_render_is_deterministic() {
        assert_eq!(render_card(), render_card());
    }
}
