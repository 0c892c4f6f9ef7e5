use leptos::prelude::*;

/// Decorative icon served from `/icons/<name>.svg`.
#[component]
pub fn Icon(
    /// Icon name (file stem under `public/icons`)
    name: &'static str,
    /// CSS classes for sizing
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable="false"
        />
    }
}

/// Icon set shipped with the site
pub mod icons {
    pub const LAYERS: &str = "layers-3";
    pub const CPU: &str = "cpu";
    pub const TERMINAL: &str = "terminal";
    pub const ROCKET: &str = "rocket";
    pub const FILE_QUESTION: &str = "file-question";

    pub const ALL: [&str; 5] = [LAYERS, CPU, TERMINAL, ROCKET, FILE_QUESTION];
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn test_icon_points_at_asset() {
        let html = Owner::new().with(|| view! { <Icon name=icons::CPU /> }.to_html());
        assert!(html.contains(r#"src="/icons/cpu.svg""#));
        assert!(html.contains(r#"class="w-5 h-5""#));
    }

    #[test]
    fn test_icon_assets_exist() {
        for name in icons::ALL {
            let path = format!("{}/public/icons/{}.svg", env!("CARGO_MANIFEST_DIR"), name);
            assert!(std::path::Path::new(&path).exists(), "missing {path}");
        }
    }
}
