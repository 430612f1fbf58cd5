use dioxus::prelude::*;

/// Open/closed state shared by every part of the sidebar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarState {
    pub open: bool,
}

impl SidebarState {
    fn toggled(self) -> Self {
        Self { open: !self.open }
    }
}

fn use_sidebar() -> Signal<SidebarState> {
    use_context::<Signal<SidebarState>>()
}

fn merged(class: &'static str, extra: Vec<Attribute>) -> Vec<Attribute> {
    let base = vec![Attribute::new("class", class, None, false)];
    dioxus_primitives::merge_attributes(vec![base, extra])
}

/// Declares a stateless sidebar part that renders `$tag` with a fixed class.
macro_rules! sidebar_part {
    ($(#[$meta:meta])* $name:ident, $tag:ident, $class:literal) => {
        $(#[$meta])*
        #[component]
        pub fn $name(
            #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
            children: Element,
        ) -> Element {
            let attrs = merged($class, attributes);
            rsx! {
                $tag { ..attrs, {children} }
            }
        }
    };
}

/// Owns the sidebar state. `view` is mirrored into `data-view` so the
/// stylesheet can tint the chrome per active dashboard view.
#[component]
pub fn SidebarProvider(
    #[props(default = true)] default_open: bool,
    #[props(default)] view: String,
    children: Element,
) -> Element {
    let state = use_signal(|| SidebarState { open: default_open });
    use_context_provider(|| state);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-provider",
            "data-sidebar-open": if state().open { "true" } else { "false" },
            "data-view": view,
            {children}
        }
    }
}

/// Collapsible navigation column. A backdrop closes it on small screens.
#[component]
pub fn Sidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();
    let open = state().open;

    let mut attrs = merged("sidebar", attributes);
    attrs.push(Attribute::new(
        "data-state",
        if open { "open" } else { "closed" },
        None,
        false,
    ));

    rsx! {
        if open {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| state.set(SidebarState { open: false }),
            }
        }
        aside { ..attrs, {children} }
    }
}

sidebar_part!(SidebarHeader, div, "sidebar-header");
sidebar_part!(SidebarContent, nav, "sidebar-content");
sidebar_part!(SidebarFooter, div, "sidebar-footer");
sidebar_part!(SidebarGroup, div, "sidebar-group");
sidebar_part!(SidebarGroupLabel, div, "sidebar-group-label");
sidebar_part!(SidebarMenu, ul, "sidebar-menu");
sidebar_part!(SidebarMenuItem, li, "sidebar-menu-item");
sidebar_part!(
    /// Main content column next to the sidebar.
    SidebarInset,
    main,
    "sidebar-inset"
);

/// Navigation entry. Closes the sidebar on click so overlay mode gets out
/// of the way after navigating.
#[component]
pub fn SidebarMenuButton(
    #[props(default = false)] active: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();

    let mut attrs = merged("sidebar-menu-button", attributes);
    attrs.push(Attribute::new(
        "data-active",
        if active { "true" } else { "false" },
        None,
        false,
    ));

    rsx! {
        div {
            onclick: move |_| state.set(SidebarState { open: false }),
            ..attrs,
            {children}
        }
    }
}

#[component]
pub fn SidebarTrigger(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();
    let attrs = merged("sidebar-trigger", attributes);

    rsx! {
        button {
            r#type: "button",
            "aria-label": "Toggle navigation",
            onclick: move |_| {
                let next = state().toggled();
                state.set(next);
            },
            ..attrs,
            {children}
        }
    }
}
