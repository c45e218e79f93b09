use log::warn;
use web_sys::{window, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::content::{Section, BRAND, NAV_SECTIONS};

/// Past this many pixels the header gets its solid background.
const SCROLLED_THRESHOLD: f64 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggle(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn close(self) -> Self {
        MenuState::Closed
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

/// Smooth-scroll to a section. Returns false if it isn't on the page.
pub fn scroll_to_section(section: Section) -> bool {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.id()));

    match element {
        Some(element) => {
            let mut options = ScrollIntoViewOptions::new();
            options.behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => {
            warn!("Section #{} not found", section.id());
            false
        }
    }
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_state(MenuState::default);
    let (_, scroll_y) = use_window_scroll();

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.set(menu.toggle());
        })
    };

    // Jumping to a section closes the mobile menu, but only if the jump happened
    let go_to = |section: Section| {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if scroll_to_section(section) {
                menu.set(menu.close());
            }
        })
    };

    html! {
        <header class={classes!("top-nav", is_scrolled(scroll_y).then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 50;
                        background: rgba(2, 6, 23, 0.8);
                        backdrop-filter: blur(24px);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                        transition: background 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(2, 6, 23, 0.95);
                    }
                    .nav-content {
                        max-width: 1152px;
                        margin: 0 auto;
                        padding: 1rem 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 1.25rem;
                        font-weight: 700;
                    }
                    .logo-mark {
                        width: 40px;
                        height: 40px;
                        border-radius: 12px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: linear-gradient(135deg, #3b82f6, #9333ea);
                    }
                    .nav-links {
                        display: flex;
                        gap: 2rem;
                    }
                    .nav-link {
                        background: none;
                        border: none;
                        color: #cbd5e1;
                        font-size: 0.875rem;
                        cursor: pointer;
                        transition: color 0.2s;
                    }
                    .nav-link:hover {
                        color: #fff;
                    }
                    .nav-cta {
                        background: #fff;
                        color: #020617;
                        border: none;
                        padding: 0.625rem 1.5rem;
                        border-radius: 9999px;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    .mobile-menu {
                        background: #0f172a;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                        padding: 1.5rem 1rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        animation: menuOpen 0.25s ease-out;
                    }
                    .mobile-menu .nav-link {
                        text-align: left;
                        font-size: 1rem;
                        padding: 0.5rem 0;
                    }
                    @keyframes menuOpen {
                        from { opacity: 0; transform: translateY(-8px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @media (max-width: 768px) {
                        .nav-links, .nav-content > .nav-cta {
                            display: none;
                        }
                        .burger-menu {
                            display: block;
                        }
                    }
                "#}
            </style>
            <nav class="nav-content">
                <div class="nav-logo">
                    <div class="logo-mark">{"✦"}</div>
                    <span>{BRAND}</span>
                </div>

                <div class="nav-links">
                    { for NAV_SECTIONS.iter().map(|&section| html! {
                        <button class="nav-link" onclick={go_to(section)}>{section.label()}</button>
                    }) }
                </div>

                <button class="nav-cta" onclick={go_to(Section::Contact)}>
                    {"Начать создавать"}
                </button>

                <button class="burger-menu" onclick={toggle_menu}>
                    { if menu.is_open() { "✕" } else { "☰" } }
                </button>
            </nav>

            if menu.is_open() {
                <div class="mobile-menu">
                    { for NAV_SECTIONS.iter().map(|&section| html! {
                        <button class="nav-link" onclick={go_to(section)}>{section.label()}</button>
                    }) }
                    <button class="nav-cta" onclick={go_to(Section::Contact)}>
                        {"Начать создавать"}
                    </button>
                </div>
            }
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_starts_closed_and_toggles() {
        let menu = MenuState::default();
        assert!(!menu.is_open());
        assert!(menu.toggle().is_open());
        assert_eq!(menu.toggle().toggle(), MenuState::Closed);
    }

    #[test]
    fn close_is_idempotent() {
        assert_eq!(MenuState::Open.close(), MenuState::Closed);
        assert_eq!(MenuState::Closed.close(), MenuState::Closed);
    }

    #[test]
    fn header_turns_solid_after_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(SCROLLED_THRESHOLD));
        assert!(is_scrolled(SCROLLED_THRESHOLD + 1.0));
    }
}
