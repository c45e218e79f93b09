use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;

const EASE: &str = "cubic-bezier(0.22, 1, 0.36, 1)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealDirection {
    Up,
    Left,
    Right,
    /// Fades in place.
    None,
}

impl RevealDirection {
    /// Where the element sits before it is revealed.
    fn hidden_offset(self, distance: u32) -> (i64, i64) {
        let d = i64::from(distance);
        match self {
            RevealDirection::Up => (0, d),
            RevealDirection::Left => (-d, 0),
            RevealDirection::Right => (d, 0),
            RevealDirection::None => (0, 0),
        }
    }
}

/// An element counts as in view once its top edge is `margin` pixels above
/// the bottom of the viewport.
pub fn in_view(top: f64, viewport_height: f64, margin: f64) -> bool {
    top < viewport_height - margin
}

pub fn reveal_style(
    revealed: bool,
    direction: RevealDirection,
    distance: u32,
    duration_ms: u32,
    delay_ms: u32,
) -> String {
    let (x, y) = if revealed {
        (0, 0)
    } else {
        direction.hidden_offset(distance)
    };
    format!(
        "opacity: {}; transform: translate({}px, {}px); transition: opacity {}ms {} {}ms, transform {}ms {} {}ms;",
        if revealed { 1 } else { 0 },
        x,
        y,
        duration_ms,
        EASE,
        delay_ms,
        duration_ms,
        EASE,
        delay_ms,
    )
}

/// Flips to true the first time `node` scrolls into view and stays there.
#[hook]
fn use_reveal_once(node: NodeRef, margin: f64) -> bool {
    let revealed = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let (_, viewport_height) = use_window_size();

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |(_, viewport_height)| {
                if !*revealed {
                    if let Some(element) = node.cast::<Element>() {
                        let top = element.get_bounding_client_rect().top();
                        if in_view(top, *viewport_height, margin) {
                            revealed.set(true);
                        }
                    }
                }
                || ()
            },
            (scroll_y, viewport_height),
        );
    }

    *revealed
}

#[derive(Properties, PartialEq)]
pub struct ScrollRevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or(RevealDirection::Up)]
    pub direction: RevealDirection,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ScrollReveal)]
pub fn scroll_reveal(props: &ScrollRevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal_once(node.clone(), 100.0);

    html! {
        <div
            ref={node}
            class={props.class.clone()}
            style={reveal_style(revealed, props.direction, 40, 600, props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StaggerGridProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

/// Reveals its children one after another, 100ms apart.
#[function_component(StaggerGrid)]
pub fn stagger_grid(props: &StaggerGridProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal_once(node.clone(), 50.0);

    html! {
        <div ref={node} class={props.class.clone()}>
            { for props.children.iter().enumerate().map(|(i, child)| html! {
                <div
                    class="stagger-item"
                    style={reveal_style(revealed, RevealDirection::Up, 30, 500, stagger_delay(i))}
                >
                    { child }
                </div>
            }) }
        </div>
    }
}

pub fn stagger_delay(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX / 100).saturating_mul(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_in_view_after_margin() {
        assert!(!in_view(900.0, 800.0, 100.0));
        assert!(!in_view(700.0, 800.0, 100.0));
        assert!(in_view(699.0, 800.0, 100.0));
        assert!(in_view(-50.0, 800.0, 100.0));
    }

    #[test]
    fn hidden_style_offsets_by_direction() {
        let up = reveal_style(false, RevealDirection::Up, 40, 600, 0);
        assert!(up.starts_with("opacity: 0; transform: translate(0px, 40px);"));

        let left = reveal_style(false, RevealDirection::Left, 40, 600, 0);
        assert!(left.contains("translate(-40px, 0px)"));

        let right = reveal_style(false, RevealDirection::Right, 40, 600, 0);
        assert!(right.contains("translate(40px, 0px)"));
    }

    #[test]
    fn fade_only_reveal_does_not_move() {
        let hidden = reveal_style(false, RevealDirection::None, 40, 600, 0);
        assert!(hidden.starts_with("opacity: 0; transform: translate(0px, 0px);"));
    }

    #[test]
    fn revealed_style_is_in_place_with_delay() {
        let style = reveal_style(true, RevealDirection::Left, 40, 600, 200);
        assert!(style.starts_with("opacity: 1; transform: translate(0px, 0px);"));
        assert!(style.contains("opacity 600ms"));
        assert!(style.contains(" 200ms"));
    }

    #[test]
    fn stagger_steps_by_100ms() {
        assert_eq!(stagger_delay(0), 0);
        assert_eq!(stagger_delay(3), 300);
    }
}
