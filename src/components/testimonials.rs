use yew::prelude::*;

use crate::content::TESTIMONIALS;

/// Which testimonial is on screen. Always a valid index while `len > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestimonialCarousel {
    active: usize,
    len: usize,
}

impl TestimonialCarousel {
    pub fn new(len: usize) -> Self {
        TestimonialCarousel { active: 0, len }
    }

    pub fn active(self) -> usize {
        self.active
    }

    /// Jump to `index`; out-of-range indices leave the carousel where it is.
    pub fn select(self, index: usize) -> Self {
        if index < self.len {
            TestimonialCarousel { active: index, ..self }
        } else {
            self
        }
    }

    pub fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        self.select((self.active + 1) % self.len)
    }

    pub fn previous(self) -> Self {
        if self.len == 0 {
            return self;
        }
        self.select((self.active + self.len - 1) % self.len)
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let carousel = use_state(|| TestimonialCarousel::new(TESTIMONIALS.len()));
    let active = carousel.active();

    let step = |forward: bool| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            carousel.set(if forward { carousel.next() } else { carousel.previous() });
        })
    };

    let Some(current) = TESTIMONIALS.get(active) else {
        return html! {};
    };

    html! {
        <div class="testimonial-card">
            <style>
                {r#"
                    .testimonial-card {
                        position: relative;
                        background: linear-gradient(135deg, rgba(255,255,255,0.1), rgba(255,255,255,0.05));
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 24px;
                        padding: 3rem;
                    }
                    .testimonial-quote-mark {
                        position: absolute;
                        top: -1.5rem;
                        left: -0.5rem;
                        font-size: 5rem;
                        color: rgba(147, 51, 234, 0.2);
                        line-height: 1;
                    }
                    .testimonial-body {
                        animation: testimonialIn 0.3s ease-out;
                    }
                    @keyframes testimonialIn {
                        from { opacity: 0; transform: translateX(20px); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                    .testimonial-stars {
                        color: #fbbf24;
                        margin-bottom: 1.5rem;
                        letter-spacing: 0.25rem;
                    }
                    .testimonial-content {
                        font-size: 1.5rem;
                        line-height: 1.6;
                        color: #e2e8f0;
                        margin-bottom: 2rem;
                    }
                    .testimonial-author {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }
                    .testimonial-author img {
                        width: 56px;
                        height: 56px;
                        border-radius: 50%;
                        object-fit: cover;
                        border: 2px solid rgba(168, 85, 247, 0.3);
                    }
                    .testimonial-name {
                        font-weight: 700;
                        font-size: 1.125rem;
                    }
                    .testimonial-role {
                        color: #94a3b8;
                        font-size: 0.875rem;
                    }
                    .testimonial-controls {
                        display: flex;
                        justify-content: center;
                        align-items: center;
                        gap: 0.5rem;
                        margin-top: 2rem;
                    }
                    .testimonial-dot {
                        width: 8px;
                        height: 8px;
                        border-radius: 9999px;
                        border: none;
                        background: rgba(255, 255, 255, 0.2);
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .testimonial-dot.active {
                        width: 32px;
                        background: #a855f7;
                    }
                    .testimonial-arrow {
                        background: none;
                        border: none;
                        color: #94a3b8;
                        cursor: pointer;
                        font-size: 1.25rem;
                    }
                    @media (max-width: 768px) {
                        .testimonial-card {
                            padding: 2rem;
                        }
                        .testimonial-content {
                            font-size: 1.2rem;
                        }
                    }
                "#}
            </style>
            <div class="testimonial-quote-mark">{"“"}</div>

            // keyed so the entry animation replays on every switch
            <div class="testimonial-body" key={active}>
                <div class="testimonial-stars">{"★★★★★"}</div>
                <p class="testimonial-content">{format!("\"{}\"", current.content)}</p>
                <div class="testimonial-author">
                    <img src={current.avatar} alt={current.name} />
                    <div>
                        <div class="testimonial-name">{current.name}</div>
                        <div class="testimonial-role">{current.role}</div>
                    </div>
                </div>
            </div>

            <div class="testimonial-controls">
                <button class="testimonial-arrow" onclick={step(false)}>{"‹"}</button>
                { for (0..TESTIMONIALS.len()).map(|index| {
                    let carousel = carousel.clone();
                    let onclick = Callback::from(move |_: MouseEvent| {
                        carousel.set(carousel.select(index));
                    });
                    html! {
                        <button
                            class={classes!("testimonial-dot", (index == active).then(|| "active"))}
                            {onclick}
                        />
                    }
                }) }
                <button class="testimonial-arrow" onclick={step(true)}>{"›"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_entry() {
        assert_eq!(TestimonialCarousel::new(3).active(), 0);
    }

    #[test]
    fn select_ignores_out_of_range() {
        let carousel = TestimonialCarousel::new(3).select(2);
        assert_eq!(carousel.active(), 2);
        assert_eq!(carousel.select(3).active(), 2);
    }

    #[test]
    fn next_and_previous_wrap() {
        let carousel = TestimonialCarousel::new(3);
        assert_eq!(carousel.previous().active(), 2);
        assert_eq!(carousel.select(2).next().active(), 0);
        assert_eq!(carousel.next().next().active(), 2);
    }

    #[test]
    fn empty_carousel_stays_put() {
        let carousel = TestimonialCarousel::new(0);
        assert_eq!(carousel.next().active(), 0);
        assert_eq!(carousel.previous().active(), 0);
        assert_eq!(carousel.select(0).active(), 0);
    }
}
