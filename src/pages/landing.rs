use chrono::Datelike;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::nav::{scroll_to_section, Nav};
use crate::components::reveal::{RevealDirection, ScrollReveal, StaggerGrid};
use crate::components::testimonials::Testimonials;
use crate::content::{
    Section, ABOUT_HIGHLIGHTS, BENEFITS, BRAND, FOOTER_SECTIONS, STAGES, STATS,
};

fn jump_to(section: Section) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(section);
    })
}

#[derive(Properties, PartialEq)]
struct SectionHeadingProps {
    eyebrow: &'static str,
    children: Children,
}

#[function_component(SectionHeading)]
fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <ScrollReveal class={classes!("section-heading")}>
            <span class="eyebrow">{props.eyebrow}</span>
            <h2>{ for props.children.iter() }</h2>
        </ScrollReveal>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-content">
                <div class="hero-badge fade-up">
                    <span class="accent">{"✦"}</span>
                    <span>{"Новая эра создания продуктов"}</span>
                </div>
                <h1 class="fade-up delay-1">
                    {"Создавайте "}
                    <span class="text-gradient">{"AI продукты"}</span>
                    <br class="desktop-only" />
                    <span class="muted">{" от идеи до запуска"}</span>
                </h1>
                <p class="hero-subtitle fade-up delay-2">
                    {"Пошаговый путь создания успешных AI-продуктов без сложного кода. Научитесь использовать искусственный интеллект для решения реальных проблем."}
                </p>
                <div class="hero-cta-group fade-up delay-3">
                    <button class="hero-cta" onclick={jump_to(Section::Contact)}>
                        {"Начать обучение ›"}
                    </button>
                    <button class="hero-secondary" onclick={jump_to(Section::Stages)}>
                        {"Узнать больше"}
                    </button>
                </div>
                <div class="hero-stats fade-up delay-5">
                    { for STATS.iter().map(|stat| html! {
                        <div class="stat">
                            <div class="stat-value">{stat.value}</div>
                            <div class="stat-label">{stat.label}</div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section id={Section::About.id()} class="page-section">
            <div class="container about-grid">
                <ScrollReveal direction={RevealDirection::Left}>
                    <div class="about-visual">
                        <div class="about-image">
                            <img
                                src="https://images.unsplash.com/photo-1677442136019-21780ecad995?w=800&q=80"
                                loading="lazy"
                                alt="AI Technology"
                            />
                        </div>
                        <div class="about-badge">
                            <div class="about-badge-title">{"AI"}</div>
                            <div class="about-badge-sub">{"Революция"}</div>
                        </div>
                    </div>
                </ScrollReveal>

                <div>
                    <ScrollReveal delay_ms={100}>
                        <span class="eyebrow">{"О проекте"}</span>
                        <h2>
                            {"Почему сейчас — "}
                            <span class="text-gradient">{"идеальное время"}</span>
                            {" для AI-продуктов?"}
                        </h2>
                    </ScrollReveal>
                    <ScrollReveal delay_ms={200}>
                        <p class="lead-text">
                            {"Искусственный интеллект открыл золотую жилу для создателей продуктов. То, что раньше требовало команды разработчиков и миллионы инвестиций, теперь доступно одному человеку с ноутбуком."}
                        </p>
                    </ScrollReveal>
                    <ScrollReveal delay_ms={300}>
                        <p class="lead-text">
                            {"Мы собрали опыт создания десятков AI-продуктов в структурированную систему, которая поможет вам избежать типичных ошибок и запустить продукт, который решает реальные проблемы людей."}
                        </p>
                    </ScrollReveal>
                    <ScrollReveal delay_ms={400} direction={RevealDirection::Right}>
                        <div class="pill-row">
                            { for ABOUT_HIGHLIGHTS.iter().map(|text| html! {
                                <div class="pill">
                                    <span class="check">{"✓"}</span>
                                    <span>{*text}</span>
                                </div>
                            }) }
                        </div>
                    </ScrollReveal>
                </div>
            </div>
        </section>
    }
}

#[function_component(Stages)]
fn stages() -> Html {
    html! {
        <section id={Section::Stages.id()} class="page-section tinted">
            <div class="container">
                <SectionHeading eyebrow="Путь создания">
                    {"4 этапа от "}
                    <span class="text-gradient">{"идеи"}</span>
                    {" до "}
                    <span class="text-gradient">{"прибыли"}</span>
                </SectionHeading>

                <StaggerGrid class={classes!("card-grid", "four")}>
                    { for STAGES.iter().map(|stage| html! {
                        <div class="card stage-card">
                            <div
                                class="icon-tile"
                                style={format!("background: linear-gradient(135deg, {}, {});", stage.colors.0, stage.colors.1)}
                            >
                                {stage.icon}
                            </div>
                            <div class="stage-number">{stage.number}</div>
                            <h3>{stage.title}</h3>
                            <p>{stage.description}</p>
                        </div>
                    }) }
                </StaggerGrid>

                <div class="timeline desktop-only">
                    { for (0..STAGES.len() - 1).map(|_| html! {
                        <div class="timeline-step">
                            <div class="timeline-line"></div>
                            <span class="accent">{"→"}</span>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Benefits)]
fn benefits() -> Html {
    html! {
        <section id={Section::Benefits.id()} class="page-section">
            <div class="container">
                <SectionHeading eyebrow="Преимущества">
                    {"Что вы "}
                    <span class="text-gradient">{"получите"}</span>
                </SectionHeading>

                <StaggerGrid class={classes!("card-grid", "three")}>
                    { for BENEFITS.iter().map(|benefit| html! {
                        <div class="card benefit-card">
                            <div class="icon-tile soft">{benefit.icon}</div>
                            <h3>{benefit.title}</h3>
                            <p>{benefit.description}</p>
                        </div>
                    }) }
                </StaggerGrid>
            </div>
        </section>
    }
}

#[function_component(CallToAction)]
fn call_to_action() -> Html {
    html! {
        <section class="page-section">
            <div class="container narrow">
                <ScrollReveal>
                    <div class="cta-frame">
                        <div class="cta-inner">
                            <h2>
                                {"Готовы создать свой "}
                                <span class="text-gradient">{"AI продукт?"}</span>
                            </h2>
                            <p class="lead-text">
                                {"Присоединяйтесь к тысячам создателей, которые уже строят будущее с помощью искусственного интеллекта."}
                            </p>
                            <button class="cta-button" onclick={jump_to(Section::Contact)}>
                                {"Получить доступ →"}
                            </button>
                        </div>
                    </div>
                </ScrollReveal>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="container footer-row">
                <div class="nav-logo">
                    <div class="logo-mark small">{"✦"}</div>
                    <span>{BRAND}</span>
                </div>
                <div class="footer-links">
                    { for FOOTER_SECTIONS.iter().map(|&section| html! {
                        <button class="nav-link" onclick={jump_to(section)}>{section.label()}</button>
                    }) }
                </div>
                <div class="copyright">
                    {format!("© {} {}. Все права защищены.", year, BRAND)}
                </div>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .landing-page {
                        min-height: 100vh;
                        background: #020617;
                        color: #fff;
                        overflow-x: hidden;
                    }
                    .glow-field {
                        position: fixed;
                        inset: 0;
                        pointer-events: none;
                    }
                    .glow-field div {
                        position: absolute;
                        border-radius: 50%;
                        filter: blur(128px);
                    }
                    .glow-a { top: 0; left: 25%; width: 384px; height: 384px; background: rgba(147, 51, 234, 0.2); }
                    .glow-b { bottom: 25%; right: 25%; width: 384px; height: 384px; background: rgba(37, 99, 235, 0.2); }
                    .glow-c { top: 50%; left: 50%; width: 600px; height: 600px; transform: translate(-50%, -50%); background: rgba(79, 70, 229, 0.1); }
                    .container {
                        position: relative;
                        max-width: 1152px;
                        margin: 0 auto;
                    }
                    .container.narrow {
                        max-width: 896px;
                    }
                    .text-gradient {
                        background: linear-gradient(90deg, #60a5fa, #c084fc, #f472b6);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .muted { color: #94a3b8; }
                    .accent { color: #c084fc; }
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 5rem 1.5rem 0;
                        text-align: center;
                    }
                    .hero-content { max-width: 1152px; }
                    .hero-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        color: #cbd5e1;
                        font-size: 0.875rem;
                        margin-bottom: 2rem;
                    }
                    .hero h1 {
                        font-size: clamp(2.25rem, 8vw, 6rem);
                        font-weight: 900;
                        letter-spacing: -0.05em;
                        line-height: 1.1;
                        margin-bottom: 1.5rem;
                    }
                    .hero-subtitle {
                        font-size: 1.25rem;
                        color: #94a3b8;
                        max-width: 42rem;
                        margin: 0 auto 2.5rem;
                        line-height: 1.6;
                    }
                    .hero-cta-group {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                        flex-wrap: wrap;
                    }
                    .hero-cta, .hero-secondary, .cta-button {
                        min-height: 56px;
                        min-width: 200px;
                        padding: 1rem 2rem;
                        border-radius: 9999px;
                        font-weight: 600;
                        font-size: 1.125rem;
                        cursor: pointer;
                        transition: all 0.2s;
                    }
                    .hero-cta {
                        border: none;
                        color: #fff;
                        background: linear-gradient(90deg, #2563eb, #9333ea);
                        box-shadow: 0 0 40px rgba(147, 51, 234, 0.4);
                    }
                    .hero-secondary {
                        background: none;
                        color: #cbd5e1;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .hero-secondary:hover { border-color: rgba(255, 255, 255, 0.3); color: #fff; }
                    .hero-stats {
                        margin: 5rem auto 0;
                        max-width: 48rem;
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                    }
                    .stat-value { font-size: 1.875rem; font-weight: 700; margin-bottom: 0.25rem; }
                    .stat-label { font-size: 0.875rem; color: #64748b; }
                    .fade-up { animation: fadeUp 0.6s ease-out both; }
                    .delay-1 { animation-delay: 0.1s; }
                    .delay-2 { animation-delay: 0.2s; }
                    .delay-3 { animation-delay: 0.3s; }
                    .delay-5 { animation-delay: 0.5s; }
                    @keyframes fadeUp {
                        from { opacity: 0; transform: translateY(30px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .page-section {
                        position: relative;
                        padding: 6rem 1.5rem;
                    }
                    .page-section.tinted { background: rgba(15, 23, 42, 0.5); }
                    .page-section h2 {
                        font-size: clamp(1.875rem, 5vw, 3rem);
                        font-weight: 700;
                        letter-spacing: -0.025em;
                        margin: 1rem 0 1.5rem;
                    }
                    .section-heading {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .eyebrow {
                        color: #c084fc;
                        font-weight: 600;
                        font-size: 0.875rem;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                    }
                    .lead-text {
                        color: #94a3b8;
                        font-size: 1.125rem;
                        line-height: 1.7;
                        margin-bottom: 1.5rem;
                    }
                    .about-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .about-visual { position: relative; }
                    .about-image {
                        aspect-ratio: 1;
                        border-radius: 24px;
                        overflow: hidden;
                        background: linear-gradient(135deg, rgba(37, 99, 235, 0.2), rgba(147, 51, 234, 0.2));
                        border: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .about-image img { width: 100%; height: 100%; object-fit: cover; opacity: 0.8; }
                    .about-badge {
                        position: absolute;
                        bottom: -1.5rem;
                        right: -1.5rem;
                        width: 192px;
                        height: 192px;
                        border-radius: 16px;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        background: linear-gradient(135deg, #9333ea, #2563eb);
                        box-shadow: 0 0 40px rgba(147, 51, 234, 0.4);
                    }
                    .about-badge-title { font-size: 2.25rem; font-weight: 700; }
                    .about-badge-sub { font-size: 0.875rem; opacity: 0.8; }
                    .pill-row { display: flex; flex-wrap: wrap; gap: 1rem; }
                    .pill {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        font-size: 0.875rem;
                    }
                    .check { color: #4ade80; }
                    .card-grid { display: grid; gap: 1.5rem; }
                    .card-grid.four { grid-template-columns: repeat(4, 1fr); }
                    .card-grid.three { grid-template-columns: repeat(3, 1fr); }
                    .stagger-item { height: 100%; }
                    .card {
                        position: relative;
                        height: 100%;
                        box-sizing: border-box;
                        padding: 1.5rem;
                        border-radius: 16px;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        transition: all 0.3s;
                    }
                    .card:hover { border-color: rgba(255, 255, 255, 0.2); transform: translateY(-4px); }
                    .card h3 { font-size: 1.25rem; font-weight: 700; margin-bottom: 0.75rem; }
                    .card p { color: #94a3b8; font-size: 0.875rem; line-height: 1.6; }
                    .benefit-card { background: linear-gradient(135deg, rgba(255, 255, 255, 0.05), transparent); }
                    .benefit-card:hover { border-color: rgba(168, 85, 247, 0.3); transform: none; }
                    .icon-tile {
                        width: 48px;
                        height: 48px;
                        border-radius: 12px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.5rem;
                        margin-bottom: 1rem;
                        transition: transform 0.3s;
                    }
                    .card:hover .icon-tile { transform: scale(1.1); }
                    .icon-tile.soft { background: rgba(147, 51, 234, 0.2); }
                    .stage-number {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        font-size: 2.25rem;
                        font-weight: 900;
                        color: rgba(255, 255, 255, 0.1);
                    }
                    .timeline { display: flex; justify-content: space-between; padding: 0 3rem; margin-top: 2rem; }
                    .timeline-step { flex: 1; display: flex; align-items: center; }
                    .timeline-line {
                        height: 2px;
                        width: 100%;
                        background: linear-gradient(90deg, rgba(147, 51, 234, 0.5), rgba(37, 99, 235, 0.5));
                    }
                    .cta-frame {
                        position: relative;
                        overflow: hidden;
                        border-radius: 24px;
                        padding: 4px;
                        background: linear-gradient(135deg, #2563eb, #9333ea, #db2777);
                    }
                    .cta-inner {
                        border-radius: 22px;
                        padding: 3rem;
                        text-align: center;
                        background: rgba(2, 6, 23, 0.9);
                    }
                    .cta-button {
                        border: none;
                        background: #fff;
                        color: #020617;
                        font-weight: 700;
                    }
                    .cta-button:hover { background: #e2e8f0; }
                    .contact-intro {
                        color: #94a3b8;
                        max-width: 36rem;
                        margin: 1rem auto 0;
                    }
                    .site-footer {
                        padding: 3rem 1.5rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                    }
                    .footer-row {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1.5rem;
                    }
                    .footer-links { display: flex; gap: 2rem; }
                    .logo-mark.small { width: 32px; height: 32px; border-radius: 8px; }
                    .copyright { font-size: 0.875rem; color: #64748b; }
                    @media (max-width: 1024px) {
                        .card-grid.four { grid-template-columns: repeat(2, 1fr); }
                        .card-grid.three { grid-template-columns: repeat(2, 1fr); }
                        .desktop-only { display: none; }
                    }
                    @media (max-width: 768px) {
                        .hero-stats { grid-template-columns: repeat(2, 1fr); }
                        .about-grid { grid-template-columns: 1fr; }
                        .card-grid.four, .card-grid.three { grid-template-columns: 1fr; }
                        .footer-row { flex-direction: column; }
                        .cta-inner { padding: 2rem; }
                    }
                "#}
            </style>

            <div class="glow-field">
                <div class="glow-a"></div>
                <div class="glow-b"></div>
                <div class="glow-c"></div>
            </div>

            <Nav />
            <Hero />
            <About />
            <Stages />
            <Benefits />

            <section id={Section::Testimonials.id()} class="page-section tinted">
                <div class="container narrow">
                    <SectionHeading eyebrow="Истории успеха">
                        {"Что говорят "}
                        <span class="text-gradient">{"выпускники"}</span>
                    </SectionHeading>
                    <ScrollReveal delay_ms={200} direction={RevealDirection::None}>
                        <Testimonials />
                    </ScrollReveal>
                </div>
            </section>

            <CallToAction />

            <section id={Section::Contact.id()} class="page-section tinted">
                <div class="container narrow">
                    <ScrollReveal class={classes!("section-heading")}>
                        <span class="eyebrow">{"Связаться"}</span>
                        <h2>
                            {"Начните "}
                            <span class="text-gradient">{"сегодня"}</span>
                        </h2>
                        <p class="contact-intro">
                            {"Оставьте заявку, и мы свяжемся с вами в течение 24 часов с персональным планом обучения"}
                        </p>
                    </ScrollReveal>
                    <ScrollReveal delay_ms={200}>
                        <ContactForm />
                    </ScrollReveal>
                </div>
            </section>

            <Footer />
        </div>
    }
}
