use yew::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlAudioElement, ScrollBehavior, ScrollIntoViewOptions};

use crate::audio::{Playback, START_VOLUME};
use crate::components::decorations::{FloatingHearts, Sparkles};
use crate::components::proposal_dialog::ProposalDialog;
use crate::components::scroll_reveal::ScrollReveal;
use crate::content;

const STORY_SECTION_ID: &str = "our-story";

#[function_component(Home)]
pub fn home() -> Html {
    let playback = use_state(|| Playback::NotStarted);
    let show_proposal = use_state(|| false);
    let audio_ref = use_node_ref();

    // Starts the track at the soft volume. If the browser still blocks
    // playback the rejection is swallowed and the next gesture retries.
    let request_start = {
        let playback = playback.clone();
        let audio_ref = audio_ref.clone();
        Callback::from(move |_: ()| {
            if playback.is_started() {
                return;
            }
            if let Some(audio) = audio_ref.cast::<HtmlAudioElement>() {
                audio.set_volume(START_VOLUME);
                if let Ok(promise) = audio.play() {
                    let playback = playback.clone();
                    spawn_local(async move {
                        if JsFuture::from(promise).await.is_ok() {
                            playback.set(playback.start_succeeded());
                        }
                    });
                }
            }
        })
    };

    let toggle_mute = {
        let playback = playback.clone();
        let audio_ref = audio_ref.clone();
        let request_start = request_start.clone();
        Callback::from(move |_: MouseEvent| {
            if !playback.is_started() {
                // The first press doubles as the autoplay unlock.
                request_start.emit(());
                return;
            }
            let next = playback.toggled();
            if let Some(audio) = audio_ref.cast::<HtmlAudioElement>() {
                audio.set_muted(next.is_muted());
            }
            playback.set(next);
        })
    };

    let begin_story = {
        let request_start = request_start.clone();
        Callback::from(move |_: MouseEvent| {
            request_start.emit(());
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                if let Some(section) = document.get_element_by_id(STORY_SECTION_ID) {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    section.scroll_into_view_with_scroll_into_view_options(&options);
                }
            }
        })
    };

    let open_proposal = {
        let show_proposal = show_proposal.clone();
        Callback::from(move |_: MouseEvent| show_proposal.set(true))
    };
    let close_proposal = {
        let show_proposal = show_proposal.clone();
        Callback::from(move |_: ()| show_proposal.set(false))
    };

    html! {
        <div class="page">
            <style>{PAGE_STYLE}</style>

            <audio ref={audio_ref} src={content::MUSIC_SRC} loop=true preload="auto" />
            <FloatingHearts />

            <button
                class="music-toggle"
                onclick={toggle_mute}
                aria-label="Toggle music"
            >
                { if playback.is_muted() { "🔇" } else { "🔊" } }
            </button>

            // Hero
            <section class="hero">
                <Sparkles />
                <div class="hero-inner">
                    <div class="hero-heart">{"❤"}</div>
                    <h1>
                        {"Happy Valentine's Day, "}
                        <span class="accent">{"Sweety"}</span>
                        {" ❤️"}
                    </h1>
                    <p class="hero-tagline">
                        {"From Hyderabad streets to forever dreams,"}
                        <br />
                        {"your Bittu is always yours."}
                    </p>
                    <p class="hero-signature">{"— Love, Sriram"}</p>
                    <button class="cta" onclick={begin_story}>
                        {"Begin Our Story ❤️"}
                    </button>
                </div>
            </section>

            // Story timeline
            <section id={STORY_SECTION_ID} class="story">
                <div class="narrow">
                    <ScrollReveal>
                        <h2>{"Our Story 💕"}</h2>
                    </ScrollReveal>
                    <div class="timeline">
                        <div class="timeline-rail"></div>
                        { for content::TIMELINE.iter().enumerate().map(|(i, event)| html! {
                            <ScrollReveal>
                                <div class={classes!("timeline-row", (i % 2 == 1).then(|| "flipped"))}>
                                    <div class="timeline-card">
                                        <h3>{event.title}</h3>
                                        <p>{event.body}</p>
                                    </div>
                                    <div class="timeline-dot"></div>
                                    <div class="timeline-spacer"></div>
                                </div>
                            </ScrollReveal>
                        }) }
                    </div>
                </div>
            </section>

            // Gallery
            <section class="gallery">
                <div class="wide">
                    <ScrollReveal>
                        <h2>{"Beautiful Memories 📸"}</h2>
                        <p class="section-sub">{"Every picture tells our story"}</p>
                    </ScrollReveal>
                    <div class="photo-grid">
                        { for content::PHOTOS.iter().map(|photo| html! {
                            <ScrollReveal>
                                <figure class="photo">
                                    <img src={photo.src} alt={photo.caption} loading="lazy" />
                                    <figcaption>{photo.caption}</figcaption>
                                </figure>
                            </ScrollReveal>
                        }) }
                    </div>
                </div>
            </section>

            // Video memory
            <section class="video-memory">
                <div class="narrow centered">
                    <ScrollReveal>
                        <h2>{"Our Favorite Moment ❤️"}</h2>
                        <p class="section-sub">{"Every second with you feels like home."}</p>
                        <div class="video-frame">
                            <video
                                controls=true
                                poster={content::VIDEO_POSTER}
                                preload="metadata"
                            >
                                <source src={content::VIDEO_SRC} type="video/mp4" />
                            </video>
                        </div>
                    </ScrollReveal>
                </div>
            </section>

            // Future dreams
            <section class="dreams">
                <div class="narrow centered">
                    <ScrollReveal>
                        <h2>{"Our Future Dreams 🌍"}</h2>
                    </ScrollReveal>
                    { for content::DREAMS.iter().map(|dream| html! {
                        <ScrollReveal>
                            <div class="dream">
                                <span class="dream-icon">{dream.icon}</span>
                                <p>{dream.text}</p>
                            </div>
                        </ScrollReveal>
                    }) }
                </div>
            </section>

            // Letter
            <section class="letter">
                <div class="narrow">
                    <ScrollReveal>
                        <h2>{"A Letter For You 💌"}</h2>
                        <div class="letter-card">
                            <p>{"Sweety,"}</p>
                            <p>
                                {"You are not just my girlfriend."}
                                <br />
                                {"You are my peace, my comfort, my happiness."}
                            </p>
                            <p>
                                {"Hyderabad gave me friendship."}
                                <br />
                                {"Vizag taught me distance."}
                                <br />
                                {"But you taught me what forever feels like."}
                            </p>
                            <p>
                                {"No matter where life takes us — whether it's busy cities, \
                                  quiet nights, or new beginnings — my favorite place will \
                                  always be next to you."}
                            </p>
                            <p class="letter-signoff">
                                {"Forever yours,"}
                                <br />
                                <span class="accent">{"Your Bittu ❤️"}</span>
                                <br />
                                {"— Sriram"}
                            </p>
                        </div>
                    </ScrollReveal>
                </div>
            </section>

            // Final proposal
            <section class="proposal">
                <Sparkles />
                <div class="narrow centered proposal-inner">
                    <ScrollReveal>
                        <div class="proposal-heart">{"❤"}</div>
                        <h2>{"Sweety, will you build this forever with your Bittu?"}</h2>
                        <button class="cta cta-large" onclick={open_proposal}>
                            {"Yes, Always Bittu ❤️"}
                        </button>
                    </ScrollReveal>
                </div>
            </section>

            <footer>
                <p>{"Made with love by Sriram, for his Sweety."}</p>
                <p class="footer-sub">{"Always your Bittu ❤️"}</p>
            </footer>

            <ProposalDialog open={*show_proposal} on_close={close_proposal} />
        </div>
    }
}

const PAGE_STYLE: &str = r#"
    :root {
        --rose: #e0526e;
        --rose-soft: rgba(224, 82, 110, 0.2);
        --ink: #3b2030;
        --ink-muted: #8a6a78;
        --paper: #fff7f9;
        --card: #ffffff;
        --border: rgba(224, 82, 110, 0.18);
    }
    * { box-sizing: border-box; }
    body {
        margin: 0;
        background: var(--paper);
        color: var(--ink);
        font-family: Georgia, 'Times New Roman', serif;
    }
    .page { position: relative; overflow-x: hidden; min-height: 100vh; }
    .narrow { max-width: 760px; margin: 0 auto; }
    .wide { max-width: 1100px; margin: 0 auto; }
    .centered { text-align: center; }
    .accent { color: var(--rose); }
    section { position: relative; padding: 96px 24px; }
    h1 { font-size: clamp(2.4rem, 6vw, 4.4rem); line-height: 1.15; margin: 0 0 24px; }
    h2 { font-size: clamp(1.8rem, 4vw, 3rem); text-align: center; margin: 0 0 16px; }
    .section-sub {
        text-align: center;
        font-style: italic;
        color: var(--ink-muted);
        margin: 0 0 56px;
        font-size: 1.1rem;
    }

    /* Floating hearts backdrop */
    .floating-hearts {
        position: fixed;
        inset: 0;
        pointer-events: none;
        overflow: hidden;
        z-index: 0;
    }
    .heart {
        position: absolute;
        color: var(--rose-soft);
        animation-name: float-heart;
        animation-iteration-count: infinite;
        animation-timing-function: ease-in-out;
    }
    @keyframes float-heart {
        0%, 100% { transform: translateY(0) rotate(-6deg); opacity: 0.5; }
        50% { transform: translateY(-42px) rotate(6deg); opacity: 1; }
    }

    /* Sparkles */
    .sparkles {
        position: absolute;
        inset: 0;
        pointer-events: none;
        overflow: hidden;
    }
    .sparkle {
        position: absolute;
        width: 4px;
        height: 4px;
        border-radius: 50%;
        background: rgba(224, 82, 110, 0.3);
        animation-name: sparkle;
        animation-iteration-count: infinite;
        animation-timing-function: ease-in-out;
    }
    @keyframes sparkle {
        0%, 100% { opacity: 0; transform: scale(0.4); }
        50% { opacity: 1; transform: scale(1.4); }
    }

    /* Scroll reveal */
    .reveal {
        opacity: 0;
        transform: translateY(40px);
        transition: opacity 0.8s ease-out, transform 0.8s ease-out;
    }
    .reveal.revealed {
        opacity: 1;
        transform: translateY(0);
    }

    /* Music toggle */
    .music-toggle {
        position: fixed;
        top: 24px;
        right: 24px;
        z-index: 50;
        width: 48px;
        height: 48px;
        border-radius: 50%;
        border: 1px solid var(--border);
        background: var(--rose-soft);
        backdrop-filter: blur(10px);
        font-size: 20px;
        cursor: pointer;
        animation: pulse-glow 2.4s ease-in-out infinite;
    }
    @keyframes pulse-glow {
        0%, 100% { box-shadow: 0 0 0 0 rgba(224, 82, 110, 0.35); }
        50% { box-shadow: 0 0 24px 6px rgba(224, 82, 110, 0.25); }
    }

    /* Hero */
    .hero {
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        text-align: center;
        background: linear-gradient(160deg, #ffe3ea 0%, var(--paper) 55%, #ffd6e0 100%);
        overflow: hidden;
    }
    .hero-inner {
        position: relative;
        z-index: 1;
        max-width: 760px;
        animation: hero-enter 1.2s ease-out both;
    }
    @keyframes hero-enter {
        from { opacity: 0; transform: scale(0.8); }
        to { opacity: 1; transform: scale(1); }
    }
    .hero-heart { color: var(--rose); font-size: 48px; margin-bottom: 16px; }
    .hero-tagline {
        font-size: 1.25rem;
        font-style: italic;
        color: var(--ink-muted);
        line-height: 1.6;
        margin: 0 0 12px;
    }
    .hero-signature { color: var(--ink-muted); font-size: 1.2rem; margin: 0 0 40px; }

    .cta {
        display: inline-flex;
        align-items: center;
        gap: 8px;
        padding: 16px 32px;
        border: none;
        border-radius: 999px;
        background: var(--rose);
        color: #fff;
        font-size: 1.1rem;
        font-family: inherit;
        cursor: pointer;
        transition: transform 0.3s ease;
        animation: pulse-glow 2.4s ease-in-out infinite;
    }
    .cta:hover { transform: scale(1.05); }
    .cta-large { padding: 20px 40px; font-size: 1.3rem; }

    /* Timeline */
    .story { background: var(--card); }
    .story h2 { margin-bottom: 64px; }
    .timeline { position: relative; }
    .timeline-rail {
        position: absolute;
        left: 50%;
        transform: translateX(-50%);
        width: 1px;
        height: 100%;
        background: var(--rose-soft);
    }
    .timeline-row { display: flex; align-items: flex-start; margin-bottom: 64px; }
    .timeline-row.flipped { flex-direction: row-reverse; }
    .timeline-card {
        width: 50%;
        background: var(--paper);
        border: 1px solid var(--border);
        border-radius: 16px;
        padding: 28px;
        box-shadow: 0 10px 24px rgba(59, 32, 48, 0.08);
    }
    .timeline-row .timeline-card { margin-right: 24px; text-align: right; }
    .timeline-row.flipped .timeline-card { margin-right: 0; margin-left: 24px; text-align: left; }
    .timeline-card h3 { color: var(--rose); margin: 0 0 12px; font-size: 1.35rem; }
    .timeline-card p { margin: 0; color: var(--ink-muted); line-height: 1.7; }
    .timeline-dot {
        width: 16px;
        height: 16px;
        border-radius: 50%;
        background: var(--rose);
        border: 4px solid var(--card);
        box-shadow: 0 2px 6px rgba(59, 32, 48, 0.2);
        flex-shrink: 0;
        margin-top: 28px;
    }
    .timeline-spacer { width: 50%; }
    @media (max-width: 640px) {
        .timeline-rail, .timeline-dot, .timeline-spacer { display: none; }
        .timeline-card, .timeline-row.flipped .timeline-card {
            width: 100%; margin: 0; text-align: left;
        }
    }

    /* Gallery */
    .gallery { background: #ffeef2; }
    .photo-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 20px;
    }
    @media (max-width: 820px) { .photo-grid { grid-template-columns: repeat(2, 1fr); } }
    .photo {
        position: relative;
        margin: 0;
        border-radius: 16px;
        overflow: hidden;
        aspect-ratio: 1 / 1;
        box-shadow: 0 10px 24px rgba(59, 32, 48, 0.12);
    }
    .photo img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        transition: transform 0.7s ease;
    }
    .photo:hover img { transform: scale(1.1); }
    .photo figcaption {
        position: absolute;
        inset: 0;
        display: flex;
        align-items: flex-end;
        padding: 16px;
        color: #fff;
        font-size: 0.9rem;
        background: linear-gradient(to top, rgba(59, 32, 48, 0.6), transparent);
        opacity: 0;
        transition: opacity 0.5s ease;
    }
    .photo:hover figcaption { opacity: 1; }

    /* Video */
    .video-memory { background: var(--card); }
    .video-frame {
        border-radius: 16px;
        overflow: hidden;
        border: 1px solid var(--border);
        box-shadow: 0 20px 48px rgba(59, 32, 48, 0.18);
    }
    .video-frame video { width: 100%; display: block; }

    /* Dreams */
    .dreams { background: #ffeef2; }
    .dreams h2 { margin-bottom: 48px; }
    .dream {
        display: flex;
        align-items: center;
        gap: 20px;
        margin-bottom: 28px;
        padding: 28px;
        background: var(--card);
        border: 1px solid var(--border);
        border-radius: 16px;
        box-shadow: 0 6px 16px rgba(59, 32, 48, 0.08);
        text-align: left;
    }
    .dream-icon { font-size: 2rem; flex-shrink: 0; }
    .dream p { margin: 0; line-height: 1.7; }

    /* Letter */
    .letter { background: var(--card); }
    .letter h2 { margin-bottom: 48px; }
    .letter-card {
        background: var(--paper);
        border: 1px solid var(--border);
        border-radius: 24px;
        padding: 48px;
        box-shadow: 0 20px 48px rgba(59, 32, 48, 0.12);
        font-size: 1.25rem;
        line-height: 1.8;
    }
    .letter-card p { margin: 0 0 24px; }
    .letter-signoff { margin-top: 40px; }

    /* Proposal */
    .proposal {
        min-height: 70vh;
        display: flex;
        align-items: center;
        background: linear-gradient(160deg, #47152b 0%, #2a0d1a 100%);
        color: #fff;
        overflow: hidden;
    }
    .proposal-inner { position: relative; z-index: 1; width: 100%; }
    .proposal-heart { color: var(--rose); font-size: 56px; margin-bottom: 24px; }
    .proposal h2 { color: #ffe3ea; line-height: 1.3; margin-bottom: 40px; }

    footer {
        padding: 32px 24px;
        background: var(--ink);
        color: rgba(255, 255, 255, 0.8);
        text-align: center;
    }
    footer p { margin: 0 0 4px; font-size: 1.1rem; }
    .footer-sub { color: rgba(255, 255, 255, 0.6); font-size: 1rem; }

    /* Proposal dialog */
    .dialog-backdrop {
        position: fixed;
        inset: 0;
        z-index: 100;
        display: flex;
        align-items: center;
        justify-content: center;
        background: rgba(42, 13, 26, 0.7);
        backdrop-filter: blur(4px);
    }
    .dialog-card {
        position: relative;
        max-width: 420px;
        width: calc(100% - 48px);
        background: var(--card);
        border: 1px solid rgba(224, 82, 110, 0.3);
        border-radius: 24px;
        padding: 48px 32px 40px;
        text-align: center;
        box-shadow: 0 24px 64px rgba(42, 13, 26, 0.4);
    }
    .dialog-close {
        position: absolute;
        top: 16px;
        right: 16px;
        width: 32px;
        height: 32px;
        border: none;
        border-radius: 50%;
        background: var(--rose-soft);
        color: var(--rose);
        font-size: 18px;
        line-height: 1;
        cursor: pointer;
    }
    .dialog-title { font-size: 2rem; margin-bottom: 16px; }
    .dialog-lead { font-size: 1.5rem; margin: 0 0 16px; }
    .dialog-line { color: var(--ink-muted); font-size: 1.1rem; margin: 0 0 8px; }
    .dialog-forever { color: var(--rose); font-weight: bold; font-size: 1.15rem; margin: 8px 0 0; }
"#;
