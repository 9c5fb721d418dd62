// src/templates/home.rs
use super::copy::*;
use super::{html_escape, notice, render_page, script_json};
use crate::home::embed::EmbeddedFrame;
use crate::home::{HomeBody, HomeState};
use crate::models::RenderContext;

/// Targets of the hero actions.
pub struct SiteLinks<'a> {
    pub console_path: &'a str,
    pub contact_email: &'a str,
}

pub fn render(state: &HomeState, ctx: &RenderContext, links: &SiteLinks) -> String {
    let content = match state.body(ctx) {
        HomeBody::Frame(frame) => format!(
            r#"<div class="custom-home">{}</div>"#,
            render_frame(&frame)
        ),
        HomeBody::Html(html) => format!(
            r#"<div class="custom-home"><div class="custom-home-markup">{}</div></div>"#,
            html
        ),
        HomeBody::Landing => format!(
            r#"<div class="landing">{}{}</div>"#,
            notice::render(&state.notice),
            render_landing(links)
        ),
    };

    render_page("Home", &content, ctx, &state.toasts())
}

pub fn render_frame(frame: &EmbeddedFrame) -> String {
    let posts = frame
        .ready_messages()
        .iter()
        .map(|message| {
            format!(
                "frame.contentWindow.postMessage({}, '*');",
                script_json(&message.to_json())
            )
        })
        .collect::<Vec<_>>()
        .join("\n            ");

    format!(
        r#"
    <iframe id="home-frame" class="home-frame" src="{}"></iframe>
    <script>
    (function () {{
        var frame = document.getElementById('home-frame');
        frame.addEventListener('load', function () {{
            {}
        }}, {{ once: true }});
    }})();
    </script>
    "#,
        html_escape(frame.src()),
        posts
    )
}

fn render_landing(links: &SiteLinks) -> String {
    [
        render_hero(links),
        render_qualifications(),
        render_core_values(),
        render_partners(),
        render_footer(links),
    ]
    .concat()
}

fn render_hero(links: &SiteLinks) -> String {
    let taglines = HERO_TAGLINES
        .iter()
        .map(|line| format!(r#"<p class="hero-tagline">{}</p>"#, line))
        .collect::<String>();

    format!(
        r#"
    <section class="hero">
        <div class="hero-glow hero-glow-left"></div>
        <div class="hero-glow hero-glow-right"></div>
        <div class="hero-inner">
            <div class="hero-badge"><span class="hero-badge-dot"></span>{}</div>
            <h1 class="hero-title">
                <span>{}</span><br>
                <span class="gradient-text">{}</span>
            </h1>
            {}
            <div class="hero-actions">
                <a href="{}" class="btn btn-primary">{}</a>
                <a href="mailto:{}" target="_blank" class="btn btn-secondary">{}</a>
            </div>
        </div>
    </section>
    "#,
        HERO_BADGE,
        HERO_TITLE,
        HERO_TITLE_ACCENT,
        taglines,
        html_escape(links.console_path),
        HERO_TRIAL_LABEL,
        html_escape(links.contact_email),
        HERO_ENQUIRY_LABEL
    )
}

fn render_qualifications() -> String {
    let cards = QUALIFICATIONS
        .iter()
        .map(|card| {
            format!(
                r#"
            <div class="qualification-card">
                <div class="qualification-icon">{}</div>
                <h3>{}</h3>
                <p>{}</p>
            </div>"#,
                card.icon, card.title, card.desc
            )
        })
        .collect::<String>();

    format!(
        r#"
    <section class="section section-dark" id="qualifications">
        <div class="section-inner">
            <div class="section-heading">
                <span class="section-title">{}</span>
                <span class="section-kicker">{}</span>
                <div class="section-rule"></div>
            </div>
            <div class="grid-3">{}
            </div>
        </div>
    </section>
    "#,
        QUALIFICATIONS_TITLE,
        html_escape(QUALIFICATIONS_SUBTITLE),
        cards
    )
}

fn render_core_values() -> String {
    let items = CORE_VALUES
        .iter()
        .map(|item| {
            format!(
                r#"
            <div class="core-value">
                <div class="core-value-icon">{}</div>
                <h3>{}</h3>
                <p class="core-value-subtitle">{}</p>
                <p>{}</p>
            </div>"#,
                item.icon, item.title, item.subtitle, item.desc
            )
        })
        .collect::<String>();

    format!(
        r#"
    <section class="section section-alt" id="core-values">
        <div class="section-inner">
            <div class="section-heading centered">
                <h2>{}</h2>
                <p>{}</p>
            </div>
            <div class="grid-3 wide-gap">{}
            </div>
        </div>
    </section>
    "#,
        CORE_VALUES_TITLE, CORE_VALUES_SUBTITLE, items
    )
}

fn render_partners() -> String {
    let badges = PARTNERS
        .iter()
        .map(|partner| format!(r#"<div class="partner-badge">{}</div>"#, partner))
        .collect::<Vec<_>>()
        .join("\n            ");

    format!(
        r#"
    <section class="section section-dark" id="partners">
        <div class="section-inner">
            <div class="section-heading centered">
                <h2>{}</h2>
                <p class="section-kicker">{}</p>
            </div>
            <div class="partners">
            {}
            </div>
        </div>
    </section>
    "#,
        PARTNERS_TITLE, PARTNERS_SUBTITLE, badges
    )
}

fn render_footer(links: &SiteLinks) -> String {
    let company = COMPANY_LINES
        .iter()
        .map(|line| format!(r#"<p class="footer-muted">{}</p>"#, line))
        .collect::<String>();
    let contact = CONTACT_LINES
        .iter()
        .map(|line| format!(r#"<p class="footer-muted">{}</p>"#, line))
        .collect::<String>();

    let columns = FOOTER_LINKS
        .iter()
        .map(|group| {
            let items = group
                .items
                .iter()
                .map(|item| format!(r#"<p class="footer-link">{}</p>"#, item))
                .collect::<String>();
            format!(r#"<div class="footer-column"><h4>{}</h4>{}</div>"#, group.title, items)
        })
        .collect::<String>();

    format!(
        r#"
    <footer class="site-footer">
        <div class="section-inner">
            <div class="footer-grid">
                <div class="footer-company">
                    <div class="footer-brand gradient-text">{}</div>
                    {}
                    {}
                    <p class="footer-muted">邮件：{}</p>
                </div>
                {}
            </div>
            <div class="footer-copyright">{}</div>
        </div>
    </footer>
    "#,
        BRAND,
        company,
        contact,
        html_escape(links.contact_email),
        columns,
        COPYRIGHT
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::home::{ContentState, NoticeState};
    use crate::models::{ThemeMode, Toast};

    const LINKS: SiteLinks<'static> = SiteLinks {
        console_path: "/console",
        contact_email: "support@whalehub.cn",
    };

    fn ctx() -> RenderContext {
        RenderContext {
            theme: ThemeMode::Dark,
            lang: "zh".to_string(),
        }
    }

    fn loaded(content: &str) -> HomeState {
        HomeState {
            notice: NoticeState::default(),
            content: ContentState {
                loaded: true,
                content: content.to_string(),
                toast: None,
            },
        }
    }

    #[test]
    fn test_landing_has_every_section() {
        let page = render(&loaded(""), &ctx(), &LINKS);

        assert!(page.contains(HERO_TITLE_ACCENT));
        for card in QUALIFICATIONS.iter() {
            assert!(page.contains(card.title));
        }
        for value in CORE_VALUES.iter() {
            assert!(page.contains(value.subtitle));
        }
        for partner in PARTNERS.iter() {
            assert!(page.contains(partner));
        }
        for group in FOOTER_LINKS.iter() {
            assert!(page.contains(group.title));
        }
        assert!(page.contains(r#"href="mailto:support@whalehub.cn""#));
        assert!(page.contains(r#"href="/console""#));
        assert!(!page.contains("<iframe"));
    }

    #[test]
    fn test_frame_posts_two_messages() {
        let page = render(&loaded("https://example.com/page"), &ctx(), &LINKS);

        assert!(page.contains(r#"src="https://example.com/page""#));
        assert_eq!(page.matches("postMessage(").count(), 2);
        let theme = page.find(r#"postMessage({"themeMode":"dark"}, '*')"#).unwrap();
        let lang = page.find(r#"postMessage({"lang":"zh"}, '*')"#).unwrap();
        assert!(theme < lang);
        assert!(!page.contains(HERO_TITLE_ACCENT));
    }

    #[test]
    fn test_markup_rendered_raw() {
        let page = render(&loaded("<h1>Hello</h1>\n"), &ctx(), &LINKS);

        assert!(page.contains(r#"<div class="custom-home-markup"><h1>Hello</h1>"#));
        assert!(!page.contains(HERO_TITLE_ACCENT));
    }

    #[test]
    fn test_notice_only_on_landing() {
        let mut state = loaded("");
        state.notice = NoticeState {
            visible: true,
            html: "<p>hello</p>".to_string(),
        };
        assert!(render(&state, &ctx(), &LINKS).contains("notice-modal"));

        state.content.content = "<p>custom</p>".to_string();
        assert!(!render(&state, &ctx(), &LINKS).contains("notice-modal"));
    }

    #[test]
    fn test_toast_with_landing() {
        let mut state = loaded("");
        state.content.toast = Some(Toast::error("content unavailable"));
        let page = render(&state, &ctx(), &LINKS);

        assert!(page.contains("content unavailable"));
        assert!(page.contains(HERO_TITLE_ACCENT));
    }
}
